use std::path::PathBuf;
use thiserror::Error;

/// Carousel error type
#[derive(Error, Debug)]
pub enum CarouselError {
    #[error("carousel needs at least one slide")]
    NoSlides,
    #[error("slide index {index} out of range (total {total})")]
    OutOfRange { index: usize, total: usize },
    #[error("auto-advance interval must be greater than zero")]
    InvalidInterval,
    #[error("missing {0} control")]
    MissingControl(&'static str),
    #[error("no image files found in directory: {}", .0.display())]
    NoImages(PathBuf),
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type CarouselResult<T> = Result<T, CarouselError>;
