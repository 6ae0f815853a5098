use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use anyhow::{anyhow, Context, Result};
use exif::{In, Reader, Tag, Value};
use rand::seq::SliceRandom;
use raylib::prelude::*;
use tracing::debug;

use crate::error::{CarouselError, CarouselResult};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Image files in `dir_path`, sorted by file name (or shuffled).
pub fn load_image_paths(dir_path: &Path, shuffle: bool) -> CarouselResult<Vec<PathBuf>> {
    let io_err = |source: std::io::Error| CarouselError::Io { path: dir_path.to_path_buf(), source };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir_path).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && is_supported_image(&path) {
            paths.push(path);
        }
    }

    if paths.is_empty() {
        return Err(CarouselError::NoImages(dir_path.to_path_buf()));
    }

    if shuffle {
        paths.shuffle(&mut rand::rng());
    } else {
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }
    Ok(paths)
}

/// Quarter turns needed to display an image upright.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Rotation {
    None,
    Clockwise,        // orientation 6
    Half,             // orientation 3
    CounterClockwise, // orientation 8
}

impl Rotation {
    // Mirrored orientations (2, 4, 5, 7) are shown as-is
    pub fn from_orientation(orientation: u16) -> Self {
        match orientation {
            3 => Rotation::Half,
            6 => Rotation::Clockwise,
            8 => Rotation::CounterClockwise,
            _ => Rotation::None,
        }
    }
}

/// EXIF orientation tag of a JPEG, if it has one.
pub fn read_orientation(file_bytes: &[u8]) -> Option<u16> {
    let exif = Reader::new().read_from_container(&mut Cursor::new(file_bytes)).ok()?;
    let field = exif.get_field(Tag::Orientation, In::PRIMARY)?;
    match &field.value {
        Value::Short(values) => values.first().copied(),
        _ => None,
    }
}

/// Load an image, turn it upright according to its EXIF orientation and upload it as a texture.
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("Failed to read file {}", image_path.display()))?;

    let extension = image_path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();

    // EXIF is only reliable for JPEG
    let rotation = if extension == "jpg" || extension == "jpeg" {
        match read_orientation(&file_bytes) {
            Some(orientation) => Rotation::from_orientation(orientation),
            None => {
                debug!(path = %image_path.display(), "no EXIF orientation");
                Rotation::None
            }
        }
    } else {
        Rotation::None
    };

    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
        .map_err(|e| anyhow!("Failed to decode image {}: {}", image_path.display(), e))?;

    match rotation {
        Rotation::Half => {
            image.rotate_cw();
            image.rotate_cw();
        }
        Rotation::Clockwise => image.rotate_cw(),
        Rotation::CounterClockwise => image.rotate_ccw(),
        Rotation::None => {}
    }
    if rotation != Rotation::None {
        debug!(?rotation, path = %image_path.display(), "applied EXIF rotation");
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("Failed to create texture for {}: {}", image_path.display(), e))?;

    Ok(texture)
}
