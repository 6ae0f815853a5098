use std::path::PathBuf;
use std::time::Duration;
use anyhow::{bail, Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::{info, warn};

mod carousel;
mod constants;
mod controls;
mod error;
mod indicator;
mod layout;
mod marker;
mod slide;
mod state;
mod texture_loader;
mod timer;
mod view;

use crate::carousel::CarouselConfig;
use crate::constants::*;
use crate::layout::Layout;
use crate::slide::Slide;
use crate::texture_loader::{load_image_paths, load_texture_with_exif_rotation};
use crate::view::CarouselView;

#[derive(Parser)]
#[command(name = "carousel")]
#[command(about = "Auto-advancing image carousel", long_about = None)]
struct Cli {
    /// Directory holding the slide images
    image_dir: PathBuf,

    /// Auto-advance period in milliseconds
    #[arg(long, default_value_t = AUTO_ADVANCE_MS)]
    interval_ms: u64,

    /// Only navigate on clicks
    #[arg(long, default_value_t = false)]
    no_auto_advance: bool,

    /// Show slides in random order instead of by file name
    #[arg(long, default_value_t = false)]
    shuffle: bool,

    /// Window width
    #[arg(long, default_value_t = WINDOW_WIDTH)]
    width: i32,

    /// Window height
    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    height: i32,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    } else {
        tracing_subscriber::fmt().init();
    }

    let image_paths = load_image_paths(&cli.image_dir, cli.shuffle)
        .with_context(|| format!("Error loading images from '{}'", cli.image_dir.display()))?;
    info!("Found {} images in {}", image_paths.len(), cli.image_dir.display());

    let (mut rl, thread) = raylib::init()
        .size(cli.width, cli.height)
        .title("Carousel")
        .vsync()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Slides ---
    let mut slides = Vec::new();
    for path in image_paths {
        match load_texture_with_exif_rotation(&mut rl, &thread, &path) {
            Ok(texture) => {
                let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
                slides.push(Slide::new(texture, name));
            }
            Err(e) => warn!("Skipping {}: {:#}", path.display(), e),
        }
    }
    if slides.is_empty() {
        bail!("No slides were created successfully");
    }

    let config = CarouselConfig {
        interval: Duration::from_millis(cli.interval_ms),
        auto_advance: !cli.no_auto_advance,
    };
    let layout = Layout::compute(rl.get_screen_width(), rl.get_screen_height(), slides.len());
    let mut carousel = CarouselView::new(slides, layout, config).context("Failed to set up carousel")?;
    log_auto_advance(&carousel);
    carousel.log_current();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let mouse = rl.get_mouse_position();

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) && carousel.click(mouse).is_some() {
            carousel.log_current();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_P) {
            carousel.toggle_auto_advance();
            log_auto_advance(&carousel);
        }
        if carousel.update(dt) > 0 {
            carousel.log_current();
        }

        let mut d = rl.begin_drawing(&thread);
        carousel.draw(&mut d, mouse);
    }

    Ok(())
}

fn log_auto_advance(carousel: &CarouselView<Slide>) {
    let controller = carousel.controller();
    let timer = controller.auto_advance();
    if timer.is_running() {
        info!("Showing {} slides, auto-advance every {:?}", controller.len(), timer.interval());
    } else {
        info!("Showing {} slides, auto-advance off", controller.len());
    }
}
