pub const WINDOW_WIDTH: i32 = 1280;           // Default window width
pub const WINDOW_HEIGHT: i32 = 720;           // Default window height
pub const FPS: u32 = 60;                      // Frames per second

pub const AUTO_ADVANCE_MS: u64 = 5000;        // Auto-advance period (milliseconds)

pub const SLIDE_FILL: f32 = 0.9;              // Share of the viewport a slide may cover

pub const DOT_RADIUS: f32 = 6.0;              // Indicator dot radius (pixels)
pub const DOT_SPACING: f32 = 24.0;            // Distance between dot centers (pixels)
pub const DOT_MARGIN_BOTTOM: f32 = 28.0;      // Dot strip distance from the bottom edge

pub const BUTTON_WIDTH: f32 = 48.0;           // Next/prev button width
pub const BUTTON_HEIGHT: f32 = 72.0;          // Next/prev button height
pub const BUTTON_MARGIN: f32 = 16.0;          // Button distance from the side edges
