use raylib::prelude::*;
use crate::constants::SLIDE_FILL;
use crate::marker::ActiveMarker;

pub struct Slide {
    image: Texture2D,
    pub name: String,
    active: bool,
}

impl Slide {
    pub fn new(image: Texture2D, name: impl Into<String>) -> Self {
        Self {
            image,
            name: name.into(),
            active: false,
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, viewport: Rectangle) {
        if !self.is_active() {
            return;
        }

        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;
        let scale = fit_scale(tex_width, tex_height, viewport.width, viewport.height);

        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        // Centered in the viewport
        let dest = Rectangle::new(
            viewport.x + (viewport.width - scaled_width) * 0.5,
            viewport.y + (viewport.height - scaled_height) * 0.5,
            scaled_width,
            scaled_height,
        );

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}

impl ActiveMarker for Slide {
    fn mark_active(&mut self) {
        self.active = true;
    }

    fn mark_inactive(&mut self) {
        self.active = false;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

/// Scale that fits a `width` x `height` image inside the viewport share given
/// by `SLIDE_FILL`. Images are shrunk, never enlarged.
pub fn fit_scale(width: f32, height: f32, view_width: f32, view_height: f32) -> f32 {
    if width <= 0.0 || height <= 0.0 {
        return 1.0;
    }
    let max_width = view_width * SLIDE_FILL;
    let max_height = view_height * SLIDE_FILL;
    (max_width / width).min(max_height / height).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_images_keep_their_size() {
        assert_eq!(fit_scale(100.0, 50.0, 1000.0, 1000.0), 1.0);
    }

    #[test]
    fn wide_image_is_bounded_by_width() {
        // 90% of 1000 = 900
        assert_eq!(fit_scale(1800.0, 100.0, 1000.0, 1000.0), 0.5);
    }

    #[test]
    fn tall_image_is_bounded_by_height() {
        assert_eq!(fit_scale(100.0, 1800.0, 1000.0, 1000.0), 0.5);
    }

    #[test]
    fn landscape_image_in_short_viewport_is_bounded_by_height() {
        // width alone would give 0.9, height needs 0.45
        assert_eq!(fit_scale(1000.0, 1000.0, 1000.0, 500.0), 0.45);
    }

    #[test]
    fn degenerate_texture_is_left_alone() {
        assert_eq!(fit_scale(0.0, 10.0, 100.0, 100.0), 1.0);
    }
}
