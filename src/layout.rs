use raylib::prelude::*;
use crate::constants::*;

/// Screen geometry of the carousel: where slides, buttons and dots go.
#[derive(Debug, Clone)]
pub struct Layout {
    pub viewport: Rectangle,
    pub prev: Rectangle,
    pub next: Rectangle,
    pub dots: Vec<Vector2>,
    pub dot_radius: f32,
}

impl Layout {
    pub fn compute(width: i32, height: i32, slide_count: usize) -> Self {
        let width = width as f32;
        let height = height as f32;

        let button_y = (height - BUTTON_HEIGHT) * 0.5;
        let prev = Rectangle::new(BUTTON_MARGIN, button_y, BUTTON_WIDTH, BUTTON_HEIGHT);
        let next = Rectangle::new(width - BUTTON_MARGIN - BUTTON_WIDTH, button_y, BUTTON_WIDTH, BUTTON_HEIGHT);

        // Dot strip centered between the buttons near the bottom edge, squeezed
        // to fit; hit areas (twice the radius) never overlap
        let gaps = slide_count.saturating_sub(1) as f32;
        let available = (width - 2.0 * (BUTTON_MARGIN + BUTTON_WIDTH)).max(0.0);
        let spacing = if gaps > 0.0 { DOT_SPACING.min(available / gaps) } else { DOT_SPACING };
        let dot_radius = DOT_RADIUS.min(spacing * 0.25);
        let strip_width = gaps * spacing;
        let first_x = (width - strip_width) * 0.5;
        let dot_y = height - DOT_MARGIN_BOTTOM;
        let dots = (0..slide_count)
            .map(|i| Vector2::new(first_x + i as f32 * spacing, dot_y))
            .collect();

        Self {
            viewport: Rectangle::new(0.0, 0.0, width, height),
            prev,
            next,
            dots,
            dot_radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_dot_is_centered() {
        let layout = Layout::compute(800, 600, 1);
        assert_eq!(layout.dots, vec![Vector2::new(400.0, 600.0 - DOT_MARGIN_BOTTOM)]);
    }

    #[test]
    fn dots_are_evenly_spaced_around_the_center() {
        let layout = Layout::compute(800, 600, 3);
        let xs: Vec<f32> = layout.dots.iter().map(|d| d.x).collect();
        assert_eq!(xs, vec![400.0 - DOT_SPACING, 400.0, 400.0 + DOT_SPACING]);
    }

    #[test]
    fn buttons_sit_on_opposite_edges() {
        let layout = Layout::compute(800, 600, 2);
        assert_eq!(layout.prev.x, BUTTON_MARGIN);
        assert_eq!(layout.next.x + layout.next.width, 800.0 - BUTTON_MARGIN);
        assert_eq!(layout.prev.y, layout.next.y);
        assert_eq!(layout.prev.y + BUTTON_HEIGHT * 0.5, 300.0);
    }

    #[test]
    fn large_directories_fit_between_the_buttons() {
        for count in [55, 100, 1000] {
            let layout = Layout::compute(1280, 720, count);
            assert_eq!(layout.dots.len(), count);
            for dot in &layout.dots {
                // rounding slack
                assert!(dot.x >= layout.prev.x + layout.prev.width - 0.01, "dot at {} of {}", dot.x, count);
                assert!(dot.x <= layout.next.x + 0.01, "dot at {} of {}", dot.x, count);
            }
            let spacing = layout.dots[1].x - layout.dots[0].x;
            assert!(spacing >= 4.0 * layout.dot_radius * 0.999);
        }
    }

    #[test]
    fn few_dots_keep_the_default_size() {
        let layout = Layout::compute(1280, 720, 5);
        assert_eq!(layout.dot_radius, DOT_RADIUS);
        assert_eq!(layout.dots[1].x - layout.dots[0].x, DOT_SPACING);
    }
}
