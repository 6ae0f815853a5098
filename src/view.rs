//! Binds a carousel controller to its on-screen collaborators.
//!
//! The view gets its slides and geometry handed in; it never goes looking for
//! them. Clicks are hit-tested against the buttons and dots and turned into
//! [`Trigger`]s for the controller.

use raylib::prelude::*;
use tracing::{debug, warn};

use crate::carousel::{CarouselConfig, CarouselController};
use crate::controls::Controls;
use crate::error::{CarouselError, CarouselResult};
use crate::indicator::Dot;
use crate::layout::Layout;
use crate::marker::ActiveMarker;
use crate::slide::Slide;
use crate::state::Trigger;

pub struct CarouselView<S> {
    controller: CarouselController<S, Dot>,
    controls: Controls,
    viewport: Rectangle,
}

impl<S: ActiveMarker> CarouselView<S> {
    pub fn new(slides: Vec<S>, layout: Layout, config: CarouselConfig) -> CarouselResult<Self> {
        let controls = Controls::new(layout.prev, layout.next)?;
        if layout.dots.len() != slides.len() {
            return Err(CarouselError::MissingControl("indicator"));
        }

        let radius = layout.dot_radius;
        let controller = CarouselController::new(slides, |i| Dot::new(layout.dots[i], radius), config)?;

        Ok(Self {
            controller,
            controls,
            viewport: layout.viewport,
        })
    }

    pub fn controller(&self) -> &CarouselController<S, Dot> {
        &self.controller
    }

    pub fn hit_test(&self, point: Vector2) -> Option<Trigger> {
        self.controls.hit(point).or_else(|| {
            self.controller
                .indicators()
                .iter()
                .position(|dot| dot.contains(point))
                .map(Trigger::Indicator)
        })
    }

    /// Handle a mouse click; returns the new index if the click hit a control.
    pub fn click(&mut self, point: Vector2) -> Option<usize> {
        let trigger = self.hit_test(point)?;
        match self.controller.handle(trigger) {
            Ok(index) => Some(index),
            Err(e) => {
                warn!("Ignoring click: {}", e);
                None
            }
        }
    }

    pub fn update(&mut self, dt: f32) -> u64 {
        self.controller.update(dt)
    }

    pub fn toggle_auto_advance(&mut self) {
        if self.controller.auto_advance().is_running() {
            self.controller.stop_auto_advance();
        } else {
            self.controller.start_auto_advance();
        }
    }
}

impl CarouselView<Slide> {
    pub fn draw(&self, d: &mut RaylibDrawHandle, mouse: Vector2) {
        d.clear_background(Color::BLACK);

        for slide in self.controller.slides() {
            slide.draw(d, self.viewport);
        }

        self.controls.draw(d, mouse);

        for dot in self.controller.indicators() {
            dot.draw(d);
        }

        // Time left until the next auto-advance
        let timer = self.controller.auto_advance();
        if timer.is_running() {
            let bar_width = self.viewport.width * timer.progress();
            d.draw_rectangle_rec(
                Rectangle::new(self.viewport.x, self.viewport.y + self.viewport.height - 3.0, bar_width, 3.0),
                Color::GRAY,
            );
        }

        let current = self.controller.current();
        if let Some(slide) = self.controller.slides().get(current) {
            let caption = format!("{} / {}  {}", current + 1, self.controller.len(), slide.name);
            d.draw_text(&caption, 12, 12, 18, Color::LIGHTGRAY);
        }
    }

    pub fn log_current(&self) {
        let current = self.controller.current();
        if let Some(slide) = self.controller.slides().get(current) {
            debug!(index = current, name = %slide.name, "showing slide");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::tests::Flag;

    fn view(count: usize) -> CarouselView<Flag> {
        let layout = Layout::compute(800, 600, count);
        CarouselView::new(vec![Flag::default(); count], layout, CarouselConfig::default()).unwrap()
    }

    #[test]
    fn dots_follow_the_layout() {
        let layout = Layout::compute(800, 600, 4);
        let v = view(4);
        let centers: Vec<Vector2> = v.controller().indicators().iter().map(|d| d.center).collect();
        assert_eq!(centers, layout.dots);
        assert!(v.controller().indicators()[0].is_active());
        assert!(v.controller().indicators()[1..].iter().all(|d| !d.is_active()));
    }

    #[test]
    fn clicks_on_buttons_navigate() {
        let layout = Layout::compute(800, 600, 3);
        let mut v = view(3);
        let next = Vector2::new(layout.next.x + 1.0, layout.next.y + 1.0);
        let prev = Vector2::new(layout.prev.x + 1.0, layout.prev.y + 1.0);

        assert_eq!(v.click(next), Some(1));
        assert_eq!(v.click(prev), Some(0));
        assert_eq!(v.click(prev), Some(2));
    }

    #[test]
    fn click_on_dot_selects_it() {
        let layout = Layout::compute(800, 600, 3);
        let mut v = view(3);
        assert_eq!(v.hit_test(layout.dots[2]), Some(Trigger::Indicator(2)));
        assert_eq!(v.click(layout.dots[2]), Some(2));
        assert!(v.controller().slides()[2].is_active());
        assert!(v.controller().indicators()[2].is_active());
    }

    #[test]
    fn click_on_empty_space_does_nothing() {
        let mut v = view(3);
        assert_eq!(v.click(Vector2::new(400.0, 300.0)), None);
        assert_eq!(v.controller().current(), 0);
    }

    #[test]
    fn mismatched_layout_is_rejected() {
        let layout = Layout::compute(800, 600, 2);
        let result = CarouselView::new(vec![Flag::default(); 3], layout, CarouselConfig::default());
        assert!(matches!(result, Err(CarouselError::MissingControl("indicator"))));
    }

    #[test]
    fn update_drives_auto_advance() {
        let mut v = view(2);
        assert_eq!(v.update(5.0), 1);
        assert_eq!(v.controller().current(), 1);
    }

    #[test]
    fn toggle_pauses_and_resumes_auto_advance() {
        let mut v = view(2);
        v.toggle_auto_advance();
        assert_eq!(v.update(30.0), 0);
        v.toggle_auto_advance();
        assert_eq!(v.update(5.0), 1);
    }
}
