use raylib::prelude::*;
use crate::error::{CarouselError, CarouselResult};
use crate::state::Trigger;

/// The "previous" and "next" buttons.
#[derive(Debug, Clone)]
pub struct Controls {
    prev: Rectangle,
    next: Rectangle,
}

impl Controls {
    pub fn new(prev: Rectangle, next: Rectangle) -> CarouselResult<Self> {
        if is_degenerate(&prev) {
            return Err(CarouselError::MissingControl("previous"));
        }
        if is_degenerate(&next) {
            return Err(CarouselError::MissingControl("next"));
        }
        Ok(Self { prev, next })
    }

    pub fn hit(&self, point: Vector2) -> Option<Trigger> {
        if contains(&self.next, point) {
            Some(Trigger::Next)
        } else if contains(&self.prev, point) {
            Some(Trigger::Prev)
        } else {
            None
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, hover: Vector2) {
        draw_button(d, &self.prev, contains(&self.prev, hover), false);
        draw_button(d, &self.next, contains(&self.next, hover), true);
    }
}

fn is_degenerate(rect: &Rectangle) -> bool {
    !(rect.width > 0.0 && rect.height > 0.0)
}

fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

fn draw_button(d: &mut RaylibDrawHandle, rect: &Rectangle, hovered: bool, points_right: bool) {
    let alpha = if hovered { 150 } else { 80 };
    d.draw_rectangle_rec(*rect, Color::new(0, 0, 0, alpha));

    let cx = rect.x + rect.width * 0.5;
    let cy = rect.y + rect.height * 0.5;
    let w = rect.width * 0.2;
    let h = rect.height * 0.2;

    // raylib wants counter-clockwise vertices
    if points_right {
        d.draw_triangle(
            Vector2::new(cx - w, cy - h),
            Vector2::new(cx - w, cy + h),
            Vector2::new(cx + w, cy),
            Color::WHITE,
        );
    } else {
        d.draw_triangle(
            Vector2::new(cx + w, cy - h),
            Vector2::new(cx - w, cy),
            Vector2::new(cx + w, cy + h),
            Color::WHITE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controls() -> Controls {
        Controls::new(
            Rectangle::new(0.0, 40.0, 40.0, 60.0),
            Rectangle::new(560.0, 40.0, 40.0, 60.0),
        )
        .unwrap()
    }

    #[test]
    fn clicks_route_to_buttons() {
        let c = controls();
        assert_eq!(c.hit(Vector2::new(20.0, 70.0)), Some(Trigger::Prev));
        assert_eq!(c.hit(Vector2::new(580.0, 70.0)), Some(Trigger::Next));
        assert_eq!(c.hit(Vector2::new(300.0, 70.0)), None);
        assert_eq!(c.hit(Vector2::new(20.0, 10.0)), None);
    }

    #[test]
    fn zero_sized_controls_are_missing() {
        let ok = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let empty = Rectangle::new(0.0, 0.0, 0.0, 10.0);
        assert!(matches!(
            Controls::new(empty, ok),
            Err(CarouselError::MissingControl("previous"))
        ));
        assert!(matches!(
            Controls::new(ok, empty),
            Err(CarouselError::MissingControl("next"))
        ));
    }
}
