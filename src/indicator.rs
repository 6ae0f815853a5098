use raylib::prelude::*;
use crate::marker::ActiveMarker;

/// One selectable indicator dot.
#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    pub center: Vector2,
    pub radius: f32,
    active: bool,
}

impl Dot {
    pub fn new(center: Vector2, radius: f32) -> Self {
        Self { center, radius, active: false }
    }

    pub fn contains(&self, point: Vector2) -> bool {
        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;
        // Generous hit area, small dots are fiddly to click
        let reach = self.radius * 2.0;
        dx * dx + dy * dy <= reach * reach
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        if self.active {
            d.draw_circle_v(self.center, self.radius, Color::WHITE);
        } else {
            d.draw_circle_lines(self.center.x as i32, self.center.y as i32, self.radius, Color::LIGHTGRAY);
        }
    }
}

impl ActiveMarker for Dot {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_area_is_twice_the_radius() {
        let dot = Dot::new(Vector2::new(100.0, 100.0), 5.0);
        assert!(dot.contains(Vector2::new(100.0, 100.0)));
        assert!(dot.contains(Vector2::new(110.0, 100.0)));
        assert!(!dot.contains(Vector2::new(111.0, 100.0)));
        assert!(!dot.contains(Vector2::new(108.0, 108.0)));
    }

    #[test]
    fn starts_inactive() {
        let mut dot = Dot::new(Vector2::new(0.0, 0.0), 5.0);
        assert!(!dot.is_active());
        dot.mark_active();
        assert!(dot.is_active());
    }
}
