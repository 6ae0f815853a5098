//! Carousel controller.
//!
//! Owns the current slide index over a fixed ring of slides, the matching ring
//! of indicators, and the auto-advance timer. Every navigation path ends in
//! [`CarouselController::select_slide`], which keeps exactly one slide and one
//! indicator active, both at the current index.

use std::time::Duration;
use tracing::debug;

use crate::constants::AUTO_ADVANCE_MS;
use crate::error::{CarouselError, CarouselResult};
use crate::marker::ActiveMarker;
use crate::state::{Direction, Trigger};
use crate::timer::AutoAdvance;

#[derive(Debug, Clone)]
pub struct CarouselConfig {
    pub interval: Duration,
    pub auto_advance: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(AUTO_ADVANCE_MS),
            auto_advance: true,
        }
    }
}

pub struct CarouselController<S, I> {
    slides: Vec<S>,
    indicators: Vec<I>,
    current: usize,
    timer: AutoAdvance,
}

impl<S: ActiveMarker, I: ActiveMarker> CarouselController<S, I> {
    /// Build the controller, creating one indicator per slide with `make_indicator`.
    ///
    /// Slide 0 and indicator 0 start active.
    pub fn new<F>(slides: Vec<S>, make_indicator: F, config: CarouselConfig) -> CarouselResult<Self>
    where
        F: FnMut(usize) -> I,
    {
        if slides.is_empty() {
            return Err(CarouselError::NoSlides);
        }
        let indicators = (0..slides.len()).map(make_indicator).collect();

        let mut timer = AutoAdvance::new(config.interval)?;
        if config.auto_advance {
            timer.start();
        }

        let mut controller = Self {
            slides,
            indicators,
            current: 0,
            timer,
        };
        controller.select_slide(0)?;
        debug!(total = controller.len(), auto_advance = config.auto_advance, "carousel initialized");
        Ok(controller)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[S] {
        &self.slides
    }

    pub fn indicators(&self) -> &[I] {
        &self.indicators
    }

    pub fn auto_advance(&self) -> &AutoAdvance {
        &self.timer
    }

    pub fn start_auto_advance(&mut self) {
        self.timer.start();
    }

    pub fn stop_auto_advance(&mut self) {
        self.timer.stop();
    }

    /// Show the slide at `index`.
    pub fn select_slide(&mut self, index: usize) -> CarouselResult<()> {
        let total = self.len();
        if index >= total {
            return Err(CarouselError::OutOfRange { index, total });
        }
        self.activate(index);
        Ok(())
    }

    // Callers guarantee index < len
    fn activate(&mut self, index: usize) {
        for slide in self.slides.iter_mut() {
            slide.mark_inactive();
        }
        for indicator in self.indicators.iter_mut() {
            indicator.mark_inactive();
        }
        self.slides[index].mark_active();
        self.indicators[index].mark_active();
        self.current = index;
    }

    /// Move one slide in `direction`, wrapping at both ends.
    pub fn advance(&mut self, direction: Direction) -> usize {
        let total = self.len() as isize;
        let next = (self.current as isize + direction.offset() + total).rem_euclid(total) as usize;
        self.activate(next);
        next
    }

    /// Apply a navigation trigger and return the new current index.
    pub fn handle(&mut self, trigger: Trigger) -> CarouselResult<usize> {
        match trigger {
            Trigger::Next | Trigger::Tick => {
                self.advance(Direction::Forward);
            }
            Trigger::Prev => {
                self.advance(Direction::Backward);
            }
            Trigger::Indicator(index) => self.select_slide(index)?,
        }
        debug!(?trigger, current = self.current, "carousel navigated");
        Ok(self.current)
    }

    /// Feed frame time to the auto-advance timer. Manual navigation never
    /// resets it, so ticks keep a fixed cadence.
    ///
    /// Several elapsed periods land on the slide that many steps ahead.
    pub fn update(&mut self, dt: f32) -> u64 {
        let fired = self.timer.tick(dt);
        if fired > 0 {
            let total = self.len() as u64;
            let next = (self.current as u64 + fired % total) % total;
            self.activate(next as usize);
            debug!(fired, current = self.current, "auto-advanced");
        }
        fired
    }
}
