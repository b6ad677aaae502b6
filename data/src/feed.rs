//! Streaming source for live lines.
//!
//! A [`LiveFeed`] is polled from the UI thread (a timer tick in the host)
//! and yields one point per tick in increasing x. It never yields past the
//! data range's `max_x`.

use crate::chart::{DataRange, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedState {
    Running,
    /// The x counter passed the end of the data range.
    Exhausted,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct LiveFeed {
    x: f32,
    step: f32,
    max_x: f32,
    state: FeedState,
    source: fn(f32) -> f32,
}

impl LiveFeed {
    /// Starts at the range's `min_x`; `source` maps x to the sampled y.
    ///
    /// A non-positive or non-finite `step` would never reach `max_x`, such
    /// feeds start out exhausted.
    pub fn new(range: &DataRange, step: f32, source: fn(f32) -> f32) -> Self {
        let state = if step.is_finite() && step > 0.0 {
            FeedState::Running
        } else {
            log::warn!("Live feed step {step} never advances, not starting");
            FeedState::Exhausted
        };

        Self {
            x: range.min_x(),
            step,
            max_x: range.max_x(),
            state,
            source,
        }
    }

    pub fn state(&self) -> FeedState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == FeedState::Running
    }

    pub fn cancel(&mut self) {
        if self.is_running() {
            log::debug!("Live feed cancelled at x={}", self.x);
            self.state = FeedState::Cancelled;
        }
    }

    /// Next sample, or `None` once cancelled or past the end of the range.
    pub fn tick(&mut self) -> Option<Point> {
        if !self.is_running() {
            return None;
        }

        if self.x > self.max_x {
            log::info!("Live feed reached the end of the range at x={}", self.max_x);
            self.state = FeedState::Exhausted;
            return None;
        }

        let point = Point::new(self.x, (self.source)(self.x));
        self.x += self.step;
        Some(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double(x: f32) -> f32 {
        x * 2.0
    }

    #[test]
    fn stops_at_end_of_range() {
        let range = DataRange::new(0.0..=3.0, -10.0..=10.0).unwrap();
        let mut feed = LiveFeed::new(&range, 1.0, double);

        let points: Vec<Point> = std::iter::from_fn(|| feed.tick()).collect();

        assert_eq!(
            points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 2.0),
                Point::new(2.0, 4.0),
                Point::new(3.0, 6.0),
            ]
        );
        assert_eq!(feed.state(), FeedState::Exhausted);
        assert_eq!(feed.tick(), None);
    }

    #[test]
    fn cancel_stops_ticks() {
        let mut feed = LiveFeed::new(&DataRange::default(), 1.0, double);
        assert!(feed.tick().is_some());

        feed.cancel();

        assert_eq!(feed.state(), FeedState::Cancelled);
        assert_eq!(feed.tick(), None);
    }

    #[test]
    fn zero_step_never_runs() {
        let mut feed = LiveFeed::new(&DataRange::default(), 0.0, double);
        assert_eq!(feed.state(), FeedState::Exhausted);
        assert_eq!(feed.tick(), None);
    }
}
