//! Drag-to-inspect state machine.
//!
//! The host forwards raw pointer events as [`Touch`]es in drawable-local
//! coordinates; the [`Tracker`] decides which of them start, continue or
//! end an inspection and reports that as a [`Transition`].

use iced_core::Size;

use super::ScreenPoint;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Touch {
    Down(ScreenPoint),
    Moved(ScreenPoint),
    Up,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Query nearest points at this position and move the guide there.
    Track(ScreenPoint),
    /// Clear the guide; the user let go.
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// `position` is the raw touch; `guide_x` is its x kept inside the
    /// drawable so the tracking guide stays visible.
    Dragging { position: ScreenPoint, guide_x: f32 },
}

#[derive(Debug, Clone, Default)]
pub struct Tracker {
    state: DragState,
    enabled: bool,
}

impl Tracker {
    pub fn new(enabled: bool) -> Self {
        Self {
            state: DragState::Idle,
            enabled,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Screen x of the vertical tracking guide, if one is shown.
    pub fn guide_x(&self) -> Option<f32> {
        match self.state {
            DragState::Dragging { guide_x, .. } => Some(guide_x),
            DragState::Idle => None,
        }
    }

    /// Attaches or detaches touch capture. Detaching mid-drag ends the drag.
    pub fn set_enabled(&mut self, enabled: bool) -> Option<Transition> {
        self.enabled = enabled;

        if !enabled && self.is_dragging() {
            self.state = DragState::Idle;
            return Some(Transition::Stop);
        }
        None
    }

    pub fn handle(&mut self, touch: Touch, bounds: Size) -> Option<Transition> {
        if !self.enabled {
            return None;
        }

        match (self.state, touch) {
            (DragState::Idle, Touch::Down(position)) => {
                if !contains(bounds, position) {
                    return None;
                }
                // the first contact already counts, no drag threshold
                self.state = DragState::Dragging {
                    position,
                    guide_x: position.x,
                };
                Some(Transition::Track(position))
            }
            (DragState::Dragging { .. }, Touch::Down(position) | Touch::Moved(position)) => {
                self.state = DragState::Dragging {
                    position,
                    guide_x: guide_x(position.x, bounds.width),
                };
                Some(Transition::Track(position))
            }
            (DragState::Dragging { .. }, Touch::Up | Touch::Cancel) => {
                self.state = DragState::Idle;
                Some(Transition::Stop)
            }
            (DragState::Idle, Touch::Moved(_) | Touch::Up | Touch::Cancel) => None,
        }
    }
}

// not f32::clamp, which panics on a negative or NaN width
fn guide_x(x: f32, width: f32) -> f32 {
    x.min(width).max(0.0)
}

fn contains(bounds: Size, p: ScreenPoint) -> bool {
    p.x >= 0.0 && p.x <= bounds.width && p.y >= 0.0 && p.y <= bounds.height
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Size {
        Size::new(600.0, 200.0)
    }

    #[test]
    fn first_touch_tracks_immediately() {
        let mut tracker = Tracker::new(true);
        let at = ScreenPoint::new(150.0, 40.0);

        assert_eq!(
            tracker.handle(Touch::Down(at), bounds()),
            Some(Transition::Track(at))
        );
        assert_eq!(tracker.guide_x(), Some(150.0));
    }

    #[test]
    fn full_drag_cycle() {
        let mut tracker = Tracker::new(true);

        tracker.handle(Touch::Down(ScreenPoint::new(10.0, 10.0)), bounds());
        assert_eq!(
            tracker.handle(Touch::Moved(ScreenPoint::new(20.0, 15.0)), bounds()),
            Some(Transition::Track(ScreenPoint::new(20.0, 15.0)))
        );
        assert_eq!(tracker.handle(Touch::Up, bounds()), Some(Transition::Stop));
        assert_eq!(tracker.state(), DragState::Idle);
        assert_eq!(tracker.guide_x(), None);
    }

    #[test]
    fn idle_ignores_moves_and_releases() {
        let mut tracker = Tracker::new(true);
        assert_eq!(
            tracker.handle(Touch::Moved(ScreenPoint::new(5.0, 5.0)), bounds()),
            None
        );
        assert_eq!(tracker.handle(Touch::Up, bounds()), None);
        assert_eq!(tracker.handle(Touch::Cancel, bounds()), None);
    }

    #[test]
    fn down_outside_capture_region_is_ignored() {
        let mut tracker = Tracker::new(true);
        assert_eq!(
            tracker.handle(Touch::Down(ScreenPoint::new(700.0, 10.0)), bounds()),
            None
        );
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn drag_past_edges_keeps_guide_inside() {
        let mut tracker = Tracker::new(true);
        tracker.handle(Touch::Down(ScreenPoint::new(590.0, 10.0)), bounds());

        let past_right = ScreenPoint::new(640.0, 10.0);
        assert_eq!(
            tracker.handle(Touch::Moved(past_right), bounds()),
            Some(Transition::Track(past_right))
        );
        assert_eq!(tracker.guide_x(), Some(600.0));

        let past_left = ScreenPoint::new(-3.0, 10.0);
        assert_eq!(
            tracker.handle(Touch::Moved(past_left), bounds()),
            Some(Transition::Track(past_left))
        );
        assert_eq!(tracker.guide_x(), Some(0.0));
    }

    #[test]
    fn degenerate_bounds_mid_drag_do_not_panic() {
        let mut tracker = Tracker::new(true);
        tracker.handle(Touch::Down(ScreenPoint::new(10.0, 10.0)), bounds());

        let at = ScreenPoint::new(20.0, 10.0);
        assert_eq!(
            tracker.handle(Touch::Moved(at), Size::new(-5.0, 200.0)),
            Some(Transition::Track(at))
        );
        assert_eq!(tracker.guide_x(), Some(0.0));

        tracker.handle(Touch::Moved(at), Size::new(f32::NAN, 200.0));
        assert_eq!(tracker.guide_x(), Some(20.0));

        tracker.handle(Touch::Moved(ScreenPoint::new(f32::NAN, 0.0)), bounds());
        assert!(tracker.guide_x().is_some_and(f32::is_finite));
    }

    #[test]
    fn disabled_tracker_ignores_everything() {
        let mut tracker = Tracker::new(false);
        assert_eq!(
            tracker.handle(Touch::Down(ScreenPoint::new(10.0, 10.0)), bounds()),
            None
        );
    }

    #[test]
    fn disabling_mid_drag_stops() {
        let mut tracker = Tracker::new(true);
        tracker.handle(Touch::Down(ScreenPoint::new(10.0, 10.0)), bounds());

        assert_eq!(tracker.set_enabled(false), Some(Transition::Stop));
        assert_eq!(tracker.set_enabled(false), None);
        assert_eq!(tracker.set_enabled(true), None);
        assert!(!tracker.is_dragging());
    }
}
