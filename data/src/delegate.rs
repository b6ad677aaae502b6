use crate::chart::{Point, ScreenPoint};

/// Receives the results of drag-to-inspect.
///
/// Both notifications default to no-ops, implement only what you need.
pub trait GraphDelegate {
    /// Nearest point of every non-empty line to the touch, in line order,
    /// plus the touch position in drawable-local coordinates.
    fn on_touch(&mut self, _points: &[Point], _position: ScreenPoint) {}

    /// The user is no longer touching the graph.
    fn on_touch_end(&mut self) {}
}

impl GraphDelegate for () {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::drag::Transition;
    use crate::chart::{Chart, DataRange, Line};
    use iced_core::{Color, Size};

    #[derive(Default)]
    struct EndsOnly {
        ends: usize,
    }

    impl GraphDelegate for EndsOnly {
        fn on_touch_end(&mut self) {
            self.ends += 1;
        }
    }

    #[test]
    fn partial_delegates_compile_and_receive() {
        let mut chart = Chart::new(DataRange::default());
        chart.push_line(Line::new([(1.0_f32, 2.0_f32)], Color::BLACK));
        let mapper = chart.mapper(Size::new(600.0, 200.0)).unwrap();

        let mut delegate = EndsOnly::default();
        chart.dispatch(
            &mapper,
            Transition::Track(ScreenPoint::new(10.0, 0.0)),
            &mut delegate,
        );
        chart.dispatch(&mapper, Transition::Stop, &mut delegate);
        assert_eq!(delegate.ends, 1);

        chart.dispatch(&mapper, Transition::Stop, &mut ());
    }
}
