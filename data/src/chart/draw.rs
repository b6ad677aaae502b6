//! Display lists produced by a paint pass.
//!
//! A host keeps one [`DrawList`] per layer and repaints it in place. Every
//! pass starts by clearing what the previous pass left, so a layer only
//! ever holds the commands of its latest pass.

use iced_core::{Color, Rectangle};

use super::drag::Tracker;
use super::scale::Mapper;
use super::{Chart, ScreenPoint};
use crate::config::GraphConfig;

pub const LINE_WIDTH: f32 = 2.0;
pub const GUIDE_WIDTH: f32 = 1.0;
pub const DIVIDER_WIDTH: f32 = 1.0;
/// Dash, gap.
pub const DIVIDER_DASH: &[f32] = &[2.0, 2.0];

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Dashed horizontal reference line across the full width.
    Divider { y: f32, width: f32, color: Color },
    Polyline {
        points: Vec<ScreenPoint>,
        color: Color,
        width: f32,
        /// Only the part inside this region is visible.
        clip: Option<Rectangle>,
    },
    /// Solid vertical tracking guide across the full height.
    Guide { x: f32, height: f32, color: Color },
}

#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Dividers and one polyline per non-empty line, plus the clipped
    /// second stroke of two-tone lines.
    pub fn paint_plot(&mut self, chart: &Chart, mapper: &Mapper, config: &GraphConfig) {
        self.clear();

        let bounds = mapper.bounds();

        if config.show_dividers {
            for y in mapper.dividers() {
                self.push(DrawCommand::Divider {
                    y,
                    width: bounds.width,
                    color: config.divider_color,
                });
            }
        }

        for line in chart.lines() {
            if line.is_empty() {
                continue;
            }

            let points: Vec<ScreenPoint> = line
                .points()
                .iter()
                .map(|p| mapper.to_screen(*p))
                .collect();

            if let Some(secondary) = line.secondary {
                self.push(DrawCommand::Polyline {
                    points: points.clone(),
                    color: line.primary,
                    width: LINE_WIDTH,
                    clip: None,
                });
                self.push(DrawCommand::Polyline {
                    points,
                    color: secondary,
                    width: LINE_WIDTH,
                    clip: Some(above_zero(mapper)),
                });
            } else {
                self.push(DrawCommand::Polyline {
                    points,
                    color: line.primary,
                    width: LINE_WIDTH,
                    clip: None,
                });
            }
        }
    }

    /// The tracking guide, or nothing while idle.
    pub fn paint_overlay(&mut self, tracker: &Tracker, mapper: &Mapper, config: &GraphConfig) {
        self.clear();

        if let Some(x) = tracker.guide_x() {
            self.push(DrawCommand::Guide {
                x,
                height: mapper.bounds().height,
                color: config.tracking_color,
            });
        }
    }
}

/// Region of the drawable above the zero line.
fn above_zero(mapper: &Mapper) -> Rectangle {
    let bounds = mapper.bounds();
    Rectangle {
        x: 0.0,
        y: 0.0,
        width: bounds.width,
        height: mapper.zero_y().clamp(0.0, bounds.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::drag::Touch;
    use crate::chart::{DataRange, Line};
    use iced_core::Size;

    fn chart() -> Chart {
        let mut chart = Chart::new(DataRange::default());
        chart.push_line(Line::new(
            [(0.0_f32, -10.0_f32), (2.0, -17.0), (3.0, -14.0)],
            Color::BLACK,
        ));
        chart.push_line(
            Line::new([(0.0_f32, 20.0_f32), (2.0, 21.0)], Color::BLACK).with_secondary(Color::WHITE),
        );
        chart.push_line(Line::new(Vec::<(f32, f32)>::new(), Color::BLACK));
        chart
    }

    fn mapper(chart: &Chart) -> Mapper {
        chart.mapper(Size::new(600.0, 200.0)).unwrap()
    }

    fn polylines(list: &DrawList) -> Vec<&DrawCommand> {
        list.commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polyline { .. }))
            .collect()
    }

    #[test]
    fn plot_has_dividers_and_lines() {
        let chart = chart();
        let mut list = DrawList::new();
        list.paint_plot(&chart, &mapper(&chart), &GraphConfig::default());

        let dividers: Vec<f32> = list
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Divider { y, .. } => Some(*y),
                _ => None,
            })
            .collect();
        assert_eq!(dividers, vec![100.0, 0.5, 199.5]);

        // one stroke for the plain line, two for the two-tone one, none for the empty one
        assert_eq!(polylines(&list).len(), 3);
    }

    #[test]
    fn dividers_can_be_hidden() {
        let chart = chart();
        let config = GraphConfig {
            show_dividers: false,
            ..GraphConfig::default()
        };
        let mut list = DrawList::new();
        list.paint_plot(&chart, &mapper(&chart), &config);

        assert!(
            list.commands()
                .iter()
                .all(|c| !matches!(c, DrawCommand::Divider { .. }))
        );
    }

    #[test]
    fn two_tone_stroke_is_clipped_above_zero() {
        let chart = chart();
        let mut list = DrawList::new();
        list.paint_plot(&chart, &mapper(&chart), &GraphConfig::default());

        let clipped: Vec<_> = polylines(&list)
            .into_iter()
            .filter_map(|c| match c {
                DrawCommand::Polyline {
                    clip: Some(clip),
                    color,
                    ..
                } => Some((*clip, *color)),
                _ => None,
            })
            .collect();

        assert_eq!(
            clipped,
            vec![(
                Rectangle {
                    x: 0.0,
                    y: 0.0,
                    width: 600.0,
                    height: 100.0
                },
                Color::WHITE
            )]
        );
    }

    #[test]
    fn repaint_does_not_accumulate() {
        let chart = chart();
        let mapper = mapper(&chart);
        let config = GraphConfig::default();
        let mut list = DrawList::new();

        list.paint_plot(&chart, &mapper, &config);
        let first = list.commands().to_vec();
        for _ in 0..5 {
            list.paint_plot(&chart, &mapper, &config);
        }

        assert_eq!(list.commands(), first.as_slice());
    }

    #[test]
    fn overlay_follows_tracker() {
        let chart = chart();
        let mapper = mapper(&chart);
        let config = GraphConfig::default();
        let mut tracker = Tracker::new(true);
        let mut overlay = DrawList::new();

        tracker.handle(Touch::Down(ScreenPoint::new(150.0, 20.0)), mapper.bounds());
        overlay.paint_overlay(&tracker, &mapper, &config);
        tracker.handle(Touch::Moved(ScreenPoint::new(160.0, 20.0)), mapper.bounds());
        overlay.paint_overlay(&tracker, &mapper, &config);

        assert_eq!(
            overlay.commands(),
            &[DrawCommand::Guide {
                x: 160.0,
                height: 200.0,
                color: config.tracking_color,
            }]
        );

        tracker.handle(Touch::Up, mapper.bounds());
        overlay.paint_overlay(&tracker, &mapper, &config);
        assert!(overlay.is_empty());
    }
}
