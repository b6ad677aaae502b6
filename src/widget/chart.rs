pub mod graph;

use data::ScreenPoint;
use data::chart::Point;
use data::chart::draw::{DrawCommand, DrawList};
use iced::widget::canvas;

use crate::style;

/// Delegate notifications of a [`graph::Graph`], published as messages.
#[derive(Debug, Clone, PartialEq)]
pub enum GraphEvent {
    Touched {
        points: Vec<Point>,
        position: ScreenPoint,
    },
    TouchEnded,
}

/// Strokes every command of `list` onto `frame`, in order.
pub fn fill_draw_list(frame: &mut canvas::Frame, list: &DrawList) {
    for command in list.commands() {
        match command {
            DrawCommand::Divider { y, width, color } => {
                let mut b = canvas::path::Builder::new();
                b.move_to(iced::Point::new(0.0, *y));
                b.line_to(iced::Point::new(*width, *y));
                frame.stroke(&b.build(), style::divider_stroke(*color));
            }
            DrawCommand::Polyline {
                points,
                color,
                width,
                clip,
            } => {
                let Some((first, rest)) = points.split_first() else {
                    continue;
                };

                let mut b = canvas::path::Builder::new();
                b.move_to(*first);
                for point in rest {
                    b.line_to(*point);
                }
                let path = b.build();

                match clip {
                    Some(region) => frame.with_clip(*region, |frame| {
                        frame.stroke(&path, style::line_stroke(*color, *width));
                    }),
                    None => frame.stroke(&path, style::line_stroke(*color, *width)),
                }
            }
            DrawCommand::Guide { x, height, color } => {
                let mut b = canvas::path::Builder::new();
                b.move_to(iced::Point::new(*x, 0.0));
                b.line_to(iced::Point::new(*x, *height));
                frame.stroke(&b.build(), style::guide_stroke(*color));
            }
        }
    }
}
