use data::chart::draw::{DIVIDER_DASH, DIVIDER_WIDTH, GUIDE_WIDTH};
use iced::Color;
use iced::widget::canvas::{LineCap, LineDash, LineJoin, Stroke};

pub fn line_stroke(color: Color, width: f32) -> Stroke<'static> {
    Stroke {
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Stroke::default()
    }
    .with_color(color)
    .with_width(width)
}

pub fn divider_stroke(color: Color) -> Stroke<'static> {
    Stroke {
        line_dash: LineDash {
            segments: DIVIDER_DASH,
            offset: 0,
        },
        ..Stroke::default()
    }
    .with_color(color)
    .with_width(DIVIDER_WIDTH)
}

pub fn guide_stroke(color: Color) -> Stroke<'static> {
    Stroke::default()
        .with_color(color)
        .with_width(GUIDE_WIDTH)
}
