use iced_core::Size;

use super::{DataRange, Point, ScreenPoint};

/// Keeps the top and bottom dividers' strokes inside the drawable.
pub const DIVIDER_INSET: f32 = 0.5;

/// Linear data-to-screen transform for one drawable size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mapper {
    bounds: Size,
    min_x: f32,
    scale_x: f32,
    scale_y: f32,
    zero_y: f32,
}

impl Mapper {
    /// `None` if `bounds` has no area; callers skip the paint pass then.
    pub fn new(range: &DataRange, bounds: Size) -> Option<Self> {
        let drawable = bounds.width.is_finite()
            && bounds.height.is_finite()
            && bounds.width > 0.0
            && bounds.height > 0.0;
        if !drawable {
            return None;
        }

        // screen pixels per data unit
        let scale_x = bounds.width / range.width();
        let scale_y = bounds.height / range.height();

        Some(Self {
            bounds,
            min_x: range.min_x(),
            scale_x,
            scale_y,
            // screen y grows downward, data y upward
            zero_y: range.max_y() * scale_y,
        })
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn scale_x(&self) -> f32 {
        self.scale_x
    }

    pub fn scale_y(&self) -> f32 {
        self.scale_y
    }

    /// Screen y at which data y is zero. May lie outside the drawable when
    /// the range doesn't straddle zero.
    pub fn zero_y(&self) -> f32 {
        self.zero_y
    }

    pub fn to_screen(&self, point: Point) -> ScreenPoint {
        ScreenPoint::new(
            (point.x - self.min_x) * self.scale_x,
            self.zero_y - point.y * self.scale_y,
        )
    }

    pub fn to_data_x(&self, screen_x: f32) -> f32 {
        screen_x / self.scale_x + self.min_x
    }

    /// Screen y of the zero line, the top edge and the bottom edge.
    pub fn dividers(&self) -> [f32; 3] {
        [
            self.zero_y,
            DIVIDER_INSET,
            self.bounds.height - DIVIDER_INSET,
        ]
    }
}
