pub mod drag;
pub mod draw;
pub mod scale;

use std::ops::RangeInclusive;

use iced_core::{Color, Size};
use serde::{Deserialize, Serialize};

use crate::config::theme;
use crate::delegate::GraphDelegate;
use drag::Transition;
use scale::Mapper;

/// Pixel coordinates inside the drawable, y growing downward.
pub type ScreenPoint = iced_core::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Empty {axis} range: min {min} must be below max {max}")]
    EmptyRange { axis: Axis, min: f32, max: f32 },
    #[error("Non-finite bound on the {axis} range")]
    NonFinite { axis: Axis },
    #[error("No line at index {0}")]
    UnknownLine(usize),
    #[error("Point at x={x} would precede the last point at x={last}")]
    OutOfOrder { last: f32, x: f32 },
    #[error("Non-finite point ({x}, {y})")]
    NonFinitePoint { x: f32, y: f32 },
}

/// One sample in data space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Closed data-space bounds of a chart.
///
/// Both spans are strictly positive and finite, so anything scaled against
/// a `DataRange` never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SerRange", into = "SerRange")]
pub struct DataRange {
    min_x: f32,
    max_x: f32,
    min_y: f32,
    max_y: f32,
}

impl DataRange {
    pub fn new(x: RangeInclusive<f32>, y: RangeInclusive<f32>) -> Result<Self, ChartError> {
        let (min_x, max_x) = x.into_inner();
        let (min_y, max_y) = y.into_inner();

        Self::check(Axis::X, min_x, max_x)?;
        Self::check(Axis::Y, min_y, max_y)?;

        Ok(Self {
            min_x,
            max_x,
            min_y,
            max_y,
        })
    }

    fn check(axis: Axis, min: f32, max: f32) -> Result<(), ChartError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ChartError::NonFinite { axis });
        }
        if max <= min {
            return Err(ChartError::EmptyRange { axis, min, max });
        }
        Ok(())
    }

    pub fn min_x(&self) -> f32 {
        self.min_x
    }

    pub fn max_x(&self) -> f32 {
        self.max_x
    }

    pub fn min_y(&self) -> f32 {
        self.min_y
    }

    pub fn max_y(&self) -> f32 {
        self.max_y
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    pub fn contains_x(&self, x: f32) -> bool {
        x >= self.min_x && x <= self.max_x
    }
}

/// The sample chart's range: x in `0..=60`, y in `-50..=50`.
impl Default for DataRange {
    fn default() -> Self {
        Self {
            min_x: 0.0,
            max_x: 60.0,
            min_y: -50.0,
            max_y: 50.0,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct SerRange {
    x: [f32; 2],
    y: [f32; 2],
}

impl TryFrom<SerRange> for DataRange {
    type Error = ChartError;

    fn try_from(value: SerRange) -> Result<Self, Self::Error> {
        DataRange::new(value.x[0]..=value.x[1], value.y[0]..=value.y[1])
    }
}

impl From<DataRange> for SerRange {
    fn from(range: DataRange) -> Self {
        SerRange {
            x: [range.min_x, range.max_x],
            y: [range.min_y, range.max_y],
        }
    }
}

/// One data series plotted as a connected polyline.
///
/// Points stay sorted by x. The constructor sorts once; afterwards the
/// owning [`Chart`] only accepts appends in x order or sorted inserts, so
/// paint passes never need to sort.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub name: Option<String>,
    points: Vec<Point>,
    /// The only color of a single-color line, the part below zero otherwise.
    pub primary: Color,
    /// Drawn over the primary stroke wherever the line is above zero.
    pub secondary: Option<Color>,
}

impl Line {
    pub fn new<P>(points: impl IntoIterator<Item = P>, primary: Color) -> Self
    where
        P: Into<Point>,
    {
        let mut points: Vec<Point> = points.into_iter().map(Into::into).collect();

        let total = points.len();
        points.retain(Point::is_finite);
        if points.len() < total {
            log::warn!("Dropped {} non-finite points", total - points.len());
        }

        points.sort_by(|a, b| a.x.total_cmp(&b.x));

        Self {
            name: None,
            points,
            primary,
            secondary: None,
        }
    }

    pub fn with_secondary(mut self, color: Color) -> Self {
        self.secondary = Some(color);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn label(&self) -> String {
        self.name.clone().unwrap_or_else(|| "unnamed".to_string())
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Point closest to `data_x` along the x axis.
    ///
    /// Linear scan; on equal distance the earlier point wins.
    pub fn nearest(&self, data_x: f32) -> Option<Point> {
        let mut best: Option<(Point, f32)> = None;

        for point in &self.points {
            let dist = (point.x - data_x).abs();
            if best.is_none_or(|(_, best_dist)| dist < best_dist) {
                best = Some((*point, dist));
            }
        }

        best.map(|(point, _)| point)
    }

    fn push(&mut self, point: Point) -> Result<(), ChartError> {
        finite(point)?;

        if let Some(last) = self.points.last()
            && point.x < last.x
        {
            return Err(ChartError::OutOfOrder {
                last: last.x,
                x: point.x,
            });
        }
        self.points.push(point);
        Ok(())
    }

    fn insert_sorted(&mut self, point: Point) -> Result<(), ChartError> {
        finite(point)?;

        // after any existing points sharing the same x
        let idx = self.points.partition_point(|p| p.x <= point.x);
        self.points.insert(idx, point);
        Ok(())
    }
}

fn finite(point: Point) -> Result<Point, ChartError> {
    if point.is_finite() {
        Ok(point)
    } else {
        Err(ChartError::NonFinitePoint {
            x: point.x,
            y: point.y,
        })
    }
}

/// Data range plus the ordered lines drawn against it.
///
/// Every mutation bumps [`Chart::revision`] exactly once and raises the
/// redraw signal. Hosts either compare the revision they last painted
/// against the current one, or poll [`Chart::take_redraw`] once per frame.
#[derive(Debug, Clone)]
pub struct Chart {
    range: DataRange,
    lines: Vec<Line>,
    revision: u64,
    needs_redraw: bool,
}

impl Chart {
    pub fn new(range: DataRange) -> Self {
        Self {
            range,
            lines: Vec::new(),
            revision: 0,
            needs_redraw: false,
        }
    }

    pub fn range(&self) -> DataRange {
        self.range
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line(&self, idx: usize) -> Option<&Line> {
        self.lines.get(idx)
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Consumes the redraw signal. Mutations since the last call coalesce
    /// into a single `true`.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(Line::is_empty)
    }

    pub fn set_lines(&mut self, lines: Vec<Line>) {
        log::debug!("Replacing {} lines with {}", self.lines.len(), lines.len());
        self.lines = lines;
        self.invalidate();
    }

    /// Adds a line and returns its index.
    pub fn push_line(&mut self, line: Line) -> usize {
        log::debug!(
            "Adding line '{}' ({} points, {})",
            line.label(),
            line.len(),
            theme::color_to_hex(line.primary)
        );
        self.lines.push(line);
        self.invalidate();
        self.lines.len() - 1
    }

    /// Appends a point to the end of a line.
    ///
    /// The point must not precede the line's last x; use
    /// [`Chart::insert_sorted`] for out-of-order samples.
    pub fn push_point(&mut self, line: usize, point: Point) -> Result<(), ChartError> {
        let target = self
            .lines
            .get_mut(line)
            .ok_or(ChartError::UnknownLine(line))?;

        if let Err(err) = target.push(point) {
            log::warn!("Rejected point for line '{}': {err}", target.label());
            return Err(err);
        }

        self.invalidate();
        Ok(())
    }

    pub fn insert_sorted(&mut self, line: usize, point: Point) -> Result<(), ChartError> {
        let target = self
            .lines
            .get_mut(line)
            .ok_or(ChartError::UnknownLine(line))?;

        if let Err(err) = target.insert_sorted(point) {
            log::warn!("Rejected point for line '{}': {err}", target.label());
            return Err(err);
        }

        self.invalidate();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.invalidate();
    }

    /// Nearest point of every non-empty line, in line order.
    pub fn nearest_points(&self, data_x: f32) -> Vec<Point> {
        self.lines
            .iter()
            .filter_map(|line| line.nearest(data_x))
            .collect()
    }

    /// `None` when the host hands over a drawable without area.
    pub fn mapper(&self, bounds: Size) -> Option<Mapper> {
        Mapper::new(&self.range, bounds)
    }

    /// Forwards a drag transition to the delegate.
    pub fn dispatch<D>(&self, mapper: &Mapper, transition: Transition, delegate: &mut D)
    where
        D: GraphDelegate + ?Sized,
    {
        match transition {
            Transition::Track(position) => {
                let data_x = mapper.to_data_x(position.x);
                let points = self.nearest_points(data_x);
                delegate.on_touch(&points, position);
            }
            Transition::Stop => delegate.on_touch_end(),
        }
    }

    fn invalidate(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        self.needs_redraw = true;
    }
}
