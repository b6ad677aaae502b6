//! Demo data shown at startup.

use data::Point;

pub const FIRST: [(f32, f32); 20] = [
    (0.0, -10.0),
    (2.0, -17.0),
    (3.0, -14.0),
    (5.0, -15.0),
    (6.0, -14.0),
    (8.0, -16.0),
    (9.0, -9.0),
    (10.0, -11.0),
    (11.0, -10.0),
    (13.0, -8.0),
    (14.0, -7.0),
    (16.0, -15.0),
    (17.0, -11.0),
    (19.0, -8.0),
    (20.0, 8.0),
    (21.0, -5.0),
    (23.0, 1.0),
    (24.0, -1.0),
    (26.0, -3.0),
    (27.0, -2.0),
];

pub const SECOND: [(f32, f32); 20] = [
    (0.0, 20.0),
    (2.0, 21.0),
    (3.0, 10.0),
    (5.0, 11.0),
    (6.0, 15.0),
    (8.0, 2.0),
    (9.0, 0.0),
    (10.0, 4.0),
    (11.0, -5.0),
    (13.0, -6.0),
    (14.0, -3.0),
    (16.0, -9.0),
    (17.0, -12.0),
    (19.0, -10.0),
    (20.0, -11.0),
    (21.0, -1.0),
    (23.0, 2.0),
    (24.0, -3.0),
    (26.0, 4.0),
    (27.0, 8.0),
];

/// Seconds after startup before [`SECOND`] joins the graph.
pub const SECOND_DELAY_SECS: u64 = 5;

/// y sampled by the live line at `x`.
pub fn wave(x: f32) -> f32 {
    30.0 * (x / 6.0).sin()
}

pub fn readout(points: &[Point]) -> String {
    if points.is_empty() {
        return "No data".to_string();
    }

    points
        .iter()
        .map(|p| format!("({:.1}, {:.1})", p.x, p.y))
        .collect::<Vec<_>>()
        .join("  ")
}
