pub mod chart;
pub mod config;
pub mod delegate;
pub mod feed;
pub mod util;

pub use chart::{Chart, ChartError, DataRange, Line, Point, ScreenPoint};
pub use config::{Config, GraphConfig};
pub use delegate::GraphDelegate;
pub use feed::LiveFeed;

use std::path::PathBuf;

/// Directory holding the config file and logs.
///
/// `GRAPHER_DATA_PATH` overrides the platform default.
pub fn data_path(path_name: Option<&str>) -> PathBuf {
    let base = if let Ok(path) = std::env::var("GRAPHER_DATA_PATH") {
        PathBuf::from(path)
    } else {
        let dir = dirs_next::config_dir().unwrap_or_else(|| PathBuf::from("."));
        dir.join("grapher")
    };

    match path_name {
        Some(name) => base.join(name),
        None => base,
    }
}
