use std::str::FromStr;

const LOG_ENV: &str = "GRAPHER_LOG";
const LOG_FILE: &str = "grapher.log";

/// A parsable `GRAPHER_LOG` wins; otherwise `debug` in debug builds and
/// `info` in release builds.
fn resolve_level(env: Option<&str>, is_debug: bool) -> log::LevelFilter {
    env.and_then(|value| log::LevelFilter::from_str(value.trim()).ok())
        .unwrap_or(if is_debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
}

pub fn setup(is_debug: bool) -> Result<(), fern::InitError> {
    let level = resolve_level(std::env::var(LOG_ENV).ok().as_deref(), is_debug);

    let log_path = data::data_path(Some(LOG_FILE));
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}:[{}:{}] -- {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ));
        })
        .level(log::LevelFilter::Warn)
        .level_for("grapher", level)
        .level_for("grapher_data", level)
        .chain(std::io::stdout())
        .chain(fern::log_file(log_path)?)
        .apply()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_level_wins_in_every_build() {
        assert_eq!(resolve_level(Some("warn"), true), log::LevelFilter::Warn);
        assert_eq!(resolve_level(Some(" trace "), false), log::LevelFilter::Trace);
    }

    #[test]
    fn falls_back_per_build() {
        assert_eq!(resolve_level(None, true), log::LevelFilter::Debug);
        assert_eq!(resolve_level(None, false), log::LevelFilter::Info);
        assert_eq!(resolve_level(Some("loud"), false), log::LevelFilter::Info);
    }
}
