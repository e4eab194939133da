use std::io::Write;

use log::LevelFilter;

/// Picks the env_logger filter: an explicit `--log-level`/`RUST_LOG` value
/// first, then `debug` when debug mode is on, else `info`.
pub fn log_filter(log_level: Option<&str>, debug: bool) -> String {
    match log_level.map(str::trim).filter(|level| !level.is_empty()) {
        Some(level) => level.to_string(),
        None if debug => "debug".to_string(),
        None => "info".to_string(),
    }
}

/// Builds the logger with the timestamped line format used by the binary
pub fn build_logger(filter: &str) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.parse_filters(filter).format(|buf, record| {
        writeln!(
            buf,
            "[{}] {} [{}] {} - {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.module_path().unwrap_or("unknown"),
            record.args()
        )
    });
    builder
}

/// Installs the global logger and returns the effective maximum level.
pub fn init_logging(log_level: Option<&str>, debug: bool) -> LevelFilter {
    let filter = log_filter(log_level, debug);
    let logger = build_logger(&filter).build();
    let max_level = logger.filter();

    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(max_level);
    }
    max_level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_level_wins_over_debug_flag() {
        assert_eq!(log_filter(Some("warn"), true), "warn");
        assert_eq!(log_filter(Some("task_tools=trace"), false), "task_tools=trace");
    }

    #[test]
    fn debug_flag_and_default() {
        assert_eq!(log_filter(None, true), "debug");
        assert_eq!(log_filter(None, false), "info");
        assert_eq!(log_filter(Some("  "), false), "info");
    }

    #[test]
    fn chosen_filter_reaches_the_logger() {
        assert_eq!(build_logger("debug").build().filter(), LevelFilter::Debug);
        assert_eq!(build_logger("warn").build().filter(), LevelFilter::Warn);
        assert_eq!(
            build_logger(&log_filter(None, false)).build().filter(),
            LevelFilter::Info
        );
        assert_eq!(
            build_logger("task_core=trace,error").build().filter(),
            LevelFilter::Trace
        );
    }
}
