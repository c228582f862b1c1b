use std::sync::Arc;

use spdlog::sink::{RotatingFileSink, RotationPolicy, StdStream, StdStreamSink};
use spdlog::{Level, LevelFilter, Logger};

use crate::config::{Log, LogLevel};

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        let level = match value {
            LogLevel::Critical => Level::Critical,
            LogLevel::Error => Level::Error,
            LogLevel::Warn => Level::Warn,
            LogLevel::Info => Level::Info,
            LogLevel::Debug => Level::Debug,
            LogLevel::Trace => Level::Trace,
        };
        LevelFilter::MoreSevereEqual(level)
    }
}

/// Console logs of every level go to stderr. Stdout only carries command output
/// such as the "Done! Started new post at ..." line.
pub fn configure_logger(log: &Log) -> spdlog::Result<()> {
    let mut builder = Logger::builder();

    if let Some(ref location) = log.location {
        let daily_sink = Arc::new(RotatingFileSink::builder()
            .base_path(location)
            .rotation_policy(RotationPolicy::Daily { hour: 0, minute: 0 })
            .max_files(30)
            .rotate_on_open(false)
            .build()?);
        builder.sink(daily_sink);
    }

    if log.log_to_console {
        let stderr = Arc::new(StdStreamSink::builder()
            .std_stream(StdStream::Stderr)
            .build()?);
        builder.sink(stderr);
    }

    let logger = Arc::new(builder.build()?);
    // One command per process, nothing may stay buffered at exit
    logger.set_flush_level_filter(LevelFilter::All);
    logger.set_level_filter(log.level.into());

    spdlog::set_default_logger(logger);

    Ok(())
}
