use flexi_logger::{FileSpec, Logger, LoggerHandle, WriteMode};

const LOG_DIR: &str = "./.instance/logs";

/// Start file logging for the CLI. `RUST_LOG` overrides the default `info`
/// level. The returned handle must stay alive for the process lifetime; a
/// `None` result means logging is unavailable, which must never take the
/// application down.
pub fn init() -> Option<LoggerHandle> {
    Logger::try_with_env_or_str("info")
        .ok()?
        .log_to_file(
            FileSpec::default()
                .directory(LOG_DIR)
                .basename("contact-book"),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .start()
        .ok()
}
