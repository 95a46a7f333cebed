//! Logger installation for the `tour` binary.

use std::io::Write;

use env_logger::{Builder, Env, Target, WriteStyle};
use log::Level;

/// Install a stderr logger filtered by `RUST_LOG`, defaulting to `warn`.
///
/// # Errors
/// Fails when a global logger has already been installed.
pub fn init_logging() -> Result<(), log::SetLoggerError> {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .write_style(WriteStyle::Never)
        .target(Target::Stderr)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                level_tag(record.level()),
                record.target(),
                record.args()
            )
        })
        .try_init()
}

const fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    }
}
