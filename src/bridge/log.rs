// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::default_store;
use crate::record::Level;

struct LogCrateLogger(());

// log has no Off record level; trace and debug fold into info
fn map_level(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warning,
        log::Level::Info | log::Level::Debug | log::Level::Trace => Level::Info,
    }
}

fn enabled(level: Level) -> bool {
    level.passes(Level::STATIC_MIN) && default_store().enabled(level)
}

impl log::Log for LogCrateLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        enabled(map_level(metadata.level()))
    }

    fn log(&self, record: &log::Record) {
        let level = map_level(record.level());
        if !enabled(level) {
            return;
        }

        let result = default_store()
            .entry(
                level,
                record.file().unwrap_or_default(),
                record.line().unwrap_or_default(),
                record.target(),
            )
            .message(*record.args())
            .dispatch();

        // log::Log::log cannot return an error
        if let Err(err) = result {
            eprintln!("failed to forward log record: {err}");
        }
    }

    fn flush(&self) {}
}

/// Set up the log crate global logger.
///
/// This function calls [`log::set_logger`] so that every record logged through the `log` crate
/// macros is forwarded to the [default store](crate::default_store). The record's target becomes
/// the tag; `trace` and `debug` records are delivered at [`Level::Info`].
///
/// This function will set the global maximum log level to `Trace`. To override this, call
/// [`log::set_max_level`] after this function.
///
/// # Errors
///
/// Return an error if the log crate global logger has already been set.
///
/// # Examples
///
/// ```
/// if let Err(err) = rlog::bridge::try_setup_log_crate() {
///     eprintln!("failed to setup log crate: {err}");
/// }
/// ```
pub fn try_setup_log_crate() -> Result<(), log::SetLoggerError> {
    static LOGGER: LogCrateLogger = LogCrateLogger(());
    log::set_logger(&LOGGER)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

/// Set up the log crate global logger.
///
/// See [`try_setup_log_crate`] for what gets forwarded.
///
/// # Panics
///
/// Panic if the log crate global logger has already been set.
///
/// # Examples
///
/// ```
/// rlog::bridge::setup_log_crate();
/// ```
pub fn setup_log_crate() {
    try_setup_log_crate().expect(
        "rlog::bridge::setup_log_crate must be called before the log crate global logger initialized",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_mapping() {
        assert_eq!(map_level(log::Level::Error), Level::Error);
        assert_eq!(map_level(log::Level::Warn), Level::Warning);
        assert_eq!(map_level(log::Level::Info), Level::Info);
        assert_eq!(map_level(log::Level::Debug), Level::Info);
        assert_eq!(map_level(log::Level::Trace), Level::Info);
    }
}
