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

//! Severity levels and per-record metadata.

use std::fmt;
use std::str::FromStr;

use jiff::Zoned;

use crate::Error;

/// The severity of a log record.
///
/// Levels are totally ordered: `Info < Warning < Error < Off`. `Off` is only meaningful as a
/// threshold; setting any gate to `Off` disables every record passing through it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Designates useful information.
    #[default]
    Info,
    /// Designates hazardous situations.
    Warning,
    /// Designates errors.
    Error,
    /// Disables all levels.
    Off,
}

impl Level {
    /// The compile-time floor.
    ///
    /// Selected with the `min-level-warning`, `min-level-error` and `inactive` features. Records
    /// below the floor are rejected by the logging macros before any work is done.
    pub const STATIC_MIN: Level = if cfg!(feature = "inactive") {
        Level::Off
    } else if cfg!(feature = "min-level-error") {
        Level::Error
    } else if cfg!(feature = "min-level-warning") {
        Level::Warning
    } else {
        Level::Info
    };

    /// Return the canonical name of the level.
    ///
    /// This returns the same string as the `fmt::Display` implementation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "Info",
            Level::Warning => "Warning",
            Level::Error => "Error",
            Level::Off => "Off",
        }
    }

    /// Check whether a record at this level passes a gate set to `threshold`.
    ///
    /// ```
    /// use rlog::Level;
    ///
    /// assert!(Level::Warning.passes(Level::Info));
    /// assert!(Level::Warning.passes(Level::Warning));
    /// assert!(!Level::Warning.passes(Level::Error));
    /// assert!(!Level::Error.passes(Level::Off));
    /// ```
    #[inline]
    pub fn passes(self, threshold: Level) -> bool {
        // `Off` is a threshold, never a record level
        self != Level::Off && self >= threshold
    }
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Level, Self::Err> {
        for (name, level) in [
            ("info", Level::Info),
            ("warning", Level::Warning),
            ("warn", Level::Warning),
            ("error", Level::Error),
            ("off", Level::Off),
        ] {
            if s.eq_ignore_ascii_case(name) {
                return Ok(level);
            }
        }

        Err(Error::new(format!("malformed level: {s:?}")))
    }
}

/// Immutable descriptor attached to one log record.
///
/// Filters, formatters and sinks receive it by reference during dispatch.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Metadata {
    level: Level,
    filename: String,
    line: u32,
    timestamp: String,
    tag: String,
}

impl Metadata {
    /// Capture metadata for a record emitted at `file:line`.
    ///
    /// Any directory prefix of `file` is stripped and the current local time is recorded.
    pub fn new(level: Level, file: &str, line: u32, tag: impl Into<String>) -> Metadata {
        Metadata {
            level,
            filename: basename(file).to_owned(),
            line,
            timestamp: local_timestamp(),
            tag: tag.into(),
        }
    }

    /// Returns a new builder.
    pub fn builder() -> MetadataBuilder {
        MetadataBuilder::default()
    }

    /// The severity of the record.
    pub fn level(&self) -> Level {
        self.level
    }

    /// The source file name, without any directory prefix.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The source line.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The local wall-clock time of capture, formatted as `HH-MM-SS`.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// The free-form tag; empty when none was given.
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

/// Builder for [`Metadata`] with explicit values.
///
/// The timestamp is captured at [`build`](MetadataBuilder::build) unless one was set.
#[derive(Default, Debug)]
pub struct MetadataBuilder {
    level: Level,
    filename: String,
    line: u32,
    timestamp: Option<String>,
    tag: String,
}

impl MetadataBuilder {
    /// Set [`Metadata::level`].
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set [`Metadata::filename`] from a path; the directory prefix is stripped.
    pub fn file(mut self, file: &str) -> Self {
        self.filename = basename(file).to_owned();
        self
    }

    /// Set [`Metadata::line`].
    pub fn line(mut self, line: u32) -> Self {
        self.line = line;
        self
    }

    /// Set [`Metadata::timestamp`].
    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Set [`Metadata::tag`].
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Invoke the builder and return a `Metadata`.
    pub fn build(self) -> Metadata {
        Metadata {
            level: self.level,
            filename: self.filename,
            line: self.line,
            timestamp: self.timestamp.unwrap_or_else(local_timestamp),
            tag: self.tag,
        }
    }
}

// both separators are honored regardless of the host platform
fn basename(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

fn local_timestamp() -> String {
    Zoned::now().strftime("%H-%M-%S").to_string()
}
