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

//! Output targets for log records.

use std::fmt;
use std::io;
use std::io::Write;
use std::sync::Arc;

use crate::Error;
use crate::filter::Filter;
use crate::format::Formatter;
use crate::record::Metadata;

mod capture;
mod compose;
mod console;
mod custom;
mod file;
mod json;
mod testing;

pub use self::capture::CaptureSink;
pub use self::capture::Captured;
pub use self::compose::FilteredSink;
pub use self::compose::FormattedSink;
pub use self::console::ConsoleSink;
pub use self::custom::CustomSink;
pub use self::file::FileSink;
pub use self::json::JsonSink;
pub use self::testing::Testing;

/// An output action receiving each dispatched record.
///
/// Sinks run synchronously on the thread that logged. An error returned here stops the dispatch
/// of the current record and is handed back to the logging call.
pub trait Sink: fmt::Debug + Send + Sync + 'static {
    /// Write one record.
    fn emit(&self, metadata: &Metadata, message: &str) -> Result<(), Error>;

    /// Wrap this sink so that it only receives records accepted by `filter`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rlog::filter::TagFilter;
    /// use rlog::sink::ConsoleSink;
    /// use rlog::sink::Sink;
    ///
    /// let sink = ConsoleSink::default().filtered(TagFilter::any_of(["net"]));
    /// ```
    fn filtered<F: Filter>(self, filter: F) -> FilteredSink<Self, F>
    where
        Self: Sized,
    {
        FilteredSink::new(self, filter)
    }

    /// Wrap this sink so that it receives messages rewritten by `formatter`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rlog::format::TokenFormatter;
    /// use rlog::sink::ConsoleSink;
    /// use rlog::sink::Sink;
    ///
    /// let sink = ConsoleSink::default().formatted(TokenFormatter::new("#level #message"));
    /// ```
    fn formatted<F: Formatter>(self, formatter: F) -> FormattedSink<Self, F>
    where
        Self: Sized,
    {
        FormattedSink::new(self, formatter)
    }
}

/// A shared sink; the registration and the caller's handle observe the same state.
impl<T: Sink + ?Sized> Sink for Arc<T> {
    fn emit(&self, metadata: &Metadata, message: &str) -> Result<(), Error> {
        (**self).emit(metadata, message)
    }
}

impl<T: Sink + ?Sized> Sink for Box<T> {
    fn emit(&self, metadata: &Metadata, message: &str) -> Result<(), Error> {
        (**self).emit(metadata, message)
    }
}

// one record per line, flushed immediately
pub(crate) fn write_line(w: &mut dyn Write, message: &str) -> io::Result<()> {
    w.write_all(message.as_bytes())?;
    w.write_all(b"\n")?;
    w.flush()
}
