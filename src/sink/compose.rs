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

use crate::Error;
use crate::filter::Filter;
use crate::format::Formatter;
use crate::record::Metadata;
use crate::sink::Sink;

/// A sink that forwards only the records its filter accepts.
///
/// Rejected records are dropped silently.
#[derive(Debug)]
pub struct FilteredSink<S, F> {
    sink: S,
    filter: F,
}

impl<S: Sink, F: Filter> FilteredSink<S, F> {
    /// Compose `filter` in front of `sink`.
    pub fn new(sink: S, filter: F) -> Self {
        Self { sink, filter }
    }
}

impl<S: Sink, F: Filter> Sink for FilteredSink<S, F> {
    fn emit(&self, metadata: &Metadata, message: &str) -> Result<(), Error> {
        if self.filter.matches(metadata, message) {
            self.sink.emit(metadata, message)?;
        }
        Ok(())
    }
}

/// A sink that forwards every record with its message rewritten by a formatter.
#[derive(Debug)]
pub struct FormattedSink<S, F> {
    sink: S,
    formatter: F,
}

impl<S: Sink, F: Formatter> FormattedSink<S, F> {
    /// Compose `formatter` in front of `sink`.
    pub fn new(sink: S, formatter: F) -> Self {
        Self { sink, formatter }
    }

    /// The wrapped sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The formatter applied before the wrapped sink.
    pub fn formatter(&self) -> &F {
        &self.formatter
    }
}

impl<S: Sink, F: Formatter> Sink for FormattedSink<S, F> {
    fn emit(&self, metadata: &Metadata, message: &str) -> Result<(), Error> {
        let message = self.formatter.format(metadata, message)?;
        self.sink.emit(metadata, &message)
    }
}
