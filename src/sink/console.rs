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

use std::borrow::Cow;
use std::io;

use crate::Error;
use crate::format::TokenFormatter;
use crate::record::Metadata;
use crate::sink::FormattedSink;
use crate::sink::Sink;
use crate::sink::write_line;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Stream {
    #[default]
    Stdout,
    Stderr,
}

/// A sink that prints each message on its own line to the console.
///
/// Every record is followed by a line terminator and an immediate flush.
///
/// # Examples
///
/// ```
/// use rlog::sink::ConsoleSink;
///
/// let stdout = ConsoleSink::default();
/// let stderr = ConsoleSink::stderr();
/// let pretty = ConsoleSink::with_default_template();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink {
    stream: Stream,
}

impl ConsoleSink {
    /// A console sink printing to standard error instead of standard output.
    pub fn stderr() -> Self {
        ConsoleSink {
            stream: Stream::Stderr,
        }
    }

    /// A standard output sink whose messages are rendered through a [`TokenFormatter`] with
    /// `template`.
    pub fn with_template(
        template: impl Into<Cow<'static, str>>,
    ) -> FormattedSink<ConsoleSink, TokenFormatter> {
        FormattedSink::new(ConsoleSink::default(), TokenFormatter::new(template))
    }

    /// A standard output sink rendering messages with
    /// [`DEFAULT_TEMPLATE`](crate::format::DEFAULT_TEMPLATE).
    pub fn with_default_template() -> FormattedSink<ConsoleSink, TokenFormatter> {
        FormattedSink::new(ConsoleSink::default(), TokenFormatter::default())
    }
}

impl Sink for ConsoleSink {
    fn emit(&self, _: &Metadata, message: &str) -> Result<(), Error> {
        let result = match self.stream {
            Stream::Stdout => write_line(&mut io::stdout().lock(), message),
            Stream::Stderr => write_line(&mut io::stderr().lock(), message),
        };

        result.map_err(|err| Error::from_io_error(err).with_context("sink", "ConsoleSink"))
    }
}
