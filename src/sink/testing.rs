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
use crate::format::Formatter;
use crate::format::TokenFormatter;
use crate::record::Metadata;
use crate::sink::Sink;

/// A sink that writes records that can be captured by a test harness (like `cargo test`),
/// and thus the outputs are suppressed unless `--nocapture` or `--show-output` is specified.
///
/// # Examples
///
/// ```
/// use rlog::sink::Testing;
///
/// let test_sink = Testing::default();
/// ```
#[derive(Debug)]
pub struct Testing {
    formatter: Box<dyn Formatter>,
}

impl Default for Testing {
    fn default() -> Self {
        Self {
            formatter: Box::new(TokenFormatter::default()),
        }
    }
}

impl Testing {
    /// Set the formatter for the [`Testing`] sink.
    ///
    /// Default to [`TokenFormatter`] with its default template.
    ///
    /// # Examples
    ///
    /// ```
    /// use rlog::format::TokenFormatter;
    /// use rlog::sink::Testing;
    ///
    /// let test_sink = Testing::default().with_formatter(TokenFormatter::new("#level #message"));
    /// ```
    pub fn with_formatter(mut self, formatter: impl Formatter) -> Self {
        self.formatter = Box::new(formatter);
        self
    }
}

impl Sink for Testing {
    fn emit(&self, metadata: &Metadata, message: &str) -> Result<(), Error> {
        let line = self.formatter.format(metadata, message)?;
        eprintln!("{line}");
        Ok(())
    }
}
