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

use std::fmt;
use std::fmt::Write;

use crate::Error;
use crate::Store;
use crate::record::Metadata;

/// A log record being built.
///
/// An entry accumulates message text and is delivered to the store's sinks exactly once, when
/// [`dispatch`](Entry::dispatch) consumes it. The logging macros create, fill and dispatch
/// entries in one expression.
///
/// # Examples
///
/// ```
/// use rlog::Level;
/// use rlog::Store;
///
/// let store = Store::default();
/// let mut entry = store.entry(Level::Info, file!(), line!(), "demo");
/// entry = entry.append("answer: ").append(42);
/// entry.dispatch().unwrap();
/// ```
#[derive(Debug)]
#[must_use = "an entry is only delivered once `dispatch` is called"]
pub struct Entry<'a> {
    store: &'a Store,
    metadata: Metadata,
    message: String,
    // first formatting failure; reported by dispatch
    failed: Option<fmt::Error>,
}

impl<'a> Entry<'a> {
    pub(super) fn new(store: &'a Store, metadata: Metadata) -> Self {
        Entry {
            store,
            metadata,
            message: String::new(),
            failed: None,
        }
    }

    /// The metadata captured for this record.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// The message accumulated so far.
    pub fn text(&self) -> &str {
        &self.message
    }

    /// Append formatted arguments to the message.
    pub fn message(mut self, args: fmt::Arguments<'_>) -> Self {
        if let Err(err) = self.write_fmt(args) {
            self.failed.get_or_insert(err);
        }
        self
    }

    /// Append any displayable value to the message.
    pub fn append(self, value: impl fmt::Display) -> Self {
        self.message(format_args!("{value}"))
    }

    /// Deliver the record to every sink registered in the store right now, in order.
    ///
    /// # Errors
    ///
    /// Return the first error raised by a sink; the remaining sinks are skipped. A message that
    /// failed to format is reported without reaching any sink.
    pub fn dispatch(self) -> Result<(), Error> {
        if let Some(err) = self.failed {
            return Err(Error::from_fmt_error(err).with_context("tag", self.metadata.tag()));
        }
        self.store.dispatch(&self.metadata, &self.message)
    }
}

impl fmt::Write for Entry<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.message.push_str(s);
        Ok(())
    }
}
