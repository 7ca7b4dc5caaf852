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

use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::Error;
use crate::record::Metadata;
use crate::sink::Sink;

/// One delivery observed by a [`CaptureSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    /// The record's metadata.
    pub metadata: Metadata,
    /// The message as the sink received it.
    pub message: String,
}

/// A sink that keeps every record it receives in memory.
///
/// Mostly useful in tests: register an `Arc<CaptureSink>` and inspect it afterwards.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use rlog::Level;
/// use rlog::Store;
/// use rlog::sink::CaptureSink;
///
/// let capture = Arc::new(CaptureSink::default());
/// let store = Store::builder().sink(capture.clone()).build();
///
/// store
///     .entry(Level::Info, file!(), line!(), "demo")
///     .message(format_args!("hello {}", 42))
///     .dispatch()
///     .unwrap();
/// assert_eq!(capture.messages(), ["hello 42"]);
/// ```
#[derive(Debug, Default)]
pub struct CaptureSink {
    entries: Mutex<Vec<Captured>>,
}

impl CaptureSink {
    /// A copy of everything captured so far, in delivery order.
    pub fn entries(&self) -> Vec<Captured> {
        self.lock().clone()
    }

    /// The captured messages, in delivery order.
    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|c| c.message.clone()).collect()
    }

    /// The number of captured records.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been captured.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Forget everything captured so far.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Captured>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Sink for CaptureSink {
    fn emit(&self, metadata: &Metadata, message: &str) -> Result<(), Error> {
        self.lock().push(Captured {
            metadata: metadata.clone(),
            message: message.to_owned(),
        });
        Ok(())
    }
}
