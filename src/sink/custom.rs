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

use crate::Error;
use crate::record::Metadata;
use crate::sink::Sink;

type SinkFunction = dyn Fn(&Metadata, &str) -> Result<(), Error> + Send + Sync + 'static;

/// A sink that you can pass the custom output function.
///
/// Captured state must be shareable across threads. For example:
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::AtomicUsize;
/// use std::sync::atomic::Ordering;
///
/// use rlog::sink::CustomSink;
///
/// let count = Arc::new(AtomicUsize::new(0));
/// let counter = count.clone();
/// let sink = CustomSink::new(move |_, _| {
///     counter.fetch_add(1, Ordering::Relaxed);
///     Ok(())
/// });
/// ```
pub struct CustomSink {
    f: Box<SinkFunction>,
}

impl fmt::Debug for CustomSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CustomSink {{ ... }}")
    }
}

impl CustomSink {
    /// Create a sink from a closure.
    pub fn new(
        sink: impl Fn(&Metadata, &str) -> Result<(), Error> + Send + Sync + 'static,
    ) -> Self {
        CustomSink { f: Box::new(sink) }
    }
}

impl Sink for CustomSink {
    fn emit(&self, metadata: &Metadata, message: &str) -> Result<(), Error> {
        (self.f)(metadata, message)
    }
}
