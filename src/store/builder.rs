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

use std::sync::Arc;

use crate::Store;
use crate::record::Level;
use crate::sink::Sink;

/// A builder for an isolated [`Store`].
///
/// # Examples
///
/// ```
/// use rlog::Level;
/// use rlog::Store;
/// use rlog::sink::ConsoleSink;
///
/// let store = Store::builder()
///     .level(Level::Warning)
///     .sink(ConsoleSink::with_default_template())
///     .build();
/// assert_eq!(store.level(), Level::Warning);
/// ```
#[must_use = "call `build` to construct the store"]
#[derive(Debug, Default)]
pub struct StoreBuilder {
    level: Level,
    sinks: Vec<Arc<dyn Sink>>,
}

impl StoreBuilder {
    /// Set the dynamic level.
    ///
    /// Default to [`Level::Info`].
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Append a sink.
    pub fn sink(mut self, sink: impl Sink) -> Self {
        self.sinks.push(Arc::new(sink));
        self
    }

    /// Build the [`Store`].
    pub fn build(self) -> Store {
        Store::new(self.level, self.sinks)
    }

    /// Replace the configuration of the [`default_store`](crate::default_store) with this one.
    ///
    /// Equivalent to [`reset`](crate::reset) followed by [`add_sink`](crate::add_sink) for each
    /// sink, but published in one step.
    pub fn apply(self) {
        crate::default_store().replace(self.level, self.sinks);
    }
}
