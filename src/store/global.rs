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

use std::sync::LazyLock;

use crate::Store;
use crate::record::Level;
use crate::sink::Sink;

static DEFAULT_STORE: LazyLock<Store> = LazyLock::new(Store::default);

/// The process-wide store used by the logging macros when no `logger:` is given.
///
/// It starts at [`Level::Info`] with no sinks.
pub fn default_store() -> &'static Store {
    &DEFAULT_STORE
}

/// Reset the default store: set its level and remove every sink.
///
/// Best called from a single-threaded init or shutdown phase.
///
/// # Examples
///
/// ```
/// use rlog::Level;
///
/// rlog::reset(Level::Warning);
/// assert_eq!(rlog::level(), Level::Warning);
/// ```
pub fn reset(level: Level) {
    default_store().reset(level);
}

/// Register a sink with the default store.
///
/// # Examples
///
/// ```
/// use rlog::sink::ConsoleSink;
///
/// rlog::add_sink(ConsoleSink::with_default_template());
/// rlog::info!(tag: "main", "Booting up").unwrap();
/// ```
pub fn add_sink(sink: impl Sink) {
    default_store().add_sink(sink);
}

/// The dynamic level of the default store.
pub fn level() -> Level {
    default_store().level()
}
