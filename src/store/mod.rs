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

mod builder;
pub use self::builder::StoreBuilder;

mod entry;
pub use self::entry::Entry;

mod global;
pub use self::global::add_sink;
pub use self::global::default_store;
pub use self::global::level;
pub use self::global::reset;

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::Error;
use crate::record::Level;
use crate::record::Metadata;
use crate::sink::Sink;

/// The configuration backing the logging macros: the dynamic level and the ordered sinks.
///
/// The process-wide instance is returned by [`default_store`]; tests and embedders may build
/// isolated instances with [`Store::builder`] and pass them as `logger: &store` to the macros.
///
/// Every dispatch works on a snapshot of the configuration taken when it starts, so a sink added
/// or a reset performed concurrently never tears a dispatch in progress. Sinks run outside of any
/// lock; a sink may itself log to the same store.
#[derive(Debug, Default)]
pub struct Store {
    config: ArcSwap<Config>,
}

#[derive(Debug, Default)]
struct Config {
    level: Level,
    sinks: Vec<Arc<dyn Sink>>,
}

impl Store {
    /// Returns a new builder.
    pub fn builder() -> StoreBuilder {
        StoreBuilder::default()
    }

    fn new(level: Level, sinks: Vec<Arc<dyn Sink>>) -> Self {
        Self {
            config: ArcSwap::from_pointee(Config { level, sinks }),
        }
    }

    fn replace(&self, level: Level, sinks: Vec<Arc<dyn Sink>>) {
        self.config.store(Arc::new(Config { level, sinks }));
    }

    /// Set the dynamic level and remove every sink.
    ///
    /// Meant for a single-threaded init or shutdown phase. Concurrent calls are serialized, and the
    /// configuration left behind is the one written last.
    pub fn reset(&self, level: Level) {
        self.replace(level, vec![]);
    }

    /// Append a sink; it receives records after every sink registered before it.
    pub fn add_sink(&self, sink: impl Sink) {
        let sink: Arc<dyn Sink> = Arc::new(sink);
        self.config.rcu(|current| {
            let mut sinks = current.sinks.clone();
            sinks.push(sink.clone());
            Config {
                level: current.level,
                sinks,
            }
        });
    }

    /// The current dynamic level.
    pub fn level(&self) -> Level {
        self.config.load().level
    }

    /// The number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.config.load().sinks.len()
    }

    /// Whether a record at `level` passes the dynamic level gate.
    ///
    /// The compile-time floor is checked separately against [`Level::STATIC_MIN`].
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        level.passes(self.level())
    }

    /// Start a record at `file:line`.
    ///
    /// No gate is applied here; the logging macros check both gates before calling this.
    pub fn entry(&self, level: Level, file: &str, line: u32, tag: impl Into<String>) -> Entry<'_> {
        Entry::new(self, Metadata::new(level, file, line, tag))
    }

    fn dispatch(&self, metadata: &Metadata, message: &str) -> Result<(), Error> {
        let config = self.config.load_full();
        for sink in config.sinks.iter() {
            sink.emit(metadata, message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::sync::Arc;
    use std::sync::Mutex;
    use std::thread;

    use super::*;
    use crate::sink::CaptureSink;
    use crate::sink::CustomSink;

    fn captured(level: Level) -> (Store, Arc<CaptureSink>) {
        let capture = Arc::new(CaptureSink::default());
        let store = Store::builder().level(level).sink(capture.clone()).build();
        (store, capture)
    }

    #[test]
    fn test_default_configuration() {
        let store = Store::default();
        assert_eq!(store.level(), Level::Info);
        assert_eq!(store.sink_count(), 0);
        crate::error!(logger: &store, tag: "none", "dropped silently").unwrap();
    }

    #[test]
    fn test_reset_restores_defaults() {
        let (store, _) = captured(Level::Error);
        store.add_sink(CaptureSink::default());
        assert_eq!(store.sink_count(), 2);

        store.reset(Level::default());
        assert_eq!(store.level(), Level::Info);
        assert_eq!(store.sink_count(), 0);
    }

    #[test]
    fn test_dynamic_level_gate() {
        let levels = [Level::Info, Level::Warning, Level::Error];
        for threshold in levels {
            let (store, capture) = captured(threshold);
            for level in levels {
                crate::log!(logger: &store, level, "{level}").unwrap();
            }
            let expected: Vec<String> = levels
                .iter()
                .filter(|level| **level >= threshold && level.passes(Level::STATIC_MIN))
                .map(|level| level.to_string())
                .collect();
            assert_eq!(capture.messages(), expected, "threshold {threshold}");
        }

        let (store, capture) = captured(Level::Off);
        crate::error!(logger: &store, "never").unwrap();
        assert!(capture.is_empty());
    }

    #[test]
    #[cfg_attr(feature = "inactive", ignore = "every record is compiled out")]
    fn test_sinks_run_in_registration_order() {
        let order = Arc::new(Mutex::new(vec![]));
        let store = Store::default();
        for i in 0..3 {
            let order = order.clone();
            store.add_sink(CustomSink::new(move |metadata, message| {
                order
                    .lock()
                    .unwrap()
                    .push((i, metadata.clone(), message.to_string()));
                Ok(())
            }));
        }

        crate::error!(logger: &store, tag: "SinkTest", "X{}{}", 1, 4.5).unwrap();

        let order = order.lock().unwrap();
        assert_eq!(order.len(), 3);
        for (i, (n, metadata, message)) in order.iter().enumerate() {
            assert_eq!(*n, i);
            assert_eq!(metadata, &order[0].1);
            assert_eq!(message, "X14.5");
        }
        assert_eq!(order[0].1.tag(), "SinkTest");
        assert_eq!(order[0].1.level(), Level::Error);
        assert_eq!(order[0].1.filename(), "mod.rs");
    }

    #[test]
    #[cfg_attr(feature = "inactive", ignore = "every record is compiled out")]
    fn test_failing_sink_stops_dispatch() {
        let store = Store::default();
        let before = Arc::new(CaptureSink::default());
        let after = Arc::new(CaptureSink::default());
        store.add_sink(before.clone());
        store.add_sink(CustomSink::new(|_, _| Err(Error::new("stream closed"))));
        store.add_sink(after.clone());

        let err = crate::error!(logger: &store, "lost").unwrap_err();
        assert_eq!(err.message(), "stream closed");
        assert_eq!(before.len(), 1);
        assert!(after.is_empty());
    }

    #[test]
    fn test_gated_arguments_are_not_evaluated() {
        let (store, capture) = captured(Level::Error);
        let evaluated = Cell::new(0);
        let expensive = || {
            evaluated.set(evaluated.get() + 1);
            "expensive"
        };

        crate::info!(logger: &store, tag: expensive(), "{}", expensive()).unwrap();
        crate::warning!(logger: &store, tag: expensive(), "{}", expensive()).unwrap();
        assert_eq!(evaluated.get(), 0);
        assert!(capture.is_empty());

        crate::error!(logger: &store, tag: expensive(), "{}", expensive()).unwrap();
        if Level::Error.passes(Level::STATIC_MIN) {
            assert_eq!(evaluated.get(), 2);
            assert_eq!(capture.messages(), ["expensive"]);
        } else {
            assert_eq!(evaluated.get(), 0);
            assert!(capture.is_empty());
        }
    }

    #[test]
    #[cfg_attr(feature = "inactive", ignore = "every record is compiled out")]
    fn test_sink_may_log_to_its_own_store() {
        let store = Arc::new(Store::default());
        let capture = Arc::new(CaptureSink::default());
        store.add_sink(capture.clone());

        let weak = Arc::downgrade(&store);
        store.add_sink(CustomSink::new(move |metadata, message| {
            if metadata.tag() == "outer" {
                if let Some(store) = weak.upgrade() {
                    crate::error!(logger: &store, tag: "inner", "saw {message}")?;
                }
            }
            Ok(())
        }));

        crate::error!(logger: &store, tag: "outer", "hello").unwrap();
        assert_eq!(capture.messages(), ["hello", "saw hello"]);
    }

    #[test]
    #[cfg_attr(feature = "inactive", ignore = "every record is compiled out")]
    fn test_concurrent_records_do_not_tear() {
        let (store, capture) = captured(Level::Info);

        thread::scope(|s| {
            for tag in ["Foo", "Bar"] {
                let store = &store;
                s.spawn(move || {
                    for i in 0..1000 {
                        crate::error!(logger: store, tag: tag, "{tag} {i}").unwrap();
                    }
                });
            }
        });

        let entries = capture.entries();
        assert_eq!(entries.len(), 2000);
        for entry in entries.iter() {
            let tag = entry.metadata.tag();
            assert!(tag == "Foo" || tag == "Bar");
            assert!(entry.message.starts_with(tag), "{entry:?}");
            assert_eq!(entry.metadata.filename(), "mod.rs");
        }
        for tag in ["Foo", "Bar"] {
            let n = entries.iter().filter(|e| e.metadata.tag() == tag).count();
            assert_eq!(n, 1000);
        }
    }

    #[test]
    fn test_sinks_added_concurrently_are_all_kept() {
        let store = Store::default();
        thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..50 {
                        store.add_sink(CaptureSink::default());
                    }
                });
            }
        });
        assert_eq!(store.sink_count(), 200);
    }
}
