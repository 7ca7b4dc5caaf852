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

// these scenarios rely on info records being compiled in
#![cfg(not(any(feature = "min-level-warning", feature = "inactive")))]

use std::fmt;
use std::sync::Arc;

use rlog::Level;
use rlog::Store;
use rlog::filter::TagFilter;
use rlog::format::CustomFormatter;
use rlog::sink::CaptureSink;
use rlog::sink::Sink;

struct Thing<'a> {
    store: &'a Store,
    name: &'a str,
}

impl fmt::Display for Thing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        rlog::info!(logger: self.store, tag: "display", "formatting wrapping ({})", self.name)
            .map_err(|_| fmt::Error)?;
        f.write_str(self.name)
    }
}

#[test]
fn test_logging_while_formatting_a_message() {
    let capture = Arc::new(CaptureSink::default());
    let store = Store::builder().sink(capture.clone()).build();

    rlog::info!(logger: &store, "I'm logging {}!", Thing { store: &store, name: "aha" }).unwrap();

    assert_eq!(
        capture.messages(),
        ["formatting wrapping (aha)", "I'm logging aha!"]
    );
}

#[test]
fn test_logging_from_a_formatter() {
    let capture = Arc::new(CaptureSink::default());
    let store = Arc::new(Store::builder().sink(capture.clone()).build());

    let weak = Arc::downgrade(&store);
    let formatter = CustomFormatter::new(move |metadata, message| {
        if let Some(store) = weak.upgrade() {
            rlog::warning!(logger: &store, tag: "meta", "formatted {}", metadata.tag())?;
        }
        Ok(format!("[{}] {message}", metadata.level()))
    });
    // records from the formatter itself are not formatted again
    store.add_sink(
        capture
            .clone()
            .formatted(formatter)
            .filtered(TagFilter::none_of(["meta"])),
    );

    rlog::info!(logger: &store, tag: "app", "hello").unwrap();

    let entries = capture.entries();
    let summary: Vec<_> = entries
        .iter()
        .map(|e| (e.metadata.level(), e.metadata.tag(), e.message.as_str()))
        .collect();
    assert_eq!(
        summary,
        [
            (Level::Info, "app", "hello"),
            (Level::Warning, "meta", "formatted app"),
            (Level::Info, "app", "[Info] hello"),
        ]
    );
}
