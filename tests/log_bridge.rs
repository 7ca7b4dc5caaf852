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

use std::sync::Arc;

use rlog::Level;
use rlog::sink::CaptureSink;

// installs the process-wide log crate logger; keep a single test in this binary
#[test]
fn test_log_crate_records_reach_the_default_store() {
    rlog::bridge::setup_log_crate();
    assert!(rlog::bridge::try_setup_log_crate().is_err());

    let capture = Arc::new(CaptureSink::default());
    rlog::Store::builder()
        .level(Level::Warning)
        .sink(capture.clone())
        .apply();

    log::info!(target: "net", "gated");
    log::warn!(target: "net", "connection reset by {}", "peer");
    log::error!(target: "disk", "disk full");

    rlog::reset(Level::Info);
    rlog::add_sink(capture.clone());
    log::debug!(target: "net", "debug folds into info");

    let entries = capture.entries();
    let summary: Vec<_> = entries
        .iter()
        .map(|e| (e.metadata.level(), e.metadata.tag(), e.message.as_str()))
        .collect();
    assert_eq!(
        summary,
        [
            (Level::Warning, "net", "connection reset by peer"),
            (Level::Error, "disk", "disk full"),
            (Level::Info, "net", "debug folds into info"),
        ]
    );
    assert!(entries.iter().all(|e| e.metadata.filename() == "log_bridge.rs"));
}
