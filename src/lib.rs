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

//! A minimal tagged logging facility.
//!
//! # Overview
//!
//! Records carry a [`Level`], a source location, a local `HH-MM-SS` timestamp, a free-form tag
//! and a message. The logging macros check a compile-time level floor and the dynamic level of a
//! [`Store`], then deliver each record to every registered [`Sink`] in order.
//!
//! Sinks compose: [`Sink::filtered`] drops records a [`Filter`] rejects, and [`Sink::formatted`]
//! rewrites the message with a [`Formatter`] first. [`format::TokenFormatter`] substitutes
//! `#timestamp`, `#level`, `#tag`, `#filename`, `#line` and `#message` into a template.
//!
//! # Examples
//!
//! Log to stdout with the default template:
//!
//! ```
//! use rlog::sink::ConsoleSink;
//!
//! rlog::add_sink(ConsoleSink::with_default_template());
//!
//! rlog::info!(tag: "main", "Booting up").unwrap();
//! ```
//!
//! Only forward warnings about the network to stderr, and everything to a file:
//!
//! ```
//! use rlog::Level;
//! use rlog::filter::TagFilter;
//! use rlog::format::TokenFormatter;
//! use rlog::sink::ConsoleSink;
//! use rlog::sink::FileSink;
//! use rlog::sink::Sink;
//!
//! let dir = tempfile::tempdir().unwrap();
//!
//! rlog::Store::builder()
//!     .level(Level::Warning)
//!     .sink(
//!         ConsoleSink::stderr()
//!             .formatted(TokenFormatter::default())
//!             .filtered(TagFilter::any_of(["net"])),
//!     )
//!     .sink(FileSink::open(dir.path().join("app.log")).unwrap())
//!     .apply();
//!
//! rlog::warning!(tag: "net", "connection reset").unwrap();
//! rlog::info!("not delivered").unwrap();
//! ```
//!
//! # Compile-time gating
//!
//! The `min-level-warning` and `min-level-error` features raise the floor below which records
//! are compiled out; `inactive` compiles out every record.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod bridge;
pub mod filter;
pub mod format;
pub mod record;
pub mod sink;

mod error;
mod macros;
mod store;

pub use self::error::Error;
pub use self::filter::Filter;
pub use self::format::Formatter;
pub use self::record::Level;
pub use self::record::Metadata;
pub use self::record::MetadataBuilder;
pub use self::sink::Sink;
pub use self::store::Entry;
pub use self::store::Store;
pub use self::store::StoreBuilder;
pub use self::store::add_sink;
pub use self::store::default_store;
pub use self::store::level;
pub use self::store::reset;
