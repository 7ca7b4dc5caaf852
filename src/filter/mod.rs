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

//! Filters deciding whether a wrapped sink receives a record.
//!
//! A filter only takes effect once it is composed with a sink, see
//! [`FilteredSink`](crate::sink::FilteredSink).

use std::fmt;

use crate::record::Metadata;

mod custom;
mod level;
mod tag;

pub use self::custom::CustomFilter;
pub use self::level::LevelFilter;
pub use self::tag::TagFilter;

/// A predicate over a record's metadata and message.
///
/// Filters are expected to be pure: no side effects, same answer for the same input.
pub trait Filter: fmt::Debug + Send + Sync + 'static {
    /// Whether the record should be delivered.
    fn matches(&self, metadata: &Metadata, message: &str) -> bool;
}
