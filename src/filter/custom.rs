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

use crate::filter::Filter;
use crate::record::Metadata;

type FilterFunction = dyn Fn(&Metadata, &str) -> bool + Send + Sync + 'static;

/// A filter that you can pass the custom filter function.
///
/// The custom filter function accepts the record's [`Metadata`] and message and returns whether
/// the record should be delivered. For example:
///
/// ```
/// use rlog::filter::CustomFilter;
///
/// let filter = CustomFilter::new(|metadata, _| metadata.tag() == "A" || metadata.tag() == "C");
/// ```
pub struct CustomFilter {
    f: Box<FilterFunction>,
}

impl fmt::Debug for CustomFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CustomFilter {{ ... }}")
    }
}

impl CustomFilter {
    /// Create a filter from a closure.
    pub fn new(filter: impl Fn(&Metadata, &str) -> bool + Send + Sync + 'static) -> Self {
        CustomFilter {
            f: Box::new(filter),
        }
    }
}

impl Filter for CustomFilter {
    fn matches(&self, metadata: &Metadata, message: &str) -> bool {
        (self.f)(metadata, message)
    }
}
