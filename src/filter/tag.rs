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

use std::borrow::Cow;

use crate::filter::Filter;
use crate::record::Metadata;

/// A filter that matches records by their tag.
///
/// ```
/// use rlog::filter::TagFilter;
///
/// // only "net" and "db" records
/// let only = TagFilter::any_of(["net", "db"]);
/// // everything except "noisy"
/// let except = TagFilter::none_of(["noisy"]);
/// ```
#[derive(Debug, Clone)]
pub struct TagFilter {
    tags: Vec<Cow<'static, str>>,
    not: bool,
}

impl TagFilter {
    /// Deliver only records whose tag is one of `tags`.
    pub fn any_of<I, T>(tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Cow<'static, str>>,
    {
        TagFilter {
            tags: tags.into_iter().map(Into::into).collect(),
            not: false,
        }
    }

    /// Deliver only records whose tag is **not** one of `tags`.
    pub fn none_of<I, T>(tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Cow<'static, str>>,
    {
        TagFilter {
            tags: tags.into_iter().map(Into::into).collect(),
            not: true,
        }
    }
}

impl Filter for TagFilter {
    fn matches(&self, metadata: &Metadata, _: &str) -> bool {
        let listed = self.tags.iter().any(|tag| tag == metadata.tag());
        listed != self.not
    }
}
