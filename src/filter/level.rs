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

use crate::filter::Filter;
use crate::record::Level;
use crate::record::Metadata;

/// A filter that delivers records at or above a minimum level.
///
/// This narrows one sink further than the store level, e.g. sending only errors to a file while
/// the console receives everything. If the level is `Off`, it rejects all records.
#[derive(Debug, Clone, Copy)]
pub struct LevelFilter(Level);

impl LevelFilter {
    /// Create a filter with the given minimum level.
    pub fn new(level: Level) -> Self {
        LevelFilter(level)
    }
}

impl From<Level> for LevelFilter {
    fn from(level: Level) -> Self {
        LevelFilter(level)
    }
}

impl Filter for LevelFilter {
    fn matches(&self, metadata: &Metadata, _: &str) -> bool {
        metadata.level().passes(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        let filter = LevelFilter::new(Level::Warning);
        let at = |level| Metadata::builder().level(level).build();
        assert!(!filter.matches(&at(Level::Info), ""));
        assert!(filter.matches(&at(Level::Warning), ""));
        assert!(filter.matches(&at(Level::Error), ""));

        let off = LevelFilter::from(Level::Off);
        assert!(!off.matches(&at(Level::Error), ""));
    }
}
