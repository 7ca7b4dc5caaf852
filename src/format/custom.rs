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

use crate::Error;
use crate::format::Formatter;
use crate::record::Metadata;

type FormatFunction = dyn Fn(&Metadata, &str) -> Result<String, Error> + Send + Sync + 'static;

/// A formatter that you can pass the custom format function.
///
/// ```
/// use rlog::format::CustomFormatter;
///
/// let shout = CustomFormatter::new(|metadata, message| {
///     Ok(format!("{}: {}", metadata.level(), message.to_uppercase()))
/// });
/// ```
pub struct CustomFormatter {
    f: Box<FormatFunction>,
}

impl fmt::Debug for CustomFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CustomFormatter {{ ... }}")
    }
}

impl CustomFormatter {
    /// Create a formatter from a closure.
    pub fn new(
        formatter: impl Fn(&Metadata, &str) -> Result<String, Error> + Send + Sync + 'static,
    ) -> Self {
        CustomFormatter {
            f: Box::new(formatter),
        }
    }
}

impl Formatter for CustomFormatter {
    fn format(&self, metadata: &Metadata, message: &str) -> Result<String, Error> {
        (self.f)(metadata, message)
    }
}
