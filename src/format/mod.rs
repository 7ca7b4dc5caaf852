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

//! Formatters rewriting the message before it reaches a wrapped sink.

use std::fmt;

use crate::Error;
use crate::record::Metadata;

mod custom;
mod token;

pub use self::custom::CustomFormatter;
pub use self::token::DEFAULT_TEMPLATE;
pub use self::token::JSON_TEMPLATE;
pub use self::token::TokenFormatter;

/// A transform over a record's metadata and message producing the text a sink writes.
pub trait Formatter: fmt::Debug + Send + Sync + 'static {
    /// Produce the replacement message.
    fn format(&self, metadata: &Metadata, message: &str) -> Result<String, Error>;
}
