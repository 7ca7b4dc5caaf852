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

use crate::Error;
use crate::format::Formatter;
use crate::record::Metadata;

/// The template used by [`TokenFormatter::default`].
pub const DEFAULT_TEMPLATE: &str = "[R] #timestamp [#level] #tag (#filename:#line) #message";

/// The template used by [`TokenFormatter::json`].
///
/// `line` is emitted as a number, every other field as a string.
pub const JSON_TEMPLATE: &str = r##"
    {
        "timestamp": "#timestamp",
        "level": "#level",
        "tag": "#tag",
        "filename": "#filename",
        "line": #line,
        "message": "#message"
    }"##;

/// A formatter that substitutes metadata tokens in a template.
///
/// The recognized tokens are, in the order they are substituted:
///
/// | token        | value                                             |
/// |--------------|---------------------------------------------------|
/// | `#timestamp` | [`Metadata::timestamp`]                           |
/// | `#level`     | [`Metadata::level`]                               |
/// | `#tag`       | `#` followed by [`Metadata::tag`], or empty       |
/// | `#filename`  | [`Metadata::filename`]                            |
/// | `#line`      | [`Metadata::line`]                                |
/// | `#message`   | the message                                       |
///
/// Only the **first** occurrence of each token is replaced, and each substitution runs on the
/// output of the previous one. A value that itself contains a later token (for example a tag
/// named `filename`) therefore captures that token's substitution. Values are inserted verbatim;
/// nothing is escaped.
///
/// Output format with [`DEFAULT_TEMPLATE`]:
///
/// ```text
/// [R] 14-05-09 [Warning] #net (main.rs:42) connection refused
/// [R] 14-05-09 [Info]  (main.rs:57) started
/// ```
///
/// # Examples
///
/// ```
/// use rlog::format::TokenFormatter;
///
/// let formatter = TokenFormatter::new("#level: #message");
/// ```
#[derive(Debug, Clone)]
pub struct TokenFormatter {
    template: Cow<'static, str>,
}

impl Default for TokenFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}

impl TokenFormatter {
    /// Create a formatter from a template.
    pub fn new(template: impl Into<Cow<'static, str>>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// A formatter rendering each record as a JSON object, see [`JSON_TEMPLATE`].
    pub fn json() -> Self {
        Self::new(JSON_TEMPLATE)
    }

    /// The template this formatter substitutes into.
    pub fn template(&self) -> &str {
        &self.template
    }

    fn render(&self, metadata: &Metadata, message: &str) -> String {
        let tag = match metadata.tag() {
            "" => String::new(),
            tag => format!("#{tag}"),
        };

        let mut result = self.template.to_string();
        replace_first(&mut result, "#timestamp", metadata.timestamp());
        replace_first(&mut result, "#level", metadata.level().as_str());
        replace_first(&mut result, "#tag", &tag);
        replace_first(&mut result, "#filename", metadata.filename());
        replace_first(&mut result, "#line", &metadata.line().to_string());
        replace_first(&mut result, "#message", message);
        result
    }
}

impl Formatter for TokenFormatter {
    fn format(&self, metadata: &Metadata, message: &str) -> Result<String, Error> {
        Ok(self.render(metadata, message))
    }
}

fn replace_first(input: &mut String, pattern: &str, with: &str) {
    if let Some(pos) = input.find(pattern) {
        input.replace_range(pos..pos + pattern.len(), with);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Level;

    fn metadata(tag: &str) -> Metadata {
        Metadata::builder()
            .level(Level::Warning)
            .file("src/x.cpp")
            .line(42)
            .timestamp("14-05-09")
            .tag(tag)
            .build()
    }

    #[test]
    fn test_default_template() {
        let formatter = TokenFormatter::default();
        let output = formatter.format(&metadata("Foo"), "hello").unwrap();
        assert!(output.contains("[Warning]"));
        assert!(output.contains("#Foo"));
        assert!(output.contains("(x.cpp:42)"));
        assert!(output.contains("hello"));
        insta::assert_snapshot!(output, @"[R] 14-05-09 [Warning] #Foo (x.cpp:42) hello");
    }

    #[test]
    fn test_empty_tag_renders_nothing() {
        let formatter = TokenFormatter::default();
        let output = formatter.format(&metadata(""), "hello").unwrap();
        insta::assert_snapshot!(output, @"[R] 14-05-09 [Warning]  (x.cpp:42) hello");
    }

    #[test]
    fn test_only_first_occurrence_is_replaced() {
        let formatter = TokenFormatter::new("#level #level #message");
        let output = formatter.format(&metadata(""), "hi").unwrap();
        assert_eq!(output, "Warning #level hi");
    }

    #[test]
    fn test_substitution_runs_on_previous_output() {
        // the tag slot now holds "#filename", which is found before the template's own token
        let formatter = TokenFormatter::new("#tag #filename");
        let output = formatter.format(&metadata("filename"), "").unwrap();
        assert_eq!(output, "x.cpp #filename");
    }

    #[test]
    fn test_template_without_tokens() {
        let formatter = TokenFormatter::new("static text");
        assert_eq!(formatter.template(), "static text");
        assert_eq!(
            formatter.format(&metadata("Foo"), "hello").unwrap(),
            "static text"
        );
    }

    #[test]
    fn test_json_template_parses() {
        let formatter = TokenFormatter::json();
        let output = formatter.format(&metadata("Foo"), "hello").unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["timestamp"], "14-05-09");
        assert_eq!(value["level"], "Warning");
        assert_eq!(value["tag"], "#Foo");
        assert_eq!(value["filename"], "x.cpp");
        assert_eq!(value["line"], 42);
        assert_eq!(value["message"], "hello");
    }
}
