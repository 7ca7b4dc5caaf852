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
use std::io::Write;
use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::Error;
use crate::format::Formatter;
use crate::format::TokenFormatter;
use crate::record::Metadata;
use crate::sink::Sink;

/// A sink that writes all records it receives as one JSON array.
///
/// The opening `[` is written on construction and the closing `]` by [`JsonSink::finish`], by
/// [`JsonSink::into_inner`], or when the sink is dropped. Until then the output is an unterminated
/// array. Each element is rendered by [`TokenFormatter::json`]:
///
/// ```json
/// [
///     {
///         "timestamp": "14-05-09",
///         "level": "Warning",
///         "tag": "#net",
///         "filename": "main.rs",
///         "line": 42,
///         "message": "connection refused"
///     }
/// ]
/// ```
///
/// The sink is not `Clone`: register it through an [`Arc`](std::sync::Arc) and keep a handle.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use rlog::Store;
/// use rlog::sink::JsonSink;
///
/// let store = Store::builder().build();
/// let json = Arc::new(JsonSink::new(Vec::new()).unwrap());
/// store.add_sink(json.clone());
///
/// rlog::warning!(logger: &store, tag: "net", "connection refused").unwrap();
///
/// store.reset(Default::default());
/// let bytes = Arc::into_inner(json).unwrap().into_inner().unwrap();
/// assert!(bytes.ends_with(b"\n]"));
/// ```
pub struct JsonSink<W: Write> {
    formatter: TokenFormatter,
    state: Mutex<JsonState<W>>,
}

struct JsonState<W> {
    // taken once the array is closed
    writer: Option<W>,
    first: bool,
}

impl<W: Write> fmt::Debug for JsonSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JsonSink {{ ... }}")
    }
}

impl<W: Write + Send + 'static> JsonSink<W> {
    /// Create a sink writing to `writer`, starting the array immediately.
    pub fn new(mut writer: W) -> Result<Self, Error> {
        writer
            .write_all(b"[")
            .map_err(|err| Error::from_io_error(err).with_context("sink", "JsonSink"))?;

        Ok(JsonSink {
            formatter: TokenFormatter::json(),
            state: Mutex::new(JsonState {
                writer: Some(writer),
                first: true,
            }),
        })
    }

    /// Close the array. Records emitted afterwards are rejected with an error.
    pub fn finish(&self) -> Result<(), Error> {
        match self.state().writer.take() {
            Some(writer) => close(writer).map(drop),
            None => Ok(()),
        }
    }

    /// Close the array if still open and return the writer.
    pub fn into_inner(mut self) -> Result<W, Error> {
        let state = self.state.get_mut().unwrap_or_else(|e| e.into_inner());
        match state.writer.take() {
            Some(writer) => close(writer),
            None => Err(Error::new("json sink already finished")),
        }
    }

    fn state(&self) -> MutexGuard<'_, JsonState<W>> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn close<W: Write>(mut writer: W) -> Result<W, Error> {
    writer
        .write_all(b"\n]")
        .and_then(|()| writer.flush())
        .map_err(|err| Error::from_io_error(err).with_context("sink", "JsonSink"))?;
    Ok(writer)
}

impl<W: Write + Send + 'static> Sink for JsonSink<W> {
    fn emit(&self, metadata: &Metadata, message: &str) -> Result<(), Error> {
        let entry = self.formatter.format(metadata, message)?;

        let mut state = self.state();
        let separator: &[u8] = if state.first { b"" } else { b"," };
        let Some(writer) = state.writer.as_mut() else {
            return Err(Error::new("json sink already finished"));
        };

        writer
            .write_all(separator)
            .and_then(|()| writer.write_all(entry.as_bytes()))
            .and_then(|()| writer.flush())
            .map_err(|err| Error::from_io_error(err).with_context("sink", "JsonSink"))?;
        state.first = false;
        Ok(())
    }
}

impl<W: Write> Drop for JsonSink<W> {
    fn drop(&mut self) {
        let state = self.state.get_mut().unwrap_or_else(|e| e.into_inner());
        if let Some(mut writer) = state.writer.take() {
            let _ = writer.write_all(b"\n]");
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::Value;

    use super::*;
    use crate::record::Level;

    fn record(level: Level, tag: &str, line: u32) -> Metadata {
        Metadata::builder()
            .level(level)
            .file("src/store.rs")
            .line(line)
            .tag(tag)
            .build()
    }

    #[test]
    fn test_array_round_trip() {
        let sink = JsonSink::new(Vec::new()).unwrap();
        sink.emit(&record(Level::Info, "main", 1), "Booting up").unwrap();
        sink.emit(&record(Level::Warning, "", 2), "Solver won").unwrap();
        sink.emit(&record(Level::Error, "Bar", 3), "Solver failed").unwrap();

        let bytes = sink.into_inner().unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), 3);

        for entry in entries {
            let object = entry.as_object().unwrap();
            assert_eq!(object.len(), 6);
            for key in ["timestamp", "level", "tag", "filename", "message"] {
                assert!(object[key].is_string(), "{key} in {entry}");
            }
            assert!(object["line"].is_u64(), "{entry}");
        }

        assert_eq!(entries[0]["tag"], "#main");
        assert_eq!(entries[1]["tag"], "");
        assert_eq!(entries[2]["level"], "Error");
        assert_eq!(entries[2]["line"], 3);
        assert_eq!(entries[2]["filename"], "store.rs");
    }

    #[test]
    fn test_empty_array() {
        let sink = JsonSink::new(Vec::new()).unwrap();
        let bytes = sink.into_inner().unwrap();
        assert_eq!(bytes, b"[\n]");
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value, Value::Array(vec![]));
    }

    #[test]
    fn test_drop_closes_array() {
        let file = tempfile::NamedTempFile::new().unwrap();
        {
            let sink = JsonSink::new(file.reopen().unwrap()).unwrap();
            sink.emit(&record(Level::Info, "drop", 7), "closed on drop").unwrap();
        }

        let content = fs::read_to_string(file.path()).unwrap();
        let value: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_emit_after_finish_fails() {
        let sink = JsonSink::new(Vec::new()).unwrap();
        sink.finish().unwrap();
        assert!(sink.emit(&record(Level::Info, "", 1), "late").is_err());
        assert!(sink.finish().is_ok());
        assert!(sink.into_inner().is_err());
    }
}
