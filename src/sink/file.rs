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
use std::fs;
use std::fs::File;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::Error;
use crate::record::Metadata;
use crate::sink::Sink;
use crate::sink::write_line;

/// A sink that writes each message on its own line to an already opened writer.
///
/// Every record is followed by a line terminator and an immediate flush. The writer is owned by
/// the sink; wrap the sink in an [`Arc`](std::sync::Arc) to keep access to it after registration.
///
/// # Examples
///
/// ```
/// use rlog::sink::FileSink;
///
/// let file = tempfile::tempfile().unwrap();
/// let sink = FileSink::new(file);
/// ```
pub struct FileSink<W> {
    writer: Mutex<W>,
}

impl<W> fmt::Debug for FileSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FileSink {{ ... }}")
    }
}

impl<W: Write + Send + 'static> FileSink<W> {
    /// Create a sink writing to `writer`.
    pub fn new(writer: W) -> Self {
        FileSink {
            writer: Mutex::new(writer),
        }
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(|e| e.into_inner())
    }

    fn writer(&self) -> MutexGuard<'_, W> {
        self.writer.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl FileSink<File> {
    /// Open `path` for appending, creating the file and its parent directories if missing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|err| {
                Error::new("failed to create log directory")
                    .with_context("path", dir.display())
                    .with_source(err)
            })?;
        }

        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(|err| {
                Error::new("failed to open log file")
                    .with_context("path", path.display())
                    .with_source(err)
            })?;
        Ok(FileSink::new(file))
    }
}

impl<W: Write + Send + 'static> Sink for FileSink<W> {
    fn emit(&self, _: &Metadata, message: &str) -> Result<(), Error> {
        write_line(&mut *self.writer(), message)
            .map_err(|err| Error::from_io_error(err).with_context("sink", "FileSink"))
    }
}
