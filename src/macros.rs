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

/// Log a record at the given level.
///
/// Both gates are checked before anything else is evaluated: the compile-time floor
/// [`Level::STATIC_MIN`](crate::Level::STATIC_MIN) and the store's dynamic level. A gated record
/// evaluates neither its tag nor its format arguments.
///
/// The macro evaluates to `Result<(), rlog::Error>`, carrying the first sink failure.
///
/// Optional leading arguments select the store (`logger: &store`, default to
/// [`default_store`](crate::default_store)) and the tag (`tag: "net"`, default to empty).
///
/// # Examples
///
/// ```
/// use rlog::Level;
/// use rlog::Store;
///
/// let store = Store::default();
/// rlog::log!(Level::Warning, "disk at {}%", 93).unwrap();
/// rlog::log!(tag: "disk", Level::Warning, "disk at {}%", 93).unwrap();
/// rlog::log!(logger: &store, tag: "disk", Level::Error, "disk full").unwrap();
/// ```
#[macro_export]
macro_rules! log {
    (logger: $logger:expr, tag: $tag:expr, $level:expr, $($arg:tt)+) => {{
        let level: $crate::Level = $level;
        let logger: &$crate::Store = $logger;
        if level.passes($crate::Level::STATIC_MIN) && logger.enabled(level) {
            logger
                .entry(level, ::std::file!(), ::std::line!(), $tag)
                .message(::std::format_args!($($arg)+))
                .dispatch()
        } else {
            ::std::result::Result::Ok::<(), $crate::Error>(())
        }
    }};
    (logger: $logger:expr, $level:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, tag: "", $level, $($arg)+)
    };
    (tag: $tag:expr, $level:expr, $($arg:tt)+) => {
        $crate::log!(logger: $crate::default_store(), tag: $tag, $level, $($arg)+)
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::log!(logger: $crate::default_store(), tag: "", $level, $($arg)+)
    };
}

/// Log a record at [`Level::Info`](crate::Level::Info).
///
/// Accepts the same optional `logger:` and `tag:` arguments as [`log!`](crate::log).
///
/// # Examples
///
/// ```
/// rlog::info!(tag: "main", "Booting up").unwrap();
/// ```
#[macro_export]
macro_rules! info {
    (logger: $logger:expr, tag: $tag:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, tag: $tag, $crate::Level::Info, $($arg)+)
    };
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Info, $($arg)+)
    };
    (tag: $tag:expr, $($arg:tt)+) => {
        $crate::log!(tag: $tag, $crate::Level::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Info, $($arg)+)
    };
}

/// Log a record at [`Level::Warning`](crate::Level::Warning).
///
/// Accepts the same optional `logger:` and `tag:` arguments as [`log!`](crate::log).
#[macro_export]
macro_rules! warning {
    (logger: $logger:expr, tag: $tag:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, tag: $tag, $crate::Level::Warning, $($arg)+)
    };
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Warning, $($arg)+)
    };
    (tag: $tag:expr, $($arg:tt)+) => {
        $crate::log!(tag: $tag, $crate::Level::Warning, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Warning, $($arg)+)
    };
}

/// Log a record at [`Level::Error`](crate::Level::Error).
///
/// Accepts the same optional `logger:` and `tag:` arguments as [`log!`](crate::log).
#[macro_export]
macro_rules! error {
    (logger: $logger:expr, tag: $tag:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, tag: $tag, $crate::Level::Error, $($arg)+)
    };
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Level::Error, $($arg)+)
    };
    (tag: $tag:expr, $($arg:tt)+) => {
        $crate::log!(tag: $tag, $crate::Level::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Error, $($arg)+)
    };
}
