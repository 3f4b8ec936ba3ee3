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

//! Catlog is a tiny logger that writes timestamped lines to one file per
//! category: `info.log`, `warn.log` and `error.log`.
//!
//! # Overview
//!
//! Each call formats one entry and appends it synchronously to the file of its
//! category, creating the file on first use:
//!
//! ```text
//!
//! [Aug 3 14:05:09 UTC] - db down (User) - Referrer: /users/42
//! ```
//!
//! The parenthesized sender is optional. The referrer is the URI of the request
//! being served, passed explicitly or taken from the thread's
//! [`RequestContext`].
//!
//! Logging errors are returned to the caller. Paths that cannot return them,
//! like the `log` crate bridge, hand them to a [`trap`](crate::trap); the
//! default trap terminates the process.
//!
//! # Examples
//!
//! Build a logger and pass it around:
//!
//! ```
//! let dir = tempfile::tempdir().unwrap();
//! let logger = catlog::builder(dir.path()).build();
//!
//! logger.info("startup", None, Some("/")).unwrap();
//! logger.error("db down", Some("User"), Some("/users/42")).unwrap();
//! ```
//!
//! Or install it process-wide, which also routes the `log` macros:
//!
//! ```
//! let dir = tempfile::tempdir().unwrap();
//! catlog::builder(dir.path()).apply();
//!
//! let _request = catlog::RequestContext::enter("/index");
//! log::warn!(sender = "Disk"; "low disk");
//! catlog::global().info("served", None, None).unwrap();
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod append;
pub mod layout;
pub mod record;
pub mod sender;
pub mod trap;

pub use append::Append;
pub use layout::Layout;
pub use record::Category;

mod context;
pub use context::RequestContext;
pub use context::RequestGuard;

mod error;
pub use error::Error;
pub use error::ErrorKind;

mod logger;
pub use logger::*;

#[cfg(feature = "bridge-log")]
pub mod bridge;
