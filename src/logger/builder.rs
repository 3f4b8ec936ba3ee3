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

use std::env;
use std::path::Path;
use std::path::PathBuf;

use crate::Append;
use crate::Layout;
use crate::Logger;
use crate::append::CategoryFilesBuilder;
use crate::logger::log_impl::set_global_logger;
use crate::trap::FatalTrap;
use crate::trap::Trap;

/// The log directory, relative to the directory of the running executable.
pub const DEFAULT_RELATIVE_PATH: &str = "../logs";

/// Resolve the default log directory: `logs`, one level above the directory
/// holding the running executable.
///
/// Falls back to resolving against the working directory when the executable
/// path is unavailable.
pub fn deploy_log_dir() -> PathBuf {
    let base = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join(DEFAULT_RELATIVE_PATH)
}

/// Create a new [`LoggerBuilder`] writing into `log_dir`.
///
/// # Examples
///
/// ```
/// let logger = catlog::builder("/var/app/logs").build();
/// assert_eq!(logger.log_dir(), std::path::Path::new("/var/app/logs"));
/// ```
pub fn builder(log_dir: impl Into<PathBuf>) -> LoggerBuilder {
    LoggerBuilder::new(log_dir)
}

/// A builder for configuring a [`Logger`] and optionally installing it as the
/// process-wide logger.
///
/// # Examples
///
/// ```
/// use catlog::trap::DefaultTrap;
///
/// let logger = catlog::builder("/var/app/logs")
///     .create_dir(true)
///     .trap(DefaultTrap::default())
///     .build();
/// ```
#[must_use = "call `apply` to set the global logger or `build` to construct a logger instance"]
#[derive(Debug)]
pub struct LoggerBuilder {
    files: CategoryFilesBuilder,
    appends: Vec<Box<dyn Append>>,
    trap: Box<dyn Trap>,
}

impl LoggerBuilder {
    /// Create a builder writing into `log_dir`.
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            files: CategoryFilesBuilder::new(log_dir),
            appends: vec![],
            trap: Box::new(FatalTrap::default()),
        }
    }

    /// Create a builder writing into [`deploy_log_dir`].
    pub fn from_deploy_location() -> Self {
        Self::new(deploy_log_dir())
    }

    /// Set the layout of the category files.
    pub fn layout(mut self, layout: impl Into<Box<dyn Layout>>) -> Self {
        self.files = self.files.layout(layout);
        self
    }

    /// Whether to create the log directory when it is missing. Default to `false`.
    pub fn create_dir(mut self, create_dir: bool) -> Self {
        self.files = self.files.create_dir(create_dir);
        self
    }

    /// Add an appender that receives every record after the category files.
    ///
    /// # Examples
    ///
    /// ```
    /// use catlog::append::Testing;
    ///
    /// let logger = catlog::builder("logs").append(Testing::default()).build();
    /// ```
    pub fn append(mut self, append: impl Into<Box<dyn Append>>) -> Self {
        self.appends.push(append.into());
        self
    }

    /// Set the trap for errors that cannot be returned to a caller.
    ///
    /// Default to [`FatalTrap`].
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = trap.into();
        self
    }

    /// Build the [`Logger`].
    pub fn build(self) -> Logger {
        Logger::new(self.files.build(), self.appends, self.trap)
    }

    /// Set up the process-wide logger.
    ///
    /// # Errors
    ///
    /// Return the built logger back if a process-wide logger has already been set.
    ///
    /// # Examples
    ///
    /// ```
    /// if catlog::builder("logs").try_apply().is_err() {
    ///     eprintln!("failed to set logger");
    /// }
    /// ```
    pub fn try_apply(self) -> Result<(), Logger> {
        set_global_logger(self.build())
    }

    /// Set up the process-wide logger.
    ///
    /// This should be called early in the execution of a Rust program.
    ///
    /// # Panics
    ///
    /// Panic if the process-wide logger has already been set.
    pub fn apply(self) {
        self.try_apply()
            .expect("LoggerBuilder::apply must be called before the global logger initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deploy_log_dir() {
        let dir = deploy_log_dir();
        assert!(dir.ends_with(DEFAULT_RELATIVE_PATH));
        assert!(dir.is_absolute());

        let exe_dir = env::current_exe().unwrap().parent().unwrap().to_path_buf();
        assert_eq!(dir, exe_dir.join("..").join("logs"));
    }

    #[test]
    fn test_builder_dir() {
        let logger = LoggerBuilder::from_deploy_location().build();
        assert_eq!(logger.log_dir(), deploy_log_dir());

        let logger = builder("/srv/app/logs").build();
        assert_eq!(logger.log_dir(), Path::new("/srv/app/logs"));
    }
}
