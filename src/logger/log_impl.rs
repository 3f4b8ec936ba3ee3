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

use std::path::Path;
#[cfg(feature = "bridge-log")]
use std::sync::Once;
use std::sync::OnceLock;

use crate::Append;
use crate::Error;
use crate::RequestContext;
use crate::append::CategoryFiles;
use crate::logger::LoggerBuilder;
use crate::record::Category;
use crate::record::Record;
use crate::trap::Trap;

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Return the process-wide logger, if one has been set.
pub fn global_logger() -> Option<&'static Logger> {
    GLOBAL_LOGGER.get()
}

/// Return the process-wide logger, creating one at the
/// [deployment location](crate::deploy_log_dir) on first access.
///
/// Successive calls return the same instance. With the `bridge-log` feature,
/// a lazily created instance is installed into the [`log`] facade as well.
pub fn global() -> &'static Logger {
    let logger = GLOBAL_LOGGER.get_or_init(|| LoggerBuilder::from_deploy_location().build());
    install_log_bridge(logger);
    logger
}

/// Set the process-wide logger.
///
/// With the `bridge-log` feature, the [`log`] facade is also pointed at this
/// logger unless another `log` implementation was installed before.
///
/// # Errors
///
/// Return the logger back if a process-wide logger has already been set.
pub fn set_global_logger(logger: Logger) -> Result<(), Logger> {
    GLOBAL_LOGGER.set(logger)?;
    if let Some(logger) = GLOBAL_LOGGER.get() {
        install_log_bridge(logger);
    }
    Ok(())
}

#[cfg(feature = "bridge-log")]
fn install_log_bridge(logger: &'static Logger) {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        if log::set_logger(logger).is_ok() {
            log::set_max_level(log::LevelFilter::Trace);
        }
    });
}

#[cfg(not(feature = "bridge-log"))]
fn install_log_bridge(_: &'static Logger) {}

/// A logger writing each entry to the file of its [`Category`].
///
/// Every call is synchronous: the category file is opened, written once and
/// closed before the call returns.
///
/// # Examples
///
/// ```
/// let dir = tempfile::tempdir().unwrap();
/// let logger = catlog::builder(dir.path()).build();
///
/// logger.info("startup", None, Some("/")).unwrap();
/// logger.error("db down", Some("User"), Some("/users/42")).unwrap();
/// ```
#[derive(Debug)]
pub struct Logger {
    files: CategoryFiles,
    appends: Vec<Box<dyn Append>>,
    trap: Box<dyn Trap>,
}

impl Logger {
    pub(super) fn new(
        files: CategoryFiles,
        appends: Vec<Box<dyn Append>>,
        trap: Box<dyn Trap>,
    ) -> Self {
        Self {
            files,
            appends,
            trap,
        }
    }

    /// The directory holding `info.log`, `warn.log` and `error.log`.
    pub fn log_dir(&self) -> &Path {
        self.files.dir()
    }

    /// Append an entry to `info.log`.
    pub fn info(
        &self,
        message: &str,
        sender: Option<&str>,
        referrer: Option<&str>,
    ) -> Result<(), Error> {
        self.log(Category::Info, message, sender, referrer)
    }

    /// Append an entry to `warn.log`.
    pub fn warn(
        &self,
        message: &str,
        sender: Option<&str>,
        referrer: Option<&str>,
    ) -> Result<(), Error> {
        self.log(Category::Warn, message, sender, referrer)
    }

    /// Append an entry to `error.log`.
    pub fn error(
        &self,
        message: &str,
        sender: Option<&str>,
        referrer: Option<&str>,
    ) -> Result<(), Error> {
        self.log(Category::Error, message, sender, referrer)
    }

    /// Append an entry to the file of `category`.
    ///
    /// Without an explicit `referrer`, the current [`RequestContext`] of the
    /// thread is used, if any.
    ///
    /// # Errors
    ///
    /// Return an error naming the file when it cannot be created, opened or
    /// written. Nothing is retried.
    pub fn log(
        &self,
        category: Category,
        message: &str,
        sender: Option<&str>,
        referrer: Option<&str>,
    ) -> Result<(), Error> {
        let current;
        let referrer = match referrer {
            Some(referrer) => Some(referrer),
            None => {
                current = RequestContext::current();
                current.as_deref()
            }
        };

        let record = Record::builder()
            .category(category)
            .message(message)
            .sender(sender)
            .referrer(referrer)
            .build();

        self.files.append(&record)?;
        for append in &self.appends {
            append.append(&record)?;
        }
        Ok(())
    }

    /// Flush all appenders.
    pub fn flush(&self) -> Result<(), Error> {
        self.files.flush()?;
        for append in &self.appends {
            append.flush()?;
        }
        Ok(())
    }

    /// Hand `err` to the configured trap.
    ///
    /// With the default [`FatalTrap`](crate::trap::FatalTrap) this terminates
    /// the process.
    pub fn trap(&self, err: &Error) {
        self.trap.trap(err);
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::Arc;
    use std::sync::Mutex;

    use tempfile::TempDir;

    use super::*;
    use crate::ErrorKind;
    use crate::append::Testing;
    use crate::builder;

    #[derive(Debug, Default, Clone)]
    struct Collect(Arc<Mutex<Vec<String>>>);

    impl Append for Collect {
        fn append(&self, record: &Record) -> Result<(), Error> {
            let line = format!(
                "{} {} {:?} {:?}",
                record.category(),
                record.message(),
                record.sender(),
                record.referrer()
            );
            self.0.lock().unwrap().push(line);
            Ok(())
        }
    }

    impl Trap for Collect {
        fn trap(&self, err: &Error) {
            self.0.lock().unwrap().push(err.message().to_string());
        }
    }

    #[test]
    fn test_each_category_writes_its_own_file() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let logger = builder(temp_dir.path()).append(Testing::default()).build();

        logger.info("i", None, Some("/")).unwrap();
        logger.warn("w", None, Some("/")).unwrap();
        logger.error("e", None, Some("/")).unwrap();

        for (category, message) in [
            (Category::Info, "i"),
            (Category::Warn, "w"),
            (Category::Error, "e"),
        ] {
            let content = fs::read_to_string(temp_dir.path().join(category.file_name())).unwrap();
            assert_eq!(content.matches("] - ").count(), 1);
            assert!(content.contains(&format!("] - {message} - Referrer: /\n\r")));
        }
    }

    #[test]
    fn test_referrer_falls_back_to_request_context() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let collect = Collect::default();
        let logger = builder(temp_dir.path()).append(collect.clone()).build();

        logger.info("no request", None, None).unwrap();
        {
            let _guard = RequestContext::enter("/checkout");
            logger.info("implicit", Some("Cart"), None).unwrap();
            logger.info("explicit", None, Some("/override")).unwrap();
        }

        let lines = collect.0.lock().unwrap().clone();
        assert_eq!(
            lines,
            vec![
                "info no request None None".to_string(),
                r#"info implicit Some("Cart") Some("/checkout")"#.to_string(),
                r#"info explicit None Some("/override")"#.to_string(),
            ]
        );
    }

    #[test]
    fn test_failed_file_skips_other_appenders_and_trap_is_explicit() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let collect = Collect::default();
        let logger = builder(temp_dir.path().join("missing"))
            .append(collect.clone())
            .trap(collect.clone())
            .build();

        let err = logger.warn("low disk", None, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CreateFile);
        assert!(collect.0.lock().unwrap().is_empty());

        logger.trap(&err);
        assert_eq!(
            collect.0.lock().unwrap().as_slice(),
            ["Can't create log file: warn.log"]
        );
    }
}
