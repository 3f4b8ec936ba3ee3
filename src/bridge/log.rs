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


use crate::Logger;
use crate::record::Category;

/// The key-value read as the sender of a `log` record.
pub const SENDER_KEY: &str = "sender";

impl From<log::Level> for Category {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warn,
            log::Level::Info | log::Level::Debug | log::Level::Trace => Self::Info,
        }
    }
}

impl log::Log for Logger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        let message = match record.args().as_str() {
            Some(message) => message.to_string(),
            None => record.args().to_string(),
        };
        let sender = record
            .key_values()
            .get(log::kv::Key::from(SENDER_KEY))
            .map(|value| value.to_string());

        if let Err(err) = Logger::log(
            self,
            record.level().into(),
            &message,
            sender.as_deref(),
            None,
        ) {
            self.trap(&err);
        }
    }

    fn flush(&self) {
        if let Err(err) = Logger::flush(self) {
            self.trap(&err);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use jiff::tz::TimeZone;
    use log::Log;
    use tempfile::TempDir;

    use super::*;
    use crate::RequestContext;
    use crate::layout::LineGroupLayout;

    #[test]
    fn test_level_mapping() {
        assert_eq!(Category::from(log::Level::Error), Category::Error);
        assert_eq!(Category::from(log::Level::Warn), Category::Warn);
        assert_eq!(Category::from(log::Level::Info), Category::Info);
        assert_eq!(Category::from(log::Level::Debug), Category::Info);
        assert_eq!(Category::from(log::Level::Trace), Category::Info);
    }

    #[test]
    fn test_log_record_reaches_category_file() {
        let temp_dir = TempDir::new().expect("failed to create a temporary directory");
        let logger = crate::builder(temp_dir.path())
            .layout(LineGroupLayout::default().timezone(TimeZone::UTC))
            .build();

        let kvs = [(SENDER_KEY, "Cart")];
        let _guard = RequestContext::enter("/checkout");
        Log::log(
            &logger,
            &log::Record::builder()
                .level(log::Level::Warn)
                .args(format_args!("only {} left", 2))
                .key_values(&kvs)
                .build(),
        );
        Log::flush(&logger);

        let content = fs::read_to_string(temp_dir.path().join("warn.log")).unwrap();
        assert!(content.ends_with("] - only 2 left (Cart) - Referrer: /checkout\n\r"));
        assert!(!temp_dir.path().join("info.log").exists());
    }
}
