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

use crate::Error;
use crate::Layout;
use crate::append::Append;
use crate::layout::LineGroupLayout;
use crate::record::Record;

/// An appender that writes log records that can be captured by a test harness (like `cargo test`),
/// and thus the outputs are suppressed unless `--nocapture` or `--show-output` is specified.
///
/// The line-group delimiters are trimmed so each entry prints as one line.
///
/// # Examples
///
/// ```
/// use catlog::append::Testing;
///
/// let test_appender = Testing::default();
/// ```
#[derive(Debug)]
pub struct Testing {
    layout: Box<dyn Layout>,
}

impl Default for Testing {
    fn default() -> Self {
        Self {
            layout: Box::new(LineGroupLayout::default()),
        }
    }
}

impl Testing {
    /// Set the layout for the [`Testing`] appender.
    ///
    /// Default to [`LineGroupLayout`].
    pub fn with_layout(mut self, layout: impl Into<Box<dyn Layout>>) -> Self {
        self.layout = layout.into();
        self
    }
}

impl Append for Testing {
    fn append(&self, record: &Record) -> Result<(), Error> {
        let bytes = self.layout.format(record)?;
        let text = String::from_utf8_lossy(&bytes);
        eprintln!("{:>5} {}", record.category(), text.trim());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::tz::TimeZone;

    use super::*;
    use crate::record::Category;

    #[derive(Debug)]
    struct Failing;

    impl Layout for Failing {
        fn format(&self, _: &Record) -> Result<Vec<u8>, Error> {
            Err(Error::from_fmt_error(std::fmt::Error))
        }
    }

    #[test]
    fn test_with_layout() {
        let record = Record::builder()
            .time("2024-08-03T14:05:09Z".parse().unwrap())
            .category(Category::Warn)
            .message("low disk")
            .build();

        let testing =
            Testing::default().with_layout(LineGroupLayout::default().timezone(TimeZone::UTC));
        testing.append(&record).unwrap();

        let err = Testing::default()
            .with_layout(Failing)
            .append(&record)
            .unwrap_err();
        assert_eq!(err.message(), "failed to perform format");
    }
}
