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

use std::fmt::Write;

use jiff::tz::TimeZone;

use crate::Error;
use crate::Layout;
use crate::record::Record;

const DELIMITER: &str = "\n\r";
const TIMESTAMP_FORMAT: &str = "%b %-d %-H:%M:%S %Z";

/// A layout that formats a log record as one delimited line-group.
///
/// Output format:
///
/// ```text
///
/// [Aug 3 14:05:09 UTC] - startup - Referrer: /index
///
/// [Aug 3 14:05:10 UTC] - db down (User) - Referrer: /users/42
/// ```
///
/// Every entry is preceded and followed by `\n\r`. The parenthesized sender is
/// omitted when the record has no sender. When the record has no referrer, the
/// placeholder (`-` by default) is written instead.
///
/// The timestamp is rendered in the system time zone unless another
/// [`TimeZone`] is configured.
///
/// # Examples
///
/// ```
/// use catlog::layout::LineGroupLayout;
///
/// let layout = LineGroupLayout::default();
/// ```
#[derive(Debug, Clone)]
pub struct LineGroupLayout {
    timezone: TimeZone,
    referrer_placeholder: String,
}

impl Default for LineGroupLayout {
    fn default() -> Self {
        Self {
            timezone: TimeZone::system(),
            referrer_placeholder: "-".to_string(),
        }
    }
}

impl LineGroupLayout {
    /// Set the timezone for timestamps.
    ///
    /// # Examples
    ///
    /// ```
    /// use catlog::layout::LineGroupLayout;
    /// use jiff::tz::TimeZone;
    ///
    /// let layout = LineGroupLayout::default().timezone(TimeZone::UTC);
    /// ```
    pub fn timezone(mut self, tz: TimeZone) -> Self {
        self.timezone = tz;
        self
    }

    /// Set the text written in place of a missing referrer.
    pub fn referrer_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.referrer_placeholder = placeholder.into();
        self
    }
}

impl Layout for LineGroupLayout {
    fn format(&self, record: &Record) -> Result<Vec<u8>, Error> {
        let mut text = String::from(DELIMITER);

        let time = record.time().to_zoned(self.timezone.clone());
        let message = record.message();
        write!(&mut text, "[{}] - {message}", time.strftime(TIMESTAMP_FORMAT))
            .map_err(Error::from_fmt_error)?;

        if let Some(sender) = record.sender() {
            text.push_str(" (");
            text.push_str(sender);
            text.push(')');
        }

        let referrer = record.referrer().unwrap_or(&self.referrer_placeholder);
        text.push_str(" - Referrer: ");
        text.push_str(referrer);
        text.push_str(DELIMITER);

        Ok(text.into_bytes())
    }
}
