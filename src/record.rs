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

//! Log record and category.

use std::fmt;
use std::str::FromStr;

use jiff::Timestamp;

use crate::Error;
use crate::ErrorKind;

/// A single log entry, built and formatted once per log call.
#[derive(Clone, Debug)]
pub struct Record<'a> {
    // the observed time
    now: Timestamp,

    category: Category,
    message: &'a str,

    // attribution
    sender: Option<&'a str>,
    referrer: Option<&'a str>,
}

impl<'a> Record<'a> {
    /// The observed time.
    pub fn time(&self) -> Timestamp {
        self.now
    }

    /// The category, which also selects the target file.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The message body.
    pub fn message(&self) -> &'a str {
        self.message
    }

    /// The label of the component that raised this entry, if any.
    pub fn sender(&self) -> Option<&'a str> {
        self.sender
    }

    /// The URI of the request active when this entry was raised, if known.
    pub fn referrer(&self) -> Option<&'a str> {
        self.referrer
    }

    /// Returns a new builder.
    pub fn builder() -> RecordBuilder<'a> {
        RecordBuilder::default()
    }
}

/// Builder for [`Record`].
#[derive(Debug)]
pub struct RecordBuilder<'a> {
    record: Record<'a>,
}

impl Default for RecordBuilder<'_> {
    fn default() -> Self {
        RecordBuilder {
            record: Record {
                now: Timestamp::now(),
                category: Category::Info,
                message: "",
                sender: None,
                referrer: None,
            },
        }
    }
}

impl<'a> RecordBuilder<'a> {
    /// Set [`time`](Record::time).
    pub fn time(mut self, now: Timestamp) -> Self {
        self.record.now = now;
        self
    }

    /// Set [`category`](Record::category).
    pub fn category(mut self, category: Category) -> Self {
        self.record.category = category;
        self
    }

    /// Set [`message`](Record::message).
    pub fn message(mut self, message: &'a str) -> Self {
        self.record.message = message;
        self
    }

    /// Set [`sender`](Record::sender).
    pub fn sender(mut self, sender: Option<&'a str>) -> Self {
        self.record.sender = sender;
        self
    }

    /// Set [`referrer`](Record::referrer).
    pub fn referrer(mut self, referrer: Option<&'a str>) -> Self {
        self.record.referrer = referrer;
        self
    }

    /// Invoke the builder and return a `Record`
    pub fn build(self) -> Record<'a> {
        self.record
    }
}

/// The severity category of a log entry.
///
/// Each category is written to its own file, named after the category.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Designates errors.
    Error,
    /// Designates hazardous situations.
    Warn,
    /// Designates useful information.
    Info,
}

impl Category {
    /// All categories, most severe first.
    pub const ALL: [Category; 3] = [Category::Error, Category::Warn, Category::Info];

    /// Return the string representation of the `Category`.
    ///
    /// This returns the same string as the `fmt::Display` implementation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Error => "error",
            Category::Warn => "warn",
            Category::Info => "info",
        }
    }

    /// Return the name of the file that holds entries of this category.
    pub fn file_name(&self) -> &'static str {
        match self {
            Category::Error => "error.log",
            Category::Warn => "warn.log",
            Category::Info => "info.log",
        }
    }
}

impl fmt::Debug for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;
    fn from_str(s: &str) -> Result<Category, Self::Err> {
        for category in Category::ALL {
            if s.eq_ignore_ascii_case(category.as_str()) {
                return Ok(category);
            }
        }

        Err(Error::new(
            ErrorKind::Unexpected,
            format!("malformed category: {s:?}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str() {
        assert_eq!("info".parse::<Category>().unwrap(), Category::Info);
        assert_eq!("WARN".parse::<Category>().unwrap(), Category::Warn);
        assert_eq!("Error".parse::<Category>().unwrap(), Category::Error);

        let err = "debug".parse::<Category>().unwrap_err();
        assert_eq!(err.message(), r#"malformed category: "debug""#);
    }

    #[test]
    fn test_category_file_names_are_distinct() {
        let names = Category::ALL.map(|c| c.file_name());
        assert_eq!(names, ["error.log", "warn.log", "info.log"]);
        for category in Category::ALL {
            assert_eq!(category.file_name(), format!("{category}.log"));
        }
    }

    #[test]
    fn test_record_builder() {
        let now: Timestamp = "2024-08-03T14:05:09Z".parse().unwrap();
        let record = Record::builder()
            .time(now)
            .category(Category::Error)
            .message("db down")
            .sender(Some("User"))
            .build();

        assert_eq!(record.time(), now);
        assert_eq!(record.category(), Category::Error);
        assert_eq!(record.message(), "db down");
        assert_eq!(record.sender(), Some("User"));
        assert_eq!(record.referrer(), None);
    }
}
