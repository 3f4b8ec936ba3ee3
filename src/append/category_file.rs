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

use std::fs;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::Error;
use crate::ErrorKind;
use crate::Layout;
use crate::append::Append;
use crate::layout::LineGroupLayout;
use crate::record::Category;
use crate::record::Record;

/// A builder to configure and create a [`CategoryFiles`] appender.
#[derive(Debug)]
pub struct CategoryFilesBuilder {
    // required
    dir: PathBuf,

    // optional
    layout: Box<dyn Layout>,
    create_dir: bool,
}

impl CategoryFilesBuilder {
    /// Create a new builder writing into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            layout: Box::new(LineGroupLayout::default()),
            create_dir: false,
        }
    }

    /// Sets the layout for the logs.
    ///
    /// Default to [`LineGroupLayout`].
    pub fn layout(mut self, layout: impl Into<Box<dyn Layout>>) -> Self {
        self.layout = layout.into();
        self
    }

    /// Whether to create the log directory when it is missing.
    ///
    /// Default to `false`: a missing directory makes every append fail with
    /// [`ErrorKind::CreateFile`].
    pub fn create_dir(mut self, create_dir: bool) -> Self {
        self.create_dir = create_dir;
        self
    }

    /// Build the [`CategoryFiles`] appender.
    ///
    /// Nothing is touched on disk until the first append.
    pub fn build(self) -> CategoryFiles {
        let CategoryFilesBuilder {
            dir,
            layout,
            create_dir,
        } = self;
        CategoryFiles {
            dir,
            layout,
            create_dir,
        }
    }
}

/// An appender that writes each record to the file of its category.
///
/// Files are named `info.log`, `warn.log` and `error.log`. Each append opens
/// the file in append mode, writes the whole entry at once and closes it.
///
/// # Examples
///
/// ```
/// use catlog::append::CategoryFilesBuilder;
///
/// let files = CategoryFilesBuilder::new("/var/app/logs").build();
/// ```
#[derive(Debug)]
pub struct CategoryFiles {
    dir: PathBuf,
    layout: Box<dyn Layout>,
    create_dir: bool,
}

impl CategoryFiles {
    /// The directory holding the category files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The full path of the file for `category`.
    pub fn file_path(&self, category: Category) -> PathBuf {
        self.dir.join(category.file_name())
    }

    fn ensure_file(&self, category: Category, path: &Path) -> Result<(), Error> {
        if path.exists() {
            return Ok(());
        }

        let create_error = |err| {
            Error::new(
                ErrorKind::CreateFile,
                format!("Can't create log file: {}", category.file_name()),
            )
            .with_context("file", path.display())
            .with_source(err)
        };

        if self.create_dir {
            fs::create_dir_all(&self.dir).map_err(create_error)?;
        }

        // never truncate: another writer may have created it in the meantime
        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(create_error)?;
        Ok(())
    }
}

impl Append for CategoryFiles {
    fn append(&self, record: &Record) -> Result<(), Error> {
        let category = record.category();
        let path = self.file_path(category);
        self.ensure_file(category, &path)?;

        let bytes = self.layout.format(record)?;

        let mut file = OpenOptions::new()
            .append(true)
            .open(&path)
            .map_err(|err| {
                Error::new(
                    ErrorKind::OpenFile,
                    format!("Can not open file. {}", category.file_name()),
                )
                .with_context("file", path.display())
                .with_source(err)
            })?;
        file.write_all(&bytes).map_err(|err| {
            Error::new(
                ErrorKind::Write,
                format!("failed to write log file: {}", category.file_name()),
            )
            .with_context("file", path.display())
            .with_source(err)
        })?;
        Ok(())
    }
}
