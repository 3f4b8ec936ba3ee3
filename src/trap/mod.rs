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

//! Traps for logging errors that cannot be returned to the caller.

use std::fmt;
use std::io;
use std::io::Write;

use crate::Error;

mod fatal;

pub use self::fatal::FatalTrap;

/// A trap for errors raised on logging paths that have no caller to report to,
/// like the `log` crate bridge.
pub trait Trap: fmt::Debug + Send + Sync + 'static {
    /// Handle an error.
    fn trap(&self, err: &Error);
}

impl<T: Trap> From<T> for Box<dyn Trap> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

/// A trap that reports errors to standard error and lets the process carry on.
///
/// The lost entry is reported, never dropped silently. Use it where a broken
/// log sink must not take the process down.
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct DefaultTrap {}

impl Trap for DefaultTrap {
    fn trap(&self, err: &Error) {
        let _ = report(&mut io::stderr().lock(), err);
    }
}

// first line is the bare message naming the file; details follow
fn report(w: &mut impl Write, err: &Error) -> io::Result<()> {
    writeln!(w, "{}", err.message())?;
    writeln!(w, "{err:?}")
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_report_leads_with_message() {
        let err = Error::new(ErrorKind::OpenFile, "Can not open file. warn.log")
            .with_context("file", "/srv/logs/warn.log")
            .with_source(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));

        let mut out = Vec::new();
        report(&mut out, &err).unwrap();
        let out = String::from_utf8(out).unwrap();

        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("Can not open file. warn.log"));
        assert_eq!(lines.next(), Some("Can not open file. warn.log (OpenFile)"));
        assert!(out.contains("   file: /srv/logs/warn.log"));
        assert!(out.contains("   denied"));
    }

    #[test]
    fn test_default_trap_returns() {
        let err = Error::new(ErrorKind::CreateFile, "Can't create log file: info.log");
        DefaultTrap::default().trap(&err);
    }
}
