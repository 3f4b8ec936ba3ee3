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

use std::io;
use std::process;

use crate::Error;
use crate::trap::Trap;
use crate::trap::report;

/// A trap that writes the error message to standard error and terminates the
/// process.
///
/// This is the default trap of a [`Logger`](crate::Logger): a log entry that
/// cannot be written is never dropped silently.
#[derive(Debug, Clone, Copy)]
pub struct FatalTrap {
    exit_code: i32,
}

impl Default for FatalTrap {
    fn default() -> Self {
        Self { exit_code: 1 }
    }
}

impl FatalTrap {
    /// Set the exit code of the process. Default to `1`.
    pub fn exit_code(mut self, exit_code: i32) -> Self {
        self.exit_code = exit_code;
        self
    }
}

impl Trap for FatalTrap {
    fn trap(&self, err: &Error) {
        let _ = report(&mut io::stderr().lock(), err);
        process::exit(self.exit_code);
    }
}
