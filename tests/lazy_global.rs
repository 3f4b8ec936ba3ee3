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
use std::time::SystemTime;

#[test]
fn test_global_defaults_to_deploy_location() {
    let logger = catlog::global();
    assert_eq!(logger.log_dir(), catlog::deploy_log_dir());
    assert!(std::ptr::eq(logger, catlog::global()));

    // the lazily created instance occupies the slot
    assert!(catlog::builder("elsewhere").try_apply().is_err());

    // and receives the `log` macros
    fs::create_dir_all(logger.log_dir()).unwrap();
    let nanos = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let message = format!("routed through log {} {nanos}", std::process::id());
    log::error!("{message}");

    let content = fs::read_to_string(logger.log_dir().join("error.log")).unwrap();
    assert!(content.contains(&format!("] - {message} - Referrer: -\n\r")));
}
