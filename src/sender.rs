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

//! Sender labels derived from Rust type names.
//!
//! A sender is any string; these helpers produce the short type name of a
//! value for callers that attribute entries to the type raising them.
//!
//! ```
//! struct User;
//!
//! assert_eq!(catlog::sender::type_name_of::<User>(), "User");
//! assert_eq!(catlog::sender::type_name_of_val(&User), "User");
//! ```

/// The unqualified name of `T`, without its module path.
///
/// Generic arguments are kept as rendered by [`std::any::type_name`].
pub fn type_name_of<T: ?Sized>() -> &'static str {
    short_name(std::any::type_name::<T>())
}

/// The unqualified name of the type of `val`.
pub fn type_name_of_val<T: ?Sized>(val: &T) -> &'static str {
    short_name(std::any::type_name_of_val(val))
}

fn short_name(full: &'static str) -> &'static str {
    let base_end = full.find('<').unwrap_or(full.len());
    let start = full[..base_end].rfind("::").map_or(0, |i| i + 2);
    &full[start..]
}
