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

//! The request a log entry is attributed to.

use std::cell::RefCell;
use std::marker::PhantomData;

thread_local! {
    static CURRENT_REQUEST: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// The inbound request active while logging.
///
/// [`enter`] a request scope on the handling thread; log calls made on that
/// thread without an explicit referrer record its URI.
///
/// [`enter`]: RequestContext::enter
///
/// ## Example
///
/// ```
/// use catlog::RequestContext;
///
/// let _guard = RequestContext::enter("/orders/7");
/// assert_eq!(RequestContext::current().as_deref(), Some("/orders/7"));
/// ```
#[derive(Default, Debug, Clone, Copy)]
#[non_exhaustive]
pub struct RequestContext {}

impl RequestContext {
    /// Make `uri` the current request of this thread until the guard drops.
    ///
    /// Scopes nest; dropping the guard restores the enclosing request.
    pub fn enter(uri: impl Into<String>) -> RequestGuard {
        let previous = CURRENT_REQUEST.with(|current| current.replace(Some(uri.into())));
        RequestGuard {
            previous,
            _not_send: PhantomData,
        }
    }

    /// The current request URI of this thread, if any.
    pub fn current() -> Option<String> {
        CURRENT_REQUEST.with(|current| current.borrow().clone())
    }
}

/// Restores the previous request of the thread on drop.
#[derive(Debug)]
#[must_use = "the request scope ends when the guard is dropped"]
pub struct RequestGuard {
    previous: Option<String>,
    // the guard must drop on the thread that entered the scope
    _not_send: PhantomData<*const ()>,
}

impl Drop for RequestGuard {
    fn drop(&mut self) {
        let previous = self.previous.take();
        CURRENT_REQUEST.with(|current| {
            *current.borrow_mut() = previous;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_scopes() {
        assert_eq!(RequestContext::current(), None);
        {
            let _outer = RequestContext::enter("/outer");
            {
                let _inner = RequestContext::enter("/inner");
                assert_eq!(RequestContext::current().as_deref(), Some("/inner"));
            }
            assert_eq!(RequestContext::current().as_deref(), Some("/outer"));
        }
        assert_eq!(RequestContext::current(), None);
    }

    #[test]
    fn test_scope_is_thread_local() {
        let _guard = RequestContext::enter("/main");
        let seen = std::thread::spawn(RequestContext::current).join().unwrap();
        assert_eq!(seen, None);
    }
}
