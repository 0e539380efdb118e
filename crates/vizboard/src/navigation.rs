//! Navigation capability injected into views
//!
//! Views never talk to the router directly. They fetch a [`NavigatorHandle`]
//! from the context and ask it to navigate, so they can be rendered and
//! exercised without a live router.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use dioxus::prelude::*;
use thiserror::Error;

use crate::routes::Route;

/// Something that can move the user to another route
pub trait Navigate {
    /// Request navigation to `path`. Fire-and-forget: the caller does not
    /// observe whether the navigation succeeded.
    fn navigate_to(&self, path: &str);
}

/// Errors that can occur while resolving a navigation target
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("No route matches path {0:?}")]
    UnknownRoute(String),
}

/// Resolve a path like `/chat` into a [`Route`]
pub fn resolve_route(path: &str) -> Result<Route, NavigationError> {
    Route::from_str(path).map_err(|_| NavigationError::UnknownRoute(path.to_string()))
}

/// Cloneable handle to the navigation capability, stored in the context
#[derive(Clone)]
pub struct NavigatorHandle(Rc<dyn Navigate>);

impl NavigatorHandle {
    pub fn new(navigator: impl Navigate + 'static) -> Self {
        Self(Rc::new(navigator))
    }
}

impl Navigate for NavigatorHandle {
    fn navigate_to(&self, path: &str) {
        self.0.navigate_to(path);
    }
}

impl fmt::Debug for NavigatorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigatorHandle").finish_non_exhaustive()
    }
}

/// Get the navigation capability installed by an ancestor
pub fn use_navigator_handle() -> NavigatorHandle {
    use_context::<NavigatorHandle>()
}

/// [`Navigate`] implementation backed by the Dioxus router
#[derive(Clone)]
pub struct RouterNavigator {
    inner: dioxus::router::Navigator,
}

impl RouterNavigator {
    /// Capture the navigator of the enclosing `Router`.
    ///
    /// Must be called from a component rendered inside the router.
    pub fn current() -> Self {
        Self { inner: navigator() }
    }
}

impl Navigate for RouterNavigator {
    fn navigate_to(&self, path: &str) {
        push_resolved(path, |route| {
            self.inner.push(route);
        });
    }
}

/// Resolve `path` and hand the route to `push`. Unknown paths are logged and dropped.
fn push_resolved(path: &str, push: impl FnOnce(Route)) {
    match resolve_route(path) {
        Ok(route) => {
            tracing::debug!("Navigating to {}", path);
            push(route);
        }
        Err(e) => tracing::warn!("Dropping navigation request: {}", e),
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::Navigate;

    /// Records every requested path instead of navigating
    #[derive(Clone, Default)]
    pub struct RecordingNavigator {
        requests: Rc<RefCell<Vec<String>>>,
    }

    impl RecordingNavigator {
        pub fn requests(&self) -> Vec<String> {
            self.requests.borrow().clone()
        }
    }

    impl Navigate for RecordingNavigator {
        fn navigate_to(&self, path: &str) {
            self.requests.borrow_mut().push(path.to_string());
        }
    }
}
