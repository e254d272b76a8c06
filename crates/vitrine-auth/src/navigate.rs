//! Navigation capability.
//!
//! The session store signals route changes through this trait instead of
//! touching `window.location` itself: the browser build injects
//! [`WebNavigator`], tests and native builds use [`RecordingNavigator`].

use std::sync::Mutex;

/// Routes the data layer can send the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Default landing page.
    Home,
    /// Login entry point.
    Login,
    /// Administrative landing page.
    Admin,
}

impl Route {
    /// The path this route lives at.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Admin => "/admin",
        }
    }
}

/// Ability to navigate the user to a route.
pub trait Navigator {
    fn navigate(&self, route: Route);
}

/// Browser navigation via `window.location`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct WebNavigator;

#[cfg(target_arch = "wasm32")]
impl WebNavigator {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_arch = "wasm32")]
impl Navigator for WebNavigator {
    fn navigate(&self, route: Route) {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(route.path()).is_err() {
                log::warn!("navigation to {} failed", route.path());
            }
        }
    }
}

/// Records navigations instead of performing them. Serves as both the
/// no-op implementation for headless builds and the test double.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes navigated to, in order.
    pub fn visited(&self) -> Vec<Route> {
        self.visited.lock().map(|v| v.clone()).unwrap_or_default()
    }

    /// The most recent navigation, if any.
    pub fn last(&self) -> Option<Route> {
        self.visited().last().copied()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        if let Ok(mut visited) = self.visited.lock() {
            visited.push(route);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::Login.path(), "/login");
        assert_eq!(Route::Admin.path(), "/admin");
    }

    #[test]
    fn test_recording_navigator_keeps_order() {
        let navigator = RecordingNavigator::new();
        navigator.navigate(Route::Login);
        navigator.navigate(Route::Home);

        assert_eq!(navigator.visited(), vec![Route::Login, Route::Home]);
        assert_eq!(navigator.last(), Some(Route::Home));
    }
}
