//! Application routes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every page the application serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Home,
    Auth,
    Marketplace,
    Cart,
    Payment,
    WellnessJourney,
    NotFound,
}

impl Route {
    /// Routes with a path of their own.
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::Auth,
        Route::Marketplace,
        Route::Cart,
        Route::Payment,
        Route::WellnessJourney,
    ];

    /// Match a request path. Query strings, fragments and a trailing slash
    /// are ignored; anything unknown is [`Route::NotFound`].
    pub fn from_path(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        Route::ALL
            .iter()
            .copied()
            .find(|r| r.path() == path)
            .unwrap_or(Route::NotFound)
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Auth => "/auth",
            Route::Marketplace => "/marketplace",
            Route::Cart => "/cart",
            Route::Payment => "/payment",
            Route::WellnessJourney => "/wellness-journey",
            Route::NotFound => "/404",
        }
    }

    /// Document title.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "AyurvedaCareConnect",
            Route::Auth => "Sign In | AyurvedaCareConnect",
            Route::Marketplace => "Herbal Marketplace | AyurvedaCareConnect",
            Route::Cart => "Shopping Cart | AyurvedaCareConnect",
            Route::Payment => "Payment | AyurvedaCareConnect",
            Route::WellnessJourney => "Wellness Journey | AyurvedaCareConnect",
            Route::NotFound => "Page Not Found | AyurvedaCareConnect",
        }
    }

    /// HTTP status a page for this route is served with.
    pub fn status(&self) -> u16 {
        match self {
            Route::NotFound => 404,
            _ => 200,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/marketplace/"), Route::Marketplace);
        assert_eq!(Route::from_path("/marketplace?search=brahmi"), Route::Marketplace);
        assert_eq!(Route::from_path("/wellness-journey#programs"), Route::WellnessJourney);
        assert_eq!(Route::from_path("/admin"), Route::NotFound);
    }

    #[test]
    fn test_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), route);
        }
        assert_eq!(Route::NotFound.status(), 404);
    }
}
