// Copyright 2026 the Updraft Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hash-based routing.
//!
//! The site uses fragment routes (`#/about`) so navigation works from a
//! static file server with no history API involvement. Parsing is a pure
//! function of the hash string; unknown routes fall back to [`Route::Home`].

/// The four pages of the site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Route {
    /// Full single-page layout: hero, about, projects, and contact stacked.
    #[default]
    Home,
    About,
    Projects,
    Contact,
}

impl Route {
    /// Parses a `location.hash` value (including the leading `#`).
    ///
    /// Trailing slashes are tolerated; anything unrecognized is `Home`.
    #[must_use]
    pub(crate) fn from_hash(hash: &str) -> Self {
        let path = hash.strip_prefix('#').unwrap_or(hash);
        match path.trim_end_matches('/') {
            "/about" => Self::About,
            "/projects" => Self::Projects,
            "/contact" => Self::Contact,
            _ => Self::Home,
        }
    }

    /// The hash fragment that navigates to this route.
    #[must_use]
    pub(crate) const fn hash(self) -> &'static str {
        match self {
            Self::Home => "#/",
            Self::About => "#/about",
            Self::Projects => "#/projects",
            Self::Contact => "#/contact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_routes_parse() {
        assert_eq!(Route::from_hash("#/"), Route::Home);
        assert_eq!(Route::from_hash("#/about"), Route::About);
        assert_eq!(Route::from_hash("#/projects"), Route::Projects);
        assert_eq!(Route::from_hash("#/contact"), Route::Contact);
    }

    #[test]
    fn empty_and_unknown_fall_back_to_home() {
        assert_eq!(Route::from_hash(""), Route::Home);
        assert_eq!(Route::from_hash("#"), Route::Home);
        assert_eq!(Route::from_hash("#/blog"), Route::Home);
        assert_eq!(Route::from_hash("#/about/extra"), Route::Home);
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(Route::from_hash("#/about/"), Route::About);
    }

    #[test]
    fn hash_round_trips() {
        for route in [Route::Home, Route::About, Route::Projects, Route::Contact] {
            assert_eq!(Route::from_hash(route.hash()), route);
        }
    }
}
