//! Typed client-side routes
//!
//! All routes are static paths matched exactly; there are no path or query
//! parameters. [`Route::parse`] is the pure path-to-variant function, and
//! [`Route::path`] is the single source for nav-link hrefs and programmatic
//! navigation targets.

/// One variant per client-visible route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    SignIn,
    SignUp,
    NewPost,
    Posts,
    EditPost,
    NotFound,
}

impl Route {
    /// Map a location path to a route. Unmatched paths are `NotFound`.
    pub fn parse(path: &str) -> Self {
        match path {
            "/" => Route::Home,
            "/signin" => Route::SignIn,
            "/signup" => Route::SignUp,
            "/new-post" => Route::NewPost,
            "/posts" => Route::Posts,
            "/edit-post" => Route::EditPost,
            _ => Route::NotFound,
        }
    }

    /// The canonical path for this route
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::SignIn => "/signin",
            Route::SignUp => "/signup",
            Route::NewPost => "/new-post",
            Route::Posts => "/posts",
            Route::EditPost => "/edit-post",
            Route::NotFound => "/not-found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/signin"), Route::SignIn);
        assert_eq!(Route::parse("/signup"), Route::SignUp);
        assert_eq!(Route::parse("/new-post"), Route::NewPost);
        assert_eq!(Route::parse("/posts"), Route::Posts);
        assert_eq!(Route::parse("/edit-post"), Route::EditPost);
    }

    #[test]
    fn test_unmatched_path_is_not_found() {
        assert_eq!(Route::parse("/nonexistent"), Route::NotFound);
        assert_eq!(Route::parse(""), Route::NotFound);
        // Matching is exact, not prefix-based
        assert_eq!(Route::parse("/posts/1"), Route::NotFound);
    }

    #[test]
    fn test_path_parse_round_trip() {
        for route in [
            Route::Home,
            Route::SignIn,
            Route::SignUp,
            Route::NewPost,
            Route::Posts,
            Route::EditPost,
        ] {
            assert_eq!(Route::parse(route.path()), route);
        }
    }
}
