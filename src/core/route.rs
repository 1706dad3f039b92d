//! # Routes
//!
//! ```text
//! /                    → redirect to /countries
//! /countries           → listing
//! /countries/{name}    → details for the country with that common name
//! ```
//!
//! The `{name}` segment is an opaque lookup key: it is kept verbatim and only
//! encoded when it reaches the HTTP client.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Countries,
    Country(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteError(pub String);

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown route: {}", self.0)
    }
}

impl std::error::Error for RouteError {}

impl Route {
    pub fn country(name: impl Into<String>) -> Self {
        Route::Country(name.into())
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let trimmed = path.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Ok(Route::Countries);
        }
        match trimmed.strip_prefix("/countries") {
            Some("") => Ok(Route::Countries),
            Some(rest) => match rest.strip_prefix('/') {
                Some(name) if !name.is_empty() && !name.contains('/') => {
                    Ok(Route::Country(name.to_string()))
                }
                _ => Err(RouteError(path.to_string())),
            },
            None => Err(RouteError(path.to_string())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Countries => f.write_str("/countries"),
            Route::Country(name) => write!(f, "/countries/{name}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_redirects_to_countries() {
        assert_eq!("/".parse::<Route>(), Ok(Route::Countries));
        assert_eq!("".parse::<Route>(), Ok(Route::Countries));
    }

    #[test]
    fn test_parse_listing_and_detail() {
        assert_eq!("/countries".parse::<Route>(), Ok(Route::Countries));
        assert_eq!("/countries/".parse::<Route>(), Ok(Route::Countries));
        assert_eq!(
            "/countries/United States".parse::<Route>(),
            Ok(Route::country("United States"))
        );
    }

    #[test]
    fn test_parse_rejects_unknown_paths() {
        assert!("/about".parse::<Route>().is_err());
        assert!("/countriesx".parse::<Route>().is_err());
        assert!("/countries/a/b".parse::<Route>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        let route = Route::country("Côte d'Ivoire");
        assert_eq!(route.to_string().parse::<Route>(), Ok(route));
        assert_eq!(Route::Countries.to_string(), "/countries");
    }
}
