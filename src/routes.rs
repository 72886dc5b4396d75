//! The fixed route table.
//!
//! Every route renders one page assembly. Paths use trailing slashes and map
//! to `index.html` inside a directory of the same name, so the output works
//! on any static file server without rewrite rules:
//!
//! ```text
//! /                     → index.html
//! /collections/women/   → collections/women/index.html
//! ```

use crate::catalog::Category;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Route {
    Home,
    Collections,
    Category(Category),
    About,
    SizeGuide,
    Contact,
}

impl Route {
    /// All routes in sitemap order.
    pub const ALL: [Route; 8] = [
        Route::Home,
        Route::Collections,
        Route::Category(Category::Women),
        Route::Category(Category::Kids),
        Route::Category(Category::Pets),
        Route::About,
        Route::SizeGuide,
        Route::Contact,
    ];

    /// URL path, with leading and trailing slash.
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Collections => "/collections/",
            Route::Category(Category::Women) => "/collections/women/",
            Route::Category(Category::Kids) => "/collections/kids/",
            Route::Category(Category::Pets) => "/collections/pets/",
            Route::About => "/about/",
            Route::SizeGuide => "/size-guide/",
            Route::Contact => "/contact/",
        }
    }

    /// Output file relative to the site root.
    pub fn output_file(self) -> PathBuf {
        PathBuf::from(self.path().trim_start_matches('/')).join("index.html")
    }

    /// Page name shown before the brand in `<title>`. `None` for home, which
    /// uses the brand tagline instead.
    pub fn title(self) -> Option<&'static str> {
        match self {
            Route::Home => None,
            Route::Collections => Some("All Collections"),
            Route::Category(category) => Some(category.page_title()),
            Route::About => Some("About Us"),
            Route::SizeGuide => Some("Size Guide"),
            Route::Contact => Some("Contact Us"),
        }
    }

    /// Short label used in CLI output.
    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Collections => "Collections",
            Route::Category(category) => category.name(),
            Route::About => "About",
            Route::SizeGuide => "Size Guide",
            Route::Contact => "Contact",
        }
    }

    /// Look up a route by URL path. Accepts paths with or without the
    /// trailing slash.
    pub fn from_path(path: &str) -> Option<Route> {
        let normalized = path.trim_end_matches('/');
        Route::ALL
            .into_iter()
            .find(|r| r.path().trim_end_matches('/') == normalized)
    }

    /// Whether a nav link pointing at `href` should be marked current on
    /// this route. Collections stays highlighted on women and kids pages;
    /// the pets page has its own link.
    pub fn is_current(self, href: &str) -> bool {
        if self.path() == href {
            return true;
        }
        match self {
            Route::Category(Category::Pets) => false,
            Route::Category(_) => href == Route::Collections.path(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::Path;

    #[test]
    fn paths_are_unique_and_slash_delimited() {
        let paths: HashSet<&str> = Route::ALL.iter().map(|r| r.path()).collect();
        assert_eq!(paths.len(), Route::ALL.len());
        for route in Route::ALL {
            assert!(route.path().starts_with('/'));
            assert!(route.path().ends_with('/'));
        }
    }

    #[test]
    fn routes_key_a_set() {
        let routes: HashSet<Route> = Route::ALL.into_iter().collect();
        assert_eq!(routes.len(), 8);
        assert!(routes.contains(&Route::Category(Category::Pets)));
    }

    #[test]
    fn output_files() {
        assert_eq!(Route::Home.output_file(), Path::new("index.html"));
        assert_eq!(
            Route::Category(Category::Women).output_file(),
            Path::new("collections/women/index.html")
        );
        assert_eq!(
            Route::SizeGuide.output_file(),
            Path::new("size-guide/index.html")
        );
    }

    #[test]
    fn from_path_round_trips() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/about"), Some(Route::About));
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path("/faq/"), None);
    }

    #[test]
    fn every_nav_link_resolves_to_a_route() {
        for link in crate::catalog::NAV_LINKS {
            assert!(Route::from_path(link.href).is_some(), "{}", link.href);
        }
    }

    #[test]
    fn current_link_marking() {
        assert!(Route::About.is_current("/about/"));
        assert!(!Route::About.is_current("/contact/"));
        assert!(Route::Category(Category::Women).is_current("/collections/"));
        assert!(Route::Category(Category::Pets).is_current("/collections/pets/"));
        assert!(!Route::Category(Category::Pets).is_current("/collections/"));
    }

    #[test]
    fn home_has_no_page_title() {
        assert_eq!(Route::Home.title(), None);
        assert_eq!(Route::Contact.title(), Some("Contact Us"));
    }
}
