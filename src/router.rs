//! Hash-fragment routing.
//!
//! The site is published as a single document; the page is chosen by the
//! fragment (`#/about`). Anything outside the path map resolves to
//! [`Route::NotFound`] instead of an error.

use crate::types::{Localized, Route};

/// Resolve a path such as `/about` against the path map.
///
/// Trailing slashes and query strings are ignored; matching is exact
/// otherwise, so `/About` is not found.
pub fn resolve(path: &str) -> Route {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    let normalized = if trimmed.is_empty() { "/" } else { trimmed };

    Route::ALL
        .into_iter()
        .find(|route| route.path() == normalized)
        .unwrap_or(Route::NotFound)
}

/// Resolve a location hash (`#/about`, `#about`, `""`).
///
/// An empty hash is the root.
pub fn resolve_hash(hash: &str) -> Route {
    let fragment = hash.strip_prefix('#').unwrap_or(hash);
    if fragment.is_empty() {
        return Route::Home;
    }
    if fragment.starts_with('/') {
        resolve(fragment)
    } else {
        resolve(&format!("/{fragment}"))
    }
}

/// Menu label for a route, if it has one.
pub fn label(route: Route) -> Option<Localized> {
    let label = match route {
        Route::Home => Localized::new("الرئيسية", "Home"),
        Route::Services => Localized::new("خدماتنا", "Services"),
        Route::About => Localized::new("من نحن", "About Us"),
        Route::Philosophy => Localized::new("فلسفتنا", "Philosophy"),
        Route::Team => Localized::new("فريق العمل", "Team"),
        Route::Gallery => Localized::new("المعرض", "Gallery"),
        Route::Contact => Localized::new("تواصل معنا", "Contact"),
        Route::Privacy => Localized::new("سياسة الخصوصية", "Privacy Policy"),
        Route::Terms => Localized::new("شروط الخدمة", "Terms of Service"),
        Route::NotFound => return None,
    };
    Some(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Locale;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_registered_path_resolves_to_itself() {
        for route in Route::ALL {
            assert_eq!(resolve(route.path()), route);
            assert_eq!(resolve_hash(&route.href()), route);
        }
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(resolve("/blog"), Route::NotFound);
        assert_eq!(resolve("/about/team"), Route::NotFound);
        assert_eq!(resolve("/About"), Route::NotFound);
        assert_eq!(resolve_hash("#/404"), Route::NotFound);
    }

    #[test]
    fn empty_hash_is_home() {
        assert_eq!(resolve_hash(""), Route::Home);
        assert_eq!(resolve_hash("#"), Route::Home);
        assert_eq!(resolve_hash("#/"), Route::Home);
    }

    #[test]
    fn trailing_slash_and_query_are_ignored() {
        assert_eq!(resolve("/gallery/"), Route::Gallery);
        assert_eq!(resolve("/contact?from=footer"), Route::Contact);
        assert_eq!(resolve_hash("#services"), Route::Services);
    }

    #[test]
    fn menu_labels_in_both_locales() {
        let ar: Vec<_> = Route::MENU
            .iter()
            .filter_map(|r| label(*r))
            .map(|l| l.get(Locale::Ar))
            .collect();
        assert_eq!(
            ar,
            vec![
                "الرئيسية",
                "خدماتنا",
                "من نحن",
                "فلسفتنا",
                "فريق العمل",
                "المعرض",
                "تواصل معنا"
            ]
        );
        assert_eq!(label(Route::About).unwrap().get(Locale::En), "About Us");
        assert!(label(Route::NotFound).is_none());
    }
}
