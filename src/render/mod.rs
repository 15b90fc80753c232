//! HTML rendering with [maud](https://maud.lambda.xyz/).
//!
//! Every renderer is a pure function of a state snapshot, so the prerender
//! and the browser host produce the same markup for the same state. The
//! host swaps whole regions (`#shell`, `#view`) instead of diffing.
//!
//! Interactive elements carry a `data-action` attribute; the browser host
//! handles clicks by delegation on the app root.

pub mod gallery;
pub mod layout;
pub mod pages;

use crate::config::SiteConfig;
use crate::content::{self, PageHeader};
use crate::gallery::Gallery;
use crate::head::MetaRecord;
use crate::types::{Locale, Route, Theme};
use maud::{Markup, html};

/// A rendered page and the head record it wants installed.
#[derive(Debug, Clone)]
pub struct PageView {
    pub route: Route,
    pub meta: MetaRecord,
    pub body: Markup,
}

/// Render the page for `route`.
///
/// `gallery` is only read by the gallery page.
pub fn page(
    route: Route,
    theme: Theme,
    locale: Locale,
    gallery: &Gallery,
    config: &SiteConfig,
) -> PageView {
    let body = match route {
        Route::Home => pages::home(theme, locale),
        Route::About => pages::about(theme, locale),
        Route::Services => pages::services(theme, locale),
        Route::Philosophy => pages::philosophy(theme, locale),
        Route::Team => pages::team(locale),
        Route::Gallery => gallery::page(gallery, locale),
        Route::Contact => pages::contact(locale, config),
        Route::Privacy => pages::legal(&content::legal::PRIVACY, locale),
        Route::Terms => pages::legal(&content::legal::TERMS, locale),
        Route::NotFound => pages::not_found(locale),
    };
    PageView {
        route,
        meta: content::meta(route).record(route, locale, config),
        body,
    }
}

// ============================================================================
// Shared fragments
// ============================================================================

/// Decorative icon slot; the stylesheet draws the glyph.
pub fn icon(name: &str) -> Markup {
    html! {
        span.icon data-icon=(name) aria-hidden="true" {}
    }
}

/// Title strip at the top of inner pages.
pub fn page_header(header: &PageHeader, locale: Locale) -> Markup {
    html! {
        header.page-header {
            div.eyebrow {
                span.eyebrow-line {}
                span.eyebrow-text { (header.eyebrow) }
            }
            h1.page-title { (header.title.get(locale)) }
            p.page-lead { (header.description.get(locale)) }
        }
    }
}

/// Arrow that points forward in reading order.
pub fn forward_arrow(locale: Locale) -> Markup {
    let name = match locale {
        Locale::Ar => "arrow-left",
        Locale::En => "arrow-right",
    };
    icon(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_renders_with_meta() {
        let config = SiteConfig::default();
        let gallery = Gallery::default();
        for route in Route::ALL.into_iter().chain([Route::NotFound]) {
            for theme in Theme::ALL {
                for locale in Locale::ALL {
                    let view = page(route, theme, locale, &gallery, &config);
                    assert_eq!(view.route, route);
                    assert!(!view.body.into_string().is_empty());
                    assert_eq!(view.meta.og_locale.as_deref(), Some(locale.og_locale()));
                }
            }
        }
    }

    #[test]
    fn about_title_per_locale() {
        let config = SiteConfig::default();
        let gallery = Gallery::default();
        let ar = page(Route::About, Theme::Agency, Locale::Ar, &gallery, &config);
        let en = page(Route::About, Theme::Agency, Locale::En, &gallery, &config);
        assert_eq!(ar.meta.title, "من نحن");
        assert_eq!(en.meta.title, "About Us");
    }

    #[test]
    fn forward_arrow_follows_direction() {
        assert!(forward_arrow(Locale::Ar).into_string().contains("arrow-left"));
        assert!(forward_arrow(Locale::En).into_string().contains("arrow-right"));
    }

    #[test]
    fn page_header_escapes_and_orders() {
        let header = PageHeader {
            eyebrow: "A & B",
            title: crate::types::Localized::new("ع", "T"),
            description: crate::types::Localized::new("و", "D"),
        };
        let html = page_header(&header, Locale::En).into_string();
        assert!(html.contains("A &amp; B"));
        assert!(html.find(">T<").unwrap() < html.find(">D<").unwrap());
    }
}
