//! Bilingual copy for every page, as immutable tables.
//!
//! Lookups are two-level: by locale through [`Localized`], and for pages
//! whose copy depends on the theme, by theme through [`ByTheme`]. Nothing
//! here is computed at runtime; renderers pick slices and format them.
//!
//! [`audit`] walks every table and reports blank strings, which `check`
//! surfaces before a build.

pub mod about;
pub mod chrome;
pub mod contact;
pub mod gallery;
pub mod home;
pub mod legal;
pub mod philosophy;
pub mod services;
pub mod team;

use crate::config::SiteConfig;
use crate::head::MetaRecord;
use crate::types::{Locale, Localized, Route, Theme};

pub(crate) const fn l(ar: &'static str, en: &'static str) -> Localized {
    Localized::new(ar, en)
}

/// A value that differs between the agency and production themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByTheme<T> {
    pub agency: T,
    pub production: T,
}

impl<T> ByTheme<T> {
    pub fn get(&self, theme: Theme) -> &T {
        match theme {
            Theme::Agency => &self.agency,
            Theme::Production => &self.production,
        }
    }
}

/// Header strip shown at the top of inner pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageHeader {
    /// Small uppercase label above the title. Latin in both locales.
    pub eyebrow: &'static str,
    pub title: Localized,
    pub description: Localized,
}

/// Icon, title and a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub icon: &'static str,
    pub title: Localized,
    pub text: Localized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub icon: &'static str,
    pub title: Localized,
    pub subtitle: &'static str,
    pub features: &'static [Localized],
}

/// Closing call to action pointing at the contact page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallToAction {
    pub title: Localized,
    pub text: Localized,
    pub button: Localized,
}

/// What a page asks the metadata manager for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    /// `None` leaves the base title alone.
    pub title: Option<Localized>,
    pub description: Option<Localized>,
}

impl PageMeta {
    /// Record for `route` in `locale`, with a canonical URL and `og:locale`.
    pub fn record(&self, route: Route, locale: Locale, config: &SiteConfig) -> MetaRecord {
        let title = self.title.map(|t| t.get(locale)).unwrap_or_default();
        let mut record = MetaRecord::new(title).og_locale(locale.og_locale());
        if route != Route::NotFound {
            record = record.canonical_url(config.absolute_url(route.path()));
        }
        if let Some(description) = self.description {
            record = record.description(description.get(locale));
        }
        record
    }
}

/// Metadata each route registers.
pub fn meta(route: Route) -> PageMeta {
    match route {
        Route::Home => home::META,
        Route::About => about::META,
        Route::Services => services::META,
        Route::Philosophy => philosophy::META,
        Route::Team => team::META,
        Route::Gallery => gallery::META,
        Route::Contact => contact::META,
        Route::Privacy => legal::PRIVACY.meta,
        Route::Terms => legal::TERMS.meta,
        Route::NotFound => chrome::NOT_FOUND_META,
    }
}

// ============================================================================
// Audit
// ============================================================================

/// Collects blank entries while walking the tables.
#[derive(Debug, Default)]
pub struct Audit {
    issues: Vec<String>,
    checked: usize,
}

impl Audit {
    pub fn text(&mut self, path: &str, value: &Localized) {
        for locale in Locale::ALL {
            self.checked += 1;
            if value.get(locale).trim().is_empty() {
                self.issues.push(format!("{path} is empty for {}", locale.as_str()));
            }
        }
    }

    pub fn plain(&mut self, path: &str, value: &str) {
        self.checked += 1;
        if value.trim().is_empty() {
            self.issues.push(format!("{path} is empty"));
        }
    }

    pub fn list(&mut self, path: &str, values: &[Localized]) {
        if values.is_empty() {
            self.issues.push(format!("{path} has no entries"));
        }
        for (i, value) in values.iter().enumerate() {
            self.text(&format!("{path}[{i}]"), value);
        }
    }

    pub(crate) fn card(&mut self, path: &str, card: &Card) {
        self.plain(&format!("{path}.icon"), card.icon);
        self.text(&format!("{path}.title"), &card.title);
        self.text(&format!("{path}.text"), &card.text);
    }

    pub(crate) fn service(&mut self, path: &str, service: &Service) {
        self.plain(&format!("{path}.subtitle"), service.subtitle);
        self.text(&format!("{path}.title"), &service.title);
        self.list(&format!("{path}.features"), service.features);
    }

    pub(crate) fn header(&mut self, path: &str, header: &PageHeader) {
        self.plain(&format!("{path}.eyebrow"), header.eyebrow);
        self.text(&format!("{path}.title"), &header.title);
        self.text(&format!("{path}.description"), &header.description);
    }

    pub(crate) fn meta(&mut self, path: &str, meta: &PageMeta) {
        if let Some(title) = &meta.title {
            self.text(&format!("{path}.title"), title);
        }
        if let Some(description) = &meta.description {
            self.text(&format!("{path}.description"), description);
        }
    }

    pub fn issues(&self) -> &[String] {
        &self.issues
    }

    /// Number of strings looked at.
    pub fn checked(&self) -> usize {
        self.checked
    }
}

/// Walk every table. An empty issue list means each page has copy for
/// every locale and theme.
pub fn audit() -> Audit {
    let mut audit = Audit::default();
    home::audit(&mut audit);
    about::audit(&mut audit);
    services::audit(&mut audit);
    philosophy::audit(&mut audit);
    team::audit(&mut audit);
    gallery::audit(&mut audit);
    contact::audit(&mut audit);
    legal::audit(&mut audit);
    chrome::audit(&mut audit);
    for route in Route::ALL {
        match crate::router::label(route) {
            Some(label) => audit.text(&format!("nav.{}", route.slug()), &label),
            None => audit.plain(&format!("nav.{}", route.slug()), ""),
        }
    }
    audit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_tables_are_complete() {
        let audit = audit();
        assert!(audit.issues().is_empty(), "{:#?}", audit.issues());
        assert!(audit.checked() > 300);
    }

    #[test]
    fn audit_reports_blank_side() {
        let mut audit = Audit::default();
        audit.text("x.y", &Localized::new("نص", " "));
        assert_eq!(audit.issues(), ["x.y is empty for en"]);
    }

    #[test]
    fn by_theme_selects() {
        let pair = ByTheme { agency: 1, production: 2 };
        assert_eq!(*pair.get(Theme::Agency), 1);
        assert_eq!(*pair.get(Theme::Production), 2);
    }

    #[test]
    fn page_records_carry_canonical_and_locale() {
        let config = SiteConfig::default();
        let record = meta(Route::About).record(Route::About, Locale::Ar, &config);
        assert_eq!(record.title, "من نحن");
        assert_eq!(
            record.canonical_url.as_deref(),
            Some("https://www.effectwaveco.com/about")
        );
        assert_eq!(record.og_locale.as_deref(), Some("ar_LY"));

        let record = meta(Route::NotFound).record(Route::NotFound, Locale::En, &config);
        assert_eq!(record.title, "404 — Page Not Found");
        assert_eq!(record.canonical_url, None);
    }

    #[test]
    fn home_keeps_base_title() {
        let record = meta(Route::Home).record(Route::Home, Locale::En, &SiteConfig::default());
        assert_eq!(record.title, "");
        assert_eq!(
            record.canonical_url.as_deref(),
            Some("https://www.effectwaveco.com/")
        );
    }
}
