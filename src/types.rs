//! Shared vocabulary used by every layer: theme, locale, route, palette.
//!
//! These are small `Copy` enums so that the presentation state, the
//! transition key and the content lookups can pass them around by value.

use serde::{Deserialize, Serialize};

// ============================================================================
// Palette
// ============================================================================

/// Accent for the agency (marketing) theme.
pub const ACCENT_AGENCY: &str = "#ebe125";
/// Accent for the production (media) theme.
pub const ACCENT_PRODUCTION: &str = "#b20600";
/// Page background ("obsidian").
pub const COLOR_BACKGROUND: &str = "#000000";
/// Card and section surface ("onyx").
pub const COLOR_SURFACE: &str = "#0A0A0A";
/// Secondary text ("silver").
pub const COLOR_SILVER: &str = "#C0C0C0";
/// Raised surface used by inputs and the switcher track.
pub const COLOR_GRAY_SURFACE: &str = "#1A1A1A";

/// Heading and body face for Arabic text.
pub const FONT_ARABIC: &str = "Tajawal";
/// Face for Latin text.
pub const FONT_LATIN: &str = "Alexandria";

// ============================================================================
// Theme
// ============================================================================

/// Binary presentation mode. Selects the accent colour and some page copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Agency,
    Production,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Agency, Theme::Production];

    pub fn accent(self) -> &'static str {
        match self {
            Theme::Agency => ACCENT_AGENCY,
            Theme::Production => ACCENT_PRODUCTION,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Agency => "agency",
            Theme::Production => "production",
        }
    }

    pub fn parse(s: &str) -> Option<Theme> {
        match s {
            "agency" => Some(Theme::Agency),
            "production" => Some(Theme::Production),
            _ => None,
        }
    }
}

// ============================================================================
// Locale
// ============================================================================

/// UI language. Also decides text direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ar,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Ar, Locale::En];

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::Ar => "ar",
            Locale::En => "en",
        }
    }

    pub fn parse(s: &str) -> Option<Locale> {
        match s {
            "ar" => Some(Locale::Ar),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    pub fn toggled(self) -> Locale {
        match self {
            Locale::Ar => Locale::En,
            Locale::En => Locale::Ar,
        }
    }

    pub fn dir(self) -> Direction {
        match self {
            Locale::Ar => Direction::Rtl,
            Locale::En => Direction::Ltr,
        }
    }

    /// Value for `og:locale`.
    pub fn og_locale(self) -> &'static str {
        match self {
            Locale::Ar => "ar_LY",
            Locale::En => "en_US",
        }
    }

    pub fn font(self) -> &'static str {
        match self {
            Locale::Ar => FONT_ARABIC,
            Locale::En => FONT_LATIN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Rtl,
    Ltr,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Rtl => "rtl",
            Direction::Ltr => "ltr",
        }
    }
}

/// A pair of strings, one per locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized {
    pub ar: &'static str,
    pub en: &'static str,
}

impl Localized {
    pub const fn new(ar: &'static str, en: &'static str) -> Self {
        Self { ar, en }
    }

    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ar => self.ar,
            Locale::En => self.en,
        }
    }
}

// ============================================================================
// Route
// ============================================================================

/// A routed page. `NotFound` stands for every path outside the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    #[default]
    Home,
    About,
    Services,
    Philosophy,
    Team,
    Gallery,
    Contact,
    Privacy,
    Terms,
    NotFound,
}

impl Route {
    /// The nine registered routes in path-map order.
    pub const ALL: [Route; 9] = [
        Route::Home,
        Route::About,
        Route::Services,
        Route::Philosophy,
        Route::Team,
        Route::Gallery,
        Route::Contact,
        Route::Privacy,
        Route::Terms,
    ];

    /// Routes listed in the header menu, in menu order.
    pub const MENU: [Route; 7] = [
        Route::Home,
        Route::Services,
        Route::About,
        Route::Philosophy,
        Route::Team,
        Route::Gallery,
        Route::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Services => "/services",
            Route::Philosophy => "/philosophy",
            Route::Team => "/team",
            Route::Gallery => "/gallery",
            Route::Contact => "/contact",
            Route::Privacy => "/privacy",
            Route::Terms => "/terms",
            Route::NotFound => "/404",
        }
    }

    /// Hash-fragment link for this route, e.g. `#/about`.
    pub fn href(self) -> String {
        format!("#{}", self.path())
    }

    /// Path without the leading slash; empty for home.
    pub fn slug(self) -> &'static str {
        &self.path()[1..]
    }

    pub fn is_home(self) -> bool {
        self == Route::Home
    }
}
