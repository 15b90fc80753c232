//! Copy shared by every page: header, footer and the not-found view.

use super::{Audit, PageMeta, l};
use crate::types::{Locale, Localized};

pub const BRAND: &str = "EFFECT WAVE";
/// Brand split for the two-tone wordmark; the second word takes the accent.
pub const BRAND_WORDS: [&str; 2] = ["EFFECT", "WAVE"];

/// Text of the locale toggle: it names the language you switch to.
pub fn locale_toggle(current: Locale) -> &'static str {
    match current {
        Locale::Ar => "EN",
        Locale::En => "AR",
    }
}

pub fn locale_toggle_aria(current: Locale) -> &'static str {
    match current {
        Locale::Ar => "Switch to English",
        Locale::En => "التغيير للغة العربية",
    }
}

pub const MENU_OPEN: Localized = l("فتح القائمة", "Open menu");
pub const MENU_CLOSE: Localized = l("إغلاق القائمة", "Close menu");

// ============================================================================
// Footer
// ============================================================================

pub const FOOTER_DESCRIPTION: Localized = l(
    "نحن نصنع تجارب بصرية وصوتية تترك أثراً لا يمحى.",
    "We create visual and audio experiences that leave an indelible impact.",
);
pub const FOOTER_EMAIL: Localized = l("بريدنا الإلكتروني", "Email Us");
pub const FOOTER_CALL: Localized = l("اتصل بنا", "Call Us");
pub const FOOTER_VISIT: Localized = l("موقعنا الإلكتروني", "Visit Us");
pub const WATERMARK: &str = "EFFECTWAVE";

/// Copyright line. The legal entity name stays in English.
pub fn copyright(year: i32) -> String {
    format!("© {year} Effect Wave Agency. All rights reserved.")
}

// ============================================================================
// Not found
// ============================================================================

pub const NOT_FOUND_CODE: &str = "404";
pub const NOT_FOUND_TITLE: Localized = l("الصفحة غير موجودة", "Page Not Found");
pub const NOT_FOUND_TEXT: Localized = l(
    "الصفحة التي تبحث عنها غير متوفرة. قد تكون قد نُقلت أو حُذفت.",
    "The page you are looking for is unavailable. It may have been moved or deleted.",
);
pub const NOT_FOUND_BACK: Localized = l("العودة للرئيسية", "Back to Home");

pub const NOT_FOUND_META: PageMeta = PageMeta {
    title: Some(l("404 — Page Not Found", "404 — Page Not Found")),
    description: None,
};

pub(super) fn audit(audit: &mut Audit) {
    audit.text("chrome.menu_open", &MENU_OPEN);
    audit.text("chrome.menu_close", &MENU_CLOSE);
    for (field, value) in [
        ("footer.description", &FOOTER_DESCRIPTION),
        ("footer.email", &FOOTER_EMAIL),
        ("footer.call", &FOOTER_CALL),
        ("footer.visit", &FOOTER_VISIT),
        ("not_found.title", &NOT_FOUND_TITLE),
        ("not_found.text", &NOT_FOUND_TEXT),
        ("not_found.back", &NOT_FOUND_BACK),
    ] {
        audit.text(&format!("chrome.{field}"), value);
    }
    audit.meta("chrome.not_found.meta", &NOT_FOUND_META);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_names_the_other_language() {
        assert_eq!(locale_toggle(Locale::Ar), "EN");
        assert_eq!(locale_toggle(Locale::En), "AR");
        assert_eq!(locale_toggle_aria(Locale::Ar), "Switch to English");
    }

    #[test]
    fn copyright_carries_year() {
        assert_eq!(copyright(2026), "© 2026 Effect Wave Agency. All rights reserved.");
    }
}
