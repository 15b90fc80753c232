//! Persistent chrome around the routed view, and the full document.
//!
//! ```text
//! <div id="root" dir lang data-theme data-route style="--color-accent">
//!   .background        noise + canvas#starfield
//!   #shell             header + theme switcher   (patched in place; rebuilt on locale change)
//!   main#view          routed page               (swapped by the transition shell)
//!   footer#footer      re-rendered on locale change
//! </div>
//! ```

use super::{PageView, icon};
use crate::config::SiteConfig;
use crate::content::chrome::{
    self, BRAND_WORDS, FOOTER_CALL, FOOTER_DESCRIPTION, FOOTER_EMAIL, FOOTER_VISIT, MENU_CLOSE,
    MENU_OPEN, WATERMARK,
};
use crate::content::contact::{PHONES, WEBSITE_DISPLAY};
use crate::head::{MemoryHead, MetaDefaults, MetadataManager};
use crate::router;
use crate::store::PresentationState;
use crate::switcher::{Indicator, OPTIONS};
use crate::types::{Locale, Route};
use maud::{DOCTYPE, Markup, PreEscaped, html};

const FONTS_HREF: &str = "https://fonts.googleapis.com/css2?family=Alexandria:wght@300;400;600;800&family=Tajawal:wght@300;400;500;700;900&display=swap";

/// Attributes mirrored on `#root` from the presentation state.
pub fn root_attributes(state: &PresentationState) -> [(&'static str, String); 5] {
    [
        ("dir", state.dir().as_str().to_string()),
        ("lang", state.locale.as_str().to_string()),
        ("data-theme", state.theme.as_str().to_string()),
        ("data-route", state.route.slug().to_string()),
        ("style", format!("--color-accent: {};", state.accent())),
    ]
}

// ============================================================================
// Header
// ============================================================================

pub fn header(state: &PresentationState) -> Markup {
    let locale = state.locale;
    let menu_label = if state.menu_open { MENU_CLOSE } else { MENU_OPEN };
    html! {
        header.site-header.visible[state.nav_visible()].menu-open[state.menu_open] id="site-header" {
            a.brand href=(Route::Home.href()) data-action="navigate" {
                span.brand-primary { (BRAND_WORDS[0]) }
                " "
                span.brand-accent { (BRAND_WORDS[1]) }
            }
            div.header-actions {
                button.locale-toggle type="button" data-action="toggle-locale"
                    aria-label=(chrome::locale_toggle_aria(locale)) {
                    (chrome::locale_toggle(locale))
                }
                button.menu-toggle type="button" data-action="toggle-menu"
                    aria-expanded=(state.menu_open.to_string()) aria-controls="site-menu"
                    aria-label=(menu_label.get(locale)) {
                    @if state.menu_open { (icon("x")) } @else { (icon("menu")) }
                }
            }
            nav.site-menu id="site-menu" hidden[!state.menu_open] {
                ul {
                    @for route in Route::MENU {
                        @if let Some(label) = router::label(route) {
                            li {
                                a href=(route.href()) data-action="navigate"
                                    aria-current=[(route == state.route).then_some("page")] {
                                    (label.get(locale))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Theme switcher
// ============================================================================

/// The switcher is laid out left to right in both locales.
pub fn switcher(state: &PresentationState, indicator: &Indicator) -> Markup {
    html! {
        div.theme-switcher dir="ltr" role="group" aria-label="Theme" {
            div.switcher-labels {
                @for option in OPTIONS {
                    span.switcher-label.active[option.theme == state.theme]
                        data-theme=(option.theme.as_str()) {
                        (option.label)
                    }
                }
            }
            div.switcher-track {
                div.switcher-indicator id="switcher-indicator" style=(indicator.to_css()) {}
                @for option in OPTIONS {
                    button.switcher-option type="button" data-action="set-theme"
                        data-theme=(option.theme.as_str())
                        aria-label=(option.aria_label)
                        aria-pressed=((option.theme == state.theme).to_string()) {
                        (option.button)
                    }
                }
            }
        }
    }
}

/// Header plus switcher, the content of `#shell`.
pub fn shell(state: &PresentationState, indicator: &Indicator) -> Markup {
    html! {
        (header(state))
        (switcher(state, indicator))
    }
}

/// In-place update of the nodes matching `selector` in a mounted shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellPatch {
    Class {
        selector: String,
        class: &'static str,
        on: bool,
    },
    /// `None` removes the attribute.
    Attr {
        selector: String,
        name: &'static str,
        value: Option<String>,
    },
}

impl ShellPatch {
    pub fn selector(&self) -> &str {
        match self {
            ShellPatch::Class { selector, .. } | ShellPatch::Attr { selector, .. } => selector,
        }
    }
}

fn class(selector: &str, class: &'static str, on: bool) -> ShellPatch {
    ShellPatch::Class {
        selector: selector.to_string(),
        class,
        on,
    }
}

fn attr(selector: &str, name: &'static str, value: Option<String>) -> ShellPatch {
    ShellPatch::Attr {
        selector: selector.to_string(),
        name,
        value,
    }
}

/// Bring a shell rendered for the same locale in line with `state` without
/// replacing its nodes, so CSS transitions on them (the switcher pill's
/// `left`) get a starting value.
pub fn shell_patches(state: &PresentationState, indicator: &Indicator) -> Vec<ShellPatch> {
    let locale = state.locale;
    let open = state.menu_open;
    let menu_label = if open { MENU_CLOSE } else { MENU_OPEN };
    let mut patches = vec![
        class("#site-header", "visible", state.nav_visible()),
        class("#site-header", "menu-open", open),
        attr(".menu-toggle", "aria-expanded", Some(open.to_string())),
        attr(".menu-toggle", "aria-label", Some(menu_label.get(locale).to_string())),
        attr(
            ".menu-toggle .icon",
            "data-icon",
            Some(if open { "x" } else { "menu" }.to_string()),
        ),
        attr("#site-menu", "hidden", (!open).then(String::new)),
    ];
    for route in Route::MENU {
        patches.push(attr(
            &format!("#site-menu a[href=\"{}\"]", route.href()),
            "aria-current",
            (route == state.route).then(|| "page".to_string()),
        ));
    }
    patches.push(attr("#switcher-indicator", "style", Some(indicator.to_css())));
    for option in OPTIONS {
        let active = option.theme == state.theme;
        let theme = option.theme.as_str();
        patches.push(class(
            &format!(".switcher-label[data-theme=\"{theme}\"]"),
            "active",
            active,
        ));
        patches.push(attr(
            &format!(".switcher-option[data-theme=\"{theme}\"]"),
            "aria-pressed",
            Some(active.to_string()),
        ));
    }
    patches
}

pub fn background() -> Markup {
    html! {
        div.background aria-hidden="true" {
            div.noise {}
            canvas id="starfield" {}
        }
    }
}

// ============================================================================
// Footer
// ============================================================================

pub fn footer(locale: Locale, config: &SiteConfig, year: i32) -> Markup {
    let email = &config.site.contact_email;
    let socials = [
        ("instagram", "Instagram", &config.social.instagram),
        ("facebook", "Facebook", &config.social.facebook),
        ("linkedin", "LinkedIn", &config.social.linkedin),
    ];
    html! {
        div.footer-inner {
            div.footer-brand {
                a.brand href=(Route::Home.href()) data-action="navigate" {
                    span.brand-primary { (BRAND_WORDS[0]) }
                    " "
                    span.brand-accent { (BRAND_WORDS[1]) }
                }
                p { (FOOTER_DESCRIPTION.get(locale)) }
                ul.socials {
                    @for (name, label, href) in socials {
                        @if !href.is_empty() {
                            li {
                                a href=(href) target="_blank" rel="noopener noreferrer" aria-label=(label) {
                                    (icon(name))
                                }
                            }
                        }
                    }
                }
            }
            div.footer-contact {
                a.footer-card href=(format!("mailto:{email}")) {
                    (icon("mail"))
                    span.footer-card-label { (FOOTER_EMAIL.get(locale)) }
                    span.footer-card-value dir="ltr" { (email) }
                }
                div.footer-card {
                    (icon("phone"))
                    span.footer-card-label { (FOOTER_CALL.get(locale)) }
                    @for phone in PHONES {
                        a.footer-card-value href=(phone.href) dir="ltr" { (phone.display) }
                    }
                }
                a.footer-card href=(config.absolute_url("/")) target="_blank" rel="noopener noreferrer" {
                    (icon("globe"))
                    span.footer-card-label { (FOOTER_VISIT.get(locale)) }
                    span.footer-card-value dir="ltr" { (WEBSITE_DISPLAY) }
                }
            }
            div.footer-bottom {
                p.copyright dir="ltr" { (chrome::copyright(year)) }
                nav.legal-links {
                    @for route in [Route::Privacy, Route::Terms] {
                        @if let Some(label) = router::label(route) {
                            a href=(route.href()) data-action="navigate" { (label.get(locale)) }
                        }
                    }
                }
            }
            div.watermark aria-hidden="true" { (WATERMARK) }
        }
    }
}

// ============================================================================
// Document
// ============================================================================

/// Head contents for `view`: fixed tags first, then the page record
/// installed through the metadata manager.
pub fn head(view: &PageView, config: &SiteConfig, stylesheet: &str) -> MemoryHead {
    let base = MemoryHead::new(&config.meta.base_title)
        .with("meta", &[("charset", "UTF-8")])
        .with(
            "meta",
            &[("name", "viewport"), ("content", "width=device-width, initial-scale=1.0")],
        )
        .with("link", &[("rel", "preconnect"), ("href", "https://fonts.googleapis.com")])
        .with(
            "link",
            &[
                ("rel", "preconnect"),
                ("href", "https://fonts.gstatic.com"),
                ("crossorigin", ""),
            ],
        )
        .with("link", &[("rel", "stylesheet"), ("href", FONTS_HREF)])
        .with("link", &[("rel", "stylesheet"), ("href", stylesheet)]);
    let mut manager = MetadataManager::new(Some(base), MetaDefaults::from(&config.meta));
    manager.apply(&view.meta);
    manager.into_head().unwrap_or_default()
}

/// Config handed to the browser runtime, safe to embed in a `<script>`.
pub fn config_json(config: &SiteConfig) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(config)?.replace("</", "<\\/"))
}

/// A complete page: head, app root and the runtime bootstrap.
pub fn document(
    state: &PresentationState,
    view: &PageView,
    config: &SiteConfig,
    stylesheet: &str,
    year: i32,
) -> Result<Markup, serde_json::Error> {
    let head = head(view, config, stylesheet);
    let config_json = config_json(config)?;
    let bootstrap = if config.site.script.is_empty() {
        None
    } else {
        let script = serde_json::to_string(&config.site.script)?;
        Some(format!("import init from {script}; init();"))
    };
    let [dir, lang, theme, route, style] = root_attributes(state);
    let indicator = Indicator::new(state.theme, state.has_interacted, 0.0);

    Ok(html! {
        (DOCTYPE)
        html dir=(dir.1) lang=(lang.1) {
            head { (head.render()) }
            body {
                div id="root" dir=(dir.1) lang=(lang.1) data-theme=(theme.1) data-route=(route.1) style=(style.1) {
                    (background())
                    div id="shell" { (shell(state, &indicator)) }
                    main id="view" { (view.body) }
                    footer.site-footer id="footer" { (footer(state.locale, config, year)) }
                }
                script id="site-config" type="application/json" { (PreEscaped(config_json)) }
                @if let Some(bootstrap) = bootstrap {
                    script type="module" { (PreEscaped(bootstrap)) }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::Gallery;
    use crate::render;
    use crate::types::Theme;

    fn view(route: Route, locale: Locale) -> PageView {
        render::page(route, Theme::Agency, locale, &Gallery::default(), &SiteConfig::default())
    }

    // =========================================================================
    // Header
    // =========================================================================

    #[test]
    fn header_hidden_on_unscrolled_home() {
        let state = PresentationState::default();
        let html = header(&state).into_string();
        assert!(!html.contains("visible"));
        assert!(html.contains(">EN<"));
    }

    #[test]
    fn header_visible_off_home_and_marks_current() {
        let state = PresentationState::with_route(Route::Gallery);
        let html = header(&state).into_string();
        assert!(html.contains("site-header visible"));
        assert!(html.contains("aria-current=\"page\">المعرض<"));
    }

    #[test]
    fn menu_lists_routes_in_order() {
        let mut state = PresentationState::default();
        state.menu_open = true;
        state.locale = Locale::En;
        let html = header(&state).into_string();
        let positions: Vec<usize> = ["Home", "Services", "About Us", "Philosophy", "Team", "Gallery", "Contact"]
            .iter()
            .map(|label| html.find(&format!(">{label}<")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("aria-expanded=\"true\""));
        assert!(!html.contains(" hidden"));
    }

    // =========================================================================
    // Switcher
    // =========================================================================

    #[test]
    fn switcher_marks_active_theme() {
        let mut state = PresentationState::default();
        state.theme = Theme::Production;
        let indicator = Indicator::new(state.theme, false, 0.0);
        let html = switcher(&state, &indicator).into_string();
        assert!(html.contains("dir=\"ltr\""));
        assert!(html.contains("left: 2px"));
        assert!(html.contains("data-theme=\"production\" aria-label=\"Switch to Production theme\" aria-pressed=\"true\""));
    }

    // =========================================================================
    // Footer
    // =========================================================================

    #[test]
    fn theme_change_patches_pill_in_place() {
        let mut state = PresentationState::with_route(Route::About);
        state.theme = Theme::Production;
        state.has_interacted = true;
        let indicator = Indicator::new(state.theme, true, 0.0);
        let patches = shell_patches(&state, &indicator);

        assert!(patches.contains(&ShellPatch::Attr {
            selector: "#switcher-indicator".to_string(),
            name: "style",
            value: Some(indicator.to_css()),
        }));
        assert!(patches.contains(&ShellPatch::Class {
            selector: ".switcher-label[data-theme=\"production\"]".to_string(),
            class: "active",
            on: true,
        }));
        assert!(patches.contains(&ShellPatch::Attr {
            selector: ".switcher-option[data-theme=\"agency\"]".to_string(),
            name: "aria-pressed",
            value: Some("false".to_string()),
        }));
        assert!(patches.contains(&ShellPatch::Attr {
            selector: "#site-menu a[href=\"#/about\"]".to_string(),
            name: "aria-current",
            value: Some("page".to_string()),
        }));
    }

    #[test]
    fn patches_mirror_rendered_shell() {
        let mut state = PresentationState::with_route(Route::Home);
        state.menu_open = true;
        let indicator = Indicator::new(state.theme, false, 0.0);
        let patches = shell_patches(&state, &indicator);
        let html = shell(&state, &indicator).into_string();

        assert!(patches.contains(&ShellPatch::Class {
            selector: "#site-header".to_string(),
            class: "visible",
            on: false,
        }));
        assert!(patches.contains(&ShellPatch::Attr {
            selector: "#site-menu".to_string(),
            name: "hidden",
            value: None,
        }));
        assert!(html.contains("switcher-label active"));
        assert_eq!(html.matches("data-theme=\"agency\"").count(), 2);
        assert!(html.contains("data-icon=\"x\""));
        assert!(html.contains("aria-expanded=\"true\""));
    }

    #[test]
    fn footer_links_socials_and_legal() {
        let html = footer(Locale::En, &SiteConfig::default(), 2026).into_string();
        assert!(html.contains("© 2026 Effect Wave Agency. All rights reserved."));
        assert!(html.contains("href=\"https://www.instagram.com/effectwave_ly\" target=\"_blank\" rel=\"noopener noreferrer\""));
        assert!(html.contains("href=\"#/privacy\""));
        assert!(html.contains("Terms of Service"));
        assert!(html.contains("tel:+218944689827"));
    }

    #[test]
    fn footer_skips_empty_social() {
        let mut config = SiteConfig::default();
        config.social.facebook.clear();
        let html = footer(Locale::Ar, &config, 2026).into_string();
        assert!(!html.contains("aria-label=\"Facebook\""));
        assert!(html.contains("بريدنا الإلكتروني"));
    }

    // =========================================================================
    // Document
    // =========================================================================

    #[test]
    fn document_root_mirrors_state() {
        let state = PresentationState::default();
        let html = document(&state, &view(Route::Home, Locale::Ar), &SiteConfig::default(), "/assets/site.css", 2026)
            .unwrap()
            .into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("id=\"root\" dir=\"rtl\" lang=\"ar\" data-theme=\"agency\""));
        assert!(html.contains("--color-accent: #ebe125;"));
        assert!(html.contains("<title>Effect Wave | موجة تأثير</title>"));
        assert!(html.contains("canvas id=\"starfield\""));
        assert!(html.contains("import init from \"/pkg/effect_wave.js\"; init();"));
    }

    #[test]
    fn document_head_carries_page_record() {
        let mut state = PresentationState::with_route(Route::Privacy);
        state.locale = Locale::En;
        let html = document(&state, &view(Route::Privacy, Locale::En), &SiteConfig::default(), "/s.css", 2026)
            .unwrap()
            .into_string();
        assert!(html.contains("<link rel=\"canonical\" href=\"https://www.effectwaveco.com/privacy\">"));
        assert!(html.contains("content=\"en_US\""));
        assert!(html.contains("<link rel=\"stylesheet\" href=\"/s.css\">"));
    }

    #[test]
    fn runtime_takeover_forgets_entry_page_canonical() {
        use crate::head::Selector;
        let config = SiteConfig::default();
        let shipped = head(&view(Route::Privacy, Locale::En), &config, "/site.css");
        assert!(shipped.value(&Selector::LinkRel("canonical")).is_some());

        let mut manager = MetadataManager::new(Some(shipped), MetaDefaults::from(&config.meta));
        manager.adopt();
        manager.apply(&view(Route::NotFound, Locale::En).meta);
        let current = manager.head().unwrap();
        assert_eq!(current.value(&Selector::LinkRel("canonical")), None);
        assert_eq!(current.value(&Selector::MetaProperty("og:url")), None);
    }

    #[test]
    fn empty_script_skips_bootstrap() {
        let mut config = SiteConfig::default();
        config.site.script.clear();
        let state = PresentationState::default();
        let html = document(&state, &view(Route::Home, Locale::Ar), &config, "/s.css", 2026)
            .unwrap()
            .into_string();
        assert!(!html.contains("type=\"module\""));
        assert!(html.contains("id=\"site-config\""));
    }

    #[test]
    fn config_json_cannot_close_script() {
        let mut config = SiteConfig::default();
        config.meta.base_title = "</script><b>".to_string();
        let json = config_json(&config).unwrap();
        assert!(!json.contains("</"));
        let back: SiteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.meta.base_title, "</script><b>");
    }
}
