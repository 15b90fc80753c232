//! Page bodies. Each takes the theme and locale it renders for and nothing
//! else from the presentation state.

use super::{forward_arrow, icon, page_header};
use crate::config::SiteConfig;
use crate::content::about::{ABOUT, Pillar};
use crate::content::contact::{COPY, PHONES, WEBSITE_DISPLAY};
use crate::content::home::{CLIENTS, HOME, SCROLL_HINT, WHY_PREFIX};
use crate::content::legal::LegalDocument;
use crate::content::philosophy::{
    APPROACH, HEADING, HEADING_EMPHASIS, MOTTO, PLATFORMS, PRINCIPLE,
};
use crate::content::services::{CTA, SERVICES};
use crate::content::team::{HEADER as TEAM_HEADER, LEADERSHIP, MEMBERS, Member, STATEMENT, TEASER};
use crate::content::{Card, Service, chrome, contact, philosophy};
use crate::contact::Field;
use crate::types::{Locale, Route, Theme};
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};

// ============================================================================
// Home
// ============================================================================

pub fn home(theme: Theme, locale: Locale) -> Markup {
    let content = HOME.get(theme);
    let hero = &content.hero;
    let headline = &content.headline;
    html! {
        section.hero {
            div.spotlight aria-hidden="true" {}
            div.hero-content {
                div.hero-logo { img src="/EF%20logo.png" alt=(chrome::BRAND); }
                h1.wordmark {
                    (chrome::BRAND_WORDS[0]) " "
                    span.accent { (chrome::BRAND_WORDS[1]) }
                }
                p.hero-tagline { (hero.tagline.get(locale)) }
                p.hero-badge { (hero.badge.get(locale)) }
                h2.hero-title {
                    span { (hero.title_line1.get(locale)) }
                    span.accent { (hero.title_line2.get(locale)) }
                }
                p.hero-description { (hero.description.get(locale)) }
                a.button.button-accent href=(Route::Contact.href()) data-action="navigate" {
                    (hero.button.get(locale))
                }
            }
            div.scroll-hint aria-hidden="true" {
                span { (SCROLL_HINT.get(locale)) }
                span.scroll-line {}
            }
        }
        section.headline {
            h2 {
                span { (headline.title_line1.get(locale)) }
                " "
                span.accent { (headline.title_line2.get(locale)) }
            }
            p { (headline.description.get(locale)) }
        }
        section.about-cards id="about" {
            @for card in &content.about {
                (card_block(card, locale))
            }
        }
        section.services-grid id="services" {
            div.section-heading {
                span.eyebrow-text { (content.services_eyebrow) }
                h2 { (content.services_title.get(locale)) }
            }
            div.cards {
                @for service in &content.services {
                    (service_card(service, locale))
                }
            }
        }
        section.why-us id="why-us" {
            h2 {
                (WHY_PREFIX.get(locale)) " "
                span.accent { "Effect Wave?" }
            }
            div.cards {
                @for card in &content.why_us {
                    (card_block(card, locale))
                }
            }
        }
        (team_teaser(locale))
        (clients(locale))
    }
}

fn card_block(card: &Card, locale: Locale) -> Markup {
    html! {
        article.card {
            (icon(card.icon))
            h3 { (card.title.get(locale)) }
            p { (card.text.get(locale)) }
        }
    }
}

fn service_card(service: &Service, locale: Locale) -> Markup {
    html! {
        article.card.service-card {
            (icon(service.icon))
            span.service-subtitle { (service.subtitle) }
            h3 { (service.title.get(locale)) }
            ul.features {
                @for feature in service.features {
                    li { (feature.get(locale)) }
                }
            }
        }
    }
}

fn team_teaser(locale: Locale) -> Markup {
    html! {
        section.team-teaser id="team" {
            div.section-heading {
                span.eyebrow-text { (TEASER.eyebrow.get(locale)) }
                h2 { (TEASER.title.get(locale)) }
                p { (TEASER.description.get(locale)) }
                span.badge { (TEASER.badge) }
            }
            div.team-grid {
                @for member in &MEMBERS {
                    (member_card(member, locale))
                }
            }
        }
    }
}

fn member_card(member: &Member, locale: Locale) -> Markup {
    let name = member.name.get(locale);
    html! {
        article.member {
            img src=(member.image) alt=(name) loading="lazy";
            div.member-info {
                span.member-role { (member.role.get(locale)) }
                h3 { (name) }
                div.member-socials {
                    @for social in member.socials {
                        a href=(social.url) target="_blank" rel="noopener noreferrer" {
                            (icon(social.kind.icon()))
                        }
                    }
                }
            }
        }
    }
}

fn clients(locale: Locale) -> Markup {
    html! {
        section.clients {
            div.section-heading {
                span.eyebrow-text { (CLIENTS.eyebrow.get(locale)) }
                h2 { (CLIENTS.title.get(locale)) }
                p { (CLIENTS.description.get(locale)) }
            }
            div.logo-grid {
                @for path in CLIENTS.logo_paths() {
                    img src=(path) alt="" loading="lazy";
                }
            }
            div.stats {
                @for stat in &CLIENTS.stats {
                    div.stat {
                        strong { (stat.value) }
                        span { (stat.label.get(locale)) }
                    }
                }
            }
            p.footnote { (CLIENTS.footnote.get(locale)) }
        }
    }
}

// ============================================================================
// Inner pages
// ============================================================================

pub fn about(theme: Theme, locale: Locale) -> Markup {
    let content = ABOUT.get(theme);
    html! {
        div.page.about-page {
            (page_header(&content.header, locale))
            blockquote.intro { "\"" (content.intro.get(locale)) "\"" }
            div.pillars {
                (pillar(&content.vision, locale))
                (pillar(&content.mission, locale))
            }
        }
    }
}

fn pillar(pillar: &Pillar, locale: Locale) -> Markup {
    html! {
        article.pillar {
            (icon(pillar.icon))
            h2 { (pillar.title.get(locale)) }
            p.pillar-eyebrow { (pillar.eyebrow) }
            p { (pillar.text.get(locale)) }
            span.pillar-motto { (pillar.motto.get(locale)) }
        }
    }
}

pub fn services(theme: Theme, locale: Locale) -> Markup {
    let content = SERVICES.get(theme);
    html! {
        div.page.services-page {
            (page_header(&content.header, locale))
            div.cards {
                @for service in content.services {
                    (service_card(service, locale))
                }
            }
            section.cta {
                h2 { (CTA.title.get(locale)) }
                p { (CTA.text.get(locale)) }
                a.button.button-accent href=(Route::Contact.href()) data-action="navigate" {
                    (CTA.button.get(locale)) " " (forward_arrow(locale))
                }
            }
        }
    }
}

pub fn philosophy(theme: Theme, locale: Locale) -> Markup {
    let motto = MOTTO.get(theme);
    html! {
        div.page.philosophy-page {
            (page_header(&philosophy::HEADER, locale))
            section.principles {
                div.principles-text {
                    h2 {
                        (icon("lightbulb"))
                        (HEADING.get(locale)) " "
                        span.emphasis { (HEADING_EMPHASIS.get(locale)) }
                    }
                    p { (PRINCIPLE.get(locale)) }
                    p { (APPROACH.get(theme).get(locale)) }
                }
                div.motto { h3 { (motto[0]) br; (motto[1]) } }
            }
            @if theme == Theme::Agency {
                section.platforms {
                    h2 {
                        (PLATFORMS.title.get(locale)) " "
                        span.accent { (PLATFORMS.brand.get(locale)) }
                    }
                    p { (PLATFORMS.description.get(locale)) }
                    div.platform-grid {
                        @for platform in &PLATFORMS.items {
                            article.platform {
                                div.platform-heading {
                                    h3 { (platform.name.get(locale)) }
                                    @if platform.upcoming {
                                        span.badge-soon { (PLATFORMS.soon.get(locale)) }
                                    }
                                    (icon(platform.icon))
                                }
                                p { (platform.description.get(locale)) }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn team(locale: Locale) -> Markup {
    html! {
        div.page.team-page {
            (page_header(&TEAM_HEADER, locale))
            h2.section-title { (LEADERSHIP.get(locale)) }
            div.team-grid {
                @for member in &MEMBERS {
                    article.member.member-plain {
                        (icon("user"))
                        h3 { (member.name.get(locale)) }
                        p.member-role-en { (member.role.en) }
                        p.member-role { (member.role.get(locale)) }
                    }
                }
            }
            p.statement { "\"" (STATEMENT.get(locale)) "\"" }
        }
    }
}

pub fn contact(locale: Locale, config: &SiteConfig) -> Markup {
    let email = &config.site.contact_email;
    html! {
        div.page.contact-page {
            (page_header(&contact::HEADER, locale))
            div.contact-grid {
                section.contact-info {
                    h2 { (COPY.heading.get(locale)) }
                    div.contact-card {
                        (icon("phone"))
                        h3 { (COPY.phone.get(locale)) }
                        @for phone in &PHONES {
                            a dir="ltr" href=(phone.href) { (phone.display) }
                        }
                    }
                    a.contact-card href={ "mailto:" (email) } {
                        (icon("mail"))
                        h3 { (COPY.email.get(locale)) }
                        p { (email) }
                    }
                    a.contact-card href=(config.site.base_url) target="_blank" rel="noreferrer" {
                        (icon("globe"))
                        h3 { (COPY.website.get(locale)) }
                        p { (WEBSITE_DISPLAY) }
                    }
                }
                section.contact-form-card {
                    h3 { (COPY.form_heading.get(locale)) }
                    form id="contact-form" data-action="contact-submit" data-mailto=(email) {
                        label for=(Field::Name.input_id()) { (COPY.name_label.get(locale)) }
                        input id="contact-name" type="text" name="name" required
                            placeholder=(COPY.name_placeholder.get(locale));
                        label for=(Field::Email.input_id()) { (COPY.email_label.get(locale)) }
                        input id="contact-email" type="email" name="email" required
                            placeholder=(COPY.email_placeholder);
                        label for=(Field::Message.input_id()) { (COPY.message_label.get(locale)) }
                        textarea id="contact-message" name="message" rows="4" required
                            placeholder=(COPY.message_placeholder.get(locale)) {}
                        button.button.button-accent type="submit" {
                            (COPY.submit.get(locale)) " " (forward_arrow(locale))
                        }
                    }
                }
            }
        }
    }
}

pub fn legal(document: &LegalDocument, locale: Locale) -> Markup {
    let markdown = document.markdown(locale);
    let parser = Parser::new(&markdown);
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, parser);

    html! {
        div.page.legal-page {
            header.page-header {
                div.eyebrow {
                    span.eyebrow-line {}
                    span.eyebrow-text { (document.eyebrow) }
                }
                h1.page-title { (document.title.get(locale)) }
            }
            p.last-updated { (document.last_updated.get(locale)) }
            article.legal-body {
                (PreEscaped(body_html))
            }
        }
    }
}

pub fn not_found(locale: Locale) -> Markup {
    html! {
        div.page.not-found {
            h1.not-found-code { (chrome::NOT_FOUND_CODE) }
            h2 { (chrome::NOT_FOUND_TITLE.get(locale)) }
            p { (chrome::NOT_FOUND_TEXT.get(locale)) }
            a.button.button-accent href=(Route::Home.href()) data-action="navigate" {
                (chrome::NOT_FOUND_BACK.get(locale))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_switches_copy_with_theme() {
        let agency = home(Theme::Agency, Locale::En).into_string();
        let production = home(Theme::Production, Locale::En).into_string();
        assert!(agency.contains("MARKETING AGENCY"));
        assert!(production.contains("MEDIA PRODUCTION"));
        assert!(agency.contains("href=\"#/contact\""));
    }

    #[test]
    fn home_lists_clients_and_stats() {
        let html = home(Theme::Agency, Locale::Ar).into_string();
        assert!(html.contains("/logos/clients/13.png"));
        assert!(html.contains("50+"));
        assert!(html.contains("سنوات خبرة"));
    }

    #[test]
    fn platforms_only_for_agency() {
        let agency = philosophy(Theme::Agency, Locale::En).into_string();
        let production = philosophy(Theme::Production, Locale::En).into_string();
        assert!(agency.contains("Rowad"));
        assert!(agency.contains("Soon"));
        assert!(!production.contains("Rowad"));
        assert!(production.contains("QUALITY"));
    }

    #[test]
    fn services_page_ends_with_contact_cta() {
        let html = services(Theme::Production, Locale::Ar).into_string();
        assert!(html.contains("PRODUCTION SERVICES"));
        assert!(html.contains("هل تحتاج خدماتنا؟"));
        assert!(html.contains("href=\"#/contact\""));
    }

    #[test]
    fn legal_markdown_becomes_html() {
        let html = legal(&crate::content::legal::PRIVACY, Locale::En).into_string();
        assert!(html.contains("<h2>Information We Collect</h2>"));
        assert!(html.contains("<a href=\"mailto:info@effectwaveco.com\">"));
        assert!(html.contains("Last Updated: February 2026"));
    }

    #[test]
    fn contact_form_targets_configured_address() {
        let mut config = SiteConfig::default();
        config.site.contact_email = "hello@example.ly".to_string();
        let html = contact(Locale::En, &config).into_string();
        assert!(html.contains("data-mailto=\"hello@example.ly\""));
        assert!(html.contains("id=\"contact-message\""));
        assert!(html.contains("094 - 468 98 27"));
    }

    #[test]
    fn not_found_links_home() {
        let html = not_found(Locale::Ar).into_string();
        assert!(html.contains("404"));
        assert!(html.contains("href=\"#/\""));
        assert!(html.contains("العودة للرئيسية"));
    }
}
