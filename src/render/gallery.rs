//! Gallery page: filter bar, media grid and the lightbox.

use super::icon;
use crate::content::gallery::{CLOSE, NEXT, PREVIOUS, SUBTITLE, TITLE};
use crate::gallery::{Filter, Gallery, MediaItem, MediaKind};
use crate::types::Locale;
use maud::{Markup, html};

const VIDEO_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

pub fn page(gallery: &Gallery, locale: Locale) -> Markup {
    html! {
        div.page.gallery-page {
            header.gallery-header {
                h1 { (TITLE.get(locale)) }
                p { (SUBTITLE.get(locale)) }
            }
            (filters(gallery.filter(), locale))
            div.media-grid {
                @for item in gallery.visible() {
                    (card(item, locale))
                }
            }
            @if let Some(item) = gallery.selected() {
                (lightbox(gallery, item, locale))
            }
        }
    }
}

fn filters(active: Filter, locale: Locale) -> Markup {
    html! {
        div.filters role="toolbar" {
            @for filter in Filter::ALL {
                @let current = filter == active;
                button.filter.active[current] type="button"
                    data-action="gallery-filter" data-filter=(filter.key())
                    aria-pressed=(current.to_string()) {
                    (filter.label(locale))
                }
            }
        }
    }
}

fn card(item: &MediaItem, locale: Locale) -> Markup {
    let title = item.title.get(locale);
    html! {
        button.media-card type="button" data-action="gallery-select" data-id=(item.id) {
            img src=(item.thumbnail_url) alt=(title) loading="lazy";
            span.media-overlay {
                @match item.kind {
                    MediaKind::Video => (icon("play")),
                    MediaKind::Image => (icon("image")),
                }
                span.media-category { (item.category.label().get(locale)) }
                span.media-title { (title) }
            }
        }
    }
}

fn lightbox(gallery: &Gallery, item: &MediaItem, locale: Locale) -> Markup {
    let title = item.title.get(locale);
    html! {
        div.lightbox role="dialog" aria-modal="true" aria-label=(title) data-action="gallery-backdrop" {
            button.lightbox-close type="button" data-action="gallery-close" aria-label=(CLOSE.get(locale)) {
                (icon("x"))
            }
            button.lightbox-prev type="button" data-action="gallery-prev" aria-label=(PREVIOUS.get(locale)) {
                (icon("chevron-left"))
            }
            button.lightbox-next type="button" data-action="gallery-next" aria-label=(NEXT.get(locale)) {
                (icon("chevron-right"))
            }
            div.lightbox-card data-action="gallery-card" {
                @match item.kind {
                    MediaKind::Image => {
                        img src=(item.content_url) alt=(title);
                    }
                    MediaKind::Video => {
                        iframe src=(item.player_url()) title=(title) allow=(VIDEO_ALLOW) allowfullscreen {}
                    }
                }
                div.lightbox-caption {
                    h3 { (title) }
                    @if let Some(caption) = gallery.caption() {
                        span.lightbox-count { (caption) }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::Category;

    #[test]
    fn grid_shows_filtered_items_only() {
        let mut gallery = Gallery::default();
        gallery.set_filter(Filter::Only(Category::Video));
        let html = page(&gallery, Locale::En).into_string();
        assert_eq!(html.matches("data-action=\"gallery-select\"").count(), 2);
        assert!(html.contains("Brand Story"));
        assert!(html.contains("class=\"filter active\""));
    }

    #[test]
    fn closed_gallery_has_no_lightbox() {
        let html = page(&Gallery::default(), Locale::Ar).into_string();
        assert!(!html.contains("lightbox"));
        assert!(html.contains("معرض أعمالنا الإبداعية"));
    }

    #[test]
    fn lightbox_shows_caption_against_visible_set() {
        let mut gallery = Gallery::default();
        gallery.set_filter(Filter::Only(Category::Branding));
        gallery.select(15);
        let html = page(&gallery, Locale::En).into_string();
        assert!(html.contains("4 / 5"));
        assert!(html.contains("aria-label=\"Close\""));
        assert!(html.contains("data-action=\"gallery-card\""));
    }

    #[test]
    fn video_lightbox_embeds_autoplay_player() {
        let mut gallery = Gallery::default();
        gallery.select(102);
        let html = page(&gallery, Locale::En).into_string();
        assert!(html.contains("src=\"https://www.youtube.com/embed/aqz-KE-bpKQ?autoplay=1\""));
        assert!(html.contains("allowfullscreen"));
    }
}
