//! Media catalog, category filter and lightbox selection.
//!
//! The visible set is always derived from the filter, in catalog order;
//! lightbox navigation and the `n / total` caption are computed against that
//! set, never against the whole catalog.

use crate::types::{Locale, Localized};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    SocialMedia,
    Branding,
    Marketing,
    Production,
    Events,
    Video,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::SocialMedia,
        Category::Branding,
        Category::Marketing,
        Category::Production,
        Category::Events,
        Category::Video,
    ];

    /// Catalog name, shown as the item's tag in both locales.
    pub fn name(self) -> &'static str {
        match self {
            Category::SocialMedia => "Social Media",
            Category::Branding => "Branding",
            Category::Marketing => "Marketing",
            Category::Production => "Production",
            Category::Events => "Events",
            Category::Video => "Video",
        }
    }

    pub fn label(self) -> Localized {
        match self {
            Category::SocialMedia => Localized::new("تواصل اجتماعي", "Social Media"),
            Category::Branding => Localized::new("هوية بصرية", "Branding"),
            Category::Marketing => Localized::new("تسويق", "Marketing"),
            Category::Production => Localized::new("إنتاج", "Production"),
            Category::Events => Localized::new("فعاليات", "Events"),
            Category::Video => Localized::new("فيديو", "Video"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    pub const ALL: [Filter; 7] = [
        Filter::All,
        Filter::Only(Category::SocialMedia),
        Filter::Only(Category::Branding),
        Filter::Only(Category::Marketing),
        Filter::Only(Category::Production),
        Filter::Only(Category::Events),
        Filter::Only(Category::Video),
    ];

    pub fn label(self, locale: Locale) -> &'static str {
        match self {
            Filter::All => Localized::new("الكل", "All").get(locale),
            Filter::Only(category) => category.label().get(locale),
        }
    }

    /// Stable token used in `data-filter` attributes.
    pub fn key(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Only(Category::SocialMedia) => "social-media",
            Filter::Only(Category::Branding) => "branding",
            Filter::Only(Category::Marketing) => "marketing",
            Filter::Only(Category::Production) => "production",
            Filter::Only(Category::Events) => "events",
            Filter::Only(Category::Video) => "video",
        }
    }

    pub fn from_key(key: &str) -> Option<Filter> {
        Filter::ALL.into_iter().find(|f| f.key() == key)
    }

    pub fn admits(self, item: &MediaItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(category) => item.category == category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaItem {
    pub id: u32,
    pub kind: MediaKind,
    pub thumbnail_url: &'static str,
    pub content_url: &'static str,
    pub category: Category,
    pub title: Localized,
}

impl MediaItem {
    /// Source for the lightbox: the image itself, or the embed told to
    /// autoplay.
    pub fn player_url(&self) -> String {
        match self.kind {
            MediaKind::Image => self.content_url.to_string(),
            MediaKind::Video => format!("{}?autoplay=1", self.content_url),
        }
    }
}

const fn image(
    id: u32,
    path: &'static str,
    category: Category,
    ar: &'static str,
    en: &'static str,
) -> MediaItem {
    MediaItem {
        id,
        kind: MediaKind::Image,
        thumbnail_url: path,
        content_url: path,
        category,
        title: Localized::new(ar, en),
    }
}

pub static CATALOG: [MediaItem; 18] = [
    image(1, "/assets/Media/02 شيماء بوست copy.jpg", Category::SocialMedia, "حملة تواصل اجتماعي", "Social Media Campaign"),
    image(2, "/assets/Media/BIANCO copy.jpg", Category::Branding, "هوية بصرية فاخرة", "Premium Branding"),
    image(3, "/assets/Media/baw social media 2 copy.jpg", Category::SocialMedia, "محتوى تفاعلي", "Dynamic Content"),
    image(4, "/assets/Media/tetto.jpg", Category::Branding, "هوية مؤسسية", "Corporate Identity"),
    image(5, "/assets/Media/الرسالة.jpg", Category::SocialMedia, "سرد قصصي إبداعي", "Creative Storytelling"),
    image(6, "/assets/Media/بوست التسويق الإلكتروني copy.jpg", Category::Marketing, "تسويق إلكتروني", "Digital Marketing"),
    image(7, "/assets/Media/بوست سوشل ميديا رؤيتنا copy.jpg", Category::SocialMedia, "بوست رؤيتنا", "Our Vision Post"),
    image(8, "/assets/Media/بوست سوشل ميديا التسويق التقليدي copy.jpg", Category::Marketing, "التسويق التقليدي", "Traditional Marketing"),
    image(9, "/assets/Media/بوست سوشل ميديا الانتاج الاعلامي copy.jpg", Category::Production, "الإنتاج الإعلامي", "Media Production"),
    image(10, "/assets/Media/بوست توصيلة 02 copy.jpg", Category::SocialMedia, "بوست تطبيق توصيل", "Delivery App Post"),
    image(11, "/assets/Media/برايمر الطوقان بلس copy.jpg", Category::Branding, "برايمر الطوقان", "Toucan Primer"),
    image(12, "/assets/Media/اليوم التاني 3.jpg", Category::Events, "تغطية اليوم الثاني", "Event Coverage: Day 2"),
    image(13, "/assets/Media/studio-session.jpg", Category::Production, "جلسة تصوير في الاستوديو", "Studio Session"),
    image(14, "/assets/Media/launch-night.jpg", Category::Events, "ليلة الإطلاق", "Launch Night"),
    image(15, "/assets/Media/packaging.jpg", Category::Branding, "تصميم التغليف", "Packaging Design"),
    image(16, "/assets/Media/logo-refresh.jpg", Category::Branding, "تحديث الشعار", "Logo Refresh"),
    MediaItem {
        id: 101,
        kind: MediaKind::Video,
        thumbnail_url: "https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg",
        content_url: "https://www.youtube.com/embed/dQw4w9WgXcQ",
        category: Category::Video,
        title: Localized::new("إعلان تجاري لمنتج", "Product Commercial"),
    },
    MediaItem {
        id: 102,
        kind: MediaKind::Video,
        thumbnail_url: "https://img.youtube.com/vi/aqz-KE-bpKQ/maxresdefault.jpg",
        content_url: "https://www.youtube.com/embed/aqz-KE-bpKQ",
        category: Category::Video,
        title: Localized::new("قصة العلامة التجارية", "Brand Story"),
    },
];

pub fn find(id: u32) -> Option<&'static MediaItem> {
    CATALOG.iter().find(|item| item.id == id)
}

// ============================================================================
// View state
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryKey {
    ArrowLeft,
    ArrowRight,
    Escape,
}

impl GalleryKey {
    /// Map a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<GalleryKey> {
        match key {
            "ArrowLeft" => Some(GalleryKey::ArrowLeft),
            "ArrowRight" => Some(GalleryKey::ArrowRight),
            "Escape" => Some(GalleryKey::Escape),
            _ => None,
        }
    }
}

/// Where a click inside the open lightbox landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxTarget {
    Backdrop,
    /// The media card; clicks here never reach the backdrop.
    Card,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gallery {
    filter: Filter,
    selected: Option<u32>,
}

impl Gallery {
    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn visible(&self) -> Vec<&'static MediaItem> {
        CATALOG
            .iter()
            .filter(|item| self.filter.admits(item))
            .collect()
    }

    /// Change the filter. An open selection that falls outside the new set
    /// is closed.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        if self.selected().is_some_and(|item| !filter.admits(item)) {
            self.selected = None;
        }
    }

    /// Open the lightbox on `id`. Ignored unless the item is visible.
    pub fn select(&mut self, id: u32) -> bool {
        match find(id) {
            Some(item) if self.filter.admits(item) => {
                self.selected = Some(id);
                true
            }
            _ => false,
        }
    }

    pub fn selected(&self) -> Option<&'static MediaItem> {
        self.selected.and_then(find)
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    /// Zero-based index of the selection within the visible set, and the
    /// set's size.
    pub fn position(&self) -> Option<(usize, usize)> {
        let id = self.selected?;
        let visible = self.visible();
        let index = visible.iter().position(|item| item.id == id)?;
        Some((index, visible.len()))
    }

    /// Lightbox caption, `{index+1} / {count}`.
    pub fn caption(&self) -> Option<String> {
        self.position()
            .map(|(index, count)| format!("{} / {}", index + 1, count))
    }

    fn step(&mut self, forward: bool) -> bool {
        let Some((index, count)) = self.position() else {
            return false;
        };
        let next = if forward {
            (index + 1) % count
        } else {
            (index + count - 1) % count
        };
        self.selected = Some(self.visible()[next].id);
        true
    }

    pub fn next(&mut self) -> bool {
        self.step(true)
    }

    pub fn prev(&mut self) -> bool {
        self.step(false)
    }

    /// Keyboard binding. Only active while a selection exists; returns
    /// whether the key was consumed.
    pub fn handle_key(&mut self, key: GalleryKey) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            GalleryKey::ArrowRight => self.next(),
            GalleryKey::ArrowLeft => self.prev(),
            GalleryKey::Escape => {
                self.close();
                true
            }
        }
    }

    pub fn handle_click(&mut self, target: LightboxTarget) {
        if target == LightboxTarget::Backdrop {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(items: &[&MediaItem]) -> Vec<u32> {
        items.iter().map(|i| i.id).collect()
    }

    // =========================================================================
    // Catalog and filters
    // =========================================================================

    #[test]
    fn ids_are_unique() {
        let mut all: Vec<_> = CATALOG.iter().map(|i| i.id).collect();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), CATALOG.len());
    }

    #[test]
    fn all_filter_is_whole_catalog_in_order() {
        let gallery = Gallery::default();
        assert_eq!(gallery.visible().len(), CATALOG.len());
        assert_eq!(gallery.visible()[0].id, 1);
        assert_eq!(gallery.visible().last().unwrap().id, 102);
    }

    #[test]
    fn category_filter_keeps_declaration_order() {
        let mut gallery = Gallery::default();
        gallery.set_filter(Filter::Only(Category::Branding));
        assert_eq!(ids(&gallery.visible()), vec![2, 4, 11, 15, 16]);
        gallery.set_filter(Filter::Only(Category::Video));
        assert_eq!(ids(&gallery.visible()), vec![101, 102]);
    }

    #[test]
    fn every_filter_has_both_labels_and_round_trips_its_key() {
        for filter in Filter::ALL {
            assert!(!filter.label(Locale::Ar).is_empty());
            assert!(!filter.label(Locale::En).is_empty());
            assert_eq!(Filter::from_key(filter.key()), Some(filter));
        }
        assert_eq!(Filter::All.label(Locale::Ar), "الكل");
        assert_eq!(Filter::from_key("photos"), None);
    }

    #[test]
    fn videos_autoplay_in_the_lightbox() {
        let video = find(101).unwrap();
        assert_eq!(
            video.player_url(),
            "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1"
        );
        let still = find(4).unwrap();
        assert_eq!(still.player_url(), "/assets/Media/tetto.jpg");
    }

    // =========================================================================
    // Lightbox navigation
    // =========================================================================

    #[test]
    fn arrow_right_advances_within_branding_and_wraps() {
        let mut gallery = Gallery::default();
        gallery.set_filter(Filter::Only(Category::Branding));
        assert!(gallery.select(15));

        assert!(gallery.handle_key(GalleryKey::ArrowRight));
        assert_eq!(gallery.selected().unwrap().id, 16);
        assert_eq!(gallery.caption().as_deref(), Some("5 / 5"));

        gallery.handle_key(GalleryKey::ArrowRight);
        assert_eq!(gallery.selected().unwrap().id, 2);

        assert!(gallery.handle_key(GalleryKey::Escape));
        assert!(!gallery.is_open());
    }

    #[test]
    fn arrows_follow_modular_order_for_every_set() {
        for filter in Filter::ALL {
            let mut gallery = Gallery::default();
            gallery.set_filter(filter);
            let visible = ids(&gallery.visible());
            let n = visible.len();
            for (i, id) in visible.iter().enumerate() {
                gallery.select(*id);
                gallery.handle_key(GalleryKey::ArrowRight);
                assert_eq!(gallery.selected().unwrap().id, visible[(i + 1) % n]);

                gallery.select(*id);
                gallery.handle_key(GalleryKey::ArrowLeft);
                assert_eq!(gallery.selected().unwrap().id, visible[(i + n - 1) % n]);
            }
        }
    }

    #[test]
    fn keys_are_inert_without_selection() {
        let mut gallery = Gallery::default();
        assert!(!gallery.handle_key(GalleryKey::ArrowRight));
        assert!(!gallery.handle_key(GalleryKey::Escape));
        assert_eq!(gallery, Gallery::default());
    }

    #[test]
    fn caption_counts_against_filtered_set() {
        let mut gallery = Gallery::default();
        gallery.select(11);
        assert_eq!(gallery.caption().as_deref(), Some("11 / 18"));
        gallery.set_filter(Filter::Only(Category::Branding));
        assert_eq!(gallery.caption().as_deref(), Some("3 / 5"));
    }

    #[test]
    fn selecting_a_hidden_item_is_ignored() {
        let mut gallery = Gallery::default();
        gallery.set_filter(Filter::Only(Category::Events));
        assert!(!gallery.select(2));
        assert!(!gallery.select(999));
        assert!(!gallery.is_open());
    }

    #[test]
    fn filter_change_closes_selection_outside_new_set() {
        let mut gallery = Gallery::default();
        gallery.select(101);
        gallery.set_filter(Filter::Only(Category::Video));
        assert!(gallery.is_open());
        gallery.set_filter(Filter::Only(Category::Marketing));
        assert!(!gallery.is_open());
    }

    #[test]
    fn backdrop_closes_card_does_not() {
        let mut gallery = Gallery::default();
        gallery.select(3);
        gallery.handle_click(LightboxTarget::Card);
        assert!(gallery.is_open());
        gallery.handle_click(LightboxTarget::Backdrop);
        assert!(!gallery.is_open());
    }

    #[test]
    fn key_names_map() {
        assert_eq!(GalleryKey::from_key("ArrowLeft"), Some(GalleryKey::ArrowLeft));
        assert_eq!(GalleryKey::from_key("Escape"), Some(GalleryKey::Escape));
        assert_eq!(GalleryKey::from_key("Enter"), None);
    }
}
