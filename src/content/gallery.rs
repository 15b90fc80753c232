use super::{Audit, PageMeta, l};
use crate::gallery::{CATALOG, Filter};
use crate::types::{Locale, Localized};

pub const TITLE: Localized = l("معرض أعمالنا الإبداعية", "Our Creative Showcase");
pub const SUBTITLE: Localized = l(
    "لمحة عن موجات التأثير التي نصنعها.",
    "A glimpse into the waves of impact we create.",
);
pub const CLOSE: Localized = l("إغلاق", "Close");
pub const NEXT: Localized = l("التالي", "Next");
pub const PREVIOUS: Localized = l("السابق", "Previous");

pub const META: PageMeta = PageMeta {
    title: Some(l("المعرض", "Gallery")),
    description: Some(SUBTITLE),
};

pub(super) fn audit(audit: &mut Audit) {
    audit.meta("gallery.meta", &META);
    for (field, value) in [
        ("title", &TITLE),
        ("subtitle", &SUBTITLE),
        ("close", &CLOSE),
        ("next", &NEXT),
        ("previous", &PREVIOUS),
    ] {
        audit.text(&format!("gallery.{field}"), value);
    }
    for filter in Filter::ALL {
        audit.text(
            &format!("gallery.filter.{}", filter.key()),
            &Localized::new(filter.label(Locale::Ar), filter.label(Locale::En)),
        );
    }
    for item in &CATALOG {
        audit.text(&format!("gallery.catalog[{}].title", item.id), &item.title);
        audit.plain(&format!("gallery.catalog[{}].thumbnail", item.id), item.thumbnail_url);
    }
}
