//! Document-head metadata with exact restoration.
//!
//! Pages describe the head state they want with a [`MetaRecord`]. Installing
//! a record turns it into a list of [`HeadOp`]s; applying each op against a
//! [`DocumentHead`] captures an undo closure on a stack. Teardown pops that
//! stack in LIFO order, so a tag the install created is removed, and a tag it
//! modified gets its previous value back (or loses the attribute when it had
//! none). Installing `R` then tearing down is the identity on the head.
//!
//! Two heads implement the trait: [`MemoryHead`], used by prerender and
//! tests, and the DOM head in the browser runtime. With no head at all the
//! [`MetadataManager`] is a no-op.
//!
//! ## Recognized options
//!
//! | Record field | Tags |
//! |--------------|------|
//! | `title` | `<title>`, `og:title`, `twitter:title` (always, base title appended) |
//! | `description` | `name=description`, `og:description`, `twitter:description` |
//! | `canonical_url` | `link rel=canonical`, `og:url` |
//! | `og_type` | `og:type` (always, default `website`) |
//! | `og_image` | `og:image`, `twitter:image` (always, default from config) |
//! | `og_locale` | `og:locale` |
//! | n/a | `twitter:card` = `summary_large_image` (always) |

use crate::config::MetaConfig;
use maud::{Markup, html};
use std::fmt;
use tracing::debug;

pub const DEFAULT_OG_TYPE: &str = "website";
pub const TWITTER_CARD: &str = "summary_large_image";

// ============================================================================
// Selectors and the head abstraction
// ============================================================================

/// Identifies one head tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    /// `<meta name="…">`
    MetaName(&'static str),
    /// `<meta property="…">`
    MetaProperty(&'static str),
    /// `<link rel="…">`
    LinkRel(&'static str),
}

impl Selector {
    pub fn tag(&self) -> &'static str {
        match self {
            Selector::MetaName(_) | Selector::MetaProperty(_) => "meta",
            Selector::LinkRel(_) => "link",
        }
    }

    /// The attribute that identifies the tag, with its value.
    pub fn key(&self) -> (&'static str, &'static str) {
        match *self {
            Selector::MetaName(v) => ("name", v),
            Selector::MetaProperty(v) => ("property", v),
            Selector::LinkRel(v) => ("rel", v),
        }
    }

    /// The attribute that carries the tag's value.
    pub fn value_attr(&self) -> &'static str {
        match self {
            Selector::MetaName(_) | Selector::MetaProperty(_) => "content",
            Selector::LinkRel(_) => "href",
        }
    }

    /// CSS selector, e.g. `meta[property="og:title"]`.
    pub fn css(&self) -> String {
        let (attr, value) = self.key();
        format!("{}[{}=\"{}\"]", self.tag(), attr, value)
    }
}

/// Every tag a record can install.
pub const RECORD_TAGS: [Selector; 12] = [
    Selector::MetaName("description"),
    Selector::LinkRel("canonical"),
    Selector::MetaProperty("og:title"),
    Selector::MetaProperty("og:description"),
    Selector::MetaProperty("og:url"),
    Selector::MetaProperty("og:type"),
    Selector::MetaProperty("og:image"),
    Selector::MetaProperty("og:locale"),
    Selector::MetaName("twitter:card"),
    Selector::MetaName("twitter:title"),
    Selector::MetaName("twitter:description"),
    Selector::MetaName("twitter:image"),
];

/// Mutable view of a document head.
pub trait DocumentHead: 'static {
    type Node: Clone + 'static;

    fn title(&self) -> String;
    fn set_title(&mut self, title: &str);
    /// First element matching `selector`.
    fn find(&self, selector: &Selector) -> Option<Self::Node>;
    /// Append a new element carrying only the selector's key attribute.
    fn create(&mut self, selector: &Selector) -> Option<Self::Node>;
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);
    fn remove_attribute(&mut self, node: &Self::Node, name: &str);
    fn remove(&mut self, node: &Self::Node);
}

// ============================================================================
// Records and operations
// ============================================================================

/// Head state a page imposes for its lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaRecord {
    /// Page title; empty means the base title alone.
    pub title: String,
    pub description: Option<String>,
    pub canonical_url: Option<String>,
    pub og_image: Option<String>,
    pub og_locale: Option<String>,
    pub og_type: Option<String>,
}

impl MetaRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn canonical_url(mut self, url: impl Into<String>) -> Self {
        self.canonical_url = Some(url.into());
        self
    }

    pub fn og_image(mut self, url: impl Into<String>) -> Self {
        self.og_image = Some(url.into());
        self
    }

    pub fn og_locale(mut self, locale: impl Into<String>) -> Self {
        self.og_locale = Some(locale.into());
        self
    }

    pub fn og_type(mut self, og_type: impl Into<String>) -> Self {
        self.og_type = Some(og_type.into());
        self
    }

    /// The ops that install this record, in installation order.
    pub fn operations(&self, defaults: &MetaDefaults) -> Vec<HeadOp> {
        let full_title = defaults.full_title(&self.title);
        let image = self
            .og_image
            .clone()
            .unwrap_or_else(|| defaults.default_og_image.clone());
        let og_type = self
            .og_type
            .clone()
            .unwrap_or_else(|| DEFAULT_OG_TYPE.to_string());

        let mut tags: Vec<(Selector, String)> = Vec::new();
        if let Some(desc) = &self.description {
            tags.push((Selector::MetaName("description"), desc.clone()));
        }
        if let Some(url) = &self.canonical_url {
            tags.push((Selector::LinkRel("canonical"), url.clone()));
        }
        tags.push((Selector::MetaProperty("og:title"), full_title.clone()));
        if let Some(desc) = &self.description {
            tags.push((Selector::MetaProperty("og:description"), desc.clone()));
        }
        if let Some(url) = &self.canonical_url {
            tags.push((Selector::MetaProperty("og:url"), url.clone()));
        }
        tags.push((Selector::MetaProperty("og:type"), og_type));
        tags.push((Selector::MetaProperty("og:image"), image.clone()));
        if let Some(locale) = &self.og_locale {
            tags.push((Selector::MetaProperty("og:locale"), locale.clone()));
        }
        tags.push((Selector::MetaName("twitter:card"), TWITTER_CARD.to_string()));
        tags.push((Selector::MetaName("twitter:title"), full_title.clone()));
        if let Some(desc) = &self.description {
            tags.push((Selector::MetaName("twitter:description"), desc.clone()));
        }
        tags.push((Selector::MetaName("twitter:image"), image));

        let mut ops = vec![HeadOp::SetTitle(full_title)];
        for (selector, value) in tags {
            ops.push(HeadOp::CreateElement(selector));
            ops.push(HeadOp::SetAttribute { selector, value });
        }
        ops
    }
}

/// Site-wide values a record falls back to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaDefaults {
    pub base_title: String,
    pub default_og_image: String,
}

impl MetaDefaults {
    pub fn full_title(&self, title: &str) -> String {
        if title.is_empty() {
            self.base_title.clone()
        } else {
            format!("{title} — {}", self.base_title)
        }
    }
}

impl From<&MetaConfig> for MetaDefaults {
    fn from(config: &MetaConfig) -> Self {
        Self {
            base_title: config.base_title.clone(),
            default_og_image: config.default_og_image.clone(),
        }
    }
}

impl Default for MetaDefaults {
    fn default() -> Self {
        Self::from(&MetaConfig::default())
    }
}

/// One reversible head mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadOp {
    SetTitle(String),
    /// Ensure a tag for the selector exists. No-op when it already does.
    CreateElement(Selector),
    /// Set the selector's value attribute on its tag.
    SetAttribute { selector: Selector, value: String },
}

type Undo<H> = Box<dyn FnOnce(&mut H)>;

impl HeadOp {
    /// Apply to `head`, returning the closure that reverts it, if anything
    /// changed.
    pub fn apply<H: DocumentHead>(&self, head: &mut H) -> Option<Undo<H>> {
        match self {
            HeadOp::SetTitle(title) => {
                let previous = head.title();
                head.set_title(title);
                Some(Box::new(move |h: &mut H| h.set_title(&previous)))
            }
            HeadOp::CreateElement(selector) => {
                if head.find(selector).is_some() {
                    return None;
                }
                let node = head.create(selector)?;
                Some(Box::new(move |h: &mut H| h.remove(&node)))
            }
            HeadOp::SetAttribute { selector, value } => {
                let node = head.find(selector)?;
                let attr = selector.value_attr();
                let previous = head.attribute(&node, attr);
                head.set_attribute(&node, attr, value);
                Some(Box::new(move |h: &mut H| match previous {
                    Some(v) => h.set_attribute(&node, attr, &v),
                    None => h.remove_attribute(&node, attr),
                }))
            }
        }
    }
}

/// Teardown handle for one installed record.
pub struct MetaHandle<H: DocumentHead> {
    undo: Vec<Undo<H>>,
}

impl<H: DocumentHead> MetaHandle<H> {
    /// Revert every op, newest first. Later calls do nothing.
    pub fn teardown(&mut self, head: &mut H) {
        let count = self.undo.len();
        while let Some(undo) = self.undo.pop() {
            undo(head);
        }
        if count > 0 {
            debug!(ops = count, "metadata torn down");
        }
    }

    pub fn is_torn_down(&self) -> bool {
        self.undo.is_empty()
    }
}

impl<H: DocumentHead> fmt::Debug for MetaHandle<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetaHandle")
            .field("pending_undo", &self.undo.len())
            .finish()
    }
}

/// Apply `record` to `head`.
pub fn install<H: DocumentHead>(
    head: &mut H,
    record: &MetaRecord,
    defaults: &MetaDefaults,
) -> MetaHandle<H> {
    let undo: Vec<_> = record
        .operations(defaults)
        .iter()
        .filter_map(|op| op.apply(head))
        .collect();
    debug!(title = %record.title, ops = undo.len(), "metadata installed");
    MetaHandle { undo }
}

/// Remove the record tags a prerendered head shipped with and reset the
/// title to the base title.
pub fn strip_record<H: DocumentHead>(head: &mut H, defaults: &MetaDefaults) {
    head.set_title(&defaults.base_title);
    let mut removed = 0;
    for selector in &RECORD_TAGS {
        while let Some(node) = head.find(selector) {
            head.remove(&node);
            removed += 1;
        }
    }
    debug!(removed, "prerendered metadata stripped");
}

// ============================================================================
// Manager
// ============================================================================

/// Holds at most one installed record against an optional head.
pub struct MetadataManager<H: DocumentHead> {
    head: Option<H>,
    defaults: MetaDefaults,
    active: Option<MetaHandle<H>>,
}

impl<H: DocumentHead> MetadataManager<H> {
    pub fn new(head: Option<H>, defaults: MetaDefaults) -> Self {
        Self {
            head,
            defaults,
            active: None,
        }
    }

    /// Manager with no head; every call is a no-op.
    pub fn detached(defaults: MetaDefaults) -> Self {
        Self::new(None, defaults)
    }

    pub fn is_attached(&self) -> bool {
        self.head.is_some()
    }

    pub fn has_active(&self) -> bool {
        self.active.is_some()
    }

    /// Tear down whatever is installed, then install `record`.
    pub fn apply(&mut self, record: &MetaRecord) {
        self.clear();
        if let Some(head) = self.head.as_mut() {
            self.active = Some(install(head, record, &self.defaults));
        }
    }

    /// Take over a head that already carries a page record, so later
    /// teardowns restore the bare head instead of that page's tags.
    pub fn adopt(&mut self) {
        self.clear();
        if let Some(head) = self.head.as_mut() {
            strip_record(head, &self.defaults);
        }
    }

    /// Tear down the installed record, if any.
    pub fn clear(&mut self) {
        if let (Some(head), Some(mut handle)) = (self.head.as_mut(), self.active.take()) {
            handle.teardown(head);
        }
    }

    pub fn head(&self) -> Option<&H> {
        self.head.as_ref()
    }

    pub fn defaults(&self) -> &MetaDefaults {
        &self.defaults
    }

    /// Give the head back, leaving the current record installed.
    pub fn into_head(self) -> Option<H> {
        self.head
    }
}

// ============================================================================
// In-memory head
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadElement {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
}

impl HeadElement {
    pub fn new(tag: &str, attributes: &[(&str, &str)]) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn matches(&self, selector: &Selector) -> bool {
        let (attr, value) = selector.key();
        self.tag == selector.tag() && self.attr(attr) == Some(value)
    }
}

/// Ordered list of head elements plus a title.
///
/// Node handles are stable ids, so removing one element never invalidates
/// another. Equality ignores ids.
#[derive(Debug, Clone, Default)]
pub struct MemoryHead {
    title: String,
    elements: Vec<(usize, HeadElement)>,
    next_id: usize,
}

impl PartialEq for MemoryHead {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.elements().eq(other.elements())
    }
}

impl Eq for MemoryHead {}

impl MemoryHead {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Self::default()
        }
    }

    /// Append an element.
    pub fn push(&mut self, element: HeadElement) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.elements.push((id, element));
        id
    }

    pub fn with(mut self, tag: &str, attributes: &[(&str, &str)]) -> Self {
        self.push(HeadElement::new(tag, attributes));
        self
    }

    pub fn elements(&self) -> impl Iterator<Item = &HeadElement> {
        self.elements.iter().map(|(_, e)| e)
    }

    /// Value attribute of the tag matching `selector`.
    pub fn value(&self, selector: &Selector) -> Option<&str> {
        self.elements()
            .find(|e| e.matches(selector))
            .and_then(|e| e.attr(selector.value_attr()))
    }

    fn element_mut(&mut self, node: usize) -> Option<&mut HeadElement> {
        self.elements
            .iter_mut()
            .find(|(id, _)| *id == node)
            .map(|(_, e)| e)
    }

    /// Markup for the `<head>` contents.
    pub fn render(&self) -> Markup {
        html! {
            title { (self.title) }
            @for element in self.elements() {
                @match element.tag.as_str() {
                    "meta" => {
                        meta charset=[element.attr("charset")]
                            name=[element.attr("name")]
                            property=[element.attr("property")]
                            content=[element.attr("content")];
                    }
                    "link" => {
                        link rel=[element.attr("rel")]
                            href=[element.attr("href")]
                            crossorigin=[element.attr("crossorigin")];
                    }
                    _ => {}
                }
            }
        }
    }
}

impl DocumentHead for MemoryHead {
    type Node = usize;

    fn title(&self) -> String {
        self.title.clone()
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn find(&self, selector: &Selector) -> Option<usize> {
        self.elements
            .iter()
            .find(|(_, e)| e.matches(selector))
            .map(|(id, _)| *id)
    }

    fn create(&mut self, selector: &Selector) -> Option<usize> {
        let (attr, value) = selector.key();
        Some(self.push(HeadElement::new(selector.tag(), &[(attr, value)])))
    }

    fn attribute(&self, node: &usize, name: &str) -> Option<String> {
        self.elements
            .iter()
            .find(|(id, _)| id == node)
            .and_then(|(_, e)| e.attr(name))
            .map(str::to_string)
    }

    fn set_attribute(&mut self, node: &usize, name: &str, value: &str) {
        if let Some(element) = self.element_mut(*node) {
            match element.attributes.iter_mut().find(|(k, _)| k == name) {
                Some((_, v)) => *v = value.to_string(),
                None => element
                    .attributes
                    .push((name.to_string(), value.to_string())),
            }
        }
    }

    fn remove_attribute(&mut self, node: &usize, name: &str) {
        if let Some(element) = self.element_mut(*node) {
            element.attributes.retain(|(k, _)| k != name);
        }
    }

    fn remove(&mut self, node: &usize) {
        self.elements.retain(|(id, _)| id != node);
    }
}
