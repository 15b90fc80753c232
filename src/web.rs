//! Browser host.
//!
//! Binds the deterministic core to the page produced by the prerender:
//!
//! | Source | Effect |
//! |--------|--------|
//! | `hashchange` | `AppController::navigate`, then a transition request |
//! | click on `[data-action]` | controller or gallery call (delegated on `#root`) |
//! | `submit` of `#contact-form` | `mailto:` hand-off |
//! | `keydown` | gallery lightbox keys |
//! | `scroll` / `resize` / `visibilitychange` | header state, starfield |
//! | `requestAnimationFrame` | transition tick, starfield, switcher nudge |
//!
//! Every listener borrows the single [`App`] for the duration of one event;
//! state changes are collected through a store subscription and flushed once
//! per event.

use crate::config::SiteConfig;
use crate::contact::ContactForm;
use crate::gallery::{Filter, Gallery, GalleryKey, LightboxTarget};
use crate::generate;
use crate::head::{DocumentHead, MetaDefaults, MetadataManager, Selector};
use crate::render::layout::{self, ShellPatch};
use crate::render;
use crate::router;
use crate::starfield::{Environment, StarSurface, Starfield};
use crate::store::{AppController, PresentationState, ViewKey, Viewport};
use crate::switcher::Indicator;
use crate::transition::{TransitionEvent, TransitionShell};
use crate::types::{Locale, Route, Theme};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, Event, EventTarget, FormData, HtmlCanvasElement,
    HtmlFormElement, KeyboardEvent, VisibilityState, Window,
};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    boot().inspect_err(|err| web_sys::console::error_1(err))
}

// ============================================================================
// Environment adapters
// ============================================================================

/// `document.head` through the DOM.
pub struct DomHead {
    document: Document,
}

impl DocumentHead for DomHead {
    type Node = Element;

    fn title(&self) -> String {
        self.document.title()
    }

    fn set_title(&mut self, title: &str) {
        self.document.set_title(title);
    }

    fn find(&self, selector: &Selector) -> Option<Element> {
        self.document.query_selector(&selector.css()).ok().flatten()
    }

    fn create(&mut self, selector: &Selector) -> Option<Element> {
        let head = self.document.head()?;
        let element = self.document.create_element(selector.tag()).ok()?;
        let (attr, value) = selector.key();
        element.set_attribute(attr, value).ok()?;
        head.append_child(&element).ok()?;
        Some(element)
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&mut self, node: &Element, name: &str, value: &str) {
        let _ = node.set_attribute(name, value);
    }

    fn remove_attribute(&mut self, node: &Element, name: &str) {
        let _ = node.remove_attribute(name);
    }

    fn remove(&mut self, node: &Element) {
        node.remove();
    }
}

pub struct WindowViewport {
    window: Window,
}

impl Viewport for WindowViewport {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn scroll_to(&mut self, x: f64, y: f64) {
        self.window.scroll_to_with_x_and_y(x, y);
    }
}

/// `canvas#starfield` with its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// `None` when the canvas is missing or has no 2D context.
    fn acquire(document: &Document) -> Option<Self> {
        let canvas = document
            .get_element_by_id("starfield")?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        ctx.set_fill_style_str("#ffffff");
        Some(Self { canvas, ctx })
    }
}

impl StarSurface for CanvasSurface {
    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn set_scale(&mut self, scale: f64) {
        let _ = self.ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0);
        // Resizing the backing store resets context state.
        self.ctx.set_fill_style_str("#ffffff");
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, opacity: f64) {
        self.ctx.set_global_alpha(opacity);
        self.ctx.begin_path();
        let _ = self.ctx.arc(x, y, radius, 0.0, TAU);
        self.ctx.fill();
    }
}

fn environment(window: &Window) -> Environment {
    let size = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Environment {
        width: size(window.inner_width()),
        height: size(window.inner_height()),
        device_pixel_ratio: window.device_pixel_ratio(),
        reduced_motion: window
            .match_media("(prefers-reduced-motion: reduce)")
            .ok()
            .flatten()
            .is_some_and(|m| m.matches()),
    }
}

// ============================================================================
// App
// ============================================================================

struct App {
    window: Window,
    document: Document,
    root: Element,
    config: SiteConfig,
    controller: AppController<WindowViewport>,
    meta: MetadataManager<DomHead>,
    transition: TransitionShell<ViewKey>,
    starfield: Option<Starfield<CanvasSurface, StdRng>>,
    gallery: Gallery,
    /// Set by the store subscription, cleared by `flush`.
    changed: Rc<Cell<bool>>,
    /// State the DOM currently reflects.
    rendered: PresentationState,
    mounted_at_ms: f64,
    animating: bool,
}

impl App {
    fn now(&self) -> f64 {
        self.window.performance().map(|p| p.now()).unwrap_or(0.0)
    }

    fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn state(&self) -> PresentationState {
        *self.controller.state()
    }

    /// Bring the DOM in line with the store after an event.
    fn flush(&mut self) {
        if !self.changed.replace(false) {
            return;
        }
        let now = self.now();
        let state = self.state();
        let previous = self.rendered;
        self.rendered = state;

        for (name, value) in layout::root_attributes(&state) {
            let _ = self.root.set_attribute(name, &value);
        }
        if state.locale != previous.locale {
            self.render_shell(now);
            self.render_footer();
            self.render_view(self.transition.current(), true);
        } else {
            self.patch_shell(now);
        }
        if let Some(event) = self.transition.request(state.view_key(), now) {
            self.on_transition(event);
        }
    }

    fn on_transition(&mut self, event: TransitionEvent<ViewKey>) {
        match event {
            TransitionEvent::ExitStarted { .. } | TransitionEvent::Settled { .. } => {}
            TransitionEvent::Swapped { to, .. } => {
                self.gallery = Gallery::default();
                self.render_view(to, true);
            }
        }
    }

    fn render_shell(&self, now: f64) {
        let state = self.state();
        let indicator = Indicator::new(state.theme, state.has_interacted, now - self.mounted_at_ms);
        if let Some(shell) = self.element("shell") {
            shell.set_inner_html(&layout::shell(&state, &indicator).into_string());
        }
    }

    /// Update the mounted shell's nodes instead of replacing them.
    fn patch_shell(&self, now: f64) {
        let state = self.state();
        let indicator = Indicator::new(state.theme, state.has_interacted, now - self.mounted_at_ms);
        for patch in layout::shell_patches(&state, &indicator) {
            let Ok(nodes) = self.document.query_selector_all(patch.selector()) else {
                continue;
            };
            for i in 0..nodes.length() {
                let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                    continue;
                };
                match &patch {
                    ShellPatch::Class { class, on, .. } => {
                        let _ = el.class_list().toggle_with_force(class, *on);
                    }
                    ShellPatch::Attr { name, value: Some(value), .. } => {
                        let _ = el.set_attribute(name, value);
                    }
                    ShellPatch::Attr { name, value: None, .. } => {
                        let _ = el.remove_attribute(name);
                    }
                }
            }
        }
    }

    fn render_footer(&self) {
        let year = generate::current_year();
        if let Some(footer) = self.element("footer") {
            footer.set_inner_html(&layout::footer(self.state().locale, &self.config, year).into_string());
        }
    }

    /// Mount the page for `key`. Head metadata follows the mounted page.
    fn render_view(&mut self, key: ViewKey, with_meta: bool) {
        let locale = self.state().locale;
        let view = render::page(key.route, key.theme, locale, &self.gallery, &self.config);
        if let Some(main) = self.element("view") {
            main.set_inner_html(&view.body.into_string());
        }
        if with_meta {
            self.meta.apply(&view.meta);
        }
    }

    fn frame(&mut self, now: f64) {
        if let Some(event) = self.transition.tick(now) {
            self.on_transition(event);
        }
        let idle = self.transition.is_idle();
        if !idle || self.animating {
            if let Some(main) = self.element("view") {
                let _ = main.set_attribute("style", &self.transition.motion(now).to_css());
            }
        }
        self.animating = !idle;

        if let Some(field) = self.starfield.as_mut() {
            field.frame(now);
        }

        let state = self.state();
        if !state.has_interacted {
            let indicator = Indicator::new(state.theme, false, now - self.mounted_at_ms);
            if let Some(pill) = self.element("switcher-indicator") {
                let _ = pill.set_attribute("style", &indicator.to_css());
            }
        }
    }

    // ------------------------------------------------------------------------
    // Event handlers
    // ------------------------------------------------------------------------

    fn on_hash_change(&mut self, _event: Event) {
        let hash = self.window.location().hash().unwrap_or_default();
        self.controller.navigate(router::resolve_hash(&hash));
        self.flush();
    }

    fn on_click(&mut self, event: Event) {
        let Some(target) = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest("[data-action]").ok().flatten())
        else {
            return;
        };
        let action = target.get_attribute("data-action").unwrap_or_default();
        let data = |name: &str| target.get_attribute(name).unwrap_or_default();
        let mut gallery_changed = false;

        match action.as_str() {
            "navigate" => {
                let route = router::resolve_hash(&data("href"));
                // Same-route links fire no hashchange.
                if route == self.state().route {
                    event.prevent_default();
                    self.controller.navigate(route);
                }
            }
            "toggle-locale" => {
                self.controller.toggle_locale();
            }
            "toggle-menu" => {
                self.controller.toggle_menu();
            }
            "set-theme" => {
                if let Some(theme) = Theme::parse(&data("data-theme")) {
                    self.controller.set_theme(theme);
                }
            }
            "gallery-filter" => {
                if let Some(filter) = Filter::from_key(&data("data-filter")) {
                    self.gallery.set_filter(filter);
                    gallery_changed = true;
                }
            }
            "gallery-select" => {
                if let Ok(id) = data("data-id").parse() {
                    gallery_changed = self.gallery.select(id);
                }
            }
            "gallery-close" => {
                self.gallery.close();
                gallery_changed = true;
            }
            "gallery-next" => gallery_changed = self.gallery.next(),
            "gallery-prev" => gallery_changed = self.gallery.prev(),
            "gallery-backdrop" => {
                self.gallery.handle_click(LightboxTarget::Backdrop);
                gallery_changed = true;
            }
            "gallery-card" => self.gallery.handle_click(LightboxTarget::Card),
            _ => {}
        }

        if gallery_changed {
            self.render_view(self.transition.current(), false);
        }
        self.flush();
    }

    fn on_key(&mut self, event: KeyboardEvent) {
        if self.transition.current().route != Route::Gallery {
            return;
        }
        if let Some(key) = GalleryKey::from_key(&event.key()) {
            if self.gallery.handle_key(key) {
                event.prevent_default();
                self.render_view(self.transition.current(), false);
            }
        }
    }

    fn on_submit(&mut self, event: Event) {
        let Some(form) = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlFormElement>().ok())
            .filter(|f| f.id() == "contact-form")
        else {
            return;
        };
        event.prevent_default();
        let Ok(data) = FormData::new_with_form(&form) else {
            return;
        };
        let field = |name: &str| data.get(name).as_string().unwrap_or_default();
        let contact = ContactForm::new(field("name"), field("email"), field("message"));
        let uri = contact.mailto_uri(&self.config.site.contact_email);
        let _ = self.window.location().set_href(&uri);
    }

    fn on_scroll(&mut self, _event: Event) {
        self.controller.on_scroll();
        self.flush();
    }

    fn on_resize(&mut self, _event: Event) {
        let env = environment(&self.window);
        if let Some(field) = self.starfield.as_mut() {
            field.resize(env);
        }
    }

    fn on_visibility(&mut self, _event: Event) {
        let hidden = self.document.visibility_state() == VisibilityState::Hidden;
        if let Some(field) = self.starfield.as_mut() {
            field.set_hidden(hidden);
        }
    }
}

// ============================================================================
// Boot
// ============================================================================

fn boot() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let root = document
        .get_element_by_id("root")
        .ok_or_else(|| JsValue::from_str("missing #root"))?;
    let config = read_config(&document);

    if let Some(html) = document.document_element() {
        html.set_attribute("dir", Locale::Ar.dir().as_str())?;
        html.set_attribute("lang", Locale::Ar.as_str())?;
    }

    let hash = window.location().hash().unwrap_or_default();
    let initial_route = if hash.is_empty() {
        let slug = root.get_attribute("data-route").unwrap_or_default();
        router::resolve(&format!("/{slug}"))
    } else {
        router::resolve_hash(&hash)
    };

    let mut controller = AppController::new(
        WindowViewport {
            window: window.clone(),
        },
        initial_route,
    );
    let shipped_locale = root.get_attribute("lang").and_then(|lang| Locale::parse(&lang));
    if shipped_locale == Some(Locale::En) {
        controller.toggle_locale();
    }
    let changed = Rc::new(Cell::new(false));
    controller.store_mut().subscribe({
        let changed = Rc::clone(&changed);
        move |_| changed.set(true)
    });
    controller.mount();

    let now = window.performance().map(|p| p.now()).unwrap_or(0.0);
    let state = *controller.state();
    let starfield = Starfield::mount(
        CanvasSurface::acquire(&document),
        StdRng::from_entropy(),
        environment(&window),
    );
    let mut meta = MetadataManager::new(
        Some(DomHead {
            document: document.clone(),
        }),
        MetaDefaults::from(&config.meta),
    );
    meta.adopt();

    let app = Rc::new(RefCell::new(App {
        window: window.clone(),
        document: document.clone(),
        root: root.clone(),
        config,
        controller,
        meta,
        transition: TransitionShell::new(state.view_key(), now),
        starfield,
        gallery: Gallery::default(),
        changed: Rc::clone(&changed),
        // Force the first flush to paint everything.
        rendered: PresentationState {
            locale: state.locale.toggled(),
            ..state
        },
        mounted_at_ms: now,
        animating: true,
    }));
    {
        let mut app = app.borrow_mut();
        app.changed.set(true);
        app.flush();
    }

    let window_target: &EventTarget = window.as_ref();
    let document_target: &EventTarget = document.as_ref();
    let root_target: &EventTarget = root.as_ref();
    listen(window_target, "hashchange", &app, App::on_hash_change)?;
    listen(window_target, "scroll", &app, App::on_scroll)?;
    listen(window_target, "resize", &app, App::on_resize)?;
    listen(window_target, "keydown", &app, App::on_key)?;
    listen(document_target, "visibilitychange", &app, App::on_visibility)?;
    listen(root_target, "click", &app, App::on_click)?;
    listen(root_target, "submit", &app, App::on_submit)?;

    animation_loop(window, app)
}

fn read_config(document: &Document) -> SiteConfig {
    let json = document
        .get_element_by_id("site-config")
        .and_then(|el| el.text_content());
    match json.map(|json| serde_json::from_str(&json)) {
        Some(Ok(config)) => config,
        Some(Err(err)) => {
            web_sys::console::warn_1(&JsValue::from_str(&format!("site config: {err}")));
            SiteConfig::default()
        }
        None => SiteConfig::default(),
    }
}

/// Register `handler` for `kind` events on `target` for the page lifetime.
fn listen<E: JsCast + 'static>(
    target: &EventTarget,
    kind: &str,
    app: &Rc<RefCell<App>>,
    handler: fn(&mut App, E),
) -> Result<(), JsValue> {
    let app = Rc::clone(app);
    let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let (Ok(event), Ok(mut app)) = (event.dyn_into::<E>(), app.try_borrow_mut()) {
            handler(&mut app, event);
        }
    });
    target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn animation_loop(window: Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let next = Rc::clone(&callback);
    let frame_window = window.clone();
    *callback.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |now: f64| {
        if let Ok(mut app) = app.try_borrow_mut() {
            app.frame(now);
        }
        if let Some(cb) = next.borrow().as_ref() {
            let _ = frame_window.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }));
    let first = callback.borrow();
    let cb = first
        .as_ref()
        .ok_or_else(|| JsValue::from_str("animation callback missing"))?;
    window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    Ok(())
}
