//! Presentation state and the app controller.
//!
//! [`PresentationState`] is a plain `Copy` value; [`Store`] holds the current
//! value plus a subscriber list and notifies once per dispatch, so every
//! update produced by one event is observed together. [`AppController`] adds
//! the environment side: scroll tracking and scroll-to-top on route change,
//! both through the [`Viewport`] trait so the same logic runs in the browser
//! and in tests.
//!
//! ## Invariants
//!
//! | Field | Rule |
//! |-------|------|
//! | `theme` | accent is `theme.accent()` |
//! | `locale` | `dir` is `rtl` iff `ar` |
//! | `scrolled` | mirrors `scroll_y > 50` |
//! | `has_interacted` | latches on the first `SetTheme`, never reverts |
//! | header | visible iff `scrolled`, `menu_open` or `route != Home` |

use crate::types::{Direction, Locale, Route, Theme};
use tracing::debug;

/// Scroll offset beyond which the page counts as scrolled.
pub const SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresentationState {
    pub theme: Theme,
    pub locale: Locale,
    pub menu_open: bool,
    pub scrolled: bool,
    pub has_interacted: bool,
    pub route: Route,
}

/// Animation key of the routed region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewKey {
    pub theme: Theme,
    pub route: Route,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    SetTheme(Theme),
    ToggleLocale,
    SetMenuOpen(bool),
    ToggleMenu,
    /// Raw viewport offset; folded into `scrolled`.
    ScrollY(f64),
    Navigate(Route),
}

impl PresentationState {
    pub fn with_route(route: Route) -> Self {
        Self {
            route,
            ..Self::default()
        }
    }

    pub fn accent(&self) -> &'static str {
        self.theme.accent()
    }

    pub fn dir(&self) -> Direction {
        self.locale.dir()
    }

    pub fn nav_visible(&self) -> bool {
        self.scrolled || self.menu_open || !self.route.is_home()
    }

    pub fn view_key(&self) -> ViewKey {
        ViewKey {
            theme: self.theme,
            route: self.route,
        }
    }

    /// Pure reducer.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SetTheme(theme) => {
                self.theme = theme;
                self.has_interacted = true;
            }
            Action::ToggleLocale => self.locale = self.locale.toggled(),
            Action::SetMenuOpen(open) => self.menu_open = open,
            Action::ToggleMenu => self.menu_open = !self.menu_open,
            Action::ScrollY(y) => self.scrolled = y > SCROLL_THRESHOLD,
            Action::Navigate(route) => self.route = route,
        }
    }
}

// ============================================================================
// Store
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&PresentationState)>;

/// Value container with a subscriber list.
pub struct Store {
    state: PresentationState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl Store {
    pub fn new(state: PresentationState) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn state(&self) -> &PresentationState {
        &self.state
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&PresentationState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns false if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn dispatch(&mut self, action: Action) -> bool {
        self.dispatch_all([action])
    }

    /// Apply every action, then notify at most once.
    ///
    /// Returns whether the state changed.
    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = Action>) -> bool {
        let before = self.state;
        for action in actions {
            self.state.apply(action);
        }
        if self.state == before {
            return false;
        }
        debug!(?before, after = ?self.state, "presentation state changed");
        let snapshot = self.state;
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&snapshot);
        }
        true
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(PresentationState::default())
    }
}

// ============================================================================
// App controller
// ============================================================================

/// The scrollable viewport the controller observes and resets.
pub trait Viewport {
    fn scroll_y(&self) -> f64;
    fn scroll_to(&mut self, x: f64, y: f64);
}

/// Owns the presentation state and routes requests into it.
pub struct AppController<V: Viewport> {
    store: Store,
    viewport: V,
    mounted: bool,
}

impl<V: Viewport> AppController<V> {
    pub fn new(viewport: V, initial_route: Route) -> Self {
        Self {
            store: Store::new(PresentationState::with_route(initial_route)),
            viewport,
            mounted: false,
        }
    }

    /// Start following the scroll signal. Syncs `scrolled` immediately.
    pub fn mount(&mut self) {
        self.mounted = true;
        let y = self.viewport.scroll_y();
        self.store.dispatch(Action::ScrollY(y));
    }

    /// Stop following the scroll signal.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Scroll signal from the viewport. Ignored while unmounted.
    pub fn on_scroll(&mut self) -> bool {
        if !self.mounted {
            return false;
        }
        let y = self.viewport.scroll_y();
        self.store.dispatch(Action::ScrollY(y))
    }

    pub fn set_theme(&mut self, theme: Theme) -> bool {
        self.store.dispatch(Action::SetTheme(theme))
    }

    pub fn toggle_locale(&mut self) -> bool {
        self.store.dispatch(Action::ToggleLocale)
    }

    pub fn set_menu_open(&mut self, open: bool) -> bool {
        self.store.dispatch(Action::SetMenuOpen(open))
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.store.dispatch(Action::ToggleMenu)
    }

    /// Route change: the viewport is reset before any subscriber sees the
    /// new route. The menu is closed in the same notification.
    pub fn navigate(&mut self, route: Route) -> bool {
        if route != self.store.state().route {
            self.viewport.scroll_to(0.0, 0.0);
        }
        self.store
            .dispatch_all([Action::SetMenuOpen(false), Action::Navigate(route)])
    }

    pub fn state(&self) -> &PresentationState {
        self.store.state()
    }

    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, PartialEq)]
    enum Event {
        ScrolledTo(f64, f64),
        Rendered(Route),
    }

    struct FakeViewport {
        y: f64,
        log: Rc<RefCell<Vec<Event>>>,
    }

    impl Viewport for FakeViewport {
        fn scroll_y(&self) -> f64 {
            self.y
        }
        fn scroll_to(&mut self, x: f64, y: f64) {
            self.y = y;
            self.log.borrow_mut().push(Event::ScrolledTo(x, y));
        }
    }

    fn controller_at(route: Route, y: f64) -> (AppController<FakeViewport>, Rc<RefCell<Vec<Event>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let viewport = FakeViewport {
            y,
            log: log.clone(),
        };
        (AppController::new(viewport, route), log)
    }

    // =========================================================================
    // Reducer invariants
    // =========================================================================

    #[test]
    fn initial_state() {
        let state = PresentationState::default();
        assert_eq!(state.theme, Theme::Agency);
        assert_eq!(state.locale, Locale::Ar);
        assert_eq!(state.accent(), "#ebe125");
        assert_eq!(state.dir(), Direction::Rtl);
        assert!(!state.nav_visible());
    }

    #[test]
    fn nav_visibility_rule() {
        for scrolled in [false, true] {
            for menu_open in [false, true] {
                for route in [Route::Home, Route::About, Route::NotFound] {
                    let state = PresentationState {
                        scrolled,
                        menu_open,
                        route,
                        ..Default::default()
                    };
                    let expected = scrolled || menu_open || route != Route::Home;
                    assert_eq!(state.nav_visible(), expected, "{state:?}");
                }
            }
        }
    }

    #[test]
    fn set_theme_latches_interaction() {
        let mut state = PresentationState::default();
        state.apply(Action::SetTheme(Theme::Production));
        assert!(state.has_interacted);
        assert_eq!(state.accent(), "#b20600");

        state.apply(Action::SetTheme(Theme::Agency));
        state.apply(Action::ToggleLocale);
        state.apply(Action::Navigate(Route::Team));
        assert!(state.has_interacted);
    }

    #[test]
    fn selecting_current_theme_still_counts_as_interaction() {
        let mut state = PresentationState::default();
        state.apply(Action::SetTheme(Theme::Agency));
        assert!(state.has_interacted);
    }

    #[test]
    fn toggling_locale_twice_is_identity() {
        let original = PresentationState {
            theme: Theme::Production,
            scrolled: true,
            route: Route::Philosophy,
            ..Default::default()
        };
        let mut state = original;
        state.apply(Action::ToggleLocale);
        assert_eq!(state.dir(), Direction::Ltr);
        state.apply(Action::ToggleLocale);
        assert_eq!(state, original);
    }

    #[test]
    fn scroll_threshold_is_exclusive() {
        let mut state = PresentationState::default();
        state.apply(Action::ScrollY(50.0));
        assert!(!state.scrolled);
        state.apply(Action::ScrollY(50.5));
        assert!(state.scrolled);
        state.apply(Action::ScrollY(0.0));
        assert!(!state.scrolled);
    }

    // =========================================================================
    // Store notifications
    // =========================================================================

    #[test]
    fn batch_notifies_once() {
        let mut store = Store::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(move |s| sink.borrow_mut().push(*s));

        store.dispatch_all([Action::ToggleMenu, Action::Navigate(Route::Gallery)]);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].menu_open);
        assert_eq!(seen[0].route, Route::Gallery);
    }

    #[test]
    fn no_change_no_notification() {
        let mut store = Store::default();
        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        store.subscribe(move |_| *sink.borrow_mut() += 1);

        assert!(!store.dispatch(Action::ScrollY(10.0)));
        assert!(!store.dispatch(Action::SetMenuOpen(false)));
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let mut store = Store::default();
        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        let id = store.subscribe(move |_| *sink.borrow_mut() += 1);

        store.dispatch(Action::ToggleLocale);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.dispatch(Action::ToggleLocale);

        assert_eq!(*count.borrow(), 1);
    }

    // =========================================================================
    // Controller
    // =========================================================================

    #[test]
    fn navigation_scrolls_before_render() {
        let (mut app, log) = controller_at(Route::Home, 800.0);
        let sink = log.clone();
        app.store_mut()
            .subscribe(move |s| sink.borrow_mut().push(Event::Rendered(s.route)));

        assert!(app.navigate(Route::About));

        assert_eq!(
            *log.borrow(),
            vec![Event::ScrolledTo(0.0, 0.0), Event::Rendered(Route::About)]
        );
        assert_eq!(app.viewport().scroll_y(), 0.0);
    }

    #[test]
    fn navigating_to_current_route_does_not_scroll() {
        let (mut app, log) = controller_at(Route::Team, 300.0);
        assert!(!app.navigate(Route::Team));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn navigation_closes_menu() {
        let (mut app, _) = controller_at(Route::Home, 0.0);
        app.toggle_menu();
        assert!(app.state().menu_open);
        app.navigate(Route::Contact);
        assert!(!app.state().menu_open);
        assert_eq!(app.state().route, Route::Contact);
    }

    #[test]
    fn scroll_signal_only_followed_while_mounted() {
        let (mut app, _) = controller_at(Route::Home, 0.0);
        app.viewport_mut().y = 120.0;
        assert!(!app.on_scroll());
        assert!(!app.state().scrolled);

        app.mount();
        assert!(app.state().scrolled);

        app.viewport_mut().y = 10.0;
        assert!(app.on_scroll());
        assert!(!app.state().scrolled);

        app.unmount();
        app.viewport_mut().y = 500.0;
        assert!(!app.on_scroll());
        assert!(!app.state().scrolled);
    }

    #[test]
    fn locale_toggle_leaves_route_and_interaction() {
        let (mut app, log) = controller_at(Route::Philosophy, 0.0);
        app.toggle_locale();
        assert_eq!(app.state().locale, Locale::En);
        assert_eq!(app.state().dir(), Direction::Ltr);
        assert_eq!(app.state().route, Route::Philosophy);
        assert!(!app.state().has_interacted);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn theme_switch_changes_view_key() {
        let (mut app, _) = controller_at(Route::Services, 0.0);
        let before = app.state().view_key();
        app.set_theme(Theme::Production);
        let after = app.state().view_key();
        assert_ne!(before, after);
        assert_eq!(after.route, Route::Services);
        assert_eq!(app.state().accent(), "#b20600");
        assert!(app.state().has_interacted);
    }
}
