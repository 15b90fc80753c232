//! Route-keyed page transitions.
//!
//! The routed region is wrapped in a surface whose animation key is
//! `(theme, route)`. [`TransitionShell`] is a three-state machine
//! (`Idle`, `Exiting`, `Entering`) holding a single pending key, driven by
//! explicit timestamps:
//!
//! ```text
//!            request(k ≠ current)                 exit done
//!   Idle ───────────────────────▶ Exiting ───────────────────▶ Entering
//!    ▲                            │  ▲ request(k): pending = k    │
//!    │                            │  └────────────────────────────┤ request(k ≠ current)
//!    └────────────────────────────┴───────── enter done ──────────┘
//! ```
//!
//! While exiting, further requests only replace the pending key, so one exit
//! always completes before the next enter begins. A request that arrives
//! while entering starts the exit of the entering surface immediately.
//!
//! The host swaps the mounted page on [`TransitionEvent::Swapped`]; that is
//! the point where the outgoing page's metadata is torn down and the incoming
//! page's is installed.

use std::fmt::Debug;
use tracing::debug;

/// Visual state of the routed surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub opacity: f64,
    /// Block-axis offset in CSS pixels.
    pub translate_y: f64,
    pub blur_px: f64,
    pub scale: f64,
}

impl Motion {
    pub const REST: Motion = Motion {
        opacity: 1.0,
        translate_y: 0.0,
        blur_px: 0.0,
        scale: 1.0,
    };

    fn lerp(from: Motion, to: Motion, t: f64) -> Motion {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Motion {
            opacity: mix(from.opacity, to.opacity),
            translate_y: mix(from.translate_y, to.translate_y),
            blur_px: mix(from.blur_px, to.blur_px),
            scale: mix(from.scale, to.scale),
        }
    }

    /// Inline style declarations for the surface.
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {:.3}; transform: translateY({:.2}px) scale({:.4}); filter: blur({:.2}px);",
            self.opacity, self.translate_y, self.scale, self.blur_px
        )
    }
}

/// One leg of the transition contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSpec {
    pub from: Motion,
    pub to: Motion,
    pub duration_ms: f64,
    /// Cubic-bezier control points `(x1, y1, x2, y2)`.
    pub easing: (f64, f64, f64, f64),
}

pub const ENTER: TransitionSpec = TransitionSpec {
    from: Motion {
        opacity: 0.0,
        translate_y: 20.0,
        blur_px: 12.0,
        scale: 0.98,
    },
    to: Motion::REST,
    duration_ms: 600.0,
    easing: (0.25, 0.46, 0.45, 0.94),
};

pub const EXIT: TransitionSpec = TransitionSpec {
    from: Motion::REST,
    to: Motion {
        opacity: 0.0,
        translate_y: -20.0,
        blur_px: 12.0,
        scale: 0.98,
    },
    duration_ms: 400.0,
    easing: (0.55, 0.085, 0.68, 0.53),
};

impl TransitionSpec {
    /// Motion `elapsed_ms` into this leg, clamped at both ends.
    pub fn sample(&self, elapsed_ms: f64) -> Motion {
        let linear = (elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        let (x1, y1, x2, y2) = self.easing;
        match cubic_bezier(x1, y1, x2, y2, linear) {
            t if t <= 0.0 => self.from,
            t if t >= 1.0 => self.to,
            t => Motion::lerp(self.from, self.to, t),
        }
    }

    pub fn css_easing(&self) -> String {
        let (x1, y1, x2, y2) = self.easing;
        format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
    }
}

/// CSS `cubic-bezier()` timing function evaluated at `x` in `[0, 1]`.
pub fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    let bez = |a: f64, b: f64, t: f64| {
        let u = 1.0 - t;
        3.0 * u * u * t * a + 3.0 * u * t * t * b + t * t * t
    };
    let slope = |a: f64, b: f64, t: f64| {
        let u = 1.0 - t;
        3.0 * u * u * a + 6.0 * u * t * (b - a) + 3.0 * t * t * (1.0 - b)
    };

    // Newton first, bisection if the slope flattens out.
    let mut t = x;
    for _ in 0..8 {
        let err = bez(x1, x2, t) - x;
        if err.abs() < 1e-7 {
            return bez(y1, y2, t);
        }
        let d = slope(x1, x2, t);
        if d.abs() < 1e-6 {
            break;
        }
        t -= err / d;
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    t = x;
    for _ in 0..40 {
        let v = bez(x1, x2, t);
        if (v - x).abs() < 1e-7 {
            break;
        }
        if v < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    bez(y1, y2, t)
}

// ============================================================================
// State machine
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Idle,
    Exiting { started_ms: f64 },
    Entering { started_ms: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionEvent<K> {
    /// The mounted surface began its exit.
    ExitStarted { from: K },
    /// Exit finished: unmount `from`, mount `to`, entry begins.
    Swapped { from: K, to: K },
    /// Entry finished.
    Settled { key: K },
}

#[derive(Debug, Clone)]
pub struct TransitionShell<K> {
    current: K,
    pending: Option<K>,
    phase: Phase,
}

impl<K: Copy + PartialEq + Debug> TransitionShell<K> {
    /// Shell whose first surface is entering at `now_ms`.
    pub fn new(initial: K, now_ms: f64) -> Self {
        Self {
            current: initial,
            pending: None,
            phase: Phase::Entering { started_ms: now_ms },
        }
    }

    /// Shell with its first surface already at rest.
    pub fn settled(initial: K) -> Self {
        Self {
            current: initial,
            pending: None,
            phase: Phase::Idle,
        }
    }

    /// Key of the mounted surface.
    pub fn current(&self) -> K {
        self.current
    }

    pub fn pending(&self) -> Option<K> {
        self.pending
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// The key of the routed region changed (or was re-observed).
    pub fn request(&mut self, key: K, now_ms: f64) -> Option<TransitionEvent<K>> {
        match self.phase {
            Phase::Exiting { .. } => {
                self.pending = Some(key);
                None
            }
            Phase::Idle | Phase::Entering { .. } if key == self.current => None,
            Phase::Idle | Phase::Entering { .. } => {
                debug!(from = ?self.current, to = ?key, "page exit started");
                self.pending = Some(key);
                self.phase = Phase::Exiting { started_ms: now_ms };
                Some(TransitionEvent::ExitStarted { from: self.current })
            }
        }
    }

    /// Advance to `now_ms`. At most one event per call.
    pub fn tick(&mut self, now_ms: f64) -> Option<TransitionEvent<K>> {
        match self.phase {
            Phase::Exiting { started_ms } if now_ms - started_ms >= EXIT.duration_ms => {
                let from = self.current;
                let to = self.pending.take().unwrap_or(from);
                self.current = to;
                self.phase = Phase::Entering { started_ms: now_ms };
                debug!(?from, ?to, "page swapped");
                Some(TransitionEvent::Swapped { from, to })
            }
            Phase::Entering { started_ms } if now_ms - started_ms >= ENTER.duration_ms => {
                self.phase = Phase::Idle;
                Some(TransitionEvent::Settled { key: self.current })
            }
            _ => None,
        }
    }

    /// Where the surface should be drawn at `now_ms`.
    pub fn motion(&self, now_ms: f64) -> Motion {
        match self.phase {
            Phase::Idle => Motion::REST,
            Phase::Exiting { started_ms } => EXIT.sample(now_ms - started_ms),
            Phase::Entering { started_ms } => ENTER.sample(now_ms - started_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ViewKey;
    use crate::types::{Route, Theme};

    fn key(theme: Theme, route: Route) -> ViewKey {
        ViewKey { theme, route }
    }

    // =========================================================================
    // Easing and contract
    // =========================================================================

    #[test]
    fn bezier_endpoints() {
        let (x1, y1, x2, y2) = ENTER.easing;
        assert_eq!(cubic_bezier(x1, y1, x2, y2, 0.0), 0.0);
        assert_eq!(cubic_bezier(x1, y1, x2, y2, 1.0), 1.0);
    }

    #[test]
    fn bezier_linear_curve_is_identity() {
        for x in [0.1, 0.25, 0.5, 0.9] {
            let y = cubic_bezier(0.0, 0.0, 1.0, 1.0, x);
            assert!((y - x).abs() < 1e-4, "{x} -> {y}");
        }
    }

    #[test]
    fn enter_eases_out_exit_eases_in() {
        let (x1, y1, x2, y2) = ENTER.easing;
        assert!(cubic_bezier(x1, y1, x2, y2, 0.5) > 0.5);
        let (x1, y1, x2, y2) = EXIT.easing;
        assert!(cubic_bezier(x1, y1, x2, y2, 0.5) < 0.5);
    }

    #[test]
    fn contract_endpoints() {
        assert_eq!(ENTER.sample(0.0), ENTER.from);
        assert_eq!(ENTER.sample(600.0), Motion::REST);
        assert_eq!(EXIT.sample(0.0), Motion::REST);
        let end = EXIT.sample(1_000.0);
        assert_eq!(end.translate_y, -20.0);
        assert_eq!(end.blur_px, 12.0);
        assert_eq!(end.scale, 0.98);
        assert_eq!(end.opacity, 0.0);
    }

    #[test]
    fn css_easing_lists_control_points() {
        assert_eq!(ENTER.css_easing(), "cubic-bezier(0.25, 0.46, 0.45, 0.94)");
        assert_eq!(EXIT.css_easing(), "cubic-bezier(0.55, 0.085, 0.68, 0.53)");
    }

    #[test]
    fn motion_css() {
        assert_eq!(
            Motion::REST.to_css(),
            "opacity: 1.000; transform: translateY(0.00px) scale(1.0000); filter: blur(0.00px);"
        );
    }

    // =========================================================================
    // State machine
    // =========================================================================

    #[test]
    fn first_surface_enters_then_settles() {
        let home = key(Theme::Agency, Route::Home);
        let mut shell = TransitionShell::new(home, 0.0);
        assert_eq!(shell.tick(599.0), None);
        assert_eq!(shell.tick(600.0), Some(TransitionEvent::Settled { key: home }));
        assert!(shell.is_idle());
    }

    #[test]
    fn route_change_exits_then_enters() {
        let home = key(Theme::Agency, Route::Home);
        let about = key(Theme::Agency, Route::About);
        let mut shell = TransitionShell::settled(home);

        assert_eq!(
            shell.request(about, 1_000.0),
            Some(TransitionEvent::ExitStarted { from: home })
        );
        // Outgoing surface is still mounted during the exit
        assert_eq!(shell.current(), home);
        assert_eq!(shell.tick(1_399.0), None);
        assert_eq!(
            shell.tick(1_400.0),
            Some(TransitionEvent::Swapped { from: home, to: about })
        );
        assert_eq!(shell.current(), about);
        assert_eq!(shell.motion(1_400.0), ENTER.from);
        assert_eq!(
            shell.tick(2_000.0),
            Some(TransitionEvent::Settled { key: about })
        );
    }

    #[test]
    fn theme_change_rekeys_the_same_route() {
        let agency = key(Theme::Agency, Route::Services);
        let production = key(Theme::Production, Route::Services);
        let mut shell = TransitionShell::settled(agency);
        assert!(shell.request(production, 0.0).is_some());
        assert_eq!(
            shell.tick(400.0),
            Some(TransitionEvent::Swapped {
                from: agency,
                to: production
            })
        );
    }

    #[test]
    fn same_key_is_ignored() {
        let home = key(Theme::Agency, Route::Home);
        let mut shell = TransitionShell::settled(home);
        assert_eq!(shell.request(home, 5.0), None);
        assert!(shell.is_idle());
    }

    #[test]
    fn requests_during_exit_replace_pending_key() {
        let home = key(Theme::Agency, Route::Home);
        let about = key(Theme::Agency, Route::About);
        let team = key(Theme::Agency, Route::Team);
        let mut shell = TransitionShell::settled(home);

        shell.request(about, 0.0);
        assert_eq!(shell.request(team, 100.0), None);
        assert_eq!(shell.pending(), Some(team));

        // The exit started at 0 still completes on its own schedule
        assert_eq!(shell.tick(300.0), None);
        assert_eq!(
            shell.tick(400.0),
            Some(TransitionEvent::Swapped { from: home, to: team })
        );
        assert_eq!(shell.pending(), None);
    }

    #[test]
    fn returning_to_current_during_exit_reenters_it() {
        let home = key(Theme::Agency, Route::Home);
        let about = key(Theme::Agency, Route::About);
        let mut shell = TransitionShell::settled(home);

        shell.request(about, 0.0);
        shell.request(home, 50.0);
        assert_eq!(
            shell.tick(400.0),
            Some(TransitionEvent::Swapped { from: home, to: home })
        );
    }

    #[test]
    fn request_while_entering_starts_exit() {
        let home = key(Theme::Agency, Route::Home);
        let gallery = key(Theme::Agency, Route::Gallery);
        let mut shell = TransitionShell::new(home, 0.0);

        assert_eq!(
            shell.request(gallery, 200.0),
            Some(TransitionEvent::ExitStarted { from: home })
        );
        assert_eq!(shell.phase(), Phase::Exiting { started_ms: 200.0 });
        assert_eq!(
            shell.tick(600.0),
            Some(TransitionEvent::Swapped {
                from: home,
                to: gallery
            })
        );
    }

    #[test]
    fn one_event_per_tick_even_after_long_gap() {
        let home = key(Theme::Agency, Route::Home);
        let about = key(Theme::Agency, Route::About);
        let mut shell = TransitionShell::settled(home);
        shell.request(about, 0.0);

        assert!(matches!(
            shell.tick(10_000.0),
            Some(TransitionEvent::Swapped { .. })
        ));
        // Entry is timed from the swap, not from the request
        assert_eq!(shell.tick(10_599.0), None);
        assert!(matches!(
            shell.tick(10_600.0),
            Some(TransitionEvent::Settled { .. })
        ));
    }
}
