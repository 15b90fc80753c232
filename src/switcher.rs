//! Theme switcher pill: which side the indicator sits on and the attention
//! nudge it plays until the visitor first picks a theme.
//!
//! The switcher is always laid out left-to-right, production on the left and
//! agency on the right, regardless of the page direction.

use crate::types::Theme;

pub const NUDGE_AMPLITUDE_PX: f64 = 30.0;
pub const NUDGE_DELAY_MS: f64 = 2000.0;
pub const NUDGE_DURATION_MS: f64 = 1500.0;
pub const NUDGE_REST_MS: f64 = 2500.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// One half of the switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitcherOption {
    pub theme: Theme,
    /// Caption above the pill.
    pub label: &'static str,
    pub button: &'static str,
    pub aria_label: &'static str,
}

/// Left to right.
pub const OPTIONS: [SwitcherOption; 2] = [
    SwitcherOption {
        theme: Theme::Production,
        label: "Media",
        button: "PRODUCTION",
        aria_label: "Switch to Production theme",
    },
    SwitcherOption {
        theme: Theme::Agency,
        label: "Marketing",
        button: "AGENCY",
        aria_label: "Switch to Agency theme",
    },
];

pub fn side(theme: Theme) -> Side {
    match theme {
        Theme::Production => Side::Left,
        Theme::Agency => Side::Right,
    }
}

/// Horizontal nudge offset in pixels, `elapsed_ms` after the switcher
/// mounted.
///
/// Nothing for the first two seconds, then a 1.5s swing toward the other
/// half followed by 2.5s of rest, forever. The swing always points inward,
/// so agency nudges left and production right. Zero once `has_interacted`.
pub fn nudge_offset(theme: Theme, has_interacted: bool, elapsed_ms: f64) -> f64 {
    if has_interacted || elapsed_ms < NUDGE_DELAY_MS {
        return 0.0;
    }
    let phase = (elapsed_ms - NUDGE_DELAY_MS) % (NUDGE_DURATION_MS + NUDGE_REST_MS);
    if phase >= NUDGE_DURATION_MS {
        return 0.0;
    }
    let direction = match side(theme) {
        Side::Right => -1.0,
        Side::Left => 1.0,
    };
    direction * NUDGE_AMPLITUDE_PX * (std::f64::consts::PI * phase / NUDGE_DURATION_MS).sin()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Indicator {
    pub side: Side,
    pub offset_px: f64,
    pub color: &'static str,
}

impl Indicator {
    pub fn new(theme: Theme, has_interacted: bool, elapsed_ms: f64) -> Self {
        Self {
            side: side(theme),
            offset_px: nudge_offset(theme, has_interacted, elapsed_ms),
            color: theme.accent(),
        }
    }

    pub fn to_css(&self) -> String {
        let left = match self.side {
            Side::Left => "2px",
            Side::Right => "calc(50% + 1px)",
        };
        format!(
            "left: {left}; transform: translateX({:.2}px); background-color: {c}; box-shadow: 0 0 20px {c}66;",
            self.offset_px,
            c = self.color,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_sides_follow_theme() {
        assert_eq!(side(Theme::Production), Side::Left);
        assert_eq!(side(Theme::Agency), Side::Right);
        assert_eq!(OPTIONS[0].theme, Theme::Production);
        assert_eq!(OPTIONS[1].label, "Marketing");
    }

    #[test]
    fn no_nudge_before_delay() {
        assert_eq!(nudge_offset(Theme::Agency, false, 0.0), 0.0);
        assert_eq!(nudge_offset(Theme::Agency, false, 1999.0), 0.0);
    }

    #[test]
    fn nudge_peaks_mid_swing_and_points_inward() {
        let mid = NUDGE_DELAY_MS + NUDGE_DURATION_MS / 2.0;
        assert!((nudge_offset(Theme::Agency, false, mid) + 30.0).abs() < 1e-9);
        assert!((nudge_offset(Theme::Production, false, mid) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn nudge_rests_then_repeats_every_four_seconds() {
        let rest = NUDGE_DELAY_MS + NUDGE_DURATION_MS + 100.0;
        assert_eq!(nudge_offset(Theme::Agency, false, rest), 0.0);

        let first = nudge_offset(Theme::Agency, false, 2500.0);
        let second = nudge_offset(Theme::Agency, false, 6500.0);
        assert!(first < 0.0);
        assert!((first - second).abs() < 1e-9);
    }

    #[test]
    fn interaction_stops_the_nudge() {
        for t in [0.0, 2500.0, 2750.0, 10_000.0] {
            assert_eq!(nudge_offset(Theme::Production, true, t), 0.0);
        }
    }

    #[test]
    fn indicator_css_carries_accent_and_glow() {
        let css = Indicator::new(Theme::Production, true, 0.0).to_css();
        assert_eq!(
            css,
            "left: 2px; transform: translateX(0.00px); background-color: #b20600; box-shadow: 0 0 20px #b2060066;"
        );
        let css = Indicator::new(Theme::Agency, true, 0.0).to_css();
        assert!(css.starts_with("left: calc(50% + 1px);"));
    }
}
