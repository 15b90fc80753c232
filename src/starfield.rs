//! Twinkling starfield behind every page.
//!
//! Everything that depends on the environment enters through
//! [`Environment`] (viewport size, pixel ratio, reduced-motion preference)
//! and everything that draws goes through [`StarSurface`]. Time is passed in
//! as milliseconds, randomness as an [`Rng`], so a seeded run is fully
//! reproducible.
//!
//! | Input | Effect |
//! |-------|--------|
//! | width < 768 | 30 fps, one star per 3000 px² |
//! | width ≥ 768 | 60 fps, one star per 1000 px² |
//! | reduced motion | 20 fps, density rule unchanged |
//! | pixel ratio | backing store scaled by `min(dpr, 2)` |

use rand::Rng;
use std::f64::consts::TAU;
use tracing::debug;

/// Viewports narrower than this are treated as small.
pub const SMALL_VIEWPORT_WIDTH: f64 = 768.0;
pub const MAX_BACKING_SCALE: f64 = 2.0;
pub const LARGE_STAR_CHANCE: f64 = 0.005;
pub const TWINKLE_AMPLITUDE: f64 = 0.15;
pub const MIN_OPACITY: f64 = 0.05;
pub const MAX_OPACITY: f64 = 0.80;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    /// CSS pixels.
    pub width: f64,
    /// CSS pixels.
    pub height: f64,
    pub device_pixel_ratio: f64,
    pub reduced_motion: bool,
}

impl Environment {
    pub fn is_small(&self) -> bool {
        self.width < SMALL_VIEWPORT_WIDTH
    }

    pub fn target_fps(&self) -> f64 {
        if self.reduced_motion {
            20.0
        } else if self.is_small() {
            30.0
        } else {
            60.0
        }
    }

    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / self.target_fps()
    }

    pub fn density_divisor(&self) -> f64 {
        if self.is_small() { 3000.0 } else { 1000.0 }
    }

    pub fn star_count(&self) -> usize {
        let area = (self.width * self.height).max(0.0);
        (area / self.density_divisor()).floor() as usize
    }

    /// Backing-store scale. A missing or zero ratio counts as 1.
    pub fn backing_scale(&self) -> f64 {
        if self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio.min(MAX_BACKING_SCALE)
        } else {
            1.0
        }
    }

    /// Backing-store size in device pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        let scale = self.backing_scale();
        (
            (self.width * scale).max(0.0).round() as u32,
            (self.height * scale).max(0.0).round() as u32,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    /// Radius in CSS pixels.
    pub size: f64,
    pub base_opacity: f64,
    pub twinkle_speed: f64,
    pub phase_offset: f64,
}

impl Star {
    pub fn random<R: Rng>(rng: &mut R, width: f64, height: f64) -> Self {
        let large = rng.gen_bool(LARGE_STAR_CHANCE);
        let size = if large {
            rng.gen_range(1.0..2.5)
        } else {
            rng.gen_range(0.2..1.0)
        };
        Star {
            x: rng.r#gen::<f64>() * width,
            y: rng.r#gen::<f64>() * height,
            size,
            base_opacity: rng.gen_range(0.1..0.6),
            twinkle_speed: rng.gen_range(0.05..0.25),
            phase_offset: rng.gen_range(0.0..TAU),
        }
    }

    pub fn opacity_at(&self, seconds: f64) -> f64 {
        let wave = (seconds * self.twinkle_speed + self.phase_offset).sin();
        (self.base_opacity + wave * TWINKLE_AMPLITUDE).clamp(MIN_OPACITY, MAX_OPACITY)
    }
}

pub fn populate<R: Rng>(rng: &mut R, env: &Environment) -> Vec<Star> {
    (0..env.star_count())
        .map(|_| Star::random(rng, env.width, env.height))
        .collect()
}

// ============================================================================
// Frame pacing
// ============================================================================

/// Drops frames that arrive sooner than the target interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FramePacer {
    interval_ms: f64,
    last_ms: Option<f64>,
}

impl FramePacer {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_ms: None,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Whether a frame at `now_ms` should paint. Keeps the remainder so the
    /// cadence does not drift.
    pub fn should_render(&mut self, now_ms: f64) -> bool {
        match self.last_ms {
            None => {
                self.last_ms = Some(now_ms);
                true
            }
            Some(last) => {
                let elapsed = now_ms - last;
                if elapsed < self.interval_ms {
                    return false;
                }
                self.last_ms = Some(now_ms - elapsed % self.interval_ms);
                true
            }
        }
    }

    /// Forget the last painted frame; the next one paints.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

// ============================================================================
// Animator
// ============================================================================

/// A 2D drawing target. Coordinates are CSS pixels once the transform is set.
pub trait StarSurface {
    fn set_backing_size(&mut self, width: u32, height: u32);
    /// Replace (not multiply) the current transform with a uniform scale.
    fn set_scale(&mut self, scale: f64);
    fn clear(&mut self, width: f64, height: f64);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, opacity: f64);
}

pub struct Starfield<S: StarSurface, R: Rng> {
    surface: S,
    rng: R,
    env: Environment,
    stars: Vec<Star>,
    pacer: FramePacer,
    hidden: bool,
    running: bool,
}

impl<S: StarSurface, R: Rng> Starfield<S, R> {
    /// Returns `None` when no surface could be acquired.
    pub fn mount(surface: Option<S>, rng: R, env: Environment) -> Option<Self> {
        let Some(surface) = surface else {
            debug!("starfield skipped: no drawing surface");
            return None;
        };
        let mut field = Self {
            surface,
            rng,
            env,
            stars: Vec::new(),
            pacer: FramePacer::new(env.frame_interval_ms()),
            hidden: false,
            running: true,
        };
        field.configure();
        Some(field)
    }

    fn configure(&mut self) {
        let (w, h) = self.env.backing_size();
        self.surface.set_backing_size(w, h);
        self.surface.set_scale(self.env.backing_scale());
        self.stars = populate(&mut self.rng, &self.env);
        debug!(
            stars = self.stars.len(),
            fps = self.env.target_fps(),
            width = self.env.width,
            height = self.env.height,
            "starfield configured"
        );
    }

    /// Viewport changed: new rate, population and backing store.
    pub fn resize(&mut self, env: Environment) {
        self.env = env;
        self.pacer = FramePacer::new(env.frame_interval_ms());
        self.configure();
    }

    /// Document visibility changed. Painting is suspended while hidden and
    /// the pacing clock restarts when the document comes back.
    pub fn set_hidden(&mut self, hidden: bool) {
        if self.hidden && !hidden {
            self.pacer.reset();
        }
        self.hidden = hidden;
    }

    /// Animation-frame callback. Returns whether anything was painted.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        if !self.running || self.hidden || !self.pacer.should_render(now_ms) {
            return false;
        }
        let seconds = now_ms * 0.001;
        self.surface.clear(self.env.width, self.env.height);
        for star in &self.stars {
            self.surface
                .fill_circle(star.x, star.y, star.size, star.opacity_at(seconds));
        }
        true
    }

    /// Stop the loop and hand the surface back.
    pub fn unmount(mut self) -> S {
        self.running = false;
        self.surface
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
