#![forbid(unsafe_code)]

//! Repeating attention ripple around the anchor.

use std::time::Duration;

use tagcluster_core::anim::{Animation, Cycle, Timeline};
use tagcluster_core::geometry::lerp;

use crate::config::Config;

/// One expansion pass.
pub const PERIOD: Duration = Duration::from_millis(1500);

/// A ring that expands from just outside the anchor's inner circle to
/// `ripple_max_radius` while fading out, repeating until stopped.
#[derive(Debug, Clone)]
pub struct Ripple {
    min_radius: f32,
    max_radius: f32,
    start_alpha: u8,
    anim: Option<Cycle<Timeline>>,
}

impl Ripple {
    pub fn new(cfg: &Config) -> Self {
        Self {
            min_radius: cfg.ripple_min_radius(),
            max_radius: cfg.ripple_max_radius,
            start_alpha: cfg.ripple_alpha,
            anim: None,
        }
    }

    /// Begin rippling from the start of a pass.
    pub fn start(&mut self) {
        self.anim = Some(Cycle::new(Timeline::new(PERIOD)));
    }

    /// Stop rippling. The ring rests at full extent, fully transparent.
    pub fn stop(&mut self) {
        self.anim = None;
    }

    pub fn is_active(&self) -> bool {
        self.anim.is_some()
    }

    /// Change the radius the ring starts each pass from. Takes effect
    /// immediately, mid-pass included.
    pub fn set_min_radius(&mut self, radius: f32) {
        self.min_radius = radius;
    }

    /// Change the radius the ring grows to. Takes effect immediately,
    /// mid-pass included.
    pub fn set_max_radius(&mut self, radius: f32) {
        self.max_radius = radius;
    }

    /// Change the opacity each pass starts from.
    pub fn set_start_alpha(&mut self, alpha: u8) {
        self.start_alpha = alpha;
    }

    /// Advance the ripple; a no-op while stopped.
    pub fn tick(&mut self, dt: Duration) {
        if let Some(anim) = self.anim.as_mut() {
            anim.tick(dt);
        }
    }

    /// Current ring radius.
    pub fn radius(&self) -> f32 {
        match &self.anim {
            Some(anim) => lerp(self.min_radius, self.max_radius, anim.value()),
            None => self.max_radius,
        }
    }

    /// Current ring opacity, fading linearly to zero over the pass.
    pub fn alpha(&self) -> u8 {
        match &self.anim {
            Some(anim) => (f32::from(self.start_alpha) * (1.0 - anim.value())) as u8,
            None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stopped_ripple_is_invisible() {
        let r = Ripple::new(&Config::default());
        assert!(!r.is_active());
        assert_eq!(r.alpha(), 0);
        assert_eq!(r.radius(), 20.0);
    }

    #[test]
    fn start_resets_to_min_radius_full_alpha() {
        let mut r = Ripple::new(&Config::default());
        r.start();
        assert!(r.is_active());
        assert_eq!(r.radius(), 6.0);
        assert_eq!(r.alpha(), 100);
    }

    #[test]
    fn expands_and_fades_over_the_pass() {
        let mut r = Ripple::new(&Config::default());
        r.start();
        r.tick(Duration::from_millis(750));
        assert!((r.radius() - 13.0).abs() < 0.05);
        assert_eq!(r.alpha(), 50);
    }

    #[test]
    fn wraps_at_period_boundary() {
        let mut r = Ripple::new(&Config::default());
        r.start();
        r.tick(Duration::from_millis(1500));
        // Back at the start of the next pass.
        assert!((r.radius() - 6.0).abs() < 0.05);
        assert_eq!(r.alpha(), 100);
    }

    #[test]
    fn setters_reach_a_running_pass() {
        let mut r = Ripple::new(&Config::default());
        r.start();
        r.tick(Duration::from_millis(750));
        r.set_max_radius(40.0);
        r.set_start_alpha(200);
        // lerp(6, 40, 0.5)
        assert!((r.radius() - 23.0).abs() < 0.05);
        assert_eq!(r.alpha(), 100);
    }

    #[test]
    fn tick_while_stopped_is_noop() {
        let mut r = Ripple::new(&Config::default());
        r.tick(Duration::from_millis(500));
        assert_eq!(r.alpha(), 0);
    }
}
