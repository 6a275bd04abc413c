#![forbid(unsafe_code)]

//! Tick-driven animation primitives.
//!
//! Animations are time-parameterized interpolations advanced by an
//! explicit [`Animation::tick`]; there is no clock thread. The host
//! scheduler decides when ticks happen, and each tick pushes fresh
//! scalar values into whatever the animation drives.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Easing functions
// ---------------------------------------------------------------------------

/// Easing function signature: maps `t` in [0, 1] to output in [0, 1].
pub type EasingFn = fn(f32) -> f32;

/// Identity easing (constant velocity).
#[inline]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Decelerating curve: fast start, slow end.
#[inline]
pub fn decelerate(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Slow start and end.
#[inline]
pub fn smooth(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

// ---------------------------------------------------------------------------
// Animation trait
// ---------------------------------------------------------------------------

/// A time-based animation producing values in [0.0, 1.0].
pub trait Animation {
    /// Advance the animation by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has reached its end.
    fn is_complete(&self) -> bool;

    /// Current output value, clamped to [0.0, 1.0].
    fn value(&self) -> f32;

    /// Reset the animation to its initial state.
    fn reset(&mut self);

    /// Time elapsed past completion. Staged sequences forward this into
    /// the next stage so a large tick does not stall at a boundary.
    /// Returns [`Duration::ZERO`] for animations that never complete.
    fn overshoot(&self) -> Duration {
        Duration::ZERO
    }
}

// ---------------------------------------------------------------------------
// Timeline
// ---------------------------------------------------------------------------

/// Progression from 0.0 to 1.0 over a duration, with configurable easing.
///
/// Elapsed time is tracked as [`Duration`] for precise accumulation and
/// accurate overshoot across many small ticks.
#[derive(Debug, Clone, Copy)]
pub struct Timeline {
    elapsed: Duration,
    duration: Duration,
    easing: EasingFn,
}

impl Timeline {
    /// Create a timeline with the given duration and linear easing.
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration: if duration.is_zero() {
                Duration::from_nanos(1)
            } else {
                duration
            },
            easing: linear,
        }
    }

    /// Set the easing function.
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Raw linear progress (before easing), in [0.0, 1.0].
    pub fn raw_progress(&self) -> f32 {
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (t as f32).clamp(0.0, 1.0)
    }
}

impl Animation for Timeline {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f32 {
        (self.easing)(self.raw_progress())
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    fn overshoot(&self) -> Duration {
        self.elapsed.saturating_sub(self.duration)
    }
}

// ---------------------------------------------------------------------------
// Keyframes
// ---------------------------------------------------------------------------

/// Piecewise-linear interpolation through evenly spaced waypoints.
///
/// Easing applies to the overall progress, not per segment, so a single
/// curve shapes the whole traversal. [`Animation::value`] returns the
/// eased progress; use [`Keyframes::sample`] for the interpolated value.
#[derive(Debug, Clone)]
pub struct Keyframes {
    timeline: Timeline,
    points: Vec<f32>,
}

impl Keyframes {
    /// Create a keyframe animation over `duration`.
    ///
    /// With fewer than two points the sample is constant (the sole point,
    /// or 0.0 when empty).
    pub fn new(points: Vec<f32>, duration: Duration) -> Self {
        Self {
            timeline: Timeline::new(duration),
            points,
        }
    }

    /// Set the easing function.
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.timeline = self.timeline.easing(easing);
        self
    }

    /// Current interpolated waypoint value.
    pub fn sample(&self) -> f32 {
        match self.points.len() {
            0 => 0.0,
            1 => self.points[0],
            n => {
                let scaled = self.timeline.value() * (n - 1) as f32;
                let i = (scaled.floor() as usize).min(n - 2);
                let frac = scaled - i as f32;
                crate::geometry::lerp(self.points[i], self.points[i + 1], frac)
            }
        }
    }
}

impl Animation for Keyframes {
    fn tick(&mut self, dt: Duration) {
        self.timeline.tick(dt);
    }

    fn is_complete(&self) -> bool {
        self.timeline.is_complete()
    }

    fn value(&self) -> f32 {
        self.timeline.value()
    }

    fn reset(&mut self) {
        self.timeline.reset();
    }

    fn overshoot(&self) -> Duration {
        self.timeline.overshoot()
    }
}

// ---------------------------------------------------------------------------
// Sequence
// ---------------------------------------------------------------------------

/// Play animation `A` to completion, then animation `B`.
///
/// Overshoot from `A` is forwarded into `B`, so a large tick crossing
/// the boundary does not stall there. `value()` follows whichever
/// animation is active.
#[derive(Debug, Clone, Copy)]
pub struct Sequence<A, B> {
    first: A,
    second: B,
    first_done: bool,
}

impl<A: Animation, B: Animation> Sequence<A, B> {
    /// Create a sequence that plays `first` then `second`.
    pub fn new(first: A, second: B) -> Self {
        Self {
            first,
            second,
            first_done: false,
        }
    }

    /// Access the first animation.
    pub fn first(&self) -> &A {
        &self.first
    }

    /// Access the second animation.
    pub fn second(&self) -> &B {
        &self.second
    }

    /// Whether playback has moved on to the second animation.
    pub fn is_first_done(&self) -> bool {
        self.first_done
    }
}

impl<A: Animation, B: Animation> Animation for Sequence<A, B> {
    fn tick(&mut self, dt: Duration) {
        if !self.first_done {
            self.first.tick(dt);
            if self.first.is_complete() {
                self.first_done = true;
                let os = self.first.overshoot();
                if !os.is_zero() {
                    self.second.tick(os);
                }
            }
        } else {
            self.second.tick(dt);
        }
    }

    fn is_complete(&self) -> bool {
        self.first_done && self.second.is_complete()
    }

    fn value(&self) -> f32 {
        if self.first_done {
            self.second.value()
        } else {
            self.first.value()
        }
    }

    fn reset(&mut self) {
        self.first.reset();
        self.second.reset();
        self.first_done = false;
    }

    fn overshoot(&self) -> Duration {
        if self.first_done {
            self.second.overshoot()
        } else {
            Duration::ZERO
        }
    }
}

// ---------------------------------------------------------------------------
// Parallel
// ---------------------------------------------------------------------------

/// Play animations `A` and `B` simultaneously.
///
/// `value()` returns the average of both values; callers that drive two
/// separate properties read the members individually. Completes when
/// both complete.
#[derive(Debug, Clone, Copy)]
pub struct Parallel<A, B> {
    a: A,
    b: B,
}

impl<A: Animation, B: Animation> Parallel<A, B> {
    /// Create a parallel animation that plays `a` and `b` together.
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }

    /// Access the first animation.
    pub fn first(&self) -> &A {
        &self.a
    }

    /// Access the second animation.
    pub fn second(&self) -> &B {
        &self.b
    }
}

impl<A: Animation, B: Animation> Animation for Parallel<A, B> {
    fn tick(&mut self, dt: Duration) {
        if !self.a.is_complete() {
            self.a.tick(dt);
        }
        if !self.b.is_complete() {
            self.b.tick(dt);
        }
    }

    fn is_complete(&self) -> bool {
        self.a.is_complete() && self.b.is_complete()
    }

    fn value(&self) -> f32 {
        (self.a.value() + self.b.value()) / 2.0
    }

    fn reset(&mut self) {
        self.a.reset();
        self.b.reset();
    }
}

// ---------------------------------------------------------------------------
// Cycle
// ---------------------------------------------------------------------------

/// Restarts its inner animation every time it completes. Never completes.
#[derive(Debug, Clone)]
pub struct Cycle<A> {
    inner: A,
}

impl<A: Animation> Cycle<A> {
    /// Wrap an animation so it repeats from the start indefinitely.
    pub fn new(inner: A) -> Self {
        Self { inner }
    }

    /// Access the inner animation.
    pub fn inner(&self) -> &A {
        &self.inner
    }
}

impl<A: Animation> Animation for Cycle<A> {
    fn tick(&mut self, dt: Duration) {
        self.inner.tick(dt);
        // Each pass consumes one full inner duration, so this terminates
        // even for ticks spanning many periods.
        while self.inner.is_complete() {
            let over = self.inner.overshoot();
            self.inner.reset();
            if over.is_zero() {
                break;
            }
            self.inner.tick(over);
        }
    }

    fn is_complete(&self) -> bool {
        false
    }

    fn value(&self) -> f32 {
        self.inner.value()
    }

    fn reset(&mut self) {
        self.inner.reset();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
