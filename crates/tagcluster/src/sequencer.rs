#![forbid(unsafe_code)]

//! Show/hide animation programs.
//!
//! A cluster reveals itself in three stages (anchor pulse, line growth,
//! tag fade-in) and conceals itself in two (anchor pulse, simultaneous
//! line/tag retraction). The [`Sequencer`] runs one program at a time
//! and pushes stage values into a [`Driven`] snapshot each tick.

use std::time::Duration;

use tagcluster_core::anim::{Animation, Keyframes, Parallel, Sequence, Timeline, decelerate};

/// Anchor-pulse duration, shared by both programs.
pub const PULSE: Duration = Duration::from_millis(400);
/// Line-growth duration during show.
pub const GROW: Duration = Duration::from_millis(300);
/// Tag fade-in duration during show.
pub const FADE_IN: Duration = Duration::from_millis(200);
/// Retraction duration during hide.
pub const RETRACT: Duration = Duration::from_millis(400);
/// Peak radius excursion of the pulse, in pixels.
pub const PULSE_DELTA: f32 = 10.0;

// ---------------------------------------------------------------------------
// Driven values
// ---------------------------------------------------------------------------

/// The scalar values the animation programs write each tick.
///
/// The default is the fully shown state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Driven {
    /// Offset applied to both anchor radii during the pulse.
    pub radius_offset: f32,
    /// Fraction of each connector path to draw, in [0, 1].
    pub line_ratio: f32,
    /// Tag opacity, in [0, 1].
    pub tag_alpha: f32,
}

impl Default for Driven {
    fn default() -> Self {
        Self {
            radius_offset: 0.0,
            line_ratio: 1.0,
            tag_alpha: 1.0,
        }
    }
}

impl Driven {
    /// The fully hidden state: no lines, transparent tags.
    pub fn hidden() -> Self {
        Self {
            radius_offset: 0.0,
            line_ratio: 0.0,
            tag_alpha: 0.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Show program
// ---------------------------------------------------------------------------

fn pulse() -> Keyframes {
    Keyframes::new(vec![-PULSE_DELTA, PULSE_DELTA, 0.0], PULSE)
}

/// Pulse, then grow the connector lines, then fade the tags in.
///
/// Staging and overshoot carry-over come from [`Sequence`]; this type
/// only maps each stage's output onto the property it drives.
#[derive(Debug, Clone)]
pub struct ShowProgram {
    seq: Sequence<Keyframes, Sequence<Timeline, Timeline>>,
}

impl Default for ShowProgram {
    fn default() -> Self {
        Self::new()
    }
}

impl ShowProgram {
    pub fn new() -> Self {
        Self {
            seq: Sequence::new(
                pulse(),
                Sequence::new(
                    Timeline::new(GROW).easing(decelerate),
                    Timeline::new(FADE_IN).easing(decelerate),
                ),
            ),
        }
    }

    fn reset(&mut self) {
        self.seq.reset();
    }

    /// Advance by `dt` and write stage values into `driven`. Returns
    /// true once the final stage completes. A stage that has not started
    /// leaves its property at the previous value; once it starts, the
    /// property jumps to the stage's own start value.
    fn tick(&mut self, dt: Duration, driven: &mut Driven) -> bool {
        self.seq.tick(dt);
        if !self.seq.is_first_done() {
            driven.radius_offset = self.seq.first().sample();
            return false;
        }
        driven.radius_offset = 0.0;
        let rest = self.seq.second();
        if !rest.is_first_done() {
            driven.line_ratio = rest.first().value();
            return false;
        }
        driven.line_ratio = 1.0;
        driven.tag_alpha = rest.second().value();
        self.seq.is_complete()
    }
}

// ---------------------------------------------------------------------------
// Hide program
// ---------------------------------------------------------------------------

/// Pulse, then retract the lines and fade the tags out together.
///
/// The retraction pair runs as a [`Parallel`] so the two properties are
/// driven by separate timelines played simultaneously.
#[derive(Debug, Clone)]
pub struct HideProgram {
    seq: Sequence<Keyframes, Parallel<Timeline, Timeline>>,
}

impl Default for HideProgram {
    fn default() -> Self {
        Self::new()
    }
}

impl HideProgram {
    pub fn new() -> Self {
        Self {
            seq: Sequence::new(
                pulse(),
                Parallel::new(
                    Timeline::new(RETRACT).easing(decelerate),
                    Timeline::new(RETRACT).easing(decelerate),
                ),
            ),
        }
    }

    fn reset(&mut self) {
        self.seq.reset();
    }

    fn tick(&mut self, dt: Duration, driven: &mut Driven) -> bool {
        self.seq.tick(dt);
        if !self.seq.is_first_done() {
            driven.radius_offset = self.seq.first().sample();
            return false;
        }
        driven.radius_offset = 0.0;
        let both = self.seq.second();
        driven.line_ratio = 1.0 - both.first().value();
        driven.tag_alpha = 1.0 - both.second().value();
        self.seq.is_complete()
    }
}

// ---------------------------------------------------------------------------
// Sequencer
// ---------------------------------------------------------------------------

/// Which program is (or just was) running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Showing,
    Hiding,
}

/// Emitted by [`Sequencer::tick`] when a program completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerEvent {
    ShowFinished,
    HideFinished,
}

/// Runs at most one animation program at a time.
///
/// Programs are installed separately from construction; until both are
/// present the sequencer refuses to start, and it likewise refuses
/// while a program is mid-flight. That single guard covers both show
/// and hide requests.
#[derive(Debug, Clone, Default)]
pub struct Sequencer {
    show: Option<ShowProgram>,
    hide: Option<HideProgram>,
    active: Option<Phase>,
    driven: Driven,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the show program.
    pub fn configure_show(&mut self, program: ShowProgram) {
        self.show = Some(program);
    }

    /// Install the hide program.
    pub fn configure_hide(&mut self, program: HideProgram) {
        self.hide = Some(program);
    }

    /// True when a start request would be ignored: a program is missing
    /// or one is already running.
    pub fn blocked(&self) -> bool {
        self.show.is_none() || self.hide.is_none() || self.active.is_some()
    }

    /// Whether a program is mid-flight.
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// The active phase, if any.
    pub fn phase(&self) -> Option<Phase> {
        self.active
    }

    /// The current animation-driven values.
    pub fn driven(&self) -> Driven {
        self.driven
    }

    /// Overwrite the driven values (used when restoring saved state).
    pub fn set_driven(&mut self, driven: Driven) {
        self.driven = driven;
    }

    /// Start the show program. Returns false if blocked.
    pub fn show(&mut self) -> bool {
        if self.blocked() {
            return false;
        }
        if let Some(program) = self.show.as_mut() {
            program.reset();
            self.active = Some(Phase::Showing);
            #[cfg(feature = "tracing")]
            tracing::debug!("show sequence started");
            return true;
        }
        false
    }

    /// Start the hide program. Returns false if blocked.
    pub fn hide(&mut self) -> bool {
        if self.blocked() {
            return false;
        }
        if let Some(program) = self.hide.as_mut() {
            program.reset();
            self.active = Some(Phase::Hiding);
            #[cfg(feature = "tracing")]
            tracing::debug!("hide sequence started");
            return true;
        }
        false
    }

    /// Advance the active program by `dt`.
    pub fn tick(&mut self, dt: Duration) -> Option<SequencerEvent> {
        let phase = self.active?;
        let done = match phase {
            Phase::Showing => {
                let program = self.show.as_mut()?;
                program.tick(dt, &mut self.driven)
            }
            Phase::Hiding => {
                let program = self.hide.as_mut()?;
                program.tick(dt, &mut self.driven)
            }
        };
        if !done {
            return None;
        }
        self.active = None;
        #[cfg(feature = "tracing")]
        tracing::debug!(?phase, "sequence finished");
        Some(match phase {
            Phase::Showing => SequencerEvent::ShowFinished,
            Phase::Hiding => SequencerEvent::HideFinished,
        })
    }

    /// Cancel the active program, snapping the driven values to its end
    /// state. Returns the phase that was cancelled.
    pub fn finish(&mut self) -> Option<Phase> {
        let phase = self.active.take()?;
        self.driven = match phase {
            Phase::Showing => Driven::default(),
            Phase::Hiding => Driven::hidden(),
        };
        Some(phase)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const MS_100: Duration = Duration::from_millis(100);
    const MS_200: Duration = Duration::from_millis(200);
    const MS_400: Duration = Duration::from_millis(400);

    fn configured() -> Sequencer {
        let mut seq = Sequencer::new();
        seq.configure_show(ShowProgram::new());
        seq.configure_hide(HideProgram::new());
        seq
    }

    #[test]
    fn unconfigured_requests_are_ignored() {
        let mut seq = Sequencer::new();
        assert!(seq.blocked());
        assert!(!seq.show());
        assert!(!seq.hide());

        seq.configure_show(ShowProgram::new());
        // One program alone is not enough.
        assert!(!seq.show());
    }

    #[test]
    fn show_runs_pulse_grow_fade() {
        let mut seq = configured();
        assert!(seq.show());
        assert!(seq.blocked());

        // 100ms in: halfway up the -10..10 leg.
        assert_eq!(seq.tick(MS_100), None);
        assert!((seq.driven().radius_offset - 0.0).abs() < 0.05);
        assert_eq!(seq.driven().line_ratio, 1.0);

        // 200ms: the +10 peak.
        assert_eq!(seq.tick(MS_100), None);
        assert!((seq.driven().radius_offset - 10.0).abs() < 0.05);

        // Pulse ends; lines jump to zero and start growing.
        assert_eq!(seq.tick(MS_200), None);
        assert_eq!(seq.driven().radius_offset, 0.0);
        assert_eq!(seq.driven().line_ratio, 0.0);

        assert_eq!(seq.tick(Duration::from_millis(150)), None);
        assert!(seq.driven().line_ratio > 0.0);
        assert!(seq.driven().line_ratio < 1.0);

        assert_eq!(seq.tick(Duration::from_millis(150)), None);
        assert_eq!(seq.driven().line_ratio, 1.0);
        assert_eq!(seq.driven().tag_alpha, 0.0);

        assert_eq!(seq.tick(MS_200), Some(SequencerEvent::ShowFinished));
        assert_eq!(seq.driven(), Driven::default());
        assert!(!seq.is_running());
    }

    #[test]
    fn show_total_duration_is_900ms() {
        let mut seq = configured();
        assert!(seq.show());
        assert_eq!(seq.tick(Duration::from_millis(899)), None);
        assert_eq!(
            seq.tick(Duration::from_millis(1)),
            Some(SequencerEvent::ShowFinished)
        );
    }

    #[test]
    fn one_oversized_tick_crosses_all_stages() {
        let mut seq = configured();
        assert!(seq.show());
        assert_eq!(seq.tick(Duration::from_secs(5)), Some(SequencerEvent::ShowFinished));
        assert_eq!(seq.driven(), Driven::default());
    }

    #[test]
    fn overshoot_carries_into_next_stage() {
        let mut seq = configured();
        assert!(seq.show());
        // 550ms: pulse (400) plus 150ms of the grow stage.
        seq.tick(Duration::from_millis(550));
        let ratio = seq.driven().line_ratio;
        assert!(ratio > 0.0 && ratio < 1.0);
    }

    #[test]
    fn hide_retracts_lines_and_tags_together() {
        let mut seq = configured();
        assert!(seq.hide());

        assert_eq!(seq.tick(MS_400), None);
        assert_eq!(seq.driven().radius_offset, 0.0);

        assert_eq!(seq.tick(MS_200), None);
        let d = seq.driven();
        assert!(d.line_ratio < 1.0 && d.line_ratio > 0.0);
        assert!((d.line_ratio - d.tag_alpha).abs() < f32::EPSILON);

        assert_eq!(seq.tick(MS_200), Some(SequencerEvent::HideFinished));
        assert_eq!(seq.driven(), Driven::hidden());
    }

    #[test]
    fn requests_while_running_are_ignored() {
        let mut seq = configured();
        assert!(seq.show());
        assert!(!seq.show());
        assert!(!seq.hide());

        seq.tick(MS_100);
        assert!(!seq.hide());
    }

    #[test]
    fn finish_snaps_to_end_state() {
        let mut seq = configured();
        assert!(seq.hide());
        seq.tick(MS_100);
        assert_eq!(seq.finish(), Some(Phase::Hiding));
        assert_eq!(seq.driven(), Driven::hidden());
        assert!(!seq.is_running());

        assert!(seq.show());
        seq.tick(MS_100);
        assert_eq!(seq.finish(), Some(Phase::Showing));
        assert_eq!(seq.driven(), Driven::default());
    }

    #[test]
    fn finish_without_active_program_is_none() {
        let mut seq = configured();
        assert_eq!(seq.finish(), None);
    }

    #[test]
    fn tick_without_active_program_is_none() {
        let mut seq = configured();
        assert_eq!(seq.tick(MS_100), None);
        assert_eq!(seq.driven(), Driven::default());
    }
}
