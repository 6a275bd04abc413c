#![forbid(unsafe_code)]

//! The cluster itself: tags, layout state, input routing, and the
//! hide/rearrange/show cycle.

use std::time::Duration;

use tagcluster_core::direction::DirectionError;
use tagcluster_core::event::PointerEvent;
use tagcluster_core::geometry::{Point, Rect, Sides};

use crate::config::Config;
use crate::cycle::Cycler;
use crate::drag;
use crate::events::ClusterEvent;
use crate::hit::{self, HitTarget};
use crate::layout::{self, Tag};
use crate::path::Connector;
use crate::ripple::Ripple;
use crate::sequencer::{HideProgram, Phase, Sequencer, SequencerEvent, ShowProgram};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from cluster mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterError {
    /// Adding another tag would exceed the configured maximum.
    CapacityExceeded { max: usize },
    /// The tag count has no arrangement cycle.
    Arrangement(DirectionError),
}

impl core::fmt::Display for ClusterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::CapacityExceeded { max } => {
                write!(f, "cluster is full ({} tags max)", max)
            }
            Self::Arrangement(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ClusterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Arrangement(err) => Some(err),
            Self::CapacityExceeded { .. } => None,
        }
    }
}

impl From<DirectionError> for ClusterError {
    fn from(err: DirectionError) -> Self {
        Self::Arrangement(err)
    }
}

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

/// The anchor's concentric circles, pulse offset applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorCircle {
    pub center: Point,
    pub radius: f32,
    pub inner_radius: f32,
}

/// State worth keeping across host teardown: where the anchor sits,
/// which arrangement is active, and whether the cluster was hidden.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SavedState {
    pub percent_x: f32,
    pub percent_y: f32,
    pub mode_index: usize,
    pub hidden: bool,
}

// ---------------------------------------------------------------------------
// TagCluster
// ---------------------------------------------------------------------------

/// An anchor point with up to `max_tags` satellite tags.
///
/// The cluster consumes decoded pointer events and clock ticks and
/// exposes geometry for the host to draw. Hiding it triggers a full
/// cycle on its own: once the hide animation completes the arrangement
/// advances, the tags re-lay out, and the show animation starts.
#[derive(Debug, Clone)]
pub struct TagCluster {
    cfg: Config,
    tags: Vec<Tag>,
    connectors: Vec<Option<Connector>>,
    percent_x: f32,
    percent_y: f32,
    center: Point,
    bounds_w: f32,
    bounds_h: f32,
    margins: Sides,
    anchor_rect: Rect,
    cycler: Cycler,
    sequencer: Sequencer,
    ripple: Ripple,
    hidden: bool,
}

impl TagCluster {
    /// Create an empty, visible cluster with both animation programs
    /// installed.
    pub fn new(cfg: Config) -> Self {
        let mut sequencer = Sequencer::new();
        sequencer.configure_show(ShowProgram::new());
        sequencer.configure_hide(HideProgram::new());
        Self {
            ripple: Ripple::new(&cfg),
            cfg,
            tags: Vec::new(),
            connectors: Vec::new(),
            percent_x: 0.5,
            percent_y: 0.5,
            center: Point::default(),
            bounds_w: 0.0,
            bounds_h: 0.0,
            margins: Sides::all(cfg.vertical_distance),
            anchor_rect: Rect::default(),
            cycler: Cycler::new(),
            sequencer,
            hidden: false,
        }
    }

    /// Start with the attention ripple running.
    #[must_use]
    pub fn with_ripple(mut self) -> Self {
        self.ripple.start();
        self
    }

    // -- tags ---------------------------------------------------------------

    /// Append a tag with the given intrinsic size. All tags are then
    /// reassigned directions from the active arrangement mode, since the
    /// mode table depends on the tag count.
    pub fn add_tag(&mut self, width: f32, height: f32) -> Result<(), ClusterError> {
        if self.tags.len() >= self.cfg.max_tags {
            return Err(ClusterError::CapacityExceeded {
                max: self.cfg.max_tags,
            });
        }
        self.tags
            .push(Tag::new(width, height, self.cycler.current(1)?[0]));
        self.apply_current_mode()?;
        self.layout();
        Ok(())
    }

    /// Append several tags at once. Fails before mutating if the batch
    /// would overflow.
    pub fn add_tags(&mut self, sizes: &[(f32, f32)]) -> Result<(), ClusterError> {
        if self.tags.len() + sizes.len() > self.cfg.max_tags {
            return Err(ClusterError::CapacityExceeded {
                max: self.cfg.max_tags,
            });
        }
        for &(w, h) in sizes {
            self.add_tag(w, h)?;
        }
        Ok(())
    }

    fn apply_current_mode(&mut self) -> Result<(), ClusterError> {
        if self.tags.is_empty() {
            return Ok(());
        }
        let mode = self.cycler.current(self.tags.len())?;
        for (tag, &dir) in self.tags.iter_mut().zip(mode) {
            tag.direction = dir;
        }
        Ok(())
    }

    // -- layout -------------------------------------------------------------

    /// Set the viewport size and re-lay out.
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.bounds_w = width;
        self.bounds_h = height;
        self.layout();
    }

    /// Move the anchor to a relative position and re-lay out. Values are
    /// not clamped here; dragging is what enforces the margins.
    pub fn set_position(&mut self, percent_x: f32, percent_y: f32) {
        self.percent_x = percent_x;
        self.percent_y = percent_y;
        self.layout();
    }

    /// Recompute margins, the anchor point, tag rectangles, and
    /// connector paths from current state.
    pub fn layout(&mut self) {
        self.margins = layout::occupancy(&self.tags, &self.cfg);
        self.center =
            layout::anchor_point(self.bounds_w, self.bounds_h, self.percent_x, self.percent_y);
        self.anchor_rect = Rect::centered_square(self.center, self.cfg.radius);
        for tag in &mut self.tags {
            tag.rect = layout::place(self.center, tag.direction, tag.width, tag.height, &self.cfg);
        }
        self.connectors = self
            .tags
            .iter()
            .map(|t| layout::connector(self.center, t.rect, t.direction, self.cfg.inner_radius))
            .collect();
    }

    // -- input --------------------------------------------------------------

    /// Classify a point against the anchor square and the tag rects.
    pub fn hit_test(&self, point: Point) -> HitTarget {
        let rects: Vec<Rect> = self.tags.iter().map(|t| t.rect).collect();
        hit::classify(point, self.anchor_rect, &rects)
    }

    /// Route a decoded pointer event.
    ///
    /// Scroll deltas are pointer displacement; a drag moves the anchor
    /// along with the pointer. Drags are dropped while an animation is
    /// running so the geometry stays stable mid-sequence.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<ClusterEvent> {
        match event {
            // Claiming the gesture on press is the host's call; it has
            // `hit_test` for that.
            PointerEvent::Down { .. } => None,
            PointerEvent::SingleTap { x, y } => match self.hit_test(Point::new(x, y)) {
                HitTarget::Anchor => Some(ClusterEvent::AnchorClick),
                HitTarget::Tag(i) => Some(ClusterEvent::TagClick(i)),
                HitTarget::Miss => None,
            },
            PointerEvent::LongPress { x, y } => match self.hit_test(Point::new(x, y)) {
                HitTarget::Miss => None,
                _ => Some(ClusterEvent::LongPress),
            },
            PointerEvent::Scroll { delta_x, delta_y } => {
                if self.sequencer.is_running() {
                    return None;
                }
                let out = drag::reanchor(
                    self.center,
                    -delta_x,
                    -delta_y,
                    self.bounds_w,
                    self.bounds_h,
                    &self.margins,
                );
                self.percent_x = out.percent_x;
                self.percent_y = out.percent_y;
                self.layout();
                Some(ClusterEvent::Dragged {
                    percent_x: out.percent_x,
                    percent_y: out.percent_y,
                })
            }
        }
    }

    // -- animation ----------------------------------------------------------

    /// Start the show sequence. Ignored (false) while one is running.
    pub fn show(&mut self) -> bool {
        self.sequencer.show()
    }

    /// Start the hide sequence. Once it completes, the arrangement
    /// advances and the cluster re-shows itself. Ignored (false) while a
    /// sequence is running.
    pub fn hide(&mut self) -> bool {
        self.sequencer.hide()
    }

    /// Advance animations by `dt`.
    pub fn tick(&mut self, dt: Duration) -> Option<ClusterEvent> {
        self.ripple.tick(dt);
        match self.sequencer.tick(dt)? {
            SequencerEvent::HideFinished => {
                self.hidden = true;
                if !self.tags.is_empty() && self.cycler.advance(self.tags.len()).is_ok() {
                    // Infallible after advance succeeded for this count.
                    let _ = self.apply_current_mode();
                }
                self.layout();
                self.sequencer.show();
                Some(ClusterEvent::Rearranged {
                    mode_index: self.cycler.mode_index(),
                })
            }
            SequencerEvent::ShowFinished => {
                self.hidden = false;
                None
            }
        }
    }

    /// Cancel a running sequence, snapping to its end state. A cancelled
    /// hide leaves the cluster hidden without rearranging.
    pub fn finish_animation(&mut self) {
        match self.sequencer.finish() {
            Some(Phase::Hiding) => self.hidden = true,
            Some(Phase::Showing) => self.hidden = false,
            None => {}
        }
    }

    /// Whether a show or hide sequence is mid-flight.
    pub fn is_animating(&self) -> bool {
        self.sequencer.is_running()
    }

    /// Whether the last completed sequence left the cluster hidden.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    // -- ripple -------------------------------------------------------------

    pub fn start_ripple(&mut self) {
        self.ripple.start();
    }

    pub fn stop_ripple(&mut self) {
        self.ripple.stop();
    }

    pub fn ripple(&self) -> &Ripple {
        &self.ripple
    }

    // -- drawing queries ----------------------------------------------------

    /// The anchor circles with the current pulse offset applied. Radii
    /// never go negative, whatever the offset.
    pub fn anchor_circle(&self) -> AnchorCircle {
        let offset = self.sequencer.driven().radius_offset;
        AnchorCircle {
            center: self.center,
            radius: (self.cfg.radius + offset).max(0.0),
            inner_radius: (self.cfg.inner_radius + offset).max(0.0),
        }
    }

    /// Fraction of each connector to draw, in [0, 1].
    pub fn line_reveal_ratio(&self) -> f32 {
        self.sequencer.driven().line_ratio
    }

    /// Tag opacity, in [0, 1].
    pub fn tag_alpha(&self) -> f32 {
        self.sequencer.driven().tag_alpha
    }

    /// The full connector path for tag `index`.
    pub fn connector(&self, index: usize) -> Option<&Connector> {
        self.connectors.get(index)?.as_ref()
    }

    /// The connector for tag `index`, truncated to the current reveal
    /// ratio.
    pub fn revealed_connector(&self, index: usize) -> Option<Connector> {
        Some(self.connector(index)?.truncated(self.line_reveal_ratio()))
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn margins(&self) -> Sides {
        self.margins
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn position(&self) -> (f32, f32) {
        (self.percent_x, self.percent_y)
    }

    pub fn mode_index(&self) -> usize {
        self.cycler.mode_index()
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    // -- live configuration -------------------------------------------------

    /// Change the anchor's outer radius and re-lay out. The ripple's
    /// starting radius is derived from the anchor radii and follows.
    pub fn set_radius(&mut self, radius: f32) {
        self.cfg.radius = radius;
        self.ripple.set_min_radius(self.cfg.ripple_min_radius());
        self.layout();
    }

    /// Change the anchor's inner radius and re-lay out. The ripple's
    /// starting radius follows, as with [`TagCluster::set_radius`].
    pub fn set_inner_radius(&mut self, inner_radius: f32) {
        self.cfg.inner_radius = inner_radius;
        self.ripple.set_min_radius(self.cfg.ripple_min_radius());
        self.layout();
    }

    /// Change the vertical connector distance and re-lay out.
    pub fn set_vertical_distance(&mut self, distance: f32) {
        self.cfg.vertical_distance = distance;
        self.layout();
    }

    /// Change the diagonal connector distance and re-lay out.
    pub fn set_tilt_distance(&mut self, distance: f32) {
        self.cfg.tilt_distance = distance;
        self.layout();
    }

    /// Change the connector stroke width.
    pub fn set_line_width(&mut self, width: f32) {
        self.cfg.line_width = width;
    }

    /// Change the radius the ripple grows to, reaching a running ripple
    /// as well.
    pub fn set_ripple_max_radius(&mut self, radius: f32) {
        self.cfg.ripple_max_radius = radius;
        self.ripple.set_max_radius(radius);
    }

    /// Change the ripple's starting opacity, reaching a running ripple
    /// as well.
    pub fn set_ripple_alpha(&mut self, alpha: u8) {
        self.cfg.ripple_alpha = alpha;
        self.ripple.set_start_alpha(alpha);
    }

    // -- persistence --------------------------------------------------------

    /// Snapshot the state a host should persist.
    pub fn saved_state(&self) -> SavedState {
        SavedState {
            percent_x: self.percent_x,
            percent_y: self.percent_y,
            mode_index: self.cycler.mode_index(),
            hidden: self.hidden,
        }
    }

    /// Restore a snapshot, reassigning directions and re-laying out. A
    /// hidden snapshot comes back with lines retracted and tags
    /// transparent, ready for [`TagCluster::show`].
    pub fn restore(&mut self, state: SavedState) {
        self.percent_x = state.percent_x;
        self.percent_y = state.percent_y;
        self.cycler.set_mode_index(state.mode_index);
        self.hidden = state.hidden;
        self.sequencer.set_driven(if state.hidden {
            crate::sequencer::Driven::hidden()
        } else {
            crate::sequencer::Driven::default()
        });
        let _ = self.apply_current_mode();
        self.layout();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
