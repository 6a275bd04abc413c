#![forbid(unsafe_code)]

//! Placement of tags around the anchor.
//!
//! Converts the anchor point, each tag's direction, and each tag's
//! intrinsic size into concrete rectangles, the anchor's occupancy
//! margins, and connector-path descriptors.

use tagcluster_core::direction::Direction;
use tagcluster_core::geometry::{Point, Rect, Sides};

use crate::config::Config;
use crate::path::{Arc, Connector};

/// A satellite element of the cluster.
///
/// The intrinsic size is authoritative; `rect` is derived and refreshed
/// on every layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tag {
    pub width: f32,
    pub height: f32,
    pub direction: Direction,
    /// Bounding rectangle from the most recent layout pass.
    pub rect: Rect,
}

impl Tag {
    /// Create a tag with the given intrinsic size and direction.
    pub fn new(width: f32, height: f32, direction: Direction) -> Self {
        Self {
            width,
            height,
            direction,
            rect: Rect::default(),
        }
    }
}

/// Minimum clearance the anchor must keep from each viewport edge so
/// every tag stays fully visible, including connector reach.
///
/// All four margins start at the vertical connector distance, so the
/// result never drops below that floor even with zero tags. The bottom
/// margin is assigned rather than max-combined: below the anchor only
/// the connector run matters, since tags hang upward from their
/// baseline.
pub fn occupancy(tags: &[Tag], cfg: &Config) -> Sides {
    let mut m = Sides::all(cfg.vertical_distance);
    let reach = 2.0 * cfg.inner_radius;
    for tag in tags {
        let (w, h) = (tag.width, tag.height);
        match tag.direction {
            Direction::RightTopTilt => {
                m.right = m.right.max(cfg.tilt_distance + w + reach);
                m.top = m.top.max(h + cfg.tilt_distance);
            }
            Direction::TopRight => {
                m.right = m.right.max(w);
                m.top = m.top.max(h + cfg.vertical_distance);
            }
            Direction::RightCenter => {
                m.right = m.right.max(w + reach);
                m.top = m.top.max(cfg.vertical_distance.max(h));
            }
            Direction::RightBottom => {
                m.right = m.right.max(w + reach);
                m.bottom = cfg.vertical_distance;
            }
            Direction::RightBottomTilt => {
                m.right = m.right.max(cfg.tilt_distance + w + reach);
                m.bottom = cfg.tilt_distance;
            }
            Direction::LeftTop => {
                m.left = m.left.max(w + reach);
                m.top = m.top.max(h + cfg.vertical_distance);
            }
            Direction::LeftTopTilt => {
                m.left = m.left.max(w + cfg.tilt_distance + reach);
                m.top = m.top.max(h + cfg.tilt_distance);
            }
            Direction::LeftCenter => {
                m.left = m.left.max(w + reach);
                m.top = m.top.max(cfg.vertical_distance.max(h));
            }
            Direction::LeftBottom => {
                m.left = m.left.max(w + reach);
                m.bottom = cfg.vertical_distance;
            }
            Direction::LeftBottomTilt => {
                m.left = m.left.max(w + cfg.tilt_distance + reach);
                m.bottom = cfg.tilt_distance;
            }
            Direction::Center => {}
        }
    }
    m
}

/// Anchor position from its persisted percent coordinates.
///
/// Callers are responsible for percent values that already respect the
/// occupancy margins; the drag controller enforces that, not this.
pub fn anchor_point(bounds_w: f32, bounds_h: f32, percent_x: f32, percent_y: f32) -> Point {
    Point::new(bounds_w * percent_x, bounds_h * percent_y)
}

/// Bounding rectangle for a tag of the given size placed in `direction`
/// relative to `anchor`. Width and height are held fixed.
pub fn place(anchor: Point, direction: Direction, width: f32, height: f32, cfg: &Config) -> Rect {
    let tilt = cfg.tilt_distance;
    let vert = cfg.vertical_distance;
    let (left, top) = match direction {
        Direction::RightTopTilt => (anchor.x + tilt, anchor.y - tilt - height),
        Direction::TopRight => (anchor.x, anchor.y - vert - height),
        // Offset by the tilt distance so the tag aligns with the tilted
        // tags above and below it.
        Direction::RightCenter => (anchor.x + tilt, anchor.y - height),
        Direction::RightBottom => (anchor.x, anchor.y + vert - height),
        Direction::RightBottomTilt => (anchor.x + tilt, anchor.y + tilt - height),
        Direction::LeftTop => (anchor.x - width - tilt, anchor.y - vert - height),
        Direction::LeftTopTilt => (anchor.x - width - tilt, anchor.y - tilt - height),
        Direction::LeftCenter => (anchor.x - width - tilt, anchor.y - height),
        Direction::LeftBottom => (anchor.x - width - tilt, anchor.y + vert - height),
        Direction::LeftBottomTilt => (anchor.x - width - tilt, anchor.y + tilt - height),
        Direction::Center => (0.0, 0.0),
    };
    Rect::new(left, top, width, height)
}

/// Connector path from the anchor to a placed tag.
///
/// Bent directions run anchor → near bottom corner → far bottom corner;
/// the `*Center` directions skip the bend. The terminal circle sits just
/// past the far corner, swept 359° — a full 360° would collapse to
/// nothing under the modular arc convention.
///
/// Returns `None` for [`Direction::Center`].
pub fn connector(
    anchor: Point,
    rect: Rect,
    direction: Direction,
    inner_radius: f32,
) -> Option<Connector> {
    if !direction.is_satellite() {
        return None;
    }
    let bottom = rect.bottom();
    let mut lines = Vec::with_capacity(2);
    let arc = if direction.is_left() {
        let end = Point::new(rect.left(), bottom);
        if direction.has_bend() {
            let corner = Point::new(rect.right(), bottom);
            lines.push((anchor, corner));
            lines.push((corner, end));
        } else {
            lines.push((anchor, end));
        }
        Arc {
            center: Point::new(rect.left() - inner_radius, bottom),
            radius: inner_radius,
            start_deg: 0.0,
            sweep_deg: 359.0,
        }
    } else {
        let end = Point::new(rect.right(), bottom);
        if direction.has_bend() {
            let corner = Point::new(rect.left(), bottom);
            lines.push((anchor, corner));
            lines.push((corner, end));
        } else {
            lines.push((anchor, end));
        }
        Arc {
            center: Point::new(rect.right() + inner_radius, bottom),
            radius: inner_radius,
            start_deg: 180.0,
            sweep_deg: 359.0,
        }
    };
    Some(Connector::new(lines, arc))
}
