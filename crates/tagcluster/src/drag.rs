#![forbid(unsafe_code)]

//! Drag-to-reposition with boundary clamping.

use tagcluster_core::geometry::{Point, Sides};

/// Result of applying a drag step to the anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragOutcome {
    /// Clamped anchor position in pixels.
    pub center: Point,
    /// `center.x / bounds_w`.
    pub percent_x: f32,
    /// `center.y / bounds_h`.
    pub percent_y: f32,
}

/// Move the anchor by a drag step and clamp it inside the occupancy
/// margins.
///
/// `distance` follows the gesture-recognizer convention of previous
/// minus current position, so the anchor moves opposite to it. The
/// max-then-min order keeps the result defined even when opposing
/// margins overlap in a small viewport.
pub fn reanchor(
    center: Point,
    distance_x: f32,
    distance_y: f32,
    bounds_w: f32,
    bounds_h: f32,
    margins: &Sides,
) -> DragOutcome {
    let x = (center.x - distance_x)
        .max(margins.left)
        .min(bounds_w - margins.right);
    let y = (center.y - distance_y)
        .max(margins.top)
        .min(bounds_h - margins.bottom);
    DragOutcome {
        center: Point::new(x, y),
        percent_x: x / bounds_w,
        percent_y: y / bounds_h,
    }
}
