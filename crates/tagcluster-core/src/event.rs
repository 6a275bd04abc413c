#![forbid(unsafe_code)]

//! Pointer events delivered by the host's gesture recognizer.
//!
//! The widget does not decode raw touch input. The host is expected to
//! run its own single-pointer gesture recognition and forward the
//! decoded events here, in viewport coordinates.

/// A decoded single-pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Initial contact.
    Down { x: f32, y: f32 },
    /// A completed tap.
    SingleTap { x: f32, y: f32 },
    /// A long press.
    LongPress { x: f32, y: f32 },
    /// Drag movement: pointer displacement since the previous scroll
    /// event, in pixels.
    Scroll { delta_x: f32, delta_y: f32 },
}
