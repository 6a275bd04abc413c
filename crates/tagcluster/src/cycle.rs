#![forbid(unsafe_code)]

//! Arrangement-mode cycling.
//!
//! Each completed hide phase advances the mode index, rotating the
//! cluster through the four direction assignments for its tag count.
//! The index persists across hide/show cycles (and host save/restore).

use tagcluster_core::direction::{self, DirectionError, DirectionMode, MODE_COUNT};

/// Rotation state over the direction-mode table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cycler {
    mode_index: usize,
}

impl Cycler {
    /// Start at mode 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active mode index, in [0, 4).
    pub fn mode_index(&self) -> usize {
        self.mode_index
    }

    /// Restore a persisted mode index (wrapped into range).
    pub fn set_mode_index(&mut self, index: usize) {
        self.mode_index = index % MODE_COUNT;
    }

    /// The assignment for the active mode, without advancing.
    pub fn current(&self, tag_count: usize) -> Result<DirectionMode, DirectionError> {
        Ok(direction::modes(tag_count)?[self.mode_index])
    }

    /// Advance to the next mode and return its assignment.
    ///
    /// The lookup happens first, so an invalid tag count leaves the
    /// index untouched.
    pub fn advance(&mut self, tag_count: usize) -> Result<DirectionMode, DirectionError> {
        let modes = direction::modes(tag_count)?;
        self.mode_index = (self.mode_index + 1) % MODE_COUNT;
        #[cfg(feature = "tracing")]
        tracing::trace!(mode_index = self.mode_index, tag_count, "arrangement advanced");
        Ok(modes[self.mode_index])
    }
}
