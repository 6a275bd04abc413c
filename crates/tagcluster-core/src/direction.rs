#![forbid(unsafe_code)]

//! Direction symbols and the arrangement-mode table.
//!
//! A tag sits in one of ten satellite placements around the anchor;
//! [`Direction::Center`] is reserved for anchor-coincident elements such
//! as the ripple. For each supported tag count the table holds a fixed
//! rotation cycle of four [`DirectionMode`]s, assigned to tags in
//! insertion order.

/// A discrete placement relative to the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// On the anchor itself (ripple only, never laid out radially).
    Center,
    /// Above and to the right, connector leaving the anchor vertically.
    TopRight,
    /// Upper right, connector leaving the anchor diagonally.
    RightTopTilt,
    /// Directly right of the anchor.
    RightCenter,
    /// Below and to the right, connector leaving the anchor vertically.
    RightBottom,
    /// Lower right, connector leaving the anchor diagonally.
    RightBottomTilt,
    /// Above and to the left, connector leaving the anchor vertically.
    LeftTop,
    /// Upper left, connector leaving the anchor diagonally.
    LeftTopTilt,
    /// Directly left of the anchor.
    LeftCenter,
    /// Below and to the left, connector leaving the anchor vertically.
    LeftBottom,
    /// Lower left, connector leaving the anchor diagonally.
    LeftBottomTilt,
}

impl Direction {
    /// Every direction, `Center` included.
    pub const ALL: [Direction; 11] = [
        Direction::Center,
        Direction::TopRight,
        Direction::RightTopTilt,
        Direction::RightCenter,
        Direction::RightBottom,
        Direction::RightBottomTilt,
        Direction::LeftTop,
        Direction::LeftTopTilt,
        Direction::LeftCenter,
        Direction::LeftBottom,
        Direction::LeftBottomTilt,
    ];

    /// The ten radial placements.
    pub const SATELLITES: [Direction; 10] = [
        Direction::TopRight,
        Direction::RightTopTilt,
        Direction::RightCenter,
        Direction::RightBottom,
        Direction::RightBottomTilt,
        Direction::LeftTop,
        Direction::LeftTopTilt,
        Direction::LeftCenter,
        Direction::LeftBottom,
        Direction::LeftBottomTilt,
    ];

    /// Whether this is a radial placement (everything except `Center`).
    #[inline]
    pub const fn is_satellite(self) -> bool {
        !matches!(self, Direction::Center)
    }

    /// Whether the tag sits on the left side of the anchor.
    #[inline]
    pub const fn is_left(self) -> bool {
        matches!(
            self,
            Direction::LeftTop
                | Direction::LeftTopTilt
                | Direction::LeftCenter
                | Direction::LeftBottom
                | Direction::LeftBottomTilt
        )
    }

    /// Whether the connector bends at the tag's near bottom corner before
    /// running along its underside. The two `*Center` placements connect
    /// straight from the anchor.
    #[inline]
    pub const fn has_bend(self) -> bool {
        matches!(
            self,
            Direction::TopRight
                | Direction::RightTopTilt
                | Direction::RightBottom
                | Direction::RightBottomTilt
                | Direction::LeftTop
                | Direction::LeftTopTilt
                | Direction::LeftBottom
                | Direction::LeftBottomTilt
        )
    }
}

/// One complete, ordered assignment of directions to tag slots.
pub type DirectionMode = &'static [Direction];

/// Number of modes in every rotation cycle.
pub const MODE_COUNT: usize = 4;

use Direction::{
    LeftBottomTilt, LeftCenter, LeftTopTilt, RightBottomTilt, RightCenter, RightTopTilt,
};

const ONE_TAG: [DirectionMode; MODE_COUNT] = [
    &[RightCenter],
    &[LeftTopTilt],
    &[RightBottomTilt],
    &[LeftCenter],
];

const TWO_TAGS: [DirectionMode; MODE_COUNT] = [
    &[RightBottomTilt, RightCenter],
    &[LeftBottomTilt, RightCenter],
    &[RightTopTilt, LeftCenter],
    &[LeftTopTilt, LeftCenter],
];

const THREE_TAGS: [DirectionMode; MODE_COUNT] = [
    &[RightTopTilt, RightCenter, RightBottomTilt],
    &[LeftTopTilt, RightCenter, LeftBottomTilt],
    &[RightTopTilt, LeftCenter, RightBottomTilt],
    &[LeftTopTilt, LeftCenter, LeftBottomTilt],
];

/// Error for a direction-mode lookup outside the supported tag counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionError {
    /// The requested tag count has no mode table (must be 1..=3).
    InvalidTagCount(usize),
}

impl core::fmt::Display for DirectionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidTagCount(n) => {
                write!(f, "no direction modes for {} tags (supported: 1..=3)", n)
            }
        }
    }
}

impl std::error::Error for DirectionError {}

/// Look up the rotation cycle for a tag count.
///
/// Total for counts 1..=3; anything else is an [`DirectionError::InvalidTagCount`].
pub fn modes(tag_count: usize) -> Result<&'static [DirectionMode; MODE_COUNT], DirectionError> {
    match tag_count {
        1 => Ok(&ONE_TAG),
        2 => Ok(&TWO_TAGS),
        3 => Ok(&THREE_TAGS),
        n => Err(DirectionError::InvalidTagCount(n)),
    }
}
