#![forbid(unsafe_code)]

//! Core primitives for the tag-cluster widget: float-space geometry, the
//! direction-mode table, pointer events, and tick-driven animation.

pub mod anim;
pub mod direction;
pub mod event;
pub mod geometry;
