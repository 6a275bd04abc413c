#![forbid(unsafe_code)]

//! Radial tag-cluster widget kernel.
//!
//! A central anchor point surrounded by up to three labeled satellite
//! tags connected by bent lines. The cluster rotates its spatial
//! arrangement each time it is hidden and re-shown, supports
//! drag-to-reposition with boundary clamping, and classifies taps and
//! long presses against the anchor and tags.
//!
//! Rasterization, gesture decoding, and attribute loading stay with the
//! host: the cluster consumes decoded pointer events and clock ticks,
//! and exposes rectangles, connector-path descriptors, and animation
//! scalars for the host to draw.

pub mod cluster;
pub mod config;
pub mod cycle;
pub mod drag;
pub mod events;
pub mod hit;
pub mod layout;
pub mod path;
pub mod ripple;
pub mod sequencer;

pub use cluster::{AnchorCircle, ClusterError, SavedState, TagCluster};
pub use config::Config;
pub use events::ClusterEvent;
pub use hit::HitTarget;
pub use layout::Tag;
pub use tagcluster_core::direction::Direction;
pub use tagcluster_core::event::PointerEvent;
