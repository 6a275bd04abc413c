#![forbid(unsafe_code)]

//! Events a cluster reports back to its host.

/// Outcome of pointer input or a tick, for the host to act on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClusterEvent {
    /// The anchor circle was tapped.
    AnchorClick,
    /// The tag at this insertion index was tapped.
    TagClick(usize),
    /// A long press landed on the anchor or a tag.
    LongPress,
    /// The anchor was dragged; fields are the new relative position.
    Dragged { percent_x: f32, percent_y: f32 },
    /// A hide completed and the cluster re-opened in the next
    /// arrangement mode.
    Rearranged { mode_index: usize },
}
