#![forbid(unsafe_code)]

//! Widget configuration.

/// Geometry and rendering constants for a tag cluster.
///
/// All distances are in pixels. Defaults match the classic widget
/// proportions; hosts that work in density-independent units should
/// scale before constructing the config.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Outer radius of the anchor circle.
    pub radius: f32,
    /// Inner radius of the anchor circle; also the radius of each
    /// connector's terminal circle.
    pub inner_radius: f32,
    /// Length of the vertical connector run above/below the anchor.
    pub vertical_distance: f32,
    /// Horizontal reach of the diagonal connector run.
    pub tilt_distance: f32,
    /// Stroke width of connector lines.
    pub line_width: f32,
    /// Maximum number of tags.
    pub max_tags: usize,
    /// Largest radius the ripple grows to.
    pub ripple_max_radius: f32,
    /// Starting opacity of the ripple, 0..=255.
    pub ripple_alpha: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            radius: 8.0,
            inner_radius: 4.0,
            vertical_distance: 28.0,
            tilt_distance: 30.0,
            line_width: 1.0,
            max_tags: 3,
            ripple_max_radius: 20.0,
            ripple_alpha: 100,
        }
    }
}

impl Config {
    /// Set the anchor's outer radius.
    #[must_use]
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Set the anchor's inner radius.
    #[must_use]
    pub fn with_inner_radius(mut self, inner_radius: f32) -> Self {
        self.inner_radius = inner_radius;
        self
    }

    /// Set the vertical connector distance.
    #[must_use]
    pub fn with_vertical_distance(mut self, distance: f32) -> Self {
        self.vertical_distance = distance;
        self
    }

    /// Set the diagonal connector distance.
    #[must_use]
    pub fn with_tilt_distance(mut self, distance: f32) -> Self {
        self.tilt_distance = distance;
        self
    }

    /// Set the connector stroke width.
    #[must_use]
    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }

    /// Set the ripple's maximum radius.
    #[must_use]
    pub fn with_ripple_max_radius(mut self, radius: f32) -> Self {
        self.ripple_max_radius = radius;
        self
    }

    /// Set the ripple's starting opacity.
    #[must_use]
    pub fn with_ripple_alpha(mut self, alpha: u8) -> Self {
        self.ripple_alpha = alpha;
        self
    }

    /// Radius the ripple starts from: halfway between the inner and
    /// outer anchor radii.
    pub fn ripple_min_radius(&self) -> f32 {
        self.inner_radius + (self.radius - self.inner_radius) / 2.0
    }
}
