#![forbid(unsafe_code)]

//! Connector-path descriptors and arc-length truncation.
//!
//! A connector is a polyline from the anchor to the underside of a tag,
//! finished with a small terminal circle. Paths are measured by total
//! length and can be truncated from the anchor end, which is how the
//! line-reveal animation draws a path partially.

use tagcluster_core::geometry::Point;

/// A circular-arc descriptor.
///
/// Angles follow the y-down screen convention: 0° points along +x and a
/// positive sweep turns clockwise (downward first).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub center: Point,
    pub radius: f32,
    /// Start angle in degrees.
    pub start_deg: f32,
    /// Signed sweep in degrees.
    pub sweep_deg: f32,
}

impl Arc {
    /// Arc length.
    pub fn length(&self) -> f32 {
        self.radius * self.sweep_deg.to_radians().abs()
    }

    /// Point on the circle at `deg`.
    pub fn point_at(&self, deg: f32) -> Point {
        let rad = deg.to_radians();
        Point::new(
            self.center.x + self.radius * rad.cos(),
            self.center.y + self.radius * rad.sin(),
        )
    }

    /// Start point of the arc.
    pub fn start_point(&self) -> Point {
        self.point_at(self.start_deg)
    }

    /// End point of the arc.
    pub fn end_point(&self) -> Point {
        self.point_at(self.start_deg + self.sweep_deg)
    }
}

/// A connector path: straight segments followed by the terminal arc.
/// The path is open (never closed).
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    /// Straight segments, anchor end first.
    pub lines: Vec<(Point, Point)>,
    /// Terminal circle, absent once truncation cuts before it.
    pub arc: Option<Arc>,
}

impl Connector {
    /// Build a connector from its segments and terminal arc.
    pub fn new(lines: Vec<(Point, Point)>, arc: Arc) -> Self {
        Self {
            lines,
            arc: Some(arc),
        }
    }

    /// Total path length: segments plus arc.
    pub fn length(&self) -> f32 {
        let lines: f32 = self.lines.iter().map(|&(a, b)| a.distance(b)).sum();
        lines + self.arc.as_ref().map_or(0.0, Arc::length)
    }

    /// Whether nothing of the path remains.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.arc.is_none()
    }

    /// Truncate the path, measured from the anchor end, to
    /// `ratio * length()`. `ratio` is clamped to [0, 1].
    pub fn truncated(&self, ratio: f32) -> Connector {
        let ratio = ratio.clamp(0.0, 1.0);
        let mut budget = self.length() * ratio;
        let mut lines = Vec::with_capacity(self.lines.len());

        for &(a, b) in &self.lines {
            let len = a.distance(b);
            if budget >= len {
                lines.push((a, b));
                budget -= len;
            } else {
                if budget > 0.0 {
                    lines.push((a, a.lerp(b, budget / len)));
                }
                return Connector { lines, arc: None };
            }
        }

        let arc = self.arc.and_then(|arc| {
            let len = arc.length();
            if budget >= len {
                Some(arc)
            } else if budget > 0.0 {
                Some(Arc {
                    sweep_deg: arc.sweep_deg * (budget / len),
                    ..arc
                })
            } else {
                None
            }
        });
        Connector { lines, arc }
    }
}

#[cfg(test)]
mod tests {
    use super::{Arc, Connector};
    use tagcluster_core::geometry::Point;

    fn sample() -> Connector {
        // 30px bend + 40px run + terminal circle of radius 4.
        Connector::new(
            vec![
                (Point::new(0.0, 0.0), Point::new(30.0, 0.0)),
                (Point::new(30.0, 0.0), Point::new(70.0, 0.0)),
            ],
            Arc {
                center: Point::new(74.0, 0.0),
                radius: 4.0,
                start_deg: 180.0,
                sweep_deg: 359.0,
            },
        )
    }

    #[test]
    fn arc_length_and_endpoints() {
        let arc = Arc {
            center: Point::new(10.0, 0.0),
            radius: 4.0,
            start_deg: 180.0,
            sweep_deg: 359.0,
        };
        let expected = 4.0 * 359.0_f32.to_radians();
        assert!((arc.length() - expected).abs() < 1e-4);

        let start = arc.start_point();
        assert!((start.x - 6.0).abs() < 1e-4);
        assert!(start.y.abs() < 1e-4);

        // 359° of sweep ends just shy of where it started.
        let end = arc.end_point();
        assert!(start.distance(end) < 0.1);
    }

    #[test]
    fn length_sums_segments_and_arc() {
        let c = sample();
        let expected = 70.0 + 4.0 * 359.0_f32.to_radians();
        assert!((c.length() - expected).abs() < 1e-3);
    }

    #[test]
    fn truncated_full_keeps_everything() {
        let c = sample();
        let t = c.truncated(1.0);
        assert_eq!(t, c);
    }

    #[test]
    fn truncated_zero_is_empty() {
        let t = sample().truncated(0.0);
        assert!(t.is_empty());
    }

    #[test]
    fn truncated_mid_first_segment() {
        let c = sample();
        // 15px of path: halfway down the first 30px segment.
        let t = c.truncated(15.0 / c.length());
        assert_eq!(t.lines.len(), 1);
        assert!(t.arc.is_none());
        let (a, b) = t.lines[0];
        assert_eq!(a, Point::new(0.0, 0.0));
        assert!((b.x - 15.0).abs() < 1e-3);
    }

    #[test]
    fn truncated_mid_arc_scales_sweep() {
        let c = sample();
        let arc_len = 4.0 * 359.0_f32.to_radians();
        // All segments plus half the arc.
        let t = c.truncated((70.0 + arc_len / 2.0) / c.length());
        assert_eq!(t.lines.len(), 2);
        let arc = t.arc.expect("arc retained");
        assert!((arc.sweep_deg - 179.5).abs() < 0.5);
    }

    #[test]
    fn truncated_exactly_at_segment_end_drops_arc() {
        let c = sample();
        let t = c.truncated(70.0 / c.length());
        assert_eq!(t.lines.len(), 2);
        assert!(t.arc.is_none());
    }

    #[test]
    fn truncated_clamps_ratio() {
        let c = sample();
        assert_eq!(c.truncated(5.0), c);
        assert!(c.truncated(-1.0).is_empty());
    }
}
