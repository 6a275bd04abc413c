#![forbid(unsafe_code)]

//! Point classification against the anchor and tag rectangles.

use tagcluster_core::geometry::{Point, Rect};

/// What a touch point landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The anchor's bounding square.
    Anchor,
    /// The tag at this insertion index.
    Tag(usize),
    /// Neither.
    Miss,
}

/// Classify `point` against the anchor square and the tag rectangles.
///
/// The evaluation order is a tie-break contract: overlapping regions
/// favor the anchor, then the lowest tag index.
pub fn classify(point: Point, anchor_rect: Rect, tag_rects: &[Rect]) -> HitTarget {
    if anchor_rect.contains(point) {
        return HitTarget::Anchor;
    }
    for (i, rect) in tag_rects.iter().enumerate() {
        if rect.contains(point) {
            return HitTarget::Tag(i);
        }
    }
    HitTarget::Miss
}

#[cfg(test)]
mod tests {
    use super::{HitTarget, classify};
    use tagcluster_core::geometry::{Point, Rect};

    fn anchor() -> Rect {
        Rect::centered_square(Point::new(100.0, 100.0), 8.0)
    }

    #[test]
    fn anchor_hit() {
        let hit = classify(Point::new(100.0, 100.0), anchor(), &[]);
        assert_eq!(hit, HitTarget::Anchor);
    }

    #[test]
    fn anchor_square_extent() {
        assert_eq!(classify(Point::new(92.0, 92.0), anchor(), &[]), HitTarget::Anchor);
        assert_eq!(classify(Point::new(108.0, 100.0), anchor(), &[]), HitTarget::Miss);
    }

    #[test]
    fn tag_hit_by_insertion_index() {
        let tags = [
            Rect::new(200.0, 50.0, 40.0, 20.0),
            Rect::new(200.0, 150.0, 40.0, 20.0),
        ];
        assert_eq!(
            classify(Point::new(210.0, 160.0), anchor(), &tags),
            HitTarget::Tag(1)
        );
    }

    #[test]
    fn overlap_favors_anchor() {
        // A tag rect covering the anchor still loses the tie.
        let tags = [Rect::new(50.0, 50.0, 100.0, 100.0)];
        assert_eq!(
            classify(Point::new(100.0, 100.0), anchor(), &tags),
            HitTarget::Anchor
        );
        // But outside the square, the covering tag wins.
        assert_eq!(
            classify(Point::new(60.0, 60.0), anchor(), &tags),
            HitTarget::Tag(0)
        );
    }

    #[test]
    fn overlapping_tags_favor_lowest_index() {
        let tags = [
            Rect::new(200.0, 50.0, 40.0, 20.0),
            Rect::new(200.0, 50.0, 40.0, 20.0),
        ];
        assert_eq!(
            classify(Point::new(210.0, 60.0), anchor(), &tags),
            HitTarget::Tag(0)
        );
    }

    #[test]
    fn miss() {
        assert_eq!(classify(Point::new(0.0, 0.0), anchor(), &[]), HitTarget::Miss);
    }
}
