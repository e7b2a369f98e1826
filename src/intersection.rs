//! Segment/segment intersection.
//!
//! [`IntersectionPoints`] is the result of relating two segments: zero,
//! one or two points, each with its exact position along both
//! segments. The constructors mirror the cases an intersector may run
//! into (a proper crossing, a collinear overlap, a collapsed segment,
//! disjoint segments and ill-formed input). [`SegmentIntersector`] is
//! the strategy deciding which case applies; see
//! [`CartesianIntersector`] for the default one.
use geo::{Coordinate, Line};
use log::debug;
use smallvec::{smallvec, SmallVec};

use crate::{ExactNum, SegmentRatio, SideInfo};

mod cartesian;
pub use cartesian::CartesianIntersector;

/// An intersection point along with its position on both segments.
#[derive(Debug, Clone, Copy)]
pub struct IntersectionPoint<T: ExactNum> {
    pub point: Coordinate<T>,

    /// Position of `point` along the first and second segment.
    pub fractions: [SegmentRatio<T>; 2],
}

/// Precomputed data for a proper crossing.
///
/// `ra` and `rb` are the positions of the intersection along the
/// first and second segment; the deltas are the segment vectors
/// (`end - start`).
#[derive(Debug, Clone, Copy)]
pub struct IntersectionInfo<T: ExactNum> {
    pub dx_a: T,
    pub dy_a: T,
    pub dx_b: T,
    pub dy_b: T,
    pub ra: SegmentRatio<T>,
    pub rb: SegmentRatio<T>,
}

/// The points shared by two segments.
#[derive(Debug, Clone)]
pub struct IntersectionPoints<T: ExactNum> {
    points: SmallVec<[IntersectionPoint<T>; 2]>,
}

impl<T: ExactNum> IntersectionPoints<T> {
    /// Number of intersection points (at most two).
    #[inline]
    pub fn count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[IntersectionPoint<T>] {
        &self.points
    }

    /// Result for two segments crossing exactly once.
    ///
    /// The point is interpolated along the segment with the smaller
    /// ratio, which keeps the propagated rounding error smallest. If
    /// the interpolated coordinate does not fit the numeric domain the
    /// result is empty (see [`error`](Self::error)).
    pub fn segments_crosses(
        _sides: &SideInfo,
        info: &IntersectionInfo<T>,
        a: &Line<T>,
        b: &Line<T>,
    ) -> Self {
        let point = if info.ra < info.rb {
            assign(a, &info.ra, info.dx_a, info.dy_a)
        } else {
            assign(b, &info.rb, info.dx_b, info.dy_b)
        };
        match point {
            Some(point) => IntersectionPoints {
                points: smallvec![IntersectionPoint {
                    point,
                    fractions: [info.ra, info.rb],
                }],
            },
            None => Self::error("intersection point not representable in coordinate domain"),
        }
    }

    /// Result for two collinear segments.
    ///
    /// Takes the position of each end point of one segment along the
    /// other. Candidates are admitted in a fixed order (start of `a`,
    /// start of `b`, end of `a`, end of `b`) until two points are
    /// found. End points of `a` are admitted when they lie on the
    /// closed segment `b`; end points of `b` only when they lie
    /// strictly inside `a`, so a shared end point is reported once.
    ///
    /// Two points are always ordered along the direction of `a`.
    pub fn segments_collinear(
        a: &Line<T>,
        b: &Line<T>,
        ra_from_wrt_b: SegmentRatio<T>,
        ra_to_wrt_b: SegmentRatio<T>,
        rb_from_wrt_a: SegmentRatio<T>,
        rb_to_wrt_a: SegmentRatio<T>,
    ) -> Self {
        let zero = SegmentRatio::zero();
        let one = SegmentRatio::one();
        let candidates = [
            (ra_from_wrt_b.on_segment(), a.start, [zero, ra_from_wrt_b]),
            (rb_from_wrt_a.in_segment(), b.start, [rb_from_wrt_a, zero]),
            (ra_to_wrt_b.on_segment(), a.end, [one, ra_to_wrt_b]),
            (rb_to_wrt_a.in_segment(), b.end, [rb_to_wrt_a, one]),
        ];

        let mut points: SmallVec<[IntersectionPoint<T>; 2]> = SmallVec::new();
        for (admit, point, fractions) in candidates.iter().copied() {
            if admit && points.len() < 2 {
                points.push(IntersectionPoint { point, fractions });
            }
        }

        if points.len() == 2 && points[1].fractions[0] < points[0].fractions[0] {
            points.swap(0, 1);
        }
        IntersectionPoints { points }
    }

    /// Result when one segment collapsed to a point lying on the other.
    ///
    /// `along_other` is the position of the point along the segment
    /// that did not collapse.
    pub fn degenerate(segment: &Line<T>, is_first: bool, along_other: SegmentRatio<T>) -> Self {
        let zero = SegmentRatio::zero();
        let fractions = if is_first {
            [zero, along_other]
        } else {
            [along_other, zero]
        };
        IntersectionPoints {
            points: smallvec![IntersectionPoint {
                point: segment.start,
                fractions,
            }],
        }
    }

    /// Result for segments that do not intersect.
    #[inline]
    pub fn disjoint() -> Self {
        IntersectionPoints {
            points: SmallVec::new(),
        }
    }

    /// Result for input that can't be related. Behaves as
    /// [`disjoint`](Self::disjoint); the message is only logged.
    pub fn error(message: &str) -> Self {
        debug!("segment intersection skipped: {message}");
        Self::disjoint()
    }
}

/// Interpolate along `segment`, multiplying by the numerator before
/// dividing by the denominator.
fn assign<T: ExactNum>(
    segment: &Line<T>,
    ratio: &SegmentRatio<T>,
    dx: T,
    dy: T,
) -> Option<Coordinate<T>> {
    if ratio.is_zero() {
        return Some(segment.start);
    }
    if ratio.is_one() {
        return Some(segment.end);
    }
    let (numerator, denominator) = (ratio.numerator(), ratio.denominator());
    Some(Coordinate {
        x: T::ratio_offset(segment.start.x, numerator, dx, denominator)?,
        y: T::ratio_offset(segment.start.y, numerator, dy, denominator)?,
    })
}

/// Relative direction of two collinear segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Same,
    Opposite,
}

/// Everything an intersector learned about a pair of segments.
#[derive(Debug, Clone)]
pub struct SegmentRelation<T: ExactNum> {
    pub points: IntersectionPoints<T>,
    pub sides: SideInfo,

    /// Set only for collinear segments sharing at least one point.
    pub direction: Option<Direction>,
}

impl<T: ExactNum> From<IntersectionPoints<T>> for SegmentRelation<T> {
    fn from(points: IntersectionPoints<T>) -> Self {
        SegmentRelation {
            points,
            sides: SideInfo::default(),
            direction: None,
        }
    }
}

/// Strategy relating two segments.
///
/// Implementations must be pure: the result depends only on the two
/// segments, so independent geometry pairs may be processed on
/// separate threads.
pub trait SegmentIntersector<T: ExactNum> {
    fn relate(&self, a: &Line<T>, b: &Line<T>) -> SegmentRelation<T>;
}
