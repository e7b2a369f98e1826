use geo::{Coordinate, Line};
use log::trace;

use super::*;
use crate::{num::abs, KernelSide, Side, SideStrategy};

/// Relates segments in the cartesian plane.
///
/// Side information comes from the `S` strategy; ratios and points are
/// computed in the numeric domain of the coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct CartesianIntersector<S = KernelSide> {
    side: S,
}

impl<S> CartesianIntersector<S> {
    pub fn new(side: S) -> Self {
        CartesianIntersector { side }
    }

    /// Get a reference to the side strategy.
    pub fn side_strategy(&self) -> &S {
        &self.side
    }
}

impl<T: ExactNum, S: SideStrategy<T>> SegmentIntersector<T> for CartesianIntersector<S> {
    fn relate(&self, a: &Line<T>, b: &Line<T>) -> SegmentRelation<T> {
        let well_formed = [a.start, a.end, b.start, b.end]
            .iter()
            .all(|c| c.x.is_well_formed() && c.y.is_well_formed());
        if !well_formed {
            return IntersectionPoints::error("segment with non-finite coordinates").into();
        }

        let a_is_point = a.start == a.end;
        let b_is_point = b.start == b.end;
        if a_is_point && b_is_point {
            return if a.start == b.start {
                IntersectionPoints::degenerate(a, true, SegmentRatio::zero())
            } else {
                IntersectionPoints::disjoint()
            }
            .into();
        }

        let sides = SideInfo::compute(&self.side, (a.start, a.end), (b.start, b.end));
        let disjoint = SegmentRelation {
            points: IntersectionPoints::disjoint(),
            sides,
            direction: None,
        };

        // Both end points of one segment on the same side of the
        // other: nothing to report.
        if sides.same(0) || sides.same(1) {
            return disjoint;
        }

        // A collapsed segment that passed the check above lies on the
        // line of the other one.
        if a_is_point || b_is_point {
            let (point, other) = if a_is_point { (a, b) } else { (b, a) };
            let along_other = project(other, point.start);
            if !along_other.is_well_formed() {
                return SegmentRelation {
                    points: IntersectionPoints::error("projection overflows coordinate domain"),
                    ..disjoint
                };
            }
            if !along_other.on_segment() {
                return disjoint;
            }
            return SegmentRelation {
                points: IntersectionPoints::degenerate(point, a_is_point, along_other),
                ..disjoint
            };
        }

        if sides.collinear() {
            return relate_collinear(a, b, sides);
        }

        relate_crossing(a, b, sides)
    }
}

/// Position of `point` along `segment`, measured on the dominant axis
/// of the segment. `point` is assumed to be on the line of `segment`.
fn project<T: ExactNum>(segment: &Line<T>, point: Coordinate<T>) -> SegmentRatio<T> {
    let delta = segment.delta();
    if abs(delta.x) >= abs(delta.y) {
        SegmentRatio::new(point.x - segment.start.x, delta.x)
    } else {
        SegmentRatio::new(point.y - segment.start.y, delta.y)
    }
}

fn relate_collinear<T: ExactNum>(a: &Line<T>, b: &Line<T>, sides: SideInfo) -> SegmentRelation<T> {
    let ra_from_wrt_b = project(b, a.start);
    let ra_to_wrt_b = project(b, a.end);
    let rb_from_wrt_a = project(a, b.start);
    let rb_to_wrt_a = project(a, b.end);
    let ratios = [ra_from_wrt_b, ra_to_wrt_b, rb_from_wrt_a, rb_to_wrt_a];
    if !ratios.iter().all(|r| r.is_well_formed()) {
        return SegmentRelation {
            points: IntersectionPoints::error("collinear projection overflows coordinate domain"),
            sides,
            direction: None,
        };
    }

    let zero = SegmentRatio::zero();
    let one = SegmentRatio::one();
    let before = ra_from_wrt_b < zero && ra_to_wrt_b < zero;
    let after = ra_from_wrt_b > one && ra_to_wrt_b > one;
    if before || after {
        return SegmentRelation {
            points: IntersectionPoints::disjoint(),
            sides,
            direction: None,
        };
    }

    let points = IntersectionPoints::segments_collinear(
        a,
        b,
        ra_from_wrt_b,
        ra_to_wrt_b,
        rb_from_wrt_a,
        rb_to_wrt_a,
    );
    trace!(
        "collinear {a:?} / {b:?}: {n} points",
        n = points.count()
    );
    let direction = if points.is_empty() {
        None
    } else if rb_from_wrt_a < rb_to_wrt_a {
        Some(Direction::Same)
    } else {
        Some(Direction::Opposite)
    };
    SegmentRelation {
        points,
        sides,
        direction,
    }
}

fn relate_crossing<T: ExactNum>(a: &Line<T>, b: &Line<T>, sides: SideInfo) -> SegmentRelation<T> {
    let da = a.delta();
    let db = b.delta();
    let denominator = da.x * db.y - da.y * db.x;
    if denominator == T::zero() {
        return SegmentRelation {
            points: IntersectionPoints::error("crossing sides on parallel segments"),
            sides,
            direction: None,
        };
    }

    let w = b.start - a.start;
    let num_a = w.x * db.y - w.y * db.x;
    let num_b = w.x * da.y - w.y * da.x;
    if ![denominator, num_a, num_b].iter().all(|v| v.is_well_formed()) {
        return SegmentRelation {
            points: IntersectionPoints::error("cross products overflow coordinate domain"),
            sides,
            direction: None,
        };
    }
    let ra = snap(SegmentRatio::new(num_a, denominator), sides, 0);
    let rb = snap(SegmentRatio::new(num_b, denominator), sides, 1);

    let info = IntersectionInfo {
        dx_a: da.x,
        dy_a: da.y,
        dx_b: db.x,
        dy_b: db.y,
        ra,
        rb,
    };
    SegmentRelation {
        points: IntersectionPoints::segments_crosses(&sides, &info, a, b),
        sides,
        direction: None,
    }
}

/// An end point lying on the other segment's line is the
/// intersection point itself; otherwise clamp rounding noise back
/// into the segment.
fn snap<T: ExactNum>(ratio: SegmentRatio<T>, sides: SideInfo, which: usize) -> SegmentRatio<T> {
    if sides.get(which, 0) == Side::On {
        SegmentRatio::zero()
    } else if sides.get(which, 1) == Side::On {
        SegmentRatio::one()
    } else {
        ratio.clamped()
    }
}
