//! Suppliers of candidate segment pairs.
//!
//! The turn generator does not search for intersecting segments
//! itself. A [`CandidatePairs`] implementation decides which pairs of
//! segments are worth relating; it may report pairs that turn out to
//! be disjoint, but must not skip any pair that intersects.
use std::ops::ControlFlow;

use itertools::iproduct;
use rstar::{RTree, RTreeNum, RTreeObject, AABB};

use crate::{ExactNum, Segment};

pub trait CandidatePairs<T: ExactNum> {
    /// Call `f` on each candidate pair, stopping as soon as it
    /// breaks.
    ///
    /// Pairs are supplied in a deterministic order: grouped by the
    /// segment of `first`, in the order of `first`.
    fn for_each_pair<F>(&self, first: &[Segment<T>], second: &[Segment<T>], f: F) -> ControlFlow<()>
    where
        F: FnMut(&Segment<T>, &Segment<T>) -> ControlFlow<()>;
}

/// Bounding box of a segment as `(min, max)` corners.
fn envelope<T: ExactNum>(segment: &Segment<T>) -> ([T; 2], [T; 2]) {
    let (p, q) = (segment.line.start, segment.line.end);
    let (min_x, max_x) = if p.x <= q.x { (p.x, q.x) } else { (q.x, p.x) };
    let (min_y, max_y) = if p.y <= q.y { (p.y, q.y) } else { (q.y, p.y) };
    ([min_x, min_y], [max_x, max_y])
}

fn envelopes_touch<T: ExactNum>(a: &Segment<T>, b: &Segment<T>) -> bool {
    let (a_min, a_max) = envelope(a);
    let (b_min, b_max) = envelope(b);
    (0..2).all(|i| a_min[i] <= b_max[i] && b_min[i] <= a_max[i])
}

/// Checks every pair whose bounding boxes touch.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllPairs;

impl<T: ExactNum> CandidatePairs<T> for AllPairs {
    fn for_each_pair<F>(
        &self,
        first: &[Segment<T>],
        second: &[Segment<T>],
        mut f: F,
    ) -> ControlFlow<()>
    where
        F: FnMut(&Segment<T>, &Segment<T>) -> ControlFlow<()>,
    {
        for (a, b) in iproduct!(first.iter(), second.iter()) {
            if envelopes_touch(a, b) && f(a, b).is_break() {
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }
}

/// Index entry: position of a segment in the second operand.
struct Indexed<T: RTreeNum> {
    index: usize,
    envelope: AABB<[T; 2]>,
}

impl<T: RTreeNum> RTreeObject for Indexed<T> {
    type Envelope = AABB<[T; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope.clone()
    }
}

fn aabb<T: ExactNum + RTreeNum>(segment: &Segment<T>) -> AABB<[T; 2]> {
    let (min, max) = envelope(segment);
    AABB::from_corners(min, max)
}

/// Queries an R-tree built over the second operand.
///
/// Reports the same pairs, in the same order, as [`AllPairs`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RTreePairs;

impl<T: ExactNum + RTreeNum> CandidatePairs<T> for RTreePairs {
    fn for_each_pair<F>(
        &self,
        first: &[Segment<T>],
        second: &[Segment<T>],
        mut f: F,
    ) -> ControlFlow<()>
    where
        F: FnMut(&Segment<T>, &Segment<T>) -> ControlFlow<()>,
    {
        let tree = RTree::bulk_load(
            second
                .iter()
                .enumerate()
                .map(|(index, s)| Indexed {
                    index,
                    envelope: aabb(s),
                })
                .collect(),
        );

        let mut hits = vec![];
        for a in first {
            hits.clear();
            hits.extend(
                tree.locate_in_envelope_intersecting(&aabb(a))
                    .map(|entry| entry.index),
            );
            hits.sort_unstable();
            for &idx in hits.iter() {
                if f(a, &second[idx]).is_break() {
                    return ControlFlow::Break(());
                }
            }
        }
        ControlFlow::Continue(())
    }
}
