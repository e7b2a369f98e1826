//! Turns: the places where the boundaries of two geometries meet.
//!
//! A [`Turn`] records the intersection point and, for each of the two
//! input geometries, which segment is involved, where along that
//! segment the point lies and how a boundary traversal should behave
//! there ([`Operation`]). Turns are produced by the
//! [`TurnGenerator`], and ordered with a [`TurnOrder`] before being
//! handed to an overlay traversal.
use geo::Coordinate;

use crate::{ExactNum, SegmentRatio};

mod classify;
pub use classify::{Classifier, SideClassifier, TurnContext};

mod generate;
pub use generate::{get_turns, intersects, Outcome, TurnConfig, TurnGenerator};

mod order;
pub use order::{OpRank, OperationOrder, TurnOrder};

/// Role of a turn for one of the operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// No meaningful classification.
    None,
    /// Followed when computing a union.
    Union,
    /// Followed when computing an intersection.
    Intersection,
    /// The traversal must stop here.
    Blocked,
    /// The boundary continues without changing side.
    Continue,
    /// Coincident boundaries running in opposite directions.
    Opposite,
}

/// How the turn was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    None,
    /// Both segments cross in their interiors.
    Crosses,
    /// The point is an end point of both segments.
    Touch,
    /// The point is an end point of one segment and interior to the
    /// other.
    TouchInterior,
    /// The segments are collinear and overlap.
    Collinear,
    /// One of the segments collapsed to a point.
    Degenerate,
}

/// A ring of a (multi-)geometry.
///
/// Linear geometries only have an exterior "ring". The exterior is
/// ordered before all interiors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Ring {
    Exterior,
    Interior(usize),
}

/// Identifies a segment of one of the two input geometries.
///
/// Ordered lexicographically by its fields, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SegmentId {
    /// Which operand (`0` or `1`).
    pub source_index: usize,
    /// Component of a multi-geometry (`0` for single geometries).
    pub multi_index: usize,
    pub ring: Ring,
    pub segment_index: usize,
}

impl SegmentId {
    pub fn new(source_index: usize, multi_index: usize, ring: Ring, segment_index: usize) -> Self {
        assert!(source_index < 2, "segment source index must be 0 or 1");
        SegmentId {
            source_index,
            multi_index,
            ring,
            segment_index,
        }
    }

    /// The component and ring this segment belongs to.
    #[inline]
    pub fn ring_id(&self) -> RingId {
        RingId {
            multi_index: self.multi_index,
            ring: self.ring,
        }
    }
}

/// Component and ring of a geometry; used to refer to the other
/// operand of a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RingId {
    pub multi_index: usize,
    pub ring: Ring,
}

/// One operand's view of a turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnOperation<T: ExactNum> {
    pub seg_id: SegmentId,

    /// Position of the turn along `seg_id`.
    pub fraction: SegmentRatio<T>,

    /// Ring of the other operand meeting at this turn.
    pub other_id: RingId,

    pub operation: Operation,

    /// Squared distance from the start of the segment to the turn
    /// point. Only set for linear operands.
    pub distance: Option<T>,
}

/// An intersection of the boundaries of two geometries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Turn<T: ExactNum> {
    pub point: Coordinate<T>,
    pub method: Method,
    pub operations: [TurnOperation<T>; 2],
}

impl<T: ExactNum> Turn<T> {
    /// Both operands have operation `op`.
    #[inline]
    pub fn both(&self, op: Operation) -> bool {
        self.operations.iter().all(|o| o.operation == op)
    }

    /// At least one operand has operation `op`.
    #[inline]
    pub fn has(&self, op: Operation) -> bool {
        self.operations.iter().any(|o| o.operation == op)
    }

    /// The operands have operations `op1` and `op2`, in any order.
    #[inline]
    pub fn combination(&self, op1: Operation, op2: Operation) -> bool {
        let [a, b] = [self.operations[0].operation, self.operations[1].operation];
        (a == op1 && b == op2) || (a == op2 && b == op1)
    }

    #[inline]
    pub fn is_collinear(&self) -> bool {
        self.method == Method::Collinear
    }
}
