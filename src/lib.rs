//! Turn generation for overlay operations on planar geometries.
//!
//! 1. [Segment Intersection](#segment-intersection)
//! 1. [Turns](#turns)
//! 1. [Ordering](#ordering)
//!
//! # Segment Intersection
//!
//! A [`SegmentIntersector`] relates two segments: it reports the
//! [`SideInfo`] of their end points and zero, one or two intersection
//! points. Every point carries its position along both segments as a
//! [`SegmentRatio`], a numerator/denominator pair compared by
//! cross-multiplication, so positions along a segment are ordered
//! exactly even when the point itself had to be rounded. Coordinates
//! may be any [`ExactNum`]: `i32`, `i64`, `f32` or `f64`.
//!
//! # Turns
//!
//! A [`Turn`] is a point where the boundaries of two geometries meet,
//! along with the [`Operation`] an overlay traversal should follow
//! there on each boundary. The [`TurnGenerator`] relates the candidate
//! segment pairs supplied by a [`CandidatePairs`] implementation
//! ([`AllPairs`] or the R-tree based [`RTreePairs`]), classifies the
//! intersection points with a [`Classifier`], and consults an
//! [`InterruptPolicy`] after every turn.
//!
//! ```rust
//! use geo::{Coordinate, Line};
//! use geo_turns::{get_turns, Method, Operation};
//!
//! let a = Line::new((0., 0.), (10., 0.));
//! let b = Line::new((5., -5.), (5., 5.));
//! let turns = get_turns(&a, &b);
//! assert_eq!(turns.len(), 1);
//! assert_eq!(turns[0].point, Coordinate { x: 5., y: 0. });
//! assert_eq!(turns[0].method, Method::Crosses);
//! assert!(turns[0].combination(Operation::Union, Operation::Intersection));
//! ```
//!
//! # Ordering
//!
//! Turns are produced in the order the candidate pairs are supplied.
//! A [`TurnOrder`] sorts them along the boundary of one operand, and
//! breaks ties at the same position with the [`OperationOrder`] of
//! the category pairing.
//!
//! ```rust
//! use geo::Polygon;
//! use geo_turns::{get_turns, Category, TurnOrder};
//!
//! let p1: Polygon<f64> = Polygon::new(vec![(0., 0.), (0., 10.), (10., 10.), (10., 0.)].into(), vec![]);
//! let p2: Polygon<f64> = Polygon::new(vec![(5., 5.), (5., 15.), (15., 15.), (15., 5.)].into(), vec![]);
//! let mut turns = get_turns(&p1, &p2);
//! TurnOrder::for_categories(0, [Category::Areal; 2]).sort(&mut turns);
//! assert_eq!(turns.len(), 2);
//! assert!(turns[0].operations[0].seg_id <= turns[1].operations[0].seg_id);
//! ```
mod num;
pub use num::ExactNum;

mod ratio;
pub use ratio::SegmentRatio;

mod side;
pub use side::{KernelSide, Side, SideInfo, SideStrategy};

pub mod intersection;
pub use intersection::{
    CartesianIntersector, Direction, IntersectionInfo, IntersectionPoint, IntersectionPoints,
    SegmentIntersector, SegmentRelation,
};

mod geometry;
pub use geometry::{Category, Oriented, Segment, TurnGeometry};

pub mod candidates;
pub use candidates::{AllPairs, CandidatePairs, RTreePairs};

mod interrupt;
pub use interrupt::{FirstTurn, InterruptPolicy, NoInterrupt};

pub mod turns;
pub use turns::{
    get_turns, intersects, Classifier, Method, OpRank, Operation, OperationOrder, Outcome, Ring,
    RingId, SegmentId, SideClassifier, Turn, TurnConfig, TurnContext, TurnGenerator,
    TurnOperation, TurnOrder,
};

#[cfg(test)]
#[path = "../benches/utils/random.rs"]
pub mod random;

pub(crate) mod utils;
