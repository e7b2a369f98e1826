use geo::{
    kernels::{Kernel, Orientation},
    Coordinate,
};

use crate::ExactNum;

/// Position of a point relative to a directed segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Right,
    On,
    Left,
}

impl Side {
    /// The side as seen when the segment is walked the other way.
    #[inline]
    pub fn reverse(self) -> Self {
        match self {
            Side::Right => Side::Left,
            Side::On => Side::On,
            Side::Left => Side::Right,
        }
    }

    #[inline]
    fn signum(self) -> i8 {
        match self {
            Side::Right => -1,
            Side::On => 0,
            Side::Left => 1,
        }
    }
}

/// Helper to convert orientation-2d into a side.
#[inline]
pub(crate) fn orientation_as_side(orientation: Orientation) -> Side {
    match orientation {
        Orientation::CounterClockwise => Side::Left,
        Orientation::Clockwise => Side::Right,
        Orientation::Collinear => Side::On,
    }
}

/// Strategy deciding on which side of a segment a point lies.
///
/// The intersector and the classifier both rely on this answer, so
/// it must be robust: a point reported `On` a segment is assumed to be
/// exactly collinear with it.
pub trait SideStrategy<T: ExactNum> {
    fn side(&self, p1: Coordinate<T>, p2: Coordinate<T>, p: Coordinate<T>) -> Side;
}

/// Side strategy backed by the `geo` kernel of the numeric type.
///
/// Uses robust predicates for floating point types and exact
/// arithmetic for integer types.
#[derive(Debug, Clone, Copy, Default)]
pub struct KernelSide;

impl<T: ExactNum> SideStrategy<T> for KernelSide {
    #[inline]
    fn side(&self, p1: Coordinate<T>, p2: Coordinate<T>, p: Coordinate<T>) -> Side {
        orientation_as_side(T::Ker::orient2d(p1, p2, p))
    }
}

/// The sides of the end points of two segments w.r.t. each other.
///
/// Index `0` holds the end points of the first segment measured
/// against the second; index `1` the end points of the second
/// segment measured against the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideInfo {
    sides: [[Side; 2]; 2],
}

impl Default for SideInfo {
    fn default() -> Self {
        SideInfo {
            sides: [[Side::On; 2]; 2],
        }
    }
}

impl SideInfo {
    pub fn new(a_wrt_b: [Side; 2], b_wrt_a: [Side; 2]) -> Self {
        SideInfo {
            sides: [a_wrt_b, b_wrt_a],
        }
    }

    /// Compute all four sides with the given strategy.
    pub fn compute<T: ExactNum, S: SideStrategy<T>>(
        strategy: &S,
        a: (Coordinate<T>, Coordinate<T>),
        b: (Coordinate<T>, Coordinate<T>),
    ) -> Self {
        SideInfo::new(
            [strategy.side(b.0, b.1, a.0), strategy.side(b.0, b.1, a.1)],
            [strategy.side(a.0, a.1, b.0), strategy.side(a.0, a.1, b.1)],
        )
    }

    /// Side of end point `index` of segment `which` w.r.t. the other
    /// segment.
    #[inline]
    pub fn get(&self, which: usize, index: usize) -> Side {
        self.sides[which][index]
    }

    /// Both end points of segment `which` lie strictly on the same
    /// side of the other segment.
    #[inline]
    pub fn same(&self, which: usize) -> bool {
        self.sides[which][0].signum() * self.sides[which][1].signum() == 1
    }

    /// The end points of segment `which` lie strictly on opposite
    /// sides of the other segment.
    #[inline]
    pub fn opposite(&self, which: usize) -> bool {
        self.sides[which][0].signum() * self.sides[which][1].signum() == -1
    }

    /// All four end points are collinear.
    #[inline]
    pub fn collinear(&self) -> bool {
        self.sides.iter().flatten().all(|s| *s == Side::On)
    }

    /// Both segments cross each other in their interiors.
    #[inline]
    pub fn crossing(&self) -> bool {
        self.opposite(0) && self.opposite(1)
    }

    /// Number of end points of segment `which` lying on the other
    /// segment's line.
    #[inline]
    pub fn zero_count(&self, which: usize) -> usize {
        self.sides[which].iter().filter(|s| **s == Side::On).count()
    }

    /// The same information with the operand roles swapped.
    #[inline]
    pub fn reversed(&self) -> Self {
        SideInfo {
            sides: [self.sides[1], self.sides[0]],
        }
    }
}
