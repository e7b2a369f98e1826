use geo::Line;

use super::{Method, Operation};
use crate::{Category, Direction, ExactNum, IntersectionPoint, Side, SideInfo};

/// Input to a [`Classifier`] for one intersection point.
#[derive(Debug, Clone, Copy)]
pub struct TurnContext<'a, T: ExactNum> {
    pub segments: [&'a Line<T>; 2],
    pub categories: [Category; 2],
    pub sides: &'a SideInfo,

    /// Set for collinear overlaps.
    pub direction: Option<Direction>,
    pub intersection: &'a IntersectionPoint<T>,
}

impl<'a, T: ExactNum> TurnContext<'a, T> {
    /// The same context with the operand roles swapped.
    pub fn reversed(&self, sides: &'a SideInfo, intersection: &'a IntersectionPoint<T>) -> Self {
        TurnContext {
            segments: [self.segments[1], self.segments[0]],
            categories: [self.categories[1], self.categories[0]],
            sides,
            direction: self.direction,
            intersection,
        }
    }

    /// How the intersection was found.
    pub fn method(&self) -> Method {
        let [a, b] = self.segments;
        if a.start == a.end || b.start == b.end {
            return Method::Degenerate;
        }
        if self.direction.is_some() {
            return Method::Collinear;
        }
        let [ra, rb] = self.intersection.fractions;
        match (ra.on_end(), rb.on_end()) {
            (false, false) => Method::Crosses,
            (true, true) => Method::Touch,
            _ => Method::TouchInterior,
        }
    }
}

/// Assigns operations to both operands of a turn.
///
/// Implementations must be deterministic and symmetric: classifying
/// the [reversed](TurnContext::reversed) context yields the same pair
/// of operations, swapped.
pub trait Classifier<T: ExactNum> {
    fn classify(&self, ctx: &TurnContext<'_, T>) -> (Method, [Operation; 2]);
}

/// Classifies turns from the side information of the intersector.
///
/// Each operand is classified by where the other boundary goes after
/// the turn: to its left is [`Union`](Operation::Union), to its right
/// is [`Intersection`](Operation::Intersection). A boundary ending at
/// the turn is taken to leave towards the side opposite to the one
/// it arrived from. Boundaries both ending at the turn are
/// [`Blocked`](Operation::Blocked). Collinear overlaps running the same
/// way [`Continue`](Operation::Continue); running opposite ways they
/// are [`Opposite`](Operation::Opposite), or `Blocked` between two
/// areal operands.
#[derive(Debug, Clone, Copy, Default)]
pub struct SideClassifier;

impl SideClassifier {
    fn operation<T: ExactNum>(
        &self,
        ctx: &TurnContext<'_, T>,
        method: Method,
        this: usize,
    ) -> Operation {
        let other = 1 - this;
        match (method, ctx.direction) {
            (Method::Degenerate, _) => return Operation::None,
            (_, Some(Direction::Same)) => return Operation::Continue,
            (_, Some(Direction::Opposite)) => {
                return if ctx.categories == [Category::Areal; 2] {
                    Operation::Blocked
                } else {
                    Operation::Opposite
                };
            }
            _ => {}
        }

        let fractions = ctx.intersection.fractions;
        if fractions[this].is_one() && fractions[other].is_one() {
            return Operation::Blocked;
        }

        let leaving = if fractions[other].is_one() {
            ctx.sides.get(other, 0).reverse()
        } else {
            ctx.sides.get(other, 1)
        };
        match leaving {
            Side::Left => Operation::Union,
            Side::Right => Operation::Intersection,
            Side::On => Operation::None,
        }
    }
}

impl<T: ExactNum> Classifier<T> for SideClassifier {
    fn classify(&self, ctx: &TurnContext<'_, T>) -> (Method, [Operation; 2]) {
        let method = ctx.method();
        let ops = [
            self.operation(ctx, method, 0),
            self.operation(ctx, method, 1),
        ];
        (method, ops)
    }
}
