use std::cmp::Ordering;

use super::*;
use crate::Category;

/// Rank of each [`Operation`] in a priority table. Lower ranks sort
/// first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpRank([u8; 6]);

impl OpRank {
    /// Ranks in declaration order of [`Operation`]: none, union,
    /// intersection, blocked, continue, opposite.
    pub const fn new(
        none: u8,
        union: u8,
        intersection: u8,
        blocked: u8,
        cont: u8,
        opposite: u8,
    ) -> Self {
        OpRank([none, union, intersection, blocked, cont, opposite])
    }

    /// Operations by their code.
    pub const BY_CODE: OpRank = OpRank::new(0, 1, 2, 3, 4, 0);

    /// Blocked, union, intersection, continue.
    pub const XUIC: OpRank = OpRank::new(0, 2, 3, 1, 4, 0);

    /// Blocked, intersection, union, continue.
    pub const XIUC: OpRank = OpRank::new(0, 3, 2, 1, 4, 0);

    /// Union, intersection, blocked, continue.
    pub const UIXC: OpRank = OpRank::new(0, 1, 2, 3, 4, 0);

    #[inline]
    pub fn rank(&self, op: Operation) -> u8 {
        let idx = match op {
            Operation::None => 0,
            Operation::Union => 1,
            Operation::Intersection => 2,
            Operation::Blocked => 3,
            Operation::Continue => 4,
            Operation::Opposite => 5,
        };
        self.0[idx]
    }
}

/// Tie-breaking order between the operations of turns at the same
/// position, chosen by the categories of the two operands.
///
/// When the other operand is areal, operations are grouped by the
/// component of the other operand, then by its ring (exterior first,
/// then holes by index), and ranked with the table of the pairing
/// within a ring. Intersections on the exterior ring thus sort before
/// every operation on a hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationOrder {
    /// Rank by [`OpRank::BY_CODE`] only.
    ByCode,
    /// Both operands linear: [`OpRank::XUIC`].
    LinearLinear,
    /// Linear primary operand against an areal one: ring aware,
    /// [`OpRank::XUIC`] within a ring.
    LinearAreal,
    /// Areal primary operand against a linear one: [`OpRank::XIUC`].
    ArealLinear,
    /// Both operands areal: ring aware, [`OpRank::UIXC`] within a
    /// ring.
    ArealAreal,
}

impl OperationOrder {
    /// The order for a primary operand of category `this` against
    /// an operand of category `other`.
    pub fn for_categories(this: Category, other: Category) -> Self {
        use Category::*;
        match (this, other) {
            (Linear, Linear) => OperationOrder::LinearLinear,
            (Linear, Areal) => OperationOrder::LinearAreal,
            (Areal, Linear) => OperationOrder::ArealLinear,
            (Areal, Areal) => OperationOrder::ArealAreal,
        }
    }

    fn table(&self) -> OpRank {
        match self {
            OperationOrder::ByCode => OpRank::BY_CODE,
            OperationOrder::LinearLinear | OperationOrder::LinearAreal => OpRank::XUIC,
            OperationOrder::ArealLinear => OpRank::XIUC,
            OperationOrder::ArealAreal => OpRank::UIXC,
        }
    }

    fn ring_aware(&self) -> bool {
        matches!(self, OperationOrder::LinearAreal | OperationOrder::ArealAreal)
    }

    /// Sort key: (component, ring, rank).
    fn key<T: ExactNum>(&self, op: &TurnOperation<T>) -> (usize, Ring, u8) {
        let rank = self.table().rank(op.operation);
        if self.ring_aware() {
            (op.other_id.multi_index, op.other_id.ring, rank)
        } else {
            (0, Ring::Exterior, rank)
        }
    }

    pub fn compare<T: ExactNum>(&self, left: &TurnOperation<T>, right: &TurnOperation<T>) -> Ordering {
        self.key(left).cmp(&self.key(right))
    }
}

/// Orders turns along the boundary of one operand.
///
/// Turns are compared by the segment of operand `op_index`, then by
/// their position along that segment, and finally by the
/// [`OperationOrder`] of that operand's operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOrder {
    op_index: usize,
    order: OperationOrder,
}

impl TurnOrder {
    pub fn new(op_index: usize, order: OperationOrder) -> Self {
        assert!(op_index < 2, "operand index must be 0 or 1");
        TurnOrder { op_index, order }
    }

    /// Order along operand `op_index`, given the categories of both
    /// operands.
    pub fn for_categories(op_index: usize, categories: [Category; 2]) -> Self {
        assert!(op_index < 2, "operand index must be 0 or 1");
        let order = OperationOrder::for_categories(categories[op_index], categories[1 - op_index]);
        TurnOrder { op_index, order }
    }

    /// Get the index of the operand turns are ordered along.
    pub fn op_index(&self) -> usize {
        self.op_index
    }

    /// Get the operation order used to break ties.
    pub fn order(&self) -> OperationOrder {
        self.order
    }

    pub fn compare<T: ExactNum>(&self, left: &Turn<T>, right: &Turn<T>) -> Ordering {
        let l = &left.operations[self.op_index];
        let r = &right.operations[self.op_index];
        l.seg_id
            .cmp(&r.seg_id)
            .then_with(|| l.fraction.cmp(&r.fraction))
            .then_with(|| self.order.compare(l, r))
    }

    /// Sort `turns` in place. Equal turns keep their relative order.
    pub fn sort<T: ExactNum>(&self, turns: &mut [Turn<T>]) {
        turns.sort_by(|a, b| self.compare(a, b));
    }
}
