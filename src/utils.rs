use geo::winding_order::WindingOrder;

pub fn winding_inverse(winding: WindingOrder) -> WindingOrder {
    match winding {
        WindingOrder::Clockwise => WindingOrder::CounterClockwise,
        WindingOrder::CounterClockwise => WindingOrder::Clockwise,
    }
}

/// Whether a geometry declared with `declared` point order must be
/// walked backwards to match the `expected` order.
#[inline]
pub fn do_reverse(declared: WindingOrder, expected: WindingOrder) -> bool {
    declared != expected
}
