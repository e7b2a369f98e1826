//! Numeric domains supported by the turn machinery.
use std::{cmp::Ordering, convert::TryFrom};

use geo::GeoNum;

/// Coordinate types that support exact ratio arithmetic.
///
/// Implemented for `i32`, `i64`, `f32` and `f64`. The same type is
/// used for coordinates, ratio numerators and denominators, so
/// strategies working on a geometry pair always share one domain.
///
/// Integer coordinates must stay within a range where the cross
/// products of segment deltas fit the type (roughly half its bit
/// width). Products used for comparisons are widened internally.
pub trait ExactNum: GeoNum {
    /// Compares `a * b` with `c * d` without rounding away the result.
    fn cmp_products(a: Self, b: Self, c: Self, d: Self) -> Ordering;

    /// Computes `base + numerator * delta / denominator`.
    ///
    /// The division is performed last. Returns `None` if the value
    /// is not representable in the domain.
    fn ratio_offset(base: Self, numerator: Self, delta: Self, denominator: Self) -> Option<Self>;

    /// Whether the value can take part in geometric predicates
    /// (`false` for NaN and infinities).
    fn is_well_formed(self) -> bool;
}

macro_rules! impl_exact_int {
    ($t:ty, $wide:ty) => {
        impl ExactNum for $t {
            #[inline]
            fn cmp_products(a: Self, b: Self, c: Self, d: Self) -> Ordering {
                (a as $wide * b as $wide).cmp(&(c as $wide * d as $wide))
            }

            fn ratio_offset(
                base: Self,
                numerator: Self,
                delta: Self,
                denominator: Self,
            ) -> Option<Self> {
                assert!(denominator != 0, "ratio with zero denominator");
                let offset = (numerator as $wide).checked_mul(delta as $wide)? / denominator as $wide;
                let value = (base as $wide).checked_add(offset)?;
                <$t>::try_from(value).ok()
            }

            #[inline]
            fn is_well_formed(self) -> bool {
                true
            }
        }
    };
}

macro_rules! impl_exact_float {
    ($t:ty) => {
        impl ExactNum for $t {
            #[inline]
            fn cmp_products(a: Self, b: Self, c: Self, d: Self) -> Ordering {
                // Overflowing products are rejected by the intersector;
                // treat whatever is left as a tie.
                (a * b).partial_cmp(&(c * d)).unwrap_or(Ordering::Equal)
            }

            fn ratio_offset(
                base: Self,
                numerator: Self,
                delta: Self,
                denominator: Self,
            ) -> Option<Self> {
                assert!(denominator != 0., "ratio with zero denominator");
                let value = base + numerator * delta / denominator;
                value.is_finite().then(|| value)
            }

            #[inline]
            fn is_well_formed(self) -> bool {
                self.is_finite()
            }
        }
    };
}

impl_exact_int!(i32, i64);
impl_exact_int!(i64, i128);
impl_exact_float!(f32);
impl_exact_float!(f64);

#[inline]
pub(crate) fn abs<T: ExactNum>(x: T) -> T {
    if x < T::zero() {
        T::zero() - x
    } else {
        x
    }
}
