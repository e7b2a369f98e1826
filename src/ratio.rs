use std::cmp::Ordering;

use crate::ExactNum;

/// A position along a segment, kept as an unevaluated fraction.
///
/// `0` is the first point of the segment and `1` the second. The
/// denominator is always strictly positive; the sign of a ratio is
/// carried by the numerator. Ratios are compared by cross
/// multiplication, so two ratios produced on the same segment are
/// ordered exactly for integer domains and without an extra division
/// for floating domains.
#[derive(Debug, Clone, Copy)]
pub struct SegmentRatio<T: ExactNum> {
    numerator: T,
    denominator: T,
}

impl<T: ExactNum> SegmentRatio<T> {
    /// Create a ratio from a fraction, moving its sign to the numerator.
    ///
    /// # Panics
    ///
    /// If `denominator` is zero. Callers are expected to have ruled
    /// out parallel configurations before building a ratio.
    pub fn new(numerator: T, denominator: T) -> Self {
        assert!(
            denominator != T::zero(),
            "segment ratio requires a non-zero denominator"
        );
        if denominator < T::zero() {
            SegmentRatio {
                numerator: T::zero() - numerator,
                denominator: T::zero() - denominator,
            }
        } else {
            SegmentRatio {
                numerator,
                denominator,
            }
        }
    }

    /// The start of the segment.
    #[inline]
    pub fn zero() -> Self {
        SegmentRatio {
            numerator: T::zero(),
            denominator: T::one(),
        }
    }

    /// The end of the segment.
    #[inline]
    pub fn one() -> Self {
        SegmentRatio {
            numerator: T::one(),
            denominator: T::one(),
        }
    }

    #[inline]
    pub fn numerator(&self) -> T {
        self.numerator
    }

    #[inline]
    pub fn denominator(&self) -> T {
        self.denominator
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numerator == T::zero()
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.numerator == self.denominator
    }

    /// Whether the ratio lies on the closed segment (`0 <= r <= 1`).
    #[inline]
    pub fn on_segment(&self) -> bool {
        self.numerator >= T::zero() && self.numerator <= self.denominator
    }

    /// Whether the ratio lies strictly inside the segment (`0 < r < 1`).
    ///
    /// Unlike [`on_segment`](Self::on_segment), this excludes both end
    /// points.
    #[inline]
    pub fn in_segment(&self) -> bool {
        self.numerator > T::zero() && self.numerator < self.denominator
    }

    /// Whether the ratio is exactly one of the end points.
    #[inline]
    pub fn on_end(&self) -> bool {
        self.is_zero() || self.is_one()
    }

    /// The same position measured from the other end (`1 - r`).
    #[inline]
    pub fn complement(&self) -> Self {
        SegmentRatio {
            numerator: self.denominator - self.numerator,
            denominator: self.denominator,
        }
    }

    /// Both terms are usable in comparisons.
    #[inline]
    pub(crate) fn is_well_formed(&self) -> bool {
        self.numerator.is_well_formed() && self.denominator.is_well_formed()
    }

    /// Clamp the ratio into `[0, 1]`.
    pub(crate) fn clamped(self) -> Self {
        if self.numerator < T::zero() {
            Self::zero()
        } else if self.numerator > self.denominator {
            Self::one()
        } else {
            self
        }
    }
}

impl<T: ExactNum> PartialEq for SegmentRatio<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: ExactNum> Eq for SegmentRatio<T> {}

impl<T: ExactNum> PartialOrd for SegmentRatio<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Cross multiplication; valid because both denominators are positive.
impl<T: ExactNum> Ord for SegmentRatio<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        T::cmp_products(
            self.numerator,
            other.denominator,
            other.numerator,
            self.denominator,
        )
    }
}
