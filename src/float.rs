use num_traits::Float;

use crate::exponent::BinaryExponentExt;

/// Agreement of two numbers that compare equal.
pub const IDENTICAL: i32 = -1;

/// Precision-based equality for floats of any width.
///
/// Inputs are expected to be finite. For NaN or infinite inputs the returned values are unspecified.
pub trait FractionalBitsExt: Float {
    /// Number of leading mantissa bits `self` and `other` share when aligned at the larger magnitude.
    ///
    /// Returns [`IDENTICAL`] if the numbers compare equal and `0` if only their signs differ.
    /// A larger value means the numbers are closer.
    fn equal_fractionals(self, other: Self) -> i32 {
        if self == other {
            return IDENTICAL;
        }
        if self.abs() == other.abs() {
            return 0;
        }

        let exponent = self.binary_exponent().max(other.binary_exponent());
        // Distinct magnitudes never subtract to zero under gradual underflow
        let diff_exponent = (self.abs() - other.abs()).binary_exponent();
        match (exponent, diff_exponent) {
            (Some(exponent), Some(diff_exponent)) => exponent - diff_exponent - 1,
            _ => i32::MIN,
        }
    }

    /// Whether `self` and `other` share at least `threshold` leading mantissa bits.
    fn equals_within(self, other: Self, threshold: i32) -> bool {
        if self == other {
            return true;
        }
        self.equal_fractionals(other) >= threshold
    }
}
impl<T> FractionalBitsExt for T where T: Float {}

/// See [`FractionalBitsExt::equal_fractionals`].
#[must_use]
pub fn number_of_equal_fractionals(a: f64, b: f64) -> i32 {
    a.equal_fractionals(b)
}

/// See [`FractionalBitsExt::equals_within`].
#[must_use]
pub fn equals(a: f64, b: f64, threshold: i32) -> bool {
    a.equals_within(b, threshold)
}

/// The largest threshold under which [`equals`] still holds for `a` and `b`.
///
/// # Option
///
/// Return [`None`] if `a == b`, since every threshold passes
#[must_use]
pub fn strictest_threshold(a: f64, b: f64) -> Option<i32> {
    if a == b {
        return None;
    }
    Some(number_of_equal_fractionals(a, b))
}
