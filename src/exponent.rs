use num_traits::Float;

pub trait BinaryExponentExt: Float {
    /// Unbiased binary exponent, `floor(log2(|self|))`.
    ///
    /// Subnormal numbers are normalized, so the result matches `ilogb` for every finite nonzero input.
    ///
    /// # Option
    ///
    /// Return [`None`] if `self` is zero, infinite, or NaN
    fn binary_exponent(self) -> Option<i32> {
        if !self.is_finite() {
            return None;
        }
        // `self == mantissa * 2^exponent`, with the hidden bit already in `mantissa` for normals
        let (mantissa, exponent, _sign) = self.integer_decode();
        if mantissa == 0 {
            return None;
        }
        let mantissa_bits = (u64::BITS - mantissa.leading_zeros()) as i32;
        Some(i32::from(exponent) + mantissa_bits - 1)
    }
}
impl<T> BinaryExponentExt for T where T: Float {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal() {
        assert_eq!(1.0_f64.binary_exponent(), Some(0));
        assert_eq!(1.5_f64.binary_exponent(), Some(0));
        assert_eq!(2.0_f64.binary_exponent(), Some(1));
        assert_eq!(15.0_f64.binary_exponent(), Some(3));
        assert_eq!(0.5_f64.binary_exponent(), Some(-1));
        assert_eq!(0.0078125_f64.binary_exponent(), Some(-7));
        assert_eq!((-8.0_f64).binary_exponent(), Some(3));
        assert_eq!(f64::MAX.binary_exponent(), Some(1023));
        assert_eq!(f64::MIN_POSITIVE.binary_exponent(), Some(-1022));
    }

    #[test]
    fn test_subnormal() {
        let smallest = f64::from_bits(1);
        assert_eq!(smallest.binary_exponent(), Some(-1074));
        assert_eq!((-smallest).binary_exponent(), Some(-1074));
        assert_eq!(f64::from_bits(3).binary_exponent(), Some(-1073));
        let largest_subnormal = f64::from_bits((1 << 52) - 1);
        assert_eq!(largest_subnormal.binary_exponent(), Some(-1023));
        assert_eq!(f32::from_bits(1).binary_exponent(), Some(-149));
    }

    #[test]
    fn test_f32() {
        assert_eq!(1.0_f32.binary_exponent(), Some(0));
        assert_eq!(14.5_f32.binary_exponent(), Some(3));
        assert_eq!(f32::MAX.binary_exponent(), Some(127));
        assert_eq!(f32::MIN_POSITIVE.binary_exponent(), Some(-126));
    }

    #[test]
    fn test_no_exponent() {
        assert_eq!(0.0_f64.binary_exponent(), None);
        assert_eq!((-0.0_f64).binary_exponent(), None);
        assert_eq!(f64::INFINITY.binary_exponent(), None);
        assert_eq!(f64::NEG_INFINITY.binary_exponent(), None);
        assert_eq!(f64::NAN.binary_exponent(), None);
        assert_eq!(f32::NAN.binary_exponent(), None);
    }
}
