use getset::CopyGetters;
use serde::{Deserialize, Serialize};

use crate::float::{equals, number_of_equal_fractionals};

/// A precision requirement for [`equals`], stored so it can live in configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, CopyGetters)]
pub struct BitTolerance {
    /// Number of leading mantissa bits two numbers must share
    #[getset(get_copy = "pub")]
    threshold: i32,
}
impl BitTolerance {
    #[must_use]
    pub fn new(threshold: i32) -> Self {
        Self { threshold }
    }
    #[must_use]
    pub fn approx_eq(&self, a: f64, b: f64) -> bool {
        equals(a, b, self.threshold)
    }
    #[must_use]
    pub fn agreement(&self, a: f64, b: f64) -> i32 {
        number_of_equal_fractionals(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq() {
        let tolerance = BitTolerance::new(3);
        assert_eq!(tolerance.threshold(), 3);
        assert!(tolerance.approx_eq(15.0, 14.5));
        assert!(!BitTolerance::new(4).approx_eq(15.0, 14.5));
        assert_eq!(tolerance.agreement(15.0, 14.5), 3);
    }

    #[test]
    fn test_default() {
        let tolerance = BitTolerance::default();
        assert_eq!(tolerance.threshold(), 0);
        assert!(tolerance.approx_eq(-8.0, 8.0));
        assert!(!tolerance.approx_eq(1.0, 3.0));
    }

    #[test]
    fn test_deserialize() {
        let tolerance: BitTolerance = ron::from_str("(threshold: 40)").unwrap();
        assert_eq!(tolerance, BitTolerance::new(40));
        let text = ron::to_string(&tolerance).unwrap();
        assert_eq!(ron::from_str::<BitTolerance>(&text).unwrap(), tolerance);
    }
}
