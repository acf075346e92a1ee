//! Precision-based float asserts for test suites.

use crate::float::{equals, number_of_equal_fractionals};

#[track_caller]
pub fn assert_fractionals_eq(a: f64, b: f64, threshold: i32) {
    assert!(
        equals(a, b, threshold),
        "{} vs {}, {} equal fractional bits is less than threshold {}",
        a,
        b,
        number_of_equal_fractionals(a, b),
        threshold
    );
}
