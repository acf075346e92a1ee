pub mod assert;
pub mod exponent;
pub mod finite;
pub mod float;
pub mod tolerance;

pub use float::{equals, number_of_equal_fractionals, strictest_threshold, IDENTICAL};
