use strict_num::FiniteF64;
use thiserror::Error;

use crate::float::{equals, number_of_equal_fractionals};

#[must_use]
pub fn number_of_equal_fractionals_finite(a: FiniteF64, b: FiniteF64) -> i32 {
    number_of_equal_fractionals(a.get(), b.get())
}

#[must_use]
pub fn equals_finite(a: FiniteF64, b: FiniteF64, threshold: i32) -> bool {
    equals(a.get(), b.get(), threshold)
}

/// Like [`number_of_equal_fractionals`] but rejects NaN and infinite inputs.
pub fn try_number_of_equal_fractionals(a: f64, b: f64) -> Result<i32, NonFiniteError> {
    let (a, b) = check_finite(a, b)?;
    Ok(number_of_equal_fractionals_finite(a, b))
}

/// Like [`equals`] but rejects NaN and infinite inputs.
pub fn try_equals(a: f64, b: f64, threshold: i32) -> Result<bool, NonFiniteError> {
    let (a, b) = check_finite(a, b)?;
    Ok(equals_finite(a, b, threshold))
}

fn check_finite(a: f64, b: f64) -> Result<(FiniteF64, FiniteF64), NonFiniteError> {
    let a = FiniteF64::new(a).ok_or(NonFiniteError::Left(a))?;
    let b = FiniteF64::new(b).ok_or(NonFiniteError::Right(b))?;
    Ok((a, b))
}

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum NonFiniteError {
    #[error("Left operand is not finite: {0}")]
    Left(f64),
    #[error("Right operand is not finite: {0}")]
    Right(f64),
}
