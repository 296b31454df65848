use crate::{
    error::EvalError,
    interpreter::evaluator::core::{EvalResult, Environment},
    util::num::i32_to_u32_checked,
};

impl Environment {
    /// Evaluates an exponentiation operation.
    ///
    /// The result equals multiplying `base` by itself `exponent` times with
    /// wrapping arithmetic. An exponent of zero always yields `1`, including
    /// `0 ^ 0`.
    ///
    /// # Errors
    /// Returns [`EvalError::NegativeExponent`] if `exponent` is negative.
    ///
    /// # Example
    /// ```
    /// use calclang::{error::EvalError, interpreter::evaluator::core::Environment};
    ///
    /// assert_eq!(Environment::eval_pow(2, 10), Ok(1024));
    /// assert_eq!(Environment::eval_pow(0, 0), Ok(1));
    /// assert_eq!(Environment::eval_pow(2, -1),
    ///            Err(EvalError::NegativeExponent { value: -1 }));
    /// ```
    pub fn eval_pow(base: i32, exponent: i32) -> EvalResult<i32> {
        let exponent = i32_to_u32_checked(exponent, EvalError::NegativeExponent { value: exponent })?;
        Ok(base.wrapping_pow(exponent))
    }
}
