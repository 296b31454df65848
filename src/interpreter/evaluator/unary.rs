use crate::{
    ast::UnaryOperator,
    error::EvalError,
    interpreter::evaluator::core::{EvalResult, Environment},
};

/// Largest operand whose factorial fits in an `i32` (`12! = 479001600`).
pub const MAX_FACTORIAL_OPERAND: i32 = 12;

impl Environment {
    /// Evaluates a unary operation on an already evaluated operand.
    ///
    /// Supported operators:
    /// - `Factorial`: `n!` for `0 <= n <= 12`. Both `0!` and `1!` are `1`.
    ///
    /// # Errors
    /// - [`EvalError::NegativeFactorial`] if the operand is negative.
    /// - [`EvalError::FactorialOverflow`] if the operand is above
    ///   [`MAX_FACTORIAL_OPERAND`].
    ///
    /// # Example
    /// ```
    /// use calclang::{
    ///     ast::UnaryOperator,
    ///     error::EvalError,
    ///     interpreter::evaluator::core::Environment,
    /// };
    ///
    /// assert_eq!(Environment::eval_unary(UnaryOperator::Factorial, 5), Ok(120));
    /// assert_eq!(Environment::eval_unary(UnaryOperator::Factorial, 13),
    ///            Err(EvalError::FactorialOverflow { value: 13 }));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: i32) -> EvalResult<i32> {
        match op {
            UnaryOperator::Factorial => {
                if value < 0 {
                    return Err(EvalError::NegativeFactorial { value });
                }
                if value > MAX_FACTORIAL_OPERAND {
                    return Err(EvalError::FactorialOverflow { value });
                }

                Ok((2..=value).product())
            },
        }
    }
}
