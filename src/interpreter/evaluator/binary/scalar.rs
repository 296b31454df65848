use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::evaluator::core::{EvalResult, Environment},
};

impl Environment {
    /// Evaluates `+`, `-`, `*`, `/` and `%`.
    ///
    /// Division and remainder truncate toward zero, so `-7 / 2` is `-3` and
    /// `-7 % 2` is `-1`. All operations wrap on overflow; in particular
    /// `i32::MIN / -1` is `i32::MIN` and `i32::MIN % -1` is `0`.
    ///
    /// # Errors
    /// - [`EvalError::DivisionByZero`] for `/` with a zero right operand.
    /// - [`EvalError::ModuloByZero`] for `%` with a zero right operand.
    pub(crate) fn eval_scalar(op: BinaryOperator, left: i32, right: i32) -> EvalResult<i32> {
        match op {
            BinaryOperator::Add => Ok(left.wrapping_add(right)),
            BinaryOperator::Sub => Ok(left.wrapping_sub(right)),
            BinaryOperator::Mul => Ok(left.wrapping_mul(right)),
            BinaryOperator::Div => {
                if right == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(left.wrapping_div(right))
            },
            BinaryOperator::Mod => {
                if right == 0 {
                    return Err(EvalError::ModuloByZero);
                }
                Ok(left.wrapping_rem(right))
            },
            BinaryOperator::Pow => Self::eval_pow(left, right),
        }
    }
}
