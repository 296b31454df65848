use crate::{
    ast::BinaryOperator,
    interpreter::evaluator::core::{EvalResult, Environment},
};

impl Environment {
    /// Evaluates a binary operation on two already evaluated operands.
    ///
    /// Dispatches to the scalar operators (`+ - * / %`) or to
    /// exponentiation (`^`). Results wrap on 32-bit overflow.
    ///
    /// # Example
    /// ```
    /// use calclang::{ast::BinaryOperator, interpreter::evaluator::core::Environment};
    ///
    /// assert_eq!(Environment::eval_binary(BinaryOperator::Sub, 7, 10), Ok(-3));
    /// assert_eq!(Environment::eval_binary(BinaryOperator::Div, -7, 2), Ok(-3));
    /// assert_eq!(Environment::eval_binary(BinaryOperator::Pow, 2, 10), Ok(1024));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: i32, right: i32) -> EvalResult<i32> {
        match op {
            BinaryOperator::Add
            | BinaryOperator::Sub
            | BinaryOperator::Mul
            | BinaryOperator::Div
            | BinaryOperator::Mod => Self::eval_scalar(op, left, right),
            BinaryOperator::Pow => Self::eval_pow(left, right),
        }
    }
}
