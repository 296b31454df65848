use std::collections::HashMap;

use tracing::trace;

use crate::{ast::Expr, error::EvalError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Stores the variables of one interpreter session.
///
/// Maps each name to the value it was last assigned. The environment is only
/// written by assignments and only read by variable references.
///
/// ## Usage
///
/// An `Environment` is created once per session and reused for every line,
/// so assignments stay visible to later lines.
///
/// ```
/// use calclang::{
///     ast::{BinaryOperator, Expr},
///     interpreter::evaluator::core::Environment,
/// };
///
/// let mut env = Environment::new();
/// let assign = Expr::Assignment { name:  "x".to_string(),
///                                 value: Box::new(Expr::Number { value: 5 }), };
/// let add = Expr::binary(Expr::Variable { name: "x".to_string() },
///                        BinaryOperator::Add,
///                        Expr::Number { value: 3 });
///
/// assert_eq!(env.eval(&assign), Ok(5));
/// assert_eq!(env.eval(&add), Ok(8));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Environment {
    variables: HashMap<String, i32>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i32> {
        self.variables.get(name).copied()
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Removes every binding.
    pub fn clear(&mut self) {
        self.variables.clear();
    }

    /// All bindings, sorted by name.
    #[must_use]
    pub fn bindings(&self) -> Vec<(&str, i32)> {
        let mut bindings: Vec<_> = self.variables
                                       .iter()
                                       .map(|(name, value)| (name.as_str(), *value))
                                       .collect();
        bindings.sort_unstable_by_key(|(name, _)| *name);
        bindings
    }

    /// Evaluates an expression and returns the resulting integer.
    ///
    /// This is the main entry point for evaluation. Operands are evaluated
    /// left before right. An assignment evaluates its right-hand side
    /// completely before storing it, so a failing right-hand side leaves
    /// the environment untouched.
    ///
    /// # Errors
    /// - [`EvalError::UndefinedVariable`] for a name that was never assigned.
    /// - [`EvalError::RenderNotEvaluable`] for a `render` node; those must be
    ///   drawn with [`Expr::render`] instead.
    /// - Any arithmetic error raised by the operators.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<i32> {
        match expr {
            Expr::Number { value } => Ok(*value),
            Expr::Variable { name } => self.eval_variable(name),
            Expr::Assignment { name, value } => {
                let value = self.eval(value)?;
                trace!(name = name.as_str(), value, "assign");
                self.variables.insert(name.clone(), value);
                Ok(value)
            },
            Expr::UnaryOp { op, operand } => {
                let operand = self.eval(operand)?;
                Self::eval_unary(*op, operand)
            },
            Expr::BinaryOp { left, op, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right)
            },
            Expr::Render { .. } => Err(EvalError::RenderNotEvaluable),
        }
    }

    fn eval_variable(&self, name: &str) -> EvalResult<i32> {
        self.get(name)
            .ok_or_else(|| EvalError::UndefinedVariable { name: name.to_string() })
    }
}
