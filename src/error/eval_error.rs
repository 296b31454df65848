#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a syntax tree.
pub enum EvalError {
    /// Tried to read a variable that was never assigned.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Attempted remainder by zero.
    ModuloByZero,
    /// Factorial of a negative operand.
    NegativeFactorial {
        /// The operand.
        value: i32,
    },
    /// Factorial whose result does not fit in a 32-bit signed integer.
    FactorialOverflow {
        /// The operand.
        value: i32,
    },
    /// Integer exponentiation with a negative exponent.
    NegativeExponent {
        /// The exponent.
        value: i32,
    },
    /// A `render` expression was handed to the evaluator.
    RenderNotEvaluable,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "Undefined variable: {name}"),
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::ModuloByZero => write!(f, "Modulo by zero"),
            Self::NegativeFactorial { value } => {
                write!(f, "Factorial of negative number {value} is not defined")
            },
            Self::FactorialOverflow { value } => write!(f,
                                                        "Factorial of {value} is too large for a 32-bit integer (maximum operand is 12)"),
            Self::NegativeExponent { value } => write!(f,
                                                       "Negative exponent {value} is not supported for integers"),
            Self::RenderNotEvaluable => {
                write!(f, "A render expression cannot be evaluated to an integer")
            },
        }
    }
}

impl std::error::Error for EvalError {}
