use tracing::{debug, trace};

use crate::{
    ast::Expr,
    error::{Error, ParseError},
    interpreter::{evaluator::core::Environment, lexer::tokenize, parser::core::parse},
};

/// An interpreter session.
///
/// Owns the variable [`Environment`] for as long as the session lives, so a
/// variable assigned on one line can be read on any later line. Sessions are
/// independent of each other; serving several users at once means giving
/// each one its own `Interpreter`.
#[derive(Debug, Default)]
pub struct Interpreter {
    environment: Environment,
}

impl Interpreter {
    /// Creates a session with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interprets one line and returns its result as text.
    ///
    /// A line starting with `render` returns the tree diagram of the rest of
    /// the line. Any other line is evaluated and its integer result is
    /// returned in decimal. Assignments return the assigned value.
    ///
    /// # Errors
    /// Returns an [`Error`] wrapping the lexing, parsing or evaluation failure.
    /// Empty or whitespace-only input fails with
    /// [`ParseError::EmptyExpression`]. A failing assignment does not change
    /// the session's variables.
    ///
    /// # Examples
    /// ```
    /// use calclang::Interpreter;
    ///
    /// let mut interpreter = Interpreter::new();
    ///
    /// assert_eq!(interpreter.interpret("2 + 3 * 4").unwrap(), "14");
    /// assert_eq!(interpreter.interpret("x = 5").unwrap(), "5");
    /// assert_eq!(interpreter.interpret("x + 3").unwrap(), "8");
    /// assert!(interpreter.interpret("10 / 0").is_err());
    /// ```
    pub fn interpret(&mut self, source: &str) -> Result<String, Error> {
        let root = Self::parse_line(source)?;

        if let Expr::Render { inner } = &root {
            return Ok(inner.render());
        }

        let value = self.evaluate(&root)?;
        Ok(value.to_string())
    }

    /// Interprets one line and returns the integer result.
    ///
    /// # Errors
    /// Same as [`Interpreter::interpret`]; additionally a `render` line fails
    /// with [`crate::error::EvalError::RenderNotEvaluable`].
    pub fn interpret_as_int(&mut self, source: &str) -> Result<i32, Error> {
        let root = Self::parse_line(source)?;
        self.evaluate(&root)
    }

    /// Returns the value of a variable in this session, if it is bound.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<i32> {
        self.environment.get(name)
    }

    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Forgets every variable of this session.
    pub fn reset(&mut self) {
        debug!(count = self.environment.len(), "clearing environment");
        self.environment.clear();
    }

    fn parse_line(source: &str) -> Result<Expr, Error> {
        if source.trim().is_empty() {
            return Err(ParseError::EmptyExpression.into());
        }

        let tokens = tokenize(source)?;
        trace!(count = tokens.len(), "tokenized");

        let root = parse(&tokens)?;
        debug!(input = source, root = root.kind_name(), "parsed");
        Ok(root)
    }

    fn evaluate(&mut self, root: &Expr) -> Result<i32, Error> {
        self.environment.eval(root).map_err(|e| {
                                        debug!(error = %e, "evaluation failed");
                                        Error::from(e)
                                    })
    }
}
