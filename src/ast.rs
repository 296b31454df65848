/// An abstract syntax tree (AST) node representing one parsed expression.
///
/// Every node owns its children, so a parsed line is a plain tree with no
/// sharing. The parser produces exactly one root per line; `Render` only ever
/// appears as that root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Number {
        /// The literal value.
        value: i32,
    },
    /// A prefix unary operation (currently only factorial).
    UnaryOp {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Reference to a variable by name, resolved at evaluation time.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// Binds a name to the value of an expression.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Box<Self>,
    },
    /// Requests a tree diagram of `inner` instead of its value.
    Render {
        /// The expression to draw.
        inner: Box<Self>,
    },
}

impl Expr {
    /// Builds a binary node, boxing both operands.
    /// ## Example
    /// ```
    /// use calclang::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::binary(Expr::Number { value: 2 },
    ///                         BinaryOperator::Add,
    ///                         Expr::Number { value: 3 });
    ///
    /// assert_eq!(expr.kind_name(), "binary operation");
    /// ```
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }

    /// Short human readable name of the node variant, used in log output.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Number { .. } => "number",
            Self::UnaryOp { .. } => "unary operation",
            Self::BinaryOp { .. } => "binary operation",
            Self::Variable { .. } => "variable",
            Self::Assignment { .. } => "assignment",
            Self::Render { .. } => "render",
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Truncating division (`/`)
    Div,
    /// Remainder (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
}

impl BinaryOperator {
    /// Maps an operator character to its operator.
    ///
    /// ## Example
    /// ```
    /// use calclang::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol('^'), Some(BinaryOperator::Pow));
    /// assert_eq!(BinaryOperator::from_symbol('!'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '%' => Some(Self::Mod),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }

    /// The character this operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Mod => '%',
            Self::Pow => '^',
        }
    }
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Prefix factorial (`!n`).
    Factorial,
}

impl UnaryOperator {
    /// The character this operator is written with.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Factorial => '!',
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
