use crate::ast::Expr;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE_INDENT: &str = "│   ";
const SPACE_INDENT: &str = "    ";

impl Expr {
    /// Draws the tree below this node with box-drawing connectors.
    ///
    /// Every node contributes one line, and every line ends with `\n`. The
    /// root is drawn as the last (and only) child of an empty prefix. Binary
    /// operations list the left operand first and the right operand last. A
    /// `Render` node carries no line of its own and draws its inner
    /// expression. Rendering never fails.
    ///
    /// # Example
    /// ```
    /// use calclang::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::binary(Expr::Number { value: 2 },
    ///                         BinaryOperator::Add,
    ///                         Expr::Number { value: 3 });
    ///
    /// assert_eq!(expr.render(),
    ///            "└── BinaryOp(+)\n    ├── Number(2)\n    └── Number(3)\n");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_tree(&mut out, "", true);
        out
    }

    fn render_tree(&self, out: &mut String, prefix: &str, is_last: bool) {
        if let Self::Render { inner } = self {
            inner.render_tree(out, prefix, is_last);
            return;
        }

        out.push_str(prefix);
        out.push_str(if is_last { LAST_BRANCH } else { BRANCH });
        out.push_str(&self.label());
        out.push('\n');

        let child_prefix = format!("{prefix}{}", if is_last { SPACE_INDENT } else { PIPE_INDENT });
        match self {
            Self::Number { .. } | Self::Variable { .. } | Self::Render { .. } => {},
            Self::UnaryOp { operand, .. } => operand.render_tree(out, &child_prefix, true),
            Self::BinaryOp { left, right, .. } => {
                left.render_tree(out, &child_prefix, false);
                right.render_tree(out, &child_prefix, true);
            },
            Self::Assignment { value, .. } => value.render_tree(out, &child_prefix, true),
        }
    }

    /// The text of this node's own line, without connector.
    fn label(&self) -> String {
        match self {
            Self::Number { value } => format!("Number({value})"),
            Self::Variable { name } => format!("Variable({name})"),
            Self::UnaryOp { op, .. } => format!("UnaryOp({op})"),
            Self::BinaryOp { op, .. } => format!("BinaryOp({op})"),
            Self::Assignment { name, .. } => format!("Assignment({name})"),
            Self::Render { .. } => "Render".to_string(),
        }
    }
}
