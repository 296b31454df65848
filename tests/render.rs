use calclang::{Interpreter, ast::Expr};

fn render(src: &str) -> String {
    Interpreter::new().interpret(&format!("render {src}"))
                      .unwrap_or_else(|e| panic!("`render {src}` failed: {e}"))
}

#[test]
fn single_number() {
    assert_eq!(render("42"), "└── Number(42)\n");
}

#[test]
fn nested_precedence() {
    assert_eq!(render("1 + 2 * 3"),
               "└── BinaryOp(+)\n    ├── Number(1)\n    └── BinaryOp(*)\n        ├── Number(2)\n        └── Number(3)\n");
}

#[test]
fn left_subtree_uses_vertical_bar() {
    assert_eq!(render("(5 + 3) * 2"),
               "└── BinaryOp(*)\n    ├── BinaryOp(+)\n    │   ├── Number(5)\n    │   └── Number(3)\n    └── Number(2)\n");
}

#[test]
fn factorial_has_one_child() {
    assert_eq!(render("!3 + 2"),
               "└── BinaryOp(+)\n    ├── UnaryOp(!)\n    │   └── Number(3)\n    └── Number(2)\n");
}

#[test]
fn unary_minus_is_drawn_as_subtraction() {
    assert_eq!(render("-n"), "└── BinaryOp(-)\n    ├── Number(0)\n    └── Variable(n)\n");
}

#[test]
fn exponent_chain_leans_right() {
    assert_eq!(render("2 ^ 3 ^ 2"),
               "└── BinaryOp(^)\n    ├── Number(2)\n    └── BinaryOp(^)\n        ├── Number(3)\n        └── Number(2)\n");
}

#[test]
fn assignment_node() {
    let expr = Expr::Assignment { name:  "x".to_string(),
                                  value: Box::new(Expr::Number { value: 5 }), };

    assert_eq!(expr.render(), "└── Assignment(x)\n    └── Number(5)\n");
}

#[test]
fn render_node_draws_only_its_inner_expression() {
    let inner = Expr::Variable { name: "y".to_string() };
    let wrapped = Expr::Render { inner: Box::new(inner.clone()) };

    assert_eq!(wrapped.render(), inner.render());
}

#[test]
fn rendering_does_not_touch_variables() {
    let mut interpreter = Interpreter::new();

    interpreter.interpret("render x").unwrap();
    assert!(interpreter.environment().is_empty());
}
