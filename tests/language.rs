use std::fs;

use calclang::{
    Error, Interpreter,
    error::{EvalError, LexError, ParseError},
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_calc_blocks(&content).into_iter().enumerate() {
            let mut interpreter = Interpreter::new();
            for line in code.lines().filter(|l| !l.trim().is_empty()) {
                count += 1;
                let (source, expected) = match line.split_once("# =>") {
                    Some((source, expected)) => (source, Some(expected.trim())),
                    None => (line, None),
                };
                match interpreter.interpret(source) {
                    Ok(output) => {
                        if let Some(expected) = expected {
                            assert_eq!(output, expected,
                                       "calc example {} in {:?}: `{}`",
                                       i + 1,
                                       path,
                                       source.trim());
                        }
                    },
                    Err(e) => panic!("calc example {} in {:?} failed:\n{}\nError: {:?}",
                                     i + 1,
                                     path,
                                     source,
                                     e),
                }
            }
        }
    }

    assert!(count > 0, "No calc examples found in book/src");
}

fn extract_calc_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```calc") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn eval(src: &str) -> String {
    Interpreter::new().interpret(src)
                      .unwrap_or_else(|e| panic!("`{src}` failed: {e}"))
}

fn eval_err(src: &str) -> Error {
    match Interpreter::new().interpret(src) {
        Ok(output) => panic!("`{src}` succeeded with {output} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn integer_literals_evaluate_to_themselves() {
    for literal in ["0", "7", "42", "1000", "2147483647"] {
        assert_eq!(eval(literal), literal);
    }
    assert_eq!(eval("007"), "7");
}

#[test]
fn basic_operations() {
    assert_eq!(eval("2 + 3"), "5");
    assert_eq!(eval("10 - 4"), "6");
    assert_eq!(eval("3 * 4"), "12");
    assert_eq!(eval("12 / 3"), "4");
    assert_eq!(eval("10 % 3"), "1");
    assert_eq!(eval("2 ^ 3"), "8");
}

#[test]
fn operator_precedence() {
    assert_eq!(eval("2 + 3 * 4"), "14");
    assert_eq!(eval("(2 + 3) * 4"), "20");
    assert_eq!(eval("1 * 2 + 3 * 2 + 1"), "9");
    assert_eq!(eval("2 * 3 ^ 2"), "18");
    assert_eq!(eval("((2 * 3) + (4 * 5)) - (3 - 1)"), "24");
}

#[test]
fn left_associative_chains() {
    assert_eq!(eval("10 - 4 - 3"), "3");
    assert_eq!(eval("100 / 10 / 5"), "2");
    assert_eq!(eval("17 % 10 % 4"), "3");
}

#[test]
fn exponentiation_is_right_associative() {
    assert_eq!(eval("2 ^ 3 ^ 2"), "512");
    assert_eq!(eval("2 ^ 2 ^ 2 ^ 2"), "65536");
    assert_eq!(eval("(2 ^ 3) ^ 2"), "64");
}

#[test]
fn factorial_bounds() {
    assert_eq!(eval("!0"), "1");
    assert_eq!(eval("!1"), "1");
    assert_eq!(eval("!10"), "3628800");
    assert_eq!(eval("!12"), "479001600");
    assert_eq!(eval("!3 + !5"), "126");

    assert_eq!(eval_err("!13"),
               Error::Eval(EvalError::FactorialOverflow { value: 13 }));
    assert_eq!(eval_err("!(-1)"),
               Error::Eval(EvalError::NegativeFactorial { value: -1 }));
    assert_eq!(eval_err("!-1"),
               Error::Eval(EvalError::NegativeFactorial { value: -1 }));
}

#[test]
fn division_and_modulo_by_zero() {
    assert_eq!(eval_err("10 / 0"), Error::Eval(EvalError::DivisionByZero));
    assert_eq!(eval_err("10 % 0"), Error::Eval(EvalError::ModuloByZero));
    assert_eq!(eval_err("1 / (2 - 2)"), Error::Eval(EvalError::DivisionByZero));
}

#[test]
fn division_truncates_toward_zero() {
    assert_eq!(eval("-7 / 2"), "-3");
    assert_eq!(eval("7 / -2"), "-3");
    assert_eq!(eval("-7 % 2"), "-1");
    assert_eq!(eval("7 % -2"), "1");
}

#[test]
fn negative_exponent_is_rejected() {
    assert_eq!(eval_err("2 ^ -1"),
               Error::Eval(EvalError::NegativeExponent { value: -1 }));
    assert_eq!(eval("0 ^ 0"), "1");
    assert_eq!(eval("-3 ^ 3"), "-27");
}

#[test]
fn arithmetic_wraps_on_overflow() {
    assert_eq!(eval("2147483647 + 1"), "-2147483648");
    assert_eq!(eval("-2147483647 - 2"), "2147483647");
    assert_eq!(eval("65536 * 65536"), "0");
    assert_eq!(eval("2 ^ 31"), "-2147483648");
    assert_eq!(eval("(-2147483647 - 1) / -1"), "-2147483648");
    assert_eq!(eval("(-2147483647 - 1) % -1"), "0");
}

#[test]
fn oversized_literal_is_a_parse_error() {
    assert_eq!(eval_err("2147483648"),
               Error::Parse(ParseError::LiteralTooLarge { literal:  "2147483648".to_string(),
                                                          position: 0, }));
}

#[test]
fn assignment_persists_across_calls() {
    let mut interpreter = Interpreter::new();

    assert_eq!(interpreter.interpret("x = 5").unwrap(), "5");
    assert_eq!(interpreter.interpret("x + 3").unwrap(), "8");
    assert_eq!(interpreter.interpret("x = x * 2").unwrap(), "10");
    assert_eq!(interpreter.variable("x"), Some(10));
    assert_eq!(interpreter.interpret("y_1 = !x / 100000").unwrap(), "36");
    assert_eq!(interpreter.environment().bindings(), [("x", 10), ("y_1", 36)]);
}

#[test]
fn undefined_variable() {
    assert_eq!(eval_err("x + 1"),
               Error::Eval(EvalError::UndefinedVariable { name: "x".to_string() }));
    assert_eq!(eval_err("renderer"),
               Error::Eval(EvalError::UndefinedVariable { name: "renderer".to_string() }));
}

#[test]
fn failed_assignment_leaves_environment_unchanged() {
    let mut interpreter = Interpreter::new();

    interpreter.interpret("x = 5").unwrap();
    assert!(interpreter.interpret("x = 1 / 0").is_err());
    assert_eq!(interpreter.interpret("x").unwrap(), "5");

    assert!(interpreter.interpret("y = y + 1").is_err());
    assert_eq!(interpreter.variable("y"), None);
}

#[test]
fn sessions_are_independent() {
    let mut first = Interpreter::new();
    let mut second = Interpreter::new();

    first.interpret("x = 1").unwrap();
    assert!(second.interpret("x").is_err());
}

#[test]
fn reset_forgets_variables() {
    let mut interpreter = Interpreter::new();

    interpreter.interpret("x = 1").unwrap();
    interpreter.reset();
    assert!(interpreter.environment().is_empty());
    assert!(interpreter.interpret("x").is_err());
}

#[test]
fn render_returns_tree_not_value() {
    let output = eval("render 2 + 3");

    assert_eq!(output, "└── BinaryOp(+)\n    ├── Number(2)\n    └── Number(3)\n");
    assert!(output.parse::<i32>().is_err());
}

#[test]
fn render_uses_variables_without_evaluating_them() {
    assert_eq!(eval("render x * 2"),
               "└── BinaryOp(*)\n    ├── Variable(x)\n    └── Number(2)\n");
    assert_eq!(eval("render 1 / 0"),
               "└── BinaryOp(/)\n    ├── Number(1)\n    └── Number(0)\n");
}

#[test]
fn render_cannot_be_evaluated_as_int() {
    let mut interpreter = Interpreter::new();

    assert_eq!(interpreter.interpret_as_int("(2 + 3) * 4"), Ok(20));
    assert_eq!(interpreter.interpret_as_int("render 2 + 3"),
               Err(Error::Eval(EvalError::RenderNotEvaluable)));
}

#[test]
fn parenthesis_balance() {
    assert!(matches!(eval_err("(2 + 3"),
                     Error::Parse(ParseError::ExpectedClosingParen { position: 6 })));

    let err = eval_err("2 + 3)");
    assert_eq!(err, Error::Parse(ParseError::UnexpectedClosingParen { position: 5 }));
    assert!(err.to_string().contains("Unexpected closing parenthesis"));
}

#[test]
fn empty_input() {
    assert_eq!(eval_err(""), Error::Parse(ParseError::EmptyExpression));
    assert_eq!(eval_err("   \t "), Error::Parse(ParseError::EmptyExpression));
}

#[test]
fn invalid_character() {
    let err = eval_err("10 $ 20");

    assert_eq!(err,
               Error::Lex(LexError::UnexpectedCharacter { character: '$',
                                                          position:  3, }));
    assert!(err.to_string().contains('$'));
}

#[test]
fn grammar_violations() {
    assert!(matches!(eval_err("10 +"),
                     Error::Parse(ParseError::UnexpectedEndOfInput { .. })));
    assert!(matches!(eval_err("10 20"),
                     Error::Parse(ParseError::UnexpectedTrailingTokens { .. })));
    assert!(matches!(eval_err("* 3"), Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(eval_err("()"), Error::Parse(ParseError::UnexpectedToken { .. })));
    assert!(matches!(eval_err("5 = 3"),
                     Error::Parse(ParseError::UnexpectedTrailingTokens { .. })));
    assert!(matches!(eval_err("x = y = 3"),
                     Error::Parse(ParseError::UnexpectedTrailingTokens { .. })));
    assert!(matches!(eval_err("render"),
                     Error::Parse(ParseError::UnexpectedEndOfInput { .. })));
    assert!(matches!(eval_err("render x = 5"),
                     Error::Parse(ParseError::UnexpectedTrailingTokens { .. })));
    assert!(matches!(eval_err("2 + render 3"),
                     Error::Parse(ParseError::UnexpectedToken { .. })));
}

#[test]
fn error_messages_name_the_problem() {
    assert_eq!(eval_err("10 / 0").to_string(), "Division by zero");
    assert_eq!(eval_err("10 % 0").to_string(), "Modulo by zero");
    assert_eq!(eval_err("nope").to_string(), "Undefined variable: nope");
    assert_eq!(eval_err("").to_string(), "Empty expression");
}

#[test]
fn whitespace_is_ignored() {
    assert_eq!(eval("\t2 +\t3 "), "5");
    assert_eq!(eval("  x_= 4"), "4");
}
