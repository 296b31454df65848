use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{binary::parse_additive, statement::parse_root},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token sequence into a single AST root.
///
/// The whole sequence must be consumed: anything left over after the root
/// expression, other than the final end-of-input marker, is an error.
///
/// # Errors
/// - [`ParseError::EmptyExpression`] if the sequence holds no tokens besides
///   end-of-input.
/// - [`ParseError::UnexpectedClosingParen`] if a stray `)` follows a complete
///   expression.
/// - [`ParseError::UnexpectedTrailingTokens`] for any other leftover token.
/// - Any error raised while parsing the expression itself.
///
/// # Example
/// ```
/// use calclang::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::tokenize, parser::core::parse},
/// };
///
/// let tokens = tokenize("2 ^ 3 ^ 2").unwrap();
/// let root = parse(&tokens).unwrap();
///
/// assert_eq!(root,
///            Expr::binary(Expr::Number { value: 2 },
///                         BinaryOperator::Pow,
///                         Expr::binary(Expr::Number { value: 3 },
///                                      BinaryOperator::Pow,
///                                      Expr::Number { value: 2 })));
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();

    if iter.peek().is_none_or(|token| token.is(TokenKind::EndOfInput)) {
        return Err(ParseError::EmptyExpression);
    }

    let root = parse_root(&mut iter)?;
    expect_end_of_input(&mut iter)?;

    Ok(root)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := additive`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_additive(tokens)
}

/// Checks that nothing but the end-of-input marker is left.
///
/// A leftover `)` is reported separately, since it always means the
/// parentheses are unbalanced.
fn expect_end_of_input<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.peek() {
        None => Ok(()),
        Some(token) => match token.kind {
            TokenKind::EndOfInput => Ok(()),
            TokenKind::RightParen => {
                Err(ParseError::UnexpectedClosingParen { position: token.position })
            },
            _ => Err(ParseError::UnexpectedTrailingTokens { token:    token.to_string(),
                                                            position: token.position, }),
        },
    }
}
