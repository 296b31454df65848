use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::token_to_binary_operator,
            core::{ParseResult, parse_expression},
        },
    },
    util::num::parse_i32_literal,
};

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - integer literals
/// - variable references
/// - parenthesized expressions
/// - prefix factorial, `!primary`
/// - unary minus, `-primary`, rewritten as `0 - primary`
///
/// Both prefix forms bind to the single primary that follows, so `!3 + 1`
/// is `(!3) + 1` and `-2 ^ 2` is `(0 - 2) ^ 2`.
///
/// Grammar:
/// ```text
///     primary := "!" primary
///              | "-" primary
///              | NUMBER
///              | IDENTIFIER
///              | "(" expression ")"
/// ```
///
/// # Errors
/// - [`ParseError::UnexpectedEndOfInput`] if an operand is missing.
/// - [`ParseError::UnexpectedToken`] for any token that cannot start an
///   operand.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = *tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { position: 0 })?;

    match token.kind {
        TokenKind::Factorial => {
            tokens.next();
            let operand = parse_primary(tokens)?;
            Ok(Expr::UnaryOp { op:      UnaryOperator::Factorial,
                               operand: Box::new(operand), })
        },
        TokenKind::Number => {
            tokens.next();
            parse_number(token)
        },
        TokenKind::Identifier => {
            tokens.next();
            Ok(Expr::Variable { name: token.literal.clone() })
        },
        TokenKind::LeftParen => parse_grouping(tokens),
        TokenKind::Operator if token_to_binary_operator(token) == Some(BinaryOperator::Sub) => {
            tokens.next();
            let operand = parse_primary(tokens)?;
            Ok(Expr::binary(Expr::Number { value: 0 }, BinaryOperator::Sub, operand))
        },
        TokenKind::EndOfInput => {
            Err(ParseError::UnexpectedEndOfInput { position: token.position })
        },
        _ => Err(ParseError::UnexpectedToken { token:    token.to_string(),
                                               position: token.position, }),
    }
}

/// Converts a number token into an [`Expr::Number`].
///
/// # Errors
/// Returns [`ParseError::LiteralTooLarge`] if the digits do not fit in an
/// `i32`.
fn parse_number(token: &Token) -> ParseResult<Expr> {
    let value = parse_i32_literal(&token.literal,
                                  ParseError::LiteralTooLarge { literal:  token.literal.clone(),
                                                                position: token.position, })?;
    Ok(Expr::Number { value })
}

/// Parses a parenthesized expression of the form `( expression )`.
///
/// The parentheses only group; no node is created for them.
///
/// # Errors
/// Returns [`ParseError::ExpectedClosingParen`] if the group is not closed.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    tokens.next();
    let expr = parse_expression(tokens)?;

    match tokens.next() {
        Some(token) if token.is(TokenKind::RightParen) => Ok(expr),
        Some(token) => Err(ParseError::ExpectedClosingParen { position: token.position }),
        None => Err(ParseError::ExpectedClosingParen { position: 0 }),
    }
}
