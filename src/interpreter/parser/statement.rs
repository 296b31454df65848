use std::iter::Peekable;

use crate::{
    ast::Expr,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses the root of a line.
///
/// A root may be one of:
/// - a render request (`render <expression>`),
/// - an assignment (`<identifier> = <expression>`),
/// - a plain expression.
///
/// Parsing is attempted in that order; the first matching construct is
/// returned. The caller checks that no tokens are left afterwards.
pub(in crate::interpreter::parser) fn parse_root<'a, I>(tokens: &mut Peekable<I>)
                                                        -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(expr) = parse_render(tokens)? {
        return Ok(expr);
    }
    if let Some(expr) = parse_assignment(tokens)? {
        return Ok(expr);
    }

    parse_expression(tokens)
}

/// Parses `render <expression>`.
///
/// If the next token is not the `render` keyword, returns `Ok(None)` and
/// does not consume any input. The wrapped expression may not itself be an
/// assignment.
fn parse_render<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Expr>>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(token) = tokens.peek()
       && token.is(TokenKind::RenderKeyword)
    {
        tokens.next();
        let inner = parse_expression(tokens)?;
        return Ok(Some(Expr::Render { inner: Box::new(inner) }));
    }

    Ok(None)
}

/// Parses an assignment of the form `<identifier> = <expression>`.
///
/// The function performs a two-token lookahead on a saved copy of the
/// cursor. If the identifier is not followed by `=`, the cursor is restored
/// and `Ok(None)` is returned, so the identifier is later read as a variable
/// reference.
///
/// # Errors
/// Propagates any error from parsing the right-hand side.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Expr>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let saved = tokens.clone();

    if let Some(name) = tokens.next_if(|token| token.is(TokenKind::Identifier))
       && tokens.next_if(|token| token.is(TokenKind::Assign)).is_some()
    {
        let value = parse_expression(tokens)?;
        return Ok(Some(Expr::Assignment { name:  name.literal.clone(),
                                          value: Box::new(value), }));
    }

    *tokens = saved;
    Ok(None)
}
