/// Parses a run of ASCII digits as an `i32`.
///
/// ## Errors
/// Returns `Err(error)` if the text is not a valid integer or does not fit in
/// an `i32`.
///
/// ## Example
/// ```
/// use calclang::util::num::parse_i32_literal;
///
/// assert_eq!(parse_i32_literal("2147483647", "too big!"), Ok(i32::MAX));
/// assert_eq!(parse_i32_literal("2147483648", "too big!"), Err("too big!"));
/// ```
pub fn parse_i32_literal<E>(literal: &str, error: E) -> Result<i32, E> {
    literal.parse().map_err(|_| error)
}

/// Converts an `i32` to `u32` if and only if it is non-negative.
///
/// ## Errors
/// Returns `Err(error)` for negative values.
///
/// ## Example
/// ```
/// use calclang::util::num::i32_to_u32_checked;
///
/// assert_eq!(i32_to_u32_checked(12, "negative"), Ok(12));
/// assert_eq!(i32_to_u32_checked(-1, "negative"), Err("negative"));
/// ```
pub fn i32_to_u32_checked<E>(value: i32, error: E) -> Result<u32, E> {
    u32::try_from(value).map_err(|_| error)
}
