/// Numeric conversion helpers.
///
/// This module provides checked conversions used by the parser and the
/// evaluator, so that out of range values become errors instead of silently
/// wrapping.
pub mod num;
