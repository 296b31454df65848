/// Operator dispatch.
pub mod core;

/// Addition, subtraction, multiplication, division and remainder.
pub mod scalar;

/// Integer exponentiation.
pub mod power;
