/// Core parsing logic.
///
/// Holds the [`core::Parser`] state, the strict/tolerant [`core::ParseMode`]
/// switch and the entry points that parse a whole expression.
pub mod core;

/// Binary operator parsing.
///
/// Implements the left-associative additive and multiplicative levels of the
/// grammar.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Handles prefix negation, numeric literals and parenthesized groups, which
/// is where tolerant parsing recovers from missing operands.
pub mod unary;
