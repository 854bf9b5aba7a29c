/// Core evaluation logic.
///
/// Walks a tree node by node and dispatches to the operator helpers. Also
/// makes evaluation total over absent subtrees.
pub mod core;

/// Unary operator evaluation.
///
/// Handles operations that take a single operand, such as negation.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements the four arithmetic operators and the division-by-zero check.
pub mod binary;
