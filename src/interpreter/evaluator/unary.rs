use crate::ast::UnaryOperator;

/// Evaluates a unary operation on a value.
///
/// Supported operators:
/// - `Negate`: numeric negation.
///
/// # Example
/// ```
/// use calctree::{ast::UnaryOperator, interpreter::evaluator::unary::eval_unary};
///
/// assert_eq!(eval_unary(UnaryOperator::Negate, 5.0), -5.0);
/// ```
#[must_use]
pub fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
    match op {
        UnaryOperator::Negate => -value,
    }
}
