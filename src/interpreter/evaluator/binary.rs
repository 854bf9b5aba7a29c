use crate::{ast::BinaryOperator, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Evaluates a scalar arithmetic operation.
///
/// Division by zero is checked explicitly; both `0.0` and `-0.0` count as
/// zero.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Example
/// ```
/// use calctree::{
///     ast::BinaryOperator,
///     error::RuntimeError,
///     interpreter::evaluator::binary::eval_binary,
/// };
///
/// assert_eq!(eval_binary(BinaryOperator::Mul, 1.5, 2.0), Ok(3.0));
/// assert_eq!(eval_binary(BinaryOperator::Div, 1.0, 0.0),
///            Err(RuntimeError::DivisionByZero));
/// ```
pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
    Ok(match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
        BinaryOperator::Mul => left * right,
        BinaryOperator::Div => {
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero);
            }
            left / right
        },
    })
}
