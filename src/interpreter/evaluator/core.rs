use tracing::debug;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::{binary::eval_binary, unary::eval_unary},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a possibly absent tree.
///
/// Stage snapshots may be absent or contain absent subtrees; evaluating one
/// reports [`RuntimeError::MissingOperand`] instead of guessing a value.
///
/// # Example
/// ```
/// use calctree::{ast_build, error::RuntimeError, interpreter::evaluator::core::evaluate};
///
/// let ast = ast_build("6 / 4").unwrap();
/// assert_eq!(evaluate(Some(&ast)), Ok(1.5));
/// assert_eq!(evaluate(None), Err(RuntimeError::MissingOperand));
/// ```
pub fn evaluate(node: Option<&Expr>) -> EvalResult<f64> {
    let node = node.ok_or(RuntimeError::MissingOperand)?;
    let result = node.evaluate();
    debug!(?result, "evaluated expression");
    result
}

impl Expr {
    /// Reduces this tree to a number.
    ///
    /// Operands are evaluated left to right. Division fails with
    /// [`RuntimeError::DivisionByZero`] when the right operand is zero; it
    /// never produces an infinity.
    ///
    /// # Errors
    /// `DivisionByZero`, or `MissingOperand` when any subtree is absent.
    pub fn evaluate(&self) -> EvalResult<f64> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::BinaryOp { op, left, right } => {
                let left = evaluate_child(left.as_deref())?;
                let right = evaluate_child(right.as_deref())?;
                eval_binary(*op, left, right)
            },
            Self::UnaryOp { op, operand } => {
                let operand = evaluate_child(operand.as_deref())?;
                Ok(eval_unary(*op, operand))
            },
        }
    }
}

fn evaluate_child(node: Option<&Expr>) -> EvalResult<f64> {
    node.ok_or(RuntimeError::MissingOperand)?.evaluate()
}
