/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// The right operand of `/` evaluated to zero.
    #[error("Error: Division by zero.")]
    DivisionByZero,
    /// Tried to evaluate a subtree that is absent because parsing stopped
    /// before it was complete.
    #[error("Error: Operand missing. The expression is incomplete.")]
    MissingOperand,
}
