use thiserror::Error;

/// Errors raised by actor health operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActorError {
    /// A damage or heal amount was negative.
    #[error("invalid argument: {operation} amount must be non-negative, got {amount}")]
    InvalidArgument {
        operation: &'static str,
        amount: i32,
    },
}
