/// Errors raised while building, substituting into, or simplifying an expression.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SymbolicError {
    #[error("non-finite value cannot be represented exactly: {0}")]
    NonFinite(f64),
    #[error("arithmetic overflow during {0}")]
    Overflow(&'static str),
    #[error("division by zero")]
    DivisionByZero,
    #[error("unbound symbol: {0}")]
    UnboundSymbol(String),
}
