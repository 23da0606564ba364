use crate::types::Pair;
use mentis_symbolic::{Expr, SymbolicError};

/// Label of the square-law hypothesis.
pub const SQUARE_LAW_LABEL: &str = "n^2 = y";

/// A candidate rule, stated as an expression that vanishes when the rule holds.
#[derive(Clone, Debug, PartialEq)]
pub struct Hypothesis {
    pub label: String,
    /// Free variable bound to `x` at test time.
    pub variable: String,
    /// Residual expression with `y` already substituted in.
    pub expression: Expr,
}

impl Hypothesis {
    pub fn new(label: impl Into<String>, variable: impl Into<String>, expression: Expr) -> Self {
        Self {
            label: label.into(),
            variable: variable.into(),
            expression,
        }
    }
}

/// Source of hypotheses for an observation.
pub trait HypothesisForm: Send + Sync {
    /// Label under which this form's scores are stored.
    fn label(&self) -> &str;

    /// Build the hypothesis for one pair. Fails if `y` cannot be represented exactly.
    fn propose(&self, pair: &Pair) -> Result<Hypothesis, SymbolicError>;
}

/// The fixed form `y = n^2`, expressed as the residual `n^2 - y`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SquareLaw;

impl HypothesisForm for SquareLaw {
    fn label(&self) -> &str {
        SQUARE_LAW_LABEL
    }

    fn propose(&self, pair: &Pair) -> Result<Hypothesis, SymbolicError> {
        let y = pair.y.to_expr()?;
        Ok(Hypothesis::new(
            SQUARE_LAW_LABEL,
            "n",
            Expr::symbol("n").pow(2) - y,
        ))
    }
}

/// Form that always fails to build, for exercising error paths.
#[derive(Clone, Debug)]
pub struct FailingForm {
    label: String,
}

impl FailingForm {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl HypothesisForm for FailingForm {
    fn label(&self) -> &str {
        &self.label
    }

    fn propose(&self, _pair: &Pair) -> Result<Hypothesis, SymbolicError> {
        Err(SymbolicError::UnboundSymbol("n".into()))
    }
}
