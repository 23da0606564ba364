use mentis_symbolic::{Expr, Rational, SymbolicError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric observation value: an exact integer or a double.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Real(f64),
}

impl Number {
    /// Exact rational value. Reals convert without rounding; non-finite or
    /// out-of-range reals fail.
    pub fn to_rational(&self) -> Result<Rational, SymbolicError> {
        match self {
            Self::Integer(i) => Ok(Rational::integer(*i)),
            Self::Real(r) => Rational::from_f64(*r),
        }
    }

    pub fn to_expr(&self) -> Result<Expr, SymbolicError> {
        self.to_rational().map(Expr::Const)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{}", i),
            // Debug keeps the fractional part: 1.0 renders as "1.0", not "1".
            Self::Real(r) => write!(f, "{:?}", r),
        }
    }
}

/// One observation `(x, y)`. Serialized as a two-element array.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "(Number, Number)", into = "(Number, Number)")]
pub struct Pair {
    pub x: Number,
    pub y: Number,
}

impl Pair {
    pub fn new(x: impl Into<Number>, y: impl Into<Number>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl<X: Into<Number>, Y: Into<Number>> From<(X, Y)> for Pair {
    fn from((x, y): (X, Y)) -> Self {
        Self::new(x, y)
    }
}

impl From<Pair> for (Number, Number) {
    fn from(pair: Pair) -> Self {
        (pair.x, pair.y)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Outcome of testing one hypothesis on one pair.
#[derive(Clone, Debug, PartialEq)]
pub enum Verdict {
    /// The bound expression simplified to the symbolic zero.
    Holds,
    /// The bound expression simplified to something other than zero.
    Fails,
    /// Substitution or simplification failed.
    Unevaluable(SymbolicError),
}

impl Verdict {
    pub fn holds(&self) -> bool {
        matches!(self, Self::Holds)
    }

    /// Initial score: 1.0 when the hypothesis holds, 0.0 otherwise.
    pub fn score(&self) -> f64 {
        if self.holds() {
            1.0
        } else {
            0.0
        }
    }

    /// Reward for the smoothing update: +1.0 when the hypothesis holds, -1.0 otherwise.
    pub fn reward(&self) -> f64 {
        if self.holds() {
            1.0
        } else {
            -1.0
        }
    }
}

/// What happened to one pair during generation.
#[derive(Clone, Debug, PartialEq)]
pub struct PairOutcome {
    pub pair: Pair,
    /// Label recorded for this pair; `None` when the pair was skipped.
    pub label: Option<String>,
    pub verdict: Verdict,
}

impl PairOutcome {
    pub fn was_skipped(&self) -> bool {
        self.label.is_none()
    }
}

/// Result of a generation pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GenerationReport {
    /// Highest-scoring label across the whole store after the pass.
    pub best: Option<String>,
    pub outcomes: Vec<PairOutcome>,
}

impl GenerationReport {
    pub fn skipped(&self) -> usize {
        self.outcomes.iter().filter(|o| o.was_skipped()).count()
    }
}

/// A single smoothing step applied to a stored score.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WeightUpdate {
    pub pair: Pair,
    pub label: String,
    pub prior: f64,
    pub reward: f64,
    pub posterior: f64,
}

/// Result of an update pass.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UpdateReport {
    pub updates: Vec<WeightUpdate>,
    /// Pairs for which no weight was changed.
    pub skipped: Vec<Pair>,
}

impl UpdateReport {
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty() && self.skipped.is_empty()
    }
}
