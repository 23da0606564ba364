use crate::hypothesis::Hypothesis;
use crate::types::{Pair, Verdict};
use mentis_symbolic::SymbolicError;
use tracing::{error, info};

/// Exact symbolic tester: binds `x` and checks the residual simplifies to zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct Scorer;

impl Scorer {
    pub fn new() -> Self {
        Self
    }

    /// Test a hypothesis on one pair. Failures are logged and reported as
    /// [`Verdict::Unevaluable`]; they never propagate.
    pub fn test(&self, hypothesis: &Hypothesis, pair: &Pair) -> Verdict {
        match Self::evaluate(hypothesis, pair) {
            Ok(true) => {
                info!(
                    hypothesis = %hypothesis.label,
                    x = %pair.x,
                    y = %pair.y,
                    result = 1.0,
                    "hypothesis tested"
                );
                Verdict::Holds
            }
            Ok(false) => {
                info!(
                    hypothesis = %hypothesis.label,
                    x = %pair.x,
                    y = %pair.y,
                    result = 0.0,
                    "hypothesis tested"
                );
                Verdict::Fails
            }
            Err(e) => {
                error!(
                    hypothesis = %hypothesis.label,
                    pair = %pair,
                    error = %e,
                    "hypothesis test failed"
                );
                Verdict::Unevaluable(e)
            }
        }
    }

    /// 1.0 if the hypothesis holds on `pair`, else 0.0.
    pub fn score(&self, hypothesis: &Hypothesis, pair: &Pair) -> f64 {
        self.test(hypothesis, pair).score()
    }

    fn evaluate(hypothesis: &Hypothesis, pair: &Pair) -> Result<bool, SymbolicError> {
        let x = pair.x.to_expr()?;
        let bound = hypothesis.expression.subs(&hypothesis.variable, &x);
        Ok(bound.simplify()?.is_zero())
    }
}
