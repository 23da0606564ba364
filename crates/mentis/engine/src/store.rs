use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Exponential smoothing: `prior + rate * (reward - prior)`.
pub fn smooth(prior: f64, reward: f64, rate: f64) -> f64 {
    prior + rate * (reward - prior)
}

/// Before/after values of one re-weighting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Reweight {
    pub prior: f64,
    pub posterior: f64,
}

/// Label → score map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HypothesisStore {
    scores: BTreeMap<String, f64>,
}

impl HypothesisStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a score. Returns the previous value, if any.
    pub fn record(&mut self, label: impl Into<String>, score: f64) -> Option<f64> {
        self.scores.insert(label.into(), score)
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.scores.get(label).copied()
    }

    /// Move a stored score toward `reward`. A missing label starts from 0.0.
    pub fn reweight(&mut self, label: &str, reward: f64, rate: f64) -> Reweight {
        let slot = self.scores.entry(label.to_string()).or_insert(0.0);
        let prior = *slot;
        *slot = smooth(prior, reward, rate);
        Reweight {
            prior,
            posterior: *slot,
        }
    }

    /// Label with the highest score. Ties go to the smallest label; NaN never wins.
    pub fn best(&self) -> Option<&str> {
        self.scores
            .iter()
            .filter(|(_, score)| !score.is_nan())
            .reduce(|best, candidate| {
                if candidate.1.total_cmp(best.1).is_gt() {
                    candidate
                } else {
                    best
                }
            })
            .map(|(label, _)| label.as_str())
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn scores(&self) -> &BTreeMap<String, f64> {
        &self.scores
    }
}
