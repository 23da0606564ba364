use crate::config::{FailurePolicy, MentisConfig};
use crate::error::MentisError;
use crate::graph::{ConceptGraph, GraphSnapshot};
use crate::hypothesis::{HypothesisForm, SquareLaw};
use crate::scorer::Scorer;
use crate::store::HypothesisStore;
use crate::types::{GenerationReport, Pair, PairOutcome, UpdateReport, Verdict, WeightUpdate};
use mentis_symbolic::SymbolicError;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{error, info};

/// Hypothesis engine: owns the score store and the concept graph.
///
/// All mutating operations take `&mut self`; sharing one engine across
/// threads needs an external lock.
pub struct Mentis {
    config: MentisConfig,
    form: Box<dyn HypothesisForm>,
    scorer: Scorer,
    store: HypothesisStore,
    graph: ConceptGraph,
}

/// Serializable view of the engine state.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MentisSnapshot {
    pub best: Option<String>,
    pub hypotheses: BTreeMap<String, f64>,
    pub graph: GraphSnapshot,
}

impl Mentis {
    /// Engine proposing the square law `y = n^2`.
    pub fn new(config: MentisConfig) -> Self {
        Self::with_form(config, SquareLaw)
    }

    pub fn with_form(config: MentisConfig, form: impl HypothesisForm + 'static) -> Self {
        let graph = ConceptGraph::new(config.edge_policy);
        info!(
            form = form.label(),
            learning_rate = config.learning_rate,
            "Mentis initialized"
        );
        Self {
            config,
            form: Box::new(form),
            scorer: Scorer::new(),
            store: HypothesisStore::new(),
            graph,
        }
    }

    pub fn config(&self) -> &MentisConfig {
        &self.config
    }

    pub fn store(&self) -> &HypothesisStore {
        &self.store
    }

    pub fn graph(&self) -> &ConceptGraph {
        &self.graph
    }

    pub fn score(&self, label: &str) -> Option<f64> {
        self.store.get(label)
    }

    /// Label with the highest stored score.
    pub fn best_hypothesis(&self) -> Option<&str> {
        self.store.best()
    }

    /// Score the hypothesis on every pair, overwriting its stored score each
    /// time, and return the best label across the whole store.
    pub fn hypothesize(&mut self, pairs: &[Pair]) -> Result<Option<String>, MentisError> {
        Ok(self.hypothesize_report(pairs)?.best)
    }

    /// Same as [`Mentis::hypothesize`], with the per-pair outcomes.
    pub fn hypothesize_report(&mut self, pairs: &[Pair]) -> Result<GenerationReport, MentisError> {
        let mut outcomes = Vec::with_capacity(pairs.len());

        for pair in pairs {
            let hypothesis = match self.form.propose(pair) {
                Ok(h) => h,
                Err(source) => {
                    self.handle_failure(*pair, source.clone(), "hypothesis generation")?;
                    outcomes.push(PairOutcome {
                        pair: *pair,
                        label: None,
                        verdict: Verdict::Unevaluable(source),
                    });
                    continue;
                }
            };

            let verdict = self.scorer.test(&hypothesis, pair);
            if let Verdict::Unevaluable(source) = &verdict {
                // Already logged by the scorer; under `skip` it counts as 0.0.
                self.check_policy(*pair, source)?;
            }

            let score = verdict.score();
            self.store.record(hypothesis.label.clone(), score);
            info!(hypothesis = %hypothesis.label, score, "hypothesis generated");

            outcomes.push(PairOutcome {
                pair: *pair,
                label: Some(hypothesis.label),
                verdict,
            });
        }

        Ok(GenerationReport {
            best: self.store.best().map(str::to_owned),
            outcomes,
        })
    }

    /// Re-weight the best hypothesis on each new pair with
    /// `score <- score + rate * (reward - score)`.
    pub fn update(&mut self, pairs: &[Pair]) -> Result<UpdateReport, MentisError> {
        let mut report = UpdateReport::default();

        for pair in pairs {
            let Some(label) = self.hypothesize(std::slice::from_ref(pair))? else {
                report.skipped.push(*pair);
                continue;
            };

            // The reward comes from a fresh test, independent of the score
            // the generation step just stored.
            let hypothesis = match self.form.propose(pair) {
                Ok(h) => h,
                Err(source) => {
                    self.handle_failure(*pair, source, "weight update")?;
                    report.skipped.push(*pair);
                    continue;
                }
            };
            let verdict = self.scorer.test(&hypothesis, pair);
            if let Verdict::Unevaluable(source) = &verdict {
                self.check_policy(*pair, source)?;
            }
            let reward = verdict.reward();

            let change = self
                .store
                .reweight(&label, reward, self.config.learning_rate);
            info!(
                hypothesis = %label,
                prior = change.prior,
                reward,
                weight = change.posterior,
                "hypothesis updated"
            );

            report.updates.push(WeightUpdate {
                pair: *pair,
                label,
                prior: change.prior,
                reward,
                posterior: change.posterior,
            });
        }

        Ok(report)
    }

    /// Generate over `pairs`, then link every pair into the concept graph as
    /// `"{x}^2" -> label -> "{y}"`.
    pub fn build_theory(
        &mut self,
        pairs: &[Pair],
    ) -> Result<(Option<String>, &ConceptGraph), MentisError> {
        let label = self.hypothesize(pairs)?;

        if let Some(label) = label.as_deref().filter(|l| !l.is_empty()) {
            self.graph.add_node(label);
            for pair in pairs {
                self.graph.add_edge(&format!("{}^2", pair.x), label);
                self.graph.add_edge(label, &pair.y.to_string());
            }
            info!(
                theory = %label,
                nodes = self.graph.node_count(),
                edges = self.graph.edge_count(),
                "theory built"
            );
        }

        Ok((label, &self.graph))
    }

    pub fn snapshot(&self) -> MentisSnapshot {
        MentisSnapshot {
            best: self.store.best().map(str::to_owned),
            hypotheses: self.store.scores().clone(),
            graph: self.graph.snapshot(),
        }
    }

    pub fn snapshot_json(&self) -> Result<String, MentisError> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    fn handle_failure(
        &self,
        pair: Pair,
        source: SymbolicError,
        stage: &'static str,
    ) -> Result<(), MentisError> {
        error!(stage, pair = %pair, error = %source, "pair skipped");
        match self.config.failure_policy {
            FailurePolicy::Skip => Ok(()),
            FailurePolicy::Abort => Err(MentisError::Evaluation { pair, source }),
        }
    }

    fn check_policy(&self, pair: Pair, source: &SymbolicError) -> Result<(), MentisError> {
        match self.config.failure_policy {
            FailurePolicy::Skip => Ok(()),
            FailurePolicy::Abort => Err(MentisError::Evaluation {
                pair,
                source: source.clone(),
            }),
        }
    }
}

impl Default for Mentis {
    fn default() -> Self {
        Self::new(MentisConfig::default())
    }
}
