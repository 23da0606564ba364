#![deny(unsafe_code)]
//! # mentis-engine
//!
//! Hypothesis engine: proposes the square law `y = n^2` for observed pairs,
//! scores it by exact symbolic equality, smooths its weight on new data,
//! and records provenance in a concept graph.
//!
//! ## Loop
//!
//! ```text
//! pairs → HypothesisForm::propose → Scorer::test → HypothesisStore
//!                                                   ↓
//!                           ConceptGraph ← build_theory   update → smoothing
//! ```
//!
//! ## Key Types
//!
//! - [`Mentis`]: the engine (`hypothesize`, `update`, `build_theory`)
//! - [`HypothesisStore`]: label → score
//! - [`ConceptGraph`]: `"{x}^2" → label → "{y}"` provenance edges
//! - [`Scorer`] / [`Verdict`]: exact test with an explicit "unevaluable" outcome
//! - [`MentisConfig`]: learning rate, failure and edge policies, logging

pub mod config;
pub mod engine;
pub mod error;
pub mod graph;
pub mod hypothesis;
pub mod scorer;
pub mod store;
pub mod telemetry;
pub mod types;

pub use config::{DemoConfig, EdgePolicy, FailurePolicy, LoggingConfig, MentisConfig};
pub use engine::{Mentis, MentisSnapshot};
pub use error::MentisError;
pub use graph::{ConceptGraph, GraphSnapshot};
pub use hypothesis::{FailingForm, Hypothesis, HypothesisForm, SquareLaw, SQUARE_LAW_LABEL};
pub use scorer::Scorer;
pub use store::{smooth, HypothesisStore, Reweight};
pub use types::{
    GenerationReport, Number, Pair, PairOutcome, UpdateReport, Verdict, WeightUpdate,
};
