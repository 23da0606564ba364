//! Configuration for the Mentis engine

use crate::error::MentisError;
use crate::types::Pair;
use serde::{Deserialize, Serialize};

/// What to do when a pair cannot be evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Log at error level and move on to the next pair.
    #[default]
    Skip,
    /// Stop the batch and return the failure to the caller.
    Abort,
}

/// How repeated edges between the same two concept nodes are recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgePolicy {
    /// At most one edge per ordered node pair.
    #[default]
    Collapse,
    /// Every call adds its own edge.
    Accumulate,
}

/// Main engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentisConfig {
    /// Smoothing rate applied by `update`
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,

    #[serde(default)]
    pub failure_policy: FailurePolicy,

    #[serde(default)]
    pub edge_policy: EdgePolicy,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Data used by the demo binary
    #[serde(default)]
    pub demo: DemoConfig,
}

impl Default for MentisConfig {
    fn default() -> Self {
        Self {
            learning_rate: default_learning_rate(),
            failure_policy: FailurePolicy::default(),
            edge_policy: EdgePolicy::default(),
            logging: LoggingConfig::default(),
            demo: DemoConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable text
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Demo configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default = "default_theory_data")]
    pub theory_data: Vec<Pair>,

    #[serde(default = "default_update_data")]
    pub update_data: Vec<Pair>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            theory_data: default_theory_data(),
            update_data: default_update_data(),
        }
    }
}

fn default_learning_rate() -> f64 {
    0.01
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_theory_data() -> Vec<Pair> {
    vec![Pair::new(1, 1), Pair::new(2, 4)]
}

fn default_update_data() -> Vec<Pair> {
    vec![Pair::new(3, 9)]
}

impl MentisConfig {
    /// Load configuration: defaults, then the optional file, then `MENTIS__*`
    /// environment variables (`MENTIS__LEARNING_RATE`, `MENTIS__LOGGING__LEVEL`).
    pub fn load(path: Option<&str>) -> Result<Self, MentisError> {
        let mut builder = config::Config::builder();

        builder = builder.add_source(config::Config::try_from(&MentisConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("MENTIS")
                .separator("__")
                .try_parsing(true),
        );

        let loaded: Self = builder.build()?.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    pub fn validate(&self) -> Result<(), MentisError> {
        let rate = self.learning_rate;
        if !(rate.is_finite() && rate > 0.0 && rate <= 1.0) {
            return Err(MentisError::InvalidConfig(format!(
                "learning_rate must be in (0, 1], got {}",
                self.learning_rate
            )));
        }
        if self.logging.level.trim().is_empty() {
            return Err(MentisError::InvalidConfig("logging.level is empty".into()));
        }
        Ok(())
    }

    pub fn with_learning_rate(mut self, rate: f64) -> Self {
        self.learning_rate = rate;
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn with_edge_policy(mut self, policy: EdgePolicy) -> Self {
        self.edge_policy = policy;
        self
    }
}
