//! Agent configuration
//!
//! Configs are plain data with builder-style setters, and can be loaded from
//! TOML. Every field is optional in TOML; missing fields take their defaults.
//!
//! ```toml
//! strategy = "minimax"
//! think_time_ms = 900
//! evaluator = "positional"
//! action_ranking = true
//! max_depth = 4
//! seed = 42
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::eval::EvaluatorKind;
use crate::game::{PlayerId, NUM_PLAYERS};
use crate::search::DEFAULT_THINK_TIME;

/// Decision procedure used by the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Iterative-deepening alpha-beta against the opponent
    #[default]
    Minimax,
    /// Single-player breadth-first search for a positive round score
    Bfs,
    /// Best single-step round score, no lookahead
    Greedy,
}

/// Configuration for creating an [`crate::Agent`].
///
/// # Examples
///
/// ```
/// use azul::{AgentConfig, EvaluatorKind, Strategy};
/// use std::time::Duration;
///
/// let config = AgentConfig::new(Strategy::Bfs)
///     .with_think_time(Duration::from_millis(500))
///     .with_evaluator(EvaluatorKind::CentreControl)
///     .with_seed(42);
/// assert!(config.validate(0).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AgentConfig {
    /// Decision procedure
    pub strategy: Strategy,
    /// Wall-clock budget per decision, in milliseconds
    pub think_time_ms: u64,
    /// Leaf evaluator for the minimax strategy
    pub evaluator: EvaluatorKind,
    /// Lossy ranking of actions before expansion
    pub action_ranking: bool,
    /// Optional cap on iterative deepening
    pub max_depth: Option<u32>,
    /// Random seed for reproducible fallback choices
    pub seed: Option<u64>,
}

impl AgentConfig {
    /// Configuration using `strategy` with default values elsewhere:
    /// - Think time: 900 ms
    /// - Evaluator: `EvaluatorKind::Positional`
    /// - Action ranking: enabled
    /// - Max depth: none
    /// - Seed: none (seeded from the OS)
    #[must_use]
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            think_time_ms: duration_millis(DEFAULT_THINK_TIME),
            evaluator: EvaluatorKind::default(),
            action_ranking: true,
            max_depth: None,
            seed: None,
        }
    }

    /// Set the decision procedure.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the per-decision budget. Sub-millisecond precision is dropped.
    #[must_use]
    pub fn with_think_time(mut self, think_time: Duration) -> Self {
        self.think_time_ms = duration_millis(think_time);
        self
    }

    /// Set the leaf evaluator used by the minimax strategy.
    #[must_use]
    pub fn with_evaluator(mut self, evaluator: EvaluatorKind) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Enable or disable lossy action ranking.
    #[must_use]
    pub fn with_ranking(mut self, enabled: bool) -> Self {
        self.action_ranking = enabled;
        self
    }

    /// Cap iterative deepening, `None` for no cap.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: Option<u32>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the random seed for deterministic behavior.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Budget per decision.
    #[inline]
    #[must_use]
    pub fn think_time(&self) -> Duration {
        Duration::from_millis(self.think_time_ms)
    }

    /// Check the config for an agent acting as `player`.
    ///
    /// A zero think time is accepted: the agent still answers, usually with
    /// a random action.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPlayer`] for a player other than 0 or 1
    /// and [`ConfigError::ZeroMaxDepth`] for `max_depth = 0`.
    pub fn validate(&self, player: PlayerId) -> Result<()> {
        if player >= NUM_PLAYERS {
            return Err(ConfigError::InvalidPlayer(player));
        }
        if self.max_depth == Some(0) {
            return Err(ConfigError::ZeroMaxDepth);
        }
        Ok(())
    }

    /// Parse a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML, unknown fields or
    /// unknown variant names.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`Self::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new(Strategy::default())
    }
}

fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
