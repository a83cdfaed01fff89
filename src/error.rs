//! Error types for the decision engine
//!
//! Search cancellation is not an error and lives in [`crate::search::Cancelled`].
//! The types here cover the two places where something can actually go wrong:
//! the external rule engine rejecting an action, and a bad agent configuration.

use std::path::PathBuf;

use crate::game::PlayerId;

/// Failure reported by the rule engine while generating a successor state.
///
/// The search treats any `RuleError` as "skip this action" and carries on with
/// the remaining siblings.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// The action is not legal for this player in this state
    #[error("invalid action for player {player}: {reason}")]
    InvalidAction { player: PlayerId, reason: String },

    /// The state cannot accept any action (e.g. the round already ended)
    #[error("state rejected transition: {0}")]
    Rejected(String),
}

/// Errors raised while loading or validating an [`crate::AgentConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid TOML for [`crate::AgentConfig`]
    #[error(transparent)]
    Parse(#[from] toml::de::Error),

    /// Only two-player games are supported
    #[error("player id {0} out of range (expected 0 or 1)")]
    InvalidPlayer(PlayerId),

    /// A depth cap of zero would never run a single iteration
    #[error("max_depth must be at least 1")]
    ZeroMaxDepth,
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
