//! Azul decision engine for two-player games
//!
//! A game-playing agent for Azul: given the current state and the legal
//! actions for the acting player, choose one action within a wall-clock
//! budget (0.9 s by default). The rules themselves live outside this crate
//! and are reached through the [`GameRule`] trait.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`game`]: Traits for the external rule engine and its states
//! - [`eval`]: Board features and leaf evaluators
//! - [`search`]: Search algorithms (alpha-beta, breadth-first goal, greedy)
//! - [`config`]: Agent configuration, loadable from TOML
//! - [`engine`]: Agent facade integrating all components
//!
//! # Quick Start
//!
//! ```no_run
//! # use azul::GameRule;
//! # fn demo<R: GameRule>(rules: R, state: &R::State, actions: &[R::Action]) -> azul::error::Result<()> {
//! use azul::{Agent, AgentConfig};
//!
//! let config = AgentConfig::from_toml_str("strategy = \"minimax\"\nseed = 7")?;
//! let mut agent = Agent::new(rules, 0, config)?;
//!
//! if let Some(action) = agent.select_action(actions, state) {
//!     println!("AI plays {:?}", action);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Strategies
//!
//! 1. Minimax: iterative-deepening alpha-beta against the opponent
//! 2. Breadth-first goal search: the nearest placement with a positive
//!    round score, else the best-scoring placement seen
//! 3. Greedy: best single-step round score
//!
//! Whatever the strategy, a non-empty candidate list always yields one of
//! its members; a random one if the search could not finish in time.

pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod search;

#[cfg(test)]
mod testing;

// Re-export commonly used types for convenience
pub use config::{AgentConfig, Strategy};
pub use engine::{Agent, MoveResult, SearchType};
pub use error::{ConfigError, RuleError};
pub use eval::{Evaluator, EvaluatorKind};
pub use game::{GameAction, GameRule, GameState, PlayerBoard, PlayerId, TileGrab};
