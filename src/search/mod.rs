//! Search module for the Azul agent
//!
//! Contains:
//! - Think-time budget and cancellation
//! - Lossy action ranking
//! - Alpha-Beta search with iterative deepening
//! - Goal-directed breadth-first search with a best-effort fallback
//! - One-ply greedy chooser

pub mod alphabeta;
pub mod bfs;
pub mod budget;
pub mod fallback;
pub mod greedy;
pub mod ordering;

pub use alphabeta::{SearchResult, Searcher};
pub use bfs::{BfsOutcome, BfsResult, GoalSearcher};
pub use budget::{Cancelled, SearchBudget, DEFAULT_THINK_TIME};
pub use fallback::{random_action, FallbackEntry, FallbackQueue};
pub use greedy::{GreedyResult, GreedySearcher};
pub use ordering::{order_actions, rank_actions};
