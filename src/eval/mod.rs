//! Evaluation module for Azul positions
//!
//! - Per-player board features and weights
//! - Differential leaf evaluators for the adversarial search
//! - The single-step round score used by the breadth search

pub mod features;
pub mod heuristic;

pub use features::{round_score, FeatureWeight};
pub use heuristic::{Evaluator, EvaluatorKind};
