//! Leaf evaluation for the adversarial search
//!
//! An evaluator maps a state to a score for the acting player. All built-in
//! variants are differential: the same per-player feature sum is computed for
//! both players and the opponent's is subtracted, so
//! `evaluate(state, a) == -evaluate(state, b)` always holds.
//!
//! Variants are selected through [`EvaluatorKind`]; custom evaluators only need
//! to implement [`Evaluator`].

use serde::{Deserialize, Serialize};

use crate::game::{opponent, GameState, PlayerBoard, PlayerId};

use super::features::{
    adjacency_bonus, centre_bonus, completion_bonus, floor_slot_penalty,
    incomplete_line_penalty, permanent_score, unfilled_line_penalty,
};

/// Scores a state for `player`. Higher is better for `player`.
///
/// Implementations must be pure: the same state and player always give the
/// same score.
pub trait Evaluator<S: GameState> {
    /// Score `state` from `player`'s point of view.
    fn evaluate(&self, state: &S, player: PlayerId) -> f64;
}

/// Built-in evaluation variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluatorKind {
    /// Permanent score, wall completion, adjacency, index-weighted line
    /// penalty and position-weighted floor penalty
    #[default]
    Positional,
    /// Permanent score, wall completion and a squared unfilled-line penalty
    LineCompletion,
    /// [`EvaluatorKind::LineCompletion`] plus a bonus for central wall tiles
    CentreControl,
}

impl EvaluatorKind {
    /// Feature sum for a single board.
    #[must_use]
    pub fn player_score<B: PlayerBoard>(self, board: &B) -> i32 {
        let base = permanent_score(board) + completion_bonus(board);
        match self {
            Self::Positional => {
                base + adjacency_bonus(board)
                    - incomplete_line_penalty(board)
                    - floor_slot_penalty(board)
            }
            Self::LineCompletion => base - unfilled_line_penalty(board),
            Self::CentreControl => base - unfilled_line_penalty(board) + centre_bonus(board),
        }
    }
}

impl<S: GameState> Evaluator<S> for EvaluatorKind {
    fn evaluate(&self, state: &S, player: PlayerId) -> f64 {
        let mine = self.player_score(state.player_board(player));
        let theirs = self.player_score(state.player_board(opponent(player)));
        f64::from(mine - theirs)
    }
}
