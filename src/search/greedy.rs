//! One-ply greedy strategy
//!
//! Applies each candidate action once and keeps the successor with the best
//! single-step score: the round score, plus the centre bonus, plus a small
//! bonus for taking the first-player marker. No lookahead, no opponent model.

use log::debug;

use crate::eval::features::centre_bonus;
use crate::eval::{round_score, FeatureWeight};
use crate::game::{GameRule, GameState, PlayerId};

use super::budget::SearchBudget;

/// Result of a greedy pass.
#[derive(Debug, Clone)]
pub struct GreedyResult<A> {
    /// Best action, `None` if no action could be applied in time
    pub action: Option<A>,
    /// Its single-step score
    pub score: Option<i32>,
    /// Actions evaluated
    pub evaluated: u64,
}

/// Greedy one-ply chooser.
pub struct GreedySearcher<'a, R: GameRule> {
    rules: &'a R,
    player: PlayerId,
}

impl<'a, R: GameRule> GreedySearcher<'a, R> {
    /// Chooser acting for `player`.
    #[must_use]
    pub fn new(rules: &'a R, player: PlayerId) -> Self {
        Self { rules, player }
    }

    /// Single-step score of a successor for the acting player.
    #[must_use]
    pub fn score(&self, state: &R::State) -> i32 {
        let board = state.player_board(self.player);
        let first_player = if state.next_first_player() == Some(self.player) {
            FeatureWeight::FIRST_PLAYER
        } else {
            0
        };
        round_score(board) + centre_bonus(board) + first_player
    }

    /// Evaluate `actions` in order; strictly better scores replace the
    /// incumbent. Stops early once the budget is exhausted.
    pub fn search(
        &self,
        actions: &[R::Action],
        state: &R::State,
        budget: &SearchBudget,
    ) -> GreedyResult<R::Action> {
        let mut best: Option<(i32, &R::Action)> = None;
        let mut evaluated = 0;

        for action in actions {
            if budget.is_exhausted() {
                debug!("greedy pass cut short after {} actions", evaluated);
                break;
            }
            let next = match self
                .rules
                .generate_successor(state.clone(), action, self.player)
            {
                Ok(next) => next,
                Err(err) => {
                    debug!("skipping action {:?}: {}", action, err);
                    continue;
                }
            };
            evaluated += 1;

            let score = self.score(&next);
            if best.map_or(true, |(incumbent, _)| score > incumbent) {
                best = Some((score, action));
            }
        }

        GreedyResult {
            action: best.map(|(_, action)| action.clone()),
            score: best.map(|(score, _)| score),
            evaluated,
        }
    }
}
