//! Goal-directed breadth-first search
//!
//! Explores reachable states level by level under the same think-time budget
//! as the adversarial search, looking for a single placement whose round
//! score is strictly positive (a "goal"). Only the acting player moves; the
//! opponent's replies are not modelled.
//!
//! # States
//!
//! ```text
//! Idle -> Expanding -> GoalFound          (return the goal's first action)
//!                   -> BudgetExpired      (fall back)
//!                   -> FrontierExhausted  (fall back)
//! ```
//!
//! When a node yields a goal, its remaining siblings are still scored and the
//! best goal among them wins; no further frontier node is expanded. Without a
//! goal, the first action of the best-scoring node seen is returned, see
//! [`super::fallback`].

use std::collections::VecDeque;

use log::debug;

use crate::eval::round_score;
use crate::game::{GameAction, GameRule, GameState, PlayerId};

use super::budget::SearchBudget;
use super::fallback::FallbackQueue;
use super::ordering::order_actions;

/// How a breadth search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BfsOutcome {
    /// A successor with positive round score was found
    GoalFound,
    /// The budget ran out first
    BudgetExpired,
    /// Every reachable state was expanded without finding a goal
    FrontierExhausted,
}

/// Result of a breadth search.
#[derive(Debug, Clone)]
pub struct BfsResult<A> {
    /// Chosen first action, `None` only if nothing was explored
    pub action: Option<A>,
    /// Round score behind the choice
    pub gain: Option<i32>,
    /// Terminal state of the search
    pub outcome: BfsOutcome,
    /// Frontier nodes expanded
    pub nodes: u64,
    /// Length of the longest path generated
    pub depth: usize,
}

/// Frontier entry: a state and the actions that led to it from the root.
struct SearchNode<S, A> {
    state: S,
    path: Vec<A>,
}

/// Breadth-first goal searcher for one decision.
pub struct GoalSearcher<'a, R: GameRule> {
    rules: &'a R,
    player: PlayerId,
    ranking: bool,
    nodes: u64,
}

impl<'a, R: GameRule> GoalSearcher<'a, R> {
    /// Searcher acting for `player`, with action ranking enabled below the root.
    #[must_use]
    pub fn new(rules: &'a R, player: PlayerId) -> Self {
        Self {
            rules,
            player,
            ranking: true,
            nodes: 0,
        }
    }

    /// Enable or disable lossy action ranking below the root.
    #[must_use]
    pub fn with_ranking(mut self, enabled: bool) -> Self {
        self.ranking = enabled;
        self
    }

    /// Search from `root`, expanding `actions` at the root.
    pub fn search(
        &mut self,
        actions: &[R::Action],
        root: &R::State,
        budget: &SearchBudget,
    ) -> BfsResult<R::Action> {
        self.nodes = 0;
        let mut frontier = VecDeque::new();
        frontier.push_back(SearchNode {
            state: root.clone(),
            path: Vec::new(),
        });
        let mut fallback = FallbackQueue::new();
        let mut goal: Option<(i32, R::Action)> = None;
        let mut max_depth = 0;

        let outcome = loop {
            let Some(node) = frontier.pop_front() else {
                break BfsOutcome::FrontierExhausted;
            };
            if budget.is_exhausted() {
                break BfsOutcome::BudgetExpired;
            }
            self.nodes += 1;

            // Root candidates are never pruned: a goal among them must be seen
            let candidates = if node.path.is_empty() {
                actions.to_vec()
            } else {
                order_actions(self.rules.legal_actions(&node.state, self.player), self.ranking)
            };

            for action in candidates {
                let next_state =
                    match self
                        .rules
                        .generate_successor(node.state.clone(), &action, self.player)
                    {
                        Ok(state) => state,
                        Err(err) => {
                            debug!("skipping action {:?}: {}", action, err);
                            continue;
                        }
                    };

                let gain = action
                    .tile_grab()
                    .map(|_| round_score(next_state.player_board(self.player)));
                let mut next_path = node.path.clone();
                next_path.push(action);
                max_depth = max_depth.max(next_path.len());
                let first = next_path[0].clone();

                match gain {
                    Some(score) if score > 0 => {
                        if goal.as_ref().map_or(true, |(best, _)| score > *best) {
                            goal = Some((score, first));
                        }
                    }
                    _ => {
                        fallback.push(gain, first);
                        frontier.push_back(SearchNode {
                            state: next_state,
                            path: next_path,
                        });
                    }
                }
            }

            if goal.is_some() {
                break BfsOutcome::GoalFound;
            }
        };

        debug!(
            "bfs {:?}: nodes={} depth={} frontier={} candidates={} best_fallback={:?} elapsed={:?}",
            outcome,
            self.nodes,
            max_depth,
            frontier.len(),
            fallback.len(),
            fallback.peek().and_then(|entry| entry.gain),
            budget.elapsed()
        );

        let (action, gain) = match goal {
            Some((score, action)) => (Some(action), Some(score)),
            None => match fallback.pop_best() {
                Some(entry) => (Some(entry.action), entry.gain),
                None => (None, None),
            },
        };

        BfsResult {
            action,
            gain,
            outcome,
            nodes: self.nodes,
            depth: max_depth,
        }
    }
}
