//! Minimax search with alpha-beta pruning and iterative deepening
//!
//! The acting player maximizes, the opponent minimizes. Depths are searched
//! 1, 2, 3, ... until the budget runs out; each completed depth replaces the
//! best-known action, and a depth interrupted by the budget is thrown away.
//!
//! # Cancellation
//!
//! Every recursive call polls the [`SearchBudget`]. Once it is exhausted the
//! call returns `Err(Cancelled)`, which `?` carries up through the whole
//! iteration to [`Searcher::search`]. Depth 1 is always attempted, even with
//! an exhausted budget; if it cannot finish, no action is reported and the
//! caller falls back to a random one.
//!
//! # Example
//!
//! ```no_run
//! # use azul::game::GameRule;
//! # fn demo<R: GameRule>(rules: &R, state: &R::State, actions: &[R::Action]) {
//! use azul::eval::EvaluatorKind;
//! use azul::search::{SearchBudget, Searcher};
//!
//! let evaluator = EvaluatorKind::Positional;
//! let mut searcher = Searcher::new(rules, &evaluator, 0);
//! let result = searcher.search(actions, state, &SearchBudget::default());
//! if let Some(action) = result.best_action {
//!     println!("depth {} picked {:?}", result.depth, action);
//! }
//! # }
//! ```

use log::debug;

use crate::eval::Evaluator;
use crate::game::{opponent, GameRule, GameState, PlayerId};

use super::budget::{Cancelled, SearchBudget};
use super::ordering::order_actions;

/// Search result containing the best action found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult<A> {
    /// Best root action of the deepest completed iteration
    pub best_action: Option<A>,
    /// Minimax value of that action
    pub score: f64,
    /// Deepest completed iteration (0 if none completed)
    pub depth: u32,
    /// Total nodes visited, including cancelled iterations
    pub nodes: u64,
}

impl<A> SearchResult<A> {
    fn empty() -> Self {
        Self {
            best_action: None,
            score: f64::NEG_INFINITY,
            depth: 0,
            nodes: 0,
        }
    }
}

/// Iterative-deepening alpha-beta searcher for one decision.
pub struct Searcher<'a, R: GameRule, E: ?Sized> {
    rules: &'a R,
    evaluator: &'a E,
    player: PlayerId,
    ranking: bool,
    max_depth: Option<u32>,
    nodes: u64,
    /// Set when a node was cut off by the depth limit with tiles remaining
    horizon_hit: bool,
}

impl<'a, R, E> Searcher<'a, R, E>
where
    R: GameRule,
    E: Evaluator<R::State> + ?Sized,
{
    /// Searcher acting for `player`, with action ranking enabled.
    #[must_use]
    pub fn new(rules: &'a R, evaluator: &'a E, player: PlayerId) -> Self {
        Self {
            rules,
            evaluator,
            player,
            ranking: true,
            max_depth: None,
            nodes: 0,
            horizon_hit: false,
        }
    }

    /// Enable or disable lossy action ranking at every node.
    #[must_use]
    pub fn with_ranking(mut self, enabled: bool) -> Self {
        self.ranking = enabled;
        self
    }

    /// Stop deepening after `max_depth` (unbounded when `None`).
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: Option<u32>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Nodes visited so far.
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search for the best action using iterative deepening.
    ///
    /// Root actions come from `actions` (the harness's candidates), so the
    /// reported action is always one of them. Stops when the budget runs out,
    /// when `max_depth` is reached, or when an iteration explored the whole
    /// remaining game without touching the depth limit.
    pub fn search(
        &mut self,
        actions: &[R::Action],
        state: &R::State,
        budget: &SearchBudget,
    ) -> SearchResult<R::Action> {
        self.nodes = 0;
        let mut best_result = SearchResult::empty();
        let mut depth = 1;

        loop {
            if depth > 1 && budget.is_exhausted() {
                break;
            }
            if self.max_depth.is_some_and(|max| depth > max) {
                break;
            }

            match self.search_depth(actions, state, depth, budget) {
                Ok(result) => {
                    debug!(
                        "depth {} complete: score={} nodes={} elapsed={:?}",
                        depth,
                        result.score,
                        self.nodes,
                        budget.elapsed()
                    );
                    if result.best_action.is_none() {
                        break;
                    }
                    best_result = result;
                    if !self.horizon_hit {
                        debug!("game tree exhausted at depth {}", depth);
                        break;
                    }
                }
                Err(Cancelled) => {
                    debug!(
                        "depth {} cancelled after {:?}, keeping depth {}",
                        depth,
                        budget.elapsed(),
                        best_result.depth
                    );
                    break;
                }
            }
            depth += 1;
        }

        best_result.nodes = self.nodes;
        best_result
    }

    /// Run a single full-width iteration at `depth`.
    ///
    /// # Errors
    ///
    /// Returns [`Cancelled`] if the budget ran out before the iteration finished.
    pub fn search_depth(
        &mut self,
        actions: &[R::Action],
        state: &R::State,
        depth: u32,
        budget: &SearchBudget,
    ) -> Result<SearchResult<R::Action>, Cancelled> {
        self.horizon_hit = false;
        self.search_root(actions, state, depth.max(1), budget)
    }

    /// Root ply: maximize over the candidate actions.
    ///
    /// Kept separate from [`Self::alpha_beta`] because only the root tracks
    /// which action produced the best value.
    fn search_root(
        &mut self,
        actions: &[R::Action],
        state: &R::State,
        depth: u32,
        budget: &SearchBudget,
    ) -> Result<SearchResult<R::Action>, Cancelled> {
        budget.check()?;
        self.nodes += 1;

        let mut best_action = None;
        let mut best_score = f64::NEG_INFINITY;
        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;

        for action in order_actions(actions.to_vec(), self.ranking) {
            let child = match self
                .rules
                .generate_successor(state.clone(), &action, self.player)
            {
                Ok(child) => child,
                Err(err) => {
                    debug!("skipping root action {:?}: {}", action, err);
                    continue;
                }
            };

            let score = self.alpha_beta(&child, depth - 1, alpha, beta, false, budget)?;

            // Strict comparison: the first action reaching a value keeps it
            if score > best_score {
                best_score = score;
                best_action = Some(action);
            }
            alpha = alpha.max(score);
        }

        Ok(SearchResult {
            best_action,
            score: best_score,
            depth,
            nodes: self.nodes,
        })
    }

    /// Recursive minimax with alpha-beta pruning.
    ///
    /// Terminal states, the depth limit, nodes without legal actions and nodes
    /// whose every successor fails to generate are all scored by the evaluator.
    fn alpha_beta(
        &mut self,
        state: &R::State,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
        budget: &SearchBudget,
    ) -> Result<f64, Cancelled> {
        budget.check()?;
        self.nodes += 1;

        if !state.tiles_remaining() {
            return Ok(self.evaluator.evaluate(state, self.player));
        }
        if depth == 0 {
            self.horizon_hit = true;
            return Ok(self.evaluator.evaluate(state, self.player));
        }

        let mover = if maximizing {
            self.player
        } else {
            opponent(self.player)
        };
        let actions = order_actions(self.rules.legal_actions(state, mover), self.ranking);

        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut expanded = false;

        for action in &actions {
            let child = match self.rules.generate_successor(state.clone(), action, mover) {
                Ok(child) => child,
                Err(err) => {
                    debug!("skipping action {:?} for player {}: {}", action, mover, err);
                    continue;
                }
            };
            expanded = true;

            let score = self.alpha_beta(&child, depth - 1, alpha, beta, !maximizing, budget)?;

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if beta <= alpha {
                break;
            }
        }

        if !expanded {
            return Ok(self.evaluator.evaluate(state, self.player));
        }
        Ok(best)
    }
}
