//! Agent facade integrating the search strategies
//!
//! The harness hands the agent a state and the candidate actions for the
//! acting player; the agent answers with one of those actions. Each call:
//!
//! 1. **Empty list**: nothing to choose, return `None`
//! 2. **Strategy**: run the configured search under a fresh think-time budget
//! 3. **Random fallback**: if the strategy produced nothing in time, pick a
//!    uniformly random candidate
//!
//! With a non-empty candidate list the answer is therefore always `Some`,
//! and always a member of the list.
//!
//! # Example
//!
//! ```no_run
//! # use azul::game::GameRule;
//! # fn demo<R: GameRule>(rules: R, state: &R::State, actions: &[R::Action]) -> azul::error::Result<()> {
//! use azul::{Agent, AgentConfig, Strategy};
//! use std::time::Duration;
//!
//! let config = AgentConfig::new(Strategy::Minimax).with_think_time(Duration::from_millis(500));
//! let mut agent = Agent::new(rules, 0, config)?;
//!
//! let result = agent.select_action_with_stats(actions, state);
//! println!("Best action: {:?}", result.best_action);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! # Ok(())
//! # }
//! ```

use log::{info, warn};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::config::{AgentConfig, Strategy};
use crate::error::Result;
use crate::eval::{Evaluator, EvaluatorKind};
use crate::game::{GameRule, PlayerId};
use crate::search::{
    random_action, BfsOutcome, GoalSearcher, GreedySearcher, SearchBudget, Searcher,
};

/// Type of search that produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Iterative-deepening alpha-beta result
    AlphaBeta,
    /// Breadth search reached a positive round score
    BreadthFirstGoal,
    /// Breadth search ended without a goal; best node seen
    BreadthFirstFallback,
    /// One-ply greedy result
    Greedy,
    /// No strategy answered in time; uniform random candidate
    Random,
}

/// Result of a decision with search statistics.
#[derive(Debug, Clone)]
pub struct MoveResult<A> {
    /// Chosen action, `None` only for an empty candidate list
    pub best_action: Option<A>,
    /// Score behind the choice, in the producing strategy's units
    pub score: Option<f64>,
    /// Which search produced the action
    pub search_type: SearchType,
    /// Deepest completed iteration or longest explored path
    pub depth: u32,
    /// Nodes visited
    pub nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl<A> MoveResult<A> {
    #[inline]
    fn random(action: Option<A>, nodes: u64, time_ms: u64) -> Self {
        Self {
            best_action: action,
            score: None,
            search_type: SearchType::Random,
            depth: 0,
            nodes,
            time_ms,
        }
    }
}

/// Decision-making agent for one player.
///
/// # Example
///
/// ```no_run
/// # use azul::game::GameRule;
/// # fn demo<R: GameRule>(rules: R, state: &R::State, actions: &[R::Action]) -> azul::error::Result<()> {
/// use azul::{Agent, AgentConfig, Strategy};
///
/// let mut agent = Agent::new(rules, 1, AgentConfig::new(Strategy::Bfs).with_seed(42))?;
/// if let Some(action) = agent.select_action(actions, state) {
///     println!("Play {:?}", action);
/// }
/// # Ok(())
/// # }
/// ```
pub struct Agent<R: GameRule, E = EvaluatorKind> {
    rules: R,
    player: PlayerId,
    config: AgentConfig,
    evaluator: E,
    rng: Xoshiro256PlusPlus,
}

impl<R: GameRule> Agent<R, EvaluatorKind> {
    /// Agent using the evaluator named in `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::ConfigError`] if `config` is invalid for `player`.
    pub fn new(rules: R, player: PlayerId, config: AgentConfig) -> Result<Self> {
        let evaluator = config.evaluator;
        Self::with_evaluator(rules, player, config, evaluator)
    }
}

impl<R, E> Agent<R, E>
where
    R: GameRule,
    E: Evaluator<R::State>,
{
    /// Agent with a custom leaf evaluator. `config.evaluator` is ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::ConfigError`] if `config` is invalid for `player`.
    pub fn with_evaluator(
        rules: R,
        player: PlayerId,
        config: AgentConfig,
        evaluator: E,
    ) -> Result<Self> {
        config.validate(player)?;
        let rng = match config.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_os_rng(),
        };
        Ok(Self {
            rules,
            player,
            config,
            evaluator,
            rng,
        })
    }

    /// Player this agent acts for.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Rule engine used for speculative moves.
    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Choose one of `actions` for the acting player.
    ///
    /// Returns `None` only when `actions` is empty.
    pub fn select_action(&mut self, actions: &[R::Action], state: &R::State) -> Option<R::Action> {
        self.select_action_with_stats(actions, state).best_action
    }

    /// Choose one of `actions`, with search statistics.
    ///
    /// `best_action` is `None` only when `actions` is empty.
    pub fn select_action_with_stats(
        &mut self,
        actions: &[R::Action],
        state: &R::State,
    ) -> MoveResult<R::Action> {
        let budget = SearchBudget::new(self.config.think_time());

        if actions.is_empty() {
            warn!("player {} has no candidate actions", self.player);
            return MoveResult::random(None, 0, elapsed_ms(&budget));
        }

        let result = match self.config.strategy {
            Strategy::Minimax => self.run_minimax(actions, state, &budget),
            Strategy::Bfs => self.run_bfs(actions, state, &budget),
            Strategy::Greedy => self.run_greedy(actions, state, &budget),
        };

        let result = if result.best_action.is_some() {
            result
        } else {
            warn!(
                "{:?} produced no action within {:?}, choosing at random",
                self.config.strategy,
                budget.limit()
            );
            let action = random_action(actions, &mut self.rng);
            MoveResult::random(action, result.nodes, elapsed_ms(&budget))
        };

        info!(
            "player {} {:?}: score={:?} depth={} nodes={} time={}ms remaining={:?}",
            self.player,
            result.search_type,
            result.score,
            result.depth,
            result.nodes,
            result.time_ms,
            budget.remaining()
        );
        result
    }

    fn run_minimax(
        &self,
        actions: &[R::Action],
        state: &R::State,
        budget: &SearchBudget,
    ) -> MoveResult<R::Action> {
        let mut searcher = Searcher::new(&self.rules, &self.evaluator, self.player)
            .with_ranking(self.config.action_ranking)
            .with_max_depth(self.config.max_depth);
        let result = searcher.search(actions, state, budget);
        MoveResult {
            score: result.best_action.as_ref().map(|_| result.score),
            best_action: result.best_action,
            search_type: SearchType::AlphaBeta,
            depth: result.depth,
            nodes: result.nodes,
            time_ms: elapsed_ms(budget),
        }
    }

    fn run_bfs(
        &self,
        actions: &[R::Action],
        state: &R::State,
        budget: &SearchBudget,
    ) -> MoveResult<R::Action> {
        let mut searcher =
            GoalSearcher::new(&self.rules, self.player).with_ranking(self.config.action_ranking);
        let result = searcher.search(actions, state, budget);
        let search_type = match result.outcome {
            BfsOutcome::GoalFound => SearchType::BreadthFirstGoal,
            BfsOutcome::BudgetExpired | BfsOutcome::FrontierExhausted => {
                SearchType::BreadthFirstFallback
            }
        };
        MoveResult {
            best_action: result.action,
            score: result.gain.map(f64::from),
            search_type,
            depth: u32::try_from(result.depth).unwrap_or(u32::MAX),
            nodes: result.nodes,
            time_ms: elapsed_ms(budget),
        }
    }

    fn run_greedy(
        &self,
        actions: &[R::Action],
        state: &R::State,
        budget: &SearchBudget,
    ) -> MoveResult<R::Action> {
        let result = GreedySearcher::new(&self.rules, self.player).search(actions, state, budget);
        MoveResult {
            best_action: result.action,
            score: result.score.map(f64::from),
            search_type: SearchType::Greedy,
            depth: 1,
            nodes: result.evaluated,
            time_ms: elapsed_ms(budget),
        }
    }
}

#[inline]
fn elapsed_ms(budget: &SearchBudget) -> u64 {
    u64::try_from(budget.elapsed().as_millis()).unwrap_or(u64::MAX)
}
