//! Synthetic game models for unit tests
//!
//! - [`ScriptedBoard`]: a hand-built player board
//! - [`ScriptedGame`]: one ply deep, each root action leads to a chosen round score
//! - [`StepGame`]: several placements deep, every node carries a round score
//! - [`TreeGame`]: an explicit game tree with a value on every node

use std::collections::HashSet;
use std::thread;
use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::error::RuleError;
use crate::eval::Evaluator;
use crate::game::{
    required_length, GameAction, GameRule, GameState, PlayerBoard, PlayerId, TileGrab,
    FLOOR_SIZE, GRID_SIZE,
};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// =============================================================================
// ScriptedBoard
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptedBoard {
    pub lines: [usize; GRID_SIZE],
    pub wall: [[bool; GRID_SIZE]; GRID_SIZE],
    pub floor: [bool; FLOOR_SIZE],
    pub round: i32,
    pub end_of_game: i32,
}

impl ScriptedBoard {
    /// Board with every pattern line complete and the given round score.
    pub fn settled(round: i32) -> Self {
        let mut board = Self {
            round,
            ..Self::default()
        };
        for (line, fill) in board.lines.iter_mut().enumerate() {
            *fill = required_length(line);
        }
        board
    }

    pub fn with_lines(mut self, lines: [usize; GRID_SIZE]) -> Self {
        self.lines = lines;
        self
    }

    pub fn with_wall_cell(mut self, row: usize, col: usize) -> Self {
        self.wall[row][col] = true;
        self
    }

    pub fn with_wall_row(mut self, row: usize) -> Self {
        for col in 0..GRID_SIZE {
            self.wall[row][col] = true;
        }
        self
    }

    pub fn with_wall_col(mut self, col: usize) -> Self {
        for row in 0..GRID_SIZE {
            self.wall[row][col] = true;
        }
        self
    }

    pub fn with_floor(mut self, tiles: usize) -> Self {
        for slot in 0..tiles.min(FLOOR_SIZE) {
            self.floor[slot] = true;
        }
        self
    }

    pub fn with_end_of_game(mut self, points: i32) -> Self {
        self.end_of_game = points;
        self
    }
}

impl PlayerBoard for ScriptedBoard {
    fn pattern_line_fill(&self, line: usize) -> usize {
        self.lines[line]
    }

    fn wall_occupied(&self, row: usize, col: usize) -> bool {
        self.wall[row][col]
    }

    fn floor_occupied(&self, slot: usize) -> bool {
        self.floor[slot]
    }

    fn score_round(&self) -> i32 {
        self.round
    }

    fn end_of_game_score(&self) -> i32 {
        self.end_of_game
    }
}

// =============================================================================
// ScriptedGame
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedState {
    pub boards: [ScriptedBoard; 2],
    pub ply: usize,
    pub first_player: Option<PlayerId>,
}

impl ScriptedState {
    pub fn root() -> Self {
        Self {
            boards: [ScriptedBoard::settled(0), ScriptedBoard::settled(0)],
            ply: 0,
            first_player: None,
        }
    }

    pub fn with_boards(mine: ScriptedBoard, theirs: ScriptedBoard) -> Self {
        Self {
            boards: [mine, theirs],
            ply: 0,
            first_player: None,
        }
    }
}

impl GameState for ScriptedState {
    type Board = ScriptedBoard;

    fn player_board(&self, player: PlayerId) -> &ScriptedBoard {
        &self.boards[player]
    }

    fn tiles_remaining(&self) -> bool {
        self.ply == 0
    }

    fn next_first_player(&self) -> Option<PlayerId> {
        self.first_player
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedAction {
    pub index: usize,
    pub grab: Option<TileGrab>,
}

impl ScriptedAction {
    pub fn place(index: usize, tile_type: u8, line: usize, to_line: u8, to_floor: u8) -> Self {
        Self {
            index,
            grab: Some(TileGrab {
                tile_type,
                pattern_line_dest: Some(line),
                num_to_pattern_line: to_line,
                num_to_floor_line: to_floor,
            }),
        }
    }

    pub fn end_round(index: usize) -> Self {
        Self { index, grab: None }
    }
}

impl GameAction for ScriptedAction {
    fn tile_grab(&self) -> Option<&TileGrab> {
        self.grab.as_ref()
    }
}

/// Root action `i` moves the acting player's round score to `outcomes[i]`.
/// Successors are terminal.
#[derive(Debug, Clone, Default)]
pub struct ScriptedGame {
    pub outcomes: Vec<i32>,
    pub rejected: HashSet<usize>,
    pub first_player_on: HashSet<usize>,
}

impl ScriptedGame {
    pub fn new(outcomes: &[i32]) -> Self {
        Self {
            outcomes: outcomes.to_vec(),
            ..Self::default()
        }
    }

    pub fn rejecting(mut self, index: usize) -> Self {
        self.rejected.insert(index);
        self
    }

    pub fn taking_first_player_on(mut self, index: usize) -> Self {
        self.first_player_on.insert(index);
        self
    }

    /// Distinct tile placements, one per outcome.
    pub fn root_actions(&self) -> Vec<ScriptedAction> {
        (0..self.outcomes.len())
            .map(|i| ScriptedAction::place(i, (i % 5) as u8, i / 5, 1, 0))
            .collect()
    }
}

impl GameRule for ScriptedGame {
    type State = ScriptedState;
    type Action = ScriptedAction;

    fn legal_actions(&self, state: &ScriptedState, _player: PlayerId) -> Vec<ScriptedAction> {
        if state.ply == 0 {
            self.root_actions()
        } else {
            Vec::new()
        }
    }

    fn generate_successor(
        &self,
        mut state: ScriptedState,
        action: &ScriptedAction,
        player: PlayerId,
    ) -> Result<ScriptedState, RuleError> {
        if self.rejected.contains(&action.index) {
            return Err(RuleError::InvalidAction {
                player,
                reason: format!("action {} rejected", action.index),
            });
        }
        let outcome = self
            .outcomes
            .get(action.index)
            .copied()
            .ok_or_else(|| RuleError::Rejected(format!("no action {}", action.index)))?;
        state.boards[player].round = outcome;
        state.ply += 1;
        if self.first_player_on.contains(&action.index) {
            state.first_player = Some(player);
        }
        Ok(state)
    }
}

// =============================================================================
// StepGame
// =============================================================================

#[derive(Debug, Clone)]
pub struct StepNode {
    pub round: i32,
    pub children: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepState {
    pub node: usize,
    board: ScriptedBoard,
}

impl GameState for StepState {
    type Board = ScriptedBoard;

    fn player_board(&self, _player: PlayerId) -> &ScriptedBoard {
        &self.board
    }

    fn tiles_remaining(&self) -> bool {
        true
    }
}

/// Single-player tree of tile placements. Reaching node `i` sets the acting
/// player's round score to its `round`. Node 0 is the root.
#[derive(Debug, Clone)]
pub struct StepGame {
    pub nodes: Vec<StepNode>,
    /// Sleep this long in every `legal_actions` call
    pub slow: Option<Duration>,
}

impl StepGame {
    /// Tree from (parent, round) pairs; entry `i` describes node `i + 1`.
    pub fn from_edges(edges: &[(usize, i32)]) -> Self {
        let mut nodes = vec![StepNode {
            round: 0,
            children: Vec::new(),
        }];
        for &(parent, round) in edges {
            let id = nodes.len();
            nodes.push(StepNode {
                round,
                children: Vec::new(),
            });
            nodes[parent].children.push(id);
        }
        Self { nodes, slow: None }
    }

    pub fn slow(mut self, delay: Duration) -> Self {
        self.slow = Some(delay);
        self
    }

    pub fn root(&self) -> StepState {
        self.state(0)
    }

    /// Placements out of the root, without any delay.
    pub fn root_actions(&self) -> Vec<ScriptedAction> {
        self.actions(0)
    }

    fn state(&self, node: usize) -> StepState {
        StepState {
            node,
            board: ScriptedBoard::settled(self.nodes[node].round),
        }
    }

    /// Action `i` leads to node `i`; keys are distinct for trees under 25 nodes.
    fn actions(&self, node: usize) -> Vec<ScriptedAction> {
        self.nodes[node]
            .children
            .iter()
            .map(|&child| ScriptedAction::place(child, (child % 5) as u8, (child / 5) % 5, 1, 0))
            .collect()
    }
}

impl GameRule for StepGame {
    type State = StepState;
    type Action = ScriptedAction;

    fn legal_actions(&self, state: &StepState, _player: PlayerId) -> Vec<ScriptedAction> {
        if let Some(delay) = self.slow {
            thread::sleep(delay);
        }
        self.actions(state.node)
    }

    fn generate_successor(
        &self,
        state: StepState,
        action: &ScriptedAction,
        player: PlayerId,
    ) -> Result<StepState, RuleError> {
        if !self.nodes[state.node].children.contains(&action.index) {
            return Err(RuleError::InvalidAction {
                player,
                reason: format!("node {} not below node {}", action.index, state.node),
            });
        }
        Ok(self.state(action.index))
    }
}

// =============================================================================
// TreeGame
// =============================================================================

#[derive(Debug, Clone)]
pub struct TreeNode {
    pub value: f64,
    pub children: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeState {
    pub node: usize,
    pub depth: usize,
    pub value: f64,
    pub terminal: bool,
    board: ScriptedBoard,
}

impl GameState for TreeState {
    type Board = ScriptedBoard;

    fn player_board(&self, _player: PlayerId) -> &ScriptedBoard {
        &self.board
    }

    fn tiles_remaining(&self) -> bool {
        !self.terminal
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeAction {
    pub child: usize,
}

impl GameAction for TreeAction {
    fn tile_grab(&self) -> Option<&TileGrab> {
        None
    }
}

/// Explicit game tree. Node 0 is the root.
#[derive(Debug, Clone)]
pub struct TreeGame {
    pub nodes: Vec<TreeNode>,
    pub invalid: HashSet<usize>,
    /// Sleep this long in `legal_actions` for states at or below the depth
    pub slow_from: Option<(usize, Duration)>,
}

impl TreeGame {
    /// Complete tree of the given depth and branching factor with random
    /// node values in [-100, 100).
    pub fn random(depth: usize, branching: usize, seed: u64) -> Self {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let mut nodes = vec![TreeNode {
            value: f64::from(rng.random_range(-100i32..100)),
            children: Vec::new(),
        }];
        let mut level = vec![0usize];
        for _ in 0..depth {
            let mut next = Vec::with_capacity(level.len() * branching);
            for &parent in &level {
                for _ in 0..branching {
                    let id = nodes.len();
                    nodes.push(TreeNode {
                        value: f64::from(rng.random_range(-100i32..100)),
                        children: Vec::new(),
                    });
                    nodes[parent].children.push(id);
                    next.push(id);
                }
            }
            level = next;
        }
        Self {
            nodes,
            invalid: HashSet::new(),
            slow_from: None,
        }
    }

    /// Tree from (parent, value) pairs; entry `i` describes node `i + 1`.
    pub fn from_edges(root_value: f64, edges: &[(usize, f64)]) -> Self {
        let mut nodes = vec![TreeNode {
            value: root_value,
            children: Vec::new(),
        }];
        for &(parent, value) in edges {
            let id = nodes.len();
            nodes.push(TreeNode {
                value,
                children: Vec::new(),
            });
            nodes[parent].children.push(id);
        }
        Self {
            nodes,
            invalid: HashSet::new(),
            slow_from: None,
        }
    }

    pub fn slow_from(mut self, depth: usize, delay: Duration) -> Self {
        self.slow_from = Some((depth, delay));
        self
    }

    pub fn with_invalid(mut self, node: usize) -> Self {
        self.invalid.insert(node);
        self
    }

    pub fn root(&self) -> TreeState {
        self.state(0, 0)
    }

    pub fn root_actions(&self) -> Vec<TreeAction> {
        self.legal_actions(&self.root(), 0)
    }

    fn state(&self, node: usize, depth: usize) -> TreeState {
        TreeState {
            node,
            depth,
            value: self.nodes[node].value,
            terminal: self.nodes[node].children.is_empty(),
            board: ScriptedBoard::default(),
        }
    }

    /// Plain minimax without pruning.
    pub fn minimax(&self, node: usize, depth: usize, maximizing: bool) -> f64 {
        let children = &self.nodes[node].children;
        if depth == 0 || children.is_empty() {
            return self.nodes[node].value;
        }
        let values = children
            .iter()
            .map(|&child| self.minimax(child, depth - 1, !maximizing));
        if maximizing {
            values.fold(f64::NEG_INFINITY, f64::max)
        } else {
            values.fold(f64::INFINITY, f64::min)
        }
    }
}

impl GameRule for TreeGame {
    type State = TreeState;
    type Action = TreeAction;

    fn legal_actions(&self, state: &TreeState, _player: PlayerId) -> Vec<TreeAction> {
        if let Some((depth, delay)) = self.slow_from {
            if state.depth >= depth {
                thread::sleep(delay);
            }
        }
        self.nodes[state.node]
            .children
            .iter()
            .map(|&child| TreeAction { child })
            .collect()
    }

    fn generate_successor(
        &self,
        state: TreeState,
        action: &TreeAction,
        player: PlayerId,
    ) -> Result<TreeState, RuleError> {
        if self.invalid.contains(&action.child) {
            return Err(RuleError::InvalidAction {
                player,
                reason: format!("node {} unreachable", action.child),
            });
        }
        Ok(self.state(action.child, state.depth + 1))
    }
}

/// Leaf evaluator reading the node value stored in a [`TreeState`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeValue;

impl Evaluator<TreeState> for NodeValue {
    fn evaluate(&self, state: &TreeState, _player: PlayerId) -> f64 {
        state.value
    }
}
