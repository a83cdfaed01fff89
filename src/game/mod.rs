//! Game model contract consumed by the search core
//!
//! The rule engine (legal action enumeration, successor generation, scoring
//! primitives) is owned by the caller. This module only fixes the shape the
//! search needs from it:
//!
//! - [`GameRule`]: legal actions and state transitions
//! - [`GameState`]: a full snapshot, cloned once per explored branch
//! - [`PlayerBoard`]: one player's pattern lines, wall and floor
//! - [`GameAction`]: an opaque action, optionally carrying a [`TileGrab`]
//!
//! States are treated as immutable values. Every transition receives its own
//! clone, so sibling branches never observe each other's changes.

use std::fmt;

use crate::error::RuleError;

/// Index of a player (0 or 1)
pub type PlayerId = usize;

/// Tile colour as numbered by the rule engine
pub type TileType = u8;

/// Number of players supported by the search
pub const NUM_PLAYERS: usize = 2;

/// Width and height of the wall; also the number of pattern lines
pub const GRID_SIZE: usize = 5;

/// Floor line penalty per slot, left to right
pub const FLOOR_SCORES: [i32; 7] = [-1, -1, -2, -2, -2, -3, -3];

/// Number of floor line slots
pub const FLOOR_SIZE: usize = FLOOR_SCORES.len();

/// The other player in a two-player game.
///
/// # Panics
///
/// Debug builds assert that `player` is 0 or 1.
#[inline]
#[must_use]
pub fn opponent(player: PlayerId) -> PlayerId {
    debug_assert!(player < NUM_PLAYERS);
    1 - player
}

/// Number of tiles pattern line `line` holds when complete.
#[inline]
#[must_use]
pub const fn required_length(line: usize) -> usize {
    line + 1
}

/// Payload of a tile-placement action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileGrab {
    /// Colour of the tiles taken
    pub tile_type: TileType,
    /// Destination pattern line, or `None` when everything goes to the floor
    pub pattern_line_dest: Option<usize>,
    /// Tiles routed to the pattern line
    pub num_to_pattern_line: u8,
    /// Tiles routed to the floor line
    pub num_to_floor_line: u8,
}

impl TileGrab {
    /// Cheap desirability proxy: productive tiles minus wasted tiles.
    #[inline]
    #[must_use]
    pub fn desirability(&self) -> i32 {
        i32::from(self.num_to_pattern_line) - i32::from(self.num_to_floor_line)
    }
}

/// An action produced by the rule engine.
pub trait GameAction: Clone + fmt::Debug {
    /// Tile placement payload, or `None` for actions that place nothing
    /// (end of round and similar forced moves).
    fn tile_grab(&self) -> Option<&TileGrab>;
}

/// Read-only view of one player's sub-state.
pub trait PlayerBoard {
    /// Tiles currently in pattern line `line` (0-based, `line < GRID_SIZE`).
    fn pattern_line_fill(&self, line: usize) -> usize;

    /// Whether the wall cell at (`row`, `col`) holds a tile.
    fn wall_occupied(&self, row: usize, col: usize) -> bool;

    /// Whether floor slot `slot` (`slot < FLOOR_SIZE`) holds a tile.
    fn floor_occupied(&self, slot: usize) -> bool;

    /// Points the rule engine awards for the current round.
    fn score_round(&self) -> i32;

    /// End-of-game bonus points the rule engine would award now.
    fn end_of_game_score(&self) -> i32;
}

/// Full game snapshot.
pub trait GameState: Clone {
    /// Per-player sub-state type
    type Board: PlayerBoard;

    /// Board of `player`.
    fn player_board(&self, player: PlayerId) -> &Self::Board;

    /// `false` once no tiles are left to draw or place (terminal).
    fn tiles_remaining(&self) -> bool;

    /// Player holding the first-player marker for the next round, if known.
    fn next_first_player(&self) -> Option<PlayerId> {
        None
    }
}

/// The rule engine.
///
/// `legal_actions` must be deterministic for equal inputs: stable tie-breaks in
/// the search rely on a fixed enumeration order.
pub trait GameRule {
    /// Snapshot type
    type State: GameState;
    /// Action type
    type Action: GameAction;

    /// Legal actions for `player` in `state`, in a deterministic order.
    fn legal_actions(&self, state: &Self::State, player: PlayerId) -> Vec<Self::Action>;

    /// Apply `action` for `player` to an owned copy of a state.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError`] when the action cannot be applied.
    fn generate_successor(
        &self,
        state: Self::State,
        action: &Self::Action,
        player: PlayerId,
    ) -> Result<Self::State, RuleError>;
}
