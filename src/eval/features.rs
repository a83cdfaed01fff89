//! Per-player board features and their weights
//!
//! Every feature is a pure function of one [`PlayerBoard`]. The evaluators in
//! [`super::heuristic`] combine them per player and take the difference; the
//! breadth search scores a single board with [`round_score`].

use crate::game::{required_length, PlayerBoard, FLOOR_SCORES, FLOOR_SIZE, GRID_SIZE};

/// Fixed feature weights
pub struct FeatureWeight;

impl FeatureWeight {
    /// Bonus for a fully occupied wall row
    pub const COMPLETE_ROW: i32 = 2;
    /// Bonus for a fully occupied wall column
    pub const COMPLETE_COLUMN: i32 = 7;
    /// Bonus per occupied orthogonal neighbour of an occupied wall cell
    pub const ADJACENT_TILE: i32 = 3;
    /// Penalty for an incomplete pattern line, indexed by line.
    /// Short lines are cheap to finish, so leaving them open costs more.
    pub const INCOMPLETE_LINE: [i32; GRID_SIZE] = [5, 4, 3, 2, 1];
    /// Bonus for the centre wall cell
    pub const CENTRE_CELL: i32 = 2;
    /// Bonus for the other cells of the inner 3x3 ring
    pub const INNER_RING_CELL: i32 = 1;
    /// Bonus for holding the first-player marker next round
    pub const FIRST_PLAYER: i32 = 1;
}

const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Points the rule engine has already attributed: round score plus
/// end-of-game bonuses.
#[inline]
#[must_use]
pub fn permanent_score<B: PlayerBoard>(board: &B) -> i32 {
    board.score_round() + board.end_of_game_score()
}

/// Bonus for completed wall rows and columns.
#[must_use]
pub fn completion_bonus<B: PlayerBoard>(board: &B) -> i32 {
    let rows = (0..GRID_SIZE)
        .filter(|&row| (0..GRID_SIZE).all(|col| board.wall_occupied(row, col)))
        .count() as i32;
    let cols = (0..GRID_SIZE)
        .filter(|&col| (0..GRID_SIZE).all(|row| board.wall_occupied(row, col)))
        .count() as i32;
    rows * FeatureWeight::COMPLETE_ROW + cols * FeatureWeight::COMPLETE_COLUMN
}

/// Bonus for occupied wall cells touching other occupied cells.
///
/// Each adjacent pair is counted from both sides.
#[must_use]
pub fn adjacency_bonus<B: PlayerBoard>(board: &B) -> i32 {
    let mut neighbours = 0;
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            if !board.wall_occupied(row, col) {
                continue;
            }
            for &(dr, dc) in &ORTHOGONAL {
                let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
                else {
                    continue;
                };
                if r < GRID_SIZE && c < GRID_SIZE && board.wall_occupied(r, c) {
                    neighbours += 1;
                }
            }
        }
    }
    neighbours * FeatureWeight::ADJACENT_TILE
}

/// Number of pattern lines not holding exactly their required length.
#[must_use]
pub fn unfilled_lines<B: PlayerBoard>(board: &B) -> usize {
    (0..GRID_SIZE)
        .filter(|&line| board.pattern_line_fill(line) != required_length(line))
        .count()
}

/// Squared count of unfilled pattern lines (returned as a positive penalty).
#[inline]
#[must_use]
pub fn unfilled_line_penalty<B: PlayerBoard>(board: &B) -> i32 {
    let count = unfilled_lines(board) as i32;
    count * count
}

/// Index-weighted penalty for incomplete pattern lines (positive).
#[must_use]
pub fn incomplete_line_penalty<B: PlayerBoard>(board: &B) -> i32 {
    (0..GRID_SIZE)
        .filter(|&line| board.pattern_line_fill(line) != required_length(line))
        .map(|line| FeatureWeight::INCOMPLETE_LINE[line])
        .sum()
}

/// Position-weighted floor penalty: slot `i` costs `i + 1` (positive).
#[must_use]
pub fn floor_slot_penalty<B: PlayerBoard>(board: &B) -> i32 {
    (0..FLOOR_SIZE)
        .filter(|&slot| board.floor_occupied(slot))
        .map(|slot| slot as i32 + 1)
        .sum()
}

/// Floor score from the rule table (zero or negative).
#[must_use]
pub fn floor_score<B: PlayerBoard>(board: &B) -> i32 {
    (0..FLOOR_SIZE)
        .filter(|&slot| board.floor_occupied(slot))
        .map(|slot| FLOOR_SCORES[slot])
        .sum()
}

/// Bonus for wall tiles in the inner 3x3 ring, centre counted double.
#[must_use]
pub fn centre_bonus<B: PlayerBoard>(board: &B) -> i32 {
    let centre = GRID_SIZE / 2;
    let mut score = 0;
    for row in 1..GRID_SIZE - 1 {
        for col in 1..GRID_SIZE - 1 {
            if !board.wall_occupied(row, col) {
                continue;
            }
            score += if row == centre && col == centre {
                FeatureWeight::CENTRE_CELL
            } else {
                FeatureWeight::INNER_RING_CELL
            };
        }
    }
    score
}

/// Single-step heuristic used by the breadth search and the greedy strategy.
///
/// Sum of:
/// - `-(unfilled pattern lines)^2`
/// - floor score from [`FLOOR_SCORES`]
/// - wall completion bonus
/// - permanent score from the rule engine
#[must_use]
pub fn round_score<B: PlayerBoard>(board: &B) -> i32 {
    -unfilled_line_penalty(board) + floor_score(board) + completion_bonus(board) + permanent_score(board)
}
