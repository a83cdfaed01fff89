//! Action ranking
//!
//! Reduces the branching factor before a node is expanded. Tile placements are
//! grouped by (tile type, destination line) and only the most desirable
//! placement of each group survives, where desirability is tiles routed to the
//! pattern line minus tiles routed to the floor.
//!
//! This is lossy pruning, not move ordering: the dropped placements are legal
//! and may occasionally be the best move. Floor-only placements and actions
//! without a tile payload are dropped as well. When nothing survives, the
//! unranked list is returned so a node is never left without actions.

use std::collections::HashMap;

use crate::game::{GameAction, TileType};

/// Best placement per (tile type, destination line), most desirable first.
///
/// Ties keep the placement seen first, and the final order is stable.
#[must_use]
pub fn rank_actions<A: GameAction>(actions: &[A]) -> Vec<A> {
    let mut best: Vec<(i32, &A)> = Vec::new();
    let mut slots: HashMap<(TileType, usize), usize> = HashMap::new();

    for action in actions {
        let Some(grab) = action.tile_grab() else {
            continue;
        };
        let Some(line) = grab.pattern_line_dest else {
            continue;
        };
        let desirability = grab.desirability();
        match slots.get(&(grab.tile_type, line)) {
            Some(&slot) => {
                if desirability > best[slot].0 {
                    best[slot] = (desirability, action);
                }
            }
            None => {
                slots.insert((grab.tile_type, line), best.len());
                best.push((desirability, action));
            }
        }
    }

    if best.is_empty() {
        return actions.to_vec();
    }

    best.sort_by(|a, b| b.0.cmp(&a.0));
    best.into_iter().map(|(_, action)| action.clone()).collect()
}

/// Ranked actions when `enabled`, otherwise the list unchanged.
#[inline]
#[must_use]
pub fn order_actions<A: GameAction>(actions: Vec<A>, enabled: bool) -> Vec<A> {
    if enabled {
        rank_actions(&actions)
    } else {
        actions
    }
}
