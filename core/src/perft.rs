use crate::game::Game;
use crate::types::{Move, PieceId};

/// Counts complete move paths to the given depth.
///
/// A multi-jump chain counts as a single move, matching published draughts
/// perft conventions. Finished positions contribute no further paths.
pub fn perft(game: &Game, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    if game.get_winner().is_some() {
        return 0;
    }

    let moves = game.player_legal_moves(game.turn());
    if depth == 1 {
        return moves.iter().map(|(_, list)| list.len() as u64).sum();
    }

    let mut nodes = 0;
    for (id, list) in moves {
        for mv in list {
            let mut next = game.clone();
            next.move_piece(id, &mv).expect("generated move is legal");
            nodes += perft(&next, depth - 1);
        }
    }
    nodes
}

/// Performs perft with the count broken down by first move.
pub fn perft_divide(game: &Game, depth: u8) -> Vec<(PieceId, Move, u64)> {
    let mut results = Vec::new();
    if depth == 0 || game.get_winner().is_some() {
        return results;
    }

    for (id, list) in game.player_legal_moves(game.turn()) {
        for mv in list {
            let mut next = game.clone();
            next.move_piece(id, &mv).expect("generated move is legal");
            let nodes = perft(&next, depth - 1);
            results.push((id, mv, nodes));
        }
    }
    results
}

/// Known node counts for reference positions.
pub mod positions {
    /// Published English-draughts counts from the standard 8x8 start
    /// (size 3, dark to move): depth / nodes.
    pub const STARTING_8X8: &[(u8, u64)] = &[
        (1, 7),
        (2, 49),
        (3, 302),
        (4, 1469),
        (5, 7361),
        (6, 36_768),
        (7, 179_740),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perft_starting_position() {
        let game = Game::new(3);

        // Shallow depths only, to keep the suite fast.
        for &(depth, expected) in &positions::STARTING_8X8[..4] {
            let result = perft(&game, depth);
            assert_eq!(
                result, expected,
                "perft({}) failed: expected {}, got {}",
                depth, expected, result
            );
        }
    }

    #[test]
    fn test_perft_divide_sums_to_perft() {
        let game = Game::new(3);
        let results = perft_divide(&game, 3);

        assert_eq!(results.len(), 7);
        let total: u64 = results.iter().map(|(_, _, nodes)| nodes).sum();
        assert_eq!(total, perft(&game, 3));
    }

    #[test]
    fn test_perft_zero_depth_is_one() {
        let game = Game::new(1);
        assert_eq!(perft(&game, 0), 1);
    }
}
