use crate::Agent;
use checkers_core::{Game, Move, Piece, PieceId, Rank, Square};
use rand::seq::SliceRandom;
use rand::thread_rng;

/// Value of a jumped man when scoring capture chains.
const MAN_VALUE: u32 = 3;

/// Value of a jumped king when scoring capture chains.
const KING_VALUE: u32 = 5;

/// Heuristic agent.
///
/// Plays with a fixed priority order: when forced to take, it takes the
/// chain worth the most material; otherwise it crowns a man when it can,
/// keeps its men marching forward, and falls back to a random move. Ties
/// within a priority are broken at random.
pub struct GreedyAgent {
    name: String,
}

impl GreedyAgent {
    pub fn new() -> Self {
        GreedyAgent {
            name: "Greedy".to_string(),
        }
    }
}

impl Default for GreedyAgent {
    fn default() -> Self {
        Self::new()
    }
}

/// Total material a capture chain takes off the board, scored from the
/// pre-move position.
fn chain_value(game: &Game, origin: Square, mv: &Move) -> u32 {
    let mut from = origin;
    let mut value = 0;
    for &landing in mv.landings() {
        if from.is_jump_distance(landing) {
            if let Ok(jumped) = game.get_piece(from.midpoint(landing)) {
                value += match jumped.rank {
                    Rank::Man => MAN_VALUE,
                    Rank::King => KING_VALUE,
                };
            }
        }
        from = landing;
    }
    value
}

impl Agent for GreedyAgent {
    fn choose_move(&mut self, game: &Game) -> Option<(PieceId, Move)> {
        let side = game.turn();
        let dims = game.dims();

        let mut candidates: Vec<(PieceId, Piece, Move)> = Vec::new();
        for (id, moves) in game.player_legal_moves(side) {
            if let Some(piece) = game.piece(id) {
                for mv in moves {
                    candidates.push((id, piece, mv));
                }
            }
        }
        if candidates.is_empty() {
            return None;
        }
        let mut rng = thread_rng();

        // Forced capture: every candidate is a jump. Take the biggest haul.
        if candidates[0].2.is_jump_from(candidates[0].1.square) {
            let best = candidates
                .iter()
                .map(|(_, piece, mv)| chain_value(game, piece.square, mv))
                .max()
                .unwrap_or(0);
            let top: Vec<(PieceId, Move)> = candidates
                .iter()
                .filter(|(_, piece, mv)| chain_value(game, piece.square, mv) == best)
                .map(|(id, _, mv)| (*id, mv.clone()))
                .collect();
            return top.choose(&mut rng).cloned();
        }

        // Crown a man when possible.
        let crowning: Vec<(PieceId, Move)> = candidates
            .iter()
            .filter(|(_, piece, mv)| {
                piece.rank == Rank::Man && mv.last().row == side.crown_row(dims)
            })
            .map(|(id, _, mv)| (*id, mv.clone()))
            .collect();
        if !crowning.is_empty() {
            return crowning.choose(&mut rng).cloned();
        }

        // Keep the men marching.
        let advances: Vec<(PieceId, Move)> = candidates
            .iter()
            .filter(|(_, piece, _)| piece.rank == Rank::Man)
            .map(|(id, _, mv)| (*id, mv.clone()))
            .collect();
        if !advances.is_empty() {
            return advances.choose(&mut rng).cloned();
        }

        candidates
            .choose(&mut rng)
            .map(|(id, _, mv)| (*id, mv.clone()))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
