use crate::Agent;
use checkers_core::{Game, Move, PieceId};
use rand::seq::SliceRandom;
use rand::thread_rng;

pub struct RandomAgent {
    name: String,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            name: "Random".to_string(),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn choose_move(&mut self, game: &Game) -> Option<(PieceId, Move)> {
        let mut candidates: Vec<(PieceId, Move)> = Vec::new();
        for (id, moves) in game.player_legal_moves(game.turn()) {
            for mv in moves {
                candidates.push((id, mv));
            }
        }

        let mut rng = thread_rng();
        candidates.choose(&mut rng).cloned()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
