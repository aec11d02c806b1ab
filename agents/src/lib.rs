pub mod greedy;
pub mod random;

use checkers_core::{Game, Move, PieceId};

/// Core trait for checkers agents
pub trait Agent {
    /// Pick a move for the side whose turn it is
    fn choose_move(&mut self, game: &Game) -> Option<(PieceId, Move)>;

    /// Get the agent's name
    fn name(&self) -> &str;
}

pub use greedy::GreedyAgent;
pub use random::RandomAgent;
