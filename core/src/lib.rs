pub mod board;
pub mod game;
pub mod move_gen;
pub mod perft;
pub mod types;

pub use board::*;
pub use game::*;
pub use move_gen::*;
pub use perft::{perft, perft_divide, positions};
pub use types::*;
