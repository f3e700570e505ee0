pub mod engine;
pub mod evaluation;
pub mod game_state;

pub use crate::engine::*;
pub use crate::evaluation::*;
pub use crate::game_state::*;
