pub mod action;
pub mod constants;
pub mod coordinate;
mod display;
pub mod engine;
pub mod error;
pub mod evaluate;
pub mod game_state;
pub mod graph;
pub mod node;
pub mod pathing;
pub mod player;
pub mod wall;

pub use crate::action::Action;
pub use crate::constants::{DEFAULT_BOARD_SIZE, MIN_BOARD_SIZE};
pub use crate::coordinate::Coordinate;
pub use crate::engine::Engine;
pub use crate::error::{Error, Result};
pub use crate::evaluate::{Evaluation, Score};
pub use crate::game_state::{GameState, PlayerState};
pub use crate::graph::{Graph, GraphView};
pub use crate::node::Node;
pub use crate::pathing::{Distance, Distances, UNREACHABLE};
pub use crate::player::Player;
pub use crate::wall::{Orientation, Wall};
