use thiserror::Error;

use crate::coordinate::Coordinate;
use crate::node::Node;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum Error {
    #[error("board size must be at least 2, got {0}")]
    InvalidBoardSize(usize),

    #[error("no edge between {0} and {1}")]
    EdgeNotFound(Node, Node),

    #[error("{0} is outside a board of size {1}")]
    OutOfBounds(Coordinate, usize),
}
