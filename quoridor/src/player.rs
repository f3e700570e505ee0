use std::fmt::{self, Display, Formatter};

use crate::coordinate::Coordinate;
use crate::node::Node;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(&self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// The sentinel this player is pathing toward.
    pub fn goal(&self) -> Node {
        Node::Goal(*self)
    }

    /// Row whose cells carry the zero weight edge into this player's goal.
    pub fn goal_row(&self, size: usize) -> usize {
        match self {
            Player::One => size - 1,
            Player::Two => 0,
        }
    }

    /// Starting cell: middle column of the row furthest from the goal.
    pub fn start(&self, size: usize) -> Coordinate {
        match self {
            Player::One => Coordinate::new(0, size / 2),
            Player::Two => Coordinate::new(size - 1, size / 2),
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn from_index(index: usize) -> Self {
        assert!(
            index == 1 || index == 2,
            "player index must be 1 or 2, got {index}"
        );

        match index {
            1 => Player::One,
            _ => Player::Two,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "p1"),
            Player::Two => write!(f, "p2"),
        }
    }
}
