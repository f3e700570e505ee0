use std::fmt::{self, Debug, Display, Formatter};

use crate::coordinate::Coordinate;
use crate::player::Player;

/// A vertex of the movement graph: either a board cell or one of the two
/// absorbing goal sentinels.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub enum Node {
    Cell(Coordinate),
    Goal(Player),
}

impl Node {
    pub fn as_cell(&self) -> Option<Coordinate> {
        match self {
            Node::Cell(coordinate) => Some(*coordinate),
            Node::Goal(_) => None,
        }
    }

    pub fn is_goal(&self) -> bool {
        matches!(self, Node::Goal(_))
    }
}

impl From<Coordinate> for Node {
    fn from(coordinate: Coordinate) -> Self {
        Node::Cell(coordinate)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::Cell(coordinate) => write!(f, "{coordinate}"),
            Node::Goal(player) => write!(f, "{player}goal"),
        }
    }
}

impl Debug for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_display() {
        assert_eq!(format!("{}", Node::Cell(Coordinate::new(1, 2))), "1,2");
        assert_eq!(format!("{}", Node::Goal(Player::One)), "p1goal");
        assert_eq!(format!("{}", Node::Goal(Player::Two)), "p2goal");
    }

    #[test]
    fn test_node_as_cell() {
        assert_eq!(
            Node::Cell(Coordinate::new(1, 2)).as_cell(),
            Some(Coordinate::new(1, 2))
        );
        assert_eq!(Node::Goal(Player::One).as_cell(), None);
    }
}
