use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use serde::de::{Error as DeError, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::coordinate::Coordinate;
use crate::wall::Wall;

/// A candidate move: step the pawn to a cell, or place a wall. Carries no
/// player; the caller names the acting player when applying it.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub enum Action {
    MovePawn(Coordinate),
    PlaceWall(Wall),
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Action::MovePawn(coordinate) => write!(f, "{coordinate}"),
            Action::PlaceWall(wall) => write!(f, "{wall}"),
        }
    }
}

impl Debug for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

/// Moves read as `row,col`; wall placements append `h` or `v` for the
/// orientation, as in `4,3h`.
impl FromStr for Action {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Some(anchor) = s.strip_suffix('h') {
            return Ok(Action::PlaceWall(Wall::horizontal(anchor.parse()?)));
        }

        if let Some(anchor) = s.strip_suffix('v') {
            return Ok(Action::PlaceWall(Wall::vertical(anchor.parse()?)));
        }

        Ok(Action::MovePawn(s.parse()?))
    }
}

impl Serialize for Action {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

struct ActionVisitor;

impl Visitor<'_> for ActionVisitor {
    type Value = Action;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("a string describing a pawn move or wall placement")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: DeError,
    {
        Action::from_str(value).map_err(DeError::custom)
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(ActionVisitor)
    }
}
