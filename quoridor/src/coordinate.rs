use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use anyhow::anyhow;

/// A cell on the board, row-major. Row 0 is player one's starting row and
/// player two's goal row.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell one row down, toward higher row numbers.
    pub fn below(&self) -> Self {
        Self::new(self.row + 1, self.col)
    }

    /// The cell one column over, toward higher column numbers.
    pub fn right(&self) -> Self {
        Self::new(self.row, self.col + 1)
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl Debug for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl FromStr for Coordinate {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once(',')
            .ok_or_else(|| anyhow!("Invalid coordinate: {}", s))?;

        let row = row
            .trim()
            .parse::<usize>()
            .map_err(|_| anyhow!("Invalid row: {}", row))?;

        let col = col
            .trim()
            .parse::<usize>()
            .map_err(|_| anyhow!("Invalid column: {}", col))?;

        Ok(Self::new(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_display() {
        assert_eq!(format!("{}", Coordinate::new(0, 4)), "0,4");
        assert_eq!(format!("{}", Coordinate::new(8, 0)), "8,0");
    }

    #[test]
    fn test_coordinate_from_str() {
        let coordinate: Coordinate = "2,3".parse().unwrap();

        assert_eq!(coordinate, Coordinate::new(2, 3));
    }

    #[test]
    fn test_coordinate_from_str_with_spaces() {
        let coordinate: Coordinate = "2, 3".parse().unwrap();

        assert_eq!(coordinate, Coordinate::new(2, 3));
    }

    #[test]
    fn test_coordinate_from_str_rejects_garbage() {
        assert!("".parse::<Coordinate>().is_err());
        assert!("23".parse::<Coordinate>().is_err());
        assert!("a,b".parse::<Coordinate>().is_err());
        assert!("2,".parse::<Coordinate>().is_err());
    }

    #[test]
    fn test_coordinate_neighbors() {
        let coordinate = Coordinate::new(1, 2);

        assert_eq!(coordinate.below(), Coordinate::new(2, 2));
        assert_eq!(coordinate.right(), Coordinate::new(1, 3));
    }
}
