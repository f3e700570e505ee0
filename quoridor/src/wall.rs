use std::fmt::{self, Debug, Display, Formatter};

use itertools::Itertools;

use crate::coordinate::Coordinate;

#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A wall of length two, identified by its orientation and upper-left
/// anchor cell. A horizontal wall lies under the anchor and the cell to
/// its right; a vertical wall lies to the right of the anchor and the
/// cell below it.
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub struct Wall {
    pub orientation: Orientation,
    pub anchor: Coordinate,
}

impl Wall {
    pub fn horizontal(anchor: Coordinate) -> Self {
        Self {
            orientation: Orientation::Horizontal,
            anchor,
        }
    }

    pub fn vertical(anchor: Coordinate) -> Self {
        Self {
            orientation: Orientation::Vertical,
            anchor,
        }
    }

    /// The pair of cells the wall runs along.
    pub fn anchors(&self) -> (Coordinate, Coordinate) {
        match self.orientation {
            Orientation::Horizontal => (self.anchor, self.anchor.right()),
            Orientation::Vertical => (self.anchor, self.anchor.below()),
        }
    }

    /// The two cell-to-cell edges the wall severs. Goal edges are never
    /// among them.
    pub fn severed_edges(&self) -> [(Coordinate, Coordinate); 2] {
        let (first, second) = self.anchors();

        match self.orientation {
            Orientation::Horizontal => [(first, first.below()), (second, second.below())],
            Orientation::Vertical => [(first, first.right()), (second, second.right())],
        }
    }

    /// Every wall placement that fits on a board of the given size, all
    /// horizontal walls in row-major order followed by all vertical walls
    /// in row-major order. No overlap or blockage filtering; screening
    /// candidates for game legality is the caller's concern.
    pub fn catalog(size: usize) -> Vec<Wall> {
        let limit = size.saturating_sub(1);
        let anchors = || (0..limit).cartesian_product(0..limit);

        let horizontal = anchors().map(|(row, col)| Wall::horizontal(Coordinate::new(row, col)));
        let vertical = anchors().map(|(row, col)| Wall::vertical(Coordinate::new(row, col)));

        horizontal.chain(vertical).collect()
    }
}

impl Display for Wall {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let orientation = match self.orientation {
            Orientation::Horizontal => 'h',
            Orientation::Vertical => 'v',
        };

        write!(f, "{}{}", self.anchor, orientation)
    }
}

impl Debug for Wall {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_display() {
        assert_eq!(format!("{}", Wall::horizontal(Coordinate::new(2, 3))), "2,3h");
        assert_eq!(format!("{}", Wall::vertical(Coordinate::new(0, 0))), "0,0v");
    }

    #[test]
    fn test_horizontal_wall_severs_downward_edges() {
        let wall = Wall::horizontal(Coordinate::new(1, 0));

        assert_eq!(wall.anchors(), (Coordinate::new(1, 0), Coordinate::new(1, 1)));
        assert_eq!(
            wall.severed_edges(),
            [
                (Coordinate::new(1, 0), Coordinate::new(2, 0)),
                (Coordinate::new(1, 1), Coordinate::new(2, 1)),
            ]
        );
    }

    #[test]
    fn test_vertical_wall_severs_rightward_edges() {
        let wall = Wall::vertical(Coordinate::new(0, 1));

        assert_eq!(wall.anchors(), (Coordinate::new(0, 1), Coordinate::new(1, 1)));
        assert_eq!(
            wall.severed_edges(),
            [
                (Coordinate::new(0, 1), Coordinate::new(0, 2)),
                (Coordinate::new(1, 1), Coordinate::new(1, 2)),
            ]
        );
    }

    #[test]
    fn test_catalog_size_three() {
        let catalog = Wall::catalog(3);

        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog[0], Wall::horizontal(Coordinate::new(0, 0)));
        assert_eq!(catalog[3], Wall::horizontal(Coordinate::new(1, 1)));
        assert_eq!(catalog[4], Wall::vertical(Coordinate::new(0, 0)));
        assert_eq!(catalog[7], Wall::vertical(Coordinate::new(1, 1)));
    }

    #[test]
    fn test_catalog_counts() {
        for size in 3..=20 {
            let catalog = Wall::catalog(size);

            assert_eq!(catalog.len(), 2 * (size - 1) * (size - 1));
            assert!(catalog.iter().all_unique());
        }
    }

    #[test]
    fn test_catalog_anchors_stay_on_board() {
        for wall in Wall::catalog(5) {
            let (first, second) = wall.anchors();

            for coordinate in [first, second] {
                assert!(coordinate.row < 5);
                assert!(coordinate.col < 5);
            }
            for (from, to) in wall.severed_edges() {
                assert!(from.row < 5 && from.col < 5);
                assert!(to.row < 5 && to.col < 5);
            }
        }
    }
}
