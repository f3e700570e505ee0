use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::graph::{node_index, GraphView};
use crate::node::Node;
use crate::player::Player;

pub type Distance = u32;

/// Distance reported for a node no path reaches. Never an error: a walled
/// off goal is a legitimate, maximally bad outcome for the pathing player.
pub const UNREACHABLE: Distance = Distance::MAX;

/// Shortest distances from a single source to every node of a view.
#[derive(Clone, Debug)]
pub struct Distances {
    size: usize,
    values: Vec<Distance>,
}

impl Distances {
    pub fn get(&self, node: Node) -> Distance {
        self.values[node_index(self.size, node)]
    }

    pub fn is_reached(&self, node: Node) -> bool {
        self.get(node) != UNREACHABLE
    }
}

impl GraphView<'_> {
    /// Dijkstra over the view from `source`. Zero weight sentinel edges
    /// mean a goal-row cell settles its own sentinel at distance zero.
    pub fn shortest_paths(&self, source: Node) -> Distances {
        self.dijkstra(source, None)
    }

    /// Distance from `source` to the given player's goal sentinel, or
    /// `UNREACHABLE`. Stops as soon as the sentinel settles.
    pub fn goal_distance(&self, source: Node, goal: Player) -> Distance {
        self.dijkstra(source, Some(goal)).get(Node::Goal(goal))
    }

    fn dijkstra(&self, source: Node, target: Option<Player>) -> Distances {
        let mut values = vec![UNREACHABLE; self.node_count()];
        let mut frontier = BinaryHeap::new();

        let source = self.index_of(source);
        let target = target.map(|player| self.index_of(Node::Goal(player)));

        values[source] = 0;
        frontier.push(Reverse((0, source)));

        while let Some(Reverse((distance, index))) = frontier.pop() {
            if distance > values[index] {
                continue;
            }
            if target == Some(index) {
                break;
            }

            for (neighbor, weight) in self.neighbors(index) {
                let next = distance + weight;

                if next < values[neighbor] {
                    values[neighbor] = next;
                    frontier.push(Reverse((next, neighbor)));
                }
            }
        }

        Distances {
            size: self.size(),
            values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Coordinate;
    use crate::graph::Graph;
    use crate::wall::Wall;

    fn cell(row: usize, col: usize) -> Node {
        Node::Cell(Coordinate::new(row, col))
    }

    #[test]
    fn test_unwalled_distance_is_rows_to_goal() {
        for size in [3, 9] {
            let graph = Graph::build(size).unwrap();
            let view = graph.view();

            for row in 0..size {
                for col in 0..size {
                    let toward_one = view.goal_distance(cell(row, col), Player::One);
                    let toward_two = view.goal_distance(cell(row, col), Player::Two);

                    assert_eq!(toward_one as usize, size - 1 - row);
                    assert_eq!(toward_two as usize, row);
                }
            }
        }
    }

    #[test]
    fn test_goal_row_cell_is_at_distance_zero() {
        let graph = Graph::build(3).unwrap();
        let view = graph.view();

        assert_eq!(view.goal_distance(cell(2, 0), Player::One), 0);
        assert_eq!(view.goal_distance(cell(0, 2), Player::Two), 0);
    }

    #[test]
    fn test_sentinels_do_not_tunnel_between_boundary_cells() {
        let graph = Graph::build(3).unwrap();
        let distances = graph.view().shortest_paths(cell(2, 0));

        // Along the goal row, not through the absorbing sentinel.
        assert_eq!(distances.get(cell(2, 2)), 2);
        assert_eq!(distances.get(Node::Goal(Player::One)), 0);
    }

    #[test]
    fn test_full_map_from_a_corner() {
        let graph = Graph::build(3).unwrap();
        let distances = graph.view().shortest_paths(cell(0, 0));

        assert_eq!(distances.get(cell(0, 0)), 0);
        assert_eq!(distances.get(cell(1, 1)), 2);
        assert_eq!(distances.get(cell(2, 2)), 4);
        assert_eq!(distances.get(Node::Goal(Player::One)), 2);
        assert_eq!(distances.get(Node::Goal(Player::Two)), 0);
    }

    #[test]
    fn test_applied_wall_forces_a_detour() {
        let mut graph = Graph::build(3).unwrap();
        graph.apply_wall(&Wall::horizontal(Coordinate::new(1, 0))).unwrap();
        let view = graph.view();

        assert_eq!(view.goal_distance(cell(0, 1), Player::One), 3);
        assert_eq!(view.goal_distance(cell(2, 1), Player::Two), 3);
    }

    #[test]
    fn test_masked_view_matches_applied_wall() {
        let wall = Wall::horizontal(Coordinate::new(1, 0));

        let mut applied = Graph::build(3).unwrap();
        applied.apply_wall(&wall).unwrap();

        let canonical = Graph::build(3).unwrap();
        let masked = canonical.wall_view(&wall).unwrap();

        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(
                    masked.goal_distance(cell(row, col), Player::One),
                    applied.view().goal_distance(cell(row, col), Player::One)
                );
            }
        }
    }

    #[test]
    fn test_walled_off_goal_is_unreachable() {
        let mut graph = Graph::build(2).unwrap();
        graph.apply_wall(&Wall::horizontal(Coordinate::new(0, 0))).unwrap();

        let distances = graph.view().shortest_paths(cell(0, 0));

        assert_eq!(distances.get(Node::Goal(Player::One)), UNREACHABLE);
        assert!(!distances.is_reached(Node::Goal(Player::One)));
        assert_eq!(distances.get(cell(0, 1)), 1);
        assert_eq!(distances.get(Node::Goal(Player::Two)), 0);
    }

    #[test]
    fn test_goal_distance_matches_full_map() {
        let mut graph = Graph::build(5).unwrap();
        graph.apply_wall(&Wall::horizontal(Coordinate::new(2, 1))).unwrap();
        graph.apply_wall(&Wall::vertical(Coordinate::new(0, 2))).unwrap();
        let view = graph.view();

        for row in 0..5 {
            for col in 0..5 {
                let source = cell(row, col);
                let full = view.shortest_paths(source);

                for player in [Player::One, Player::Two] {
                    assert_eq!(
                        view.goal_distance(source, player),
                        full.get(Node::Goal(player))
                    );
                }
            }
        }
    }

    #[test]
    fn test_distances_are_deterministic() {
        let graph = Graph::build(4).unwrap();
        let first = graph.view().shortest_paths(cell(1, 2));
        let second = graph.view().shortest_paths(cell(1, 2));

        for index in 0..graph.node_count() {
            let node = crate::graph::node_at(4, index);
            assert_eq!(first.get(node), second.get(node));
        }
    }
}
