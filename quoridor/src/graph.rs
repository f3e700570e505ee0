use crate::constants::MIN_BOARD_SIZE;
use crate::coordinate::Coordinate;
use crate::error::{Error, Result};
use crate::node::Node;
use crate::pathing::Distance;
use crate::player::Player;
use crate::wall::Wall;

const GOAL_NODES: usize = 2;

const CELL_EDGE_WEIGHT: Distance = 1;
const GOAL_EDGE_WEIGHT: Distance = 0;

/// Cells occupy indices `0..size*size` in row-major order, followed by the
/// two goal sentinels.
pub(crate) fn node_index(size: usize, node: Node) -> usize {
    match node {
        Node::Cell(coordinate) => {
            debug_assert!(
                coordinate.row < size && coordinate.col < size,
                "{coordinate} is off the board"
            );
            coordinate.row * size + coordinate.col
        }
        Node::Goal(Player::One) => size * size,
        Node::Goal(Player::Two) => size * size + 1,
    }
}

pub(crate) fn node_at(size: usize, index: usize) -> Node {
    let cells = size * size;

    if index < cells {
        Node::Cell(Coordinate::new(index / size, index % size))
    } else if index == cells {
        Node::Goal(Player::One)
    } else {
        Node::Goal(Player::Two)
    }
}

#[derive(Clone, Debug)]
struct Edge {
    to: usize,
    weight: Distance,
}

/// The movement graph for a board: one node per cell plus a goal sentinel
/// per player. Cell adjacencies are stored in both directions with weight
/// one; each boundary-row cell additionally holds a one-directional, zero
/// weight edge into the sentinel of the player whose goal row it is.
#[derive(Clone, Debug)]
pub struct Graph {
    size: usize,
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    pub fn build(size: usize) -> Result<Self> {
        if size < MIN_BOARD_SIZE {
            return Err(Error::InvalidBoardSize(size));
        }

        let mut adjacency = vec![Vec::new(); size * size + GOAL_NODES];

        for row in 0..size {
            for col in 0..size {
                let index = row * size + col;
                let edges = &mut adjacency[index];

                // Sentinel edge first, then up, down, left, right.
                if row == 0 {
                    edges.push(Edge {
                        to: size * size + 1,
                        weight: GOAL_EDGE_WEIGHT,
                    });
                } else if row == size - 1 {
                    edges.push(Edge {
                        to: size * size,
                        weight: GOAL_EDGE_WEIGHT,
                    });
                }

                if row > 0 {
                    edges.push(Edge {
                        to: index - size,
                        weight: CELL_EDGE_WEIGHT,
                    });
                }
                if row + 1 < size {
                    edges.push(Edge {
                        to: index + size,
                        weight: CELL_EDGE_WEIGHT,
                    });
                }
                if col > 0 {
                    edges.push(Edge {
                        to: index - 1,
                        weight: CELL_EDGE_WEIGHT,
                    });
                }
                if col + 1 < size {
                    edges.push(Edge {
                        to: index + 1,
                        weight: CELL_EDGE_WEIGHT,
                    });
                }
            }
        }

        Ok(Self { size, adjacency })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed adjacency entries.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.row < self.size && coordinate.col < self.size
    }

    fn contains_node(&self, node: Node) -> bool {
        match node {
            Node::Cell(coordinate) => self.contains(coordinate),
            Node::Goal(_) => true,
        }
    }

    pub fn has_edge(&self, from: Node, to: Node) -> bool {
        if !self.contains_node(from) || !self.contains_node(to) {
            return false;
        }

        let to = node_index(self.size, to);

        self.adjacency[node_index(self.size, from)]
            .iter()
            .any(|edge| edge.to == to)
    }

    pub fn neighbors(&self, node: Node) -> impl Iterator<Item = (Node, Distance)> + '_ {
        assert!(self.contains_node(node), "{node} is not in the graph");

        self.adjacency[node_index(self.size, node)]
            .iter()
            .map(|edge| (node_at(self.size, edge.to), edge.weight))
    }

    /// Removes the edge from `a` to `b`, and the reverse entry if one is
    /// stored. Fails when the forward edge does not exist.
    pub fn remove_edge(&mut self, a: Node, b: Node) -> Result<()> {
        if !self.contains_node(a) || !self.contains_node(b) {
            return Err(Error::EdgeNotFound(a, b));
        }

        let from = node_index(self.size, a);
        let to = node_index(self.size, b);

        if !self.remove_directed(from, to) {
            return Err(Error::EdgeNotFound(a, b));
        }

        // Sentinel edges have no reverse entry.
        self.remove_directed(to, from);

        Ok(())
    }

    /// Permanently severs the wall's two edges. Validates both edges up
    /// front so a rejected wall leaves the graph untouched.
    pub fn apply_wall(&mut self, wall: &Wall) -> Result<()> {
        let severed = wall.severed_edges();

        for (from, to) in severed {
            if !self.has_edge(from.into(), to.into()) {
                return Err(Error::EdgeNotFound(from.into(), to.into()));
            }
        }

        for (from, to) in severed {
            self.remove_edge(from.into(), to.into())?;
        }

        Ok(())
    }

    pub fn view(&self) -> GraphView<'_> {
        GraphView {
            graph: self,
            masked: None,
        }
    }

    /// A view with the wall's two edges masked out, leaving the graph
    /// itself untouched. Fails when either edge is already missing.
    pub fn wall_view(&self, wall: &Wall) -> Result<GraphView<'_>> {
        let severed = wall.severed_edges();

        for (from, to) in severed {
            if !self.has_edge(from.into(), to.into()) {
                return Err(Error::EdgeNotFound(from.into(), to.into()));
            }
        }

        let masked = severed.map(|(from, to)| {
            (
                node_index(self.size, from.into()),
                node_index(self.size, to.into()),
            )
        });

        Ok(GraphView {
            graph: self,
            masked: Some(masked),
        })
    }

    fn remove_directed(&mut self, from: usize, to: usize) -> bool {
        let edges = &mut self.adjacency[from];

        match edges.iter().position(|edge| edge.to == to) {
            Some(index) => {
                edges.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Read-only traversal handle over a graph, optionally masking the two
/// edges a candidate wall would sever. Wall trials traverse through a
/// masked view instead of copying the graph.
#[derive(Clone, Copy)]
pub struct GraphView<'a> {
    graph: &'a Graph,
    masked: Option<[(usize, usize); 2]>,
}

impl GraphView<'_> {
    pub fn size(&self) -> usize {
        self.graph.size
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub(crate) fn index_of(&self, node: Node) -> usize {
        node_index(self.graph.size, node)
    }

    pub(crate) fn neighbors(&self, index: usize) -> impl Iterator<Item = (usize, Distance)> + '_ {
        self.graph.adjacency[index]
            .iter()
            .filter(move |edge| !self.is_masked(index, edge.to))
            .map(|edge| (edge.to, edge.weight))
    }

    fn is_masked(&self, from: usize, to: usize) -> bool {
        match self.masked {
            Some(pairs) => pairs
                .iter()
                .any(|&(a, b)| (a == from && b == to) || (a == to && b == from)),
            None => false,
        }
    }
}
