//! Complete distance graph over the depot and drop points of a grid.

use serde::{Deserialize, Serialize};

use crate::traits::{CellStatus, GridSnapshot};

/// A depot or drop point position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    pub x: i32,
    pub y: i32,
    pub is_depot: bool,
}

impl Node {
    pub fn depot(x: i32, y: i32) -> Self {
        Self { x, y, is_depot: true }
    }

    pub fn drop_point(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            is_depot: false,
        }
    }

    /// Manhattan distance to another node.
    pub fn distance_to(&self, other: &Node) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Undirected edge between two distinct nodes.
///
/// `from` is the endpoint discovered first; direction carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: Node,
    pub to: Node,
    pub weight: u32,
}

impl Edge {
    pub fn new(from: Node, to: Node) -> Self {
        Self {
            from,
            to,
            weight: from.distance_to(&to),
        }
    }

    pub fn touches(&self, node: Node) -> bool {
        self.from == node || self.to == node
    }

    pub fn connects(&self, a: Node, b: Node) -> bool {
        self.touches(a) && self.touches(b)
    }

    /// The endpoint opposite `node`, or `None` if `node` is not an endpoint.
    pub fn other_end(&self, node: Node) -> Option<Node> {
        if self.from == node {
            Some(self.to)
        } else if self.to == node {
            Some(self.from)
        } else {
            None
        }
    }
}

/// Nodes plus every edge between them. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Scans the grid row by row, left to right, turning depot and drop point
    /// cells into nodes. Never fails; degenerate grids give degenerate graphs.
    pub fn from_grid<G: GridSnapshot + ?Sized>(grid: &G) -> Self {
        let mut nodes = Vec::new();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let is_depot = match grid.cell(x, y) {
                    Some(CellStatus::Depot) => true,
                    Some(CellStatus::DropPoint) => false,
                    _ => continue,
                };
                nodes.push(Node {
                    x: x as i32,
                    y: y as i32,
                    is_depot,
                });
            }
        }
        Self::from_nodes(nodes)
    }

    /// Builds the complete graph over `nodes`, keeping their order.
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        let mut edges = Vec::with_capacity(nodes.len() * nodes.len().saturating_sub(1) / 2);
        for (i, first) in nodes.iter().enumerate() {
            for second in &nodes[i + 1..] {
                edges.push(Edge::new(*first, *second));
            }
        }
        Self { nodes, edges }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// First depot in discovery order.
    pub fn depot(&self) -> Option<Node> {
        self.nodes.iter().copied().find(|node| node.is_depot)
    }

    pub fn drop_points(&self) -> impl Iterator<Item = Node> + '_ {
        self.nodes.iter().copied().filter(|node| !node.is_depot)
    }

    /// Deliveries needed to finish a route: one per node besides the depot.
    pub fn delivery_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CellGrid;

    #[test]
    fn test_single_edge_weight() {
        let grid: CellGrid = "D\n.\n.\nP".parse().unwrap();
        let graph = Graph::from_grid(&grid);
        assert_eq!(graph.nodes(), &[Node::depot(0, 0), Node::drop_point(0, 3)]);
        assert_eq!(graph.edges().len(), 1);
        assert_eq!(graph.edges()[0].weight, 3);
    }

    #[test]
    fn test_complete_edge_count() {
        let grid: CellGrid = "D.P.P\n.P...\nP..P.".parse().unwrap();
        let graph = Graph::from_grid(&grid);
        let n = graph.nodes().len();
        assert_eq!(n, 6);
        assert_eq!(graph.edges().len(), n * (n - 1) / 2);
        assert!(graph.edges().iter().all(|edge| edge.from != edge.to));
    }

    #[test]
    fn test_row_major_discovery() {
        let grid: CellGrid = ".P\nD.\n.P".parse().unwrap();
        let graph = Graph::from_grid(&grid);
        assert_eq!(
            graph.nodes(),
            &[Node::drop_point(1, 0), Node::depot(0, 1), Node::drop_point(1, 2)]
        );
        assert_eq!(graph.depot(), Some(Node::depot(0, 1)));
        assert_eq!(graph.delivery_count(), 2);
    }

    #[test]
    fn test_carrier_cells_ignored() {
        let grid: CellGrid = "DCP".parse().unwrap();
        let graph = Graph::from_grid(&grid);
        assert_eq!(graph.nodes().len(), 2);
    }

    #[test]
    fn test_degenerate_grids() {
        let empty = Graph::from_grid(&CellGrid::new(4, 4));
        assert!(empty.nodes().is_empty());
        assert!(empty.edges().is_empty());
        assert_eq!(empty.delivery_count(), 0);
        assert_eq!(empty.depot(), None);

        let lone: CellGrid = "..\n.D".parse().unwrap();
        let lone = Graph::from_grid(&lone);
        assert_eq!(lone.nodes().len(), 1);
        assert!(lone.edges().is_empty());
    }

    #[test]
    fn test_other_end() {
        let a = Node::depot(0, 0);
        let b = Node::drop_point(2, 1);
        let edge = Edge::new(a, b);
        assert_eq!(edge.other_end(a), Some(b));
        assert_eq!(edge.other_end(b), Some(a));
        assert_eq!(edge.other_end(Node::drop_point(0, 0)), None);
        assert!(edge.connects(b, a));
    }

    #[test]
    fn test_node_equality_includes_depot_flag() {
        assert_ne!(Node::depot(1, 1), Node::drop_point(1, 1));
    }

    #[test]
    fn test_rebuild_is_identical() {
        let grid: CellGrid = "P.D\n.P.\nP..".parse().unwrap();
        assert_eq!(Graph::from_grid(&grid), Graph::from_grid(&grid));
    }
}
