use std::fmt;

use hashbrown::HashMap;
use serde::Serialize;

use crate::{Edge, VertexId, Weight};

/// Undirected multigraph with three weights per edge
///
/// Vertices keep their insertion order, which is also the order used by
/// [`WeightedGraph::adjacency`] and the `Display` dump. Labels are compared
/// exactly; case folding is left to the caller.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    labels: Vec<String>,
    index: HashMap<String, VertexId>,
    adjacency: Vec<Vec<Edge>>,
}

/// One outgoing adjacency record with the neighbor resolved to its label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AdjacencyEntry<'a> {
    pub neighbor: &'a str,
    pub distance: Weight,
    pub time: Weight,
    pub cost: Weight,
}

impl fmt::Display for AdjacencyEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (distance: {}, time: {}, cost: {})",
            self.neighbor, self.distance, self.time, self.cost
        )
    }
}

impl WeightedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize) -> Self {
        WeightedGraph {
            labels: Vec::with_capacity(vertices),
            index: HashMap::with_capacity(vertices),
            adjacency: Vec::with_capacity(vertices),
        }
    }

    /// Adds a vertex with no edges, or returns the existing one
    pub fn insert_vertex(&mut self, label: &str) -> VertexId {
        if let Some(&id) = self.index.get(label) {
            return id;
        }
        let id = self.labels.len();
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), id);
        self.adjacency.push(Vec::new());
        id
    }

    /// Connects `a` and `b` in both directions with identical weights.
    ///
    /// Missing endpoints are inserted first. Inserting the same pair twice
    /// creates a parallel edge. Weights are unsigned, so the non-negative
    /// precondition of Dijkstra holds by construction.
    pub fn insert_edge(&mut self, a: &str, b: &str, distance: Weight, time: Weight, cost: Weight) {
        let from = self.insert_vertex(a);
        let to = self.insert_vertex(b);

        let forward = Edge::new(to, distance, time, cost);
        self.adjacency[from].push(forward);
        self.adjacency[to].push(forward.mirrored(from));
    }

    pub fn vertex_id(&self, label: &str) -> Option<VertexId> {
        self.index.get(label).copied()
    }

    pub fn label(&self, id: VertexId) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    pub fn contains_vertex(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    pub fn vertex_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of undirected edges, parallel edges counted separately
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Vertex labels in insertion order
    pub fn labels(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }

    /// Outgoing records of the vertex labelled `label`
    pub fn edges(&self, label: &str) -> Option<&[Edge]> {
        self.vertex_id(label).map(|id| self.neighbors(id))
    }

    pub(crate) fn neighbors(&self, id: VertexId) -> &[Edge] {
        &self.adjacency[id]
    }

    /// Per-vertex adjacency listing with resolved neighbor labels
    pub fn adjacency(&self) -> impl Iterator<Item = (&str, Vec<AdjacencyEntry<'_>>)> + '_ {
        self.labels.iter().zip(&self.adjacency).map(|(label, edges)| {
            let entries = edges
                .iter()
                .map(|edge| AdjacencyEntry {
                    neighbor: &self.labels[edge.target],
                    distance: edge.distance,
                    time: edge.time,
                    cost: edge.cost,
                })
                .collect();
            (label.as_str(), entries)
        })
    }
}

impl fmt::Display for WeightedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, entries) in self.adjacency() {
            write!(f, "{label} -> ")?;
            for entry in entries {
                write!(f, "{entry}, ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
