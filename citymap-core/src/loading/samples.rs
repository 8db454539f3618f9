//! Hardcoded demo maps

use serde::{Deserialize, Serialize};

use crate::{Weight, WeightedGraph};

/// (a, b, distance, time, cost)
type EdgeSpec = (&'static str, &'static str, Weight, Weight, Weight);

static FIRST_VERTICES: [&str; 6] = ["A", "B", "C", "D", "E", "F"];
static FIRST_EDGES: [EdgeSpec; 9] = [
    ("A", "B", 5, 10, 3),
    ("A", "C", 2, 5, 2),
    ("B", "C", 2, 4, 1),
    ("B", "D", 7, 14, 5),
    ("C", "D", 4, 8, 3),
    ("C", "E", 3, 6, 2),
    ("D", "E", 1, 2, 1),
    ("D", "F", 5, 10, 4),
    ("E", "F", 7, 14, 6),
];

static SECOND_VERTICES: [&str; 6] = ["X", "Y", "Z", "W", "V", "U"];
static SECOND_EDGES: [EdgeSpec; 9] = [
    ("X", "Y", 6, 12, 4),
    ("X", "Z", 1, 2, 1),
    ("Y", "Z", 2, 4, 2),
    ("Y", "W", 5, 10, 3),
    ("Z", "W", 1, 2, 1),
    ("Z", "V", 7, 14, 5),
    ("W", "V", 3, 6, 2),
    ("W", "U", 2, 4, 1),
    ("V", "U", 4, 8, 3),
];

static THIRD_VERTICES: [&str; 6] = ["P", "Q", "R", "S", "T", "U"];
static THIRD_EDGES: [EdgeSpec; 9] = [
    ("P", "Q", 3, 6, 2),
    ("P", "R", 2, 4, 1),
    ("Q", "R", 4, 8, 3),
    ("Q", "S", 5, 10, 4),
    ("R", "S", 1, 2, 1),
    ("R", "T", 7, 14, 6),
    ("S", "T", 3, 6, 2),
    ("S", "U", 4, 8, 3),
    ("T", "U", 2, 4, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SampleGraph {
    /// A–F
    #[default]
    First,
    /// X, Y, Z, W, V, U
    Second,
    /// P–U
    Third,
}

impl SampleGraph {
    pub const ALL: [SampleGraph; 3] = [Self::First, Self::Second, Self::Third];

    /// Menu number (1-based) to sample
    pub fn from_choice(choice: u8) -> Option<Self> {
        match choice {
            1 => Some(Self::First),
            2 => Some(Self::Second),
            3 => Some(Self::Third),
            _ => None,
        }
    }

    pub fn choice(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        }
    }

    pub fn build(self) -> WeightedGraph {
        let (vertices, edges) = match self {
            Self::First => (&FIRST_VERTICES[..], &FIRST_EDGES[..]),
            Self::Second => (&SECOND_VERTICES[..], &SECOND_EDGES[..]),
            Self::Third => (&THIRD_VERTICES[..], &THIRD_EDGES[..]),
        };

        let mut graph = WeightedGraph::with_capacity(vertices.len());
        for vertex in vertices {
            graph.insert_vertex(vertex);
        }
        for &(a, b, distance, time, cost) in edges {
            graph.insert_edge(a, b, distance, time, cost);
        }
        graph
    }
}

impl TryFrom<u8> for SampleGraph {
    type Error = String;

    fn try_from(choice: u8) -> Result<Self, Self::Error> {
        Self::from_choice(choice).ok_or_else(|| format!("no sample graph number {choice}"))
    }
}

impl From<SampleGraph> for u8 {
    fn from(sample: SampleGraph) -> Self {
        sample.choice()
    }
}
