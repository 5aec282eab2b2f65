pub mod adjacency_matrix;
pub mod directedness;
pub mod format;
pub mod graph;
pub mod search;

pub use directedness::Directedness;
pub use graph::{Degree, Edges, Graph, GraphError};
