pub mod adjacency;
pub mod cage;
pub mod edge;
pub mod ring;

pub use adjacency::RingAdjacencyIndex;
pub use cage::Cage;
pub use edge::EdgeKey;
pub use ring::{Ring, RingCatalogue};

/// Identifier of a graph vertex.
///
/// Nodes are not owned by this crate; an id indexes the host-supplied
/// positions table.
pub type NodeId = usize;

/// Index of a ring in the catalogue.
///
/// The total order on indices is load-bearing: it fixes the seed order of
/// the cage search and the ordering of ring lists in output records.
pub type RingIndex = usize;
