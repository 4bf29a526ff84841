use thiserror::Error;

use crate::topology::{NodeId, RingIndex};

/// Top-level error type for the Clathra analysis kernel.
#[derive(Debug, Error)]
pub enum ClathraError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// Errors raised while parsing or validating an analysis configuration.
///
/// Any of these fails the whole run before graph analysis begins.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("invalid value `{value}` for option `{option}`")]
    InvalidValue { option: String, value: String },

    #[error("invalid cage size specification `{0}`")]
    InvalidSizeSpec(String),

    #[error("empty cage size range {lo}-{hi}")]
    EmptySizeRange { lo: usize, hi: usize },
}

/// Errors raised at the boundary with the ring-enumeration collaborator.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("ring has {0} nodes, need at least 3")]
    RingTooShort(usize),

    #[error("ring repeats node {0}")]
    RepeatedNode(NodeId),

    #[error("ring index {0} not in catalogue")]
    RingNotFound(RingIndex),
}

/// Convenience type alias for results using [`ClathraError`].
pub type Result<T> = std::result::Result<T, ClathraError>;
