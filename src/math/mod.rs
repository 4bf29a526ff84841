pub mod periodic;

pub use periodic::{min_image, periodic_centroid, wrap_unit, PeriodicCell};

/// Fractional (cell-relative) coordinate, components in `[0, 1)`.
pub type FracPos = nalgebra::Vector3<f64>;

/// Cartesian coordinate or displacement.
pub type CartPos = nalgebra::Vector3<f64>;

/// 3x3 periodic cell matrix; columns are the cell vectors.
pub type CellMatrix = nalgebra::Matrix3<f64>;
