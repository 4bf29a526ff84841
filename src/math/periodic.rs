use super::{CartPos, CellMatrix, FracPos};

/// Wraps a fractional displacement into the minimum image.
///
/// Each component is shifted by a whole number of cell lengths so that the
/// result lies in `[-0.5, 0.5)`. Among all periodic images of the
/// displacement this is the one of smallest magnitude.
#[must_use]
pub fn min_image(d: FracPos) -> FracPos {
    d.map(|c| c - (c + 0.5).floor())
}

/// Wraps a fractional coordinate into the unit cell, `[0, 1)` per component.
#[must_use]
pub fn wrap_unit(p: FracPos) -> FracPos {
    p.map(|c| c - c.floor())
}

/// Periodic-aware centroid of a non-empty set of members.
///
/// The first member is taken as the reference; every member contributes its
/// minimum-image displacement to the reference, the displacements are
/// averaged, and the result is wrapped back into the unit cell. This stays
/// correct for a member set straddling a cell boundary, as long as no member
/// pair is separated by more than half the cell in any dimension.
///
/// `position` looks a member up in the host table; it may itself return a
/// previously computed centroid (cage centers are centroids of ring centers).
///
/// # Panics
///
/// Panics if `members` is empty; a centroid over zero members is a caller
/// contract violation, not a recoverable condition.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn periodic_centroid<M>(members: &[M], position: impl Fn(&M) -> FracPos) -> FracPos {
    assert!(!members.is_empty(), "centroid requested over zero members");
    let reference = position(&members[0]);
    let mut sum = FracPos::zeros();
    for member in members {
        sum += min_image(position(member) - reference);
    }
    wrap_unit(reference + sum / members.len() as f64)
}

/// A periodic simulation cell.
///
/// Fractional coordinates are expressed relative to the cell vectors; the
/// conversion to Cartesian space is only needed when results are handed to a
/// presentation layer.
#[derive(Debug, Clone)]
pub struct PeriodicCell {
    matrix: CellMatrix,
}

impl PeriodicCell {
    /// Creates a cell from its matrix; columns are the cell vectors.
    #[must_use]
    pub fn new(matrix: CellMatrix) -> Self {
        Self { matrix }
    }

    /// Creates an orthorhombic cell with the given edge lengths.
    #[must_use]
    pub fn orthorhombic(a: f64, b: f64, c: f64) -> Self {
        Self {
            matrix: CellMatrix::from_diagonal(&nalgebra::Vector3::new(a, b, c)),
        }
    }

    /// Converts a fractional coordinate to Cartesian space.
    #[must_use]
    pub fn to_cartesian(&self, frac: &FracPos) -> CartPos {
        self.matrix * frac
    }
}
