use crate::math::Real;

#[cfg(doc)]
use crate::transformation::voxelization::{VoxelizationMonitor, Voxelizer};

/// Errors that can occur when configuring or running a [`Voxelizer`].
///
/// Configuration errors ([`VoxelizationError::InvalidResolution`] and
/// [`VoxelizationError::InvalidRegion`]) are reported by [`Voxelizer::new`], before any
/// work is done. [`VoxelizationError::CellCountMismatch`] is only reported when
/// deserializing an inconsistent grid. [`VoxelizationError::Cancelled`] is reported by
/// a run interrupted through its [`VoxelizationMonitor`].
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq)]
pub enum VoxelizationError {
    /// At least one component of the grid resolution is zero, or the total number of
    /// cells does not fit in a `usize`.
    #[error("the grid resolution {resolution:?} must be at least 1 along every axis and yield an addressable number of cells.")]
    InvalidResolution {
        /// The rejected resolution.
        resolution: [u32; 3],
    },
    /// The voxelized region has a non-positive or non-finite extent along some axis.
    #[error("the region extents {extents:?} must be strictly positive and finite.")]
    InvalidRegion {
        /// The extents of the rejected region.
        extents: [Real; 3],
    },
    /// The cell buffer of a deserialized grid does not match its resolution.
    #[error("the grid has {found} cells but its resolution requires {expected}.")]
    CellCountMismatch {
        /// The number of cells implied by the resolution.
        expected: usize,
        /// The number of cells found.
        found: usize,
    },
    /// The run was cancelled by its monitor. The partially filled grid was discarded.
    #[error("the voxelization was cancelled.")]
    Cancelled,
}

impl VoxelizationError {
    /// Is this error caused by an invalid voxelizer configuration?
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(
            self,
            VoxelizationError::InvalidResolution { .. }
                | VoxelizationError::InvalidRegion { .. }
                | VoxelizationError::CellCountMismatch { .. }
        )
    }
}
