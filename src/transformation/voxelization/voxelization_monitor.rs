use crate::math::Real;
use core::sync::atomic::{AtomicBool, Ordering};

/// Hooks polled by a [`Voxelizer`](super::Voxelizer) while it runs.
///
/// The voxelizer calls these methods every
/// [`check_interval`](super::Voxelizer::check_interval) cells (once per chunk of that
/// many cells for the parallel variant), which lets the host display a progress bar or interrupt a long
/// run. Both methods do nothing by default.
pub trait VoxelizationMonitor {
    /// Returns `true` to interrupt the run. The partial grid is then discarded and
    /// [`VoxelizationError::Cancelled`](super::VoxelizationError::Cancelled) is returned.
    fn is_cancelled(&self) -> bool {
        false
    }

    /// Receives the fraction of cells processed so far, in `[0, 1]`.
    ///
    /// A run that completes always reports `1.0` last.
    fn report_progress(&self, _fraction: Real) {}
}

/// A monitor that never cancels and ignores progress.
impl VoxelizationMonitor for () {}

/// Cancels the run once the flag is set, possibly from another thread.
impl VoxelizationMonitor for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}
