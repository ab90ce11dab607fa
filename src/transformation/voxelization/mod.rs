pub use self::occupancy_grid::OccupancyGrid;
pub use self::voxelization_error::VoxelizationError;
pub use self::voxelization_monitor::VoxelizationMonitor;
pub use self::voxelizer::{Voxelizer, DEFAULT_CHECK_INTERVAL};

mod occupancy_grid;
mod voxelization_error;
mod voxelization_monitor;
mod voxelizer;
