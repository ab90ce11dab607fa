use super::occupancy_grid::{self, OccupancyGrid};
use super::{VoxelizationError, VoxelizationMonitor};
use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::partitioning::BoundsNode;
use crate::shape::MeshGroup;

/// The default number of cells processed between two monitor polls.
pub const DEFAULT_CHECK_INTERVAL: usize = 2000;

/// Computes which cells of a regular grid are crossed by the triangles of a set of
/// meshes.
///
/// The voxelizer splits its region into `resolution[0] × resolution[1] × resolution[2]`
/// cells of identical size. A cell is marked as occupied if at least one triangle
/// intersects its closed box, as decided by an exact separating-axis test. The
/// interior of closed meshes is not filled.
///
/// Triangles are organized into a [`BoundsNode`] hierarchy first, so that a whole mesh
/// is skipped by a single box-box test when its bound misses the cell.
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use trivox3d::bounding_volume::Aabb;
/// use trivox3d::na::{Point3, Vector3};
/// use trivox3d::shape::{MeshGroup, Triangle};
/// use trivox3d::transformation::voxelization::Voxelizer;
///
/// let region = Aabb::from_half_extents(Point3::origin(), Vector3::repeat(1.0));
/// let voxelizer = Voxelizer::new(region, [4, 4, 4]).unwrap();
///
/// // A small triangle near the center of the first octant.
/// let triangle = Triangle::new(
///     Point3::new(0.6, 0.6, 0.6),
///     Point3::new(0.8, 0.6, 0.6),
///     Point3::new(0.6, 0.8, 0.6),
/// );
/// let grid = voxelizer
///     .voxelize(&[MeshGroup::from_triangles(vec![triangle])])
///     .unwrap();
///
/// assert_eq!(grid.num_occupied(), 1);
/// assert!(grid.is_occupied(3, 3, 3));
/// # }
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(Serialize, Deserialize),
    serde(try_from = "VoxelizerData")
)]
pub struct Voxelizer {
    region: Aabb,
    resolution: [u32; 3],
    cell_size: Vector<Real>,
    check_interval: usize,
}

impl Voxelizer {
    /// Creates a voxelizer splitting `region` into `resolution` cells.
    ///
    /// Fails if a resolution component is zero, if the total number of cells overflows a
    /// `usize`, or if the region has a non-positive or non-finite extent along some axis.
    pub fn new(region: Aabb, resolution: [u32; 3]) -> Result<Self, VoxelizationError> {
        let _ = occupancy_grid::validate_layout(&region, resolution)?;

        Ok(Self {
            region,
            resolution,
            cell_size: occupancy_grid::cell_size(&region, resolution),
            check_interval: DEFAULT_CHECK_INTERVAL,
        })
    }

    /// Creates a voxelizer for the region with the given center and half-extents.
    pub fn from_half_extents(
        center: Point<Real>,
        half_extents: Vector<Real>,
        resolution: [u32; 3],
    ) -> Result<Self, VoxelizationError> {
        Self::new(Aabb::from_half_extents(center, half_extents), resolution)
    }

    /// Sets the number of cells processed between two monitor polls.
    ///
    /// An interval of zero is treated as one.
    pub fn with_check_interval(mut self, check_interval: usize) -> Self {
        self.check_interval = check_interval.max(1);
        self
    }

    /// The region split into cells.
    #[inline]
    pub fn region(&self) -> &Aabb {
        &self.region
    }

    /// The number of cells along each axis.
    #[inline]
    pub fn resolution(&self) -> [u32; 3] {
        self.resolution
    }

    /// The extents of a single cell.
    #[inline]
    pub fn cell_size(&self) -> &Vector<Real> {
        &self.cell_size
    }

    /// The number of cells processed between two monitor polls.
    #[inline]
    pub fn check_interval(&self) -> usize {
        self.check_interval
    }

    /// The total number of cells of the grid.
    #[inline]
    pub fn num_cells(&self) -> usize {
        self.resolution.iter().map(|r| *r as usize).product()
    }

    /// The closed box of the cell `(i, j, k)`.
    #[inline]
    pub fn cell_aabb(&self, i: u32, j: u32, k: u32) -> Aabb {
        let center = occupancy_grid::cell_center(&self.region, &self.cell_size, [i, j, k]);
        Aabb::from_half_extents(center, self.cell_size / 2.0)
    }

    /// Builds the bounding hierarchy of `groups` over this voxelizer's region.
    pub fn build_hierarchy(&self, groups: &[MeshGroup]) -> BoundsNode {
        BoundsNode::build(self.region, groups)
    }

    /// Does a triangle of the hierarchy `root` intersect the cell `(i, j, k)`?
    #[inline]
    pub fn is_cell_occupied(&self, root: &BoundsNode, i: u32, j: u32, k: u32) -> bool {
        root.intersects_aabb(&self.cell_aabb(i, j, k))
    }

    /// Computes the occupancy grid of `groups`.
    pub fn voxelize(&self, groups: &[MeshGroup]) -> Result<OccupancyGrid, VoxelizationError> {
        self.voxelize_with_monitor(groups, &())
    }

    /// Computes the occupancy grid of `groups`, polling `monitor` regularly.
    ///
    /// Returns [`VoxelizationError::Cancelled`] if the monitor interrupts the run.
    pub fn voxelize_with_monitor(
        &self,
        groups: &[MeshGroup],
        monitor: &dyn VoxelizationMonitor,
    ) -> Result<OccupancyGrid, VoxelizationError> {
        let root = self.build_hierarchy(groups);
        self.voxelize_hierarchy(&root, monitor)
    }

    /// Computes the occupancy grid of the triangles stored in the hierarchy `root`.
    ///
    /// The cells are visited in storage order. Every [`Self::check_interval`] cells,
    /// starting with the first one, the monitor is asked whether the run should stop
    /// and is then given the current progress.
    pub fn voxelize_hierarchy(
        &self,
        root: &BoundsNode,
        monitor: &dyn VoxelizationMonitor,
    ) -> Result<OccupancyGrid, VoxelizationError> {
        self.log_start(root);

        let mut grid = OccupancyGrid::new(self.region, self.resolution);
        let total = grid.len();
        let [nx, ny, nz] = self.resolution;
        let mut id = 0;

        for k in 0..nz {
            for j in 0..ny {
                for i in 0..nx {
                    if id % self.check_interval == 0 {
                        if monitor.is_cancelled() {
                            log::debug!("Voxelization cancelled after {}/{} cells.", id, total);
                            return Err(VoxelizationError::Cancelled);
                        }

                        monitor.report_progress(id as Real / total as Real);
                    }

                    if self.is_cell_occupied(root, i, j, k) {
                        grid.set_occupied(id, true);
                    }

                    id += 1;
                }
            }
        }

        monitor.report_progress(1.0);
        self.log_end(&grid);

        Ok(grid)
    }

    /// Computes the occupancy grid of `groups` using all the threads of the rayon
    /// thread pool.
    ///
    /// The cells are split, in storage order, into chunks of [`Self::check_interval`]
    /// cells processed as separate tasks. The monitor is polled before each chunk. Because
    /// chunks finish in any order, the reported progress values are not necessarily
    /// increasing, except for the final `1.0`. The resulting grid is identical to the one
    /// computed by [`Self::voxelize_with_monitor`].
    #[cfg(feature = "parallel")]
    pub fn voxelize_parallel(
        &self,
        groups: &[MeshGroup],
        monitor: &(dyn VoxelizationMonitor + Sync),
    ) -> Result<OccupancyGrid, VoxelizationError> {
        use core::sync::atomic::{AtomicUsize, Ordering};
        use rayon::prelude::*;

        let root = self.build_hierarchy(groups);
        self.log_start(&root);

        let mut grid = OccupancyGrid::new(self.region, self.resolution);
        let chunk_len = self.check_interval;
        let num_chunks = grid.len().div_ceil(chunk_len);
        let num_done = AtomicUsize::new(0);

        grid.data_mut()
            .par_chunks_mut(chunk_len)
            .enumerate()
            .try_for_each(|(chunk_id, cells)| {
                if monitor.is_cancelled() {
                    return Err(VoxelizationError::Cancelled);
                }

                let first = chunk_id * chunk_len;
                for (offset, cell) in cells.iter_mut().enumerate() {
                    let [i, j, k] = occupancy_grid::cell_key(self.resolution, first + offset);
                    *cell = self.is_cell_occupied(&root, i, j, k);
                }

                let done = num_done.fetch_add(1, Ordering::Relaxed) + 1;
                if done < num_chunks {
                    monitor.report_progress(done as Real / num_chunks as Real);
                }

                Ok(())
            })
            .map_err(|e| {
                log::debug!("Parallel voxelization cancelled.");
                e
            })?;

        monitor.report_progress(1.0);
        self.log_end(&grid);

        Ok(grid)
    }

    fn log_start(&self, root: &BoundsNode) {
        log::debug!(
            "Voxelizing {} object(s) with {} triangle(s) on a {:?} grid.",
            root.children().len(),
            root.num_leaves(),
            self.resolution
        );
    }

    fn log_end(&self, grid: &OccupancyGrid) {
        log::debug!(
            "Voxelization done: {}/{} occupied cells.",
            grid.num_occupied(),
            grid.len()
        );
    }
}

#[cfg(feature = "serde-serialize")]
#[derive(Deserialize)]
struct VoxelizerData {
    region: Aabb,
    resolution: [u32; 3],
    check_interval: usize,
}

#[cfg(feature = "serde-serialize")]
impl TryFrom<VoxelizerData> for Voxelizer {
    type Error = VoxelizationError;

    fn try_from(raw: VoxelizerData) -> Result<Self, Self::Error> {
        Ok(Voxelizer::new(raw.region, raw.resolution)?.with_check_interval(raw.check_interval))
    }
}
