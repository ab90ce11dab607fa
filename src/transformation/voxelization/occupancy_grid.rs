use super::VoxelizationError;
use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};

/// A dense grid of boolean cells covering a box-shaped region.
///
/// Cell `(i, j, k)` is stored at the flat index `i + j * nx + k * nx * ny` where
/// `[nx, ny, nz]` are the grid [`dimensions`](Self::dimensions). A cell is occupied if at
/// least one triangle intersects its closed box.
///
/// With the `serde-serialize` feature, deserialized grids are validated: an invalid
/// layout, or a cell buffer whose length does not match the resolution, is rejected.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(Serialize, Deserialize),
    serde(try_from = "OccupancyGridData")
)]
pub struct OccupancyGrid {
    region: Aabb,
    resolution: [u32; 3],
    cell_size: Vector<Real>,
    data: Vec<bool>,
}

impl OccupancyGrid {
    /// Creates a grid with every cell empty.
    ///
    /// The resolution and the region are assumed to be valid.
    pub(crate) fn new(region: Aabb, resolution: [u32; 3]) -> Self {
        let cell_size = cell_size(&region, resolution);
        let len = resolution.iter().map(|r| *r as usize).product();

        Self {
            region,
            resolution,
            cell_size,
            data: vec![false; len],
        }
    }

    /// The number of cells along each axis.
    #[inline]
    pub fn dimensions(&self) -> [u32; 3] {
        self.resolution
    }

    /// The region covered by this grid.
    #[inline]
    pub fn region(&self) -> &Aabb {
        &self.region
    }

    /// The extents of a single cell.
    #[inline]
    pub fn cell_size(&self) -> &Vector<Real> {
        &self.cell_size
    }

    /// The total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Does this grid have no cells? Always `false` for grids built by a voxelizer.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The flat index of the cell `(i, j, k)`, or `None` if it lies outside the grid.
    pub fn linear_index(&self, i: u32, j: u32, k: u32) -> Option<usize> {
        let [nx, ny, nz] = self.resolution;

        if i >= nx || j >= ny || k >= nz {
            return None;
        }

        let (nx, ny) = (nx as usize, ny as usize);
        Some(i as usize + j as usize * nx + k as usize * nx * ny)
    }

    /// The `(i, j, k)` key of the cell stored at the flat index `index`.
    pub fn cell_key(&self, index: usize) -> Option<[u32; 3]> {
        if index >= self.data.len() {
            return None;
        }

        Some(cell_key(self.resolution, index))
    }

    /// The occupancy of the cell `(i, j, k)`, or `None` if it lies outside the grid.
    #[inline]
    pub fn get(&self, i: u32, j: u32, k: u32) -> Option<bool> {
        self.linear_index(i, j, k).map(|id| self.data[id])
    }

    /// Is the cell `(i, j, k)` occupied?
    ///
    /// Cells outside the grid are never occupied.
    #[inline]
    pub fn is_occupied(&self, i: u32, j: u32, k: u32) -> bool {
        self.get(i, j, k).unwrap_or(false)
    }

    /// The center of the cell `(i, j, k)`.
    ///
    /// The key is not bound-checked: keys outside the grid yield points outside of the
    /// region.
    #[inline]
    pub fn cell_center(&self, i: u32, j: u32, k: u32) -> Point<Real> {
        cell_center(&self.region, &self.cell_size, [i, j, k])
    }

    /// The closed box of the cell `(i, j, k)`.
    #[inline]
    pub fn cell_aabb(&self, i: u32, j: u32, k: u32) -> Aabb {
        Aabb::from_half_extents(self.cell_center(i, j, k), self.cell_size / 2.0)
    }

    /// Iterates through the keys of all the occupied cells, in storage order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, occupied)| **occupied)
            .filter_map(|(id, _)| self.cell_key(id))
    }

    /// The number of occupied cells.
    pub fn num_occupied(&self) -> usize {
        self.data.iter().filter(|occupied| **occupied).count()
    }

    /// The occupancy of every cell, in storage order.
    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.data
    }

    /// Consumes the grid and returns the occupancy of every cell, in storage order.
    pub fn into_vec(self) -> Vec<bool> {
        self.data
    }

    #[inline]
    pub(crate) fn set_occupied(&mut self, index: usize, occupied: bool) {
        self.data[index] = occupied;
    }

    #[cfg(feature = "parallel")]
    #[inline]
    pub(crate) fn data_mut(&mut self) -> &mut [bool] {
        &mut self.data
    }
}

#[cfg(feature = "serde-serialize")]
#[derive(Deserialize)]
struct OccupancyGridData {
    region: Aabb,
    resolution: [u32; 3],
    data: Vec<bool>,
}

#[cfg(feature = "serde-serialize")]
impl TryFrom<OccupancyGridData> for OccupancyGrid {
    type Error = VoxelizationError;

    fn try_from(raw: OccupancyGridData) -> Result<Self, Self::Error> {
        let num_cells = validate_layout(&raw.region, raw.resolution)?;

        if raw.data.len() != num_cells {
            return Err(VoxelizationError::CellCountMismatch {
                expected: num_cells,
                found: raw.data.len(),
            });
        }

        let mut grid = OccupancyGrid::new(raw.region, raw.resolution);
        grid.data = raw.data;
        Ok(grid)
    }
}

/// Checks that `region` split into `resolution` cells is a usable grid, and returns its
/// number of cells.
pub(crate) fn validate_layout(
    region: &Aabb,
    resolution: [u32; 3],
) -> Result<usize, VoxelizationError> {
    let num_cells = resolution
        .iter()
        .try_fold(1usize, |acc, r| acc.checked_mul(*r as usize));

    let num_cells = match num_cells {
        Some(n) if n > 0 => n,
        _ => return Err(VoxelizationError::InvalidResolution { resolution }),
    };

    let extents = region.extents();
    let finite = region
        .mins
        .iter()
        .chain(region.maxs.iter())
        .all(|x| x.is_finite());

    if !finite || !extents.iter().all(|e| e.is_finite() && *e > 0.0) {
        return Err(VoxelizationError::InvalidRegion {
            extents: extents.into(),
        });
    }

    Ok(num_cells)
}

/// The extents of one cell of a grid splitting `region` into `resolution` cells.
pub(crate) fn cell_size(region: &Aabb, resolution: [u32; 3]) -> Vector<Real> {
    let divisions = Vector::new(
        resolution[0] as Real,
        resolution[1] as Real,
        resolution[2] as Real,
    );
    region.extents().component_div(&divisions)
}

/// The `(i, j, k)` key of the cell stored at the flat index `index`. The index is not
/// bound-checked.
pub(crate) fn cell_key(resolution: [u32; 3], index: usize) -> [u32; 3] {
    let nx = resolution[0] as usize;
    let ny = resolution[1] as usize;
    [
        (index % nx) as u32,
        ((index / nx) % ny) as u32,
        (index / (nx * ny)) as u32,
    ]
}

/// The center of the cell `key`: the first cell is centered half a cell away from
/// `region.mins`.
pub(crate) fn cell_center(region: &Aabb, cell_size: &Vector<Real>, key: [u32; 3]) -> Point<Real> {
    let offsets = Vector::new(key[0] as Real, key[1] as Real, key[2] as Real).add_scalar(0.5);
    region.mins + offsets.component_mul(cell_size)
}
