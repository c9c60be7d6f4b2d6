//! Axis-aligned structured grid with Moore (8-/26-connected) neighbourhood.

use crate::direction::Direction;
use crate::error::SpaceError;
use crate::grid::Grid;
use mole_core::{CellId, Neighbours, Point3D};
use smallvec::SmallVec;

/// An axis-aligned Cartesian grid in two or three dimensions.
///
/// Cells are addressed by `(ix, iy, iz)` and by the row-major
/// [`CellId`] `iz * ny * nx + iy * nx + ix`. Every cell is adjacent to all
/// cells whose index differs by at most one on every axis, giving up to 8
/// neighbours in 2D and 26 in 3D. Boundary cells have fewer neighbours;
/// there is no wraparound.
///
/// Refinement factors subdivide each coarse input cell: the stored counts
/// are `res * n` and the stored sizes are `d / res`.
///
/// # Examples
///
/// ```
/// use mole_core::CellId;
/// use mole_space::{CartesianGrid, Grid};
///
/// let grid = CartesianGrid::new_3d(3, 3, 3, 1.0, 1.0, 1.0).unwrap();
/// assert_eq!(grid.cell_count(), 27);
///
/// // Corner cell touches 7 cells, the centre cell touches all 26.
/// assert_eq!(grid.neighbours(CellId(0)).len(), 7);
/// assert_eq!(grid.neighbours(grid.merge_ids(1, 1, 1)).len(), 26);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CartesianGrid {
    nx: usize,
    ny: usize,
    nz: usize,
    dx: f64,
    dy: f64,
    dz: f64,
    resx: usize,
    resy: usize,
    resz: usize,
    extent: [f64; 3],
    origin: Point3D,
    is_2d: bool,
}

/// Builder for [`CartesianGrid`].
///
/// Counts, sizes and refinement factors are given in coarse (input) units;
/// `build()` applies the refinement. Defaults: one cell of unit size per
/// axis, refinement 1, origin at zero, 3D.
#[derive(Debug, Clone)]
pub struct CartesianGridBuilder {
    cells: [usize; 3],
    size: [f64; 3],
    refinement: [usize; 3],
    origin: Point3D,
    is_2d: bool,
}

impl Default for CartesianGridBuilder {
    fn default() -> Self {
        Self {
            cells: [1, 1, 1],
            size: [1.0, 1.0, 1.0],
            refinement: [1, 1, 1],
            origin: Point3D::ORIGIN,
            is_2d: false,
        }
    }
}

impl CartesianGridBuilder {
    /// Coarse cell counts of a 3D grid.
    pub fn cells(mut self, nx: usize, ny: usize, nz: usize) -> Self {
        self.cells = [nx, ny, nz];
        self.is_2d = false;
        self
    }

    /// Coarse cell counts of a 2D grid. Forces `nz = 1`.
    pub fn cells_2d(mut self, nx: usize, ny: usize) -> Self {
        self.cells = [nx, ny, 1];
        self.is_2d = true;
        self
    }

    /// Coarse cell sizes. `dz` is ignored for 2D grids.
    pub fn cell_size(mut self, dx: f64, dy: f64, dz: f64) -> Self {
        self.size = [dx, dy, dz];
        self
    }

    /// Per-axis refinement factors. `resz` is ignored for 2D grids.
    pub fn refinement(mut self, resx: usize, resy: usize, resz: usize) -> Self {
        self.refinement = [resx, resy, resz];
        self
    }

    /// Lower corner of the domain.
    pub fn origin(mut self, origin: impl Into<Point3D>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Validate and build the grid.
    ///
    /// Returns `Err(SpaceError::EmptyGrid)` for a zero count,
    /// `Err(SpaceError::InvalidCellSize)` for a non-positive or non-finite
    /// size, and `Err(SpaceError::InvalidRefinement)` for a zero factor.
    pub fn build(self) -> Result<CartesianGrid, SpaceError> {
        let [mut nx, mut ny, mut nz] = self.cells;
        let [mut dx, mut dy, mut dz] = self.size;
        let [resx, resy, mut resz] = self.refinement;
        if self.is_2d {
            nz = 1;
            dz = 1.0;
            resz = 1;
        }

        for (axis, n) in [("nx", nx), ("ny", ny), ("nz", nz)] {
            if n == 0 {
                return Err(SpaceError::EmptyGrid { axis });
            }
        }
        for (axis, d) in [("dx", dx), ("dy", dy), ("dz", dz)] {
            if !d.is_finite() || d <= 0.0 {
                return Err(SpaceError::InvalidCellSize { axis, value: d });
            }
        }
        for (axis, r) in [("resx", resx), ("resy", resy), ("resz", resz)] {
            if r == 0 {
                return Err(SpaceError::InvalidRefinement { axis, value: r });
            }
        }

        let extent = [dx * nx as f64, dy * ny as f64, dz * nz as f64];
        nx *= resx;
        ny *= resy;
        nz *= resz;
        dx /= resx as f64;
        dy /= resy as f64;
        dz /= resz as f64;

        Ok(CartesianGrid {
            nx,
            ny,
            nz,
            dx,
            dy,
            dz,
            resx,
            resy,
            resz,
            extent,
            origin: self.origin,
            is_2d: self.is_2d,
        })
    }
}

/// Resolve a physical offset along one axis to a cell index.
///
/// Half-open `[0, extent)`, except that a point exactly on the upper
/// boundary belongs to the last cell.
fn axis_index(rel: f64, d: f64, n: usize, extent: f64) -> Option<usize> {
    if !(rel >= 0.0 && rel <= extent) {
        return None;
    }
    if rel == extent {
        return Some(n - 1);
    }
    Some(((rel / d) as usize).min(n - 1))
}

/// Offset an index by -1, 0 or +1 if the result stays in `[0, n)`.
fn step_axis(i: usize, s: isize, n: usize) -> Option<usize> {
    let j = i.checked_add_signed(s)?;
    (j < n).then_some(j)
}

impl CartesianGrid {
    /// Start building a grid.
    pub fn builder() -> CartesianGridBuilder {
        CartesianGridBuilder::default()
    }

    /// Create a 3D grid with no refinement and origin at zero.
    pub fn new_3d(
        nx: usize,
        ny: usize,
        nz: usize,
        dx: f64,
        dy: f64,
        dz: f64,
    ) -> Result<Self, SpaceError> {
        Self::builder()
            .cells(nx, ny, nz)
            .cell_size(dx, dy, dz)
            .build()
    }

    /// Create a 2D grid (`nz = 1`) with no refinement and origin at zero.
    pub fn new_2d(nx: usize, ny: usize, dx: f64, dy: f64) -> Result<Self, SpaceError> {
        Self::builder()
            .cells_2d(nx, ny)
            .cell_size(dx, dy, 1.0)
            .build()
    }

    /// Cells along x, after refinement.
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Cells along y, after refinement.
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Cells along z, after refinement.
    pub fn nz(&self) -> usize {
        self.nz
    }

    /// Cell size along x, after refinement.
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Cell size along y, after refinement.
    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Cell size along z, after refinement.
    pub fn dz(&self) -> f64 {
        self.dz
    }

    /// Refinement factor along x.
    pub fn resx(&self) -> usize {
        self.resx
    }

    /// Refinement factor along y.
    pub fn resy(&self) -> usize {
        self.resy
    }

    /// Refinement factor along z.
    pub fn resz(&self) -> usize {
        self.resz
    }

    /// Whether the grid was built as 2D.
    pub fn is_2d(&self) -> bool {
        self.is_2d
    }

    /// Lower corner of the domain.
    pub fn origin(&self) -> Point3D {
        self.origin
    }

    /// Physical size of the domain along each axis, taken from the coarse
    /// counts and sizes so refinement does not shift the boundary.
    pub fn extent(&self) -> [f64; 3] {
        self.extent
    }

    /// Cell counts of the unrefined input grid.
    pub fn coarse_cells(&self) -> [usize; 3] {
        [
            self.nx / self.resx,
            self.ny / self.resy,
            self.nz / self.resz,
        ]
    }

    /// Volume (area in 2D, with unit depth) of a single cell.
    pub fn cell_volume(&self) -> f64 {
        self.dx * self.dy * self.dz
    }

    /// Volume of the whole domain.
    pub fn grid_volume(&self) -> f64 {
        self.cell_volume() * self.cell_count() as f64
    }

    /// Check that `id` names a cell of this grid.
    pub fn check_cell(&self, id: CellId) -> Result<(), SpaceError> {
        if id.0 < self.cell_count() {
            Ok(())
        } else {
            Err(SpaceError::CellOutOfRange {
                cell: id,
                cell_count: self.cell_count(),
            })
        }
    }

    /// Decompose an id into `[ix, iy, iz]`.
    pub fn split_id(&self, id: CellId) -> [usize; 3] {
        debug_assert!(id.0 < self.cell_count(), "cell {id} out of range");
        let layer = self.nx * self.ny;
        let iz = id.0 / layer;
        let rem = id.0 % layer;
        [rem % self.nx, rem / self.nx, iz]
    }

    /// Compose `[ix, iy, iz]` into an id.
    pub fn merge_ids(&self, ix: usize, iy: usize, iz: usize) -> CellId {
        debug_assert!(ix < self.nx && iy < self.ny && iz < self.nz);
        CellId(iz * self.ny * self.nx + iy * self.nx + ix)
    }

    /// Centre of the cell at `[ix, iy, iz]`.
    pub fn center_of_index(&self, ix: usize, iy: usize, iz: usize) -> Point3D {
        debug_assert!(ix < self.nx && iy < self.ny && iz < self.nz);
        Point3D::new(
            self.origin.x + (ix as f64 + 0.5) * self.dx,
            self.origin.y + (iy as f64 + 0.5) * self.dy,
            self.origin.z + (iz as f64 + 0.5) * self.dz,
        )
    }

    /// Find the cell containing `point`.
    ///
    /// Returns `Err(SpaceError::OutOfDomain)` if the point lies outside
    /// `[origin, origin + extent)` on any axis. A point exactly on the upper
    /// boundary of an axis is assigned to the last cell along that axis.
    pub fn id_cell(&self, point: Point3D) -> Result<CellId, SpaceError> {
        let [ex, ey, ez] = self.extent;
        let ix = axis_index(point.x - self.origin.x, self.dx, self.nx, ex);
        let iy = axis_index(point.y - self.origin.y, self.dy, self.ny, ey);
        let iz = axis_index(point.z - self.origin.z, self.dz, self.nz, ez);
        match (ix, iy, iz) {
            (Some(ix), Some(iy), Some(iz)) => Ok(self.merge_ids(ix, iy, iz)),
            _ => {
                let o = self.origin;
                Err(SpaceError::OutOfDomain {
                    point,
                    bounds: format!(
                        "[{}, {}] x [{}, {}] x [{}, {}]",
                        o.x,
                        o.x + ex,
                        o.y,
                        o.y + ey,
                        o.z,
                        o.z + ez
                    ),
                })
            }
        }
    }

    /// Whether `point` lies inside the domain.
    pub fn is_inside(&self, point: Point3D) -> bool {
        self.id_cell(point).is_ok()
    }

    /// The face-adjacent cell in `dir`, or `None` at the boundary.
    pub fn id_neighbour(&self, id: CellId, dir: Direction) -> Option<CellId> {
        let [ix, iy, iz] = self.split_id(id);
        let (sx, sy, sz) = dir.offset();
        let jx = step_axis(ix, sx, self.nx)?;
        let jy = step_axis(iy, sy, self.ny)?;
        let jz = step_axis(iz, sz, self.nz)?;
        Some(self.merge_ids(jx, jy, jz))
    }
}

impl Grid for CartesianGrid {
    fn ndim(&self) -> usize {
        if self.is_2d {
            2
        } else {
            3
        }
    }

    fn cell_count(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    fn neighbours(&self, id: CellId) -> Neighbours {
        let [ix, iy, iz] = self.split_id(id);
        let mut out: Neighbours = SmallVec::new();
        for sx in -1isize..=1 {
            let Some(jx) = step_axis(ix, sx, self.nx) else {
                continue;
            };
            for sy in -1isize..=1 {
                let Some(jy) = step_axis(iy, sy, self.ny) else {
                    continue;
                };
                for sz in -1isize..=1 {
                    if sx == 0 && sy == 0 && sz == 0 {
                        continue;
                    }
                    if let Some(jz) = step_axis(iz, sz, self.nz) {
                        out.push(self.merge_ids(jx, jy, jz));
                    }
                }
            }
        }
        out
    }

    fn center_of_cell(&self, id: CellId) -> Point3D {
        let [ix, iy, iz] = self.split_id(id);
        self.center_of_index(ix, iy, iz)
    }

    fn refinement(&self) -> [usize; 3] {
        [self.resx, self.resy, self.resz]
    }

    fn face_count(&self) -> usize {
        let (nx, ny, nz) = (self.nx, self.ny, self.nz);
        nx * ny * nz + nx * ny + ny * nz + nx * nz
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn cube(n: usize) -> CartesianGrid {
        CartesianGrid::new_3d(n, n, n, 1.0, 1.0, 1.0).unwrap()
    }

    // ── Neighbour tests ─────────────────────────────────────────

    #[test]
    fn neighbours_3x3x3_corner_edge_face_centre() {
        let g = cube(3);
        assert_eq!(g.neighbours(g.merge_ids(0, 0, 0)).len(), 7);
        assert_eq!(g.neighbours(g.merge_ids(1, 0, 0)).len(), 11);
        assert_eq!(g.neighbours(g.merge_ids(1, 1, 0)).len(), 17);
        assert_eq!(g.neighbours(g.merge_ids(1, 1, 1)).len(), 26);
    }

    #[test]
    fn neighbours_2d_is_eight_connected() {
        let g = CartesianGrid::new_2d(5, 5, 1.0, 1.0).unwrap();
        assert_eq!(g.neighbours(g.merge_ids(2, 2, 0)).len(), 8);
        assert_eq!(g.neighbours(g.merge_ids(0, 0, 0)).len(), 3);
        assert_eq!(g.neighbours(g.merge_ids(0, 2, 0)).len(), 5);
    }

    #[test]
    fn neighbours_corner_exact_set() {
        let g = CartesianGrid::new_2d(4, 4, 1.0, 1.0).unwrap();
        let n = g.neighbours(CellId(0));
        assert_eq!(n.as_slice(), &[CellId(4), CellId(1), CellId(5)]);
    }

    #[test]
    fn neighbours_no_wraparound() {
        let g = CartesianGrid::new_2d(4, 4, 1.0, 1.0).unwrap();
        let right_edge = g.merge_ids(3, 1, 0);
        for nb in g.neighbours(right_edge) {
            let [ix, _, _] = g.split_id(nb);
            assert!(ix >= 2, "{nb} wrapped around from {right_edge}");
        }
    }

    #[test]
    fn single_cell_has_no_neighbours() {
        let g = cube(1);
        assert!(g.neighbours(CellId(0)).is_empty());
    }

    // ── Geometry tests ──────────────────────────────────────────

    #[test]
    fn center_of_cell_uses_origin_and_half_offset() {
        let g = CartesianGrid::builder()
            .cells(4, 3, 2)
            .cell_size(2.0, 1.0, 0.5)
            .origin([10.0, -1.0, 0.0])
            .build()
            .unwrap();
        let c = g.center_of_cell(g.merge_ids(1, 2, 1));
        assert_eq!(c, Point3D::new(13.0, 1.5, 0.75));
    }

    #[test]
    fn id_cell_inverts_center_of_cell() {
        let g = CartesianGrid::new_3d(4, 5, 6, 0.5, 2.0, 1.5).unwrap();
        for i in 0..g.cell_count() {
            let id = CellId(i);
            assert_eq!(g.id_cell(g.center_of_cell(id)).unwrap(), id);
        }
    }

    #[test]
    fn id_cell_upper_boundary_maps_to_last_cell() {
        let g = CartesianGrid::new_3d(4, 4, 4, 1.0, 1.0, 1.0).unwrap();
        let id = g.id_cell(Point3D::new(4.0, 0.2, 4.0)).unwrap();
        assert_eq!(g.split_id(id), [3, 0, 3]);
    }

    #[test]
    fn id_cell_upper_boundary_survives_refinement() {
        // 0.7 / 3 * 15 rounds to 3.4999999999999996.
        let g = CartesianGrid::builder()
            .cells(5, 1, 1)
            .cell_size(0.7, 1.0, 1.0)
            .refinement(3, 1, 1)
            .build()
            .unwrap();
        assert_eq!(g.extent()[0], 3.5);
        let id = g.id_cell(Point3D::new(3.5, 0.5, 0.5)).unwrap();
        assert_eq!(g.split_id(id), [14, 0, 0]);
        assert!(!g.is_inside(Point3D::new(3.5000001, 0.5, 0.5)));
    }

    #[test]
    fn id_cell_lower_boundary_is_inside() {
        let g = cube(2);
        assert_eq!(g.id_cell(Point3D::ORIGIN).unwrap(), CellId(0));
    }

    #[test]
    fn id_cell_outside_returns_out_of_domain() {
        let g = cube(2);
        for p in [
            Point3D::new(-0.5, 0.5, 0.5),
            Point3D::new(0.5, 2.01, 0.5),
            Point3D::new(0.5, 0.5, 7.0),
            Point3D::new(f64::NAN, 0.5, 0.5),
        ] {
            assert!(matches!(g.id_cell(p), Err(SpaceError::OutOfDomain { .. })));
            assert!(!g.is_inside(p));
        }
    }

    #[test]
    fn id_neighbour_steps_across_faces() {
        let g = cube(3);
        let c = g.merge_ids(1, 1, 1);
        assert_eq!(g.id_neighbour(c, Direction::XP), Some(g.merge_ids(2, 1, 1)));
        assert_eq!(g.id_neighbour(c, Direction::YM), Some(g.merge_ids(1, 0, 1)));
        assert_eq!(g.id_neighbour(c, Direction::ZP), Some(g.merge_ids(1, 1, 2)));
        assert_eq!(g.id_neighbour(CellId(0), Direction::XM), None);
        for dir in Direction::ALL {
            let n = g.id_neighbour(c, dir).unwrap();
            assert_eq!(g.id_neighbour(n, dir.opposite()), Some(c));
        }
    }

    #[test]
    fn face_count_and_volumes() {
        let g = CartesianGrid::new_3d(2, 3, 4, 1.0, 2.0, 0.5).unwrap();
        assert_eq!(g.face_count(), 24 + 6 + 12 + 8);
        assert_eq!(g.cell_volume(), 1.0);
        assert_eq!(g.grid_volume(), 24.0);
    }

    // ── Refinement tests ────────────────────────────────────────

    #[test]
    fn refinement_multiplies_counts_and_divides_sizes() {
        let g = CartesianGrid::builder()
            .cells(2, 3, 1)
            .cell_size(4.0, 3.0, 2.0)
            .refinement(2, 3, 4)
            .build()
            .unwrap();
        assert_eq!((g.nx(), g.ny(), g.nz()), (4, 9, 4));
        assert_eq!((g.dx(), g.dy(), g.dz()), (2.0, 1.0, 0.5));
        assert_eq!(g.cell_count(), 144);
        assert_eq!(g.coarse_cells(), [2, 3, 1]);
        assert_eq!(g.refinement(), [2, 3, 4]);
        assert_eq!(g.extent(), [8.0, 9.0, 2.0]);
    }

    #[test]
    fn two_d_ignores_z_parameters() {
        let g = CartesianGrid::builder()
            .cells_2d(3, 2)
            .cell_size(1.0, 1.0, 9.0)
            .refinement(2, 2, 7)
            .build()
            .unwrap();
        assert!(g.is_2d());
        assert_eq!(g.ndim(), 2);
        assert_eq!(g.nz(), 1);
        assert_eq!(g.dz(), 1.0);
        assert_eq!(g.resz(), 1);
        assert_eq!(g.cell_count(), 24);
    }

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_rejects_zero_count() {
        assert_eq!(
            CartesianGrid::new_3d(3, 0, 3, 1.0, 1.0, 1.0),
            Err(SpaceError::EmptyGrid { axis: "ny" })
        );
    }

    #[test]
    fn new_rejects_bad_cell_size() {
        assert!(matches!(
            CartesianGrid::new_2d(3, 3, 0.0, 1.0),
            Err(SpaceError::InvalidCellSize { axis: "dx", .. })
        ));
        assert!(matches!(
            CartesianGrid::new_3d(3, 3, 3, 1.0, 1.0, f64::INFINITY),
            Err(SpaceError::InvalidCellSize { axis: "dz", .. })
        ));
    }

    #[test]
    fn new_rejects_zero_refinement() {
        let err = CartesianGrid::builder()
            .cells(2, 2, 2)
            .refinement(1, 0, 1)
            .build()
            .unwrap_err();
        assert_eq!(err, SpaceError::InvalidRefinement { axis: "resy", value: 0 });
    }

    #[test]
    fn check_cell_rejects_out_of_range() {
        let g = cube(2);
        assert!(g.check_cell(CellId(7)).is_ok());
        assert!(matches!(
            g.check_cell(CellId(8)),
            Err(SpaceError::CellOutOfRange { cell_count: 8, .. })
        ));
        assert!(!g.contains(CellId(8)));
    }

    // ── Compliance suites ───────────────────────────────────────

    #[test]
    fn compliance_cube() {
        compliance::run_full_compliance(&cube(4));
    }

    #[test]
    fn compliance_flat_2d() {
        let g = CartesianGrid::new_2d(7, 3, 0.5, 2.0).unwrap();
        compliance::run_full_compliance(&g);
    }

    #[test]
    fn compliance_refined_slab() {
        let g = CartesianGrid::builder()
            .cells(3, 2, 1)
            .cell_size(1.0, 1.0, 1.0)
            .refinement(2, 1, 3)
            .origin([5.0, 5.0, -2.0])
            .build()
            .unwrap();
        compliance::run_full_compliance(&g);
    }

    // ── Downcast test ───────────────────────────────────────────

    #[test]
    fn downcast_ref_cartesian() {
        let g: Box<dyn Grid> = Box::new(cube(2));
        assert!(g.downcast_ref::<CartesianGrid>().is_some());
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn split_merge_bijection(
            nx in 1usize..8, ny in 1usize..8, nz in 1usize..8, raw in 0usize..512,
        ) {
            let g = CartesianGrid::new_3d(nx, ny, nz, 1.0, 1.0, 1.0).unwrap();
            let id = CellId(raw % g.cell_count());
            let [ix, iy, iz] = g.split_id(id);
            prop_assert!(ix < nx && iy < ny && iz < nz);
            prop_assert_eq!(g.merge_ids(ix, iy, iz), id);
        }

        #[test]
        fn neighbours_symmetric(
            nx in 1usize..6, ny in 1usize..6, nz in 1usize..6, raw in 0usize..216,
        ) {
            let g = CartesianGrid::new_3d(nx, ny, nz, 1.0, 1.0, 1.0).unwrap();
            let id = CellId(raw % g.cell_count());
            for nb in g.neighbours(id) {
                prop_assert!(
                    g.neighbours(nb).contains(&id),
                    "neighbour symmetry violated: {} in N({}) but not vice versa",
                    nb, id,
                );
            }
        }
    }
}
