//! Face directions on a Cartesian grid.

/// One of the six face-adjacent directions of a Cartesian cell.
///
/// Used by [`CartesianGrid::id_neighbour`](crate::CartesianGrid::id_neighbour)
/// to step across a single face. The search itself uses the full Moore
/// neighbourhood from [`Grid::neighbours`](crate::Grid::neighbours).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Increasing x.
    XP,
    /// Decreasing x.
    XM,
    /// Increasing y.
    YP,
    /// Decreasing y.
    YM,
    /// Increasing z.
    ZP,
    /// Decreasing z.
    ZM,
}

impl Direction {
    /// All six directions in declaration order.
    pub const ALL: [Direction; 6] = [
        Direction::XP,
        Direction::XM,
        Direction::YP,
        Direction::YM,
        Direction::ZP,
        Direction::ZM,
    ];

    /// Unit index offset `(dx, dy, dz)` for this direction.
    pub fn offset(self) -> (isize, isize, isize) {
        match self {
            Direction::XP => (1, 0, 0),
            Direction::XM => (-1, 0, 0),
            Direction::YP => (0, 1, 0),
            Direction::YM => (0, -1, 0),
            Direction::ZP => (0, 0, 1),
            Direction::ZM => (0, 0, -1),
        }
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::XP => Direction::XM,
            Direction::XM => Direction::XP,
            Direction::YP => Direction::YM,
            Direction::YM => Direction::YP,
            Direction::ZP => Direction::ZM,
            Direction::ZM => Direction::ZP,
        }
    }
}
