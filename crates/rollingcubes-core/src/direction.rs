//! Roll directions.

use std::fmt::{self, Display};

/// The direction a cube rolls when it moves into the empty cell.
///
/// Each direction carries a unit `(row, column)` delta: the displacement of
/// the moving cube. The direction of a legal move is the vector from the
/// cube's cell to the empty cell, which is always exactly one of the four
/// unit vectors.
///
/// # Examples
///
/// ```
/// use rollingcubes_core::Direction;
///
/// // A cube one row below the empty cell rolls up.
/// assert_eq!(Direction::from_deltas(-1, 0), Some(Direction::Up));
///
/// // Diagonal steps are not roll directions.
/// assert_eq!(Direction::from_deltas(-1, 1), None);
///
/// assert_eq!(Direction::Up.opposite(), Direction::Down);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward decreasing row.
    Up,
    /// Toward increasing row.
    Down,
    /// Toward decreasing column.
    Left,
    /// Toward increasing column.
    Right,
}

impl Direction {
    /// Array containing all four directions.
    ///
    /// This is the enumeration order used by
    /// [`Tray::rollable_positions`](crate::Tray::rollable_positions).
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the row component of this direction's unit delta.
    #[must_use]
    pub const fn row_delta(self) -> i32 {
        match self {
            Self::Up => -1,
            Self::Down => 1,
            Self::Left | Self::Right => 0,
        }
    }

    /// Returns the column component of this direction's unit delta.
    #[must_use]
    pub const fn col_delta(self) -> i32 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
            Self::Up | Self::Down => 0,
        }
    }

    /// Creates a direction from a `(row, column)` delta.
    ///
    /// Returns `None` unless the delta is exactly one of the four unit
    /// vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// use rollingcubes_core::Direction;
    ///
    /// assert_eq!(Direction::from_deltas(1, 0), Some(Direction::Down));
    /// assert_eq!(Direction::from_deltas(0, -1), Some(Direction::Left));
    /// assert_eq!(Direction::from_deltas(0, 0), None);
    /// assert_eq!(Direction::from_deltas(0, 2), None);
    /// ```
    #[must_use]
    pub const fn from_deltas(row_delta: i32, col_delta: i32) -> Option<Self> {
        match (row_delta, col_delta) {
            (-1, 0) => Some(Self::Up),
            (1, 0) => Some(Self::Down),
            (0, -1) => Some(Self::Left),
            (0, 1) => Some(Self::Right),
            _ => None,
        }
    }

    /// Returns the direction with the negated delta.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deltas_are_unit_vectors() {
        for direction in Direction::ALL {
            let manhattan = direction.row_delta().abs() + direction.col_delta().abs();
            assert_eq!(manhattan, 1);
            assert_eq!(
                Direction::from_deltas(direction.row_delta(), direction.col_delta()),
                Some(direction)
            );
        }
    }

    #[test]
    fn test_from_deltas_rejects_non_unit_vectors() {
        for (row_delta, col_delta) in [(0, 0), (1, 1), (-1, -1), (2, 0), (0, -2), (3, 1)] {
            assert_eq!(Direction::from_deltas(row_delta, col_delta), None);
        }
    }

    #[test]
    fn test_opposite_is_involution() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            assert_eq!(direction.opposite().row_delta(), -direction.row_delta());
            assert_eq!(direction.opposite().col_delta(), -direction.col_delta());
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(format!("{}", Direction::Up), "up");
        assert_eq!(format!("{}", Direction::Right), "right");
    }
}
