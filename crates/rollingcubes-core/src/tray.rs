//! The mutable puzzle state.

use std::fmt;

use crate::{Direction, Face, InvalidMoveError, LayoutError, Position, TRAY_SIZE};

/// The fully scrambled starting layout: eight cubes showing 1 around a
/// central hole.
pub const INITIAL: [[u8; TRAY_SIZE]; TRAY_SIZE] = [[1, 1, 1], [1, 0, 1], [1, 1, 1]];

/// A layout a short streak of rolls away from solved; the default starting
/// configuration.
pub const NEAR_GOAL: [[u8; TRAY_SIZE]; TRAY_SIZE] = [[1, 0, 2], [3, 5, 2], [6, 1, 5]];

type SolvedObserver = Box<dyn FnMut(bool)>;

/// The puzzle state: a 3×3 grid of [`Face`] values with one empty cell.
///
/// The tray tracks the empty cell's coordinates alongside the grid; the two
/// stay consistent through every mutation, and exactly one cell is empty at
/// all times. All mutation goes through [`roll_to_empty`](Self::roll_to_empty),
/// which either performs a complete move or returns an error leaving the
/// state untouched.
///
/// The tray is single-threaded: nothing in it blocks or spawns work, and a
/// caller sharing it across threads must serialize access externally.
///
/// # Examples
///
/// ```
/// use rollingcubes_core::{Face, Position, Tray};
///
/// let mut tray = Tray::new();
/// assert_eq!(tray.empty_position(), Position::new(0, 1));
///
/// // The cube below the hole rolls up, turning its 5 into a 6.
/// tray.roll_to_empty(1, 1).unwrap();
/// assert_eq!(tray.face(Position::new(0, 1)), Face::F6);
/// assert_eq!(tray.empty_position(), Position::new(1, 1));
/// ```
pub struct Tray {
    grid: [[Face; TRAY_SIZE]; TRAY_SIZE],
    empty: Position,
    solved_observers: Vec<SolvedObserver>,
}

impl Tray {
    /// Creates a tray with the default [`NEAR_GOAL`] layout.
    #[must_use]
    pub fn new() -> Self {
        Self::from_layout(NEAR_GOAL).expect("built-in layout is valid")
    }

    /// Creates a tray from a grid of layout codes (0 for the empty cell,
    /// 1-6 for die faces).
    ///
    /// The grid is scanned once; the empty cell's coordinates are recorded
    /// during the scan.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidFaceCode`] if a cell value is not in
    /// 0-6, and [`LayoutError::MissingEmptyCell`] or
    /// [`LayoutError::ExtraEmptyCell`] unless exactly one cell is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rollingcubes_core::{LayoutError, Tray};
    ///
    /// let tray = Tray::from_layout([[6, 6, 6], [6, 0, 6], [6, 6, 6]]).unwrap();
    /// assert!(tray.is_solved());
    ///
    /// let err = Tray::from_layout([[1, 1, 1], [1, 1, 1], [1, 1, 1]]);
    /// assert_eq!(err.unwrap_err(), LayoutError::MissingEmptyCell);
    /// ```
    pub fn from_layout(layout: [[u8; TRAY_SIZE]; TRAY_SIZE]) -> Result<Self, LayoutError> {
        let mut grid = [[Face::Empty; TRAY_SIZE]; TRAY_SIZE];
        let mut empty = None;
        for (row, codes) in (0u8..).zip(&layout) {
            for (col, &code) in (0u8..).zip(codes) {
                let face = Face::from_code(code).ok_or(LayoutError::InvalidFaceCode { code })?;
                if face.is_empty() {
                    if empty.is_some() {
                        return Err(LayoutError::ExtraEmptyCell);
                    }
                    empty = Some(Position::new(row, col));
                }
                grid[usize::from(row)][usize::from(col)] = face;
            }
        }
        let Some(empty) = empty else {
            return Err(LayoutError::MissingEmptyCell);
        };
        Ok(Self {
            grid,
            empty,
            solved_observers: Vec::new(),
        })
    }

    /// Returns the face at the given position.
    #[must_use]
    pub fn face(&self, position: Position) -> Face {
        self.grid[usize::from(position.row())][usize::from(position.col())]
    }

    /// Returns a copy of the grid, addressed as `faces[row][col]`.
    #[must_use]
    pub fn faces(&self) -> [[Face; TRAY_SIZE]; TRAY_SIZE] {
        self.grid
    }

    /// Returns the position of the empty cell.
    #[must_use]
    pub fn empty_position(&self) -> Position {
        self.empty
    }

    /// Returns `true` if every cube shows six.
    ///
    /// This is recomputed from the grid; it does not depend on how the tray
    /// got here.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.grid
            .iter()
            .flatten()
            .all(|face| matches!(face, Face::Empty | Face::F6))
    }

    /// Returns whether the cube at `(row, col)` can be rolled into the empty
    /// cell.
    ///
    /// True exactly when the coordinates are inside the tray and one
    /// orthogonal step away from the empty cell. Out-of-range coordinates
    /// (including negative ones) are ordinary `false` inputs.
    ///
    /// # Examples
    ///
    /// ```
    /// use rollingcubes_core::Tray;
    ///
    /// let tray = Tray::new(); // empty cell at (0, 1)
    /// assert!(tray.can_roll_to_empty(0, 0));
    /// assert!(tray.can_roll_to_empty(1, 1));
    /// assert!(!tray.can_roll_to_empty(0, 1)); // the empty cell itself
    /// assert!(!tray.can_roll_to_empty(1, 0)); // diagonal
    /// assert!(!tray.can_roll_to_empty(-1, 1)); // off the tray
    /// ```
    #[must_use]
    pub fn can_roll_to_empty(&self, row: i32, col: i32) -> bool {
        if Position::from_coords(row, col).is_none() {
            return false;
        }
        let distance = (i32::from(self.empty.row()) - row).abs()
            + (i32::from(self.empty.col()) - col).abs();
        distance == 1
    }

    /// Returns the direction the cube at `(row, col)` would roll to reach
    /// the empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMoveError`] unless
    /// [`can_roll_to_empty`](Self::can_roll_to_empty) holds for the
    /// coordinates.
    pub fn roll_direction(&self, row: i32, col: i32) -> Result<Direction, InvalidMoveError> {
        if !self.can_roll_to_empty(row, col) {
            return Err(InvalidMoveError { row, col });
        }
        let row_delta = i32::from(self.empty.row()) - row;
        let col_delta = i32::from(self.empty.col()) - col;
        Direction::from_deltas(row_delta, col_delta).ok_or(InvalidMoveError { row, col })
    }

    /// Rolls the cube at `(row, col)` into the empty cell.
    ///
    /// The cube's face is turned per the roll direction, the rolled cube
    /// takes the empty cell's place, and the cube's former cell becomes the
    /// new empty cell. Returns the direction rolled. If the move completes
    /// and the solved state changed, registered observers are notified
    /// before this method returns (see
    /// [`on_solved_changed`](Self::on_solved_changed)).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMoveError`] unless
    /// [`can_roll_to_empty`](Self::can_roll_to_empty) holds; the tray is
    /// unchanged in that case.
    pub fn roll_to_empty(&mut self, row: i32, col: i32) -> Result<Direction, InvalidMoveError> {
        let direction = self.roll_direction(row, col)?;
        let source = Position::from_coords(row, col).ok_or(InvalidMoveError { row, col })?;

        log::trace!("cube at {source} rolls {direction} into {}", self.empty);

        let was_solved = self.is_solved();
        let rolled = self.face(source).rolled_toward(direction);
        let target = self.empty;
        *self.cell_mut(target) = rolled;
        *self.cell_mut(source) = Face::Empty;
        self.empty = source;

        let solved = self.is_solved();
        if solved != was_solved {
            for observer in &mut self.solved_observers {
                observer(solved);
            }
        }
        Ok(direction)
    }

    /// Returns the positions whose cube can currently be rolled into the
    /// empty cell.
    ///
    /// Candidates are the empty cell's four orthogonal neighbors, visited in
    /// [`Direction::ALL`] order; neighbors off the tray edge are skipped. A
    /// fresh collection is returned on every call.
    ///
    /// # Examples
    ///
    /// ```
    /// use rollingcubes_core::{Position, Tray};
    ///
    /// let tray = Tray::new(); // empty cell at (0, 1)
    /// let positions = tray.rollable_positions();
    /// assert_eq!(
    ///     positions,
    ///     [Position::new(1, 1), Position::new(0, 2), Position::new(0, 0)],
    /// );
    /// ```
    #[must_use]
    pub fn rollable_positions(&self) -> Vec<Position> {
        let mut positions = Vec::with_capacity(Direction::ALL.len());
        for direction in Direction::ALL {
            let row = i32::from(self.empty.row()) - direction.row_delta();
            let col = i32::from(self.empty.col()) - direction.col_delta();
            if self.can_roll_to_empty(row, col)
                && let Some(position) = Position::from_coords(row, col)
            {
                positions.push(position);
            }
        }
        positions
    }

    /// Registers an observer called whenever the solved state flips.
    ///
    /// Observers run synchronously at the end of a completed
    /// [`roll_to_empty`](Self::roll_to_empty), receiving the new solved
    /// flag. The tray is mutably borrowed while they run, so an observer
    /// cannot re-enter it; queue any follow-up move for after the roll call
    /// returns.
    pub fn on_solved_changed(&mut self, observer: impl FnMut(bool) + 'static) {
        self.solved_observers.push(Box::new(observer));
    }

    fn cell_mut(&mut self, position: Position) -> &mut Face {
        &mut self.grid[usize::from(position.row())][usize::from(position.col())]
    }
}

impl Default for Tray {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Tray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            for face in row {
                write!(f, "{face} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Tray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tray")
            .field("grid", &self.grid)
            .field("empty", &self.empty)
            .field("solved_observers", &self.solved_observers.len())
            .finish()
    }
}
