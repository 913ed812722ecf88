//! Errors reported by tray construction and moves.

/// Errors that can occur when building a [`Tray`](crate::Tray) from a layout.
///
/// Any of these is fatal to construction: no tray is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum LayoutError {
    /// A cell holds a value that is neither the empty marker (0) nor a die
    /// face (1-6).
    #[display("face code {code} is not in 0-6")]
    InvalidFaceCode {
        /// The offending cell value.
        code: u8,
    },
    /// No cell holds the empty marker.
    #[display("layout has no empty cell")]
    MissingEmptyCell,
    /// More than one cell holds the empty marker.
    #[display("layout has more than one empty cell")]
    ExtraEmptyCell,
}

/// Error returned when a cell cannot be rolled into the empty cell.
///
/// Raised for coordinates outside the tray, for the empty cell itself, and
/// for any cell that is not exactly one step away from the empty cell. The
/// tray is left untouched; callers typically pre-check with
/// [`Tray::can_roll_to_empty`](crate::Tray::can_roll_to_empty) and treat this
/// as a normal re-prompt path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("cube at ({row}, {col}) cannot roll into the empty cell")]
pub struct InvalidMoveError {
    /// The requested row.
    pub row: i32,
    /// The requested column.
    pub col: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            LayoutError::InvalidFaceCode { code: 9 }.to_string(),
            "face code 9 is not in 0-6"
        );
        assert_eq!(
            LayoutError::MissingEmptyCell.to_string(),
            "layout has no empty cell"
        );
        assert_eq!(
            InvalidMoveError { row: -1, col: 2 }.to_string(),
            "cube at (-1, 2) cannot roll into the empty cell"
        );
    }
}
