//! Tray cell values.

use std::fmt::{self, Display};

/// The value visible on a tray cell: either the empty cell or the top face of
/// a die, 1-6.
///
/// This enum provides type-safe representation of cell contents, preventing
/// out-of-range face values at compile time. The numeric codes match the
/// layout encoding used by [`Tray::from_layout`](crate::Tray::from_layout):
/// 0 is the empty cell, 1-6 are die faces.
///
/// # Examples
///
/// ```
/// use rollingcubes_core::Face;
///
/// let face = Face::F5;
/// assert_eq!(face.code(), 5);
///
/// // Create from a layout code
/// let face = Face::from_code(3);
/// assert_eq!(face, Some(Face::F3));
///
/// // 7 is not a die face
/// assert_eq!(Face::from_code(7), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Face {
    /// The empty cell.
    Empty = 0,
    /// A die showing 1.
    F1 = 1,
    /// A die showing 2.
    F2 = 2,
    /// A die showing 3.
    F3 = 3,
    /// A die showing 4.
    F4 = 4,
    /// A die showing 5.
    F5 = 5,
    /// A die showing 6.
    F6 = 6,
}

impl Face {
    /// Array containing every cell value, the empty cell first, then the six
    /// die faces in numeric order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rollingcubes_core::Face;
    ///
    /// assert_eq!(Face::ALL.len(), 7);
    /// assert_eq!(Face::ALL[0], Face::Empty);
    /// assert_eq!(Face::ALL[6], Face::F6);
    /// ```
    pub const ALL: [Self; 7] = [
        Self::Empty,
        Self::F1,
        Self::F2,
        Self::F3,
        Self::F4,
        Self::F5,
        Self::F6,
    ];

    /// Array containing the six die faces, without the empty cell.
    ///
    /// Useful for iterating over the faces a cube can actually show.
    pub const DIE: [Self; 6] = [Self::F1, Self::F2, Self::F3, Self::F4, Self::F5, Self::F6];

    /// Creates a cell value from its layout code.
    ///
    /// Returns `None` if `code` is not in the range 0-6.
    ///
    /// # Examples
    ///
    /// ```
    /// use rollingcubes_core::Face;
    ///
    /// assert_eq!(Face::from_code(0), Some(Face::Empty));
    /// assert_eq!(Face::from_code(6), Some(Face::F6));
    /// assert_eq!(Face::from_code(7), None);
    /// ```
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Empty),
            1 => Some(Self::F1),
            2 => Some(Self::F2),
            3 => Some(Self::F3),
            4 => Some(Self::F4),
            5 => Some(Self::F5),
            6 => Some(Self::F6),
            _ => None,
        }
    }

    /// Returns the layout code of this cell value (0 for the empty cell,
    /// 1-6 for die faces).
    ///
    /// # Examples
    ///
    /// ```
    /// use rollingcubes_core::Face;
    ///
    /// assert_eq!(Face::Empty.code(), 0);
    /// assert_eq!(Face::F4.code(), 4);
    /// ```
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns `true` if this is the empty cell.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.code(), f)
    }
}

impl From<Face> for u8 {
    fn from(face: Face) -> u8 {
        face.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for face in Face::ALL {
            assert_eq!(Face::from_code(face.code()), Some(face));
        }
        assert_eq!(Face::from_code(7), None);
        assert_eq!(Face::from_code(255), None);
    }

    #[test]
    fn test_die_excludes_empty() {
        assert_eq!(Face::DIE.len(), 6);
        assert!(Face::DIE.iter().all(|face| !face.is_empty()));
        assert!(Face::Empty.is_empty());
    }

    #[test]
    fn test_display_renders_code() {
        assert_eq!(format!("{}", Face::Empty), "0");
        assert_eq!(format!("{}", Face::F6), "6");
    }

    #[test]
    fn test_u8_conversion() {
        let code: u8 = Face::F2.into();
        assert_eq!(code, 2);
    }
}
