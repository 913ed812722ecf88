//! The roll transform: how a die face changes when the cube tips over.
//!
//! Rolling a die along one axis cycles through a belt of four faces while
//! the two faces on the rolling axis stay put. The belts here follow a
//! standard western die (opposite faces sum to seven): rolling up or down
//! turns the belt 1-2-6-5 and leaves 3 and 4 on the sides; rolling left or
//! right turns the belt 1-3-6-4 and leaves 2 and 5 on the sides. Opposite
//! directions turn the same belt the opposite way, so a roll followed by the
//! opposite roll restores the original face, and four rolls in the same
//! direction come full circle.

use crate::{Direction, Face};

impl Face {
    /// Returns the face shown after rolling the cube one cell in
    /// `direction`.
    ///
    /// The empty cell is inert: rolling it is meaningless and returns
    /// [`Face::Empty`] unchanged. A [`Tray`](crate::Tray) never asks for it,
    /// since only die faces sit next to the empty cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use rollingcubes_core::{Direction, Face};
    ///
    /// assert_eq!(Face::F1.rolled_toward(Direction::Down), Face::F2);
    /// assert_eq!(Face::F5.rolled_toward(Direction::Up), Face::F6);
    ///
    /// // 3 and 4 sit on the rolling axis of vertical rolls.
    /// assert_eq!(Face::F3.rolled_toward(Direction::Down), Face::F3);
    ///
    /// // A roll and its opposite cancel out.
    /// let face = Face::F2;
    /// assert_eq!(
    ///     face.rolled_toward(Direction::Left)
    ///         .rolled_toward(Direction::Right),
    ///     face,
    /// );
    /// ```
    #[must_use]
    pub const fn rolled_toward(self, direction: Direction) -> Self {
        match direction {
            Direction::Down => match self {
                Self::F1 => Self::F2,
                Self::F2 => Self::F6,
                Self::F6 => Self::F5,
                Self::F5 => Self::F1,
                Self::F3 | Self::F4 | Self::Empty => self,
            },
            Direction::Up => match self {
                Self::F1 => Self::F5,
                Self::F5 => Self::F6,
                Self::F6 => Self::F2,
                Self::F2 => Self::F1,
                Self::F3 | Self::F4 | Self::Empty => self,
            },
            Direction::Right => match self {
                Self::F1 => Self::F3,
                Self::F3 => Self::F6,
                Self::F6 => Self::F4,
                Self::F4 => Self::F1,
                Self::F2 | Self::F5 | Self::Empty => self,
            },
            Direction::Left => match self {
                Self::F1 => Self::F4,
                Self::F4 => Self::F6,
                Self::F6 => Self::F3,
                Self::F3 => Self::F1,
                Self::F2 | Self::F5 | Self::Empty => self,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_die_faces_stay_die_faces() {
        for face in Face::DIE {
            for direction in Direction::ALL {
                assert!(!face.rolled_toward(direction).is_empty());
            }
        }
    }

    #[test]
    fn test_four_rolls_restore_the_face() {
        for face in Face::DIE {
            for direction in Direction::ALL {
                let mut rolled = face;
                for _ in 0..4 {
                    rolled = rolled.rolled_toward(direction);
                }
                assert_eq!(rolled, face, "{face} rolled {direction} four times");
            }
        }
    }

    #[test]
    fn test_opposite_roll_is_inverse() {
        for face in Face::DIE {
            for direction in Direction::ALL {
                assert_eq!(
                    face.rolled_toward(direction)
                        .rolled_toward(direction.opposite()),
                    face,
                    "{face} rolled {direction} then back"
                );
            }
        }
    }

    #[test]
    fn test_axis_faces_are_fixed() {
        for direction in [Direction::Up, Direction::Down] {
            assert_eq!(Face::F3.rolled_toward(direction), Face::F3);
            assert_eq!(Face::F4.rolled_toward(direction), Face::F4);
        }
        for direction in [Direction::Left, Direction::Right] {
            assert_eq!(Face::F2.rolled_toward(direction), Face::F2);
            assert_eq!(Face::F5.rolled_toward(direction), Face::F5);
        }
    }

    #[test]
    fn test_belt_orders() {
        // Rolling down repeatedly walks the vertical belt.
        let mut face = Face::F1;
        let mut belt = Vec::new();
        for _ in 0..4 {
            face = face.rolled_toward(Direction::Down);
            belt.push(face);
        }
        assert_eq!(belt, [Face::F2, Face::F6, Face::F5, Face::F1]);

        // Rolling right repeatedly walks the horizontal belt.
        let mut face = Face::F1;
        let mut belt = Vec::new();
        for _ in 0..4 {
            face = face.rolled_toward(Direction::Right);
            belt.push(face);
        }
        assert_eq!(belt, [Face::F3, Face::F6, Face::F4, Face::F1]);
    }

    #[test]
    fn test_empty_is_inert() {
        for direction in Direction::ALL {
            assert_eq!(Face::Empty.rolled_toward(direction), Face::Empty);
        }
    }
}
