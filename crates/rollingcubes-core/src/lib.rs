//! Core state machine for the Rolling Cubes puzzle.
//!
//! A 3×3 tray holds eight dice and one empty cell. A cube that sits directly
//! next to the empty cell may be rolled into it; rolling moves the cube and
//! rotates its visible face the way a physical die turns when tipped over an
//! edge. The puzzle is solved when every cube shows six.
//!
//! # Overview
//!
//! The crate is organized around a few small types:
//!
//! - [`face`]: the value visible on a tray cell ([`Face`]), including the
//!   roll transform that models tipping a die in one of the four directions
//! - [`direction`]: the four roll directions and their unit deltas
//!   ([`Direction`])
//! - [`position`]: an immutable tray coordinate pair ([`Position`])
//! - [`tray`]: the mutable puzzle state ([`Tray`]) with move validation,
//!   roll execution, solved detection, and solved-state notifications
//! - [`error`]: the error types returned by construction and moves
//!
//! # Examples
//!
//! ```
//! use rollingcubes_core::Tray;
//!
//! // The default tray is one good streak away from solved.
//! let mut tray = Tray::new();
//! assert!(!tray.is_solved());
//!
//! // The empty cell starts at (0, 1); the cube below it can roll up.
//! assert!(tray.can_roll_to_empty(1, 1));
//! tray.roll_to_empty(1, 1).unwrap();
//! assert_eq!(tray.empty_position().row(), 1);
//! ```

pub mod direction;
pub mod error;
pub mod face;
pub mod position;
mod roll;
pub mod tray;

pub use self::{
    direction::Direction,
    error::{InvalidMoveError, LayoutError},
    face::Face,
    position::Position,
    tray::{INITIAL, NEAR_GOAL, Tray},
};

/// The number of rows and columns of the tray.
pub const TRAY_SIZE: usize = 3;
