//! Game-session layer for the Rolling Cubes puzzle.
//!
//! Wraps the [`rollingcubes_core`] state machine with what a playthrough
//! needs on top of the tray itself: a per-session move counter, wall-clock
//! timing, and the end-of-game summary ([`GameResult`]) handed to a results
//! store.
//!
//! # Examples
//!
//! ```
//! use rollingcubes_game::GameSession;
//!
//! let mut session = GameSession::new("ada");
//! session.roll(1, 1).unwrap();
//! assert_eq!(session.steps(), 1);
//!
//! let result = session.finish();
//! assert_eq!(result.player, "ada");
//! assert_eq!(result.steps, 1);
//! ```

pub mod result;
pub mod session;

pub use self::{result::GameResult, session::GameSession};
