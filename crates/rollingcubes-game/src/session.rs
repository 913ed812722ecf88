//! A single playthrough.

use std::time::{Duration, Instant};

use rollingcubes_core::{Direction, InvalidMoveError, Tray};

use crate::GameResult;

/// A Rolling Cubes playthrough: a [`Tray`] plus the player's name, the move
/// counter, and the session clock.
///
/// The tray itself does not count moves; the session increments its counter
/// once per *successful* roll, so rejected moves cost nothing. The clock
/// starts when the session is created and restarts with
/// [`restart`](Self::restart).
///
/// # Examples
///
/// ```
/// use rollingcubes_game::GameSession;
///
/// let mut session = GameSession::new("ada");
/// assert_eq!(session.steps(), 0);
///
/// session.roll(1, 1).unwrap();
/// assert_eq!(session.steps(), 1);
///
/// // Illegal moves are reported and not counted.
/// assert!(session.roll(2, 2).is_err());
/// assert_eq!(session.steps(), 1);
/// ```
#[derive(Debug)]
pub struct GameSession {
    tray: Tray,
    player: String,
    steps: u32,
    started_at: Instant,
}

impl GameSession {
    /// Starts a session on the default tray layout.
    #[must_use]
    pub fn new(player: impl Into<String>) -> Self {
        Self::with_tray(player, Tray::new())
    }

    /// Starts a session on the given tray.
    #[must_use]
    pub fn with_tray(player: impl Into<String>, tray: Tray) -> Self {
        Self {
            tray,
            player: player.into(),
            steps: 0,
            started_at: Instant::now(),
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn player(&self) -> &str {
        &self.player
    }

    /// Returns the tray being played.
    #[must_use]
    pub fn tray(&self) -> &Tray {
        &self.tray
    }

    /// Returns the tray mutably, e.g. to register a solved-state observer.
    ///
    /// Rolls made directly on the tray bypass the session's move counter;
    /// use [`roll`](Self::roll) for moves that should count.
    pub fn tray_mut(&mut self) -> &mut Tray {
        &mut self.tray
    }

    /// Returns the number of successful rolls so far.
    #[must_use]
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Returns the wall-clock time since the session (re)started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Returns whether the tray is solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.tray.is_solved()
    }

    /// Rolls the cube at `(row, col)` into the empty cell and counts the
    /// move.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMoveError`] for an illegal move; the tray and the
    /// move counter are unchanged.
    pub fn roll(&mut self, row: i32, col: i32) -> Result<Direction, InvalidMoveError> {
        let direction = self.tray.roll_to_empty(row, col)?;
        self.steps += 1;
        log::debug!(
            "{} rolled ({row}, {col}) {direction}; step {}",
            self.player,
            self.steps
        );
        if self.tray.is_solved() {
            log::info!("{} has solved the game in {} steps", self.player, self.steps);
        }
        Ok(direction)
    }

    /// Abandons the current tray and starts over on the default layout.
    ///
    /// The move counter and clock reset. Observers registered on the
    /// previous tray are discarded with it.
    pub fn restart(&mut self) {
        log::info!("resetting game for {}", self.player);
        self.tray = Tray::new();
        self.steps = 0;
        self.started_at = Instant::now();
    }

    /// Ends the session and produces the summary a results store consumes.
    #[must_use]
    pub fn finish(self) -> GameResult {
        GameResult {
            player: self.player,
            solved: self.tray.is_solved(),
            duration: self.started_at.elapsed(),
            steps: self.steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use rollingcubes_core::{Face, Position};

    use super::*;

    #[test]
    fn test_steps_count_only_successful_rolls() {
        let mut session = GameSession::new("ada");
        session.roll(1, 1).unwrap();
        assert_eq!(session.steps(), 1);

        let before = session.tray().faces();
        assert!(session.roll(2, 2).is_err());
        assert_eq!(session.steps(), 1);
        assert_eq!(session.tray().faces(), before);
    }

    #[test]
    fn test_finish_reports_solved_session() {
        let tray = Tray::from_layout([[6, 6, 6], [6, 0, 6], [6, 5, 6]]).unwrap();
        let mut session = GameSession::with_tray("ada", tray);
        session.roll(2, 1).unwrap();
        assert!(session.is_solved());

        let result = session.finish();
        assert_eq!(result.player, "ada");
        assert!(result.solved);
        assert_eq!(result.steps, 1);
    }

    #[test]
    fn test_finish_reports_abandoned_session() {
        let mut session = GameSession::new("bob");
        session.roll(0, 0).unwrap();
        let result = session.finish();
        assert!(!result.solved);
        assert_eq!(result.steps, 1);
    }

    #[test]
    fn test_restart_resets_tray_and_counter() {
        let mut session = GameSession::new("ada");
        session.roll(1, 1).unwrap();
        session.restart();
        assert_eq!(session.steps(), 0);
        assert_eq!(session.tray().faces(), Tray::new().faces());
        assert_eq!(session.tray().empty_position(), Position::new(0, 1));
    }

    #[test]
    fn test_session_rolls_reach_the_tray() {
        let mut session = GameSession::new("ada");
        session.roll(1, 1).unwrap();
        assert_eq!(session.tray().face(Position::new(0, 1)), Face::F6);
        assert_eq!(session.tray().face(Position::new(1, 1)), Face::Empty);
    }
}
