//! End-of-game summary.

use std::{
    fmt::{self, Display},
    time::Duration,
};

use serde::{Deserialize, Serialize};

/// What remains of a session once it ends: who played, whether they solved
/// the tray, how long it took, and in how many moves.
///
/// This is the value object a results store persists; the session layer
/// produces it via [`GameSession::finish`](crate::GameSession::finish).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use rollingcubes_game::GameResult;
///
/// let result = GameResult {
///     player: "ada".into(),
///     solved: true,
///     duration: Duration::from_secs(197),
///     steps: 42,
/// };
/// assert_eq!(result.to_string(), "ada solved the game in 42 steps (00:03:17)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// The player's name, free text.
    pub player: String,
    /// Whether the tray was solved when the session ended.
    pub solved: bool,
    /// Wall-clock time from session start to finish.
    pub duration: Duration,
    /// Successful rolls made during the session.
    pub steps: u32,
}

impl Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.duration.as_secs();
        let (hours, minutes, seconds) = (secs / 3600, secs % 3600 / 60, secs % 60);
        let outcome = if self.solved { "solved" } else { "gave up" };
        write!(
            f,
            "{} {outcome} the game in {} steps ({hours:02}:{minutes:02}:{seconds:02})",
            self.player, self.steps
        )
    }
}
