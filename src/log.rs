//! Append-only game log.

use std::fs::{File, OpenOptions};
use std::io::{self, LineWriter, Write};
use std::path::Path;

use tracing::warn;

use crate::hand::{Hand, Player};

/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "game_log.txt";

const SEPARATOR: &str = "=====================================";

/// Formats one hand for the detailed state log.
///
/// ```
/// use termjack::{Card, Hand, log::hand_line};
///
/// let mut hand = Hand::new();
/// hand.add_card(Card::new(10));
/// hand.add_card(Card::new(1));
/// assert_eq!(hand_line(1, 1, &hand), "Player 1 hand 1: 1 10 Score: 21");
/// ```
#[must_use]
pub fn hand_line(player: usize, hand_number: usize, hand: &Hand) -> String {
    let ranks: Vec<String> = hand.iter().map(|card| card.rank.to_string()).collect();
    format!(
        "Player {player} hand {hand_number}: {} Score: {}",
        ranks.join(" "),
        hand.total()
    )
}

/// Formats a settled hand for the log.
#[must_use]
pub fn result_line(description: &str, balance: f64) -> String {
    format!("Result: {description}, Balance: ${balance:.2}")
}

/// An append-only text log. When the file could not be opened every write is
/// skipped.
#[derive(Debug)]
pub struct GameLog {
    writer: Option<LineWriter<File>>,
}

impl GameLog {
    /// Opens `path` for appending.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file cannot be opened or created.
    pub fn try_open(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path.as_ref())?;
        Ok(Self {
            writer: Some(LineWriter::new(file)),
        })
    }

    /// Opens `path` for appending, falling back to a disabled log with a
    /// warning on stderr.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::try_open(path).unwrap_or_else(|err| {
            warn!(path = %path.display(), %err, "log file is not open; results will not be logged");
            Self::disabled()
        })
    }

    /// Returns a log that discards every write.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { writer: None }
    }

    /// Returns whether writes reach a file.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.writer.is_some()
    }

    fn write_line(&mut self, line: &str) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };
        if let Err(err) = writeln!(writer, "{line}") {
            warn!(%err, "failed to write to the game log");
        }
    }

    /// Appends a settled hand.
    pub fn result(&mut self, description: &str, balance: f64) {
        self.write_line(&result_line(description, balance));
    }

    /// Appends every hand held by `players`.
    pub fn detailed_state(&mut self, players: &[Player]) {
        if !self.is_open() {
            return;
        }
        self.write_line("Detailed game state: ");
        for (seat, player) in players.iter().enumerate() {
            for (index, hand) in player.hands().iter().enumerate() {
                self.write_line(&hand_line(seat + 1, index + 1, hand));
            }
        }
        self.write_line(SEPARATOR);
    }
}
