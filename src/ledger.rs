//! Balance, outcome history and win/loss statistics.

extern crate alloc;

use alloc::vec::Vec;

use crate::result::Outcome;

/// A fixed-capacity record of hand outcomes.
///
/// Outcomes past the capacity are counted by the statistics but not kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: Vec<Outcome>,
    capacity: usize,
}

impl History {
    /// Creates an empty history holding at most `capacity` entries.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Records an outcome. Returns `false` if the history is full.
    pub fn record(&mut self, outcome: Outcome) -> bool {
        if self.entries.len() >= self.capacity {
            return false;
        }
        self.entries.push(outcome);
        true
    }

    /// Returns the recorded outcomes, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[Outcome] {
        &self.entries
    }

    /// Returns the recorded outcome codes, oldest first.
    pub fn codes(&self) -> impl Iterator<Item = i8> + '_ {
        self.entries.iter().map(|outcome| outcome.code())
    }

    /// Returns the number of recorded outcomes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of entries.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Win/loss/tie counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    /// Hands resolved.
    pub total: u32,
    /// Hands won by the player.
    pub player_wins: u32,
    /// Hands won by the house.
    pub house_wins: u32,
    /// Hands tied.
    pub ties: u32,
}

impl Statistics {
    /// Counts one outcome.
    pub const fn record(&mut self, outcome: Outcome) {
        self.total += 1;
        match outcome {
            Outcome::PlayerWin => self.player_wins += 1,
            Outcome::HouseWin => self.house_wins += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    /// Returns `count` as a percentage of all hands (0 when none).
    #[must_use]
    pub fn percentage(&self, count: u32) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(count) / f64::from(self.total) * 100.0
    }
}

/// The session's money and record keeping.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    balance: f64,
    initial_balance: f64,
    history: History,
    statistics: Statistics,
}

impl Ledger {
    /// Creates a ledger with a starting balance and history capacity.
    #[must_use]
    pub fn new(initial_balance: f64, history_capacity: usize) -> Self {
        Self {
            balance: initial_balance,
            initial_balance,
            history: History::new(history_capacity),
            statistics: Statistics::default(),
        }
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> f64 {
        self.balance
    }

    /// Returns the starting balance.
    #[must_use]
    pub const fn initial_balance(&self) -> f64 {
        self.initial_balance
    }

    /// Returns the balance change since the start of the session.
    #[must_use]
    pub fn net(&self) -> f64 {
        self.balance - self.initial_balance
    }

    /// Returns whether `amount` can be taken from the balance.
    #[must_use]
    pub fn can_cover(&self, amount: f64) -> bool {
        amount <= self.balance
    }

    /// Takes `amount` from the balance. Returns `false` without changing the
    /// balance if it does not cover the amount.
    pub fn debit(&mut self, amount: f64) -> bool {
        if !self.can_cover(amount) {
            return false;
        }
        self.balance -= amount;
        true
    }

    /// Adds `amount` to the balance.
    pub fn credit(&mut self, amount: f64) {
        self.balance += amount;
    }

    /// Records a settled hand in the history and statistics.
    pub fn record(&mut self, outcome: Outcome) {
        self.history.record(outcome);
        self.statistics.record(outcome);
    }

    /// Returns the outcome history.
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Returns the statistics.
    #[must_use]
    pub const fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_is_bounded() {
        let mut ledger = Ledger::new(100.0, 100);
        for n in 1..=100 {
            ledger.record(Outcome::HouseWin);
            assert_eq!(ledger.history().len(), n);
        }
        ledger.record(Outcome::PlayerWin);
        ledger.record(Outcome::Tie);

        assert_eq!(ledger.history().len(), 100);
        assert!(ledger.history().codes().all(|code| code == -1));
        assert_eq!(ledger.statistics().total, 102);
        assert_eq!(ledger.statistics().player_wins, 1);
        assert_eq!(ledger.statistics().ties, 1);
    }

    #[test]
    fn debit_and_credit() {
        let mut ledger = Ledger::new(100.0, 10);
        assert!(ledger.debit(30.0));
        assert!(!ledger.debit(80.0));
        assert!((ledger.balance() - 70.0).abs() < f64::EPSILON);

        ledger.credit(60.0);
        assert!((ledger.balance() - 130.0).abs() < f64::EPSILON);
        assert!((ledger.net() - 30.0).abs() < f64::EPSILON);
        assert!((ledger.initial_balance() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn percentages() {
        let mut stats = Statistics::default();
        assert!(stats.percentage(stats.player_wins).abs() < f64::EPSILON);

        stats.record(Outcome::PlayerWin);
        stats.record(Outcome::HouseWin);
        stats.record(Outcome::HouseWin);
        stats.record(Outcome::Tie);
        assert!((stats.percentage(stats.house_wins) - 50.0).abs() < f64::EPSILON);
        assert!((stats.percentage(stats.ties) - 25.0).abs() < f64::EPSILON);
    }
}
