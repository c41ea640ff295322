//! Table configuration options.

/// How a hand that ties the house is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TieRule {
    /// Ties go to the dealer: the stake is lost.
    #[default]
    HouseWins,
    /// Ties push: the stake is returned.
    Push,
}

/// Conditions under which doubling down is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DoubleRule {
    /// Any two-card hand that has not been doubled.
    #[default]
    AnyTwoCards,
    /// Two-card hands totalling 9 to 11 without an ace, or 16 to 18 with an
    /// ace counted as 11.
    Restricted,
}

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use termjack::{DoubleRule, TableOptions, TieRule};
///
/// let options = TableOptions::default()
///     .with_tie_rule(TieRule::Push)
///     .with_double_rule(DoubleRule::Restricted)
///     .with_initial_balance(250.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableOptions {
    /// Tie settlement rule.
    pub tie_rule: TieRule,
    /// Double down conditions.
    pub double_rule: DoubleRule,
    /// Smallest accepted bet.
    pub min_bet: f64,
    /// Starting balance of the ledger.
    pub initial_balance: f64,
    /// Maximum number of seats.
    pub max_players: usize,
    /// Number of outcomes kept in the history.
    pub history_capacity: usize,
    /// Total at which the house stops drawing.
    pub house_stands_at: u8,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            tie_rule: TieRule::HouseWins,
            double_rule: DoubleRule::AnyTwoCards,
            min_bet: 5.0,
            initial_balance: 100.0,
            max_players: 3,
            history_capacity: 100,
            house_stands_at: 17,
        }
    }
}

impl TableOptions {
    /// Sets the tie settlement rule.
    ///
    /// # Example
    ///
    /// ```
    /// use termjack::{TableOptions, TieRule};
    ///
    /// let options = TableOptions::default().with_tie_rule(TieRule::Push);
    /// assert_eq!(options.tie_rule, TieRule::Push);
    /// ```
    #[must_use]
    pub const fn with_tie_rule(mut self, rule: TieRule) -> Self {
        self.tie_rule = rule;
        self
    }

    /// Sets the double down conditions.
    ///
    /// # Example
    ///
    /// ```
    /// use termjack::{DoubleRule, TableOptions};
    ///
    /// let options = TableOptions::default().with_double_rule(DoubleRule::Restricted);
    /// assert_eq!(options.double_rule, DoubleRule::Restricted);
    /// ```
    #[must_use]
    pub const fn with_double_rule(mut self, rule: DoubleRule) -> Self {
        self.double_rule = rule;
        self
    }

    /// Sets the smallest accepted bet.
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: f64) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use termjack::TableOptions;
    ///
    /// let options = TableOptions::default().with_initial_balance(500.0);
    /// assert_eq!(options.initial_balance, 500.0);
    /// ```
    #[must_use]
    pub const fn with_initial_balance(mut self, balance: f64) -> Self {
        self.initial_balance = balance;
        self
    }

    /// Sets the maximum number of seats.
    #[must_use]
    pub const fn with_max_players(mut self, max_players: usize) -> Self {
        self.max_players = max_players;
        self
    }

    /// Sets the number of outcomes kept in the history.
    #[must_use]
    pub const fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Sets the total at which the house stops drawing.
    #[must_use]
    pub const fn with_house_stands_at(mut self, total: u8) -> Self {
        self.house_stands_at = total;
        self
    }

    /// Returns the seat count to use for a requested number of players.
    ///
    /// Requests outside `1..=max_players` fall back to a single seat.
    ///
    /// ```
    /// use termjack::TableOptions;
    ///
    /// let options = TableOptions::default();
    /// assert_eq!(options.seat_count(3), 3);
    /// assert_eq!(options.seat_count(4), 1);
    /// assert_eq!(options.seat_count(0), 1);
    /// ```
    #[must_use]
    pub const fn seat_count(&self, requested: usize) -> usize {
        if requested >= 1 && requested <= self.max_players {
            requested
        } else {
            1
        }
    }
}
