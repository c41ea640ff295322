//! Table engine and round flow.

use alloc::vec;
use alloc::vec::Vec;

use tracing::debug;

use crate::hand::{Hand, Player};
use crate::ledger::Ledger;
use crate::options::TableOptions;
use crate::shoe::Shoe;

mod actions;
mod bet;
mod house;
pub mod state;

pub use state::{GameState, TurnPosition};

/// A table: the shoe, the seats, the house hand and the ledger for one
/// session.
///
/// Hands are played strictly in order, seat by seat and hand by hand, so the
/// [`TurnPosition`] alone says which hands are finished.
#[derive(Debug, Clone)]
pub struct Table {
    /// The shoe. Exposed so cards can be stacked for scripted rounds.
    pub shoe: Shoe,
    /// Table options.
    pub options: TableOptions,
    state: GameState,
    seats: Vec<Player>,
    /// Stakes placed this round, per seat.
    bets: Vec<Option<f64>>,
    /// The house hand for the current round.
    house: Hand,
    ledger: Ledger,
    current_turn: TurnPosition,
}

impl Table {
    /// Creates a table with the given seed.
    ///
    /// A `players` count outside `1..=max_players` seats a single player.
    ///
    /// # Example
    ///
    /// ```
    /// use termjack::{Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default(), 2, 42);
    /// assert_eq!(table.seat_count(), 2);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, players: usize, seed: u64) -> Self {
        Self::with_shoe(options, players, Shoe::new(seed))
    }

    /// Creates a table whose shoe is seeded from the wall clock.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn from_clock(options: TableOptions, players: usize) -> Self {
        Self::with_shoe(options, players, Shoe::from_clock())
    }

    fn with_shoe(options: TableOptions, players: usize, shoe: Shoe) -> Self {
        let seat_count = options.seat_count(players);
        let ledger = Ledger::new(options.initial_balance, options.history_capacity);

        Self {
            shoe,
            options,
            state: GameState::Idle,
            seats: vec![Player::new(); seat_count],
            bets: vec![None; seat_count],
            house: Hand::new(),
            ledger,
            current_turn: TurnPosition::START,
        }
    }

    /// Returns the current round phase.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the current turn position.
    #[must_use]
    pub const fn current_turn(&self) -> TurnPosition {
        self.current_turn
    }

    /// Returns the number of seats.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    /// Returns every seat.
    #[must_use]
    pub fn seats(&self) -> &[Player] {
        &self.seats
    }

    /// Returns the seat at `index`.
    #[must_use]
    pub fn seat(&self, index: usize) -> Option<&Player> {
        self.seats.get(index)
    }

    /// Returns the stake placed by `seat` this round.
    #[must_use]
    pub fn bet(&self, seat: usize) -> Option<f64> {
        self.bets.get(seat).copied().flatten()
    }

    /// Returns the house hand.
    #[must_use]
    pub const fn house(&self) -> &Hand {
        &self.house
    }

    /// Returns the ledger.
    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Returns the hand whose turn it is.
    #[must_use]
    pub fn current_hand(&self) -> Option<&Hand> {
        if self.state != GameState::PlayerTurn {
            return None;
        }
        let turn = self.current_turn;
        self.seats.get(turn.seat)?.hand(turn.hand)
    }

    /// Moves the turn past the current hand and any hand after it that can
    /// no longer act (21 or bust), handing over to the house when none is
    /// left.
    fn advance_turn(&mut self) {
        self.next_hand();
        self.skip_finished_hands();
    }

    fn next_hand(&mut self) {
        let turn = self.current_turn;
        let hands = self.seats.get(turn.seat).map_or(0, Player::number_of_hands);

        self.current_turn = if turn.hand + 1 < hands {
            TurnPosition {
                seat: turn.seat,
                hand: turn.hand + 1,
            }
        } else {
            TurnPosition {
                seat: turn.seat + 1,
                hand: 0,
            }
        };

        if self.current_turn.seat >= self.seats.len() {
            debug!("all hands finished, house to play");
            self.state = GameState::HouseTurn;
        }
    }

    /// Skips hands that can no longer act (21 or bust).
    fn skip_finished_hands(&mut self) {
        while self
            .current_hand()
            .is_some_and(|hand| hand.is_blackjack() || hand.is_bust())
        {
            self.next_hand();
        }
    }

    /// Starts a new round: clears the previous one and opens betting.
    pub fn start_round(&mut self) {
        self.clear_round();
        self.state = GameState::Betting;
    }

    /// Clears all hands and bets, returning their cards to the shoe.
    ///
    /// Bets placed for a round that was never dealt are refunded. The house
    /// hand is discarded and the table goes back to [`GameState::Idle`].
    pub fn clear_round(&mut self) {
        if self.state == GameState::Betting {
            for bet in self.bets.iter().flatten() {
                self.ledger.credit(*bet);
            }
        }

        for player in &mut self.seats {
            for hand in player.hands() {
                for card in hand.iter() {
                    self.shoe.return_card(*card);
                }
            }
            player.clear();
        }
        for card in self.house.iter() {
            self.shoe.return_card(*card);
        }
        self.house = Hand::new();

        for bet in &mut self.bets {
            *bet = None;
        }
        self.current_turn = TurnPosition::START;
        self.state = GameState::Idle;
    }
}
