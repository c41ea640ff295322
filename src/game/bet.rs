use tracing::debug;

use crate::error::{BetError, DealError};
use crate::hand::Hand;

use super::{GameState, Table, TurnPosition};

impl Table {
    /// Returns the largest bet `seat` may place right now.
    ///
    /// The table minimum stays reserved for every other seat that has not
    /// bet yet, so an early seat cannot leave a later one unable to play.
    /// A bet this seat already placed counts as available again.
    #[must_use]
    pub fn max_bet(&self, seat: usize) -> f64 {
        let previous = self.bet(seat).unwrap_or(0.0);
        let waiting = self
            .bets
            .iter()
            .enumerate()
            .filter(|&(other, bet)| other != seat && bet.is_none())
            .count();

        #[expect(clippy::cast_precision_loss, reason = "seat counts are tiny")]
        let reserved = self.options.min_bet * waiting as f64;

        self.ledger.balance() + previous - reserved
    }

    /// Places a bet for the specified seat, taking it from the balance.
    ///
    /// Betting again for the same seat replaces the earlier stake.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not taking bets, the seat cannot be
    /// found, the bet is below the table minimum, or it is above
    /// [`max_bet`](Self::max_bet).
    pub fn place_bet(&mut self, seat: usize, amount: f64) -> Result<(), BetError> {
        if self.state != GameState::Betting {
            return Err(BetError::InvalidState);
        }

        let previous = self
            .bets
            .get(seat)
            .copied()
            .ok_or(BetError::SeatNotFound)?;

        if amount < self.options.min_bet {
            return Err(BetError::BelowMinimum(self.options.min_bet));
        }

        if amount > self.max_bet(seat) {
            return Err(BetError::InsufficientFunds);
        }

        if let Some(previous) = previous {
            self.ledger.credit(previous);
        }
        self.ledger.debit(amount);

        self.bets[seat] = Some(amount);
        debug!(seat, amount, balance = self.ledger.balance(), "bet placed");

        Ok(())
    }

    /// Deals two cards to every seat in order, then two to the house.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not taking bets, a seat has not bet,
    /// or the shoe fails to supply a card.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Betting {
            return Err(DealError::InvalidState);
        }

        if let Some(seat) = self.bets.iter().position(Option::is_none) {
            return Err(DealError::MissingBet(seat));
        }

        for (player, bet) in self.seats.iter_mut().zip(&self.bets) {
            player.clear();
            let Some(hand) = player.hand_mut(0) else {
                continue;
            };
            hand.set_stake(bet.unwrap_or_default());
            for _ in 0..2 {
                hand.add_card(self.shoe.draw()?);
            }
        }

        let mut house = Hand::new();
        for _ in 0..2 {
            house.add_card(self.shoe.draw()?);
        }
        self.house = house;

        debug!(
            seats = self.seats.len(),
            cards_drawn = self.shoe.cards_drawn(),
            "initial cards dealt"
        );

        self.current_turn = TurnPosition::START;
        self.state = GameState::PlayerTurn;
        self.skip_finished_hands();

        Ok(())
    }
}
