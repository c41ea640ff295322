use alloc::vec::Vec;

use tracing::{debug, info};

use crate::card::Card;
use crate::decision::{Action, house_action};
use crate::error::ShowdownError;
use crate::result::{HandResult, RoundResult, SeatResult, resolve};

use super::{GameState, Table};

impl Table {
    /// House plays its hand: draws while below `house_stands_at`.
    ///
    /// Returns the cards drawn by the house.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in the house turn or the shoe
    /// fails while the house must draw.
    pub fn house_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != GameState::HouseTurn {
            return Err(ShowdownError::InvalidState);
        }

        let mut drawn_cards = Vec::new();

        while house_action(self.house.total(), self.options.house_stands_at) == Action::Hit {
            let card = self.shoe.draw()?;
            self.house.add_card(card);
            drawn_cards.push(card);
        }

        debug!(
            drawn = drawn_cards.len(),
            total = self.house.total(),
            "house stands"
        );

        self.state = GameState::RoundOver;

        Ok(drawn_cards)
    }

    /// Settles every hand against the house and updates the ledger.
    ///
    /// Hands are settled seat by seat, first hand first; each result carries
    /// the balance right after its payout.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in round-over state.
    pub fn showdown(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::RoundOver {
            return Err(ShowdownError::InvalidState);
        }

        let house_total = self.house.total();
        let tie_rule = self.options.tie_rule;
        let mut seat_results = Vec::with_capacity(self.seats.len());

        for (seat, player) in self.seats.iter().enumerate() {
            let mut hand_results = Vec::with_capacity(player.number_of_hands());
            let mut total_payout = 0.0;
            let mut total_bet = 0.0;

            for (hand_index, hand) in player.hands().iter().enumerate() {
                let bet = hand.stake();
                let resolution = resolve(hand.total(), house_total, bet, tie_rule);

                self.ledger.credit(resolution.payout);
                self.ledger.record(resolution.outcome);
                total_payout += resolution.payout;
                total_bet += bet;

                info!(
                    seat,
                    hand = hand_index,
                    player_total = hand.total(),
                    house_total,
                    outcome = ?resolution.outcome,
                    payout = resolution.payout,
                    "hand settled"
                );

                hand_results.push(HandResult {
                    hand_index,
                    resolution,
                    bet,
                    player_total: hand.total(),
                    house_total,
                    balance: self.ledger.balance(),
                });
            }

            seat_results.push(SeatResult {
                seat,
                hands: hand_results,
                total_payout,
                net: total_payout - total_bet,
            });
        }

        self.state = GameState::Settled;

        Ok(RoundResult {
            seats: seat_results,
            house_total,
            house_bust: self.house.is_bust(),
        })
    }
}
