use alloc::vec::Vec;

use tracing::{debug, info};

use crate::card::Card;
use crate::decision::{Action, player_actions};
use crate::error::ActionError;
use crate::hand::Hand;

use super::{GameState, Table, TurnPosition};

impl Table {
    fn ensure_turn(&self, seat: usize, hand_index: usize) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let player = self.seats.get(seat).ok_or(ActionError::SeatNotFound)?;
        if player.hand(hand_index).is_none() {
            return Err(ActionError::HandNotFound);
        }

        if self.current_turn != (TurnPosition { seat, hand: hand_index }) {
            return Err(ActionError::NotYourTurn);
        }

        Ok(())
    }

    fn hand_mut(&mut self, seat: usize, hand_index: usize) -> Result<&mut Hand, ActionError> {
        self.seats
            .get_mut(seat)
            .ok_or(ActionError::SeatNotFound)?
            .hand_mut(hand_index)
            .ok_or(ActionError::HandNotFound)
    }

    /// Returns the legal actions for the hand whose turn it is, in menu
    /// order. Empty outside the player turn.
    #[must_use]
    pub fn available_actions(&self) -> Vec<Action> {
        let Some(hand) = self.current_hand() else {
            return Vec::new();
        };
        let turn = self.current_turn;
        let can_split = self
            .seats
            .get(turn.seat)
            .is_some_and(|player| player.can_split(turn.hand));

        player_actions(hand.can_double(self.options.double_rule), can_split)
    }

    /// Applies `action` to the hand whose turn it is.
    ///
    /// Returns the card drawn by a hit or double down.
    ///
    /// # Errors
    ///
    /// Returns the error of the underlying action.
    pub fn play(&mut self, action: Action) -> Result<Option<Card>, ActionError> {
        let TurnPosition { seat, hand } = self.current_turn;
        match action {
            Action::Hit => self.hit(seat, hand).map(Some),
            Action::Stand => self.stand(seat, hand).map(|()| None),
            Action::Double => self.double_down(seat, hand).map(Some),
            Action::Split => self.split(seat, hand).map(|()| None),
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// The turn moves on when the hand reaches 21 or busts.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in the player turn, the seat or
    /// hand cannot be found, it is not this hand's turn, or the shoe fails.
    pub fn hit(&mut self, seat: usize, hand_index: usize) -> Result<Card, ActionError> {
        self.ensure_turn(seat, hand_index)?;

        let card = self.shoe.draw()?;
        let hand = self.hand_mut(seat, hand_index)?;
        hand.add_card(card);
        let total = hand.total();
        let finished = hand.is_blackjack() || hand.is_bust();

        debug!(seat, hand = hand_index, rank = card.rank, total, "hit");

        if finished {
            self.advance_turn();
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in the player turn, the seat or
    /// hand cannot be found, or it is not this hand's turn.
    pub fn stand(&mut self, seat: usize, hand_index: usize) -> Result<(), ActionError> {
        self.ensure_turn(seat, hand_index)?;
        debug!(seat, hand = hand_index, "stand");
        self.advance_turn();
        Ok(())
    }

    /// Player action: Double down (double the stake, receive one card, then
    /// stand).
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in the player turn, the seat or
    /// hand cannot be found, it is not this hand's turn, the hand is not
    /// eligible, the balance does not cover the extra stake, or the shoe
    /// fails.
    pub fn double_down(&mut self, seat: usize, hand_index: usize) -> Result<Card, ActionError> {
        self.ensure_turn(seat, hand_index)?;

        let rule = self.options.double_rule;
        let hand = self.hand_mut(seat, hand_index)?;
        if !hand.can_double(rule) {
            return Err(ActionError::CannotDouble);
        }
        let stake = hand.stake();

        if !self.ledger.can_cover(stake) {
            return Err(ActionError::InsufficientFunds);
        }

        let card = self.shoe.draw()?;
        self.ledger.debit(stake);

        let hand = self.hand_mut(seat, hand_index)?;
        hand.double_stake();
        hand.add_card(card);

        info!(
            seat,
            hand = hand_index,
            stake = hand.stake(),
            total = hand.total(),
            "doubled down"
        );

        self.advance_turn();

        Ok(card)
    }

    /// Player action: Split (split a pair into two hands).
    ///
    /// The second hand carries a matching stake. Both hands stay open and
    /// are played in order, starting with the first.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is not in the player turn, the seat or
    /// hand cannot be found, it is not this hand's turn, the hand cannot be
    /// split, or the balance does not cover the second stake.
    pub fn split(&mut self, seat: usize, hand_index: usize) -> Result<(), ActionError> {
        self.ensure_turn(seat, hand_index)?;

        let player = self.seats.get(seat).ok_or(ActionError::SeatNotFound)?;
        if !player.can_split(hand_index) {
            return Err(ActionError::CannotSplit);
        }

        let stake = player.hand(hand_index).map_or(0.0, Hand::stake);
        if !self.ledger.debit(stake) {
            return Err(ActionError::InsufficientFunds);
        }

        self.seats
            .get_mut(seat)
            .ok_or(ActionError::SeatNotFound)?
            .split()?;

        info!(seat, stake, "split pair into two hands");
        self.skip_finished_hands();

        Ok(())
    }
}
