//! Hands, scoring and the player that owns them.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ActionError;
use crate::multiset::OrderedMultiset;
use crate::options::DoubleRule;

/// Highest total that does not bust.
pub const TWENTY_ONE: u8 = 21;

fn evaluate_cards<'a>(cards: impl IntoIterator<Item = &'a Card>) -> (u8, bool) {
    let mut value: u32 = 0;
    let mut aces: u32 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value += u32::from(card.value());
    }

    while value > u32::from(TWENTY_ONE) && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= u32::from(TWENTY_ONE);
    (u8::try_from(value).unwrap_or(u8::MAX), is_soft)
}

/// Scores a collection of cards.
///
/// Aces count as 11 and are dropped to 1 one at a time while the total is
/// over 21, so the result is the best total not over 21 when one exists and
/// the smallest bust total otherwise.
///
/// ```
/// use termjack::{Card, hand::score};
///
/// let cards = [1, 1, 1, 9].map(Card::new);
/// assert_eq!(score(&cards), 12);
/// ```
#[must_use]
pub fn score<'a>(cards: impl IntoIterator<Item = &'a Card>) -> u8 {
    evaluate_cards(cards).0
}

/// A single hand of cards, kept in ascending rank order.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: OrderedMultiset<Card>,
    /// Cached score of `cards`.
    total: u8,
    soft: bool,
    doubled: bool,
    /// Amount staked on this hand.
    stake: f64,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: OrderedMultiset::new(),
            total: 0,
            soft: false,
            doubled: false,
            stake: 0.0,
        }
    }

    /// Adds a card to the hand and rescores it.
    pub fn add_card(&mut self, card: Card) {
        self.cards.insert(card);
        (self.total, self.soft) = evaluate_cards(&self.cards);
    }

    /// Returns the cards in ascending rank order.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.cards.to_vec()
    }

    /// Returns an iterator over the cards in ascending rank order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Returns the hand total.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.total
    }

    /// Returns whether an ace is currently counted as 11.
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        self.soft
    }

    /// Returns whether the hand totals exactly 21.
    ///
    /// Any number of cards qualifies, not only a two-card natural.
    #[must_use]
    pub const fn is_blackjack(&self) -> bool {
        self.total == TWENTY_ONE
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub const fn is_bust(&self) -> bool {
        self.total > TWENTY_ONE
    }

    /// Returns the number of cards.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the hand contains an ace.
    #[must_use]
    pub fn has_ace(&self) -> bool {
        self.cards.iter().any(|card| card.is_ace())
    }

    /// Returns the total with every ace counted as 11.
    #[must_use]
    pub fn raw_total(&self) -> u8 {
        self.cards
            .iter()
            .fold(0_u8, |sum, card| sum.saturating_add(card.value()))
    }

    /// Returns whether the hand is exactly two cards of the same rank.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        let mut iter = self.cards.iter();
        match (iter.next(), iter.next(), iter.next()) {
            (Some(first), Some(second), None) => first == second,
            _ => false,
        }
    }

    /// Returns whether the hand has been doubled down.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Returns whether the hand may be doubled down under `rule`.
    #[must_use]
    pub fn can_double(&self, rule: DoubleRule) -> bool {
        if self.len() != 2 || self.doubled {
            return false;
        }

        match rule {
            DoubleRule::AnyTwoCards => true,
            DoubleRule::Restricted => {
                let raw = self.raw_total();
                if self.has_ace() {
                    (16..=18).contains(&raw)
                } else {
                    (9..=11).contains(&raw)
                }
            }
        }
    }

    /// Returns the amount staked on this hand.
    #[must_use]
    pub const fn stake(&self) -> f64 {
        self.stake
    }

    /// Sets the amount staked on this hand.
    pub const fn set_stake(&mut self, stake: f64) {
        self.stake = stake;
    }

    /// Doubles the stake and marks the hand as doubled.
    pub const fn double_stake(&mut self) {
        self.stake *= 2.0;
        self.doubled = true;
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.total = 0;
        self.soft = false;
        self.doubled = false;
        self.stake = 0.0;
    }
}

/// Maximum number of hands a player can hold (one split).
pub const MAX_HANDS: usize = 2;

/// A seat at the table. Owns one hand, or two after a split.
#[derive(Debug, Clone, Default)]
pub struct Player {
    hands: [Hand; MAX_HANDS],
    number_of_hands: usize,
}

impl Player {
    /// Creates a player with one empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hands: [Hand::new(), Hand::new()],
            number_of_hands: 1,
        }
    }

    /// Returns the number of hands in play (1 or 2).
    #[must_use]
    pub const fn number_of_hands(&self) -> usize {
        self.number_of_hands
    }

    /// Returns the hands in play.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands[..self.number_of_hands]
    }

    /// Returns the hand at `index` if it is in play.
    #[must_use]
    pub fn hand(&self, index: usize) -> Option<&Hand> {
        self.hands().get(index)
    }

    /// Returns the hand at `index` mutably if it is in play.
    pub fn hand_mut(&mut self, index: usize) -> Option<&mut Hand> {
        self.hands[..self.number_of_hands].get_mut(index)
    }

    /// Returns whether the hand at `index` can be split.
    #[must_use]
    pub fn can_split(&self, index: usize) -> bool {
        self.number_of_hands == 1 && self.hand(index).is_some_and(Hand::is_pair)
    }

    /// Splits the pair in the first hand into two single-card hands, each
    /// carrying the original stake.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::CannotSplit`] unless the player has one hand
    /// holding a pair.
    pub fn split(&mut self) -> Result<(), ActionError> {
        if !self.can_split(0) {
            return Err(ActionError::CannotSplit);
        }

        let cards = self.hands[0].cards();
        let stake = self.hands[0].stake();
        let [first, second] = &mut self.hands;

        first.clear();
        second.clear();
        first.add_card(cards[0]);
        second.add_card(cards[1]);
        first.set_stake(stake);
        second.set_stake(stake);
        self.number_of_hands = MAX_HANDS;

        Ok(())
    }

    /// Clears both hands and returns to a single hand.
    pub fn clear(&mut self) {
        for hand in &mut self.hands {
            hand.clear();
        }
        self.number_of_hands = 1;
    }
}
