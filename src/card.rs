//! Card ranks and shoe composition constants.

extern crate alloc;

use alloc::string::{String, ToString};

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of decks in the shoe.
pub const SHOE_DECKS: usize = 7;

/// Number of distinct ranks.
pub const RANK_COUNT: usize = 13;

/// Copies of each rank in a full shoe (4 suits per deck).
pub const COPIES_PER_RANK: u8 = (SHOE_DECKS * 4) as u8;

/// Total number of cards in a full shoe.
pub const SHOE_SIZE: usize = DECK_SIZE * SHOE_DECKS;

/// A playing card. Suits are not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but score as zero and render as their digits.
    #[must_use]
    pub const fn new(rank: u8) -> Self {
        Self { rank }
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        self.rank == 1
    }

    /// Returns the scoring value with aces counted high.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self.rank {
            1 => 11,
            2..=10 => self.rank,
            11..=13 => 10,
            _ => 0,
        }
    }

    /// Returns the glyph printed on the card face.
    #[must_use]
    pub fn glyph(self) -> String {
        match self.rank {
            1 => "A".to_string(),
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            rank => rank.to_string(),
        }
    }
}

impl From<u8> for Card {
    fn from(rank: u8) -> Self {
        Self::new(rank)
    }
}

/// All ranks in ascending order.
pub const RANKS: [u8; RANK_COUNT] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13];
