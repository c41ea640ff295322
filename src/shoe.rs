//! The seven-deck shoe.
//!
//! The shoe tracks how many copies of each rank remain rather than holding a
//! dealing order. A draw picks a random slot of the full 364-card layout and
//! rejects it while that slot's rank has no copies left, so selection is
//! weighted by what is left and never returns an exhausted rank.
//! Once [`RESHUFFLE_THRESHOLD`] cards have been drawn the next draw resets the
//! shoe to its full composition first.

extern crate alloc;

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::card::{COPIES_PER_RANK, Card, DECK_SIZE, RANK_COUNT, RANKS, SHOE_DECKS, SHOE_SIZE};
use crate::error::ShoeError;

/// Number of draws after which the shoe is reshuffled (75% penetration).
pub const RESHUFFLE_THRESHOLD: usize = DECK_SIZE * SHOE_DECKS * 3 / 4;

/// A finite multi-deck shoe with usage accounting.
#[derive(Debug, Clone)]
pub struct Shoe {
    /// Remaining copies per rank, indexed by `rank - 1`.
    counts: [u8; RANK_COUNT],
    /// Ranks drawn at least once since the last reset.
    used: BTreeSet<u8>,
    /// Cards taken out of play and waiting for the next reshuffle.
    returned: Vec<Card>,
    /// The full layout draws are sampled from.
    slots: Vec<Card>,
    /// Cards placed on top of the shoe; the last one is drawn first.
    stacked: Vec<Card>,
    reshuffles: usize,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a full, shuffled shoe from the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut shoe = Self {
            counts: [COPIES_PER_RANK; RANK_COUNT],
            used: BTreeSet::new(),
            returned: Vec::new(),
            slots: Vec::with_capacity(SHOE_SIZE),
            stacked: Vec::new(),
            reshuffles: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        shoe.reset();
        shoe
    }

    /// Creates a shoe seeded from the wall clock.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn from_clock() -> Self {
        Self::new(clock_seed())
    }

    fn reset(&mut self) {
        self.counts = [COPIES_PER_RANK; RANK_COUNT];
        self.used.clear();
        self.returned.clear();

        self.slots.clear();
        for rank in RANKS {
            for _ in 0..COPIES_PER_RANK {
                self.slots.push(Card::new(rank));
            }
        }
        self.slots.shuffle(&mut self.rng);
    }

    fn count_mut(&mut self, rank: u8) -> Option<&mut u8> {
        let index = usize::from(rank).checked_sub(1)?;
        self.counts.get_mut(index)
    }

    fn take(&mut self, card: Card) -> Result<Card, ShoeError> {
        let count = self
            .count_mut(card.rank)
            .filter(|count| **count > 0)
            .ok_or(ShoeError::RankExhausted(card.rank))?;
        *count -= 1;
        self.used.insert(card.rank);
        Ok(card)
    }

    /// Draws a card, reshuffling first when the penetration threshold has
    /// been reached.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeError::Exhausted`] if no rank has copies left, or
    /// [`ShoeError::RankExhausted`] if a stacked card's rank is used up.
    pub fn draw(&mut self) -> Result<Card, ShoeError> {
        if self.needs_reshuffle() {
            self.reshuffle();
        }

        if let Some(card) = self.stacked.pop() {
            return self.take(card);
        }

        if self.cards_remaining() == 0 {
            return Err(ShoeError::Exhausted);
        }

        loop {
            let slot = self.rng.random_range(0..self.slots.len());
            let card = self.slots[slot];
            if self.remaining(card.rank) > 0 {
                return self.take(card);
            }
        }
    }

    /// Returns whether the next draw will reshuffle the shoe.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        self.cards_drawn() >= RESHUFFLE_THRESHOLD
    }

    /// Takes a card out of play. It is folded back in by the next reshuffle.
    pub fn return_card(&mut self, card: Card) {
        self.returned.push(card);
    }

    /// Folds returned cards back in and resets the shoe to its full
    /// composition.
    pub fn reshuffle(&mut self) {
        let drawn = self.cards_drawn();
        let pending = self.returned.len();

        while let Some(card) = self.returned.pop() {
            if let Some(count) = self.count_mut(card.rank) {
                *count = count.saturating_add(1).min(COPIES_PER_RANK);
            }
        }
        self.reset();
        self.reshuffles += 1;

        info!(drawn, pending, reshuffles = self.reshuffles, "reshuffled shoe");
    }

    /// Places cards on top of the shoe. They are drawn first, in the given
    /// order, with the usual count accounting.
    pub fn stack(&mut self, cards: &[Card]) {
        self.stacked.extend(cards.iter().rev().copied());
        debug!(count = cards.len(), "stacked cards on the shoe");
    }

    /// Returns the remaining copies of `rank` (0 for an invalid rank).
    #[must_use]
    pub fn remaining(&self, rank: u8) -> u8 {
        usize::from(rank)
            .checked_sub(1)
            .and_then(|index| self.counts.get(index))
            .copied()
            .unwrap_or(0)
    }

    /// Returns `(rank, remaining)` pairs in ascending rank order.
    pub fn remaining_by_rank(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        RANKS.iter().copied().zip(self.counts.iter().copied())
    }

    /// Returns the number of cards left in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.counts.iter().map(|&count| usize::from(count)).sum()
    }

    /// Returns the number of cards drawn since the last reset.
    #[must_use]
    pub fn cards_drawn(&self) -> usize {
        self.counts
            .iter()
            .map(|&count| usize::from(COPIES_PER_RANK - count))
            .sum()
    }

    /// Returns the ranks drawn at least once since the last reset.
    pub fn used_ranks(&self) -> impl Iterator<Item = u8> + '_ {
        self.used.iter().copied()
    }

    /// Returns the number of distinct ranks drawn since the last reset.
    #[must_use]
    pub fn unique_ranks_used(&self) -> usize {
        self.used.len()
    }

    /// Returns the cards waiting to be folded back in.
    #[must_use]
    pub fn pending_returns(&self) -> &[Card] {
        &self.returned
    }

    /// Returns how many times the shoe has been reshuffled.
    #[must_use]
    pub const fn reshuffles(&self) -> usize {
        self.reshuffles
    }
}

/// Derives a seed from the current wall-clock time.
#[cfg(feature = "std")]
#[must_use]
pub fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64)
}
