//! Error types for table operations.

use thiserror::Error;

/// Errors that can occur when drawing from the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShoeError {
    /// Every rank has zero cards remaining.
    #[error("the shoe is exhausted")]
    Exhausted,
    /// A stacked card's rank has no copies left.
    #[error("no copies of rank {0} remain in the shoe")]
    RankExhausted(u8),
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BetError {
    /// Seat not found.
    #[error("seat not found")]
    SeatNotFound,
    /// Bet is below the table minimum.
    #[error("bet is below the table minimum of ${0:.2}")]
    BelowMinimum(f64),
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// A seat has not placed a bet.
    #[error("seat {0} has not placed a bet")]
    MissingBet(usize),
    /// The shoe could not supply a card.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Not this hand's turn.
    #[error("not this hand's turn")]
    NotYourTurn,
    /// Seat not found.
    #[error("seat not found")]
    SeatNotFound,
    /// Hand not found.
    #[error("hand not found")]
    HandNotFound,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// Cannot split this hand.
    #[error("cannot split this hand")]
    CannotSplit,
    /// Insufficient funds for this action.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
    /// The shoe could not supply a card.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}

/// Errors that can occur during the house turn and showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
    /// The shoe could not supply a card.
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}
