//! Table state types.

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Between rounds.
    Idle,
    /// Accepting bets for the next round.
    Betting,
    /// Waiting for player actions.
    PlayerTurn,
    /// House plays out its hand.
    HouseTurn,
    /// All hands are finished and can be settled.
    RoundOver,
    /// The round has been settled.
    Settled,
}

/// Represents the current turn position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnPosition {
    /// Index into the seats.
    pub seat: usize,
    /// Index into the seat's hands (1 after a split).
    pub hand: usize,
}

impl TurnPosition {
    /// The first hand of the first seat.
    pub const START: Self = Self { seat: 0, hand: 0 };
}
