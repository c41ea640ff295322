//! Hand resolution and round result types.

extern crate alloc;

use alloc::vec::Vec;

use crate::hand::TWENTY_ONE;
use crate::options::TieRule;

/// Outcome of a single hand against the house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The player wins the hand.
    PlayerWin,
    /// The house wins the hand.
    HouseWin,
    /// The hand pushes.
    Tie,
}

impl Outcome {
    /// Returns the history code: +1 player win, -1 house win, 0 tie.
    #[must_use]
    pub const fn code(self) -> i8 {
        match self {
            Self::PlayerWin => 1,
            Self::HouseWin => -1,
            Self::Tie => 0,
        }
    }

    /// Returns the outcome for a history code.
    #[must_use]
    pub const fn from_code(code: i8) -> Self {
        match code {
            1.. => Self::PlayerWin,
            0 => Self::Tie,
            _ => Self::HouseWin,
        }
    }
}

/// How a hand was settled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// The outcome.
    pub outcome: Outcome,
    /// Amount credited back to the balance.
    pub payout: f64,
    /// Short description of why the hand was settled this way.
    pub description: &'static str,
}

/// Settles a finished hand against the house.
///
/// The stake was deducted when it was placed, so a lost hand pays nothing, a
/// won hand pays twice the stake and a pushed tie returns the stake.
///
/// ```
/// use termjack::{Outcome, TieRule, resolve};
///
/// let settled = resolve(20, 25, 10.0, TieRule::HouseWins);
/// assert_eq!(settled.outcome, Outcome::PlayerWin);
/// assert_eq!(settled.payout, 20.0);
/// ```
#[must_use]
pub fn resolve(player_total: u8, house_total: u8, bet: f64, tie_rule: TieRule) -> Resolution {
    let (outcome, payout, description) = if player_total > TWENTY_ONE {
        (Outcome::HouseWin, 0.0, "Player busts")
    } else if house_total > TWENTY_ONE {
        (Outcome::PlayerWin, bet * 2.0, "House busts, player wins")
    } else if player_total > house_total {
        (Outcome::PlayerWin, bet * 2.0, "Player wins")
    } else if player_total == house_total {
        match tie_rule {
            TieRule::HouseWins => (Outcome::HouseWin, 0.0, "Tie goes to dealer"),
            TieRule::Push => (Outcome::Tie, bet, "Tie, bet returned"),
        }
    } else {
        (Outcome::HouseWin, 0.0, "House wins")
    };

    Resolution {
        outcome,
        payout,
        description,
    }
}

/// Result for a single hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandResult {
    /// The hand index (1 for the second hand of a split).
    pub hand_index: usize,
    /// How the hand was settled.
    pub resolution: Resolution,
    /// The stake on this hand.
    pub bet: f64,
    /// The player's hand total.
    pub player_total: u8,
    /// The house's hand total.
    pub house_total: u8,
    /// Balance after the payout was credited.
    pub balance: f64,
}

/// Result for a single seat after showdown.
#[derive(Debug, Clone, PartialEq)]
pub struct SeatResult {
    /// The seat index.
    pub seat: usize,
    /// Results for each hand (two if split).
    pub hands: Vec<HandResult>,
    /// Total payout for all hands.
    pub total_payout: f64,
    /// Net result (positive = profit, negative = loss).
    pub net: f64,
}

/// Result of the entire round after showdown.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundResult {
    /// Results for each seat.
    pub seats: Vec<SeatResult>,
    /// The house's final total.
    pub house_total: u8,
    /// Whether the house busted.
    pub house_bust: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_table() {
        let settled = resolve(22, 18, 10.0, TieRule::HouseWins);
        assert_eq!(settled.outcome, Outcome::HouseWin);
        assert!(settled.payout.abs() < f64::EPSILON);

        // Player bust loses even when the house busts too.
        let settled = resolve(23, 25, 10.0, TieRule::HouseWins);
        assert_eq!(settled.outcome, Outcome::HouseWin);
        assert_eq!(settled.description, "Player busts");

        let settled = resolve(20, 25, 10.0, TieRule::HouseWins);
        assert_eq!(settled.outcome, Outcome::PlayerWin);
        assert!((settled.payout - 20.0).abs() < f64::EPSILON);

        let settled = resolve(19, 18, 10.0, TieRule::HouseWins);
        assert_eq!(settled.outcome, Outcome::PlayerWin);
        assert_eq!(settled.description, "Player wins");

        let settled = resolve(17, 20, 10.0, TieRule::HouseWins);
        assert_eq!(settled.outcome, Outcome::HouseWin);
        assert_eq!(settled.description, "House wins");
    }

    #[test]
    fn tie_rules() {
        let settled = resolve(19, 19, 10.0, TieRule::HouseWins);
        assert_eq!(settled.outcome, Outcome::HouseWin);
        assert!(settled.payout.abs() < f64::EPSILON);
        assert_eq!(settled.description, "Tie goes to dealer");

        let settled = resolve(19, 19, 10.0, TieRule::Push);
        assert_eq!(settled.outcome, Outcome::Tie);
        assert!((settled.payout - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn codes() {
        for outcome in [Outcome::PlayerWin, Outcome::HouseWin, Outcome::Tie] {
            assert_eq!(Outcome::from_code(outcome.code()), outcome);
        }
    }
}
