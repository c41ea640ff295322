//! Legal actions at a decision point.
//!
//! Menus are rebuilt from the hand state every time they are shown; nothing
//! here remembers earlier decisions.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

/// An action a hand can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw a card.
    Hit,
    /// End the hand's turn.
    Stand,
    /// Double the stake, draw one card, then stand.
    Double,
    /// Split a pair into two hands.
    Split,
}

impl Action {
    /// Returns the menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hit => "Hit",
            Self::Stand => "Stand",
            Self::Double => "Double Down",
            Self::Split => "Split",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returns the player's actions in menu order: hit, stand, then double and
/// split when allowed.
#[must_use]
pub fn player_actions(can_double: bool, can_split: bool) -> Vec<Action> {
    let mut actions = vec![Action::Hit, Action::Stand];
    if can_double {
        actions.push(Action::Double);
    }
    if can_split {
        actions.push(Action::Split);
    }
    actions
}

/// Returns the house's only action: hit below `stands_at`, stand otherwise.
#[must_use]
pub const fn house_action(total: u8, stands_at: u8) -> Action {
    if total < stands_at {
        Action::Hit
    } else {
        Action::Stand
    }
}

/// Maps a 1-based menu choice to an action.
#[must_use]
pub fn choose(actions: &[Action], choice: usize) -> Option<Action> {
    choice
        .checked_sub(1)
        .and_then(|index| actions.get(index))
        .copied()
}
