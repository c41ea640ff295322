//! A terminal blackjack game engine with optional `no_std` support.
//!
//! The crate provides a [`Table`] type that runs the round flow (betting,
//! dealing, player actions, the house turn and settlement) over a
//! seven-deck [`Shoe`], keeping each hand in an [`OrderedMultiset`] so it is
//! always scored and shown in ascending rank order.
//!
//! # Example
//!
//! ```
//! use termjack::{GameState, Table, TableOptions};
//!
//! let mut table = Table::new(TableOptions::default(), 1, 42);
//! table.start_round();
//! table.place_bet(0, 10.0).unwrap();
//! table.deal().unwrap();
//!
//! while table.state() == GameState::PlayerTurn {
//!     let turn = table.current_turn();
//!     table.stand(turn.seat, turn.hand).unwrap();
//! }
//! table.house_play().unwrap();
//! let result = table.showdown().unwrap();
//! assert_eq!(result.seats.len(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod decision;
pub mod error;
pub mod game;
pub mod hand;
pub mod ledger;
#[cfg(feature = "std")]
pub mod log;
pub mod multiset;
pub mod options;
pub mod render;
pub mod result;
pub mod shoe;

// Re-export main types
pub use card::{COPIES_PER_RANK, Card, DECK_SIZE, SHOE_SIZE};
pub use decision::{Action, house_action, player_actions};
pub use error::{ActionError, BetError, DealError, ShoeError, ShowdownError};
pub use game::{GameState, Table, TurnPosition};
pub use hand::{Hand, Player, score};
pub use ledger::{History, Ledger, Statistics};
pub use multiset::OrderedMultiset;
pub use options::{DoubleRule, TableOptions, TieRule};
pub use result::{HandResult, Outcome, Resolution, RoundResult, SeatResult, resolve};
pub use shoe::{RESHUFFLE_THRESHOLD, Shoe};
