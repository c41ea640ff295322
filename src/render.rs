//! ASCII card art.

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::Hand;

/// Rows in a rendered card.
pub const CARD_ROWS: usize = 6;

const BORDER: &str = "+-----+";
const BLANK: &str = "|     |";
const HIDDEN: &str = "|#####|";

/// How a card is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    /// Face up.
    Up(Card),
    /// Face down.
    Down,
}

/// Renders one face-up card.
///
/// ```
/// use termjack::{Card, render::card_lines};
///
/// let lines = card_lines(Card::new(10));
/// assert_eq!(lines[1], "|10   |");
/// assert_eq!(lines[4], "|   10|");
/// ```
#[must_use]
pub fn card_lines(card: Card) -> [String; CARD_ROWS] {
    let glyph = card.glyph();
    [
        BORDER.to_string(),
        format!("|{glyph:<5}|"),
        BLANK.to_string(),
        BLANK.to_string(),
        format!("|{glyph:>5}|"),
        BORDER.to_string(),
    ]
}

/// Renders one face-down card.
#[must_use]
pub fn hidden_lines() -> [String; CARD_ROWS] {
    [BORDER, HIDDEN, HIDDEN, HIDDEN, HIDDEN, BORDER].map(ToString::to_string)
}

/// Renders cards side by side, one space apart.
#[must_use]
pub fn render_row(faces: &[Face]) -> String {
    let cards: Vec<[String; CARD_ROWS]> = faces
        .iter()
        .map(|face| match face {
            Face::Up(card) => card_lines(*card),
            Face::Down => hidden_lines(),
        })
        .collect();

    (0..CARD_ROWS)
        .map(|row| {
            cards
                .iter()
                .map(|lines| lines[row].as_str())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a hand followed by its total, optionally hiding the first card.
#[must_use]
pub fn render_hand(hand: &Hand, hide_first: bool) -> String {
    let faces: Vec<Face> = hand
        .iter()
        .enumerate()
        .map(|(index, card)| {
            if hide_first && index == 0 {
                Face::Down
            } else {
                Face::Up(*card)
            }
        })
        .collect();

    let total = if hide_first {
        "??".to_string()
    } else {
        hand.total().to_string()
    };

    format!("{}\nTotal: {total}", render_row(&faces))
}
