//! Seated players as declared by a hand history.

use crate::amount::Amount;
use crate::card::Card;

/// A player seated for one hand.
///
/// This is the static roster entry. Per-index values such as the current
/// stack or the bet in front are derived by the replay reducer on a
/// separate [`PlayerState`](crate::PlayerState).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    /// Seat number (1-based).
    pub seat: u8,
    /// Screen name, unique within a hand.
    pub name: String,
    /// Stack at the start of the hand.
    pub stack: Amount,
    /// Hole cards, known for the hero only.
    pub hole_cards: Option<[Card; 2]>,
    /// Whether the player holds the dealer button.
    pub dealer: bool,
}

impl Player {
    /// Creates a new player without hole cards or button.
    #[must_use]
    pub fn new(seat: u8, name: impl Into<String>, stack: Amount) -> Self {
        Self {
            seat,
            name: name.into(),
            stack,
            hole_cards: None,
            dealer: false,
        }
    }

    /// Sets the hole cards.
    #[must_use]
    pub fn with_hole_cards(mut self, cards: [Card; 2]) -> Self {
        self.hole_cards = Some(cards);
        self
    }

    /// Sets the dealer flag.
    #[must_use]
    pub fn with_dealer(mut self, dealer: bool) -> Self {
        self.dealer = dealer;
        self
    }
}
