//! Card types and parsing from hand-history notation.

use core::fmt;
use core::str::FromStr;

use crate::error::CardParseError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// Returns the single-letter notation (`h`, `d`, `c`, `s`).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Hearts => 'h',
            Self::Diamonds => 'd',
            Self::Clubs => 'c',
            Self::Spades => 's',
        }
    }

    const fn from_char(c: char) -> Option<Self> {
        match c {
            'h' | 'H' | '♥' | '♡' => Some(Self::Hearts),
            'd' | 'D' | '♦' | '♢' => Some(Self::Diamonds),
            'c' | 'C' | '♣' | '♧' => Some(Self::Clubs),
            's' | 'S' | '♠' | '♤' => Some(Self::Spades),
            _ => None,
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (2-10, 11 = Jack, 12 = Queen, 13 = King, 14 = Ace).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Parsing only ever
    /// produces ranks in `2..=14`.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the rank character used in hand histories (`2`-`9`, `T`, `J`, `Q`, `K`, `A`).
    #[must_use]
    pub const fn rank_char(&self) -> char {
        match self.rank {
            2..=9 => (b'0' + self.rank) as char,
            10 => 'T',
            11 => 'J',
            12 => 'Q',
            13 => 'K',
            14 => 'A',
            _ => '?',
        }
    }
}

fn rank_from_str(rank: &str) -> Option<u8> {
    match rank {
        "10" | "T" | "t" => Some(10),
        "J" | "j" => Some(11),
        "Q" | "q" => Some(12),
        "K" | "k" => Some(13),
        "A" | "a" => Some(14),
        digit if digit.len() == 1 => match digit.as_bytes()[0] {
            d @ b'2'..=b'9' => Some(d - b'0'),
            _ => None,
        },
        _ => None,
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Parses `Ah`, `td`, `10h` or `K♠`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit_char = chars.next_back().ok_or(CardParseError::Empty)?;
        let rank_part = chars.as_str();
        if rank_part.is_empty() {
            return Err(CardParseError::InvalidRank(s.to_owned()));
        }

        let rank =
            rank_from_str(rank_part).ok_or_else(|| CardParseError::InvalidRank(s.to_owned()))?;
        let suit =
            Suit::from_char(suit_char).ok_or_else(|| CardParseError::InvalidSuit(s.to_owned()))?;

        Ok(Self::new(suit, rank))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_char(), self.suit.letter())
    }
}

/// Parses a whitespace-separated card list such as `Ah Kd 2c`.
///
/// Returns `None` if any token fails to parse.
pub(crate) fn parse_cards(list: &str) -> Option<Vec<Card>> {
    list.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| token.parse().ok())
        .collect()
}
