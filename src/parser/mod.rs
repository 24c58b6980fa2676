//! Tolerant hand-history text parser.
//!
//! Parsing never fails. Lines that do not match a known notation are
//! dropped, so text coming out of an unreliable transcription step still
//! yields a usable (possibly partial) hand.

use crate::event::Event;
use crate::options::ParseOptions;
use crate::player::Player;
use crate::replay::Replay;

mod patterns;
mod roster;
mod timeline;

use timeline::Timeline;

/// A parsed hand: the seated players and the ordered event timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandHistory {
    /// Players in seat-declaration order.
    pub players: Vec<Player>,
    /// Events in source line order.
    pub events: Vec<Event>,
}

impl HandHistory {
    /// Returns a replay view over this hand.
    #[must_use]
    pub fn replay(&self) -> Replay<'_> {
        Replay::new(&self.players, &self.events)
    }

    /// Returns the player with the given name.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name == name)
    }

    /// Returns the player holding the button.
    #[must_use]
    pub fn dealer(&self) -> Option<&Player> {
        self.players.iter().find(|p| p.dealer)
    }

    /// Returns whether no player and no event were recognized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty() && self.events.is_empty()
    }
}

/// Parses a hand history with default options.
///
/// # Example
///
/// ```
/// use hhreplay::{Event, parse_hand};
///
/// let hand = parse_hand(
///     "Seat 1: Alice ($100)\n\
///      Seat 2: Bob ($100)\n\
///      Seat #1 is the button\n\
///      Alice: posts small blind $1\n\
///      Bob: posts big blind $2\n\
///      Alice: folds",
/// );
/// assert_eq!(hand.players.len(), 2);
/// assert!(hand.players[0].dealer);
/// assert_eq!(hand.events.len(), 3);
/// assert_eq!(hand.events[2].to_string(), "Alice folds");
/// ```
#[must_use]
pub fn parse_hand(text: &str) -> HandHistory {
    parse_hand_with(text, &ParseOptions::default())
}

/// Parses a hand history with the given options.
#[must_use]
pub fn parse_hand_with(text: &str, options: &ParseOptions) -> HandHistory {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let players = roster::collect(&lines, options);

    let mut timeline = Timeline::new(&players, options);
    for line in &lines {
        timeline.push_line(line);
    }
    let events = timeline.finish();

    log::debug!(
        "parsed {} players and {} events from {} lines",
        players.len(),
        events.len(),
        lines.len()
    );

    HandHistory { players, events }
}
