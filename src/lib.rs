//! A tolerant poker hand-history parser and replay state reducer.
//!
//! [`parse_hand`] turns a semi-structured hand-history text block into the
//! seated [`Player`]s and an ordered list of [`Event`]s. [`compute_replay_state`]
//! replays that timeline up to any index and returns the reconstructed table
//! ([`ReplayState`]): stacks, bets in front, pot, board and the hero's
//! amount to call.
//!
//! Parsing never fails on malformed text; unrecognized lines are dropped.
//! Replaying is a pure function of its inputs, so a playback driver can
//! request indices in any order.
//!
//! # Example
//!
//! ```
//! use hhreplay::{Amount, parse_hand};
//!
//! let hand = parse_hand(
//!     "Seat 1: Alice ($100)\n\
//!      Seat 2: Bob ($100)\n\
//!      Seat #1 is the button\n\
//!      Alice: posts small blind $1\n\
//!      Bob: posts big blind $2\n\
//!      *** FLOP *** [Ah Kd 2c]\n\
//!      Alice: bets $5\n\
//!      Bob: calls $5",
//! );
//! let state = hand.replay().last().unwrap();
//! assert_eq!(state.pot, Amount::from_units(3));
//! assert_eq!(state.board.len(), 3);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod amount;
pub mod card;
pub mod error;
pub mod event;
pub mod options;
pub mod parser;
pub mod player;
pub mod replay;

// Re-export main types
pub use amount::Amount;
pub use card::{Card, Suit};
pub use error::{AmountParseError, CardParseError, ReplayError};
pub use event::{Action, ActionKind, Blind, Event, EventKind, Street};
pub use options::ParseOptions;
pub use parser::{HandHistory, parse_hand, parse_hand_with};
pub use player::Player;
pub use replay::{
    Issue, LastAction, PlayerState, Replay, ReplayState, States, compute_replay_state,
};
