//! Replay state types.

use core::fmt;

use crate::amount::Amount;
use crate::card::Card;
use crate::event::{Action, Blind, Street};
use crate::player::Player;

/// Label of the last thing a player did on the current street.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LastAction {
    /// Posted the small blind.
    SmallBlind,
    /// Posted the big blind.
    BigBlind,
    /// Folded.
    Fold,
    /// Checked.
    Check,
    /// Called.
    Call,
    /// Bet.
    Bet,
    /// Raised.
    Raise,
}

impl LastAction {
    /// Returns the display label (`SB`, `BB`, `Fold`, `Check`, `Call`, `Bet`, `Raise`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SmallBlind => "SB",
            Self::BigBlind => "BB",
            Self::Fold => "Fold",
            Self::Check => "Check",
            Self::Call => "Call",
            Self::Bet => "Bet",
            Self::Raise => "Raise",
        }
    }
}

impl From<Blind> for LastAction {
    fn from(blind: Blind) -> Self {
        match blind {
            Blind::Small => Self::SmallBlind,
            Blind::Big => Self::BigBlind,
        }
    }
}

impl From<Action> for LastAction {
    fn from(action: Action) -> Self {
        match action {
            Action::Fold => Self::Fold,
            Action::Check => Self::Check,
            Action::Call(_) => Self::Call,
            Action::Bet(_) => Self::Bet,
            Action::Raise { .. } => Self::Raise,
        }
    }
}

impl fmt::Display for LastAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A player's derived state at one point of the replay.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerState {
    /// Seat number (1-based).
    pub seat: u8,
    /// Screen name.
    pub name: String,
    /// Stack at the start of the hand.
    pub initial_stack: Amount,
    /// Stack behind, after everything replayed so far.
    pub stack: Amount,
    /// Chips committed on the current street.
    pub bet: Amount,
    /// `false` once the player has folded.
    pub active: bool,
    /// Whether the player holds the dealer button.
    pub dealer: bool,
    /// Hole cards, when known.
    pub hole_cards: Option<[Card; 2]>,
    /// Last action on the current street.
    pub last_action: Option<LastAction>,
}

impl From<&Player> for PlayerState {
    fn from(player: &Player) -> Self {
        Self {
            seat: player.seat,
            name: player.name.clone(),
            initial_stack: player.stack,
            stack: player.stack,
            bet: Amount::ZERO,
            active: true,
            dealer: player.dealer,
            hole_cards: player.hole_cards,
            last_action: None,
        }
    }
}

/// An inconsistency met while replaying.
///
/// Issues never abort a replay. They are collected so a caller can flag a
/// transcription that does not add up.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Issue {
    /// An event names a player that is not seated.
    UnknownPlayer {
        /// Event index.
        index: usize,
        /// Name found in the event.
        name: String,
    },
    /// A stack dropped below zero.
    NegativeStack {
        /// Event index.
        index: usize,
        /// Player name.
        name: String,
        /// Stack after the event.
        stack: Amount,
    },
    /// A raise total that does not exceed the player's current bet.
    RaiseBelowBet {
        /// Event index.
        index: usize,
        /// Player name.
        name: String,
        /// Total stated by the raise.
        to: Amount,
        /// Bet in front before the raise.
        bet: Amount,
    },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPlayer { index, name } => {
                write!(f, "event {index}: unknown player `{name}`")
            }
            Self::NegativeStack { index, name, stack } => {
                write!(f, "event {index}: stack of `{name}` is negative ({stack})")
            }
            Self::RaiseBelowBet { index, name, to, bet } => {
                write!(f, "event {index}: `{name}` raises to {to} with {bet} already in front")
            }
        }
    }
}

/// The reconstructed table at one event index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReplayState {
    /// Index of the last replayed event, `None` before the first event.
    pub index: Option<usize>,
    /// Board cards revealed so far.
    pub board: Vec<Card>,
    /// Chips swept in from previous streets. Bets in front are not included.
    pub pot: Amount,
    /// Current street.
    pub street: Street,
    /// Per-player state in seat-declaration order.
    pub players: Vec<PlayerState>,
    /// Highest bet in front on the current street.
    pub high_bet: Amount,
    /// Position in [`players`](Self::players) of the first active player with hole cards.
    pub hero: Option<usize>,
    /// Amount the hero must add to match the high bet. `None` without an
    /// active hero or once the showdown marker has been replayed.
    pub hero_to_call: Option<Amount>,
    /// Whether the showdown marker has been replayed.
    pub showdown: bool,
    /// Inconsistencies met so far.
    pub issues: Vec<Issue>,
}

impl ReplayState {
    /// Creates the state before any event.
    #[must_use]
    pub fn initial(players: &[Player]) -> Self {
        let mut state = Self {
            index: None,
            board: Vec::new(),
            pot: Amount::ZERO,
            street: Street::Preflop,
            players: players.iter().map(PlayerState::from).collect(),
            high_bet: Amount::ZERO,
            hero: None,
            hero_to_call: None,
            showdown: false,
            issues: Vec::new(),
        };
        state.resolve_hero();
        state
    }

    /// Returns the hero's state.
    #[must_use]
    pub fn hero(&self) -> Option<&PlayerState> {
        self.hero.and_then(|index| self.players.get(index))
    }

    /// Returns the state of the player with the given name.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&PlayerState> {
        self.players.iter().find(|p| p.name == name)
    }

    /// Returns the pot including the bets still in front of the players.
    #[must_use]
    pub fn total_pot(&self) -> Amount {
        self.pot + self.players.iter().map(|p| p.bet).sum::<Amount>()
    }

    /// Returns pot, bets and stacks combined.
    ///
    /// Equals the sum of the initial stacks whenever the timeline accounts
    /// for every chip movement.
    #[must_use]
    pub fn chips_in_play(&self) -> Amount {
        self.total_pot() + self.players.iter().map(|p| p.stack).sum::<Amount>()
    }

    pub(super) fn resolve_hero(&mut self) {
        self.hero = self
            .players
            .iter()
            .position(|p| p.active && p.hole_cards.is_some());
        self.hero_to_call = match self.hero() {
            Some(hero) if !self.showdown => Some((self.high_bet - hero.bet).non_negative()),
            _ => None,
        };
    }
}
