//! Timeline events produced by the parser.

use core::fmt;

use crate::amount::Amount;
use crate::card::Card;

/// A betting round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Street {
    /// Before any board card.
    #[default]
    Preflop,
    /// First three board cards.
    Flop,
    /// Fourth board card.
    Turn,
    /// Fifth board card.
    River,
}

impl Street {
    /// Returns the display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Preflop => "Preflop",
            Self::Flop => "Flop",
            Self::Turn => "Turn",
            Self::River => "River",
        }
    }

    /// Returns the street that follows this one, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Preflop => Some(Self::Flop),
            Self::Flop => Some(Self::Turn),
            Self::Turn => Some(Self::River),
            Self::River => None,
        }
    }

    /// Returns how many board cards this street reveals.
    #[must_use]
    pub const fn revealed(self) -> usize {
        match self {
            Self::Preflop => 0,
            Self::Flop => 3,
            Self::Turn | Self::River => 1,
        }
    }

    /// Returns how many board cards are showing once this street is dealt.
    #[must_use]
    pub const fn board_len(self) -> usize {
        match self {
            Self::Preflop => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::River => 5,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Blind type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Blind {
    /// Small blind.
    Small,
    /// Big blind.
    Big,
}

impl Blind {
    /// Returns the short label (`SB` or `BB`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "SB",
            Self::Big => "BB",
        }
    }
}

/// Action subtype without its amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Fold.
    Fold,
    /// Check.
    Check,
    /// Call.
    Call,
    /// Bet.
    Bet,
    /// Raise.
    Raise,
}

/// A voluntary player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Player folds.
    Fold,
    /// Player checks.
    Check,
    /// Player calls the stated amount.
    Call(Amount),
    /// Player bets the stated amount.
    Bet(Amount),
    /// Player raises; `to` is the total the player has in front afterwards.
    Raise {
        /// Total bet-in-front reached by the raise.
        to: Amount,
    },
}

impl Action {
    /// Returns the subtype.
    #[must_use]
    pub const fn kind(self) -> ActionKind {
        match self {
            Self::Fold => ActionKind::Fold,
            Self::Check => ActionKind::Check,
            Self::Call(_) => ActionKind::Call,
            Self::Bet(_) => ActionKind::Bet,
            Self::Raise { .. } => ActionKind::Raise,
        }
    }

    /// Returns the amount carried by the action, if any.
    #[must_use]
    pub const fn amount(self) -> Option<Amount> {
        match self {
            Self::Fold | Self::Check => None,
            Self::Call(amount) | Self::Bet(amount) | Self::Raise { to: amount } => Some(amount),
        }
    }
}

/// Event kind tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Blind posting.
    Blind,
    /// Player action.
    Action,
    /// Street transition.
    Street,
    /// Showdown marker.
    Showdown,
    /// Pot collection.
    Summary,
    /// Uncalled bet returned.
    Return,
}

/// A single timeline entry.
///
/// The [`Display`](fmt::Display) implementation renders the human-readable
/// description shown next to the replay scrubber.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Event {
    /// A blind posting.
    Blind {
        /// Posting player.
        player: String,
        /// Small or big blind.
        blind: Blind,
        /// Posted amount.
        amount: Amount,
    },
    /// A voluntary action.
    Action {
        /// Acting player.
        player: String,
        /// The action.
        action: Action,
    },
    /// A street transition.
    Street {
        /// The street being entered.
        street: Street,
        /// Newly revealed board cards.
        cards: Vec<Card>,
    },
    /// The showdown marker.
    Showdown,
    /// A player collecting from the pot.
    Summary {
        /// Collecting player.
        player: String,
        /// Collected amount.
        amount: Amount,
    },
    /// An uncalled bet handed back to its player.
    UncalledReturn {
        /// Refunded player.
        player: String,
        /// Refunded amount.
        amount: Amount,
    },
}

impl Event {
    /// Returns the kind tag.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Blind { .. } => EventKind::Blind,
            Self::Action { .. } => EventKind::Action,
            Self::Street { .. } => EventKind::Street,
            Self::Showdown => EventKind::Showdown,
            Self::Summary { .. } => EventKind::Summary,
            Self::UncalledReturn { .. } => EventKind::Return,
        }
    }

    /// Returns the player the event refers to.
    #[must_use]
    pub fn player(&self) -> Option<&str> {
        match self {
            Self::Blind { player, .. }
            | Self::Action { player, .. }
            | Self::Summary { player, .. }
            | Self::UncalledReturn { player, .. } => Some(player),
            Self::Street { .. } | Self::Showdown => None,
        }
    }

    /// Returns the action subtype for action events.
    #[must_use]
    pub const fn action(&self) -> Option<ActionKind> {
        match self {
            Self::Action { action, .. } => Some(action.kind()),
            _ => None,
        }
    }

    /// Returns the amount carried by the event.
    #[must_use]
    pub const fn amount(&self) -> Option<Amount> {
        match self {
            Self::Blind { amount, .. }
            | Self::Summary { amount, .. }
            | Self::UncalledReturn { amount, .. } => Some(*amount),
            Self::Action { action, .. } => action.amount(),
            Self::Street { .. } | Self::Showdown => None,
        }
    }

    /// Returns the street entered by a street event.
    #[must_use]
    pub const fn street(&self) -> Option<Street> {
        match self {
            Self::Street { street, .. } => Some(*street),
            _ => None,
        }
    }

    /// Returns the newly revealed board cards (empty for non-street events).
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        match self {
            Self::Street { cards, .. } => cards,
            _ => &[],
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blind {
                player,
                blind,
                amount,
            } => write!(f, "{player} posts {} {amount}", blind.label()),
            Self::Action { player, action } => match action {
                Action::Fold => write!(f, "{player} folds"),
                Action::Check => write!(f, "{player} checks"),
                Action::Call(amount) => write!(f, "{player} calls {amount}"),
                Action::Bet(amount) => write!(f, "{player} bets {amount}"),
                Action::Raise { to } => write!(f, "{player} raises to {to}"),
            },
            Self::Street { street, cards } => {
                write!(f, "{street}:")?;
                for card in cards {
                    write!(f, " {card}")?;
                }
                Ok(())
            }
            Self::Showdown => f.write_str("Showdown"),
            Self::Summary { player, amount } => write!(f, "{player} collected {amount}"),
            Self::UncalledReturn { player, amount } => {
                write!(f, "Uncalled {amount} returned to {player}")
            }
        }
    }
}
