//! Replay state reducer.
//!
//! Every state is recomputed from the start of the hand on a fresh table,
//! so the result for an index never depends on which indices were
//! requested before it.

use crate::error::ReplayError;
use crate::event::Event;
use crate::player::Player;

pub mod state;
mod table;

pub use state::{Issue, LastAction, PlayerState, ReplayState};

use table::Table;

/// Computes the table state after replaying `events[0..=index]`.
///
/// # Errors
///
/// Returns [`ReplayError::IndexOutOfBounds`] if `index` is not a valid
/// position in `events`.
///
/// # Example
///
/// ```
/// use hhreplay::{Amount, compute_replay_state, parse_hand};
///
/// let hand = parse_hand(
///     "Seat 1: Alice ($100)\n\
///      Seat 2: Bob ($100)\n\
///      Alice: posts small blind $1\n\
///      Bob: posts big blind $2\n\
///      Alice: calls $1",
/// );
/// let state = compute_replay_state(&hand.players, &hand.events, 2).unwrap();
/// assert_eq!(state.total_pot(), Amount::from_units(4));
/// assert_eq!(state.players[0].stack, Amount::from_units(98));
/// ```
pub fn compute_replay_state(
    players: &[Player],
    events: &[Event],
    index: usize,
) -> Result<ReplayState, ReplayError> {
    let replayed = events.get(..=index).ok_or(ReplayError::IndexOutOfBounds {
        index,
        len: events.len(),
    })?;

    let mut table = Table::new(players);
    for (position, event) in replayed.iter().enumerate() {
        table.apply(position, event);
    }
    Ok(table.into_state())
}

/// A borrowed view over a hand for playback drivers.
#[derive(Debug, Clone, Copy)]
pub struct Replay<'a> {
    players: &'a [Player],
    events: &'a [Event],
}

impl<'a> Replay<'a> {
    /// Creates a replay over the given roster and timeline.
    #[must_use]
    pub const fn new(players: &'a [Player], events: &'a [Event]) -> Self {
        Self { players, events }
    }

    /// Returns the roster.
    #[must_use]
    pub const fn players(&self) -> &'a [Player] {
        self.players
    }

    /// Returns the timeline.
    #[must_use]
    pub const fn events(&self) -> &'a [Event] {
        self.events
    }

    /// Returns the number of events.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns whether the timeline is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the state before the first event.
    #[must_use]
    pub fn initial(&self) -> ReplayState {
        ReplayState::initial(self.players)
    }

    /// Returns the state after the event at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError::IndexOutOfBounds`] if `index >= self.len()`.
    pub fn state_at(&self, index: usize) -> Result<ReplayState, ReplayError> {
        compute_replay_state(self.players, self.events, index)
    }

    /// Returns the state after the last event, or `None` for an empty timeline.
    #[must_use]
    pub fn last(&self) -> Option<ReplayState> {
        let index = self.len().checked_sub(1)?;
        self.state_at(index).ok()
    }

    /// Returns an iterator over the state after each event, in order.
    ///
    /// Each yielded state equals `self.state_at(i)` for its position `i`.
    #[must_use]
    pub fn states(&self) -> States<'a> {
        States {
            table: Table::new(self.players),
            events: self.events,
            next: 0,
        }
    }
}

/// Iterator returned by [`Replay::states`].
pub struct States<'a> {
    table: Table,
    events: &'a [Event],
    next: usize,
}

impl Iterator for States<'_> {
    type Item = ReplayState;

    fn next(&mut self) -> Option<Self::Item> {
        let event = self.events.get(self.next)?;
        self.table.apply(self.next, event);
        self.next += 1;
        Some(self.table.snapshot())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.events.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for States<'_> {}
