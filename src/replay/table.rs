use log::warn;

use crate::amount::Amount;
use crate::event::{Action, Event};
use crate::player::Player;

use super::state::{Issue, LastAction, ReplayState};

/// Working table for a single replay computation. Never shared between calls.
pub(super) struct Table {
    state: ReplayState,
    /// Players already reported with a negative stack.
    overdrawn: Vec<bool>,
}

impl Table {
    pub(super) fn new(players: &[Player]) -> Self {
        Self {
            state: ReplayState::initial(players),
            overdrawn: vec![false; players.len()],
        }
    }

    /// Returns the state as of the last applied event.
    pub(super) fn snapshot(&self) -> ReplayState {
        let mut state = self.state.clone();
        state.resolve_hero();
        state
    }

    pub(super) fn into_state(self) -> ReplayState {
        let mut state = self.state;
        state.resolve_hero();
        state
    }

    pub(super) fn apply(&mut self, index: usize, event: &Event) {
        self.state.index = Some(index);

        match event {
            Event::Street { street, cards } => {
                self.sweep();
                self.state.board.extend_from_slice(cards);
                self.state.street = *street;
            }
            Event::Blind { player, blind, amount } => {
                if let Some(seat) = self.seat(index, player) {
                    self.pay(index, seat, *amount);
                    self.state.players[seat].last_action = Some((*blind).into());
                }
            }
            Event::Action { player, action } => {
                if let Some(seat) = self.seat(index, player) {
                    self.act(index, seat, *action);
                }
            }
            Event::Showdown => self.state.showdown = true,
            Event::Summary { .. } => {}
            Event::UncalledReturn { player, amount } => {
                if let Some(seat) = self.seat(index, player) {
                    self.refund(seat, *amount);
                }
            }
        }
    }

    fn act(&mut self, index: usize, seat: usize, action: Action) {
        match action {
            Action::Fold => self.state.players[seat].active = false,
            Action::Check => {}
            Action::Call(amount) | Action::Bet(amount) => self.pay(index, seat, amount),
            Action::Raise { to } => {
                let bet = self.state.players[seat].bet;
                if to > bet {
                    self.pay(index, seat, to - bet);
                } else {
                    let issue = Issue::RaiseBelowBet {
                        index,
                        name: self.state.players[seat].name.clone(),
                        to,
                        bet,
                    };
                    self.report(issue);
                }
            }
        }
        self.state.players[seat].last_action = Some(action.into());
    }

    /// Moves chips from a stack to the bet in front.
    fn pay(&mut self, index: usize, seat: usize, amount: Amount) {
        let player = &mut self.state.players[seat];
        player.stack -= amount;
        player.bet += amount;
        let (bet, stack) = (player.bet, player.stack);

        self.state.high_bet = self.state.high_bet.max(bet);

        if stack.is_negative() && !self.overdrawn[seat] {
            self.overdrawn[seat] = true;
            let issue = Issue::NegativeStack {
                index,
                name: self.state.players[seat].name.clone(),
                stack,
            };
            self.report(issue);
        }
    }

    /// Hands back an uncalled amount, from the bet in front first and any
    /// remainder from the pot.
    fn refund(&mut self, seat: usize, amount: Amount) {
        let player = &mut self.state.players[seat];
        let from_bet = amount.min(player.bet);
        player.bet -= from_bet;
        player.stack += amount;
        self.state.pot -= amount - from_bet;
        self.state.high_bet = self
            .state
            .players
            .iter()
            .map(|p| p.bet)
            .max()
            .unwrap_or(Amount::ZERO);
    }

    /// Street boundary: bets go to the pot, labels and the high bet reset.
    fn sweep(&mut self) {
        for player in &mut self.state.players {
            self.state.pot += player.bet;
            player.bet = Amount::ZERO;
            player.last_action = None;
        }
        self.state.high_bet = Amount::ZERO;
    }

    fn seat(&mut self, index: usize, name: &str) -> Option<usize> {
        let seat = self.state.players.iter().position(|p| p.name == name);
        if seat.is_none() {
            self.report(Issue::UnknownPlayer {
                index,
                name: name.to_owned(),
            });
        }
        seat
    }

    fn report(&mut self, issue: Issue) {
        warn!("{issue}");
        self.state.issues.push(issue);
    }
}
