//! Second pass: the ordered event list.

use log::{debug, trace, warn};
use regex::Captures;

use crate::amount::Amount;
use crate::card::{Card, parse_cards};
use crate::event::{Action, Blind, Event, Street};
use crate::options::ParseOptions;
use crate::player::Player;

use super::patterns::{
    BET, BLIND, BRACKETS, CALL, CHECK, COLLECT, FOLD, IGNORED, RAISE, SHOWDOWN, STREET, UNCALLED,
};

/// Accumulates events line by line against a fixed roster.
pub(super) struct Timeline<'a> {
    players: &'a [Player],
    options: &'a ParseOptions,
    street: Street,
    showdown: bool,
    events: Vec<Event>,
}

impl<'a> Timeline<'a> {
    pub(super) const fn new(players: &'a [Player], options: &'a ParseOptions) -> Self {
        Self {
            players,
            options,
            street: Street::Preflop,
            showdown: false,
            events: Vec::new(),
        }
    }

    pub(super) fn finish(self) -> Vec<Event> {
        self.events
    }

    /// Classifies one line, appending at most one event.
    pub(super) fn push_line(&mut self, line: &str) {
        if SHOWDOWN.is_match(line) {
            self.push_showdown();
            return;
        }

        if let Some(caps) = STREET.captures(line) {
            self.push_street(line, &caps);
            return;
        }

        if let Some(caps) = UNCALLED.captures(line) {
            self.push_uncalled(line, &caps);
            return;
        }

        if IGNORED.is_match(line) {
            trace!("recap line: {line}");
            return;
        }

        if let Some((player, rest)) = self.actor(line, true) {
            self.push_player_line(player, rest, line);
        } else if let Some((player, rest)) = self.actor(line, false) {
            self.push_collection(player, rest, line);
        } else {
            trace!("no known player: {line}");
        }
    }

    /// Finds the longest player name the line starts with. With `colon`, the
    /// name must be followed by `:`; otherwise by whitespace.
    fn actor<'l>(&self, line: &'l str, colon: bool) -> Option<(&'a Player, &'l str)> {
        self.players
            .iter()
            .filter_map(|player| {
                let rest = line.strip_prefix(player.name.as_str())?;
                let rest = if colon {
                    rest.trim_start().strip_prefix(':')?
                } else if rest.starts_with(char::is_whitespace) {
                    rest
                } else {
                    return None;
                };
                Some((player, rest.trim()))
            })
            .max_by_key(|(player, _)| player.name.len())
    }

    fn push_showdown(&mut self) {
        if self.showdown {
            debug!("repeated showdown marker");
            return;
        }
        self.showdown = true;
        self.events.push(Event::Showdown);
    }

    fn push_street(&mut self, line: &str, caps: &Captures<'_>) {
        let street = match caps["street"].to_ascii_lowercase().as_str() {
            "flop" => Street::Flop,
            "turn" => Street::Turn,
            _ => Street::River,
        };

        if street <= self.street {
            warn!("{street} marker out of sequence after {}: {line}", self.street);
            return;
        }

        let groups: Vec<Vec<Card>> = match BRACKETS
            .captures_iter(&caps["rest"])
            .map(|group| parse_cards(&group["cards"]))
            .collect::<Option<_>>()
        {
            Some(groups) => groups,
            None => {
                warn!("unreadable board cards: {line}");
                return;
            }
        };

        let cards: Vec<Card> = match street {
            Street::Flop => groups.first().cloned().unwrap_or_default(),
            _ => groups
                .last()
                .and_then(|group| group.last())
                .copied()
                .into_iter()
                .collect(),
        };

        if cards.len() != street.revealed() {
            warn!(
                "{street} reveals {} cards instead of {}: {line}",
                cards.len(),
                street.revealed()
            );
            return;
        }

        if self.street.next() != Some(street) && !self.backfill(street, &groups, line) {
            return;
        }

        self.street = street;
        self.events.push(Event::Street { street, cards });
    }

    /// Emits the streets a marker skipped over, taken from the running board
    /// it repeats in front of the new card. Returns `false` when that running
    /// board is missing or has the wrong size.
    fn backfill(&mut self, street: Street, groups: &[Vec<Card>], line: &str) -> bool {
        let shown: Vec<Card> = groups.iter().flatten().copied().collect();
        let running = &shown[..shown.len().saturating_sub(1)];
        if running.len() != street.board_len() - street.revealed() {
            warn!("{street} marker skips a street without the running board: {line}");
            return false;
        }

        let mut revealed = self.street.board_len();
        while let Some(skipped) = self.street.next().filter(|next| *next < street) {
            let end = revealed + skipped.revealed();
            debug!("restoring missing {skipped} marker from: {line}");
            self.events.push(Event::Street {
                street: skipped,
                cards: running[revealed..end].to_vec(),
            });
            self.street = skipped;
            revealed = end;
        }
        true
    }

    fn push_uncalled(&mut self, line: &str, caps: &Captures<'_>) {
        if !self.options.uncalled_returns {
            trace!("uncalled bet return not modeled: {line}");
            return;
        }

        let name = caps["name"].trim();
        let Some(player) = self.players.iter().find(|p| p.name == name) else {
            debug!("uncalled bet returned to unseated player `{name}`");
            return;
        };
        let Some(amount) = amount(caps, line) else {
            return;
        };

        self.events.push(Event::UncalledReturn {
            player: player.name.clone(),
            amount,
        });
    }

    fn push_player_line(&mut self, player: &Player, rest: &str, line: &str) {
        if let Some(caps) = BLIND.captures(rest) {
            if self.street != Street::Preflop {
                warn!("blind posted after the flop: {line}");
                return;
            }
            let blind = if caps.name("small").is_some() {
                Blind::Small
            } else {
                Blind::Big
            };
            if let Some(amount) = amount(&caps, line) {
                self.events.push(Event::Blind {
                    player: player.name.clone(),
                    blind,
                    amount,
                });
            }
            return;
        }

        if let Some(action) = parse_action(rest, line) {
            self.events.push(Event::Action {
                player: player.name.clone(),
                action,
            });
            return;
        }

        self.push_collection(player, rest, line);
    }

    fn push_collection(&mut self, player: &Player, rest: &str, line: &str) {
        let Some(caps) = COLLECT.captures(rest) else {
            trace!("not an action: {line}");
            return;
        };
        if !self.options.summaries {
            return;
        }
        if let Some(amount) = amount(&caps, line) {
            self.events.push(Event::Summary {
                player: player.name.clone(),
                amount,
            });
        }
    }
}

fn parse_action(rest: &str, line: &str) -> Option<Action> {
    if FOLD.is_match(rest) {
        return Some(Action::Fold);
    }
    if CHECK.is_match(rest) {
        return Some(Action::Check);
    }
    if let Some(caps) = CALL.captures(rest) {
        return amount(&caps, line).map(Action::Call);
    }
    if let Some(caps) = BET.captures(rest) {
        return amount(&caps, line).map(Action::Bet);
    }
    if let Some(caps) = RAISE.captures(rest) {
        return parse_amount(&caps["to"], line).map(|to| Action::Raise { to });
    }
    None
}

fn amount(caps: &Captures<'_>, line: &str) -> Option<Amount> {
    parse_amount(&caps["amount"], line)
}

fn parse_amount(text: &str, line: &str) -> Option<Amount> {
    match text.parse() {
        Ok(amount) => Some(amount),
        Err(err) => {
            debug!("unreadable amount ({err}): {line}");
            None
        }
    }
}
