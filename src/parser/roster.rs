//! First pass: seats, button and hole cards.

use log::{debug, warn};

use crate::amount::Amount;
use crate::card::parse_cards;
use crate::options::ParseOptions;
use crate::player::Player;

use super::patterns::{BUTTON, DEALT, SEAT};

/// Collects the seated players from every seat line, then applies the
/// button and hole-card lines wherever they appear in the text.
pub(super) fn collect(lines: &[&str], options: &ParseOptions) -> Vec<Player> {
    let mut players: Vec<Player> = Vec::new();

    for line in lines {
        let Some(caps) = SEAT.captures(line) else {
            continue;
        };

        let Ok(seat) = caps["seat"].parse::<u8>() else {
            debug!("seat number out of range: {line}");
            continue;
        };
        if seat == 0 || seat > options.max_seats {
            debug!("seat {seat} outside 1..={}: {line}", options.max_seats);
            continue;
        }

        let name = caps["name"].trim();
        let stack = match caps["stack"].parse::<Amount>() {
            Ok(stack) => stack,
            Err(err) => {
                debug!("unreadable stack ({err}): {line}");
                continue;
            }
        };

        if players.iter().any(|p| p.seat == seat) {
            warn!("seat {seat} declared twice, keeping the first declaration");
            continue;
        }
        if players.iter().any(|p| p.name == name) {
            warn!("player `{name}` declared twice, keeping the first declaration");
            continue;
        }

        players.push(Player::new(seat, name, stack));
    }

    mark_button(lines, &mut players);
    deal_hole_cards(lines, &mut players);

    players
}

fn mark_button(lines: &[&str], players: &mut [Player]) {
    let Some(seat) = lines
        .iter()
        .find_map(|line| BUTTON.captures(line))
        .and_then(|caps| caps["seat"].parse::<u8>().ok())
    else {
        return;
    };

    match players.iter_mut().find(|p| p.seat == seat) {
        Some(player) => player.dealer = true,
        None => debug!("button on empty seat {seat}"),
    }
}

fn deal_hole_cards(lines: &[&str], players: &mut [Player]) {
    for caps in lines.iter().filter_map(|line| DEALT.captures(line)) {
        let name = caps["name"].trim();
        let Some(player) = players.iter_mut().find(|p| p.name == name) else {
            debug!("hole cards dealt to unseated player `{name}`");
            continue;
        };
        if player.hole_cards.is_some() {
            continue;
        }

        match parse_cards(&caps["cards"]).as_deref() {
            Some(&[first, second]) => player.hole_cards = Some([first, second]),
            _ => debug!("unreadable hole cards for `{name}`: [{}]", &caps["cards"]),
        }
    }
}
