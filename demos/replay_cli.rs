//! CLI hand replayer example.
//!
//! Reads a hand history from the file given as first argument (or stdin)
//! and scrubs through it: `n` next, `p` previous, a number jumps to that
//! event, `q` quits. Set `RUST_LOG=debug` to see which lines were dropped.

#![allow(clippy::missing_docs_in_private_items)]

use std::env;
use std::fs;
use std::io::{self, Read, Write};

use hhreplay::{Card, Event, ReplayState, Suit, parse_hand};

fn main() -> io::Result<()> {
    env_logger::init();

    let text = match env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };

    let hand = parse_hand(&text);
    if hand.is_empty() {
        println!("No hand found.");
        return Ok(());
    }

    let replay = hand.replay();
    println!(
        "Hand replay: {} players, {} events (type 'q' to quit)",
        hand.players.len(),
        replay.len()
    );

    // `None` is the table before the first event.
    let mut cursor: Option<usize> = None;

    loop {
        let state = match cursor {
            Some(index) => match replay.state_at(index) {
                Ok(state) => state,
                Err(err) => {
                    println!("Replay error: {err}");
                    cursor = None;
                    continue;
                }
            },
            None => replay.initial(),
        };

        print_table(&state, cursor.and_then(|index| hand.events.get(index)));

        let input = prompt_line("[n]ext [p]rev [#]jump [q]uit: ");
        cursor = match input.as_str() {
            "n" | "next" | "" => match cursor {
                Some(index) if index + 1 >= replay.len() => {
                    println!("End of hand.");
                    Some(index)
                }
                Some(index) => Some(index + 1),
                None if replay.is_empty() => None,
                None => Some(0),
            },
            "p" | "prev" => cursor.and_then(|index| index.checked_sub(1)),
            "q" | "quit" => return Ok(()),
            other => match other.parse::<usize>() {
                Ok(index) if index < replay.len() => Some(index),
                Ok(_) => {
                    println!("Index out of range (0-{}).", replay.len().saturating_sub(1));
                    cursor
                }
                Err(_) => {
                    println!("Unknown command.");
                    cursor
                }
            },
        };
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn print_table(state: &ReplayState, event: Option<&Event>) {
    match (state.index, event) {
        (Some(index), Some(event)) => println!("\n#{index} {event}"),
        _ => println!("\n(start of hand)"),
    }

    let board = if state.board.is_empty() {
        "(no cards)".to_string()
    } else {
        format_cards(&state.board)
    };
    println!(
        "{} | Board: {board} | Pot: {} (total {})",
        state.street,
        state.pot,
        state.total_pot()
    );

    for (position, player) in state.players.iter().enumerate() {
        let marker = if state.hero == Some(position) {
            "*"
        } else {
            " "
        };
        let button = if player.dealer { "D" } else { " " };
        let cards = player
            .hole_cards
            .map_or_else(|| "?? ??".to_string(), |cards| format_cards(&cards));
        let action = player.last_action.map_or("", |action| action.label());
        let name = if player.active {
            player.name.clone()
        } else {
            colorize(&player.name, "90")
        };
        println!(
            "{marker}{button} Seat {}: {name} [{cards}] stack {} | bet {} {action}",
            player.seat, player.stack, player.bet
        );
    }

    if let Some(to_call) = state.hero_to_call {
        println!("Hero to call: {to_call}");
    }
    for issue in &state.issues {
        println!("{}", colorize(&issue.to_string(), "33"));
    }
    println!();
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
