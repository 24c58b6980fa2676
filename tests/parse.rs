//! Hand text parser tests.

use hhreplay::{
    Action, ActionKind, Amount, Blind, Card, Event, EventKind, ParseOptions, Street, Suit,
    parse_hand, parse_hand_with,
};

const SAMPLE: &str = include_str!("../demos/sample_hand.txt");

const HEADS_UP: &str = "Seat 1: Alice ($100)\n\
    Seat 2: Bob ($100)\n\
    Seat #1 is the button\n\
    Alice: posts small blind $1\n\
    Bob: posts big blind $2\n\
    *** FLOP *** [Ah Kd 2c]\n\
    Alice: bets $5\n\
    Bob: calls $5";

fn card(text: &str) -> Card {
    text.parse().unwrap()
}

fn units(units: i64) -> Amount {
    Amount::from_units(units)
}

#[test]
fn heads_up_example() {
    let hand = parse_hand(HEADS_UP);

    assert_eq!(hand.players.len(), 2);
    assert_eq!(hand.players[0].name, "Alice");
    assert_eq!(hand.players[0].seat, 1);
    assert_eq!(hand.players[0].stack, units(100));
    assert!(hand.players[0].dealer);
    assert_eq!(hand.players[1].name, "Bob");
    assert_eq!(hand.players[1].stack, units(100));
    assert!(!hand.players[1].dealer);
    assert_eq!(hand.dealer().map(|p| p.name.as_str()), Some("Alice"));

    assert_eq!(
        hand.events,
        vec![
            Event::Blind {
                player: "Alice".into(),
                blind: Blind::Small,
                amount: units(1),
            },
            Event::Blind {
                player: "Bob".into(),
                blind: Blind::Big,
                amount: units(2),
            },
            Event::Street {
                street: Street::Flop,
                cards: vec![card("Ah"), card("Kd"), card("2c")],
            },
            Event::Action {
                player: "Alice".into(),
                action: Action::Bet(units(5)),
            },
            Event::Action {
                player: "Bob".into(),
                action: Action::Call(units(5)),
            },
        ]
    );
}

#[test]
fn empty_text_yields_empty_hand() {
    let hand = parse_hand("");
    assert!(hand.is_empty());
    assert!(hand.players.is_empty());
    assert!(hand.events.is_empty());

    let hand = parse_hand("\n   \n\t\n");
    assert!(hand.is_empty());
}

#[test]
fn seat_lines_accept_stack_notations() {
    let hand = parse_hand(
        "Seat 1: Carol ($1,250.50 in chips)\n\
         Seat 2: Big Dave (€80, 5 bounty)\n\
         Seat 3: ed_99 (1,500)\n\
         Seat 4: Noisy (lots)",
    );

    assert_eq!(hand.players.len(), 3);
    assert_eq!(hand.players[0].stack, Amount::from_cents(125_050));
    assert_eq!(hand.players[1].name, "Big Dave");
    assert_eq!(hand.players[1].stack, units(80));
    assert_eq!(hand.players[2].stack, units(1500));
}

#[test]
fn duplicate_and_out_of_range_seats_are_skipped() {
    let hand = parse_hand_with(
        "Seat 1: Alice ($100)\n\
         Seat 1: Mallory ($50)\n\
         Seat 2: Alice ($70)\n\
         Seat 0: Zero ($10)\n\
         Seat 7: Far ($10)\n\
         Seat 6: Bob ($60)",
        &ParseOptions::default().with_max_seats(6),
    );

    let names: Vec<&str> = hand.players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Alice", "Bob"]);
    assert_eq!(hand.players[0].stack, units(100));
}

#[test]
fn button_line_may_precede_seats() {
    let hand = parse_hand(
        "Table 'Alpha' 6-max Seat #2 is the button\n\
         Seat 1: Alice ($100)\n\
         Seat 2: Bob ($100)",
    );
    assert!(!hand.players[0].dealer);
    assert!(hand.players[1].dealer);
}

#[test]
fn missing_or_empty_button_seat_leaves_no_dealer() {
    let hand = parse_hand("Seat 1: Alice ($100)\nSeat 2: Bob ($100)");
    assert!(hand.dealer().is_none());

    let hand = parse_hand("Seat 1: Alice ($100)\nSeat #5 is the button");
    assert!(hand.dealer().is_none());
}

#[test]
fn hero_hole_cards_attach_to_player() {
    let hand = parse_hand(
        "Seat 1: Alice ($100)\n\
         Seat 2: Hero ($100)\n\
         Dealt to Hero [Ah Qh]",
    );
    assert_eq!(hand.players[0].hole_cards, None);
    assert_eq!(
        hand.players[1].hole_cards,
        Some([Card::new(Suit::Hearts, 14), Card::new(Suit::Hearts, 12)])
    );
    assert!(hand.events.is_empty());
}

#[test]
fn hole_cards_for_unknown_player_are_dropped() {
    let hand = parse_hand(
        "Seat 1: Alice ($100)\n\
         Dealt to Ghost [Ah Qh]\n\
         Dealt to Alice [Ah]",
    );
    assert_eq!(hand.players.len(), 1);
    assert_eq!(hand.players[0].hole_cards, None);
}

#[test]
fn turn_and_river_reveal_only_the_new_card() {
    let hand = parse_hand(
        "Seat 1: Alice ($100)\n\
         *** FLOP *** [Qd 7h 2h]\n\
         *** TURN *** [Qd 7h 2h] [Kc]\n\
         *** RIVER *** [Qd 7h 2h Kc] [5h]",
    );

    let streets: Vec<(Street, Vec<Card>)> = hand
        .events
        .iter()
        .map(|event| (event.street().unwrap(), event.cards().to_vec()))
        .collect();
    assert_eq!(
        streets,
        vec![
            (Street::Flop, vec![card("Qd"), card("7h"), card("2h")]),
            (Street::Turn, vec![card("Kc")]),
            (Street::River, vec![card("5h")]),
        ]
    );
}

#[test]
fn single_group_turn_marker_is_accepted() {
    let hand = parse_hand(
        "*** FLOP *** [Qd 7h 2h]\n\
         *** TURN *** [Kc]",
    );
    assert_eq!(hand.events[1].cards(), &[card("Kc")]);
}

#[test]
fn malformed_and_out_of_order_streets_are_dropped() {
    let hand = parse_hand(
        "*** TURN *** [Kc]\n\
         *** FLOP *** [Qd 7h]\n\
         *** FLOP *** [Qd 7h 2h]\n\
         *** FLOP *** [Qd 7h 2h]\n\
         *** TURN *** [Qd 7h 2h] [Xx]\n\
         *** TURN *** [Qd 7h 2h] [Kc]",
    );
    let streets: Vec<Street> = hand.events.iter().filter_map(Event::street).collect();
    assert_eq!(streets, [Street::Flop, Street::Turn]);
}

#[test]
fn missing_street_markers_are_restored_from_the_running_board() {
    let hand = parse_hand(
        "*** TURN *** [Qd 7h 2h] [Kc]\n\
         *** RIVER *** [Qd 7h 2h Kc] [5h]",
    );
    assert_eq!(
        hand.events,
        [
            Event::Street {
                street: Street::Flop,
                cards: vec![card("Qd"), card("7h"), card("2h")],
            },
            Event::Street {
                street: Street::Turn,
                cards: vec![card("Kc")],
            },
            Event::Street {
                street: Street::River,
                cards: vec![card("5h")],
            },
        ]
    );

    let hand = parse_hand("*** RIVER *** [Qd 7h 2h Kc] [5h]");
    let streets: Vec<Street> = hand.events.iter().filter_map(Event::street).collect();
    assert_eq!(streets, [Street::Flop, Street::Turn, Street::River]);
    assert_eq!(hand.events[1].cards(), &[card("Kc")]);

    let hand = parse_hand(
        "*** FLOP *** [Qd 7h 2h]\n\
         *** RIVER *** [Qd 7h 2h Kc] [5h]",
    );
    assert_eq!(hand.events.len(), 3);
    assert_eq!(hand.events[1].street(), Some(Street::Turn));
    assert_eq!(hand.events[1].cards(), &[card("Kc")]);
}

#[test]
fn skipped_street_without_running_board_is_dropped() {
    let hand = parse_hand(
        "*** RIVER *** [Qd 7h 2h] [5h]\n\
         *** TURN *** [Kc]",
    );
    assert!(hand.events.is_empty());
}

#[test]
fn showdown_is_a_terminal_marker() {
    let hand = parse_hand(
        "*** FLOP *** [Qd 7h 2h]\n\
         *** SHOW DOWN ***\n\
         *** SHOWDOWN ***",
    );
    assert_eq!(hand.events.len(), 2);
    assert_eq!(hand.events[1], Event::Showdown);
    assert_eq!(hand.events[1].kind(), EventKind::Showdown);
    assert!(hand.events[1].cards().is_empty());
    assert_eq!(hand.events[1].player(), None);
}

#[test]
fn blind_variants() {
    let hand = parse_hand(
        "Seat 1: Alice ($100)\n\
         Seat 2: Bob ($100)\n\
         Alice: posts the small blind 0.50\n\
         Bob: posts BB $1",
    );
    assert_eq!(
        hand.events,
        vec![
            Event::Blind {
                player: "Alice".into(),
                blind: Blind::Small,
                amount: Amount::from_cents(50),
            },
            Event::Blind {
                player: "Bob".into(),
                blind: Blind::Big,
                amount: units(1),
            },
        ]
    );
}

#[test]
fn blind_after_the_flop_is_dropped() {
    let hand = parse_hand(
        "Seat 1: Alice ($100)\n\
         *** FLOP *** [Qd 7h 2h]\n\
         Alice: posts small blind $1",
    );
    assert_eq!(hand.events.len(), 1);
    assert_eq!(hand.events[0].kind(), EventKind::Street);
}

#[test]
fn action_subtypes_and_amounts() {
    let hand = parse_hand(
        "Seat 1: Alice ($100)\n\
         Seat 2: Bob ($100)\n\
         Seat 3: Carol ($100)\n\
         Alice: folds\n\
         Bob: checks\n\
         Carol: calls $1,000 and is all-in\n\
         Bob: bets $7.50\n\
         Carol: raises $10 to $25\n\
         Alice: raises to 40\n\
         Bob: raises 60",
    );

    let actions: Vec<(&str, Action)> = hand
        .events
        .iter()
        .map(|event| match event {
            Event::Action { player, action } => (player.as_str(), *action),
            other => panic!("unexpected event {other:?}"),
        })
        .collect();

    assert_eq!(
        actions,
        vec![
            ("Alice", Action::Fold),
            ("Bob", Action::Check),
            ("Carol", Action::Call(units(1000))),
            ("Bob", Action::Bet(Amount::from_cents(750))),
            ("Carol", Action::Raise { to: units(25) }),
            ("Alice", Action::Raise { to: units(40) }),
            ("Bob", Action::Raise { to: units(60) }),
        ]
    );
    assert_eq!(hand.events[4].action(), Some(ActionKind::Raise));
    assert_eq!(hand.events[4].amount(), Some(units(25)));
}

#[test]
fn names_with_spaces_and_shared_prefixes() {
    let hand = parse_hand(
        "Seat 1: Al ($100)\n\
         Seat 2: Al Capone ($100)\n\
         Al Capone: bets $3\n\
         Al: folds",
    );
    assert_eq!(hand.events[0].player(), Some("Al Capone"));
    assert_eq!(hand.events[1].player(), Some("Al"));
}

#[test]
fn noise_lines_are_skipped() {
    let hand = parse_hand(
        "PokerStars Hand #1: Hold'em No Limit ($0.50/$1.00)\n\
         Seat 1: Alice ($100)\n\
         Seat 2: Bob ($100)\n\
         Ghost: bets $5\n\
         Alice said, \"nice hand\"\n\
         Bob: shows [Ah Ad] (a pair of Aces)\n\
         Alice: calls\n\
         Bob: is sitting out\n\
         Total pot $10 | Rake $0\n\
         Board [Qd 7h 2h Kc 5h]\n\
         *** SUMMARY ***\n\
         Seat 1: Alice (button) collected ($10)\n\
         Seat 2: Bob (big blind) folded before Flop",
    );
    assert_eq!(hand.players.len(), 2);
    assert!(hand.events.is_empty(), "{:?}", hand.events);
}

#[test]
fn collection_lines_become_summaries() {
    let text = "Seat 1: Alice ($100)\n\
         Seat 2: Bob ($100)\n\
         Alice collected $9.50 from pot\n\
         Bob: won ($3)";

    let hand = parse_hand(text);
    assert_eq!(
        hand.events,
        vec![
            Event::Summary {
                player: "Alice".into(),
                amount: Amount::from_cents(950),
            },
            Event::Summary {
                player: "Bob".into(),
                amount: units(3),
            },
        ]
    );
    assert_eq!(hand.events[0].kind(), EventKind::Summary);

    let hand = parse_hand_with(text, &ParseOptions::default().with_summaries(false));
    assert!(hand.events.is_empty());
}

#[test]
fn uncalled_returns_are_opt_in() {
    let text = "Seat 1: Alice ($100)\n\
         Alice: bets $20\n\
         Uncalled bet ($20) returned to Alice\n\
         Uncalled bet ($5) returned to Ghost";

    let hand = parse_hand(text);
    assert_eq!(hand.events.len(), 1);

    let hand = parse_hand_with(text, &ParseOptions::default().with_uncalled_returns(true));
    assert_eq!(hand.events.len(), 2);
    assert_eq!(
        hand.events[1],
        Event::UncalledReturn {
            player: "Alice".into(),
            amount: units(20),
        }
    );
    assert_eq!(hand.events[1].kind(), EventKind::Return);
}

#[test]
fn descriptions() {
    let hand = parse_hand(HEADS_UP);
    let descriptions: Vec<String> = hand.events.iter().map(ToString::to_string).collect();
    assert_eq!(
        descriptions,
        [
            "Alice posts SB 1",
            "Bob posts BB 2",
            "Flop: Ah Kd 2c",
            "Alice bets 5",
            "Bob calls 5",
        ]
    );
}

#[test]
fn sample_hand_parses_completely() {
    let hand = parse_hand(SAMPLE);

    let names: Vec<&str> = hand.players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Carol", "Hero", "Dmitri", "Erin"]);
    assert_eq!(hand.players[2].stack, Amount::from_cents(125_050));
    assert_eq!(hand.players[3].seat, 5);
    assert_eq!(hand.dealer().map(|p| p.name.as_str()), Some("Hero"));
    assert!(hand.player("Hero").unwrap().hole_cards.is_some());

    assert_eq!(hand.events.len(), 21);
    assert_eq!(hand.events[0].kind(), EventKind::Blind);
    assert_eq!(hand.events[6].street(), Some(Street::Flop));
    assert_eq!(hand.events[12].cards(), &[card("Kc")]);
    assert_eq!(hand.events[16].cards(), &[card("5h")]);
    assert_eq!(
        hand.events[20],
        Event::Summary {
            player: "Hero".into(),
            amount: Amount::from_cents(10_550),
        }
    );

    let first_street = hand
        .events
        .iter()
        .position(|e| e.kind() == EventKind::Street)
        .unwrap();
    assert!(
        hand.events[first_street..]
            .iter()
            .all(|e| e.kind() != EventKind::Blind)
    );
}
