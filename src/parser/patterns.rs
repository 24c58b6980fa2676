//! Line patterns. Each pattern is independent of the others so new notations
//! for an existing event can be added without touching the rest.

use once_cell::sync::Lazy;
use regex::Regex;

/// An amount with an optional currency symbol and thousands separators.
const AMOUNT: &str = r"[$€£¥]?\s?\d[\d,]*(?:\.\d+)?";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("hand history pattern must compile")
}

/// `Seat 3: Carol ($1,200 in chips)`.
pub(super) static SEAT: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"(?i)^seat\s+(?P<seat>\d+)\s*:\s*(?P<name>[^()]+?)\s*\(\s*(?P<stack>{AMOUNT})[^)]*\)"
    ))
});

/// `Table 'Alpha' 6-max Seat #4 is the button`.
pub(super) static BUTTON: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)seat\s*#\s*(?P<seat>\d+)\s+is\s+the\s+button"));

/// `Dealt to Hero [Ah Kd]`.
pub(super) static DEALT: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)^dealt\s+to\s+(?P<name>.+?)\s*\[(?P<cards>[^\]]*)\]"));

/// `*** TURN *** [Ah Kd 2c] [7s]`.
pub(super) static STREET: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)^\*+\s*(?P<street>flop|turn|river)\s*\*+(?P<rest>.*)$"));

/// One bracketed card group.
pub(super) static BRACKETS: Lazy<Regex> = Lazy::new(|| compile(r"\[(?P<cards>[^\]]*)\]"));

/// `*** SHOW DOWN ***` or `*** SHOWDOWN ***`.
pub(super) static SHOWDOWN: Lazy<Regex> = Lazy::new(|| compile(r"(?i)^\*+\s*show\s*down\s*\*+"));

/// `Uncalled bet ($20) returned to Bob`.
pub(super) static UNCALLED: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"(?i)^uncalled\s+bet\s*\(\s*(?P<amount>{AMOUNT})\s*\)\s*returned\s+to\s+(?P<name>.+?)\s*$"
    ))
});

/// Recap and bookkeeping lines that never produce an event.
pub(super) static IGNORED: Lazy<Regex> =
    Lazy::new(|| compile(r"(?i)^(?:seat\s|total\s+pot\b|board\b|dealt\s+to\b|\*+)"));

/// `posts small blind $1`, `posts the big blind 2`, `posts SB 1`.
pub(super) static BLIND: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"(?i)\bposts\s+(?:the\s+)?(?:(?P<small>small\s+blind|sb)|(?P<big>big\s+blind|bb))\s*:?\s*(?P<amount>{AMOUNT})"
    ))
});

pub(super) static FOLD: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\bfolds?\b"));

pub(super) static CHECK: Lazy<Regex> = Lazy::new(|| compile(r"(?i)\bchecks?\b"));

pub(super) static CALL: Lazy<Regex> =
    Lazy::new(|| compile(&format!(r"(?i)\bcalls?\s+(?P<amount>{AMOUNT})")));

pub(super) static BET: Lazy<Regex> =
    Lazy::new(|| compile(&format!(r"(?i)\bbets?\s+(?P<amount>{AMOUNT})")));

/// `raises $10 to $25`, `raises to 25` or `raises 25`; `to` is the total.
pub(super) static RAISE: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"(?i)\braises?\s+(?:(?P<by>{AMOUNT})\s+)?(?:to\s+)?(?P<to>{AMOUNT})"
    ))
});

/// `collected $9.50 from pot`, `won ($12)`, `wins 40`.
pub(super) static COLLECT: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(
        r"(?i)^:?\s*(?:collected|won|wins)\s+\(?\s*(?P<amount>{AMOUNT})"
    ))
});
