use hhreplay::{
    ActionKind, Amount, Card, Event, EventKind, HandHistory, Issue, ParseOptions, Player,
    PlayerState, ReplayState, Street, Suit, parse_hand_with,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmHand {
    hand: HandHistory,
}

#[wasm_bindgen]
impl WasmHand {
    #[wasm_bindgen(constructor)]
    pub fn new(text: &str, uncalled_returns: bool) -> Self {
        let options = ParseOptions::default().with_uncalled_returns(uncalled_returns);
        Self {
            hand: parse_hand_with(text, &options),
        }
    }

    /// Replaces the loaded hand with a newly parsed one.
    pub fn parse(&mut self, text: &str, uncalled_returns: bool) {
        *self = Self::new(text, uncalled_returns);
    }

    pub fn len(&self) -> u32 {
        self.hand.events.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.hand.events.is_empty()
    }

    pub fn players(&self) -> Result<JsValue, JsValue> {
        let players: Vec<JsPlayer> = self.hand.players.iter().map(JsPlayer::from).collect();
        to_js_value(&players)
    }

    pub fn events(&self) -> Result<JsValue, JsValue> {
        let events: Vec<JsEvent> = self.hand.events.iter().map(JsEvent::from).collect();
        to_js_value(&events)
    }

    pub fn initial(&self) -> Result<JsValue, JsValue> {
        let state = self.hand.replay().initial();
        to_js_value(&JsState::from(&state))
    }

    pub fn state_at(&self, index: u32) -> Result<JsValue, JsValue> {
        let state = self
            .hand
            .replay()
            .state_at(index as usize)
            .map_err(js_err)?;
        to_js_value(&JsState::from(&state))
    }
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: u8,
    text: String,
}

#[derive(Serialize)]
struct JsPlayer {
    seat: u8,
    name: String,
    stack: f64,
    hole_cards: Option<Vec<JsCard>>,
    dealer: bool,
}

impl From<&Player> for JsPlayer {
    fn from(player: &Player) -> Self {
        Self {
            seat: player.seat,
            name: player.name.clone(),
            stack: amount_to_js(player.stack),
            hole_cards: player.hole_cards.map(|cards| cards_to_js(&cards)),
            dealer: player.dealer,
        }
    }
}

#[derive(Serialize)]
struct JsEvent {
    kind: &'static str,
    player: Option<String>,
    action: Option<&'static str>,
    amount: Option<f64>,
    street: Option<&'static str>,
    cards: Vec<JsCard>,
    description: String,
}

impl From<&Event> for JsEvent {
    fn from(event: &Event) -> Self {
        Self {
            kind: kind_to_str(event.kind()),
            player: event.player().map(str::to_owned),
            action: event.action().map(action_to_str),
            amount: event.amount().map(amount_to_js),
            street: event.street().map(Street::name),
            cards: cards_to_js(event.cards()),
            description: event.to_string(),
        }
    }
}

#[derive(Serialize)]
struct JsPlayerState {
    seat: u8,
    name: String,
    stack: f64,
    bet: f64,
    active: bool,
    dealer: bool,
    hole_cards: Option<Vec<JsCard>>,
    last_action: Option<&'static str>,
}

impl From<&PlayerState> for JsPlayerState {
    fn from(player: &PlayerState) -> Self {
        Self {
            seat: player.seat,
            name: player.name.clone(),
            stack: amount_to_js(player.stack),
            bet: amount_to_js(player.bet),
            active: player.active,
            dealer: player.dealer,
            hole_cards: player.hole_cards.map(|cards| cards_to_js(&cards)),
            last_action: player.last_action.map(|action| action.label()),
        }
    }
}

#[derive(Serialize)]
struct JsState {
    index: Option<u32>,
    street: &'static str,
    board: Vec<JsCard>,
    pot: f64,
    total_pot: f64,
    players: Vec<JsPlayerState>,
    hero: Option<u32>,
    hero_to_call: Option<f64>,
    showdown: bool,
    issues: Vec<String>,
}

impl From<&ReplayState> for JsState {
    fn from(state: &ReplayState) -> Self {
        Self {
            index: state.index.map(|index| index as u32),
            street: state.street.name(),
            board: cards_to_js(&state.board),
            pot: amount_to_js(state.pot),
            total_pot: amount_to_js(state.total_pot()),
            players: state.players.iter().map(JsPlayerState::from).collect(),
            hero: state.hero.map(|index| index as u32),
            hero_to_call: state.hero_to_call.map(amount_to_js),
            showdown: state.showdown,
            issues: state.issues.iter().map(Issue::to_string).collect(),
        }
    }
}

fn amount_to_js(amount: Amount) -> f64 {
    amount.cents() as f64 / 100.0
}

fn cards_to_js(cards: &[Card]) -> Vec<JsCard> {
    cards.iter().copied().map(card_to_js).collect()
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank,
        text: card.to_string(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
        Suit::Spades => "Spades",
    }
}

fn kind_to_str(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Blind => "Blind",
        EventKind::Action => "Action",
        EventKind::Street => "Street",
        EventKind::Showdown => "Showdown",
        EventKind::Summary => "Summary",
        EventKind::Return => "Return",
    }
}

fn action_to_str(action: ActionKind) -> &'static str {
    match action {
        ActionKind::Fold => "Fold",
        ActionKind::Check => "Check",
        ActionKind::Call => "Call",
        ActionKind::Bet => "Bet",
        ActionKind::Raise => "Raise",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::WasmHand;

    #[test]
    fn seated_hand_without_events_is_empty() {
        let hand = WasmHand::new("Seat 1: Alice ($100)\nSeat 2: Bob ($100)", false);
        assert_eq!(hand.len(), 0);
        assert!(hand.is_empty());
    }

    #[test]
    fn parse_replaces_the_loaded_hand() {
        let mut hand = WasmHand::new("", false);
        assert!(hand.is_empty());

        hand.parse("Seat 1: Alice ($100)\nAlice: bets $5", false);
        assert_eq!(hand.len(), 1);
        assert!(!hand.is_empty());
    }
}
