//! Card and amount parsing tests.

use hhreplay::{Amount, AmountParseError, Card, CardParseError, Suit};

#[test]
fn amount_strips_currency_and_separators() {
    assert_eq!("100".parse::<Amount>().unwrap(), Amount::from_units(100));
    assert_eq!("$1,234.56".parse::<Amount>().unwrap(), Amount::from_cents(123_456));
    assert_eq!("€ 50".parse::<Amount>().unwrap(), Amount::from_units(50));
    assert_eq!("£0.5".parse::<Amount>().unwrap(), Amount::from_cents(50));
    assert_eq!("1,500".parse::<Amount>().unwrap(), Amount::from_units(1500));
    assert_eq!("-$3".parse::<Amount>().unwrap(), Amount::from_units(-3));
}

#[test]
fn amount_rejects_garbage() {
    assert_eq!("".parse::<Amount>().unwrap_err(), AmountParseError::Empty);
    assert_eq!("$".parse::<Amount>().unwrap_err(), AmountParseError::Empty);
    assert!(matches!(
        "12a".parse::<Amount>().unwrap_err(),
        AmountParseError::Invalid(_)
    ));
    assert!(matches!(
        "1.234".parse::<Amount>().unwrap_err(),
        AmountParseError::TooPrecise(_)
    ));
    assert!(matches!(
        "99999999999999999999".parse::<Amount>().unwrap_err(),
        AmountParseError::Overflow(_)
    ));
}

#[test]
fn amount_display_and_arithmetic() {
    assert_eq!(Amount::from_units(12).to_string(), "12");
    assert_eq!(Amount::from_cents(1250).to_string(), "12.50");
    assert_eq!(Amount::from_cents(-5).to_string(), "-0.05");

    let total: Amount = [Amount::from_units(1), Amount::from_cents(50)].iter().sum();
    assert_eq!(total, Amount::from_cents(150));
    assert_eq!(Amount::from_units(2) - Amount::from_units(5), Amount::from_units(-3));
    assert!((Amount::from_units(2) - Amount::from_units(5)).is_negative());
    assert_eq!(Amount::from_units(-3).non_negative(), Amount::ZERO);
}

#[test]
fn amount_arithmetic_saturates() {
    let max = Amount::from_cents(i64::MAX);
    let min = Amount::from_cents(i64::MIN);
    assert_eq!(max + Amount::from_cents(1), max);
    assert_eq!(min - Amount::from_cents(1), min);
    assert_eq!(-min, max);
    assert_eq!([max, max].iter().sum::<Amount>(), max);
    assert_eq!(Amount::from_units(i64::MAX), max);

    let mut pot = max;
    pot += Amount::from_units(5);
    assert_eq!(pot, max);
    pot -= max;
    assert_eq!(pot, Amount::ZERO);
}

#[test]
fn card_notations() {
    assert_eq!("Ah".parse::<Card>().unwrap(), Card::new(Suit::Hearts, 14));
    assert_eq!("td".parse::<Card>().unwrap(), Card::new(Suit::Diamonds, 10));
    assert_eq!("10c".parse::<Card>().unwrap(), Card::new(Suit::Clubs, 10));
    assert_eq!("2s".parse::<Card>().unwrap(), Card::new(Suit::Spades, 2));
    assert_eq!("K♠".parse::<Card>().unwrap(), Card::new(Suit::Spades, 13));
    assert_eq!(Card::new(Suit::Clubs, 10).to_string(), "Tc");
    assert_eq!(Card::new(Suit::Hearts, 14).to_string(), "Ah");
}

#[test]
fn card_errors() {
    assert_eq!("".parse::<Card>().unwrap_err(), CardParseError::Empty);
    assert!(matches!(
        "h".parse::<Card>().unwrap_err(),
        CardParseError::InvalidRank(_)
    ));
    assert!(matches!(
        "1h".parse::<Card>().unwrap_err(),
        CardParseError::InvalidRank(_)
    ));
    assert!(matches!(
        "Ax".parse::<Card>().unwrap_err(),
        CardParseError::InvalidSuit(_)
    ));
}
