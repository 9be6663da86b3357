use std::sync::Once;

use card_core::{card_image_url, update, CardState, Msg, CARD_IMAGE_BASE_URL};
use pretty_assertions::assert_eq;
use url::Url;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(card_logging::initialize_for_tests);
}

fn set(state: CardState, value: &str, suit: &str) -> CardState {
    update(state, Msg::set_card_image(value, suit))
}

#[test]
fn initial_image_is_empty() {
    init_logging();
    let state = CardState::new();

    assert_eq!(state.card_image(), "");
    assert_eq!(state.view().card_image, "");
    assert!(!state.view().has_card());
}

#[test]
fn set_builds_deck_of_cards_url() {
    init_logging();
    let state = set(CardState::new(), "A", "S");

    assert_eq!(
        state.card_image(),
        "https://deckofcardsapi.com/static/img/AS.png"
    );
    assert!(state.view().dirty);
    assert!(state.view().has_card());
}

#[test]
fn zero_is_the_ten_code() {
    init_logging();
    let state = set(CardState::new(), "0", "H");

    assert_eq!(
        state.card_image(),
        "https://deckofcardsapi.com/static/img/0H.png"
    );
}

#[test]
fn empty_inputs_are_not_rejected() {
    init_logging();
    let state = set(CardState::new(), "", "");

    assert_eq!(state.card_image(), "https://deckofcardsapi.com/static/img/.png");
}

#[test]
fn later_set_overwrites_earlier_one() {
    init_logging();
    let state = set(CardState::new(), "K", "D");
    let state = set(state, "2", "C");

    assert_eq!(
        state.card_image(),
        "https://deckofcardsapi.com/static/img/2C.png"
    );
}

#[test]
fn repeated_set_leaves_state_unchanged() {
    init_logging();
    let mut once = set(CardState::new(), "Q", "H");
    let mut twice = set(once.clone(), "Q", "H");

    assert_eq!(once.card_image(), twice.card_image());
    assert!(once.consume_dirty());
    assert!(twice.consume_dirty());
    assert_eq!(once, twice);
}

#[test]
fn image_is_exact_concatenation_for_arbitrary_codes() {
    init_logging();
    let cases = [
        ("A", "S"),
        ("10", "spades"),
        ("X", ""),
        ("", "D"),
        ("ä", "♠"),
        ("a b", "?c"),
    ];

    let mut state = CardState::new();
    for (value, suit) in cases {
        state = set(state, value, suit);
        let expected = format!("{CARD_IMAGE_BASE_URL}{value}{suit}.png");
        assert_eq!(state.card_image(), expected);
        assert_eq!(card_image_url(value, suit), expected);
    }
}

#[test]
fn standard_codes_produce_parseable_urls() {
    init_logging();
    let mut state = CardState::new();
    for value in ["A", "2", "3", "4", "5", "6", "7", "8", "9", "0", "J", "Q", "K"] {
        for suit in ["S", "D", "C", "H"] {
            state = set(state, value, suit);
            let url = Url::parse(state.card_image()).expect("card image url");
            assert_eq!(url.scheme(), "https");
            assert_eq!(url.host_str(), Some("deckofcardsapi.com"));
            assert_eq!(url.path(), format!("/static/img/{value}{suit}.png"));
        }
    }
}
