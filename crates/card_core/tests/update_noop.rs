use card_core::{update, CardState, Msg};

#[test]
fn update_is_noop() {
    let state = CardState::new();
    let next = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert_eq!(next.card_image(), "");
}
