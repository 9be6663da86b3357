use crate::{CardState, Msg};

/// Pure update function: applies a message to state.
pub fn update(mut state: CardState, msg: Msg) -> CardState {
    match msg {
        Msg::SetCardImage {
            card_value,
            card_suit,
        } => state.set_card_image(&card_value, &card_suit),
        Msg::NoOp => {}
    }
    state
}
