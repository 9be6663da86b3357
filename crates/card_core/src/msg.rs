#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Show the card with this value and suit code, e.g. `"A"` and `"S"`.
    SetCardImage {
        card_value: String,
        card_suit: String,
    },
    /// Leaves the state unchanged and notifies no subscriber.
    NoOp,
}

impl Msg {
    pub fn set_card_image(card_value: impl Into<String>, card_suit: impl Into<String>) -> Self {
        Msg::SetCardImage {
            card_value: card_value.into(),
            card_suit: card_suit.into(),
        }
    }
}
