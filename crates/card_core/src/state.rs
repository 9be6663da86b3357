use crate::view_model::CardViewModel;

/// Identifier of the card store, used in log lines.
pub const STORE_ID: &str = "card";

/// Every card image lives under this prefix.
pub const CARD_IMAGE_BASE_URL: &str = "https://deckofcardsapi.com/static/img/";

/// Builds `{CARD_IMAGE_BASE_URL}{card_value}{card_suit}.png`.
///
/// Inputs are neither validated nor escaped; unexpected codes produce an
/// image URL the remote host will not serve.
pub fn card_image_url(card_value: &str, card_suit: &str) -> String {
    format!("{CARD_IMAGE_BASE_URL}{card_value}{card_suit}.png")
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardState {
    card_image: String,
    dirty: bool,
}

impl CardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn card_image(&self) -> &str {
        &self.card_image
    }

    pub fn view(&self) -> CardViewModel {
        CardViewModel {
            card_image: self.card_image.clone(),
            dirty: self.dirty,
        }
    }

    pub fn set_card_image(&mut self, card_value: &str, card_suit: &str) {
        let next = card_image_url(card_value, card_suit);
        if next != self.card_image {
            self.card_image = next;
            self.dirty = true;
        }
    }

    /// Returns whether the image changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
