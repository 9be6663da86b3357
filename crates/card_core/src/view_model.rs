#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardViewModel {
    /// Image URL for the `src` of the card element; empty until a card is set.
    pub card_image: String,
    /// Render-coalescing hint: `true` when this snapshot was taken after a
    /// change that has not been rendered yet. Subscribers of
    /// [`CardImageStore`](crate::CardImageStore) always receive `true`; a view
    /// read from the store afterwards reports `false`.
    pub dirty: bool,
}

impl CardViewModel {
    pub fn has_card(&self) -> bool {
        !self.card_image.is_empty()
    }
}
