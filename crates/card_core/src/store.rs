//! Owned card image store with change subscriptions.
//!
//! One store is created per application session and handed to whatever needs
//! it. Mutations run through [`update`] and, when the image actually changed,
//! every subscriber is called synchronously before the mutation returns.

use card_logging::{card_debug, card_trace};

use crate::{update, CardState, CardViewModel, Msg, STORE_ID};

/// Handle returned by [`CardImageStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&CardViewModel)>;

#[derive(Default)]
pub struct CardImageStore {
    state: CardState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl CardImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn card_image(&self) -> &str {
        self.state.card_image()
    }

    pub fn view(&self) -> CardViewModel {
        self.state.view()
    }

    pub fn set_card_image(&mut self, card_value: &str, card_suit: &str) {
        self.dispatch(Msg::set_card_image(card_value, card_suit));
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let mut state = update(std::mem::take(&mut self.state), msg);
        let view = state.view();
        let changed = state.consume_dirty();
        self.state = state;

        if changed {
            card_trace!("{STORE_ID}: card image is now {:?}", view.card_image);
            for (_, subscriber) in &mut self.subscribers {
                subscriber(&view);
            }
        }
    }

    /// Registers `callback` to run after every change of the card image.
    /// Callbacks run in registration order.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&CardViewModel) + 'static,
    {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.subscribers.push((id, Box::new(callback)));
        card_debug!("{STORE_ID}: added subscriber {id:?}");
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        let removed = self.subscribers.len() != before;
        if removed {
            card_debug!("{STORE_ID}: removed subscriber {id:?}");
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl std::fmt::Debug for CardImageStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardImageStore")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
