//! Card core: the card image state, its pure update function, and an owned
//! store that notifies subscribers when the image changes.
mod msg;
mod state;
mod store;
mod update;
mod view_model;

pub use msg::Msg;
pub use state::{card_image_url, CardState, CARD_IMAGE_BASE_URL, STORE_ID};
pub use store::{CardImageStore, SubscriptionId};
pub use update::update;
pub use view_model::CardViewModel;
