//! Delivery subsystem — serialized sends with selective retries.

pub mod deliverer;
pub mod endpoint;

pub use deliverer::Deliverer;
pub use endpoint::{Endpoint, TelegramEndpoint};
