mod contacts;
mod health;
mod subscriptions;

pub use contacts::{admin_contacts, list_contacts};
pub use health::check_health;
pub use subscriptions::subscribe;
