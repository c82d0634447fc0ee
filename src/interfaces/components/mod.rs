pub mod card;
pub mod crypto_picker;
pub mod language_selector;
pub mod notifications;

pub use card::Card;
pub use notifications::NotificationCenter;
