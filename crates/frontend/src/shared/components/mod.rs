pub mod card_animated;
pub mod stat_card;

pub use card_animated::CardAnimated;
pub use stat_card::StatCard;
