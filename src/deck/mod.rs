pub mod card;
pub mod catalog;
pub mod draw;

pub use card::*;
pub use catalog::STANDARD_DECK;
pub use draw::*;
