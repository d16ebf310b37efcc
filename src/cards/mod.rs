//! Cards: identity-bearing tokens with a title and a location.
//!
//! Cards are created and destroyed only through `Deck`.

pub mod card;

pub use card::Card;
