use rand::seq::SliceRandom;
use rand::Rng;

use super::card::{DrawnCard, Orientation, TarotCard};
use super::catalog::STANDARD_DECK;
use crate::error::DeckError;

/// Cards in a standard spread.
pub const DEFAULT_SPREAD: usize = 3;

pub fn find(name: &str) -> Result<&'static TarotCard, DeckError> {
    STANDARD_DECK
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| DeckError::UnknownCard(name.to_string()))
}

/// `size` distinct cards, each flipped independently with even odds.
pub fn draw_spread<R: Rng + ?Sized>(rng: &mut R, size: usize) -> Result<Vec<DrawnCard>, DeckError> {
    if size > STANDARD_DECK.len() {
        return Err(DeckError::SpreadTooLarge { requested: size, available: STANDARD_DECK.len() });
    }

    let picked: Vec<&'static TarotCard> = STANDARD_DECK.choose_multiple(rng, size).collect();
    Ok(picked
        .into_iter()
        .map(|card| DrawnCard {
            card,
            position: if rng.gen_bool(0.5) { Orientation::Upright } else { Orientation::Reversed },
        })
        .collect())
}
