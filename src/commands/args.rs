//! Argument parsing shared by the handlers.
//!
//! Two-token commands split on a single literal space, so `"1  draw"` is
//! three tokens and rejected. Pile paths and ids never contain spaces.

use smallvec::SmallVec;

use crate::core::entity::CardId;
use crate::core::error::DeckError;

use super::invocation::Invocation;

/// The whole argument string, which must be present.
pub fn required<'a>(invocation: &Invocation<'a>) -> Result<&'a str, DeckError> {
    invocation
        .args
        .ok_or_else(|| DeckError::MalformedArgument("missing argument".to_string()))
}

/// A single card id.
pub fn card_id(invocation: &Invocation<'_>) -> Result<CardId, DeckError> {
    required(invocation)?.parse()
}

/// Exactly two space-separated tokens.
pub fn pair<'a>(invocation: &Invocation<'a>) -> Result<(&'a str, &'a str), DeckError> {
    let args = required(invocation)?;
    let tokens: SmallVec<[&str; 2]> = args.split(' ').collect();
    match tokens.as_slice() {
        [first, second] => Ok((*first, *second)),
        _ => Err(DeckError::MalformedArgument(format!(
            "expected two arguments, got {:?}",
            args
        ))),
    }
}
