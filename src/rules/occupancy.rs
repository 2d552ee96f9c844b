//! Camels keep tiles off the field they stand on, and only that field.

use super::rule::PlacementRule;
use crate::core::{BoardSnapshot, Field, Token};

/// Check whether a camel stands exactly on `field`.
pub fn is_occupied_by_token<'a>(field: Field, tokens: impl IntoIterator<Item = &'a Token>) -> bool {
    tokens.into_iter().any(|token| token.position == field)
}

/// Rule form of [`is_occupied_by_token`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OccupancyRule;

impl PlacementRule for OccupancyRule {
    fn name(&self) -> &'static str {
        "camel"
    }

    fn excludes(&self, field: Field, board: &BoardSnapshot) -> bool {
        is_occupied_by_token(field, &board.tokens)
    }
}
