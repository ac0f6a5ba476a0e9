// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Persistence capability used by the card service.

use crate::card::{Card, CardTable, NewCard};
use crate::error::Result;

/// Row-level operations on the type-qualified card tables.
///
/// A missing row is `Ok(None)`, never an error. `Err` is reserved for
/// store failures.
pub trait CardRepository {
    /// Inserts a card and returns the persisted row with its assigned id.
    fn create(&self, card: NewCard) -> Result<Card>;

    /// Returns every row of `table` in ascending id order.
    fn find_many(&self, table: CardTable) -> Result<Vec<Card>>;

    /// Returns the row of `table` with the given id.
    fn find_unique(&self, table: CardTable, id: i64) -> Result<Option<Card>>;

    /// Deletes the row of `table` with the given id, returning it.
    fn delete(&self, table: CardTable, id: i64) -> Result<Option<Card>>;
}

impl<R: CardRepository + ?Sized> CardRepository for &R {
    fn create(&self, card: NewCard) -> Result<Card> {
        (**self).create(card)
    }

    fn find_many(&self, table: CardTable) -> Result<Vec<Card>> {
        (**self).find_many(table)
    }

    fn find_unique(&self, table: CardTable, id: i64) -> Result<Option<Card>> {
        (**self).find_unique(table, id)
    }

    fn delete(&self, table: CardTable, id: i64) -> Result<Option<Card>> {
        (**self).delete(table, id)
    }
}
