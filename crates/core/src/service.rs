// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Card service: type dispatch over the card repository.
//!
//! Route segments arrive already validated ([`CardType`], [`CardId`]).
//! Creation payloads are validated here against the per-type required-field
//! table before the repository is called.

use tracing::{debug, info};

use crate::card::{Card, CardType, Field, NewCard};
use crate::error::{Error, Result};
use crate::repo::CardRepository;
use crate::title::random_bug_title;
use crate::validate::{CardId, CreateCard};

/// Creates, reads and deletes cards of every type.
pub struct CardService<R> {
    repo: R,
}

impl<R: CardRepository> CardService<R> {
    pub fn new(repo: R) -> Self {
        CardService { repo }
    }

    /// Creates a card of the type named in the payload.
    pub fn create_card(&self, req: &CreateCard) -> Result<Card> {
        let card_type = req.card_type()?;
        req.check_required(card_type)?;

        let new = match card_type {
            CardType::Issue => NewCard::Issue {
                title: required(req, Field::Title)?,
                description: required(req, Field::Description)?,
            },
            CardType::Task => NewCard::Task {
                title: required(req, Field::Title)?,
                category: req.category.ok_or_else(|| missing(Field::Category))?,
            },
            CardType::Bug => NewCard::Bug {
                title: random_bug_title(&mut rand::thread_rng()),
                description: required(req, Field::Description)?,
            },
        };

        let card = self.repo.create(new)?;
        info!(card_type = %card_type, id = card.id(), "created card");
        Ok(card)
    }

    /// Lists every card of `card_type`.
    pub fn get_cards(&self, card_type: CardType) -> Result<Vec<Card>> {
        let cards = self.repo.find_many(card_type.table())?;
        debug!(card_type = %card_type, count = cards.len(), "listed cards");
        Ok(cards)
    }

    /// Returns the card of `card_type` with the given id.
    pub fn get_card(&self, card_type: CardType, id: &CardId) -> Result<Card> {
        let found = match id.row_id() {
            Some(row_id) => self.repo.find_unique(card_type.table(), row_id)?,
            None => None,
        };
        found.ok_or_else(|| not_found(card_type, id))
    }

    /// Deletes the card of `card_type` with the given id, returning it.
    pub fn delete_card(&self, card_type: CardType, id: &CardId) -> Result<Card> {
        let deleted = match id.row_id() {
            Some(row_id) => self.repo.delete(card_type.table(), row_id)?,
            None => None,
        };
        let card = deleted.ok_or_else(|| not_found(card_type, id))?;
        info!(card_type = %card_type, id = card.id(), "deleted card");
        Ok(card)
    }
}

fn required(req: &CreateCard, field: Field) -> Result<String> {
    req.field(field)
        .map(str::to_string)
        .ok_or_else(|| missing(field))
}

fn missing(field: Field) -> Error {
    Error::InvalidInput(format!("{} is required", field.as_str()))
}

fn not_found(card_type: CardType, id: &CardId) -> Error {
    Error::CardNotFound {
        card_type,
        id: id.to_string(),
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
