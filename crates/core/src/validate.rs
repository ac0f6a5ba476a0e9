// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Validation of route segments and creation payloads.
//!
//! Route validators run before any handler touches the store:
//! [`validate_card_type`] guards the `:type` segment and [`validate_id`]
//! guards the `:id` segment. [`CreateCard`] parses a request body and
//! [`CreateCard::check_required`] applies the per-type required-field table.

use std::fmt;

use serde_json::{Map, Value};

use crate::card::{CardType, Category, Field};
use crate::error::{Error, Result};

/// Validates a `:type` route segment against the closed set of card types.
pub fn validate_card_type(raw: &str) -> Result<CardType> {
    raw.parse()
}

/// Validates a `:id` route segment.
///
/// Any finite decimal number is accepted (surrounding whitespace ignored).
/// The raw text is kept; conversion to a row id happens at lookup time.
pub fn validate_id(raw: &str) -> Result<CardId> {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && !raw.trim().is_empty() => Ok(CardId {
            raw: raw.to_string(),
            value: n,
        }),
        _ => Err(Error::InvalidId(raw.to_string())),
    }
}

/// A numeric id taken from the route, not yet coerced to a row id.
#[derive(Debug, Clone, PartialEq)]
pub struct CardId {
    raw: String,
    value: f64,
}

impl CardId {
    /// Returns the text as it appeared in the route.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the row id this value addresses, if any.
    ///
    /// Fractional or out-of-range numbers address no row.
    pub fn row_id(&self) -> Option<i64> {
        let v = self.value;
        if v.fract() != 0.0 || v < i64::MIN as f64 || v >= i64::MAX as f64 {
            return None;
        }
        Some(v as i64)
    }
}

impl From<i64> for CardId {
    fn from(id: i64) -> Self {
        CardId {
            raw: id.to_string(),
            value: id as f64,
        }
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Body of a creation request.
///
/// `card_type` is kept as text so an unknown type surfaces as
/// [`Error::InvalidCardType`] rather than a deserialization failure.
/// `category` is checked on parse for every card type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateCard {
    pub card_type: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<Category>,
}

impl CreateCard {
    /// Parses a JSON request body.
    ///
    /// The body must be an object. Known properties must be strings when
    /// present; `null` counts as absent. Unknown properties are dropped.
    /// A present `category` must name a known [`Category`].
    pub fn from_json(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| Error::InvalidInput(format!("Invalid JSON: {e}")))?;
        let Value::Object(map) = value else {
            return Err(Error::InvalidInput(
                "Request body must be a JSON object".to_string(),
            ));
        };

        Ok(CreateCard {
            card_type: string_property(&map, "type")?,
            title: string_property(&map, Field::Title.as_str())?,
            description: string_property(&map, Field::Description.as_str())?,
            category: string_property(&map, Field::Category.as_str())?
                .map(|c| c.parse::<Category>())
                .transpose()?,
        })
    }

    /// Resolves the `type` property.
    pub fn card_type(&self) -> Result<CardType> {
        match self.card_type.as_deref() {
            Some(raw) => validate_card_type(raw),
            None => Err(Error::InvalidCardType(String::new())),
        }
    }

    /// Returns the value of `field`, treating empty text as absent.
    pub fn field(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Title => self.title.as_deref(),
            Field::Description => self.description.as_deref(),
            Field::Category => self.category.map(|c| c.as_str()),
        };
        value.filter(|s| !s.is_empty())
    }

    /// Fails unless every field required by `card_type` is present.
    pub fn check_required(&self, card_type: CardType) -> Result<()> {
        if card_type
            .required_fields()
            .iter()
            .all(|f| self.field(*f).is_some())
        {
            Ok(())
        } else {
            Err(Error::MissingFields(card_type.missing_fields_message()))
        }
    }
}

fn string_property(map: &Map<String, Value>, name: &str) -> Result<Option<String>> {
    match map.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(Error::InvalidInput(format!("{name} must be a string"))),
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
