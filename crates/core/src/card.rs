// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core card types for the trello-manager service.
//!
//! This module contains the fundamental data types: CardType, CardTable,
//! Category, the three persisted card shapes, and the [`Card`] union over them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Classification of cards. Each type is persisted in its own table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    /// A problem report with a free-form description.
    Issue,
    /// A unit of work filed under a category.
    Task,
    /// A defect; its title is generated by the service.
    Bug,
}

impl CardType {
    /// All card types, in declaration order.
    pub const ALL: [CardType; 3] = [CardType::Issue, CardType::Task, CardType::Bug];

    /// Returns the string representation used in routes and payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::Issue => "issue",
            CardType::Task => "task",
            CardType::Bug => "bug",
        }
    }

    /// Returns the table holding cards of this type.
    pub fn table(&self) -> CardTable {
        match self {
            CardType::Issue => CardTable::IssueCard,
            CardType::Task => CardTable::TaskCard,
            CardType::Bug => CardTable::BugCard,
        }
    }

    /// Fields a client must supply (non-empty) when creating a card of this type.
    pub fn required_fields(&self) -> &'static [Field] {
        match self {
            CardType::Issue => &[Field::Title, Field::Description],
            CardType::Task => &[Field::Title, Field::Category],
            CardType::Bug => &[Field::Description],
        }
    }

    /// Message reported when any of [`required_fields`](Self::required_fields) is absent.
    pub fn missing_fields_message(&self) -> &'static str {
        match self {
            CardType::Issue => "Title and description are required",
            CardType::Task => "Title and category are required",
            CardType::Bug => "Description is required",
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Case-sensitive: only the exact lowercase names are accepted.
impl FromStr for CardType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "issue" => Ok(CardType::Issue),
            "task" => Ok(CardType::Task),
            "bug" => Ok(CardType::Bug),
            _ => Err(Error::InvalidCardType(s.to_string())),
        }
    }
}

/// Identity of a type-qualified table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardTable {
    IssueCard,
    TaskCard,
    BugCard,
}

impl CardTable {
    /// Returns the SQL table name.
    pub fn name(&self) -> &'static str {
        match self {
            CardTable::IssueCard => "IssueCard",
            CardTable::TaskCard => "TaskCard",
            CardTable::BugCard => "BugCard",
        }
    }

    /// Returns the card type stored in this table.
    pub fn card_type(&self) -> CardType {
        match self {
            CardTable::IssueCard => CardType::Issue,
            CardTable::TaskCard => CardType::Task,
            CardTable::BugCard => CardType::Bug,
        }
    }
}

impl fmt::Display for CardTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Client-supplied fields of a creation payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
    Category,
}

impl Field {
    /// Returns the payload property name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Category => "category",
        }
    }
}

/// Category of a task card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Maintenance,
    Research,
    Test,
}

impl Category {
    /// Returns the string representation used in storage and payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Maintenance => "maintenance",
            Category::Research => "research",
            Category::Test => "test",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "maintenance" => Ok(Category::Maintenance),
            "research" => Ok(Category::Research),
            "test" => Ok(Category::Test),
            _ => Err(Error::InvalidCategory(s.to_string())),
        }
    }
}

/// A row of the `IssueCard` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCard {
    pub id: i64,
    pub title: String,
    pub description: String,
}

/// A row of the `TaskCard` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCard {
    pub id: i64,
    pub title: String,
    pub category: Category,
}

/// A row of the `BugCard` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugCard {
    pub id: i64,
    pub title: String,
    pub description: String,
}

/// A persisted card of any type.
///
/// Serializes as the bare row, without a type tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Card {
    Issue(IssueCard),
    Task(TaskCard),
    Bug(BugCard),
}

impl Card {
    /// Returns the row id.
    pub fn id(&self) -> i64 {
        match self {
            Card::Issue(c) => c.id,
            Card::Task(c) => c.id,
            Card::Bug(c) => c.id,
        }
    }

    /// Returns the card title.
    pub fn title(&self) -> &str {
        match self {
            Card::Issue(c) => &c.title,
            Card::Task(c) => &c.title,
            Card::Bug(c) => &c.title,
        }
    }

    pub fn card_type(&self) -> CardType {
        match self {
            Card::Issue(_) => CardType::Issue,
            Card::Task(_) => CardType::Task,
            Card::Bug(_) => CardType::Bug,
        }
    }
}

/// A validated card ready to be inserted; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewCard {
    Issue { title: String, description: String },
    Task { title: String, category: Category },
    Bug { title: String, description: String },
}

impl NewCard {
    /// Returns the table this card is inserted into.
    pub fn table(&self) -> CardTable {
        match self {
            NewCard::Issue { .. } => CardTable::IssueCard,
            NewCard::Task { .. } => CardTable::TaskCard,
            NewCard::Bug { .. } => CardTable::BugCard,
        }
    }

    /// Attaches the store-assigned id, producing the persisted row.
    pub fn with_id(self, id: i64) -> Card {
        match self {
            NewCard::Issue { title, description } => Card::Issue(IssueCard {
                id,
                title,
                description,
            }),
            NewCard::Task { title, category } => Card::Task(TaskCard {
                id,
                title,
                category,
            }),
            NewCard::Bug { title, description } => Card::Bug(BugCard {
                id,
                title,
                description,
            }),
        }
    }
}

#[cfg(test)]
#[path = "card_tests.rs"]
mod tests;
