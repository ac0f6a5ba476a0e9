// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tm-core: card model, validation and storage for trello-manager
//!
//! This crate provides the card types, route and payload validators, the
//! SQLite-backed repository, and the [`CardService`] that dispatches each
//! operation to the table of the requested card type.

pub mod card;
pub mod db;
pub mod error;
pub mod repo;
pub mod service;
pub mod title;
pub mod validate;

pub use card::{BugCard, Card, CardTable, CardType, Category, Field, IssueCard, NewCard, TaskCard};
pub use db::Database;
pub use error::{Error, ErrorKind, Result};
pub use repo::CardRepository;
pub use service::CardService;
pub use validate::{validate_card_type, validate_id, CardId, CreateCard};
