// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed database for card storage.
//!
//! The [`Database`] struct implements [`CardRepository`] over one table per
//! card type.

use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use tracing::debug;

use crate::card::{BugCard, Card, CardTable, Category, IssueCard, NewCard, TaskCard};
use crate::error::{Error, Result};
use crate::repo::CardRepository;

/// SQL schema for the card tables.
pub const SCHEMA: &str = r#"
-- Ids are never reused: AUTOINCREMENT keeps deleted ids retired
CREATE TABLE IF NOT EXISTS IssueCard (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL CHECK (title != ''),
    description TEXT NOT NULL CHECK (description != '')
);

CREATE TABLE IF NOT EXISTS TaskCard (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL CHECK (title != ''),
    category TEXT NOT NULL CHECK (category IN ('maintenance', 'research', 'test'))
);

CREATE TABLE IF NOT EXISTS BugCard (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL CHECK (title != ''),
    description TEXT NOT NULL CHECK (description != '')
);
"#;

/// Parse a string value from the database, returning a rusqlite error on parse failure.
fn parse_db<T: std::str::FromStr>(
    value: &str,
    column: &str,
) -> std::result::Result<T, rusqlite::Error> {
    value.parse().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(Error::CorruptedData(format!(
                "invalid value '{value}' in column '{column}'"
            ))),
        )
    })
}

/// Run schema creation on a database connection.
///
/// Idempotent; safe to call on every open.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// Column list selected for every row of `table`.
fn columns(table: CardTable) -> &'static str {
    match table {
        CardTable::IssueCard | CardTable::BugCard => "id, title, description",
        CardTable::TaskCard => "id, title, category",
    }
}

/// Map a row selected with [`columns`] to a card.
fn row_to_card(table: CardTable, row: &Row<'_>) -> std::result::Result<Card, rusqlite::Error> {
    let id: i64 = row.get(0)?;
    let title: String = row.get(1)?;
    Ok(match table {
        CardTable::IssueCard => Card::Issue(IssueCard {
            id,
            title,
            description: row.get(2)?,
        }),
        CardTable::TaskCard => {
            let category: String = row.get(2)?;
            Card::Task(TaskCard {
                id,
                title,
                category: parse_db::<Category>(&category, "category")?,
            })
        }
        CardTable::BugCard => Card::Bug(BugCard {
            id,
            title,
            description: row.get(2)?,
        }),
    })
}

/// SQLite database connection with card operations.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open a database connection at the given path, creating and migrating if needed.
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;

        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Count the rows of a table.
    pub fn count(&self, table: CardTable) -> Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", table.name());
        let count = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count)
    }

    fn select_by_id(&self, table: CardTable, id: i64) -> Result<Option<Card>> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = ?1",
            columns(table),
            table.name()
        );
        let card = self
            .conn
            .query_row(&sql, params![id], |row| row_to_card(table, row))
            .optional()?;
        Ok(card)
    }
}

impl CardRepository for Database {
    fn create(&self, card: NewCard) -> Result<Card> {
        let table = card.table();
        match &card {
            NewCard::Issue { title, description } | NewCard::Bug { title, description } => {
                let sql = format!(
                    "INSERT INTO {} (title, description) VALUES (?1, ?2)",
                    table.name()
                );
                self.conn.execute(&sql, params![title, description])?;
            }
            NewCard::Task { title, category } => {
                self.conn.execute(
                    "INSERT INTO TaskCard (title, category) VALUES (?1, ?2)",
                    params![title, category.as_str()],
                )?;
            }
        }
        let id = self.conn.last_insert_rowid();
        debug!(table = table.name(), id, "inserted card");
        Ok(card.with_id(id))
    }

    fn find_many(&self, table: CardTable) -> Result<Vec<Card>> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY id",
            columns(table),
            table.name()
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let cards = stmt
            .query_map([], |row| row_to_card(table, row))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(cards)
    }

    fn find_unique(&self, table: CardTable, id: i64) -> Result<Option<Card>> {
        self.select_by_id(table, id)
    }

    fn delete(&self, table: CardTable, id: i64) -> Result<Option<Card>> {
        let tx = self.conn.unchecked_transaction()?;
        let Some(card) = self.select_by_id(table, id)? else {
            return Ok(None);
        };
        let sql = format!("DELETE FROM {} WHERE id = ?1", table.name());
        let affected = tx.execute(&sql, params![id])?;
        tx.commit()?;

        if affected == 0 {
            return Ok(None);
        }
        debug!(table = table.name(), id, "deleted card");
        Ok(Some(card))
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
