// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Request routing.
//!
//! Maps a method and URL to a [`CardService`] call and renders the result as
//! a status code plus JSON body. Nothing here touches sockets; the
//! `tiny_http` adapter in [`crate::server`] feeds requests in and writes
//! [`Reply`] values out.
//!
//! Routes, relative to the configured base path:
//!
//! | Method | Path         | Success                 |
//! |--------|--------------|-------------------------|
//! | POST   | `/`          | 201, created card       |
//! | GET    | `/:type`     | 200, array of cards     |
//! | GET    | `/:type/:id` | 200, card               |
//! | DELETE | `/:type/:id` | 200, deleted card       |

use std::sync::{Mutex, MutexGuard};

use serde::Serialize;
use tiny_http::Method;
use tracing::debug;

use tm_core::{validate_card_type, validate_id, CardRepository, CardService, CreateCard};

use crate::api::ApiError;

/// A rendered HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    /// Serialize `data` as the response body.
    pub fn json<T: Serialize>(status: u16, data: &T) -> Self {
        match serde_json::to_string(data) {
            Ok(body) => Reply { status, body },
            Err(e) => Reply::error(&ApiError::internal(format!(
                "Failed to serialize response: {e}"
            ))),
        }
    }

    /// Render an error with its status code.
    pub fn error(err: &ApiError) -> Self {
        let body = serde_json::to_string(&err.body()).unwrap_or_else(|_| {
            format!(r#"{{"statusCode":{}}}"#, err.status_code())
        });
        Reply {
            status: err.status_code(),
            body,
        }
    }
}

/// Routes requests under a base path to the card service.
pub struct Router<R> {
    service: Mutex<CardService<R>>,
    base_path: String,
}

impl<R: CardRepository> Router<R> {
    /// `base_path` must already be normalized (see [`crate::config::normalize_base_path`]).
    pub fn new(service: CardService<R>, base_path: impl Into<String>) -> Self {
        Router {
            service: Mutex::new(service),
            base_path: base_path.into(),
        }
    }

    /// Handle one request. `body` is ignored by routes that take none.
    pub fn route(&self, method: &Method, url: &str, body: &str) -> Reply {
        let path = url.split('?').next().unwrap_or_default();

        let Some(segments) = self.segments(path) else {
            return Reply::error(&unmatched(method, path));
        };
        debug!(%method, ?segments, "routing");

        let result = match (method, segments.as_slice()) {
            (Method::Post, []) => self.create(body),
            (Method::Get, [card_type]) => self.list(card_type),
            (Method::Get, [card_type, id]) => self.show(card_type, id),
            (Method::Delete, [card_type, id]) => self.delete(card_type, id),
            _ => Err(unmatched(method, path)),
        };

        match result {
            Ok(reply) => reply,
            Err(err) => Reply::error(&err),
        }
    }

    /// Split the part of `path` below the base path into segments.
    ///
    /// Returns `None` when `path` is outside the base path.
    fn segments<'a>(&self, path: &'a str) -> Option<Vec<&'a str>> {
        let rest = path.strip_prefix(self.base_path.as_str())?;
        if !rest.is_empty() && !rest.starts_with('/') {
            return None;
        }
        let rest = rest.trim_matches('/');
        if rest.is_empty() {
            return Some(Vec::new());
        }
        Some(rest.split('/').collect())
    }

    fn create(&self, body: &str) -> Result<Reply, ApiError> {
        let req = CreateCard::from_json(body)?;
        let card = self.service()?.create_card(&req)?;
        Ok(Reply::json(201, &card))
    }

    fn list(&self, card_type: &str) -> Result<Reply, ApiError> {
        let card_type = validate_card_type(card_type)?;
        let cards = self.service()?.get_cards(card_type)?;
        Ok(Reply::json(200, &cards))
    }

    fn show(&self, card_type: &str, id: &str) -> Result<Reply, ApiError> {
        let card_type = validate_card_type(card_type)?;
        let id = validate_id(id)?;
        let card = self.service()?.get_card(card_type, &id)?;
        Ok(Reply::json(200, &card))
    }

    fn delete(&self, card_type: &str, id: &str) -> Result<Reply, ApiError> {
        let card_type = validate_card_type(card_type)?;
        let id = validate_id(id)?;
        let card = self.service()?.delete_card(card_type, &id)?;
        Ok(Reply::json(200, &card))
    }

    fn service(&self) -> Result<MutexGuard<'_, CardService<R>>, ApiError> {
        self.service
            .lock()
            .map_err(|_| ApiError::internal("Internal server error"))
    }
}

fn unmatched(method: &Method, path: &str) -> ApiError {
    ApiError::not_found(format!("Cannot {method} {path}"))
}

#[cfg(test)]
#[path = "router_tests.rs"]
mod tests;
