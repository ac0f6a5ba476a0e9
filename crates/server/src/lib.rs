// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! trello-manager HTTP server.
//!
//! Serves the card endpoints from [`tm_core`] over HTTP/1.1 using a small
//! pool of `tiny_http` worker threads.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod router;
pub mod server;

pub use api::{ApiError, ErrorCode};
pub use config::Config;
pub use error::{Error, Result};
pub use router::{Reply, Router};
pub use server::{spawn, ServerHandle};
