// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop the server from starting.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read config {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to bind {addr}: {message}")]
    Bind { addr: SocketAddr, message: String },

    #[error("failed to set up logging: {0}")]
    Logging(String),

    #[error(transparent)]
    Core(#[from] tm_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for server startup.
pub type Result<T> = std::result::Result<T, Error>;
