// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::config::Overrides;

/// trello-manager: REST service for issue, task and bug cards
#[derive(Parser, Debug)]
#[command(name = "trello-manager", version)]
#[command(about = "REST service for issue, task and bug cards")]
pub struct Args {
    /// TOML configuration file
    #[arg(short, long, env = "TRELLO_MANAGER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to bind the server to [default: 127.0.0.1:3000]
    #[arg(short, long, env = "TRELLO_MANAGER_BIND")]
    pub bind: Option<SocketAddr>,

    /// SQLite database file [default: trello-manager.db]
    #[arg(short, long, env = "TRELLO_MANAGER_DATABASE")]
    pub database: Option<PathBuf>,

    /// Route prefix for all endpoints [default: /trello-manager]
    #[arg(long, env = "TRELLO_MANAGER_BASE_PATH")]
    pub base_path: Option<String>,

    /// Number of request-handling threads [default: 4]
    #[arg(short, long, env = "TRELLO_MANAGER_WORKERS")]
    pub workers: Option<usize>,

    /// Write logs to this file instead of stderr
    #[arg(long, env = "TRELLO_MANAGER_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Values that take precedence over the config file.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            bind: self.bind,
            database: self.database.clone(),
            base_path: self.base_path.clone(),
            workers: self.workers,
            log_file: self.log_file.clone(),
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
