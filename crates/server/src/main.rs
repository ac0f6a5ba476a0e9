// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! trello-manager - REST service for issue, task and bug cards.
//!
//! Usage:
//!   trello-manager [--config <file>] [--bind <addr>] [--database <file>]

use clap::Parser;
use tracing::{error, info};

use tm_core::{CardService, CardType, Database};
use tm_server::cli::Args;
use tm_server::logging::setup_logging;
use tm_server::{server, Config, Result, Router};

fn main() {
    let args = Args::parse();

    let config = match Config::resolve(args.config.as_deref(), &args.overrides()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("trello-manager: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = setup_logging(config.log_file.as_deref()) {
        eprintln!("trello-manager: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(&config) {
        error!("{}", e);
        eprintln!("trello-manager: {e}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    info!(
        bind = %config.bind,
        database = %config.database.display(),
        base_path = %config.base_path,
        workers = config.workers,
        "trello-manager starting"
    );

    let db = Database::open(&config.database)?;
    for card_type in CardType::ALL {
        let table = card_type.table();
        info!(table = table.name(), rows = db.count(table)?, "opened table");
    }

    let router = Router::new(CardService::new(db), config.base_path.clone());
    let handle = server::spawn(config.bind, config.workers, router)?;
    info!("serving http://{}{}/", handle.local_addr(), config.base_path);
    handle.wait();
    Ok(())
}
