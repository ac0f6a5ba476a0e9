// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::fs;
use tempfile::TempDir;
use yare::parameterized;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn defaults() {
    let config = Config::default();
    assert_eq!(config.bind, "127.0.0.1:3000".parse().unwrap());
    assert_eq!(config.database, PathBuf::from("trello-manager.db"));
    assert_eq!(config.base_path, "/trello-manager");
    assert_eq!(config.workers, 4);
    assert!(config.log_file.is_none());
}

#[test]
fn load_full_file() {
    let temp = TempDir::new().unwrap();
    let path = write_config(
        &temp,
        r#"
bind = "0.0.0.0:8080"
database = "/data/cards.db"
base_path = "/api"
workers = 2
log_file = "/tmp/tm.log"
"#,
    );

    let config = Config::load(&path).unwrap();
    assert_eq!(config.bind, "0.0.0.0:8080".parse().unwrap());
    assert_eq!(config.database, PathBuf::from("/data/cards.db"));
    assert_eq!(config.base_path, "/api");
    assert_eq!(config.workers, 2);
    assert_eq!(config.log_file, Some(PathBuf::from("/tmp/tm.log")));
}

#[test]
fn load_partial_file_keeps_defaults() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "workers = 1\n");

    let config = Config::load(&path).unwrap();
    assert_eq!(config.workers, 1);
    assert_eq!(config.base_path, "/trello-manager");
}

#[test]
fn load_rejects_unknown_keys() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "port = 3000\n");

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, Error::ParseConfig { .. }));
}

#[test]
fn load_missing_file() {
    let temp = TempDir::new().unwrap();
    let err = Config::load(&temp.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, Error::ReadConfig { .. }));
}

#[test]
fn overrides_win_over_file() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "workers = 2\nbase_path = \"/from-file\"\n");
    let overrides = Overrides {
        workers: Some(6),
        database: Some(PathBuf::from("override.db")),
        ..Overrides::default()
    };

    let config = Config::resolve(Some(&path), &overrides).unwrap();
    assert_eq!(config.workers, 6);
    assert_eq!(config.database, PathBuf::from("override.db"));
    assert_eq!(config.base_path, "/from-file");
}

#[test]
fn resolve_without_file_uses_defaults() {
    let config = Config::resolve(None, &Overrides::default()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn zero_workers_is_invalid() {
    let overrides = Overrides {
        workers: Some(0),
        ..Overrides::default()
    };
    let err = Config::resolve(None, &overrides).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
}

#[test]
fn base_path_with_query_is_invalid() {
    let overrides = Overrides {
        base_path: Some("/cards?x=1".into()),
        ..Overrides::default()
    };
    assert!(Config::resolve(None, &overrides).is_err());
}

#[parameterized(
    plain = { "/trello-manager", "/trello-manager" },
    no_leading = { "trello-manager", "/trello-manager" },
    trailing = { "/trello-manager/", "/trello-manager" },
    nested = { "api/v1/", "/api/v1" },
    root = { "/", "" },
    empty = { "", "" },
)]
fn base_path_normalization(raw: &str, expected: &str) {
    assert_eq!(normalize_base_path(raw), expected);
}
