// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::unwrap_used)]

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use serde_json::{json, Value};
pub use tempfile::TempDir;

use tm_core::{CardService, Database};
use tm_server::{Router, ServerHandle};

pub const BASE: &str = "/trello-manager";

pub fn trello_manager() -> Command {
    cargo_bin_cmd!("trello-manager")
}

/// A server on an ephemeral port. Shuts down on drop.
pub struct TestServer {
    handle: Option<ServerHandle>,
    pub addr: SocketAddr,
}

impl TestServer {
    /// Serve the database at `path`, creating it if needed.
    pub fn start(path: &Path) -> Self {
        let db = Database::open(path).unwrap();
        let router = Router::new(CardService::new(db), BASE);
        let handle = tm_server::spawn("127.0.0.1:0".parse().unwrap(), 2, router).unwrap();
        TestServer {
            addr: handle.local_addr(),
            handle: Some(handle),
        }
    }

    pub fn get(&self, path: &str) -> (u16, Value) {
        self.request("GET", path, None)
    }

    pub fn post(&self, body: &Value) -> (u16, Value) {
        self.request("POST", "", Some(&body.to_string()))
    }

    pub fn delete(&self, path: &str) -> (u16, Value) {
        self.request("DELETE", path, None)
    }

    /// Send one request under the base path and parse the JSON reply.
    pub fn request(&self, method: &str, path: &str, body: Option<&str>) -> (u16, Value) {
        let (status, text) = self.raw(method, &format!("{BASE}{path}"), body.unwrap_or(""));
        (status, serde_json::from_str(&text).unwrap())
    }

    /// Send one request and return the status code and raw body.
    pub fn raw(&self, method: &str, url: &str, body: &str) -> (u16, String) {
        let head = format!(
            "{method} {url} HTTP/1.1\r\n\
             Host: {addr}\r\n\
             Connection: close\r\n\
             Content-Type: application/json\r\n\
             Content-Length: {len}\r\n\
             \r\n",
            addr = self.addr,
            len = body.len(),
        );
        let mut bytes = head.into_bytes();
        bytes.extend_from_slice(body.as_bytes());

        let response = self.send_bytes(&bytes);
        let status = response
            .split_whitespace()
            .nth(1)
            .unwrap()
            .parse()
            .unwrap();
        let (_, body) = response.split_once("\r\n\r\n").unwrap();
        (status, body.to_string())
    }

    /// Write `bytes` as-is and return the full response text.
    pub fn send_bytes(&self, bytes: &[u8]) -> String {
        let mut stream = TcpStream::connect(self.addr).unwrap();
        stream.write_all(bytes).unwrap();
        let mut response = String::new();
        stream.read_to_string(&mut response).unwrap();
        response
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.shutdown();
        }
    }
}

/// A fresh server over a database in a new temp directory.
pub fn start_temp() -> (TempDir, TestServer) {
    let dir = TempDir::new().unwrap();
    let server = TestServer::start(&dir.path().join("cards.db"));
    (dir, server)
}
