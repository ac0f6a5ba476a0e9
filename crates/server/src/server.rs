// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tiny_http server adapter.
//!
//! A fixed pool of worker threads pulls requests off one listener, reads the
//! body, hands it to the [`Router`] and writes the [`Reply`] back.

use std::io::{Cursor, Read as _};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tiny_http::{Header, Request, Response, Server, StatusCode};
use tracing::{debug, info, warn};

use tm_core::CardRepository;

use crate::api::ApiError;
use crate::error::{Error, Result};
use crate::router::{Reply, Router};

/// Request bodies larger than this are rejected.
pub const MAX_BODY_BYTES: u64 = 1024 * 1024;

/// A running server.
pub struct ServerHandle {
    addr: SocketAddr,
    server: Arc<Server>,
    stopping: Arc<AtomicBool>,
    workers: Vec<JoinHandle<()>>,
}

/// Bind `addr` and start `workers` threads serving `router`.
///
/// Port 0 binds an ephemeral port; see [`ServerHandle::local_addr`].
pub fn spawn<R>(addr: SocketAddr, workers: usize, router: Router<R>) -> Result<ServerHandle>
where
    R: CardRepository + Send + 'static,
{
    let server = Server::http(addr).map_err(|e| Error::Bind {
        addr,
        message: e.to_string(),
    })?;
    let local = server.server_addr().to_ip().unwrap_or(addr);

    let server = Arc::new(server);
    let router = Arc::new(router);
    let stopping = Arc::new(AtomicBool::new(false));

    let mut handles = Vec::with_capacity(workers);
    for n in 0..workers.max(1) {
        let server = Arc::clone(&server);
        let router = Arc::clone(&router);
        let stopping = Arc::clone(&stopping);
        let handle = thread::Builder::new()
            .name(format!("http-worker-{n}"))
            .spawn(move || worker_loop(&server, &router, &stopping))?;
        handles.push(handle);
    }

    info!(addr = %local, workers = handles.len(), "listening");
    Ok(ServerHandle {
        addr: local,
        server,
        stopping,
        workers: handles,
    })
}

impl ServerHandle {
    /// The address the listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Block until every worker exits.
    pub fn wait(self) {
        for worker in self.workers {
            if worker.join().is_err() {
                warn!("worker thread panicked");
            }
        }
    }

    /// Stop accepting requests and wait for in-flight ones to finish.
    pub fn shutdown(self) {
        self.stopping.store(true, Ordering::SeqCst);
        for _ in &self.workers {
            self.server.unblock();
        }
        info!("shutting down");
        self.wait();
    }
}

fn worker_loop<R: CardRepository>(server: &Server, router: &Router<R>, stopping: &AtomicBool) {
    loop {
        match server.recv() {
            Ok(request) => {
                if stopping.load(Ordering::SeqCst) {
                    let _ = request.respond(Response::empty(StatusCode(503)));
                    break;
                }
                handle(router, request);
            }
            Err(e) => {
                if stopping.load(Ordering::SeqCst) {
                    break;
                }
                warn!(error = %e, "failed to receive request");
            }
        }
    }
    debug!("worker exiting");
}

fn handle<R: CardRepository>(router: &Router<R>, mut request: Request) {
    let started = Instant::now();
    let method = request.method().clone();
    let url = request.url().to_string();

    let reply = match read_body(&mut request) {
        Ok(body) => router.route(&method, &url, &body),
        Err(e) => Reply::error(&e),
    };

    info!(
        %method,
        path = %url,
        status = reply.status,
        elapsed_ms = millis(started.elapsed()),
        "request"
    );

    if let Err(e) = request.respond(to_response(reply)) {
        warn!(error = %e, "failed to write response");
    }
}

/// Read the request body as UTF-8 text.
fn read_body(request: &mut Request) -> std::result::Result<String, ApiError> {
    let mut bytes = Vec::new();
    request
        .as_reader()
        .take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut bytes)
        .map_err(|e| ApiError::bad_request(format!("Failed to read request body: {e}")))?;
    if bytes.len() as u64 > MAX_BODY_BYTES {
        return Err(ApiError::bad_request("Request body too large"));
    }
    String::from_utf8(bytes).map_err(|_| ApiError::bad_request("Request body must be valid UTF-8"))
}

/// Whole milliseconds in `d`, saturating at `u64::MAX`.
fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

fn to_response(reply: Reply) -> Response<Cursor<Vec<u8>>> {
    let response =
        Response::from_data(reply.body.into_bytes()).with_status_code(StatusCode(reply.status));
    match Header::from_bytes(&b"Content-Type"[..], &b"application/json; charset=utf-8"[..]) {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;
