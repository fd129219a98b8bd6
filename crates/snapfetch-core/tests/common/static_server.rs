//! Minimal HTTP/1.1 server for pipeline tests.
//!
//! Serves one static body with a configurable status, or stalls without
//! responding to exercise the fetch timeout. Listens on an ephemeral port
//! and answers connections until the test process exits.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Starts a server on an ephemeral port serving `body` with 200 OK.
/// Returns the base URL (e.g. "http://127.0.0.1:12345/").
pub fn start(body: Vec<u8>) -> String {
    start_with_status(body, 200)
}

/// Like `start`, but responds with the given status code.
pub fn start_with_status(body: Vec<u8>, status: u16) -> String {
    let listener = bind();
    let url = base_url(&listener);
    let body = Arc::new(body);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            thread::spawn(move || handle(stream, &body, status));
        }
    });
    url
}

/// Server that accepts connections and reads the request but never answers.
pub fn start_stalled() -> String {
    let listener = bind();
    let url = base_url(&listener);
    thread::spawn(move || {
        for mut stream in listener.incoming().flatten() {
            thread::spawn(move || {
                let mut buf = [0u8; 8192];
                let _ = stream.read(&mut buf);
                thread::sleep(Duration::from_secs(30));
            });
        }
    });
    url
}

fn bind() -> TcpListener {
    TcpListener::bind("127.0.0.1:0").expect("bind")
}

fn base_url(listener: &TcpListener) -> String {
    format!("http://127.0.0.1:{}/", listener.local_addr().unwrap().port())
}

fn handle(mut stream: std::net::TcpStream, body: &[u8], status: u16) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }
    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };
    let header = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        reason,
        body.len()
    );
    let _ = stream.write_all(header.as_bytes());
    let _ = stream.write_all(body);
}
