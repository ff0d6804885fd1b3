//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed set of routes keyed by request path. Every response is
//! sent with `Connection: close`, so bodies without `Content-Length` are
//! delimited by closing the socket.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum DeclaredLength {
    /// `Content-Length` equal to the body length.
    Exact,
    /// No `Content-Length` header.
    Omit,
    /// `Content-Length` with this value regardless of the body.
    Claim(u64),
}

#[derive(Debug, Clone)]
pub struct Route {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
    pub length: DeclaredLength,
    pub location: Option<String>,
    /// Send half the body, then go silent for this long before closing.
    pub stall: Option<Duration>,
}

impl Route {
    pub fn image(content_type: &str, body: &[u8]) -> Self {
        Self {
            status: 200,
            content_type: Some(content_type.to_string()),
            body: body.to_vec(),
            length: DeclaredLength::Exact,
            location: None,
            stall: None,
        }
    }

    pub fn status(status: u16) -> Self {
        Self {
            status,
            content_type: Some("text/html".to_string()),
            body: b"<html>nope</html>".to_vec(),
            length: DeclaredLength::Exact,
            location: None,
            stall: None,
        }
    }

    pub fn redirect(location: &str) -> Self {
        Self {
            location: Some(location.to_string()),
            ..Self::status(302)
        }
    }

    pub fn without_content_type(mut self) -> Self {
        self.content_type = None;
        self
    }

    pub fn with_length(mut self, length: DeclaredLength) -> Self {
        self.length = length;
        self
    }

    pub fn stalled_for(mut self, pause: Duration) -> Self {
        self.stall = Some(pause);
        self
    }
}

/// Starts a server in a background thread. Returns the base URL without a
/// trailing slash (e.g. "http://127.0.0.1:12345"). Unknown paths get 404.
/// The server runs until the process exits.
pub fn start(routes: Vec<(&str, Route)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes: Arc<HashMap<String, Route>> = Arc::new(
        routes
            .into_iter()
            .map(|(path, route)| (path.to_string(), route))
            .collect(),
    );
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let routes = Arc::clone(&routes);
            thread::spawn(move || handle(stream, &routes));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

/// A URL on localhost where nothing is listening.
pub fn dead_url(path: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}{}", port, path)
}

fn handle(mut stream: TcpStream, routes: &HashMap<String, Route>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/");

    let fallback = Route::status(404);
    let route = routes.get(path).unwrap_or(&fallback);

    let mut head = format!("HTTP/1.1 {} {}\r\n", route.status, reason(route.status));
    if let Some(ct) = &route.content_type {
        head.push_str(&format!("Content-Type: {}\r\n", ct));
    }
    match route.length {
        DeclaredLength::Exact => {
            head.push_str(&format!("Content-Length: {}\r\n", route.body.len()))
        }
        DeclaredLength::Claim(n) => head.push_str(&format!("Content-Length: {}\r\n", n)),
        DeclaredLength::Omit => {}
    }
    if let Some(loc) = &route.location {
        head.push_str(&format!("Location: {}\r\n", loc));
    }
    head.push_str("Connection: close\r\n\r\n");

    let _ = stream.write_all(head.as_bytes());
    if let Some(pause) = route.stall {
        let half = route.body.len() / 2;
        let _ = stream.write_all(&route.body[..half]);
        let _ = stream.flush();
        thread::sleep(pause);
        return;
    }
    let _ = stream.write_all(&route.body);
    let _ = stream.flush();
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        302 => "Found",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
