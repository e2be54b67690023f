// tests/common/mod.rs

//! Shared test utilities: a minimal local HTTP server, an in-memory PNG
//! fixture, and fake-flatpak script helpers.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{Cursor, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

/// One canned response for a path
#[derive(Clone)]
struct CannedResponse {
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
}

/// Tiny blocking HTTP server for exercising the fetcher against localhost
///
/// Unrouted paths return 404. Requests are counted per path so tests can
/// assert how many network round-trips a code path performed.
pub struct TestServer {
    addr: String,
    routes: Arc<Mutex<HashMap<String, CannedResponse>>>,
    hits: Arc<Mutex<HashMap<String, usize>>>,
    shutdown: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
}

impl TestServer {
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = format!("127.0.0.1:{}", listener.local_addr().unwrap().port());

        let routes: Arc<Mutex<HashMap<String, CannedResponse>>> =
            Arc::new(Mutex::new(HashMap::new()));
        let hits: Arc<Mutex<HashMap<String, usize>>> = Arc::new(Mutex::new(HashMap::new()));
        let shutdown = Arc::new(AtomicBool::new(false));

        let handle = {
            let routes = Arc::clone(&routes);
            let hits = Arc::clone(&hits);
            let shutdown = Arc::clone(&shutdown);
            thread::spawn(move || {
                for stream in listener.incoming() {
                    if shutdown.load(Ordering::SeqCst) {
                        break;
                    }
                    let Ok(stream) = stream else { continue };
                    handle_connection(stream, &routes, &hits);
                }
            })
        };

        Self {
            addr,
            routes,
            hits,
            shutdown,
            handle: Some(handle),
        }
    }

    /// Base URL (`http://127.0.0.1:<port>`)
    pub fn base(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Full URL for a path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base(), path)
    }

    /// Register a response for a path
    pub fn route(&self, path: &str, status: u16, content_type: &'static str, body: Vec<u8>) {
        self.routes.lock().unwrap().insert(
            path.to_string(),
            CannedResponse {
                status,
                content_type,
                body,
            },
        );
    }

    /// Register a 200 JSON response for a path
    pub fn route_json(&self, path: &str, body: &str) {
        self.route(path, 200, "application/json", body.as_bytes().to_vec());
    }

    /// How many requests this path has received
    pub fn hits(&self, path: &str) -> usize {
        *self.hits.lock().unwrap().get(path).unwrap_or(&0)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::SeqCst);
        // Wake the accept loop so it observes the flag
        let _ = TcpStream::connect(&self.addr);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn handle_connection(
    mut stream: TcpStream,
    routes: &Mutex<HashMap<String, CannedResponse>>,
    hits: &Mutex<HashMap<String, usize>>,
) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        match stream.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => {
                buf.extend_from_slice(&chunk[..n]);
                if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            Err(_) => return,
        }
    }

    let request = String::from_utf8_lossy(&buf);
    let Some(path) = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
    else {
        return;
    };
    let path = path.split('?').next().unwrap_or(path).to_string();

    *hits.lock().unwrap().entry(path.clone()).or_insert(0) += 1;

    let response = routes.lock().unwrap().get(&path).cloned();
    let (status, reason, content_type, body) = match response {
        Some(r) => {
            let reason = if r.status < 300 { "OK" } else { "Error" };
            (r.status, reason, r.content_type, r.body)
        }
        None => (404, "Not Found", "text/plain", b"not found".to_vec()),
    };

    let header = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    );
    let _ = stream.write_all(header.as_bytes());
    let _ = stream.write_all(&body);
    let _ = stream.flush();
}

/// A small valid PNG, generated in memory
pub fn png_bytes() -> Vec<u8> {
    let img = image::DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
        8,
        8,
        image::Rgba([200, 60, 20, 255]),
    ));
    let mut cursor = Cursor::new(Vec::new());
    img.write_to(&mut cursor, image::ImageFormat::Png).unwrap();
    cursor.into_inner()
}

/// Write an executable shell script standing in for the flatpak binary
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}
