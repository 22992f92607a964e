//! Shared fixtures for integration tests
//!
//! - [`ScriptedSource`]: an in-memory [`DataSource`] with canned replies
//! - [`TestServer`]: a minimal HTTP/1.1 responder on a local port

#![allow(dead_code)]

use folio_rs::{ArticleSummary, DataSource, FolioError, Project, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub fn project(id: u64, name: &str, stars: u64) -> Project {
    Project {
        id,
        name: name.to_string(),
        description: format!("{} description", name),
        html_url: format!("https://github.com/alice/{}", name),
        stargazers_count: stars,
        forks_count: 0,
        language: "Rust".to_string(),
    }
}

pub fn article(slug: &str, category: &str, tags: Option<Vec<&str>>) -> ArticleSummary {
    ArticleSummary {
        title: format!("About {}", slug),
        description: format!("Notes on {}", slug),
        category: category.to_string(),
        date: "2024-05-01".to_string(),
        slug: slug.to_string(),
        cover: None,
        tags: tags.map(|t| t.into_iter().map(String::from).collect()),
    }
}

fn unavailable(what: &str) -> FolioError {
    FolioError::Http {
        status: 503,
        url: format!("scripted://{}", what),
    }
}

/// In-memory data source; `None` replies fail with HTTP 503
#[derive(Default)]
pub struct ScriptedSource {
    pub projects: Option<Vec<Project>>,
    pub index: Option<Vec<ArticleSummary>>,
    /// Bodies keyed by (category, slug)
    pub bodies: HashMap<(String, String), String>,
    pub(crate) calls: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn with_body(mut self, category: &str, slug: &str, body: &str) -> Self {
        self.bodies
            .insert((category.to_string(), slug.to_string()), body.to_string());
        self
    }

    /// Calls made so far, e.g. `["index", "body Tech/intro"]`
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl DataSource for ScriptedSource {
    async fn fetch_projects(&self, owner: &str) -> Result<Vec<Project>> {
        self.record(format!("projects {}", owner));
        self.projects.clone().ok_or_else(|| unavailable("projects"))
    }

    async fn fetch_article_index(&self) -> Result<Vec<ArticleSummary>> {
        self.record("index".to_string());
        self.index.clone().ok_or_else(|| unavailable("index"))
    }

    async fn fetch_article_body(&self, category: &str, slug: &str) -> Result<String> {
        self.record(format!("body {}/{}", category, slug));
        self.bodies
            .get(&(category.to_string(), slug.to_string()))
            .cloned()
            .ok_or_else(|| FolioError::NotFound(slug.to_string()))
    }
}

/// Canned reply for one request target (path plus query)
#[derive(Debug, Clone)]
pub struct Route {
    pub target: String,
    pub status: u16,
    pub body: String,
}

impl Route {
    pub fn ok(target: &str, body: impl Into<String>) -> Self {
        Self::status(target, 200, body)
    }

    pub fn status(target: &str, status: u16, body: impl Into<String>) -> Self {
        Self {
            target: target.to_string(),
            status,
            body: body.into(),
        }
    }
}

/// Local HTTP server answering from a fixed route table
///
/// Unknown targets get a 404. Every connection is closed after one response.
pub struct TestServer {
    pub base: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl TestServer {
    pub async fn start(routes: Vec<Route>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);

        tokio::spawn(async move {
            loop {
                let Ok((mut stream, _)) = listener.accept().await else {
                    break;
                };
                let routes = routes.clone();
                let log = Arc::clone(&log);
                tokio::spawn(async move {
                    let mut buf = Vec::new();
                    let mut chunk = [0u8; 1024];
                    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                        match stream.read(&mut chunk).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => buf.extend_from_slice(&chunk[..n]),
                        }
                    }
                    let request = String::from_utf8_lossy(&buf).to_string();
                    let target = request
                        .lines()
                        .next()
                        .and_then(|line| line.split_whitespace().nth(1))
                        .unwrap_or("/")
                        .to_string();
                    log.lock().unwrap().push(request);

                    let (status, body) = routes
                        .iter()
                        .find(|r| r.target == target)
                        .map(|r| (r.status, r.body.clone()))
                        .unwrap_or((404, "Not Found".to_string()));
                    let response = format!(
                        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nContent-Type: text/plain\r\nConnection: close\r\n\r\n{}",
                        status,
                        reason(status),
                        body.len(),
                        body
                    );
                    let _ = stream.write_all(response.as_bytes()).await;
                    let _ = stream.shutdown().await;
                });
            }
        });

        Self { base, requests }
    }

    /// Raw request heads received so far
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

/// A base URL on which nothing is listening
pub async fn closed_base() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
