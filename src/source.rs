//! Remote data sources
//!
//! One-shot fetches for the three resources the site renders:
//!
//! - the ranked project listing (`GET {api_base}/users/{owner}/repos?sort=pushed&per_page=N`)
//! - the article index (`GET {storage_base}/{handle}/articles/index.json`)
//! - a single article body (`GET {storage_base}/{handle}/articles/{category}/{slug}.md`)
//!
//! No retries and no caching: every call goes to the network. Failures are
//! reported as [`FolioError`] and are expected to be absorbed one layer up by
//! [`with_fallback`](crate::fallback::with_fallback).

use crate::config::SourceConfig;
use crate::error::{FolioError, Result};
use crate::model::{ArticleSummary, Project};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use std::future::Future;
use tracing::debug;

/// A source of projects, article summaries and article bodies
///
/// [`HttpDataSource`] is the production implementation; tests substitute
/// scripted sources.
pub trait DataSource: Send + Sync {
    /// Fetch the owner's most recently pushed repositories
    ///
    /// # Errors
    ///
    /// [`FolioError::Network`] on transport failure, [`FolioError::Http`] on a
    /// non-success status, [`FolioError::Parse`] if the body is not a project list.
    fn fetch_projects(&self, owner: &str) -> impl Future<Output = Result<Vec<Project>>> + Send;

    /// Fetch the article index manifest
    ///
    /// # Errors
    ///
    /// Same failure modes as [`fetch_projects`](DataSource::fetch_projects).
    fn fetch_article_index(&self) -> impl Future<Output = Result<Vec<ArticleSummary>>> + Send;

    /// Fetch the raw markdown body of `slug` stored under `category`
    ///
    /// The category must come from the article index; this primitive never
    /// looks it up itself.
    ///
    /// # Errors
    ///
    /// [`FolioError::NotFound`] if the body does not exist, otherwise the same
    /// failure modes as [`fetch_projects`](DataSource::fetch_projects).
    fn fetch_article_body(
        &self,
        category: &str,
        slug: &str,
    ) -> impl Future<Output = Result<String>> + Send;
}

/// [`DataSource`] backed by a `reqwest` client
///
/// # Example
///
/// ```no_run
/// use folio_rs::{DataSource, HttpDataSource, SourceConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let source = HttpDataSource::new(SourceConfig::new("alice"))?;
/// let projects = source.fetch_projects("alice").await?;
/// println!("{} projects", projects.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpDataSource {
    http: reqwest::Client,
    config: SourceConfig,
}

impl HttpDataSource {
    /// Build a source for `config`
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Config`] if the configuration is invalid or the
    /// HTTP client cannot be constructed.
    pub fn new(config: SourceConfig) -> Result<Self> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| FolioError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { http, config })
    }

    /// The configuration this source was built with
    #[must_use]
    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// URL of the project listing for `owner`
    pub fn projects_url(&self, owner: &str) -> Result<Url> {
        let mut url = join_segments(&self.config.api_base, &["users", owner, "repos"])?;
        url.query_pairs_mut()
            .append_pair("sort", "pushed")
            .append_pair("per_page", &self.config.page_size.to_string());
        Ok(url)
    }

    /// URL of the article index manifest
    pub fn index_url(&self) -> Result<Url> {
        join_segments(
            self.storage_base()?,
            &[self.config.handle.as_str(), "articles", "index.json"],
        )
    }

    /// URL of an article body
    pub fn body_url(&self, category: &str, slug: &str) -> Result<Url> {
        join_segments(
            self.storage_base()?,
            &[self.config.handle.as_str(), "articles", category, format!("{}.md", slug).as_str()],
        )
    }

    fn storage_base(&self) -> Result<&str> {
        self.config
            .storage_base
            .as_deref()
            .ok_or_else(|| FolioError::Config("no storage base configured".to_string()))
    }

    async fn get(&self, url: Url) -> Result<reqwest::Response> {
        debug!("GET {}", url);
        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            debug!("GET {} failed with status {}", url, status);
            return Err(FolioError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let body = self.get(url).await?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl DataSource for HttpDataSource {
    async fn fetch_projects(&self, owner: &str) -> Result<Vec<Project>> {
        let projects: Vec<Project> = self.get_json(self.projects_url(owner)?).await?;
        debug!("Fetched {} projects for {}", projects.len(), owner);
        Ok(projects)
    }

    async fn fetch_article_index(&self) -> Result<Vec<ArticleSummary>> {
        let articles: Vec<ArticleSummary> = self.get_json(self.index_url()?).await?;
        debug!("Fetched article index with {} entries", articles.len());
        Ok(articles)
    }

    async fn fetch_article_body(&self, category: &str, slug: &str) -> Result<String> {
        match self.get(self.body_url(category, slug)?).await {
            Ok(response) => Ok(response.text().await?),
            Err(FolioError::Http { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Err(FolioError::NotFound(slug.to_string()))
            }
            Err(e) => Err(e),
        }
    }
}

/// Append percent-encoded path segments to `base`
///
/// Each segment is encoded on its own, so a `/` inside a slug or category
/// cannot move the request to another directory.
fn join_segments(base: &str, segments: &[&str]) -> Result<Url> {
    let mut url =
        Url::parse(base).map_err(|e| FolioError::Config(format!("Invalid base URL {:?}: {}", base, e)))?;
    url.path_segments_mut()
        .map_err(|_| FolioError::Config(format!("Base URL cannot hold a path: {}", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> HttpDataSource {
        HttpDataSource::new(SourceConfig::local("https://cdn.example.com", "alice")).unwrap()
    }

    #[test]
    fn test_projects_url() {
        let url = source().projects_url("alice").unwrap();
        assert_eq!(
            url.as_str(),
            "https://cdn.example.com/users/alice/repos?sort=pushed&per_page=6"
        );
    }

    #[test]
    fn test_index_url() {
        let url = source().index_url().unwrap();
        assert_eq!(url.as_str(), "https://cdn.example.com/alice/articles/index.json");
    }

    #[test]
    fn test_body_url() {
        let url = source().body_url("Frontend", "hello-world").unwrap();
        assert_eq!(
            url.as_str(),
            "https://cdn.example.com/alice/articles/Frontend/hello-world.md"
        );
    }

    #[test]
    fn test_body_url_encodes_segments() {
        let url = source().body_url("Deep Dives", "../secret").unwrap();
        assert_eq!(
            url.as_str(),
            "https://cdn.example.com/alice/articles/Deep%20Dives/..%2Fsecret.md"
        );
    }

    #[test]
    fn test_base_with_path_prefix() {
        let source =
            HttpDataSource::new(SourceConfig::local("https://cdn.example.com/site/", "alice")).unwrap();
        let url = source.index_url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://cdn.example.com/site/alice/articles/index.json"
        );
    }

    #[test]
    fn test_demo_mode_has_no_storage_urls() {
        let source = HttpDataSource::new(SourceConfig::demo("alice")).unwrap();
        assert!(matches!(source.index_url(), Err(FolioError::Config(_))));
    }

    #[test]
    fn test_invalid_base() {
        let source = HttpDataSource::new(SourceConfig::local("not a url", "alice")).unwrap();
        assert!(matches!(source.index_url(), Err(FolioError::Config(_))));
    }
}
