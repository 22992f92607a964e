//! Site data client
//!
//! [`FolioClient`] is what the pages call. It composes a [`DataSource`] with
//! the fallback policy, ranking and front matter stripping, and never returns
//! an error once constructed: failed fetches resolve to mock data marked with
//! [`Origin::Fallback`](crate::fallback::Origin::Fallback).

use crate::config::SourceConfig;
use crate::error::{FolioError, Result};
use crate::fallback::{
    FallbackPolicy, Fetched, mock_article_body, mock_articles, mock_projects, with_fallback,
};
use crate::front_matter::strip_front_matter;
use crate::model::{ArticleSummary, Project};
use crate::navigation::NavigationTicket;
use crate::ranking::rank_projects;
use crate::source::{DataSource, HttpDataSource};
use tracing::debug;

/// Client for the portfolio's projects and articles
///
/// # Example
///
/// ```no_run
/// use folio_rs::{FolioClient, SourceConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = FolioClient::new(SourceConfig::new("alice"))?;
///
/// let projects = client.get_projects().await;
/// if projects.is_fallback() {
///     println!("(showing sample projects)");
/// }
/// for project in &projects.value {
///     println!("{} ★{}", project.name, project.stargazers_count);
/// }
///
/// let body = client.get_article_content("hello-world").await;
/// println!("{}", body.value);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FolioClient<S = HttpDataSource> {
    source: S,
    config: SourceConfig,
    policy: FallbackPolicy,
}

impl FolioClient<HttpDataSource> {
    /// Create a client backed by HTTP
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Config`] if the configuration is invalid.
    pub fn new(config: SourceConfig) -> Result<Self> {
        let source = HttpDataSource::new(config.clone())?;
        Ok(Self::with_source(source, config))
    }
}

impl<S: DataSource> FolioClient<S> {
    /// Create a client over an arbitrary data source
    pub fn with_source(source: S, config: SourceConfig) -> Self {
        let policy = FallbackPolicy::with_delay(config.fallback_delay);
        Self {
            source,
            config,
            policy,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The owner's recent projects, most starred first
    pub async fn get_projects(&self) -> Fetched<Vec<Project>> {
        with_fallback(
            &self.policy,
            "projects",
            self.source.fetch_projects(&self.config.handle),
            mock_projects,
        )
        .await
        .map(rank_projects)
    }

    /// The article index
    pub async fn get_articles(&self) -> Fetched<Vec<ArticleSummary>> {
        if self.config.is_demo() {
            return self.policy.resolve(mock_articles()).await;
        }
        with_fallback(
            &self.policy,
            "article index",
            self.source.fetch_article_index(),
            mock_articles,
        )
        .await
    }

    /// Raw markdown of `slug`, resolving its category from a fresh index
    pub async fn get_article(&self, slug: &str) -> Fetched<String> {
        if self.config.is_demo() {
            return self.policy.resolve(mock_article_body(slug)).await;
        }
        with_fallback(
            &self.policy,
            "article",
            self.fetch_article(slug),
            || mock_article_body(slug),
        )
        .await
    }

    /// Raw markdown of `slug` when the category is already known
    pub async fn get_article_in(&self, category: &str, slug: &str) -> Fetched<String> {
        if self.config.is_demo() {
            return self.policy.resolve(mock_article_body(slug)).await;
        }
        with_fallback(
            &self.policy,
            "article",
            self.source.fetch_article_body(category, slug),
            || mock_article_body(slug),
        )
        .await
    }

    /// Markdown of `slug` ready for rendering, with front matter removed
    pub async fn get_article_content(&self, slug: &str) -> Fetched<String> {
        self.get_article(slug)
            .await
            .map(|text| strip_front_matter(&text).to_string())
    }

    /// [`get_article_content`](Self::get_article_content) for a page visit
    ///
    /// Returns `None` if a newer visit began while the fetch was in flight.
    pub async fn get_article_for(
        &self,
        ticket: &NavigationTicket,
        slug: &str,
    ) -> Option<Fetched<String>> {
        let content = self.get_article_content(slug).await;
        ticket.accept(content)
    }

    async fn fetch_article(&self, slug: &str) -> Result<String> {
        let index = self.source.fetch_article_index().await?;
        let article = index
            .iter()
            .find(|a| a.slug == slug)
            .ok_or_else(|| FolioError::NotFound(slug.to_string()))?;
        debug!("Resolved article {} to category {}", slug, article.category);
        self.source.fetch_article_body(&article.category, slug).await
    }
}
