//! Graceful degradation for remote fetches
//!
//! Every fetch the site performs is wrapped by [`with_fallback`]: a failure of
//! any kind is logged and replaced wholesale by a fixed mock value, so the
//! caller always gets renderable data. Nothing is merged; a result is either
//! entirely live or entirely mock, and [`Fetched::origin`] says which.
//!
//! # Example
//!
//! ```
//! use folio_rs::fallback::{with_fallback, FallbackPolicy, Origin};
//! use folio_rs::FolioError;
//!
//! # async fn example() {
//! let policy = FallbackPolicy::default();
//! let fetched = with_fallback(&policy, "greeting", async {
//!     Err::<String, _>(FolioError::NotFound("hello".into()))
//! }, || "placeholder".to_string())
//! .await;
//!
//! assert_eq!(fetched.origin, Origin::Fallback);
//! assert_eq!(fetched.value, "placeholder");
//! # }
//! ```

use crate::error::Result;
use crate::model::{ArticleSummary, Project};
use std::future::Future;
use std::time::Duration;
use tracing::warn;

/// Where a value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Fetched from the remote endpoint
    Live,
    /// Substituted mock data
    Fallback,
}

/// A value together with its [`Origin`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched<T> {
    pub value: T,
    pub origin: Origin,
}

impl<T> Fetched<T> {
    /// Wrap a value fetched from the network
    pub fn live(value: T) -> Self {
        Self {
            value,
            origin: Origin::Live,
        }
    }

    /// Wrap a substituted mock value
    pub fn fallback(value: T) -> Self {
        Self {
            value,
            origin: Origin::Fallback,
        }
    }

    /// True if the value is mock data
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.origin == Origin::Fallback
    }

    /// Drop the origin marker
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Transform the value, keeping its origin
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetched<U> {
        Fetched {
            value: f(self.value),
            origin: self.origin,
        }
    }
}

/// How fallback values are delivered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FallbackPolicy {
    /// Simulated latency before a fallback value resolves
    pub delay: Duration,
}

impl FallbackPolicy {
    /// Policy that waits `delay` before resolving mock data
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    /// Resolve `mock` as a fallback value, honoring the configured delay
    pub async fn resolve<T>(&self, mock: T) -> Fetched<T> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Fetched::fallback(mock)
    }
}

/// Run `operation`, substituting `mock()` if it fails
///
/// `what` names the resource in the warning logged on failure. The mock value
/// is only built when it is needed.
pub async fn with_fallback<T, F, M>(
    policy: &FallbackPolicy,
    what: &str,
    operation: F,
    mock: M,
) -> Fetched<T>
where
    F: Future<Output = Result<T>>,
    M: FnOnce() -> T,
{
    match operation.await {
        Ok(value) => Fetched::live(value),
        Err(e) => {
            warn!(resource = what, error = %e, "Using fallback data");
            policy.resolve(mock()).await
        }
    }
}

/// Projects shown when the listing cannot be fetched (unranked)
pub fn mock_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            name: "web-artifacts-builder".to_string(),
            description: "A suite of tools for creating elaborate claude.ai artifacts.".to_string(),
            html_url: "https://github.com/king-jingxiang/web-artifacts-builder".to_string(),
            stargazers_count: 120,
            forks_count: 30,
            language: "TypeScript".to_string(),
        },
        Project {
            id: 2,
            name: "theme-factory".to_string(),
            description: "Toolkit for styling artifacts with professional themes.".to_string(),
            html_url: "https://github.com/king-jingxiang/theme-factory".to_string(),
            stargazers_count: 85,
            forks_count: 12,
            language: "CSS".to_string(),
        },
        Project {
            id: 3,
            name: "frontend-design".to_string(),
            description: "Design system and guidelines for modern web applications.".to_string(),
            html_url: "https://github.com/king-jingxiang/frontend-design".to_string(),
            stargazers_count: 200,
            forks_count: 45,
            language: "Markdown".to_string(),
        },
    ]
}

/// Article index used when the manifest cannot be fetched
pub fn mock_articles() -> Vec<ArticleSummary> {
    fn article(title: &str, description: &str, category: &str, date: &str, slug: &str) -> ArticleSummary {
        ArticleSummary {
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            date: date.to_string(),
            slug: slug.to_string(),
            cover: None,
            tags: None,
        }
    }

    vec![
        article(
            "Building a Modern Personal Website",
            "How I built my personal website using React, Vite, and Tailwind CSS.",
            "Frontend",
            "2023-10-01",
            "building-modern-personal-website",
        ),
        article(
            "Understanding React Server Components",
            "A deep dive into the architecture of React Server Components.",
            "React",
            "2023-09-15",
            "understanding-rsc",
        ),
        article(
            "The Future of Web Development",
            "Trends and technologies shaping the future of the web.",
            "Tech",
            "2023-08-20",
            "future-web-dev",
        ),
    ]
}

/// Placeholder markdown for `slug`
///
/// Deterministic per slug, so different articles get visibly different
/// placeholder pages.
pub fn mock_article_body(slug: &str) -> String {
    format!(
        "# {slug}\n\
         \n\
         This is a mock article content for **{slug}**.\n\
         \n\
         ## Introduction\n\
         \n\
         Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor \
         incididunt ut labore et dolore magna aliqua.\n\
         \n\
         ## Code Example\n\
         \n\
         ```tsx\n\
         console.log(\"Hello World\")\n\
         ```\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FolioError;

    #[tokio::test]
    async fn test_live_value_passes_through() {
        let policy = FallbackPolicy::default();
        let fetched = with_fallback(&policy, "n", async { Ok(1) }, || 0).await;
        assert_eq!(fetched, Fetched::live(1));
    }

    #[tokio::test]
    async fn test_error_substitutes_mock() {
        let policy = FallbackPolicy::default();
        let fetched = with_fallback(
            &policy,
            "articles",
            async { Err(FolioError::Parse("bad json".into())) },
            mock_articles,
        )
        .await;
        assert!(fetched.is_fallback());
        assert_eq!(fetched.value, mock_articles());
    }

    #[tokio::test]
    async fn test_mock_not_built_on_success() {
        let policy = FallbackPolicy::default();
        let fetched = with_fallback(&policy, "n", async { Ok(5) }, || -> i32 {
            panic!("mock should not be built")
        })
        .await;
        assert_eq!(fetched.into_inner(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fallback_delay() {
        let policy = FallbackPolicy::with_delay(Duration::from_millis(500));
        let start = tokio::time::Instant::now();
        let fetched = with_fallback(
            &policy,
            "n",
            async { Err(FolioError::NotFound("x".into())) },
            || 0,
        )
        .await;
        assert!(fetched.is_fallback());
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[test]
    fn test_mock_articles_categories() {
        let categories: Vec<_> = mock_articles().into_iter().map(|a| a.category).collect();
        assert_eq!(categories, ["Frontend", "React", "Tech"]);
    }

    #[test]
    fn test_mock_body_embeds_slug() {
        let a = mock_article_body("alpha");
        let b = mock_article_body("beta");
        assert!(a.starts_with("# alpha\n"));
        assert!(a.contains("**alpha**"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_fetched_map_keeps_origin() {
        let fetched = Fetched::fallback(vec![1, 2, 3]).map(|v| v.len());
        assert_eq!(fetched, Fetched::fallback(3));
    }
}
