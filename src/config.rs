//! Data source configuration

use crate::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default code-hosting REST endpoint
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Default object-storage base URL holding `articles/`
pub const DEFAULT_STORAGE_BASE: &str = "https://pub-f31a5865021b44d0a2c4003b3da37f04.r2.dev";

/// Default site owner
pub const DEFAULT_HANDLE: &str = "king-jingxiang";

/// Number of projects requested from the listing endpoint
pub const DEFAULT_PAGE_SIZE: u32 = 6;

/// Data source configuration
///
/// Describes where projects and articles live and how failed fetches degrade.
///
/// # Example
///
/// ```
/// use folio_rs::SourceConfig;
///
/// // Recommended: start from the defaults and override what differs
/// let config = SourceConfig::new("alice").with_page_size(12);
///
/// // Demo mode: articles always come from the built-in mock set
/// let demo = SourceConfig::demo("alice");
/// assert!(demo.storage_base.is_none());
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Code-hosting API base (e.g., "https://api.github.com")
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Object-storage base URL
    ///
    /// `None` puts the article operations in demo mode: they never touch the
    /// network and resolve straight to mock data.
    #[serde(default = "default_storage_base")]
    pub storage_base: Option<String>,

    /// Owner handle, used both for the repository listing and the storage prefix
    #[serde(default = "default_handle")]
    pub handle: String,

    /// Projects requested per listing call
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Simulated latency before a fallback value resolves
    ///
    /// Gives loading states a chance to render when data is synthetic.
    /// Default: zero.
    #[serde(default, with = "duration_ms")]
    pub fallback_delay: Duration,

    /// Per-request timeout applied by the HTTP client
    #[serde(default = "default_timeout", with = "duration_ms")]
    pub timeout: Duration,

    /// User agent sent with every request (the hosting API rejects requests without one)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_storage_base() -> Option<String> {
    Some(DEFAULT_STORAGE_BASE.to_string())
}

fn default_handle() -> String {
    DEFAULT_HANDLE.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_user_agent() -> String {
    concat!("folio-rs/", env!("CARGO_PKG_VERSION")).to_string()
}

mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            storage_base: default_storage_base(),
            handle: default_handle(),
            page_size: DEFAULT_PAGE_SIZE,
            fallback_delay: Duration::ZERO,
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl SourceConfig {
    /// Create a configuration for `handle` using the default endpoints
    pub fn new(handle: impl Into<String>) -> Self {
        Self {
            handle: handle.into(),
            ..Default::default()
        }
    }

    /// Create a demo-mode configuration (no object storage)
    pub fn demo(handle: impl Into<String>) -> Self {
        Self {
            storage_base: None,
            ..Self::new(handle)
        }
    }

    /// Point both endpoints at the same base, e.g. a local test server
    pub fn local(base: impl Into<String>, handle: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            api_base: base.clone(),
            storage_base: Some(base),
            ..Self::new(handle)
        }
    }

    /// Override the listing page size
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Override the simulated fallback latency
    pub fn with_fallback_delay(mut self, delay: Duration) -> Self {
        self.fallback_delay = delay;
        self
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Whether article operations are served from mock data only
    #[must_use]
    pub fn is_demo(&self) -> bool {
        self.storage_base.is_none()
    }

    /// Load configuration from `FOLIO_*` environment variables
    ///
    /// Unset variables keep their defaults. An empty `FOLIO_STORAGE_BASE`
    /// selects demo mode.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Config`] if a numeric variable does not parse.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(base) = lookup("FOLIO_API_BASE") {
            config.api_base = base;
        }
        if let Some(base) = lookup("FOLIO_STORAGE_BASE") {
            config.storage_base = if base.trim().is_empty() {
                None
            } else {
                Some(base)
            };
        }
        if let Some(handle) = lookup("FOLIO_HANDLE") {
            config.handle = handle;
        }
        if let Some(size) = lookup("FOLIO_PAGE_SIZE") {
            config.page_size = parse_number("FOLIO_PAGE_SIZE", &size)?;
        }
        if let Some(ms) = lookup("FOLIO_FALLBACK_DELAY_MS") {
            config.fallback_delay = Duration::from_millis(parse_number("FOLIO_FALLBACK_DELAY_MS", &ms)?);
        }
        if let Some(secs) = lookup("FOLIO_TIMEOUT_SECS") {
            config.timeout = Duration::from_secs(parse_number("FOLIO_TIMEOUT_SECS", &secs)?);
        }

        config.validate()?;
        Ok(config)
    }

    /// Check invariants the data source relies on
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Config`] for an empty handle or a zero page size.
    pub fn validate(&self) -> Result<()> {
        if self.handle.trim().is_empty() {
            return Err(FolioError::Config("handle must not be empty".to_string()));
        }
        if self.page_size == 0 {
            return Err(FolioError::Config("page_size must be at least 1".to_string()));
        }
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| FolioError::Config(format!("{key} is not a number: {value:?}")))
}
