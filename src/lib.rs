#![doc = include_str!("../README.md")]

mod client;
mod config;
mod error;
/// Fallback data and the policy that substitutes it
pub mod fallback;
/// Article list filtering and keyword search
pub mod filter;
/// Front matter handling for article bodies
pub mod front_matter;
mod model;
mod navigation;
/// Project ranking
pub mod ranking;
/// Remote data sources
pub mod source;

pub use client::FolioClient;
pub use config::{
    DEFAULT_API_BASE, DEFAULT_HANDLE, DEFAULT_PAGE_SIZE, DEFAULT_STORAGE_BASE, SourceConfig,
};
pub use error::{FolioError, Result};
pub use fallback::{FallbackPolicy, Fetched, Origin, with_fallback};
pub use filter::{ArticleFilter, FilterSelection, search_articles, visible_articles};
pub use front_matter::{split_front_matter, strip_front_matter};
pub use model::{ArticleSummary, Project};
pub use navigation::{Navigation, NavigationTicket};
pub use ranking::rank_projects;
pub use source::{DataSource, HttpDataSource};
