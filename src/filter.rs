//! Article list filtering
//!
//! The blog list view narrows the article index by category or by tag, never
//! both: picking one clears the other, and "All" clears everything. The
//! selection is a [`FilterSelection`] value, and [`visible_articles`] is a pure
//! function of the article slice and that value, so the view state can be
//! tested without any rendering.
//!
//! # Example
//!
//! ```
//! use folio_rs::filter::ArticleFilter;
//! use folio_rs::fallback::mock_articles;
//!
//! let mut filter = ArticleFilter::new(mock_articles());
//! filter.select_category(Some("React".to_string()));
//! assert_eq!(filter.visible_articles().len(), 1);
//!
//! filter.select_tag("rust");
//! assert_eq!(filter.selected_category(), None);
//! assert!(filter.visible_articles().is_empty());
//! ```

use crate::model::ArticleSummary;

/// Active filter of the article list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FilterSelection {
    /// No filter
    #[default]
    All,
    /// Articles whose category equals the value
    Category(String),
    /// Articles whose tags contain the value
    Tag(String),
}

/// Articles matching `selection`, in index order
///
/// Untagged articles never match a tag filter. A selection that matches
/// nothing yields an empty list.
pub fn visible_articles<'a>(
    articles: &'a [ArticleSummary],
    selection: &FilterSelection,
) -> Vec<&'a ArticleSummary> {
    articles
        .iter()
        .filter(|article| match selection {
            FilterSelection::All => true,
            FilterSelection::Category(category) => article.category == *category,
            FilterSelection::Tag(tag) => article.has_tag(tag),
        })
        .collect()
}

/// Case-insensitive keyword search over title, description and tags
///
/// A blank query returns every article.
pub fn search_articles<'a>(articles: &'a [ArticleSummary], query: &str) -> Vec<&'a ArticleSummary> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return articles.iter().collect();
    }

    articles
        .iter()
        .filter(|article| {
            article.title.to_lowercase().contains(&needle)
                || article.description.to_lowercase().contains(&needle)
                || article
                    .tags
                    .iter()
                    .flatten()
                    .any(|tag| tag.to_lowercase().contains(&needle))
        })
        .collect()
}

/// View model of the blog list: the article index plus the active filter
#[derive(Debug, Clone, Default)]
pub struct ArticleFilter {
    articles: Vec<ArticleSummary>,
    selection: FilterSelection,
}

impl ArticleFilter {
    /// Create a view model over `articles` with no filter
    pub fn new(articles: Vec<ArticleSummary>) -> Self {
        Self {
            articles,
            selection: FilterSelection::All,
        }
    }

    /// Replace the article collection; the selection is kept
    pub fn set_articles(&mut self, articles: Vec<ArticleSummary>) {
        self.articles = articles;
    }

    /// The full article collection
    #[must_use]
    pub fn articles(&self) -> &[ArticleSummary] {
        &self.articles
    }

    /// Filter by category, clearing any tag; `None` means "All" and clears both
    pub fn select_category(&mut self, category: Option<String>) {
        self.selection = match category {
            Some(category) => FilterSelection::Category(category),
            None => FilterSelection::All,
        };
    }

    /// Filter by tag, clearing any category
    pub fn select_tag(&mut self, tag: impl Into<String>) {
        self.selection = FilterSelection::Tag(tag.into());
    }

    /// Drop the tag filter, leaving a category filter untouched
    pub fn clear_tag(&mut self) {
        if matches!(self.selection, FilterSelection::Tag(_)) {
            self.selection = FilterSelection::All;
        }
    }

    #[must_use]
    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    #[must_use]
    pub fn selected_category(&self) -> Option<&str> {
        match &self.selection {
            FilterSelection::Category(category) => Some(category.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn selected_tag(&self) -> Option<&str> {
        match &self.selection {
            FilterSelection::Tag(tag) => Some(tag.as_str()),
            _ => None,
        }
    }

    /// Articles matching the current selection, in index order
    #[must_use]
    pub fn visible_articles(&self) -> Vec<&ArticleSummary> {
        visible_articles(&self.articles, &self.selection)
    }

    /// One entry per category, in order of first appearance
    #[must_use]
    pub fn distinct_categories(&self) -> Vec<&str> {
        self.category_counts().into_iter().map(|(c, _)| c).collect()
    }

    /// Article count per category, in order of first appearance
    #[must_use]
    pub fn category_counts(&self) -> Vec<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for article in &self.articles {
            match counts.iter_mut().find(|(c, _)| *c == article.category) {
                Some((_, n)) => *n += 1,
                None => counts.push((article.category.as_str(), 1)),
            }
        }
        counts
    }
}
