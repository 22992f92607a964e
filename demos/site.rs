//! Print what the portfolio pages would render
//!
//! Run with: cargo run --example site [slug]
//!
//! Configuration comes from FOLIO_* environment variables; set
//! FOLIO_STORAGE_BASE="" to run on sample articles only.

use folio_rs::{ArticleFilter, FolioClient, Navigation, SourceConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = SourceConfig::from_env()?;
    println!(
        "Site for {} (api: {}, storage: {})",
        config.handle,
        config.api_base,
        config.storage_base.as_deref().unwrap_or("demo mode")
    );

    let client = FolioClient::new(config)?;

    // Home page: featured projects
    let projects = client.get_projects().await;
    println!(
        "\nFeatured projects{}:",
        if projects.is_fallback() { " (sample data)" } else { "" }
    );
    for project in &projects.value {
        println!(
            "  {:<30} ★{:<5} ⑂{:<4} {}",
            project.name, project.stargazers_count, project.forks_count, project.language
        );
    }

    // Blog page: category strip and article list
    let articles = client.get_articles().await;
    let mut blog = ArticleFilter::new(articles.value);
    let strip: Vec<String> = blog
        .category_counts()
        .iter()
        .map(|(category, n)| format!("{} ({})", category, n))
        .collect();
    println!("\nCategories: All | {}", strip.join(" | "));

    if let Some(category) = blog.distinct_categories().first().map(|c| c.to_string()) {
        blog.select_category(Some(category.clone()));
        println!("\nArticles in {}:", category);
        for article in blog.visible_articles() {
            println!("  {}  {}", article.date, article.title);
        }
    }

    // Article page
    let slug = match std::env::args().nth(1) {
        Some(slug) => slug,
        None => match blog.articles().first() {
            Some(article) => article.slug.clone(),
            None => return Ok(()),
        },
    };

    let nav = Navigation::new();
    let ticket = nav.begin();
    if let Some(content) = client.get_article_for(&ticket, &slug).await {
        println!(
            "\n--- {}{} ---\n{}",
            slug,
            if content.is_fallback() { " (sample)" } else { "" },
            content.value
        );
    }

    Ok(())
}
