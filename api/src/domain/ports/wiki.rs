//! Wiki client port trait
//!
//! Defines the interface for reading category members and page text from a
//! MediaWiki installation.

use async_trait::async_trait;

use crate::domain::entities::Category;
use crate::error::WikiError;

/// Port trait for MediaWiki API operations
#[async_trait]
pub trait WikiClient: Send + Sync {
    /// Whether the category page exists at all
    async fn category_exists(&self, category: &Category) -> Result<bool, WikiError>;

    /// Titles of the article pages in a category (subcategories excluded).
    /// Follows continuation until the full member list is collected.
    async fn list_category_members(&self, category: &Category)
        -> Result<Vec<String>, WikiError>;

    /// Plain-text extract of a page. Empty when the page has no extract.
    async fn fetch_page_text(&self, title: &str) -> Result<String, WikiError>;
}
