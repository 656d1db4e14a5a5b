//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.
//! They record the calls they receive so tests can verify behavior.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::domain::entities::Category;
use crate::domain::ports::WikiClient;
use crate::error::WikiError;

// ============================================================================
// Mock Wiki Client
// ============================================================================

#[derive(Default)]
pub struct MockWikiClient {
    /// Category name (without prefix) -> member titles, in insertion order
    members: Arc<RwLock<HashMap<String, Vec<String>>>>,
    /// Category names whose category page exists
    existing: Arc<RwLock<HashSet<String>>>,
    /// Page title -> plain text extract
    pages: Arc<RwLock<HashMap<String, String>>>,
    /// Titles passed to `fetch_page_text`, in call order
    pub fetched: Arc<RwLock<Vec<String>>>,
    pub should_fail: Arc<RwLock<bool>>,
}

impl MockWikiClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with an upstream API error
    pub fn failing() -> Self {
        let client = Self::default();
        *client.should_fail.write().unwrap() = true;
        client
    }

    /// Add a page to a category (creating the category if needed)
    pub fn with_page(self, category: &str, title: &str, text: &str) -> Self {
        {
            let mut members = self.members.write().unwrap();
            let mut existing = self.existing.write().unwrap();
            let mut pages = self.pages.write().unwrap();

            members
                .entry(category.to_string())
                .or_default()
                .push(title.to_string());
            existing.insert(category.to_string());
            pages.insert(title.to_string(), text.to_string());
        }
        self
    }

    /// A category page that exists but has no article members
    pub fn with_empty_category(self, category: &str) -> Self {
        self.existing.write().unwrap().insert(category.to_string());
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetched.read().unwrap().len()
    }

    fn check_failure(&self) -> Result<(), WikiError> {
        if *self.should_fail.read().unwrap() {
            return Err(WikiError::Api {
                status: 500,
                message: "Mock failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl WikiClient for MockWikiClient {
    async fn category_exists(&self, category: &Category) -> Result<bool, WikiError> {
        self.check_failure()?;
        Ok(self.existing.read().unwrap().contains(category.name()))
    }

    async fn list_category_members(
        &self,
        category: &Category,
    ) -> Result<Vec<String>, WikiError> {
        self.check_failure()?;
        Ok(self
            .members
            .read()
            .unwrap()
            .get(category.name())
            .cloned()
            .unwrap_or_default())
    }

    async fn fetch_page_text(&self, title: &str) -> Result<String, WikiError> {
        self.check_failure()?;
        self.fetched.write().unwrap().push(title.to_string());
        Ok(self
            .pages
            .read()
            .unwrap()
            .get(title)
            .cloned()
            .unwrap_or_default())
    }
}
