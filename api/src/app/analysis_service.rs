//! Analysis service
//!
//! Fetches every page of a category and counts the words across all of them.
//! One call is one bounded, sequential computation; nothing outlives it.

use std::sync::Arc;
use std::time::Duration;

use crate::app::word_frequency::WordFrequencyAggregator;
use crate::domain::entities::{Category, Page, WordCount};
use crate::domain::ports::WikiClient;
use crate::error::{AppError, DomainError};

/// Result of analyzing one category
#[derive(Debug, Clone)]
pub struct CategoryAnalysis {
    pub category: Category,
    /// Number of member pages that were fetched
    pub page_count: usize,
    pub word_count: WordCount,
}

/// Service for computing word frequencies of a Wikipedia category
pub struct AnalysisService<W>
where
    W: WikiClient + ?Sized,
{
    wiki: Arc<W>,
    aggregator: WordFrequencyAggregator,
    /// Pause between page fetches to stay polite with the API
    page_delay: Duration,
}

impl<W> AnalysisService<W>
where
    W: WikiClient + ?Sized,
{
    pub fn new(wiki: Arc<W>, aggregator: WordFrequencyAggregator, page_delay: Duration) -> Self {
        Self {
            wiki,
            aggregator,
            page_delay,
        }
    }

    /// Count words across all pages of `category`.
    ///
    /// Returns `DomainError::NotFound` when the category has no members and no
    /// category page either. An existing but empty category yields an empty
    /// count.
    pub async fn analyze(&self, category: &Category) -> Result<CategoryAnalysis, AppError> {
        tracing::info!("Processing category '{}'", category);

        let titles = self.wiki.list_category_members(category).await?;

        if titles.is_empty() && !self.wiki.category_exists(category).await? {
            return Err(DomainError::NotFound(format!(
                "Category '{}' not found on Wikipedia",
                category
            ))
            .into());
        }

        let mut word_count = WordCount::new();
        let total = titles.len();

        for (i, title) in titles.into_iter().enumerate() {
            if i > 0 && !self.page_delay.is_zero() {
                tokio::time::sleep(self.page_delay).await;
            }

            tracing::debug!("Processing page {}/{}: {}", i + 1, total, title);

            let text = self.wiki.fetch_page_text(&title).await?;
            let page = Page::new(title, text);
            if page.is_empty() {
                tracing::debug!("Page '{}' has no extract", page.title);
                continue;
            }

            word_count.merge(self.aggregator.count_text(&page.text));
        }

        tracing::info!(
            "Counted {} distinct words ({} total) across {} pages of '{}'",
            word_count.len(),
            word_count.total(),
            total,
            category
        );

        Ok(CategoryAnalysis {
            category: category.clone(),
            page_count: total,
            word_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::stopwords::StopwordFilter;
    use crate::error::WikiError;
    use crate::test_utils::{physics_category, MockWikiClient};

    fn create_service(wiki: MockWikiClient) -> AnalysisService<MockWikiClient> {
        AnalysisService::new(
            Arc::new(wiki),
            WordFrequencyAggregator::default(),
            Duration::ZERO,
        )
    }

    #[tokio::test]
    async fn analyze_counts_words_across_pages() {
        let service = create_service(physics_category());
        let category = Category::parse("Physics").unwrap();

        let analysis = service.analyze(&category).await.unwrap();

        assert_eq!(analysis.page_count, 3);
        assert_eq!(analysis.word_count.get("energy"), 4);
        assert_eq!(analysis.word_count.get("einstein"), 2);
    }

    #[tokio::test]
    async fn analyze_fetches_each_member_once() {
        let wiki = Arc::new(physics_category());
        let service = AnalysisService::new(
            wiki.clone(),
            WordFrequencyAggregator::default(),
            Duration::ZERO,
        );

        service
            .analyze(&Category::parse("Physics").unwrap())
            .await
            .unwrap();

        assert_eq!(wiki.fetch_count(), 3);
        assert_eq!(
            *wiki.fetched.read().unwrap(),
            vec![
                "Mass–energy equivalence",
                "Kinetic energy",
                "Theory of relativity"
            ]
        );
    }

    #[tokio::test]
    async fn analyze_excludes_stopwords() {
        let service = create_service(physics_category());
        let category = Category::parse("Physics").unwrap();

        let analysis = service.analyze(&category).await.unwrap();

        let filter = StopwordFilter::english();
        for (word, _) in analysis.word_count.most_common(usize::MAX) {
            assert!(!filter.is_stopword(&word), "stopword {} leaked", word);
        }
    }

    #[tokio::test]
    async fn analyze_is_case_insensitive() {
        let wiki =
            MockWikiClient::new().with_page("Wikis", "Wiki", "Wikipedia wikipedia WIKIPEDIA");
        let service = create_service(wiki);

        let analysis = service
            .analyze(&Category::parse("Wikis").unwrap())
            .await
            .unwrap();

        assert_eq!(analysis.word_count.get("wikipedia"), 3);
        assert_eq!(analysis.word_count.len(), 1);
    }

    #[tokio::test]
    async fn analyze_unknown_category_is_not_found() {
        let service = create_service(MockWikiClient::new());

        let result = service
            .analyze(&Category::parse("Nonexistent things").unwrap())
            .await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn analyze_empty_existing_category() {
        let service = create_service(MockWikiClient::new().with_empty_category("Empty"));

        let analysis = service
            .analyze(&Category::parse("Empty").unwrap())
            .await
            .unwrap();

        assert_eq!(analysis.page_count, 0);
        assert!(analysis.word_count.is_empty());
    }

    #[tokio::test]
    async fn analyze_skips_pages_without_extract() {
        let wiki = MockWikiClient::new()
            .with_page("Mixed", "Stub", "")
            .with_page("Mixed", "Article", "Volcanoes erupt");
        let service = create_service(wiki);

        let analysis = service
            .analyze(&Category::parse("Mixed").unwrap())
            .await
            .unwrap();

        assert_eq!(analysis.page_count, 2);
        assert_eq!(analysis.word_count.get("volcanoes"), 1);
    }

    #[tokio::test]
    async fn analyze_propagates_upstream_failure() {
        let service = create_service(MockWikiClient::failing());

        let result = service.analyze(&Category::parse("Physics").unwrap()).await;

        assert!(matches!(result, Err(AppError::Wiki(WikiError::Api { .. }))));
    }

    #[tokio::test]
    async fn analyze_twice_gives_identical_output() {
        let service = create_service(physics_category());
        let category = Category::parse("Physics").unwrap();

        let first = service.analyze(&category).await.unwrap();
        let second = service.analyze(&category).await.unwrap();

        assert_eq!(first.word_count, second.word_count);
        assert_eq!(
            first.word_count.most_common(100),
            second.word_count.most_common(100)
        );
    }
}
