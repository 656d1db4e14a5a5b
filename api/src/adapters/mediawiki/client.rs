//! MediaWiki API client implementation

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::entities::Category;
use crate::domain::ports::WikiClient;
use crate::error::WikiError;

/// Maximum `cmlimit` allowed for regular API users
const CATEGORY_MEMBER_LIMIT: &str = "500";

/// Main namespace only, so subcategories and files are skipped
const MEMBER_TYPE: &str = "page";

/// Implementation of the MediaWiki API client
pub struct MediaWikiClient {
    http: Client,
    api_url: String,
    continue_delay: Duration,
}

impl MediaWikiClient {
    pub fn new(
        api_url: String,
        user_agent: &str,
        timeout: Duration,
        continue_delay: Duration,
    ) -> Result<Self, WikiError> {
        let http = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            continue_delay,
        })
    }

    async fn send_query<T: for<'de> Deserialize<'de>>(
        &self,
        params: &[(&str, String)],
        continuation: Option<&HashMap<String, String>>,
    ) -> Result<ApiEnvelope<T>, WikiError> {
        let mut request = self
            .http
            .get(&self.api_url)
            .query(&[("action", "query"), ("format", "json"), ("formatversion", "2")])
            .query(params);
        if let Some(cont) = continuation {
            request = request.query(cont);
        }

        let resp = request.send().await?;
        self.handle_response(resp).await
    }

    async fn query<T: Default + for<'de> Deserialize<'de>>(
        &self,
        params: &[(&str, String)],
    ) -> Result<T, WikiError> {
        self.send_query::<T>(params, None).await?.into_result()
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, WikiError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| WikiError::Deserialization(e.to_string()))
        } else if status.as_u16() == 429 {
            Err(WikiError::RateLimited)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(WikiError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Top-level shape shared by every `action=query` response
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    query: Option<T>,
    #[serde(rename = "continue", default)]
    continuation: Option<HashMap<String, String>>,
    #[serde(default)]
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: String,
    #[serde(default)]
    info: String,
}

/// Error codes MediaWiki uses for titles it cannot parse
const INVALID_TITLE_CODES: &[&str] = &["invalidtitle", "invalidcategory"];

impl From<ApiErrorBody> for WikiError {
    fn from(err: ApiErrorBody) -> Self {
        if INVALID_TITLE_CODES.contains(&err.code.as_str()) {
            WikiError::InvalidTitle(err.info)
        } else {
            WikiError::Query {
                code: err.code,
                info: err.info,
            }
        }
    }
}

impl<T> ApiEnvelope<T> {
    fn into_result(self) -> Result<T, WikiError>
    where
        T: Default,
    {
        self.into_parts().map(|(query, _)| query)
    }

    fn into_parts(self) -> Result<(T, Option<HashMap<String, String>>), WikiError>
    where
        T: Default,
    {
        if let Some(err) = self.error {
            return Err(err.into());
        }
        Ok((self.query.unwrap_or_default(), self.continuation))
    }
}

/// Response types from the MediaWiki API
#[derive(Debug, Default, Deserialize)]
struct CategoryMembersQuery {
    #[serde(default)]
    categorymembers: Vec<CategoryMember>,
}

#[derive(Debug, Deserialize)]
struct CategoryMember {
    title: String,
}

#[derive(Debug, Default, Deserialize)]
struct PagesQuery {
    #[serde(default)]
    pages: Vec<PageInfo>,
}

#[derive(Debug, Deserialize)]
struct PageInfo {
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    invalid: bool,
    #[serde(default)]
    extract: Option<String>,
}

impl PageInfo {
    fn exists(&self) -> bool {
        !self.missing && !self.invalid
    }
}

#[async_trait]
impl WikiClient for MediaWikiClient {
    async fn category_exists(&self, category: &Category) -> Result<bool, WikiError> {
        let result: PagesQuery = self
            .query(&[("titles", category.title()), ("prop", "info".to_string())])
            .await?;

        Ok(result.pages.first().map(PageInfo::exists).unwrap_or(false))
    }

    async fn list_category_members(
        &self,
        category: &Category,
    ) -> Result<Vec<String>, WikiError> {
        let mut titles = Vec::new();
        let mut continuation: Option<HashMap<String, String>> = None;

        loop {
            let params = [
                ("list", "categorymembers".to_string()),
                ("cmtitle", category.title()),
                ("cmlimit", CATEGORY_MEMBER_LIMIT.to_string()),
                ("cmtype", MEMBER_TYPE.to_string()),
            ];

            let envelope: ApiEnvelope<CategoryMembersQuery> =
                self.send_query(&params, continuation.as_ref()).await?;
            let (batch, next) = envelope.into_parts()?;
            titles.extend(batch.categorymembers.into_iter().map(|m| m.title));

            match next {
                Some(next) if next.contains_key("cmcontinue") => {
                    tracing::debug!(
                        "Fetched {} members of {} so far, continuing",
                        titles.len(),
                        category.title()
                    );
                    continuation = Some(next);
                    tokio::time::sleep(self.continue_delay).await;
                }
                _ => break,
            }
        }

        tracing::info!("Found {} pages in {}", titles.len(), category.title());
        Ok(titles)
    }

    async fn fetch_page_text(&self, title: &str) -> Result<String, WikiError> {
        let result: PagesQuery = self
            .query(&[
                ("titles", title.to_string()),
                ("prop", "extracts".to_string()),
                ("explaintext", "1".to_string()),
                ("exsectionformat", "plain".to_string()),
            ])
            .await?;

        Ok(result
            .pages
            .into_iter()
            .find_map(|p| p.extract)
            .unwrap_or_default())
    }
}
