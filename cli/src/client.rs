//! HTTP client for the WikiCloud API

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

/// One word of the cloud as returned by `POST /analyze`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WordCloudEntry {
    pub text: String,
    pub size: u64,
}

/// Response body of `POST /analyze`. The palette is only of interest to
/// the browser and is left out.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordCloud {
    pub category: String,
    pub page_count: usize,
    pub word_cloud_data: Vec<WordCloudEntry>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for communicating with the WikiCloud API
#[derive(Clone)]
pub struct WikiCloudClient {
    client: reqwest::Client,
    base_url: String,
}

impl WikiCloudClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("wikicloud-cli/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Analyze a category and return the raw JSON body
    pub async fn analyze_json(
        &self,
        category: &str,
        palette: Option<&str>,
    ) -> Result<serde_json::Value> {
        let body = self.post_analyze(category, palette).await?;
        serde_json::from_str(&body).context("Server returned invalid JSON")
    }

    /// Analyze a category
    pub async fn analyze(&self, category: &str, palette: Option<&str>) -> Result<WordCloud> {
        let body = self.post_analyze(category, palette).await?;
        serde_json::from_str(&body).context("Unexpected response from server")
    }

    async fn post_analyze(&self, category: &str, palette: Option<&str>) -> Result<String> {
        let mut form = vec![("category", category)];
        if let Some(p) = palette {
            form.push(("palette", p));
        }

        tracing::debug!("POST {}/analyze category={:?}", self.base_url, category);

        let response = self
            .client
            .post(format!("{}/analyze", self.base_url))
            .form(&form)
            .send()
            .await
            .with_context(|| format!("Failed to reach WikiCloud API at {}", self.base_url))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read response body")?;

        if status.is_success() {
            Ok(body)
        } else {
            Err(anyhow!("{}", error_message(status.as_u16(), &body)))
        }
    }
}

/// Extract the `error` field of an error response, falling back to the raw body
fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) if body.trim().is_empty() => format!("Server returned HTTP {}", status),
        Err(_) => format!("Server returned HTTP {}: {}", status, body.trim()),
    }
}
