use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use common::{Article, Error, NewsProvider, Result};

const BASE_URL: &str = "https://newsapi.org/v2/everything";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const PAGE_SIZE: &str = "5";

/// Client for the NewsAPI "everything" search endpoint.
pub struct NewsApiClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl NewsApiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .use_rustls_tls()
                .build()
                .expect("Failed to build HTTP client"),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl NewsProvider for NewsApiClient {
    async fn search(&self, query: &str) -> Result<Vec<Article>> {
        let resp = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", query),
                ("language", "en"),
                ("sortBy", "publishedAt"),
                ("pageSize", PAGE_SIZE),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| Error::Http(e.to_string()))?;

        if !status.is_success() {
            return Err(Error::News(format!("HTTP {status}: {body}")));
        }

        let search: SearchResponse =
            serde_json::from_str(&body).map_err(|e| Error::News(e.to_string()))?;
        Ok(search.articles)
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_response_tolerates_missing_fields() {
        let body = r#"{"status":"ok","totalResults":2,"articles":[
            {"title":"Exchange hack drains wallets","description":"..."},
            {"description":"no title on this one"},
            {}
        ]}"#;
        let resp: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.articles.len(), 3);
        assert_eq!(resp.articles[0].title, "Exchange hack drains wallets");
        assert_eq!(resp.articles[1].title, "");
        assert_eq!(resp.articles[2].description, "");
    }
}
