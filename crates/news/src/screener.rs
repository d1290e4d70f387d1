use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, warn};

use common::{Article, NewsProvider};

use crate::client::NewsApiClient;

/// Keywords scanned for in article titles and descriptions.
pub const KEYWORDS: [&str; 9] = [
    "crash",
    "dump",
    "pump",
    "hack",
    "regulation",
    "ban",
    "lawsuit",
    "scam",
    "partnership",
];

/// Screens recent news for a symbol against the fixed keyword set.
///
/// Degrades to an empty result on any failure — a news outage must never
/// block the sweep that asked for it.
pub struct NewsScreener {
    provider: Option<Arc<dyn NewsProvider>>,
}

impl NewsScreener {
    pub fn new(provider: Option<Arc<dyn NewsProvider>>) -> Self {
        Self { provider }
    }

    /// Build with the real NewsAPI client, or a disabled screener when no
    /// API key is configured.
    pub fn from_config(api_key: Option<String>) -> Self {
        match api_key {
            Some(key) => Self::new(Some(Arc::new(NewsApiClient::new(key)))),
            None => Self::new(None),
        }
    }

    /// Search news mentioning `symbol` (slashes stripped) and return the
    /// deduplicated keywords matched across titles and descriptions.
    pub async fn screen(&self, symbol: &str) -> Vec<String> {
        let Some(provider) = &self.provider else {
            warn!("NEWSAPI_KEY not set — news screening disabled");
            return Vec::new();
        };

        let query = symbol.replace('/', "");
        let articles = match provider.search(&query).await {
            Ok(articles) => articles,
            Err(e) => {
                warn!(symbol, error = %e, "News lookup failed — continuing without warnings");
                return Vec::new();
            }
        };

        let found = scan(&articles);
        if !found.is_empty() {
            debug!(symbol, keywords = ?found, "News keywords matched");
        }
        found
    }
}

/// Case-insensitive scan; the result is deduplicated and sorted so callers
/// render a stable warning line.
pub fn scan(articles: &[Article]) -> Vec<String> {
    let mut found = BTreeSet::new();
    for article in articles {
        let title = article.title.to_lowercase();
        let description = article.description.to_lowercase();
        for kw in KEYWORDS {
            if title.contains(kw) || description.contains(kw) {
                found.insert(kw.to_string());
            }
        }
    }
    found.into_iter().collect()
}
