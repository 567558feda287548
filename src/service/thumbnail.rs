//! Icon lookup for items and spells.
//!
//! The icon is not exposed by any API, so the item or spell page is fetched and the icon
//! name is scraped from its inline script.

use serenity::async_trait;

use crate::{error::AppError, model::game::icon_url, util::scrape::extract_icon_name};

/// Source of page bodies.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches `url` and returns the response body as text.
    async fn fetch(&self, url: &str) -> Result<String, AppError>;
}

#[async_trait]
impl PageFetcher for reqwest::Client {
    async fn fetch(&self, url: &str) -> Result<String, AppError> {
        let body = self.get(url).send().await?.error_for_status()?.text().await?;

        Ok(body)
    }
}

/// Kind of database entry an id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbnailKind {
    Item,
    Spell,
}

impl ThumbnailKind {
    fn query_key(self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Spell => "spell",
        }
    }
}

pub struct ThumbnailService<'a, F: PageFetcher + ?Sized> {
    fetcher: &'a F,
    host: &'a str,
}

impl<'a, F: PageFetcher + ?Sized> ThumbnailService<'a, F> {
    pub fn new(fetcher: &'a F, host: &'a str) -> Self {
        Self { fetcher, host }
    }

    /// Finds the large icon URL of an item or spell
    ///
    /// # Arguments
    /// - `id`: Item or spell id as used in the site's query string
    /// - `kind`: Whether `id` is an item or a spell
    ///
    /// # Returns
    /// - `Ok(Some(url))`: Absolute URL of the icon
    /// - `Ok(None)`: The page does not name an icon in the expected place
    /// - `Err(AppError)`: Fetching the page failed
    pub async fn resolve(&self, id: &str, kind: ThumbnailKind) -> Result<Option<String>, AppError> {
        let url = format!("{}/?{}={}", self.host, kind.query_key(), id);

        let body = self.fetcher.fetch(&url).await?;

        let icon = extract_icon_name(&body).map(|icon| icon_url(icon, self.host));
        if icon.is_none() {
            tracing::debug!("No icon found on {}", url);
        }

        Ok(icon)
    }
}
