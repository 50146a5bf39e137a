//! Next-link pagination.
//!
//! List responses carry one page of items plus an opaque URL for the next
//! page. [`fetch_all`] follows the links to the end; [`stream`] exposes the
//! same traversal as a [`futures::Stream`] so callers can stop early.

use crate::client::NetworkClient;
use crate::error::Result;
use futures::stream::{self, Stream, TryStreamExt};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// One page of a list response.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
pub struct Page<T> {
    /// Items on this page.
    #[serde(default)]
    pub value: Vec<T>,
    /// Opaque URL of the next page, if any.
    #[serde(rename = "nextLink", default)]
    pub next_link: Option<String>,
}

impl<T> Page<T> {
    /// Whether another page follows this one.
    pub fn has_more(&self) -> bool {
        self.next_link.is_some()
    }
}

/// Fetch one page from a collection or next-link URL.
pub async fn fetch_page<T: DeserializeOwned>(
    client: &NetworkClient,
    url: &str,
) -> Result<Page<T>> {
    client.get_json(url, &[StatusCode::OK]).await
}

/// Fetch all items (auto-paginate)
pub async fn fetch_all<T: DeserializeOwned>(
    client: &NetworkClient,
    first_url: String,
) -> Result<Vec<T>> {
    let mut all_items = Vec::new();
    let mut url = Some(first_url);

    while let Some(current) = url {
        let page: Page<T> = fetch_page(client, &current).await?;
        all_items.extend(page.value);
        url = page.next_link;
    }

    Ok(all_items)
}

/// Stream items across pages, fetching each page lazily.
pub fn stream<'a, T>(
    client: &'a NetworkClient,
    first_url: String,
) -> impl Stream<Item = Result<T>> + 'a
where
    T: DeserializeOwned + 'a,
{
    stream::try_unfold(Some(first_url), move |next| async move {
        let Some(url) = next else { return Ok::<_, crate::error::Error>(None) };
        let page: Page<T> = fetch_page(client, &url).await?;
        let items = stream::iter(page.value.into_iter().map(Ok));
        Ok(Some((items, page.next_link)))
    })
    .try_flatten()
}
