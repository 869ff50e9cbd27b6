use std::future::Future;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    error::FetchError,
    spotify::{SpotifyClient, client::take_field},
};

/// One page of an offset-paginated listing.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// False only when the response said `"next": null`.
    pub has_next: bool,
}

impl<T: DeserializeOwned> Page<T> {
    pub fn from_json(json: Value) -> Result<Self, FetchError> {
        let has_next = !matches!(json.get("next"), Some(Value::Null));
        let items = take_field(json, "items")?;
        Ok(Self { items, has_next })
    }
}

/// Items accumulated by a pagination loop. `error` is set when a page
/// request failed; `items` then holds everything fetched before it.
#[derive(Debug)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub error: Option<FetchError>,
    pub requests: usize,
}

impl<T> Default for Paged<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            error: None,
            requests: 0,
        }
    }
}

impl<T> Paged<T> {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Drives `fetch` from offset 0 in steps of `limit`.
///
/// Stops on an empty page, a page shorter than `limit`, a page that reports
/// no next page, or a failed request. Pages are requested strictly one
/// after the other since each offset depends on the previous page.
pub async fn paginate<T, F, Fut>(limit: usize, mut fetch: F) -> Paged<T>
where
    F: FnMut(usize) -> Fut,
    Fut: Future<Output = Result<Page<T>, FetchError>>,
{
    let mut paged = Paged::default();
    let mut offset = 0;

    loop {
        paged.requests += 1;
        let page = match fetch(offset).await {
            Ok(page) => page,
            Err(e) => {
                paged.error = Some(e);
                break;
            }
        };

        if page.items.is_empty() {
            break;
        }

        let count = page.items.len();
        paged.items.extend(page.items);

        if count < limit || !page.has_next {
            break;
        }
        offset += limit;
    }

    paged
}

impl SpotifyClient {
    pub(crate) async fn fetch_page<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        limit: usize,
        offset: usize,
    ) -> Result<Page<T>, FetchError> {
        let mut params = query.to_vec();
        params.push(("limit", limit.to_string()));
        params.push(("offset", offset.to_string()));

        let json = self.get_json(path, &params).await?;
        Page::from_json(json)
    }

    /// Collects every item of the offset-paginated listing at `path`.
    pub(crate) async fn paginate_path<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        limit: usize,
    ) -> Paged<T> {
        paginate(limit, move |offset| self.fetch_page(path, query, limit, offset)).await
    }
}
