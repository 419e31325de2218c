//! Forward-only paging over remote list endpoints.
//!
//! Neither service is trusted to report a total count or a "has more" flag,
//! so a listing ends only when a page comes back empty. A short page is
//! not treated as the last one.

use futures::stream::{self, Stream, TryStreamExt};
use std::future::Future;

/// Page size used when listing from the source service.
pub const SOURCE_PAGE_SIZE: u32 = 100;

/// Page size used when listing from the destination service.
///
/// Gitea caps list responses at 50 items unless the server is reconfigured.
pub const DESTINATION_PAGE_SIZE: u32 = 50;

/// A single page request, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number, starting at 1.
    pub page: u32,
    /// Requested number of items per page.
    pub per_page: u32,
}

/// Cursor over a paged listing.
///
/// The pager only tracks which page to ask for next; fetching is delegated to
/// a caller-supplied closure so the same cursor works for every endpoint.
#[derive(Debug, Clone)]
pub struct Pager {
    next: u32,
    per_page: u32,
    exhausted: bool,
}

impl Pager {
    /// Creates a pager starting at page 1.
    #[must_use]
    pub fn new(per_page: u32) -> Self {
        Self::starting_at(1, per_page)
    }

    /// Creates a pager that resumes from the given page.
    #[must_use]
    pub fn starting_at(page: u32, per_page: u32) -> Self {
        Self {
            next: page.max(1),
            per_page,
            exhausted: false,
        }
    }

    /// Returns true once an empty page was seen or a fetch failed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Fetches the next page.
    ///
    /// Returns `Ok(None)` once the listing is exhausted. A failed fetch ends
    /// the sequence; later calls return `Ok(None)` without fetching.
    ///
    /// # Errors
    ///
    /// Propagates the error returned by `fetch`.
    pub async fn next_page<T, E, F, Fut>(&mut self, fetch: F) -> Result<Option<Vec<T>>, E>
    where
        F: FnOnce(PageRequest) -> Fut,
        Fut: Future<Output = Result<Vec<T>, E>>,
    {
        if self.exhausted {
            return Ok(None);
        }

        let request = PageRequest {
            page: self.next,
            per_page: self.per_page,
        };

        let items = match fetch(request).await {
            Ok(items) => items,
            Err(e) => {
                self.exhausted = true;
                return Err(e);
            }
        };

        if items.is_empty() {
            self.exhausted = true;
            return Ok(None);
        }

        self.next += 1;
        Ok(Some(items))
    }

    /// Turns the pager into a stream of non-empty pages.
    pub fn into_stream<T, E, F, Fut>(self, fetch: F) -> impl Stream<Item = Result<Vec<T>, E>>
    where
        F: FnMut(PageRequest) -> Fut,
        Fut: Future<Output = Result<Vec<T>, E>>,
    {
        stream::try_unfold((self, fetch), |(mut pager, mut fetch)| async move {
            let page = pager.next_page(&mut fetch).await?;
            Ok::<_, E>(page.map(|items| (items, (pager, fetch))))
        })
    }

    /// Fetches every remaining page and concatenates the items.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `fetch`.
    pub async fn drain<T, E, F, Fut>(self, fetch: F) -> Result<Vec<T>, E>
    where
        F: FnMut(PageRequest) -> Fut,
        Fut: Future<Output = Result<Vec<T>, E>>,
    {
        self.into_stream(fetch).try_concat().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of(len: usize) -> Vec<usize> {
        (0..len).collect()
    }

    #[tokio::test]
    async fn drain_stops_on_empty_page() {
        let sizes = [100, 100, 37, 0];
        let mut requested = Vec::new();

        let items = Pager::new(SOURCE_PAGE_SIZE)
            .drain(|req: PageRequest| {
                requested.push(req);
                let items = page_of(sizes[req.page as usize - 1]);
                async move { Ok::<_, ()>(items) }
            })
            .await
            .unwrap();

        assert_eq!(items.len(), 237);
        assert_eq!(requested.len(), 4);
        assert!(requested
            .iter()
            .enumerate()
            .all(|(i, req)| req.page == i as u32 + 1 && req.per_page == 100));
    }

    #[tokio::test]
    async fn short_page_does_not_end_listing() {
        let sizes = [3, 2, 0];
        let mut calls = 0;

        let items = Pager::new(10)
            .drain(|req: PageRequest| {
                calls += 1;
                let items = page_of(sizes[req.page as usize - 1]);
                async move { Ok::<_, ()>(items) }
            })
            .await
            .unwrap();

        assert_eq!(items.len(), 5);
        assert_eq!(calls, 3);
    }

    #[tokio::test]
    async fn error_ends_the_sequence() {
        let mut pager = Pager::new(10);

        let first = pager
            .next_page(|_| async { Err::<Vec<u8>, _>("boom") })
            .await;
        assert_eq!(first, Err("boom"));
        assert!(pager.is_exhausted());

        let second = pager
            .next_page(|_| async { Ok::<_, &str>(vec![1u8]) })
            .await;
        assert_eq!(second, Ok(None));
    }

    #[tokio::test]
    async fn resumes_from_given_page() {
        let mut pager = Pager::starting_at(3, 20);
        let mut seen = None;

        let page = pager
            .next_page(|req| {
                seen = Some(req);
                async { Ok::<_, ()>(vec![1]) }
            })
            .await
            .unwrap();

        assert_eq!(page, Some(vec![1]));
        assert_eq!(
            seen,
            Some(PageRequest {
                page: 3,
                per_page: 20
            })
        );
    }
}
