//! Discovery phase: walk the favorites listing and record every item.

use anyhow::{Context, Result};
use std::collections::{BTreeSet, HashSet};
use url::Url;

use super::{DiscoverReport, Pipeline, StopReason};
use crate::extract::{extract_favorites, extract_next_page, Favorite};
use crate::fetch::FetchError;

/// Discovery failure that leaves nothing to work with.
#[derive(Debug, thiserror::Error)]
pub enum DiscoverError {
    #[error("username must not be empty")]
    EmptyUsername,
    #[error("first listing page {url} could not be fetched")]
    FirstPage {
        url: String,
        #[source]
        source: FetchError,
    },
}

impl Pipeline {
    /// `{base_url}/favorites/{username}/` with the username as one
    /// percent-encoded path segment.
    fn listing_url(&self, username: &str) -> Result<String> {
        if username.trim().is_empty() {
            return Err(DiscoverError::EmptyUsername.into());
        }
        let base = &self.settings.base_url;
        let mut url = Url::parse(base).with_context(|| format!("invalid base_url {}", base))?;
        url.path_segments_mut()
            .map_err(|()| anyhow::anyhow!("base_url {} cannot hold a path", base))?
            .pop_if_empty()
            .extend(["favorites", username, ""]);
        Ok(url.into())
    }

    /// Crawl `/favorites/{username}/` page by page and insert-or-ignore every
    /// favorite found. The crawl ends on the last page, on a repeated
    /// next-page token, at `max_listing_pages`, or when a later page fails;
    /// whatever was collected is persisted in all of those cases.
    pub async fn discover(&self, username: &str) -> Result<DiscoverReport> {
        let mut url = self.listing_url(username)?;
        let mut found: BTreeSet<Favorite> = BTreeSet::new();
        let mut followed: HashSet<String> = HashSet::new();
        let mut pages = 0usize;

        let stop = loop {
            let body = match self.get_page(&url).await? {
                Ok(body) => body,
                Err(source) if pages == 0 => {
                    return Err(DiscoverError::FirstPage { url, source }.into());
                }
                Err(e) => {
                    tracing::warn!("listing page {} failed ({}); keeping {} favorites found so far", url, e, found.len());
                    break StopReason::FetchFailed;
                }
            };
            pages += 1;

            let favorites = extract_favorites(&body);
            let next = extract_next_page(&body, username);
            tracing::info!(
                "Found {} favorite links on '{}'. More is {}",
                favorites.len(),
                url,
                next.is_some()
            );
            found.extend(favorites);

            let Some(token) = next else {
                break StopReason::LastPage;
            };
            if !followed.insert(token.clone()) {
                tracing::warn!("next-page token {} seen before; stopping", token);
                break StopReason::RepeatedToken;
            }
            if pages >= self.settings.max_listing_pages {
                tracing::warn!("reached max_listing_pages ({}); stopping", pages);
                break StopReason::PageLimit;
            }
            url = self.site_url(&token);
        };

        let inserted = self.store.insert_favorites(&found).await?;
        tracing::info!(
            "discovery for {}: {} pages, {} favorites, {} new",
            username,
            pages,
            found.len(),
            inserted
        );
        Ok(DiscoverReport {
            pages,
            found: found.len(),
            inserted,
            stop,
        })
    }
}
