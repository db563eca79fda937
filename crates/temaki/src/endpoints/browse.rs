//! Browse listing (`content/v2/discover/browse`)
//!
//! Paginated via `start`/`n`. The parameter defaults match the query the
//! public site issues for its "new videos" page, so responses line up with
//! the fixture set observed from real traffic.

use chrono::{DateTime, FixedOffset};
use serde_json::Value;

use crate::client::Client;
use crate::endpoints::WWW_BASE;
use crate::error::{Error, Result};
use crate::executor::ApiRequest;
use crate::models::browse::{Browse, BrowseEntry};

/// Query parameters for the browse endpoint.
#[derive(Debug, Clone)]
pub struct BrowseParams {
    pub n: u32,
    pub sort_by: String,
    pub ratings: String,
    pub locale: String,
    pub start: Option<u32>,
    pub preferred_audio_language: Option<String>,
}

impl Default for BrowseParams {
    fn default() -> Self {
        Self {
            n: 36,
            sort_by: "newly_added".to_string(),
            ratings: "true".to_string(),
            locale: "en-US".to_string(),
            start: None,
            preferred_audio_language: None,
        }
    }
}

impl Client {
    /// Download one page of browse results as raw stamped JSON.
    pub async fn download_browse(&self, params: &BrowseParams) -> Result<Value> {
        let mut request = ApiRequest::new("content/v2/discover/browse")
            .query("n", params.n.to_string())
            .query("sort_by", &params.sort_by)
            .query("ratings", &params.ratings)
            .query("locale", &params.locale);
        if let Some(start) = params.start {
            request = request.query("start", start.to_string());
        }
        if let Some(lang) = &params.preferred_audio_language {
            request = request.query("preferred_audio_language", lang);
        }
        request = request.header("referer", format!("{WWW_BASE}/videos/new"));

        self.executor.execute(&request).await
    }

    /// Validate raw browse JSON against the strict model.
    pub async fn parse_browse(&self, data: Value) -> Result<Browse> {
        Ok(self.validator.validate("browse", data).await?)
    }

    /// Download and validate one page of browse results.
    pub async fn get_browse(&self, params: &BrowseParams) -> Result<Browse> {
        let data = self.download_browse(params).await?;
        self.parse_browse(data).await
    }

    /// Walk browse pages from the top until the last entry on a page was
    /// published at or before `end`, or a short page signals the end of the
    /// catalog. `params.start` is ignored; the walk always begins at 0.
    pub async fn get_browse_since(
        &self,
        end: DateTime<FixedOffset>,
        params: &BrowseParams,
    ) -> Result<Vec<Browse>> {
        let mut params = params.clone();
        let mut start = 0;
        let mut pages = Vec::new();

        loop {
            params.start = Some(start);
            let page = self.get_browse(&params).await?;
            let page_len = page.data.len() as u32;

            let Some(last) = page.data.last() else {
                pages.push(page);
                return Ok(pages);
            };
            let last_public = parse_timestamp(&last.last_public)?;

            pages.push(page);
            if last_public <= end || page_len < params.n {
                return Ok(pages);
            }
            start += params.n;
        }
    }
}

/// Flatten browse pages into their entries.
pub fn browse_entries(pages: Vec<Browse>) -> Vec<BrowseEntry> {
    pages.into_iter().flat_map(|page| page.data).collect()
}

fn parse_timestamp(raw: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw)
        .map_err(|e| Error::Decode(format!("invalid last_public timestamp `{raw}`: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_new_videos_page() {
        let params = BrowseParams::default();
        assert_eq!(params.n, 36);
        assert_eq!(params.sort_by, "newly_added");
        assert_eq!(params.ratings, "true");
        assert_eq!(params.locale, "en-US");
        assert!(params.start.is_none());
    }

    #[test]
    fn timestamps_parse_with_offset_and_zulu() {
        assert!(parse_timestamp("2025-07-03T17:00:00Z").is_ok());
        assert!(parse_timestamp("2024-10-04T00:26:00+09:00").is_ok());
        assert!(parse_timestamp("not a date").is_err());
    }
}
