//! Seasons for a series (`content/v2/cms/series/{id}/seasons`)

use serde_json::Value;

use crate::client::Client;
use crate::endpoints::WWW_BASE;
use crate::error::Result;
use crate::executor::ApiRequest;
use crate::models::seasons::Seasons;

/// Query parameters for the seasons endpoint.
#[derive(Debug, Clone)]
pub struct SeasonsParams {
    pub locale: String,
    pub preferred_audio_language: Option<String>,
}

impl Default for SeasonsParams {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            preferred_audio_language: None,
        }
    }
}

impl Client {
    /// Download the season list as raw stamped JSON.
    pub async fn download_seasons(&self, series_id: &str, params: &SeasonsParams) -> Result<Value> {
        // `force_locale` is always sent empty, matching the web client.
        let mut request = ApiRequest::new(format!("content/v2/cms/series/{series_id}/seasons"))
            .query("locale", &params.locale)
            .query("force_locale", "");
        if let Some(lang) = &params.preferred_audio_language {
            request = request.query("preferred_audio_language", lang);
        }
        request = request.header("referer", format!("{WWW_BASE}/series/{series_id}"));

        self.executor.execute(&request).await
    }

    /// Validate raw seasons JSON against the strict model.
    pub async fn parse_seasons(&self, data: Value) -> Result<Seasons> {
        Ok(self.validator.validate("seasons", data).await?)
    }

    /// Download and validate the season list.
    pub async fn get_seasons(&self, series_id: &str, params: &SeasonsParams) -> Result<Seasons> {
        let data = self.download_seasons(series_id, params).await?;
        self.parse_seasons(data).await
    }
}
