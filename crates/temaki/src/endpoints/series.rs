//! Series detail (`content/v2/cms/series/{id}`)

use serde_json::Value;

use crate::client::Client;
use crate::endpoints::WWW_BASE;
use crate::error::Result;
use crate::executor::ApiRequest;
use crate::models::series::Series;

/// Query parameters for the series endpoint.
#[derive(Debug, Clone)]
pub struct SeriesParams {
    pub locale: String,
    pub preferred_audio_language: Option<String>,
}

impl Default for SeriesParams {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            preferred_audio_language: None,
        }
    }
}

impl Client {
    /// Download series detail as raw stamped JSON.
    pub async fn download_series(&self, series_id: &str, params: &SeriesParams) -> Result<Value> {
        let mut request = ApiRequest::new(format!("content/v2/cms/series/{series_id}"))
            .query("locale", &params.locale);
        if let Some(lang) = &params.preferred_audio_language {
            request = request.query("preferred_audio_language", lang);
        }
        // The real page referer would also carry the series slug; the id-only
        // form is accepted.
        request = request.header("referer", format!("{WWW_BASE}/series/{series_id}"));

        self.executor.execute(&request).await
    }

    /// Validate raw series JSON against the strict model.
    pub async fn parse_series(&self, data: Value) -> Result<Series> {
        Ok(self.validator.validate("series", data).await?)
    }

    /// Download and validate series detail.
    pub async fn get_series(&self, series_id: &str, params: &SeriesParams) -> Result<Series> {
        let data = self.download_series(series_id, params).await?;
        self.parse_series(data).await
    }
}
