//! Episodes for a season (`content/v2/cms/seasons/{id}/episodes`)

use serde_json::Value;

use crate::client::Client;
use crate::endpoints::WWW_BASE;
use crate::error::Result;
use crate::executor::ApiRequest;
use crate::models::episodes::Episodes;

/// Query parameters for the episodes endpoint.
#[derive(Debug, Clone)]
pub struct EpisodesParams {
    pub locale: String,
    pub preferred_audio_language: Option<String>,
}

impl Default for EpisodesParams {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            preferred_audio_language: None,
        }
    }
}

impl Client {
    /// Download the episode list as raw stamped JSON.
    pub async fn download_episodes(
        &self,
        season_id: &str,
        params: &EpisodesParams,
    ) -> Result<Value> {
        let mut request = ApiRequest::new(format!("content/v2/cms/seasons/{season_id}/episodes"))
            .query("locale", &params.locale);
        if let Some(lang) = &params.preferred_audio_language {
            request = request.query("preferred_audio_language", lang);
        }
        // TODO: the referer should be the parent series page; upstream
        // accepts the season-id form, so this has never been corrected.
        request = request.header("referer", format!("{WWW_BASE}/series/{season_id}"));

        self.executor.execute(&request).await
    }

    /// Validate raw episodes JSON against the strict model.
    pub async fn parse_episodes(&self, data: Value) -> Result<Episodes> {
        Ok(self.validator.validate("episodes", data).await?)
    }

    /// Download and validate the episode list.
    pub async fn get_episodes(&self, season_id: &str, params: &EpisodesParams) -> Result<Episodes> {
        let data = self.download_episodes(season_id, params).await?;
        self.parse_episodes(data).await
    }
}
