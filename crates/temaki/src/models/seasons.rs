//! Seasons-for-series schema (`content/v2/cms/series/{id}/seasons`)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Stamp;

/// Parameters recorded in the seasons provenance stamp. `force_locale` is
/// always sent, always empty — the web client does the same.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StampParams {
    pub locale: String,
    pub force_locale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_audio_language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Seasons {
    pub total: u32,
    pub data: Vec<Season>,
    pub meta: Map<String, Value>,
    pub temaki: Stamp<StampParams>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Season {
    pub id: String,
    pub identifier: String,
    pub channel_id: String,
    pub title: String,
    pub slug_title: String,
    pub series_id: String,
    pub season_number: u32,
    pub season_sequence_number: u32,
    pub season_display_number: String,
    pub description: String,
    pub is_complete: bool,
    pub is_mature: bool,
    pub mature_blocked: bool,
    pub is_subbed: bool,
    pub is_dubbed: bool,
    pub is_simulcast: bool,
    pub keywords: Vec<String>,
    pub season_tags: Vec<String>,
    pub audio_locale: String,
    pub audio_locales: Vec<String>,
    pub subtitle_locales: Vec<String>,
    pub availability_notes: String,
    pub number_of_episodes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versions: Option<Vec<SeasonVersion>>,
}

/// Audio-language variants of a season. Absent for seasons published before
/// upstream introduced per-language season entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeasonVersion {
    pub audio_locale: String,
    pub guid: String,
    pub original: bool,
    pub variant: String,
}
