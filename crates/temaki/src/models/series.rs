//! Series detail schema (`content/v2/cms/series/{id}`)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Stamp;

/// Parameters recorded in the series provenance stamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StampParams {
    pub locale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_audio_language: Option<String>,
}

/// Series detail envelope. `data` carries exactly one entry for an existing
/// series; the envelope shape is shared with the listing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Series {
    pub total: u32,
    pub data: Vec<SeriesEntry>,
    pub meta: Map<String, Value>,
    pub temaki: Stamp<StampParams>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeriesEntry {
    pub id: String,
    pub channel_id: String,
    pub title: String,
    pub slug: String,
    pub slug_title: String,
    pub description: String,
    pub extended_description: String,
    pub keywords: Vec<String>,
    pub season_tags: Vec<String>,
    pub images: Images,
    pub episode_count: u32,
    pub season_count: u32,
    pub media_count: u32,
    pub content_provider: String,
    pub maturity_ratings: Vec<String>,
    pub extended_maturity_rating: ExtendedMaturityRating,
    pub is_mature: bool,
    pub mature_blocked: bool,
    pub is_subbed: bool,
    pub is_dubbed: bool,
    pub is_simulcast: bool,
    pub seo_title: String,
    pub seo_description: String,
    pub subtitle_locales: Vec<String>,
    pub audio_locales: Vec<String>,
    pub availability_status: String,
    pub availability_notes: String,
    pub series_launch_year: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_descriptors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_presentation: Option<LanguagePresentation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub awards: Option<Vec<Award>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub livestream: Option<Livestream>,
}

/// Unlike the browse schema, every fixture observed for series detail
/// carries a complete maturity rating, so the fields are required here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtendedMaturityRating {
    pub level: String,
    pub rating: String,
    pub system: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguagePresentation {
    pub audio_notation: String,
    pub text_notation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Award {
    pub icon_url: String,
    pub is_current_award: bool,
    pub is_winner: bool,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Livestream {
    pub start_date: String,
    pub end_date: String,
    pub episode_start_date: String,
    pub episode_end_date: String,
    pub episode_id: String,
    pub countdown_visibility: u32,
    pub images: Images,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Images {
    pub poster_tall: Vec<Vec<Poster>>,
    pub poster_wide: Vec<Vec<Poster>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Poster {
    pub height: u32,
    pub source: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub width: u32,
}
