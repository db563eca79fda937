//! Browse listing schema (`content/v2/discover/browse`)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Stamp;

/// Parameters recorded in the browse provenance stamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StampParams {
    pub n: String,
    pub sort_by: String,
    pub ratings: String,
    pub locale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_audio_language: Option<String>,
}

/// One page of browse results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Browse {
    pub total: u32,
    pub data: Vec<BrowseEntry>,
    pub meta: Map<String, Value>,
    pub temaki: Stamp<StampParams>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BrowseEntry {
    pub id: String,
    pub external_id: String,
    pub channel_id: String,
    pub title: String,
    pub slug: String,
    pub slug_title: String,
    pub description: String,
    pub promo_title: String,
    pub promo_description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub new: bool,
    pub last_public: String,
    pub linked_resource_key: String,
    pub images: Images,
    pub rating: Rating,
    pub series_metadata: SeriesMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeriesMetadata {
    pub audio_locales: Vec<String>,
    pub availability_notes: String,
    pub episode_count: u32,
    pub extended_description: String,
    pub extended_maturity_rating: ExtendedMaturityRating,
    pub is_dubbed: bool,
    pub is_mature: bool,
    pub is_simulcast: bool,
    pub is_subbed: bool,
    pub language_presentation: LanguagePresentation,
    pub mature_blocked: bool,
    pub maturity_ratings: Vec<String>,
    pub season_count: u32,
    pub series_launch_year: u32,
    pub subtitle_locales: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_descriptors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub awards: Option<Vec<Award>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub livestream: Option<Livestream>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtendedMaturityRating {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
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
    pub countdown_visibility: u32,
    pub end_date: String,
    pub episode_end_date: String,
    pub episode_id: String,
    pub episode_start_date: String,
    pub images: Images,
    pub start_date: String,
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

/// Star-rating histogram. Upstream keys the buckets `1s`..`5s`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rating {
    #[serde(rename = "1s")]
    pub ones: RatingBucket,
    #[serde(rename = "2s")]
    pub twos: RatingBucket,
    #[serde(rename = "3s")]
    pub threes: RatingBucket,
    #[serde(rename = "4s")]
    pub fours: RatingBucket,
    #[serde(rename = "5s")]
    pub fives: RatingBucket,
    pub average: String,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RatingBucket {
    pub displayed: String,
    pub percentage: u32,
    pub unit: String,
}
