//! Episodes-for-season schema (`content/v2/cms/seasons/{id}/episodes`)

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Stamp;

/// Parameters recorded in the episodes provenance stamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StampParams {
    pub locale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_audio_language: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Episodes {
    pub total: u32,
    pub data: Vec<Episode>,
    pub meta: Map<String, Value>,
    pub temaki: Stamp<StampParams>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Episode {
    pub id: String,
    pub title: String,
    pub slug_title: String,
    pub description: String,
    pub series_id: String,
    pub series_title: String,
    pub series_slug_title: String,
    pub season_id: String,
    pub season_title: String,
    pub season_slug_title: String,
    pub season_number: u32,
    /// Display number; not always numeric (specials use "SP", "13.5", ...).
    pub episode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode_number: Option<u32>,
    /// Ordering key across a season; fractional for mid-season specials.
    /// Kept as a raw JSON number: upstream sends `1` for whole values and
    /// `12.5` for specials, and re-serializing must reproduce either form.
    pub sequence_number: serde_json::Number,
    pub production_episode_id: String,
    pub episode_air_date: String,
    pub upload_date: String,
    pub premium_available_date: String,
    pub availability_notes: String,
    pub hd_flag: bool,
    pub is_mature: bool,
    pub mature_blocked: bool,
    pub maturity_ratings: Vec<String>,
    pub extended_maturity_rating: ExtendedMaturityRating,
    pub is_subbed: bool,
    pub is_dubbed: bool,
    pub is_clip: bool,
    pub is_premium_only: bool,
    pub audio_locale: String,
    pub subtitle_locales: Vec<String>,
    pub images: EpisodeImages,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_episode_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_episode_title: Option<String>,
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
pub struct EpisodeImages {
    pub thumbnail: Vec<Vec<Thumbnail>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Thumbnail {
    pub height: u32,
    pub source: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub width: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "total": 1,
            "data": [{
                "id": "GRDKJZ81Y",
                "title": "That's How Love Starts, Ya Know?",
                "slug_title": "thats-how-love-starts-ya-know",
                "description": "Momo meets Okarun.",
                "series_id": "GG5H5XQ0D",
                "series_title": "Dan Da Dan",
                "series_slug_title": "dan-da-dan",
                "season_id": "G619CPMQ1",
                "season_title": "Dan Da Dan",
                "season_slug_title": "dan-da-dan",
                "season_number": 1,
                "episode": "1",
                "episode_number": 1,
                "sequence_number": 1,
                "production_episode_id": "DDD-001",
                "episode_air_date": "2024-10-04T00:26:00+09:00",
                "upload_date": "2024-10-04T00:26:00+09:00",
                "premium_available_date": "2024-10-04T00:26:00+09:00",
                "availability_notes": "",
                "hd_flag": true,
                "is_mature": false,
                "mature_blocked": false,
                "maturity_ratings": ["TV-14"],
                "extended_maturity_rating": {},
                "is_subbed": true,
                "is_dubbed": false,
                "is_clip": false,
                "is_premium_only": true,
                "audio_locale": "ja-JP",
                "subtitle_locales": ["en-US"],
                "images": {
                    "thumbnail": [[
                        {"height": 360, "source": "https://img.example/thumb.jpg", "type": "thumbnail", "width": 640}
                    ]]
                },
                "duration_ms": 1421000,
                "next_episode_id": "GRDKJZ82Y",
                "next_episode_title": "That's a Space Alien, Ain't It?!"
            }],
            "meta": {},
            "temaki": {
                "params": {"locale": "en-US"},
                "headers": {"referer": "https://www.crunchyroll.com/series/G619CPMQ1"},
                "url": "https://beta-api.crunchyroll.com/content/v2/cms/seasons/G619CPMQ1/episodes"
            }
        })
    }

    #[test]
    fn sample_round_trips() {
        let raw = sample();
        let episodes: Episodes = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(episodes.data[0].episode_number, Some(1));
        assert_eq!(episodes.data[0].sequence_number.as_u64(), Some(1));
        assert_eq!(serde_json::to_value(&episodes).unwrap(), raw);
    }

    #[test]
    fn special_episode_without_number_round_trips() {
        let mut raw = sample();
        let entry = raw["data"][0].as_object_mut().unwrap();
        entry.remove("episode_number");
        entry.insert("episode".into(), json!("SP"));
        entry.insert("sequence_number".into(), json!(12.5));
        let episodes: Episodes = serde_json::from_value(raw.clone()).unwrap();
        assert!(episodes.data[0].episode_number.is_none());
        assert_eq!(serde_json::to_value(&episodes).unwrap(), raw);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut raw = sample();
        raw["data"][0]["streams_link"] = json!("/content/v2/streams");
        assert!(serde_json::from_str::<Episodes>(&raw.to_string()).is_err());
    }
}
