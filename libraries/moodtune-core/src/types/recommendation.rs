/// Mood analysis and preview types
use crate::types::{Track, Video};
use serde::{Deserialize, Serialize};

/// Track as suggested by the language model, before ids are assigned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedTrack {
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub genre: String,
}

/// Parsed language model answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodAnalysis {
    pub analysis: String,
    pub tracks: Vec<SuggestedTrack>,
    #[serde(default)]
    pub video_queries: Vec<String>,
}

impl MoodAnalysis {
    /// Assign ordinal ids to the suggested tracks, in answer order.
    pub fn numbered_tracks(&self) -> Vec<Track> {
        self.tracks
            .iter()
            .enumerate()
            .map(|(i, t)| Track::new(i.to_string(), &t.title, &t.artist, &t.genre))
            .collect()
    }
}

/// Everything shown for one mood submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodRecommendation {
    pub mood: String,
    pub analysis: String,
    pub tracks: Vec<Track>,
    pub videos: Vec<Video>,
}

/// First catalogue match for a track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewInfo {
    pub track_name: String,
    pub artist_name: String,
    #[serde(default)]
    pub collection_name: String,
    #[serde(default, rename = "artworkUrl100")]
    pub artwork_url: String,
    #[serde(default)]
    pub track_view_url: String,
    /// 30-second clip; absent for many catalogue entries
    #[serde(default)]
    pub preview_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_tracks_are_ordinal() {
        let analysis: MoodAnalysis = serde_json::from_str(
            r#"{
                "analysis": "설레는 아침",
                "tracks": [
                    {"title": "A", "artist": "X", "genre": "Pop"},
                    {"title": "B", "artist": "Y", "genre": "Jazz"}
                ],
                "videoQueries": ["morning playlist"]
            }"#,
        )
        .unwrap();

        let tracks = analysis.numbered_tracks();
        assert_eq!(tracks[0].id, "0");
        assert_eq!(tracks[1].id, "1");
        assert_eq!(tracks[1].genre, "Jazz");
        assert_eq!(analysis.video_queries, vec!["morning playlist"]);
    }

    #[test]
    fn preview_without_url_is_valid() {
        let info: PreviewInfo = serde_json::from_value(serde_json::json!({
            "trackName": "Holocene",
            "artistName": "Bon Iver",
            "collectionName": "Bon Iver",
            "artworkUrl100": "https://example.com/a.jpg",
            "trackViewUrl": "https://music.apple.com/x",
            "previewUrl": null
        }))
        .unwrap();

        assert!(info.preview_url.is_none());
        assert_eq!(info.artwork_url, "https://example.com/a.jpg");
    }
}
