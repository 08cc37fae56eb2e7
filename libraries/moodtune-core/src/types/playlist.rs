/// Playlist domain types
use crate::types::{MoodRecommendation, Track, Video};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

const NAME_PREFIX_CHARS: usize = 50;
const NAME_SUFFIX: &str = " 플레이리스트";
const FALLBACK_CATEGORY: &str = "mixed";

/// Owner summary, only present in the public feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistOwner {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// A playlist saved on the backend.
///
/// Read-only from the client's point of view; like and play counters are
/// maintained server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Stored as an opaque payload; entries that are not objects are dropped
    #[serde(default, deserialize_with = "lenient_items")]
    pub tracks: Vec<Track>,
    #[serde(default, deserialize_with = "lenient_items")]
    pub videos: Vec<Video>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub like_count: i64,
    #[serde(default)]
    pub play_count: i64,
    pub created_at: DateTime<Utc>,
    #[serde(default, rename = "user")]
    pub owner: Option<PlaylistOwner>,
}

impl Playlist {
    /// Stored tracks with missing ids replaced by their position, so every
    /// track can be toggled on its own.
    pub fn numbered_tracks(&self) -> Vec<Track> {
        self.tracks
            .iter()
            .enumerate()
            .map(|(i, track)| {
                let mut track = track.clone();
                if track.id.is_empty() {
                    track.id = i.to_string();
                }
                track
            })
            .collect()
    }
}

fn lenient_items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?;
    Ok(items
        .unwrap_or_default()
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

/// Body of `POST /api/playlists`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlaylist {
    pub name: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub tracks: Vec<Track>,
    pub videos: Vec<Video>,
    pub is_public: bool,
}

impl NewPlaylist {
    /// Build the save payload for a recommendation.
    ///
    /// The category is the first track's genre and the tags are the distinct
    /// genres in first-seen order.
    pub fn from_recommendation(recommendation: &MoodRecommendation) -> Self {
        let prefix: String = recommendation.mood.chars().take(NAME_PREFIX_CHARS).collect();

        let mut tags: Vec<String> = Vec::new();
        for track in &recommendation.tracks {
            if !tags.contains(&track.genre) {
                tags.push(track.genre.clone());
            }
        }

        Self {
            name: format!("{}{}", prefix, NAME_SUFFIX),
            description: recommendation.analysis.clone(),
            category: recommendation
                .tracks
                .first()
                .map(|t| t.genre.clone())
                .unwrap_or_else(|| FALLBACK_CATEGORY.to_string()),
            tags,
            tracks: recommendation.tracks.clone(),
            videos: recommendation.videos.clone(),
            is_public: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recommendation(mood: &str, genres: &[&str]) -> MoodRecommendation {
        MoodRecommendation {
            mood: mood.to_string(),
            analysis: "조용한 밤이네요.".to_string(),
            tracks: genres
                .iter()
                .enumerate()
                .map(|(i, g)| Track::new(i.to_string(), format!("Song {i}"), "Artist", *g))
                .collect(),
            videos: vec![],
        }
    }

    #[test]
    fn payload_uses_first_genre_and_distinct_tags() {
        let payload = NewPlaylist::from_recommendation(&recommendation(
            "비 오는 날",
            &["Jazz", "Lo-fi", "Jazz", "R&B"],
        ));

        assert_eq!(payload.name, "비 오는 날 플레이리스트");
        assert_eq!(payload.category, "Jazz");
        assert_eq!(payload.tags, vec!["Jazz", "Lo-fi", "R&B"]);
        assert_eq!(payload.tracks.len(), 4);
        assert!(payload.is_public);
    }

    #[test]
    fn empty_tracks_fall_back_to_mixed() {
        let payload = NewPlaylist::from_recommendation(&recommendation("새벽", &[]));
        assert_eq!(payload.category, "mixed");
        assert!(payload.tags.is_empty());
    }

    #[test]
    fn long_mood_is_cut_at_fifty_characters() {
        let mood = "가".repeat(80);
        let payload = NewPlaylist::from_recommendation(&recommendation(&mood, &["Pop"]));
        assert_eq!(payload.name.chars().count(), 50 + NAME_SUFFIX.chars().count());
    }

    #[test]
    fn feed_playlist_deserializes_with_owner() {
        let playlist: Playlist = serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": "새벽 플레이리스트",
            "description": "잠 못 드는 밤",
            "category": "chill",
            "tags": ["chill", "Lo-fi"],
            "tracks": [{ "id": "0", "title": "Sunset", "artist": "Kid", "genre": "Lo-fi" }],
            "videos": [],
            "isPublic": true,
            "likeCount": 12,
            "playCount": 40,
            "createdAt": "2026-03-01T12:00:00Z",
            "user": { "id": "u1", "displayName": "민지", "photoUrl": null }
        }))
        .unwrap();

        assert_eq!(playlist.like_count, 12);
        assert_eq!(playlist.tracks[0].genre, "Lo-fi");
        assert_eq!(playlist.owner.unwrap().display_name, "민지");
    }

    #[test]
    fn malformed_stored_items_do_not_fail_the_playlist() {
        let playlist: Playlist = serde_json::from_value(serde_json::json!({
            "id": 8,
            "name": "오래된 플레이리스트",
            "tracks": [
                { "id": "0", "title": "A", "artist": "B" },
                { "title": "C", "artist": "D" },
                "not a track"
            ],
            "videos": [{ "videoId": "xyz" }, 42],
            "createdAt": "2025-11-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(playlist.tracks.len(), 2);
        assert_eq!(playlist.videos.len(), 1);
        assert_eq!(playlist.videos[0].video_id, "xyz");

        let ids: Vec<String> = playlist.numbered_tracks().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["0", "1"]);
    }

    #[test]
    fn null_track_list_is_empty() {
        let playlist: Playlist = serde_json::from_value(serde_json::json!({
            "id": 9,
            "name": "빈 플레이리스트",
            "tracks": null,
            "createdAt": "2025-11-01T00:00:00Z"
        }))
        .unwrap();
        assert!(playlist.tracks.is_empty());
    }
}
