/// Terminal rendering of feed, playlist and recommendation items
use moodtune_core::{Playlist, Track, Video};
use moodtune_feed::FeedSnapshot;
use moodtune_playback::PreviewState;

pub const ALL_LOADED_MESSAGE: &str = "모든 플레이리스트를 불러왔어요";
pub const EMPTY_FEED_MESSAGE: &str = "아직 공개된 플레이리스트가 없어요";
pub const LOGIN_REQUIRED_MESSAGE: &str = "로그인이 필요해요";
pub const NO_SAVED_PLAYLISTS_MESSAGE: &str = "아직 저장된 플레이리스트가 없어요";
pub const NO_TRACKS_MESSAGE: &str = "저장된 곡이 없어요";

const MAX_TAGS: usize = 4;

/// One feed card: category, name, counts, tags, likes and date.
pub fn playlist_line(playlist: &Playlist) -> String {
    let mut line = format!(
        "[{}] {} · {}곡 · 영상 {}개 · ♥ {} · {}",
        playlist.category,
        playlist.name,
        playlist.tracks.len(),
        playlist.videos.len(),
        playlist.like_count,
        playlist.created_at.format("%Y-%m-%d"),
    );

    if !playlist.tags.is_empty() {
        let tags: Vec<String> = playlist
            .tags
            .iter()
            .take(MAX_TAGS)
            .map(|t| format!("#{}", t))
            .collect();
        line.push(' ');
        line.push_str(&tags.join(" "));
    }

    if let Some(owner) = &playlist.owner {
        line.push_str(&format!(" · by {}", owner.display_name));
    }

    line
}

/// Numbered track row; the number is the 1-based position.
pub fn track_line(position: usize, track: &Track) -> String {
    if track.genre.is_empty() {
        format!("{:>2}. {} - {}", position, track.title, track.artist)
    } else {
        format!(
            "{:>2}. {} - {} ({})",
            position, track.title, track.artist, track.genre
        )
    }
}

pub fn video_line(video: &Video) -> String {
    format!("{} · {}\n    {}", video.title, video.channel, video.watch_url())
}

/// Detail view of a saved playlist: name, description, numbered tracks and
/// video links.
pub fn playlist_detail(playlist: &Playlist) -> String {
    let mut lines = vec![format!("== {}", playlist.name)];
    if !playlist.description.is_empty() {
        lines.push(playlist.description.clone());
    }

    lines.push(String::new());
    if playlist.tracks.is_empty() {
        lines.push(NO_TRACKS_MESSAGE.to_string());
    }
    for (i, track) in playlist.tracks.iter().enumerate() {
        lines.push(track_line(i + 1, track));
    }

    if !playlist.videos.is_empty() {
        lines.push(String::new());
        lines.extend(playlist.videos.iter().map(video_line));
    }

    lines.join("\n")
}

/// Footer under the feed list.
pub fn feed_status(snapshot: &FeedSnapshot) -> Option<String> {
    if snapshot.loading {
        return Some("불러오는 중...".to_string());
    }
    if let Some(error) = snapshot.error {
        return Some(error.to_string());
    }
    if snapshot.results.is_empty() {
        return Some(if snapshot.debounced_search.is_empty() {
            EMPTY_FEED_MESSAGE.to_string()
        } else {
            format!("\"{}\"에 대한 결과가 없어요", snapshot.debounced_search)
        });
    }
    if snapshot.loading_more {
        return Some("더 불러오는 중...".to_string());
    }
    if snapshot.all_loaded {
        return Some(ALL_LOADED_MESSAGE.to_string());
    }
    if snapshot.trigger_registered {
        return Some(format!(
            "{} / {} · /more 로 더 보기",
            snapshot.results.len(),
            snapshot.total
        ));
    }
    None
}

/// Status of the preview row.
pub fn preview_status(state: &PreviewState) -> Option<String> {
    state.active_track_id.as_ref()?;
    if state.loading {
        return Some("미리듣기 찾는 중...".to_string());
    }
    if state.no_preview {
        return Some("미리듣기가 없어 가사 검색을 열었어요".to_string());
    }
    if state.manual_play_needed {
        return Some("자동 재생이 막혔어요. /play 로 재생".to_string());
    }
    let preview = state.preview.as_ref()?;
    Some(format!(
        "▶ {} - {} ({})",
        preview.track_name, preview.artist_name, preview.collection_name
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodtune_core::{Category, PreviewInfo};
    use moodtune_feed::TriggerPhase;

    fn playlist(tags: &[&str], owner: bool) -> Playlist {
        let mut value = serde_json::json!({
            "id": 7,
            "name": "비 오는 밤 플레이리스트",
            "category": "chill",
            "tags": tags,
            "likeCount": 3,
            "createdAt": "2026-05-01T09:30:00Z"
        });
        if owner {
            value["user"] = serde_json::json!({"id": "u1", "displayName": "Mina"});
        }
        serde_json::from_value(value).unwrap()
    }

    fn snapshot() -> FeedSnapshot {
        FeedSnapshot {
            results: vec![],
            total: 0,
            loading: false,
            loading_more: false,
            error: None,
            trigger_registered: false,
            phase: TriggerPhase::Exhausted,
            all_loaded: false,
            search_input: String::new(),
            debounced_search: String::new(),
            category: Category::All,
            active_sort: None,
        }
    }

    #[test]
    fn playlist_line_shows_card_fields() {
        let line = playlist_line(&playlist(&["a", "b", "c", "d", "e"], true));
        assert!(line.starts_with("[chill] 비 오는 밤 플레이리스트 · 0곡 · 영상 0개 · ♥ 3 · 2026-05-01"));
        assert!(line.contains("#a #b #c #d"));
        assert!(!line.contains("#e"));
        assert!(line.ends_with("by Mina"));
    }

    #[test]
    fn track_line_omits_empty_genre() {
        let track = Track::new("0", "Holocene", "Bon Iver", "");
        assert_eq!(track_line(1, &track), " 1. Holocene - Bon Iver");
    }

    #[test]
    fn empty_search_result_message_mentions_query() {
        let mut snap = snapshot();
        snap.debounced_search = "rain".to_string();
        assert_eq!(feed_status(&snap).unwrap(), "\"rain\"에 대한 결과가 없어요");
    }

    #[test]
    fn all_loaded_message_after_last_page() {
        let mut snap = snapshot();
        snap.results = vec![playlist(&[], false)];
        snap.total = 1;
        snap.all_loaded = true;
        assert_eq!(feed_status(&snap).as_deref(), Some(ALL_LOADED_MESSAGE));
    }

    #[test]
    fn preview_status_reflects_state() {
        assert_eq!(preview_status(&PreviewState::default()), None);

        let state = PreviewState {
            active_track_id: Some("0".into()),
            preview: Some(PreviewInfo {
                track_name: "Holocene".into(),
                artist_name: "Bon Iver".into(),
                collection_name: "Bon Iver".into(),
                artwork_url: String::new(),
                track_view_url: String::new(),
                preview_url: Some("https://audio.test/h.m4a".into()),
            }),
            is_playing: true,
            ..PreviewState::default()
        };
        assert_eq!(
            preview_status(&state).as_deref(),
            Some("▶ Holocene - Bon Iver (Bon Iver)")
        );
    }

    #[test]
    fn playlist_detail_lists_tracks_and_videos() {
        let playlist: Playlist = serde_json::from_value(serde_json::json!({
            "id": 3,
            "name": "새벽 플레이리스트",
            "description": "잠 못 드는 밤",
            "tracks": [
                { "id": "0", "title": "Holocene", "artist": "Bon Iver", "genre": "Folk" },
                { "title": "Sunset", "artist": "Kid" }
            ],
            "videos": [{ "title": "night jazz", "channel": "Cafe", "videoId": "abc" }],
            "createdAt": "2026-05-01T09:30:00Z"
        }))
        .unwrap();

        let detail = playlist_detail(&playlist);
        let lines: Vec<&str> = detail.lines().collect();

        assert_eq!(lines[0], "== 새벽 플레이리스트");
        assert_eq!(lines[1], "잠 못 드는 밤");
        assert_eq!(lines[3], " 1. Holocene - Bon Iver (Folk)");
        assert_eq!(lines[4], " 2. Sunset - Kid");
        assert_eq!(lines[6], "night jazz · Cafe");
        assert!(detail.ends_with("https://www.youtube.com/watch?v=abc"));
    }

    #[test]
    fn playlist_detail_without_tracks() {
        let detail = playlist_detail(&playlist(&[], false));
        assert!(detail.contains(NO_TRACKS_MESSAGE));
        assert!(!detail.contains("youtube.com"));
    }
}
