//! Provider client tests against mock servers.

use moodtune_core::{MoodtuneError, PreviewLookup};
use moodtune_discovery::{
    DiscoveryError, GeminiClient, GeminiConfig, ItunesClient, ItunesConfig, Recommender,
    YouTubeClient, YouTubeConfig,
};
use std::sync::Arc;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL_ANSWER: &str = "```json\n{\"analysis\":\"비 오는 밤, 조용히 쉬고 싶은 마음이 느껴져요.\",\"tracks\":[{\"title\":\"Holocene\",\"artist\":\"Bon Iver\",\"genre\":\"Indie Folk\"},{\"title\":\"밤편지\",\"artist\":\"아이유\",\"genre\":\"K-Ballad\"}],\"videoQueries\":[\"rainy night jazz\",\"비 오는 날 플레이리스트\",\"nothing matches this\"]}\n```";

fn gemini_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{ "content": { "parts": [{ "text": text }], "role": "model" } }]
    })
}

fn video_body(video_id: &str, title: &str, with_medium: bool) -> serde_json::Value {
    let thumbnails = if with_medium {
        serde_json::json!({
            "default": { "url": format!("https://i.ytimg.com/vi/{video_id}/default.jpg") },
            "medium": { "url": format!("https://i.ytimg.com/vi/{video_id}/mqdefault.jpg") }
        })
    } else {
        serde_json::json!({
            "default": { "url": format!("https://i.ytimg.com/vi/{video_id}/default.jpg") }
        })
    };

    serde_json::json!({
        "items": [{
            "id": { "kind": "youtube#video", "videoId": video_id },
            "snippet": { "title": title, "channelTitle": "Mood Channel", "thumbnails": thumbnails }
        }]
    })
}

async fn mount_gemini(server: &MockServer, status: u16, text: &str) {
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
        .and(query_param("key", "gemini-key"))
        .respond_with(ResponseTemplate::new(status).set_body_json(gemini_body(text)))
        .mount(server)
        .await;
}

async fn mount_video(server: &MockServer, query: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", query))
        .and(query_param("part", "snippet"))
        .and(query_param("type", "video"))
        .and(query_param("maxResults", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn gemini(server: &MockServer) -> GeminiClient {
    GeminiClient::new(GeminiConfig::new("gemini-key").with_base_url(server.uri())).unwrap()
}

fn youtube(server: &MockServer) -> YouTubeClient {
    YouTubeClient::new(YouTubeConfig::new("yt-key").with_base_url(server.uri())).unwrap()
}

// =============================================================================
// Gemini
// =============================================================================

mod gemini_client {
    use super::*;

    #[tokio::test]
    async fn test_fenced_answer_is_parsed() {
        let server = MockServer::start().await;
        mount_gemini(&server, 200, MODEL_ANSWER).await;

        let analysis = gemini(&server).analyze_mood("비 오는 밤").await.unwrap();

        assert_eq!(analysis.tracks.len(), 2);
        assert_eq!(analysis.tracks[1].title, "밤편지");
        assert_eq!(analysis.video_queries.len(), 3);
    }

    #[tokio::test]
    async fn test_non_json_answer_is_parse_error() {
        let server = MockServer::start().await;
        mount_gemini(&server, 200, "I think you should listen to jazz.").await;

        let result = gemini(&server).analyze_mood("비 오는 밤").await;
        assert!(matches!(result, Err(DiscoveryError::ParseError(_))));
    }

    #[tokio::test]
    async fn test_provider_failure() {
        let server = MockServer::start().await;
        mount_gemini(&server, 429, "").await;

        let result = gemini(&server).analyze_mood("비 오는 밤").await;
        match result {
            Err(DiscoveryError::Provider { provider, status, .. }) => {
                assert_eq!(provider, "gemini");
                assert_eq!(status, 429);
            }
            _ => panic!("Expected provider error"),
        }
    }
}

// =============================================================================
// YouTube
// =============================================================================

mod youtube_client {
    use super::*;

    #[tokio::test]
    async fn test_first_item_is_mapped() {
        let server = MockServer::start().await;
        mount_video(&server, "rainy night jazz", video_body("abc", "Rainy Jazz", true)).await;

        let video = youtube(&server)
            .search_first("rainy night jazz", 2)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(video.id, "2");
        assert_eq!(video.video_id, "abc");
        assert_eq!(video.channel, "Mood Channel");
        assert_eq!(video.thumbnail_url, "https://i.ytimg.com/vi/abc/mqdefault.jpg");
    }

    #[tokio::test]
    async fn test_thumbnail_falls_back_to_default() {
        let server = MockServer::start().await;
        mount_video(&server, "lofi", video_body("xyz", "Lofi", false)).await;

        let video = youtube(&server).search_first("lofi", 0).await.unwrap().unwrap();
        assert_eq!(video.thumbnail_url, "https://i.ytimg.com/vi/xyz/default.jpg");
    }

    #[tokio::test]
    async fn test_no_items_is_none() {
        let server = MockServer::start().await;
        mount_video(&server, "nothing", serde_json::json!({ "items": [] })).await;

        let video = youtube(&server).search_first("nothing", 0).await.unwrap();
        assert!(video.is_none());
    }

    #[tokio::test]
    async fn test_quota_error_is_hard_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(403).set_body_string("quotaExceeded"))
            .mount(&server)
            .await;

        let result = youtube(&server).search_first("anything", 0).await;
        assert!(matches!(
            result,
            Err(DiscoveryError::Provider { status: 403, .. })
        ));
    }
}

// =============================================================================
// iTunes
// =============================================================================

mod itunes_client {
    use super::*;

    fn itunes(server: &MockServer) -> ItunesClient {
        ItunesClient::new(ItunesConfig::default().with_base_url(server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_preview_found() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "resultCount": 1,
            "results": [{
                "trackName": "Holocene",
                "artistName": "Bon Iver",
                "collectionName": "Bon Iver",
                "artworkUrl100": "https://is1.mzstatic.com/a.jpg",
                "trackViewUrl": "https://music.apple.com/track",
                "previewUrl": "https://audio-ssl.itunes.apple.com/preview.m4a"
            }]
        });

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("term", "Holocene Bon Iver"))
            .and(query_param("entity", "song"))
            .and(query_param("limit", "1"))
            .and(query_param("country", "KR"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(body.to_string(), "text/javascript; charset=utf-8"),
            )
            .mount(&server)
            .await;

        let info = itunes(&server)
            .lookup("Holocene", "Bon Iver")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(
            info.preview_url.as_deref(),
            Some("https://audio-ssl.itunes.apple.com/preview.m4a")
        );
    }

    #[tokio::test]
    async fn test_zero_results_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "resultCount": 0,
                "results": []
            })))
            .mount(&server)
            .await;

        let info = itunes(&server).lookup("Unknown", "Nobody").await.unwrap();
        assert!(info.is_none());
    }
}

// =============================================================================
// Recommender
// =============================================================================

mod recommender {
    use super::*;

    #[tokio::test]
    async fn test_full_flow_numbers_tracks_and_drops_empty_queries() {
        let server = MockServer::start().await;
        mount_gemini(&server, 200, MODEL_ANSWER).await;
        mount_video(&server, "rainy night jazz", video_body("v0", "Rainy Jazz", true)).await;
        mount_video(&server, "비 오는 날 플레이리스트", video_body("v1", "비 오는 날", true)).await;
        mount_video(&server, "nothing matches this", serde_json::json!({ "items": [] })).await;

        let recommender = Recommender::new(Arc::new(gemini(&server)), Arc::new(youtube(&server)));
        let result = recommender.recommend("  비 오는 밤  ").await.unwrap();

        assert_eq!(result.mood, "비 오는 밤");
        assert_eq!(result.tracks[0].id, "0");
        assert_eq!(result.tracks[1].id, "1");
        assert_eq!(result.videos.len(), 2);
        assert_eq!(result.videos[0].id, "0");
        assert_eq!(result.videos[1].id, "1");
        assert_eq!(result.videos[1].video_id, "v1");
    }

    #[tokio::test]
    async fn test_video_failure_fails_recommendation() {
        let server = MockServer::start().await;
        mount_gemini(&server, 200, MODEL_ANSWER).await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let recommender = Recommender::new(Arc::new(gemini(&server)), Arc::new(youtube(&server)));
        let result = recommender.recommend("비 오는 밤").await;

        assert!(matches!(result, Err(MoodtuneError::Http { status: 500, .. })));
    }

    #[tokio::test]
    async fn test_empty_mood_rejected_without_calls() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let recommender = Recommender::new(Arc::new(gemini(&server)), Arc::new(youtube(&server)));
        let result = recommender.recommend("   ").await;

        assert!(matches!(result, Err(MoodtuneError::InvalidInput(_))));
    }
}
