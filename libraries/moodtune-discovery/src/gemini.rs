//! Mood analysis through the Gemini `generateContent` API.

use crate::error::{normalize_base_url, provider_error, DiscoveryError, Result};
use async_trait::async_trait;
use moodtune_core::{MoodAnalysis, MoodAnalyzer};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Connection settings for the language model.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

/// Gemini-backed [`MoodAnalyzer`].
pub struct GeminiClient {
    http: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let base_url = normalize_base_url(&config.base_url)?;
        let http = Client::builder()
            .user_agent(format!("Moodtune/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            config: GeminiConfig {
                base_url,
                ..config
            },
        })
    }

    /// Send the mood prompt and parse the model's JSON answer.
    pub async fn analyze_mood(&self, mood: &str) -> Result<MoodAnalysis> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url, self.config.model
        );
        debug!(url = %url, model = %self.config.model, "Requesting mood analysis");

        let prompt = build_prompt(mood);
        let body = GenerateRequest {
            contents: [RequestContent {
                parts: [RequestPart { text: &prompt }],
            }],
        };

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(DiscoveryError::from_send)?;

        if !response.status().is_success() {
            return Err(provider_error("gemini", response).await);
        }

        let generated: GenerateResponse = response.json().await.map_err(|e| {
            DiscoveryError::ParseError(format!("Failed to parse gemini response: {}", e))
        })?;

        let text: String = generated
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        let analysis = parse_analysis(&text)?;
        info!(
            tracks = analysis.tracks.len(),
            video_queries = analysis.video_queries.len(),
            "Mood analysis complete"
        );

        Ok(analysis)
    }
}

#[async_trait]
impl MoodAnalyzer for GeminiClient {
    async fn analyze(&self, mood: &str) -> moodtune_core::Result<MoodAnalysis> {
        self.analyze_mood(mood).await.map_err(Into::into)
    }
}

/// Prompt asking for strict JSON with 6 tracks and 4 video queries.
pub fn build_prompt(mood: &str) -> String {
    format!(
        r#"You are a music recommendation AI. Analyze the user's mood and recommend music.

User's mood/situation: "{mood}"

Respond ONLY with valid JSON (no markdown, no code blocks, no explanation):
{{
  "analysis": "한국어로 작성한 감성 분석 (1-2문장, 따뜻하고 공감하는 톤으로)",
  "tracks": [
    {{ "title": "Song Title", "artist": "Artist Name", "genre": "Genre" }},
    {{ "title": "Song Title", "artist": "Artist Name", "genre": "Genre" }},
    {{ "title": "Song Title", "artist": "Artist Name", "genre": "Genre" }},
    {{ "title": "Song Title", "artist": "Artist Name", "genre": "Genre" }},
    {{ "title": "Song Title", "artist": "Artist Name", "genre": "Genre" }},
    {{ "title": "Song Title", "artist": "Artist Name", "genre": "Genre" }}
  ],
  "videoQueries": [
    "YouTube search query 1",
    "YouTube search query 2",
    "YouTube search query 3",
    "YouTube search query 4"
  ]
}}

Recommend 6 diverse tracks that match the mood. VideoQueries should be specific YouTube search terms for playlists or mixes matching the mood (mix Korean and English queries naturally)."#
    )
}

/// Remove markdown code fences the model sometimes wraps its answer in.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json\n", "")
        .replace("```json", "")
        .replace("```\n", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Parse the model's answer into a [`MoodAnalysis`].
pub fn parse_analysis(text: &str) -> Result<MoodAnalysis> {
    let cleaned = strip_code_fences(text);
    serde_json::from_str(&cleaned)
        .map_err(|e| DiscoveryError::ParseError(format!("Model answer is not valid JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANSWER: &str = r#"{"analysis":"차분한 밤","tracks":[{"title":"Holocene","artist":"Bon Iver","genre":"Indie Folk"}],"videoQueries":["rainy night playlist"]}"#;

    #[test]
    fn fenced_answer_is_unwrapped() {
        let fenced = format!("```json\n{}\n```\n", ANSWER);
        assert_eq!(strip_code_fences(&fenced), ANSWER);

        let analysis = parse_analysis(&fenced).unwrap();
        assert_eq!(analysis.tracks[0].artist, "Bon Iver");
        assert_eq!(analysis.video_queries.len(), 1);
    }

    #[test]
    fn bare_fence_without_language_is_unwrapped() {
        let fenced = format!("```\n{}```", ANSWER);
        assert!(parse_analysis(&fenced).is_ok());
    }

    #[test]
    fn prose_answer_is_a_parse_error() {
        let result = parse_analysis("Sure! Here are some songs...");
        assert!(matches!(result, Err(DiscoveryError::ParseError(_))));
    }

    #[test]
    fn prompt_embeds_mood() {
        let prompt = build_prompt("비 오는 날 혼자");
        assert!(prompt.contains(r#"User's mood/situation: "비 오는 날 혼자""#));
        assert!(prompt.contains("Recommend 6 diverse tracks"));
    }

    #[test]
    fn config_rejects_bad_url() {
        let config = GeminiConfig::new("key").with_base_url("generativelanguage.googleapis.com");
        assert!(matches!(
            GeminiClient::new(config),
            Err(DiscoveryError::InvalidUrl(_))
        ));
    }
}
