/// Mood submission: analysis, tracks, videos, and optionally save/preview
use super::{preview::preview_loop, preview_player, resolved_session, stdin_lines};
use moodtune_cli::render::{track_line, video_line};
use moodtune_cli::AppConfig;
use moodtune_client::{PlaylistSaver, SaveOutcome, SAVE_ERROR_MESSAGE};
use moodtune_core::MoodtuneError;
use moodtune_discovery::{
    GeminiClient, GeminiConfig, Recommender, YouTubeClient, YouTubeConfig, ANALYSIS_ERROR_MESSAGE,
};
use std::sync::Arc;
use tracing::debug;

pub async fn run(config: &AppConfig, mood: &str, save: bool, preview: bool) -> anyhow::Result<()> {
    config.require_discovery_keys()?;

    let gemini = GeminiClient::new(
        GeminiConfig::new(config.gemini.api_key.clone())
            .with_base_url(config.gemini.base_url.clone())
            .with_model(config.gemini.model.clone()),
    )?;
    let youtube = YouTubeClient::new(
        YouTubeConfig::new(config.youtube.api_key.clone())
            .with_base_url(config.youtube.base_url.clone()),
    )?;
    let recommender = Recommender::new(Arc::new(gemini), Arc::new(youtube));

    println!("✦ AI 분석 중...");
    let recommendation = match recommender.recommend(mood).await {
        Ok(recommendation) => recommendation,
        Err(MoodtuneError::InvalidInput(_)) => anyhow::bail!("지금 기분을 입력해줘"),
        Err(e) => {
            debug!(error = %e, "Recommendation failed");
            anyhow::bail!(ANALYSIS_ERROR_MESSAGE);
        }
    };

    println!("✦ AI 분석 완료");
    println!();
    println!("{}", recommendation.analysis);
    println!();
    for (i, track) in recommendation.tracks.iter().enumerate() {
        println!("{}", track_line(i + 1, track));
    }
    if !recommendation.videos.is_empty() {
        println!();
        for video in &recommendation.videos {
            println!("{}", video_line(video));
        }
    }

    if save {
        let session = resolved_session(config).await?;
        let mut saver = PlaylistSaver::new(session.client().clone());
        match saver.save(&recommendation).await {
            SaveOutcome::Saved => println!("✓ 저장됨"),
            SaveOutcome::Skipped => {}
            SaveOutcome::LoginRequired => println!("로그인 후 저장"),
            SaveOutcome::Failed => println!("{}", SAVE_ERROR_MESSAGE),
        }
    }

    if preview {
        println!();
        let mut player = preview_player(config)?;
        preview_loop(&mut player, &recommendation.tracks, &mut stdin_lines()).await?;
    }

    Ok(())
}
