/// Saved playlist detail view
use super::{preview::preview_loop, preview_player, InputLines};
use moodtune_cli::render::playlist_detail;
use moodtune_cli::AppConfig;
use moodtune_core::Playlist;
use tracing::debug;

/// Show the playlist and preview its tracks until the view is closed.
pub async fn open(
    config: &AppConfig,
    playlist: &Playlist,
    lines: &mut InputLines,
) -> anyhow::Result<()> {
    debug!(playlist_id = playlist.id, "Opening playlist");
    println!("{}", playlist_detail(playlist));

    let tracks = playlist.numbered_tracks();
    if tracks.is_empty() {
        return Ok(());
    }

    println!();
    let mut player = preview_player(config)?;
    preview_loop(&mut player, &tracks, lines).await
}
