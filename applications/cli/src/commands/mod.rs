/// Subcommand implementations and the wiring they share
pub mod account;
pub mod feed;
pub mod playlist;
pub mod preview;
pub mod recommend;

use moodtune_cli::AppConfig;
use moodtune_client::{AuthSession, ClientConfig, MoodtuneClient, StaticIdentityProvider};
use moodtune_discovery::{ItunesClient, ItunesConfig};
use moodtune_playback::{PreviewPlayer, SystemLinkOpener, SystemPlayerOutput};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Line reader over stdin, shared by nested interactive views
pub type InputLines = Lines<BufReader<Stdin>>;

fn stdin_lines() -> InputLines {
    BufReader::new(tokio::io::stdin()).lines()
}

fn backend_client(config: &AppConfig) -> anyhow::Result<MoodtuneClient> {
    Ok(MoodtuneClient::new(ClientConfig::new(&config.api.base_url))?)
}

/// Session fed by the configured identity token, resolved before returning.
async fn resolved_session(config: &AppConfig) -> anyhow::Result<AuthSession> {
    let client = backend_client(config)?;
    let provider = match &config.auth.identity_token {
        Some(token) => StaticIdentityProvider::signed_in(token.clone()),
        None => StaticIdentityProvider::signed_out(None),
    };

    let session = AuthSession::start(client, Arc::new(provider));
    session.resolved().await;
    Ok(session)
}

fn preview_player(config: &AppConfig) -> anyhow::Result<PreviewPlayer> {
    let lookup = ItunesClient::new(ItunesConfig {
        base_url: config.itunes.base_url.clone(),
        country: config.itunes.country.clone(),
    })?;
    let output = SystemPlayerOutput::from_command(&config.preview.player_command)?;

    Ok(PreviewPlayer::new(
        Arc::new(lookup),
        Arc::new(output),
        Arc::new(SystemLinkOpener),
    ))
}
