/// Commands that need a signed-in session
use super::{playlist, resolved_session, stdin_lines};
use moodtune_cli::input::nth;
use moodtune_cli::render::{playlist_line, LOGIN_REQUIRED_MESSAGE, NO_SAVED_PLAYLISTS_MESSAGE};
use moodtune_cli::AppConfig;
use moodtune_client::{ClientError, MY_PLAYLISTS_ERROR_MESSAGE};
use tracing::warn;

/// List saved playlists; `open` is the 1-based number of one to show in
/// detail afterwards.
pub async fn mine(config: &AppConfig, open: Option<usize>) -> anyhow::Result<()> {
    let session = resolved_session(config).await?;

    match session.client().my_playlists().await {
        Ok(playlists) if playlists.is_empty() => println!("{}", NO_SAVED_PLAYLISTS_MESSAGE),
        Ok(playlists) => {
            for (i, saved) in playlists.iter().enumerate() {
                println!("{:>2}. {}", i + 1, playlist_line(saved));
            }
            if let Some(position) = open {
                let Some(selected) = nth(&playlists, position) else {
                    anyhow::bail!("1-{} 사이의 번호를 입력해줘", playlists.len());
                };
                println!();
                playlist::open(config, selected, &mut stdin_lines()).await?;
            }
        }
        Err(ClientError::AuthRequired) => println!("{}", LOGIN_REQUIRED_MESSAGE),
        Err(e) => {
            warn!(error = %e, "Failed to load saved playlists");
            anyhow::bail!(MY_PLAYLISTS_ERROR_MESSAGE);
        }
    }

    Ok(())
}

pub async fn whoami(config: &AppConfig) -> anyhow::Result<()> {
    let session = resolved_session(config).await?;

    match session.profile() {
        Some(user) => println!("{} <{}>", user.display_name, user.email),
        None if session.identity_token().is_some() => {
            println!("로그인은 되었지만 프로필을 불러오지 못했어요");
        }
        None => println!("{}", LOGIN_REQUIRED_MESSAGE),
    }

    Ok(())
}
