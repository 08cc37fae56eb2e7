/// Interactive track previews
use super::{preview_player, stdin_lines, InputLines};
use moodtune_cli::input::PreviewCommand;
use moodtune_cli::render::{preview_status, track_line};
use moodtune_cli::AppConfig;
use moodtune_core::Track;
use moodtune_playback::{ClickOutcome, PreviewPlayer};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(500);
const HELP: &str = "번호 미리듣기 · /lyrics <번호> 가사 검색 · /full 전체 듣기 · /play 재생 · /quit 닫기";

pub async fn run(config: &AppConfig, title: &str, artist: &str) -> anyhow::Result<()> {
    let mut player = preview_player(config)?;
    let tracks = vec![Track::new("0", title, artist, "")];
    println!("{}", track_line(1, &tracks[0]));
    preview_loop(&mut player, &tracks, &mut stdin_lines()).await
}

/// Toggle previews by track number until `/quit` or end of input. Audio
/// stops when the loop returns.
pub async fn preview_loop(
    player: &mut PreviewPlayer,
    tracks: &[Track],
    lines: &mut InputLines,
) -> anyhow::Result<()> {
    println!("{}", HELP);
    let mut ticker = tokio::time::interval(POLL_INTERVAL);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match PreviewCommand::parse(&line, tracks.len()) {
                    PreviewCommand::Quit => break,
                    PreviewCommand::Play => match player.manual_play() {
                        Ok(()) => print_status(player),
                        Err(e) => println!("재생할 수 없어요: {}", e),
                    },
                    PreviewCommand::Full => match player.open_full_track() {
                        Ok(url) => println!("전체 듣기: {}", url),
                        Err(e) => println!("열 수 없어요: {}", e),
                    },
                    PreviewCommand::Lyrics(i) => match player.open_lyrics(&tracks[i]) {
                        Ok(url) => println!("가사 검색: {}", url),
                        Err(e) => println!("열 수 없어요: {}", e),
                    },
                    PreviewCommand::Toggle(i) => {
                        if player.click(&tracks[i]).await == ClickOutcome::ToggledOff {
                            println!("■ 정지");
                        } else {
                            print_status(player);
                        }
                    }
                    PreviewCommand::Invalid => println!("{}", HELP),
                }
            }
            _ = ticker.tick() => {
                if player.poll() {
                    println!("■ 미리듣기가 끝났어요");
                }
            }
        }
    }

    player.close();
    Ok(())
}

fn print_status(player: &PreviewPlayer) {
    if let Some(status) = preview_status(player.state()) {
        println!("{}", status);
    }
}
