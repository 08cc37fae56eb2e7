/// Community feed browsing
use super::{playlist, resolved_session, stdin_lines};
use moodtune_cli::input::{pick, split_command};
use moodtune_cli::render::{feed_status, playlist_line};
use moodtune_cli::AppConfig;
use moodtune_client::MoodtuneClient;
use moodtune_core::{Category, SortOrder, FEED_CATEGORIES};
use moodtune_feed::{FeedController, FeedFilters, SearchDebouncer};
use std::sync::Arc;

const HELP: &str =
    "검색어 입력 · /more 더 보기 · /open <번호> 열기 · /cat <카테고리> · /sort latest|likes · /clear · /quit";

pub struct FeedOptions {
    pub category: String,
    pub sort: SortOrder,
    pub search: Option<String>,
    /// Print this many pages and exit instead of browsing
    pub pages: Option<u32>,
}

type Feed = FeedController<MoodtuneClient>;

pub async fn run(config: &AppConfig, options: FeedOptions) -> anyhow::Result<()> {
    // Signed-in users browse with their bearer token
    let session = resolved_session(config).await?;
    let client = session.client().clone();

    let mut filters = FeedFilters::default();
    filters.set_category(Category::parse(&options.category));
    filters.set_sort(options.sort);
    if let Some(search) = &options.search {
        filters.set_search_input(search.as_str());
        filters.commit_search(search);
    }

    let feed = Arc::new(FeedController::with_filters(
        Arc::new(client),
        config.feed.page_size,
        filters,
    ));
    feed.refresh().await;

    match options.pages {
        Some(pages) => print_pages(&feed, pages).await,
        None => browse(&feed, config).await?,
    }

    Ok(())
}

async fn print_pages(feed: &Feed, pages: u32) {
    let mut loaded = 1;
    while loaded < pages && feed.on_trigger_visible().await.is_some() {
        loaded += 1;
    }
    print_from(feed, 0);
}

/// Print numbered results from index `from` onwards plus the status footer.
/// Returns the number of results shown.
fn print_from(feed: &Feed, from: usize) -> usize {
    let snapshot = feed.snapshot();
    for (i, playlist) in snapshot.results.iter().enumerate().skip(from) {
        println!("{:>2}. {}", i + 1, playlist_line(playlist));
    }
    if let Some(status) = feed_status(&snapshot) {
        println!("-- {}", status);
    }
    snapshot.results.len()
}

fn print_filters(feed: &Feed) {
    let snapshot = feed.snapshot();
    let sort = snapshot
        .active_sort
        .map_or("검색", |sort| sort.label());
    println!("== {} · {}", snapshot.category, sort);
}

async fn browse(feed: &Feed, config: &AppConfig) -> anyhow::Result<()> {
    println!("{}", HELP);
    print_filters(feed);
    let mut shown = print_from(feed, 0);

    let (debouncer, input, mut committed) = SearchDebouncer::spawn(config.feed.debounce());
    let mut lines = stdin_lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let line = line.trim();
                let (command, arg) = split_command(line);

                match command {
                    "/quit" => break,
                    "/more" => {
                        feed.on_trigger_visible().await;
                        shown = print_from(feed, shown);
                    }
                    "/open" => {
                        let snapshot = feed.snapshot();
                        match pick(&snapshot.results, arg) {
                            Some(selected) => {
                                playlist::open(config, selected, &mut lines).await?;
                                println!("{}", HELP);
                            }
                            None if snapshot.results.is_empty() => {
                                println!("열 수 있는 플레이리스트가 없어요");
                            }
                            None => {
                                println!("1-{} 사이의 번호를 입력해줘", snapshot.results.len());
                            }
                        }
                    }
                    "/cat" => {
                        if arg.is_empty() {
                            println!("{}", FEED_CATEGORIES.join(" · "));
                        } else if feed.set_category(Category::parse(arg)).await.is_some() {
                            print_filters(feed);
                            shown = print_from(feed, 0);
                        }
                    }
                    "/sort" => match SortOrder::from_str(arg) {
                        Some(sort) => {
                            input.cancel();
                            if feed.set_sort(sort).await.is_some() {
                                print_filters(feed);
                                shown = print_from(feed, 0);
                            }
                        }
                        None => println!("latest 또는 likes"),
                    },
                    "/clear" => {
                        input.cancel();
                        if feed.clear_search().await.is_some() {
                            print_filters(feed);
                            shown = print_from(feed, 0);
                        }
                    }
                    _ if command.starts_with('/') => println!("{}", HELP),
                    _ => {
                        if feed.set_search_input(line).await.is_some() {
                            print_filters(feed);
                            shown = print_from(feed, 0);
                        }
                        input.push(line);
                    }
                }
            }
            Some(value) = committed.recv() => {
                if feed.commit_search(&value).await.is_some() {
                    print_filters(feed);
                    shown = print_from(feed, 0);
                }
            }
        }
    }

    debouncer.abort();
    Ok(())
}
