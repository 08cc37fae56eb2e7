//! Outbound links opened in a browser.

const LYRICS_SEARCH_URL: &str = "https://www.youtube.com/results";

/// Video-site search for the track's lyrics, used when no preview exists.
pub fn lyrics_search_url(title: &str, artist: &str) -> String {
    let query = format!("{} {} lyrics", title, artist);
    format!("{}?search_query={}", LYRICS_SEARCH_URL, encode(&query))
}

fn encode(s: &str) -> String {
    url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
}
