/// Feed filter types
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category chips shown above the feed, `전체` first.
pub const FEED_CATEGORIES: [&str; 10] = [
    "전체",
    "chill",
    "focus",
    "workout",
    "energetic",
    "happy",
    "sad",
    "jazz",
    "k-pop",
    "electronic",
];

const ALL_LABEL: &str = "전체";

/// Category filter. `All` sends no category parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    All,
    Named(String),
}

impl Category {
    /// Parse a category label; `전체`, `all` and the empty string mean no filter.
    pub fn parse(label: &str) -> Self {
        let label = label.trim();
        if label.is_empty() || label == ALL_LABEL || label.eq_ignore_ascii_case("all") {
            Category::All
        } else {
            Category::Named(label.to_string())
        }
    }

    /// Value of the `category` query parameter, if any.
    pub fn as_param(&self) -> Option<&str> {
        match self {
            Category::All => None,
            Category::Named(name) => Some(name),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::All => f.write_str(ALL_LABEL),
            Category::Named(name) => f.write_str(name),
        }
    }
}

/// Feed ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Newest first (최신순)
    #[default]
    Latest,
    /// Most liked first (좋아요순)
    Likes,
}

impl SortOrder {
    /// Convert to the query parameter value
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Latest => "latest",
            SortOrder::Likes => "likes",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "latest" => Some(SortOrder::Latest),
            "likes" => Some(SortOrder::Likes),
            _ => None,
        }
    }

    /// Label shown on the sort toggle
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Latest => "최신순",
            SortOrder::Likes => "좋아요순",
        }
    }
}
