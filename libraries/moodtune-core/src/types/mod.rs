mod feed;
mod playlist;
mod recommendation;
mod track;
mod user;

pub use feed::{Category, SortOrder, FEED_CATEGORIES};
pub use playlist::{NewPlaylist, Playlist, PlaylistOwner};
pub use recommendation::{MoodAnalysis, MoodRecommendation, PreviewInfo, SuggestedTrack};
pub use track::{Track, Video};
pub use user::DbUser;
