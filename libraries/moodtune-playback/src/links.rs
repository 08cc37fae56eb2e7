//! Opening external links

use crate::error::{PlaybackError, Result};
use tracing::info;

/// Opens a URL in a new browsing context.
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}

/// Opens links with the desktop's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLinkOpener;

impl LinkOpener for SystemLinkOpener {
    fn open(&self, url: &str) -> Result<()> {
        info!(url = %url, "Opening link");
        open::that(url).map_err(|e| PlaybackError::OpenLink {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}
