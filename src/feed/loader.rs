//! Read-local-or-download-then-cache orchestration for the holiday feed.

use std::path::Path;

use tracing::{debug, info, warn};

use super::extract::{contains_date_records, extract_holidays};
use super::source::FeedSource;

/// The etalab dataset of French metropolitan public holidays.
pub const DEFAULT_FEED_URL: &str =
    "https://etalab.github.io/jours-feries-france-data/ics/jours_feries_metropole.ics";

/// The default local cache file for the holiday feed.
pub const DEFAULT_FEED_FILE: &str = "jours_feries_metropole.ics";

/// Loads the public holidays of a month, degrading to an empty set on any
/// feed problem.
///
/// Policy:
/// - a local copy at `path` is used when present, indefinitely (no expiry);
/// - otherwise the feed is fetched from `url` and persisted at `path` for
///   subsequent runs (a failed cache write is only a warning, the downloaded
///   text is still used);
/// - on read or fetch failure, a warning is logged and the empty set is
///   returned. Holiday data is best-effort and never blocks a calculation.
///
/// # Example
///
/// ```
/// use cesu_engine::feed::{InMemoryFeedSource, load_holidays};
/// use std::path::Path;
///
/// let source = InMemoryFeedSource::new().with_local("feed.ics", "DTSTART:20260501\n");
/// let holidays = load_holidays(&source, Path::new("feed.ics"), "https://unused.invalid", 2026, 5);
/// assert_eq!(holidays, vec![1]);
/// ```
pub fn load_holidays(
    source: &impl FeedSource,
    path: &Path,
    url: &str,
    year: i32,
    month: u32,
) -> Vec<u32> {
    let feed = match source.read(path) {
        Ok(Some(feed)) => {
            debug!(path = %path.display(), "using local holiday feed");
            feed
        }
        Ok(None) => {
            info!(path = %path.display(), url, "holiday feed not found locally, downloading");
            match source.fetch(url) {
                Ok(feed) => {
                    if let Err(e) = source.persist(path, &feed) {
                        warn!(error = %e, "could not cache holiday feed");
                    }
                    feed
                }
                Err(e) => {
                    warn!(error = %e, "could not download holiday feed, continuing without holiday data");
                    return Vec::new();
                }
            }
        }
        Err(e) => {
            warn!(error = %e, "could not read holiday feed, continuing without holiday data");
            return Vec::new();
        }
    };

    if !feed.is_empty() && !contains_date_records(&feed) {
        warn!(path = %path.display(), "holiday feed contains no date records");
    }

    extract_holidays(&feed, year, month)
}
