//! Public-holiday feed handling.
//!
//! Holiday dates come from an ICS calendar document (the etalab French
//! public-holiday dataset). This module provides the capability trait for
//! reading/fetching/caching the feed, the tolerant date-stamp extraction,
//! and the read-local-or-download-then-cache orchestration. Feed problems
//! never abort a calculation; they degrade to an empty holiday set with a
//! logged warning.

mod extract;
mod loader;
mod source;

pub use extract::{contains_date_records, extract_holidays};
pub use loader::{DEFAULT_FEED_FILE, DEFAULT_FEED_URL, load_holidays};
pub use source::{FETCH_TIMEOUT, FeedSource, HttpFeedSource, InMemoryFeedSource};
