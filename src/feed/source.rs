//! Feed source implementations.
//!
//! The [`FeedSource`] trait is the injected collaborator that gives the
//! engine access to the holiday feed: a local read, a remote fetch, and a
//! cache write. Production code uses [`HttpFeedSource`]; tests substitute
//! [`InMemoryFeedSource`] so no real I/O happens.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{EngineError, EngineResult};

/// The timeout applied to holiday feed downloads.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Capability interface for obtaining the holiday feed.
///
/// Splitting the feed access into a trait keeps the calculation a pure
/// function of its inputs: tests inject an in-memory source and never touch
/// the filesystem or the network.
pub trait FeedSource {
    /// Reads the local copy of the feed, returning `None` when no copy exists.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::FeedRead`] when the file exists but cannot be
    /// read or decoded.
    fn read(&self, path: &Path) -> EngineResult<Option<String>>;

    /// Fetches the feed from a remote source.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::FeedDownload`] on timeout, transport failure,
    /// or a non-success HTTP status.
    fn fetch(&self, url: &str) -> EngineResult<String>;

    /// Persists a fetched feed verbatim for reuse by subsequent runs.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::FeedWrite`] when the file cannot be written.
    fn persist(&self, path: &Path, content: &str) -> EngineResult<()>;
}

/// The production feed source: filesystem reads/writes and a blocking HTTP
/// client with a fixed timeout.
#[derive(Debug, Clone)]
pub struct HttpFeedSource {
    timeout: Duration,
}

impl HttpFeedSource {
    /// Creates a source with the given fetch timeout.
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for HttpFeedSource {
    fn default() -> Self {
        Self::new(FETCH_TIMEOUT)
    }
}

impl FeedSource for HttpFeedSource {
    fn read(&self, path: &Path) -> EngineResult<Option<String>> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(EngineError::FeedRead {
                path: path.display().to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn fetch(&self, url: &str) -> EngineResult<String> {
        let download_error = |message: String| EngineError::FeedDownload {
            url: url.to_string(),
            message,
        };

        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| download_error(e.to_string()))?;

        client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|e| download_error(e.to_string()))
    }

    fn persist(&self, path: &Path, content: &str) -> EngineResult<()> {
        fs::write(path, content).map_err(|e| EngineError::FeedWrite {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

/// A map-backed feed source for tests.
///
/// Local files live in an in-memory map; the remote feed is either a fixed
/// document or absent (in which case every fetch fails). Fetches are counted
/// so tests can assert on the caching behavior.
#[derive(Debug, Default)]
pub struct InMemoryFeedSource {
    files: RefCell<HashMap<PathBuf, String>>,
    remote: Option<String>,
    fetch_calls: Cell<u32>,
}

impl InMemoryFeedSource {
    /// Creates a source with no local files and an unreachable remote.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a local file to the source.
    pub fn with_local(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.borrow_mut().insert(path.into(), content.into());
        self
    }

    /// Sets the document the remote returns on fetch.
    pub fn with_remote(mut self, content: impl Into<String>) -> Self {
        self.remote = Some(content.into());
        self
    }

    /// The number of fetches performed so far.
    pub fn fetch_count(&self) -> u32 {
        self.fetch_calls.get()
    }

    /// Returns the current content of a local file, if any.
    pub fn local_content(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }
}

impl FeedSource for InMemoryFeedSource {
    fn read(&self, path: &Path) -> EngineResult<Option<String>> {
        Ok(self.files.borrow().get(path).cloned())
    }

    fn fetch(&self, url: &str) -> EngineResult<String> {
        self.fetch_calls.set(self.fetch_calls.get() + 1);
        self.remote.clone().ok_or_else(|| EngineError::FeedDownload {
            url: url.to_string(),
            message: "remote unavailable".to_string(),
        })
    }

    fn persist(&self, path: &Path, content: &str) -> EngineResult<()> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_read_returns_local_file() {
        let source = InMemoryFeedSource::new().with_local("feed.ics", "BEGIN:VCALENDAR");
        let content = source.read(Path::new("feed.ics")).unwrap();
        assert_eq!(content.as_deref(), Some("BEGIN:VCALENDAR"));
    }

    #[test]
    fn test_in_memory_read_missing_is_none() {
        let source = InMemoryFeedSource::new();
        assert!(source.read(Path::new("feed.ics")).unwrap().is_none());
    }

    #[test]
    fn test_in_memory_fetch_without_remote_fails() {
        let source = InMemoryFeedSource::new();
        let result = source.fetch("https://example.invalid/feed.ics");
        assert!(matches!(result, Err(EngineError::FeedDownload { .. })));
        assert_eq!(source.fetch_count(), 1);
    }

    #[test]
    fn test_in_memory_persist_is_readable_back() {
        let source = InMemoryFeedSource::new();
        source.persist(Path::new("feed.ics"), "DTSTART:20260501").unwrap();
        assert_eq!(
            source.read(Path::new("feed.ics")).unwrap().as_deref(),
            Some("DTSTART:20260501")
        );
    }

    #[test]
    fn test_http_source_read_missing_file_is_none() {
        let source = HttpFeedSource::default();
        let result = source.read(Path::new("definitely-absent-feed-xyz.ics")).unwrap();
        assert!(result.is_none());
    }
}
