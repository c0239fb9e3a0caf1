//! Override files served from a local directory.
//!
//! The browser-side extension normally asks a local development server for
//! `<name>`.  For command-line use and tests the same lookups are answered
//! from a directory on disk: `<root>/<name>`.
//!
//! # Failure mapping
//!
//! The [`FileFetcher`] contract says fetches never fail.  Every problem is
//! therefore turned into "absent":
//!
//! | Problem                          | Log level |
//! |----------------------------------|-----------|
//! | file does not exist              | `debug`   |
//! | name escapes the root directory  | `warn`    |
//! | other I/O error                  | `warn`    |
//! | file is not valid UTF-8          | `warn`    |

use std::io;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};

use crate::application::ports::FileFetcher;

/// Why a file could not be read.  Only used internally and for logging.
#[derive(Debug, Error)]
enum ReadError {
    #[error("file name '{0}' is not a plain relative path")]
    InvalidName(String),

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0} is not valid UTF-8")]
    NotUtf8(PathBuf),
}

/// [`FileFetcher`] backed by a directory.
#[derive(Debug, Clone)]
pub struct DirectoryFetcher {
    root: PathBuf,
}

impl DirectoryFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps `name` to a path under the root.
    ///
    /// Only plain relative names are accepted: `lib/foo.js` is fine,
    /// `../secret.js` and `/etc/passwd` are not.
    fn path_for(&self, name: &str) -> Result<PathBuf, ReadError> {
        let relative = Path::new(name);
        let plain = !name.is_empty()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)));
        if !plain {
            return Err(ReadError::InvalidName(name.to_string()));
        }
        Ok(self.root.join(relative))
    }

    async fn read(&self, name: &str) -> Result<Option<String>, ReadError> {
        let path = self.path_for(name)?;
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(ReadError::Io { path, source }),
        };
        String::from_utf8(bytes)
            .map(Some)
            .map_err(|_| ReadError::NotUtf8(path))
    }
}

#[async_trait]
impl FileFetcher for DirectoryFetcher {
    async fn fetch(&self, name: &str) -> Option<String> {
        match self.read(name).await {
            Ok(Some(body)) => {
                debug!(file = name, bytes = body.len(), "read override file");
                Some(body)
            }
            Ok(None) => {
                debug!(file = name, "override file not found");
                None
            }
            Err(e) => {
                warn!(file = name, "treating override file as absent: {e}");
                None
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
