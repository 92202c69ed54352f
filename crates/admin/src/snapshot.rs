//! Local persistence of UI session state.
//!
//! The legacy admin kept the signed-in identity, column preferences, and
//! notification counters in browser-local storage keyed by hardcoded
//! strings. Here the same material serializes as one JSON document at a
//! configured path, and loading is lenient: a missing or corrupt snapshot
//! yields `None` so the application starts from defaults instead of
//! refusing to boot.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use jade_shopping_core::AdminUserId;

/// Snapshot read/write failure.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Filesystem I/O failed.
    #[error("snapshot io at {path}: {source}")]
    Io {
        /// Snapshot path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The snapshot could not be serialized.
    #[error("snapshot encode: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Everything the admin UI persists between sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// ID of the signed-in admin, if a session was active.
    pub admin_id: Option<AdminUserId>,
    /// Username of the signed-in admin, for the login form prefill.
    pub username: Option<String>,
    /// Whether the session was authenticated when the snapshot was taken.
    pub authenticated: bool,
    /// Per-screen visible-column preferences, keyed by screen name.
    pub column_preferences: HashMap<String, Vec<String>>,
    /// Unread notification count carried across sessions.
    pub unread_notifications: u32,
    /// When the snapshot was written.
    pub saved_at: Option<DateTime<Utc>>,
}

impl StateSnapshot {
    /// Record the visible columns for a screen.
    pub fn set_columns(&mut self, screen: impl Into<String>, columns: Vec<String>) {
        self.column_preferences.insert(screen.into(), columns);
    }

    /// Visible columns previously saved for a screen.
    #[must_use]
    pub fn columns(&self, screen: &str) -> Option<&[String]> {
        self.column_preferences.get(screen).map(Vec::as_slice)
    }

    /// Drop the session identity while keeping UI preferences.
    pub fn clear_session(&mut self) {
        self.admin_id = None;
        self.authenticated = false;
    }
}

/// Reads and writes the snapshot file.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Snapshot store backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the snapshot file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the snapshot, stamping `saved_at`.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] if serialization or the filesystem write
    /// fails.
    #[instrument(skip(self, snapshot), fields(path = %self.path.display()))]
    pub fn save(&self, snapshot: &StateSnapshot) -> Result<(), SnapshotError> {
        let mut stamped = snapshot.clone();
        stamped.saved_at = Some(Utc::now());

        let json = serde_json::to_vec_pretty(&stamped).map_err(SnapshotError::Encode)?;
        std::fs::write(&self.path, json).map_err(|source| SnapshotError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!("snapshot written");
        Ok(())
    }

    /// Load the snapshot if one exists and parses.
    ///
    /// A missing file or undecodable content returns `None`; the failure is
    /// logged at debug level and the caller starts from defaults.
    #[must_use]
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Option<StateSnapshot> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!(error = %e, "no snapshot loaded");
                return None;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                debug!(error = %e, "snapshot unreadable, starting fresh");
                None
            }
        }
    }

    /// Delete the snapshot file. Missing files are not an error.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Io`] for filesystem failures other than the
    /// file not existing.
    pub fn clear(&self) -> Result<(), SnapshotError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(SnapshotError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }
}
