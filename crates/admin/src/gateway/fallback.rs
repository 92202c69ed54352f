//! Best-effort composition of a remote source over a local one.
//!
//! The legacy admin wrapped its few real network calls in try/catch and fell
//! back to local data when they failed. This combinator keeps that contract
//! explicit: try the primary, log the failure, serve the secondary.

use tracing::warn;

use crate::models::AdminUser;

use super::{AdminDirectory, DirectoryStats, GatewayError};

/// An [`AdminDirectory`] that prefers `primary` and falls back to
/// `secondary` when the primary fails.
///
/// Only surfaces an error when both sources fail; the primary's error is
/// logged and discarded, matching the legacy best-effort semantics.
#[derive(Debug, Clone)]
pub struct FallbackDirectory<P, S> {
    primary: P,
    secondary: S,
}

impl<P, S> FallbackDirectory<P, S> {
    /// Compose a primary source with a fallback.
    pub const fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }
}

impl<P: AdminDirectory, S: AdminDirectory> AdminDirectory for FallbackDirectory<P, S> {
    async fn fetch_admins(&self) -> Result<Vec<AdminUser>, GatewayError> {
        match self.primary.fetch_admins().await {
            Ok(admins) => Ok(admins),
            Err(e) => {
                warn!(error = %e, "primary admin directory failed, using fallback");
                self.secondary.fetch_admins().await
            }
        }
    }

    async fn fetch_stats(&self) -> Result<DirectoryStats, GatewayError> {
        match self.primary.fetch_stats().await {
            Ok(stats) => Ok(stats),
            Err(e) => {
                warn!(error = %e, "primary directory stats failed, using fallback");
                self.secondary.fetch_stats().await
            }
        }
    }

    async fn fetch_tags(&self) -> Result<Vec<String>, GatewayError> {
        match self.primary.fetch_tags().await {
            Ok(tags) => Ok(tags),
            Err(e) => {
                warn!(error = %e, "primary directory tags failed, using fallback");
                self.secondary.fetch_tags().await
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::gateway::fixtures::{Fixtures, Unavailable};

    #[tokio::test]
    async fn test_falls_back_when_primary_fails() {
        let directory = FallbackDirectory::new(Unavailable, Fixtures);
        let admins = directory.fetch_admins().await.unwrap();
        assert!(!admins.is_empty());
    }

    #[tokio::test]
    async fn test_errors_when_both_fail() {
        let directory = FallbackDirectory::new(Unavailable, Unavailable);
        assert!(directory.fetch_admins().await.is_err());
    }

    #[tokio::test]
    async fn test_prefers_primary() {
        let directory = FallbackDirectory::new(Fixtures, Unavailable);
        let stats = directory.fetch_stats().await.unwrap();
        assert_eq!(stats.total, 4);
    }
}
