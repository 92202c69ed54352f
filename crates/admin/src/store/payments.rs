//! Payment channel state container.

use tracing::{info, instrument};

use jade_shopping_core::PaymentChannelId;

use crate::error::AppError;
use crate::gateway::PaymentSource;
use crate::models::{PaymentChannel, PaymentFilter};
use crate::query::Page;

use super::{ListState, ListView};

/// State container for the payments screen.
pub struct PaymentStore<G> {
    gateway: G,
    state: ListState<PaymentChannel, PaymentFilter>,
}

impl<G> PaymentStore<G> {
    /// Create an empty store backed by the given source.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: ListState::default(),
        }
    }

    /// Replace the active filter.
    pub fn set_filter(&mut self, filter: PaymentFilter) {
        self.state.set_filter(filter);
    }

    /// The filtered, paginated view for rendering.
    #[must_use]
    pub fn view(&self, page: Page) -> ListView<PaymentChannel> {
        self.state.view(page)
    }

    /// Flip a channel's enabled flag; returns the new value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the channel is unknown.
    pub fn toggle_enabled(&mut self, id: PaymentChannelId) -> Result<bool, AppError> {
        let channel = self
            .state
            .records_mut()
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("payment channel {id}")))?;
        channel.enabled = !channel.enabled;
        channel.updated_at = chrono::Utc::now();
        info!(channel = %channel.name, enabled = channel.enabled, "payment channel toggled");
        Ok(channel.enabled)
    }
}

impl<G: PaymentSource> PaymentStore<G> {
    /// Fetch the channel list from the source.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Gateway`] when the source fails.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<(), AppError> {
        self.state.begin_load();
        match self.gateway.fetch_channels().await {
            Ok(records) => {
                self.state.complete(records);
                Ok(())
            }
            Err(e) => {
                self.state.fail(e.to_string());
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::gateway::fixtures::Fixtures;

    #[tokio::test]
    async fn test_toggle_enabled_twice_restores_state() {
        let mut store = PaymentStore::new(Fixtures);
        store.refresh().await.unwrap();
        let channel = store.view(Page::first()).page.items[0].clone();

        assert_eq!(store.toggle_enabled(channel.id).unwrap(), !channel.enabled);
        assert_eq!(store.toggle_enabled(channel.id).unwrap(), channel.enabled);
    }
}
