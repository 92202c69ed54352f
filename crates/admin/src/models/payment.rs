//! Payment channel configuration records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use jade_shopping_core::{CurrencyCode, PaymentChannelId};

use crate::query::{Filter, TextSearch};

/// A payment channel the storefront can offer at checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentChannel {
    /// Unique channel ID.
    pub id: PaymentChannelId,
    /// Display name (e.g. "Alipay").
    pub name: String,
    /// Provider integration code.
    pub provider_code: String,
    /// Whether the channel is offered at checkout.
    pub enabled: bool,
    /// Transaction fee rate as a fraction (0.029 = 2.9%).
    pub fee_rate: Decimal,
    /// Currencies the channel settles in.
    pub supported_currencies: Vec<CurrencyCode>,
    /// When the channel was configured.
    pub created_at: DateTime<Utc>,
    /// When the channel was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Filter criteria for the payments screen.
#[derive(Debug, Clone, Default)]
pub struct PaymentFilter {
    /// Substring search over name and provider code.
    pub search: TextSearch,
    /// Filter by enabled state.
    pub enabled: Option<bool>,
    /// Only channels settling in this currency.
    pub currency: Option<CurrencyCode>,
}

impl Filter<PaymentChannel> for PaymentFilter {
    fn matches(&self, record: &PaymentChannel) -> bool {
        self.search
            .matches_any([record.name.as_str(), record.provider_code.as_str()])
            && self.enabled.is_none_or(|e| e == record.enabled)
            && self
                .currency
                .is_none_or(|c| record.supported_currencies.contains(&c))
    }
}
