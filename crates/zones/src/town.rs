//! Town model.

use serde::{Deserialize, Serialize};

/// An administrative grouping that owns delivery zones.
///
/// A town owns zero or more zones (zones point back via `town_id`; the town
/// holds no zone collection itself) and supplies the default delivery settings
/// applied when a zone does not override them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Town {
    /// Unique identifier
    pub id: String,
    /// Display name, e.g. "Tura"
    pub name: String,
    /// State the town belongs to, e.g. "Meghalaya"
    pub state: String,
    /// Inactive towns are hidden from town pickers and detection
    pub is_active: bool,
    /// Default delivery fee for zones of this town
    pub default_delivery_fee: f64,
    /// Default minimum order amount
    pub default_min_order_amount: f64,
    /// Default delivery ETA text, e.g. "30-45 mins"
    pub default_estimated_delivery_time: String,
}

impl Town {
    /// Creates an active town with zeroed delivery defaults.
    pub fn new(id: impl Into<String>, name: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            state: state.into(),
            is_active: true,
            default_delivery_fee: 0.0,
            default_min_order_amount: 0.0,
            default_estimated_delivery_time: String::new(),
        }
    }

    /// Builder-style method to set the default delivery fee.
    #[must_use]
    pub fn with_delivery_fee(mut self, fee: f64) -> Self {
        self.default_delivery_fee = fee;
        self
    }

    /// Builder-style method to set the default minimum order amount.
    #[must_use]
    pub fn with_min_order_amount(mut self, amount: f64) -> Self {
        self.default_min_order_amount = amount;
        self
    }

    /// Builder-style method to set the default delivery ETA text.
    #[must_use]
    pub fn with_estimated_delivery_time(mut self, eta: impl Into<String>) -> Self {
        self.default_estimated_delivery_time = eta.into();
        self
    }

    /// Builder-style method to set the active flag.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }
}
