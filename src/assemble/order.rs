use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::config::StoreId;

/// Placeholder for the order increment id in a payment reference template.
pub const ORDER_NUMBER_TOKEN: &str = "%orderNumber%";

/// Placeholder for the customer first name in a payment reference template.
pub const FIRST_NAME_TOKEN: &str = "%firstName%";

/// Placeholder for the customer last name in a payment reference template.
pub const LAST_NAME_TOKEN: &str = "%lastName%";

/// The order fields payload assembly reads.
///
/// A snapshot decouples assembly from any particular shop backend: copy
/// the fields over once and hand the snapshot around. Missing customer
/// names expand to empty strings in reference templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSnapshot {
    /// Human-facing order number, e.g. "100000001".
    pub increment_id: String,
    /// Grand total in euro.
    pub grand_total: Decimal,
    /// Customer first name, if known.
    pub customer_firstname: Option<String>,
    /// Customer last name, if known.
    pub customer_lastname: Option<String>,
    /// Store scope the order was placed in.
    pub store_id: Option<StoreId>,
    /// Payment method code, if known.
    pub payment_method: Option<String>,
}

impl OrderSnapshot {
    /// Create a snapshot with the required fields.
    pub fn new(increment_id: impl Into<String>, grand_total: Decimal) -> Self {
        Self {
            increment_id: increment_id.into(),
            grand_total,
            customer_firstname: None,
            customer_lastname: None,
            store_id: None,
            payment_method: None,
        }
    }

    /// Set the customer name.
    pub fn customer(mut self, firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        self.customer_firstname = Some(firstname.into());
        self.customer_lastname = Some(lastname.into());
        self
    }

    /// Set the store scope.
    pub fn store(mut self, store_id: StoreId) -> Self {
        self.store_id = Some(store_id);
        self
    }

    /// Set the payment method code.
    pub fn payment_method(mut self, code: impl Into<String>) -> Self {
        self.payment_method = Some(code.into());
        self
    }
}

/// Expand the placeholder tokens of a payment reference template.
///
/// Plain substring replacement, not a templating engine: every occurrence
/// of each token is replaced, unknown tokens pass through untouched. The
/// tokens are disjoint literals, so the replacement order does not matter.
pub fn expand_reference_template(template: &str, order: &OrderSnapshot) -> String {
    template
        .replace(ORDER_NUMBER_TOKEN, &order.increment_id)
        .replace(
            FIRST_NAME_TOKEN,
            order.customer_firstname.as_deref().unwrap_or_default(),
        )
        .replace(
            LAST_NAME_TOKEN,
            order.customer_lastname.as_deref().unwrap_or_default(),
        )
}
