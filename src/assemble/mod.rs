//! Payload assembly from payment configuration and order data.
//!
//! Mirrors the two-step flow of a checkout integration: first
//! [`can_render`] decides whether an order qualifies for an EPC QR code
//! at all, then [`build_payload`] assembles the
//! [`EpcPayload`](crate::epc::EpcPayload) from the configured beneficiary
//! data and the order's totals and references.
//! [`check_prerequisites`] exposes the underlying typed reasons.
//!
//! Configuration is read through the [`ConfigReader`] trait so shop
//! backends can plug in their own settings store; [`PaymentConfig`] and
//! [`ScopedConfig`] are ready-made in-memory implementations.
//!
//! # Example
//!
//! ```
//! use girocode::assemble::*;
//! use rust_decimal_macros::dec;
//!
//! let config = PaymentConfigBuilder::new("ACME GmbH", "DE89 3704 0044 0532 0130 00")
//!     .reference_type(ReferenceType::Payment)
//!     .payment_reference("Order %orderNumber% by %firstName% %lastName%")
//!     .build();
//!
//! let order = OrderSnapshot::new("100000001", dec!(49.90)).customer("John", "Doe");
//!
//! assert!(can_render(&config, &order));
//! let payload = build_payload(&config, &order)?;
//! assert_eq!(
//!     payload.remittance().text(),
//!     Some("Order 100000001 by John Doe"),
//! );
//! # Ok::<(), girocode::EpcError>(())
//! ```

mod assembler;
mod config;
mod order;

pub use assembler::{NotRenderable, build_payload, can_render, check_prerequisites};
pub use config::{
    ConfigReader, PaymentConfig, PaymentConfigBuilder, ReferenceType, ScopeNotFound, ScopedConfig,
    StoreId,
};
pub use order::{
    FIRST_NAME_TOKEN, LAST_NAME_TOKEN, ORDER_NUMBER_TOKEN, OrderSnapshot,
    expand_reference_template,
};

#[cfg(feature = "qr")]
pub(crate) use assembler::ERROR_LOG_PREFIX;
