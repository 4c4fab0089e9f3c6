//! # girocode
//!
//! EPC QR code ("GiroCode") payload generation for SEPA credit transfers:
//! IBAN normalization, EPC069-12 payload assembly, and optional PNG
//! rendering of the scannable code.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Payloads follow the [EPC069-12](https://www.europeanpaymentscouncil.eu/document-library/guidance-documents/quick-response-code-guidelines-enable-data-capture-initiation) guidelines, version 2.
//!
//! ## Quick Start
//!
//! ```rust
//! use girocode::assemble::*;
//! use rust_decimal_macros::dec;
//!
//! let config = PaymentConfigBuilder::new("ACME GmbH", "AT61 1904 3002 3457 3201")
//!     .reference_type(ReferenceType::Creditor)
//!     .bic("GIBAATWWXXX")
//!     .build();
//!
//! let order = OrderSnapshot::new("100000001", dec!(100)).customer("John", "Doe");
//!
//! assert!(can_render(&config, &order));
//! let payload = build_payload(&config, &order).unwrap();
//! assert_eq!(payload.to_text().lines().nth(6), Some("AT611904300234573201"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | IBAN validation, EPC payload types, order assembly |
//! | `qr` | QR code rendering to PNG and base64 data URIs |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod assemble;

#[cfg(feature = "core")]
pub mod epc;

#[cfg(feature = "core")]
pub mod iban;

#[cfg(feature = "core")]
mod error;

#[cfg(feature = "qr")]
pub mod qr;

// Re-export the error type at crate root for convenience
#[cfg(feature = "core")]
pub use crate::error::EpcError;
