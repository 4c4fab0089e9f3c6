//! EPC QR payload types and text serialization.
//!
//! Models the EPC069-12 "quick response code" data record for SEPA
//! credit transfers: a fixed sequence of newline-separated elements
//! that banking apps scan to prefill a transfer.
//!
//! # Example
//!
//! ```
//! use girocode::epc::EpcPayloadBuilder;
//! use girocode::iban;
//! use rust_decimal_macros::dec;
//!
//! let payload = EpcPayloadBuilder::new(
//!     "Red Cross of Belgium",
//!     iban::normalize("BE72 0000 0000 1616")?,
//!     dec!(40),
//! )
//! .remittance_text("Urgency fund")
//! .build()?;
//!
//! assert_eq!(payload.to_text().lines().count(), 11);
//! # Ok::<(), girocode::EpcError>(())
//! ```

mod charset;
mod payload;

pub use charset::CharacterSet;
pub use payload::{
    EpcPayload, EpcPayloadBuilder, EpcVersion, IDENTIFICATION, MAX_AMOUNT, MAX_INFORMATION_LEN,
    MAX_NAME_LEN, MAX_PURPOSE_LEN, MAX_REMITTANCE_REFERENCE_LEN, MAX_REMITTANCE_TEXT_LEN,
    MIN_AMOUNT, Remittance, SERVICE_TAG,
};
