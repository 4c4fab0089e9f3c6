use rust_decimal::Decimal;
use thiserror::Error;

use crate::assemble::ScopeNotFound;
use crate::iban::IbanError;

/// Errors that can occur during payload assembly or rendering.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EpcError {
    /// The configured IBAN failed validation.
    #[error("{0}")]
    Iban(#[from] IbanError),

    /// Configuration was requested for a store scope that does not exist.
    #[error("{0}")]
    ScopeNotFound(#[from] ScopeNotFound),

    /// The configured reference type is neither "PR" nor "CR".
    #[error("invalid reference type {0:?}")]
    InvalidReferenceType(String),

    /// Reference type "PR" is selected but no payment reference template is set.
    #[error("payment reference type \"PR\" requires a payment reference template")]
    MisconfiguredPaymentReference,

    /// The transfer amount is outside the range representable in an EPC QR code.
    #[error("amount {0} is out of the supported range")]
    AmountOutOfRange(Decimal),

    /// A text field exceeds the maximum length the payload format allows.
    #[error("{field} exceeds {max} characters (got {len})")]
    FieldTooLong {
        /// Which payload field overflowed.
        field: &'static str,
        /// Maximum number of characters the format allows.
        max: usize,
        /// Character count of the rejected value.
        len: usize,
    },

    /// The BIC is not 8 or 11 characters long.
    #[error("invalid BIC {0:?}")]
    InvalidBic(String),

    /// The character set code is outside the defined range 1..=8.
    #[error("unknown character set code {0}")]
    UnknownCharacterSet(u32),

    /// The payload version is neither 1 nor 2.
    #[error("unsupported payload version {0}")]
    UnsupportedVersion(u8),

    /// Payload construction failed for a structural reason.
    #[error("payload error: {0}")]
    Payload(String),

    /// QR code rendering or image encoding failed.
    #[error("render error: {0}")]
    Render(String),
}
