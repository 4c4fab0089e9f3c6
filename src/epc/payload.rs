use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::EpcError;
use crate::iban::Iban;

use super::charset::CharacterSet;

/// Service tag opening every EPC QR payload (element 1).
pub const SERVICE_TAG: &str = "BCD";

/// Identification code for SEPA credit transfers (element 4).
pub const IDENTIFICATION: &str = "SCT";

/// Smallest transfer amount an EPC QR code can carry.
pub const MIN_AMOUNT: Decimal = dec!(0.01);

/// Largest transfer amount an EPC QR code can carry.
pub const MAX_AMOUNT: Decimal = dec!(999999999.99);

/// Maximum beneficiary name length in characters.
pub const MAX_NAME_LEN: usize = 70;

/// Maximum structured remittance reference length in characters.
pub const MAX_REMITTANCE_REFERENCE_LEN: usize = 35;

/// Maximum unstructured remittance text length in characters.
pub const MAX_REMITTANCE_TEXT_LEN: usize = 140;

/// Maximum beneficiary-to-originator information length in characters.
pub const MAX_INFORMATION_LEN: usize = 70;

/// Maximum purpose code length in characters.
pub const MAX_PURPOSE_LEN: usize = 4;

/// EPC payload format versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EpcVersion {
    /// Version 001. The BIC element is mandatory.
    V1,
    /// Version 002. The BIC element is optional within the EEA.
    V2,
}

impl EpcVersion {
    /// Numeric code, zero-padded to three digits in the payload.
    pub fn code(&self) -> u8 {
        match self {
            EpcVersion::V1 => 1,
            EpcVersion::V2 => 2,
        }
    }

    /// Parse from the numeric version code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(EpcVersion::V1),
            2 => Some(EpcVersion::V2),
            _ => None,
        }
    }
}

/// Remittance information, structured or unstructured.
///
/// The payload reserves one line for each form, but only one may carry a
/// value. The other line stays empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Remittance {
    /// Structured creditor reference (ISO 11649 or a national scheme).
    Reference(String),
    /// Unstructured free text.
    Text(String),
}

impl Remittance {
    /// The structured reference, if this is the structured form.
    pub fn reference(&self) -> Option<&str> {
        match self {
            Remittance::Reference(reference) => Some(reference),
            Remittance::Text(_) => None,
        }
    }

    /// The unstructured text, if this is the unstructured form.
    pub fn text(&self) -> Option<&str> {
        match self {
            Remittance::Text(text) => Some(text),
            Remittance::Reference(_) => None,
        }
    }
}

/// A validated EPC QR payload for a SEPA credit transfer.
///
/// Constructed via [`EpcPayloadBuilder`], which checks every range and
/// length limit, so an existing payload always serializes cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpcPayload {
    version: EpcVersion,
    character_set: CharacterSet,
    bic: Option<String>,
    beneficiary_name: String,
    iban: Iban,
    amount: Decimal,
    purpose: Option<String>,
    remittance: Remittance,
    information: Option<String>,
}

impl EpcPayload {
    /// Payload format version.
    pub fn version(&self) -> EpcVersion {
        self.version
    }

    /// Declared character set.
    pub fn character_set(&self) -> CharacterSet {
        self.character_set
    }

    /// BIC of the beneficiary bank, if set.
    pub fn bic(&self) -> Option<&str> {
        self.bic.as_deref()
    }

    /// Name of the beneficiary.
    pub fn beneficiary_name(&self) -> &str {
        &self.beneficiary_name
    }

    /// IBAN of the beneficiary account.
    pub fn iban(&self) -> &Iban {
        &self.iban
    }

    /// Transfer amount in euro, as passed to the builder.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// SEPA purpose code, if set.
    pub fn purpose(&self) -> Option<&str> {
        self.purpose.as_deref()
    }

    /// Remittance information.
    pub fn remittance(&self) -> &Remittance {
        &self.remittance
    }

    /// Beneficiary-to-originator information, if set.
    pub fn information(&self) -> Option<&str> {
        self.information.as_deref()
    }

    /// Serialize to the newline-separated text that gets encoded into the
    /// QR code.
    ///
    /// Elements appear in the fixed EPC069-12 order. Trailing empty
    /// elements are dropped; interior empty elements are kept so the
    /// positions stay aligned. The amount is rounded half-away-from-zero
    /// to two decimal places and prefixed with "EUR".
    pub fn to_text(&self) -> String {
        let amount = self
            .amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        let mut lines = vec![
            SERVICE_TAG.to_string(),
            format!("{:03}", self.version.code()),
            self.character_set.code().to_string(),
            IDENTIFICATION.to_string(),
            self.bic.clone().unwrap_or_default(),
            self.beneficiary_name.clone(),
            self.iban.as_str().to_string(),
            format!("EUR{:.2}", amount),
            self.purpose.clone().unwrap_or_default(),
            self.remittance.reference().unwrap_or_default().to_string(),
            self.remittance.text().unwrap_or_default().to_string(),
            self.information.clone().unwrap_or_default(),
        ];

        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }

        lines.join("\n")
    }
}

impl std::fmt::Display for EpcPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

/// Builder for [`EpcPayload`].
///
/// ```
/// use girocode::epc::EpcPayloadBuilder;
/// use girocode::iban;
/// use rust_decimal_macros::dec;
///
/// let payload = EpcPayloadBuilder::new(
///     "Red Cross of Belgium",
///     iban::normalize("BE72 0000 0000 1616")?,
///     dec!(40),
/// )
/// .bic("BPOTBEB1")
/// .remittance_text("Urgency fund")
/// .build()?;
///
/// assert!(payload.to_text().starts_with("BCD\n002\n1\nSCT\n"));
/// # Ok::<(), girocode::EpcError>(())
/// ```
pub struct EpcPayloadBuilder {
    version: EpcVersion,
    character_set: CharacterSet,
    bic: Option<String>,
    beneficiary_name: String,
    iban: Iban,
    amount: Decimal,
    purpose: Option<String>,
    remittance: Option<Remittance>,
    information: Option<String>,
}

impl EpcPayloadBuilder {
    pub fn new(beneficiary_name: impl Into<String>, iban: Iban, amount: Decimal) -> Self {
        Self {
            version: EpcVersion::V2,
            character_set: CharacterSet::Utf8,
            bic: None,
            beneficiary_name: beneficiary_name.into(),
            iban,
            amount,
            purpose: None,
            remittance: None,
            information: None,
        }
    }

    pub fn version(mut self, version: EpcVersion) -> Self {
        self.version = version;
        self
    }

    pub fn character_set(mut self, character_set: CharacterSet) -> Self {
        self.character_set = character_set;
        self
    }

    pub fn bic(mut self, bic: impl Into<String>) -> Self {
        self.bic = Some(bic.into());
        self
    }

    pub fn purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = Some(purpose.into());
        self
    }

    /// Set a structured creditor reference. Replaces remittance text set earlier.
    pub fn remittance_reference(mut self, reference: impl Into<String>) -> Self {
        self.remittance = Some(Remittance::Reference(reference.into()));
        self
    }

    /// Set unstructured remittance text. Replaces a reference set earlier.
    pub fn remittance_text(mut self, text: impl Into<String>) -> Self {
        self.remittance = Some(Remittance::Text(text.into()));
        self
    }

    pub fn information(mut self, information: impl Into<String>) -> Self {
        self.information = Some(information.into());
        self
    }

    /// Build the payload, validating the amount range and all length limits.
    pub fn build(self) -> Result<EpcPayload, EpcError> {
        if self.amount < MIN_AMOUNT || self.amount > MAX_AMOUNT {
            return Err(EpcError::AmountOutOfRange(self.amount));
        }

        if self.beneficiary_name.is_empty() {
            return Err(EpcError::Payload("beneficiary name is required".into()));
        }
        let name_len = self.beneficiary_name.chars().count();
        if name_len > MAX_NAME_LEN {
            return Err(EpcError::FieldTooLong {
                field: "beneficiary name",
                max: MAX_NAME_LEN,
                len: name_len,
            });
        }

        if let Some(bic) = &self.bic {
            let len = bic.chars().count();
            if len != 8 && len != 11 {
                return Err(EpcError::InvalidBic(bic.clone()));
            }
        } else if self.version == EpcVersion::V1 {
            return Err(EpcError::Payload(
                "payload version 001 requires a BIC".into(),
            ));
        }

        if let Some(purpose) = &self.purpose {
            let len = purpose.chars().count();
            if len > MAX_PURPOSE_LEN {
                return Err(EpcError::FieldTooLong {
                    field: "purpose",
                    max: MAX_PURPOSE_LEN,
                    len,
                });
            }
        }

        let remittance = self.remittance.ok_or_else(|| {
            EpcError::Payload(
                "either a remittance reference or a remittance text is required".into(),
            )
        })?;
        match &remittance {
            Remittance::Reference(reference) => {
                let len = reference.chars().count();
                if len > MAX_REMITTANCE_REFERENCE_LEN {
                    return Err(EpcError::FieldTooLong {
                        field: "remittance reference",
                        max: MAX_REMITTANCE_REFERENCE_LEN,
                        len,
                    });
                }
            }
            Remittance::Text(text) => {
                let len = text.chars().count();
                if len > MAX_REMITTANCE_TEXT_LEN {
                    return Err(EpcError::FieldTooLong {
                        field: "remittance text",
                        max: MAX_REMITTANCE_TEXT_LEN,
                        len,
                    });
                }
            }
        }

        if let Some(information) = &self.information {
            let len = information.chars().count();
            if len > MAX_INFORMATION_LEN {
                return Err(EpcError::FieldTooLong {
                    field: "information",
                    max: MAX_INFORMATION_LEN,
                    len,
                });
            }
        }

        Ok(EpcPayload {
            version: self.version,
            character_set: self.character_set,
            bic: self.bic,
            beneficiary_name: self.beneficiary_name,
            iban: self.iban,
            amount: self.amount,
            purpose: self.purpose,
            remittance,
            information: self.information,
        })
    }
}
