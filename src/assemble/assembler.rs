use log::{error, info};

use crate::epc::{self, CharacterSet, EpcPayload, EpcPayloadBuilder, EpcVersion};
use crate::error::EpcError;
use crate::iban::{self, IbanError};

use super::config::{ConfigReader, ReferenceType, ScopeNotFound};
use super::order::{OrderSnapshot, expand_reference_template};

pub(crate) const ERROR_LOG_PREFIX: &str = "Error rendering EPC QR code: ";

/// Why an order cannot be rendered as an EPC QR code.
///
/// Returned by [`check_prerequisites`]; [`can_render`] collapses it to a
/// boolean after logging the reasons worth an operator's attention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotRenderable {
    /// Rendering is disabled in the configuration.
    Disabled,
    /// The order grand total is outside the supported amount range.
    AmountOutOfRange(rust_decimal::Decimal),
    /// No beneficiary name is configured.
    MissingBeneficiaryName,
    /// The configured IBAN failed validation (a missing IBAN fails the
    /// country check with an empty country code).
    InvalidIban(IbanError),
    /// No reference type is configured.
    MissingReferenceType,
    /// The configured reference type is neither "PR" nor "CR".
    UnknownReferenceType(String),
    /// The configured character encoding is outside `1..=8`.
    CharacterEncodingOutOfRange(u32),
    /// A fixed payload-format constant was overridden with a foreign value.
    InvariantViolated(&'static str),
    /// Reference type "PR" is selected but no template is configured.
    PaymentReferenceNotConfigured,
    /// The order's store scope has no configuration.
    Scope(ScopeNotFound),
}

impl std::fmt::Display for NotRenderable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotRenderable::Disabled => write!(f, "EPC QR rendering is disabled"),
            NotRenderable::AmountOutOfRange(amount) => {
                write!(f, "grand total {} is out of the supported range", amount)
            }
            NotRenderable::MissingBeneficiaryName => {
                write!(f, "beneficiary name is not configured")
            }
            NotRenderable::InvalidIban(err) => write!(f, "{}", err),
            NotRenderable::MissingReferenceType => write!(f, "reference type is not configured"),
            NotRenderable::UnknownReferenceType(code) => {
                write!(f, "invalid reference type {:?}", code)
            }
            NotRenderable::CharacterEncodingOutOfRange(code) => {
                write!(f, "character encoding {} is outside 1..=8", code)
            }
            NotRenderable::InvariantViolated(what) => write!(f, "{}", what),
            NotRenderable::PaymentReferenceNotConfigured => {
                write!(f, "payment reference should be used, but is not configured")
            }
            NotRenderable::Scope(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for NotRenderable {}

impl From<ScopeNotFound> for NotRenderable {
    fn from(err: ScopeNotFound) -> Self {
        NotRenderable::Scope(err)
    }
}

/// Check every prerequisite for rendering an EPC QR code for `order`.
///
/// Prerequisites are checked in a fixed order and the first failure is
/// returned: enabled flag, amount range, beneficiary name, IBAN,
/// reference type, character encoding, the fixed payload-format
/// constants, and finally the template requirement of reference type
/// "PR". Pure aside from configuration reads; nothing is logged.
pub fn check_prerequisites(
    config: &impl ConfigReader,
    order: &OrderSnapshot,
) -> Result<(), NotRenderable> {
    let store_id = order.store_id;

    if !config.is_enabled(store_id)? {
        return Err(NotRenderable::Disabled);
    }

    if order.grand_total < epc::MIN_AMOUNT || order.grand_total > epc::MAX_AMOUNT {
        return Err(NotRenderable::AmountOutOfRange(order.grand_total));
    }

    match config.beneficiary_name(store_id)? {
        Some(name) if !name.is_empty() => {}
        _ => return Err(NotRenderable::MissingBeneficiaryName),
    }

    let raw_iban = config.iban(store_id)?.unwrap_or_default();
    iban::normalize(&raw_iban).map_err(NotRenderable::InvalidIban)?;

    let reference_type = match config.reference_type(store_id)? {
        Some(code) if !code.is_empty() => {
            ReferenceType::from_code(&code).ok_or(NotRenderable::UnknownReferenceType(code))?
        }
        _ => return Err(NotRenderable::MissingReferenceType),
    };

    let encoding = config.character_encoding(store_id)?;
    if !(1..=8).contains(&encoding) {
        return Err(NotRenderable::CharacterEncodingOutOfRange(encoding));
    }

    if config.service_tag() != epc::SERVICE_TAG {
        return Err(NotRenderable::InvariantViolated("service tag is not \"BCD\""));
    }
    if config.version() != 2 {
        return Err(NotRenderable::InvariantViolated("payload version is not 2"));
    }
    if config.identification() != epc::IDENTIFICATION {
        return Err(NotRenderable::InvariantViolated(
            "identification is not \"SCT\"",
        ));
    }

    if reference_type == ReferenceType::Payment {
        match config.payment_reference(store_id)? {
            Some(template) if !template.is_empty() => {}
            _ => return Err(NotRenderable::PaymentReferenceNotConfigured),
        }
    }

    Ok(())
}

/// Whether an EPC QR code can be rendered for `order`.
///
/// Wraps [`check_prerequisites`] and logs the outcome: an out-of-range
/// amount at info level (an everyday occurrence for zero-total orders),
/// configuration defects an operator must fix at error level, and the
/// remaining reasons silently.
pub fn can_render(config: &impl ConfigReader, order: &OrderSnapshot) -> bool {
    match check_prerequisites(config, order) {
        Ok(()) => true,
        Err(NotRenderable::AmountOutOfRange(total)) => {
            info!(
                "Grand total of {} is out of supported range for EPC QR code. Order #{}",
                total, order.increment_id
            );
            false
        }
        Err(
            reason @ (NotRenderable::InvalidIban(_)
            | NotRenderable::PaymentReferenceNotConfigured
            | NotRenderable::Scope(_)),
        ) => {
            error!("{}{}", ERROR_LOG_PREFIX, reason);
            false
        }
        Err(_) => false,
    }
}

/// Assemble the EPC payload for `order` from the configuration.
///
/// Reference type "PR" expands the configured template into remittance
/// text; "CR" uses the order increment id as the structured reference.
/// The BIC and customer hint are attached when configured and non-empty,
/// then validated by the payload builder like every other field.
///
/// Does not consult the enabled flag; call [`can_render`] first when the
/// rendering decision matters. Nothing is cached between the two calls,
/// so a configuration that changes in between is re-read as it now is.
pub fn build_payload(
    config: &impl ConfigReader,
    order: &OrderSnapshot,
) -> Result<EpcPayload, EpcError> {
    let store_id = order.store_id;

    let encoding = config.character_encoding(store_id)?;
    let character_set = u8::try_from(encoding)
        .ok()
        .and_then(CharacterSet::from_code)
        .ok_or(EpcError::UnknownCharacterSet(encoding))?;

    let version = EpcVersion::from_code(config.version())
        .ok_or(EpcError::UnsupportedVersion(config.version()))?;

    let iban = iban::normalize(&config.iban(store_id)?.unwrap_or_default())?;
    let beneficiary_name = config.beneficiary_name(store_id)?.unwrap_or_default();

    let reference_code = config.reference_type(store_id)?.unwrap_or_default();
    let reference_type = ReferenceType::from_code(&reference_code)
        .ok_or(EpcError::InvalidReferenceType(reference_code))?;

    let mut builder = EpcPayloadBuilder::new(beneficiary_name, iban, order.grand_total)
        .version(version)
        .character_set(character_set);

    builder = match reference_type {
        ReferenceType::Payment => {
            let template = match config.payment_reference(store_id)? {
                Some(template) if !template.is_empty() => template,
                _ => return Err(EpcError::MisconfiguredPaymentReference),
            };
            builder.remittance_text(expand_reference_template(&template, order))
        }
        ReferenceType::Creditor => builder.remittance_reference(order.increment_id.clone()),
    };

    if let Some(bic) = config.bic(store_id)?.filter(|bic| !bic.is_empty()) {
        builder = builder.bic(bic);
    }

    if let Some(hint) = config.customer_hint(store_id)?.filter(|hint| !hint.is_empty()) {
        builder = builder.information(hint);
    }

    builder.build()
}
