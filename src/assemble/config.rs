use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::epc;

/// Store scope identifier.
pub type StoreId = u32;

/// Error returned when configuration is requested for an unknown store scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeNotFound {
    /// The requested scope. `None` is the default scope.
    pub store_id: Option<StoreId>,
}

impl std::fmt::Display for ScopeNotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.store_id {
            Some(id) => write!(f, "store scope {} not found", id),
            None => write!(f, "default store scope not found"),
        }
    }
}

impl std::error::Error for ScopeNotFound {}

/// How the remittance part of the payload is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceType {
    /// "PR": expand the configured payment reference template into
    /// unstructured remittance text.
    Payment,
    /// "CR": use the order increment id as a structured creditor reference.
    Creditor,
}

impl ReferenceType {
    /// Two-letter configuration code.
    pub fn code(&self) -> &'static str {
        match self {
            ReferenceType::Payment => "PR",
            ReferenceType::Creditor => "CR",
        }
    }

    /// Parse from the two-letter configuration code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "PR" => Some(ReferenceType::Payment),
            "CR" => Some(ReferenceType::Creditor),
            _ => None,
        }
    }
}

/// Read-side access to EPC QR payment configuration.
///
/// Every accessor takes an optional store scope so multi-store setups can
/// override values per store; `None` reads the default scope. Implementors
/// return [`ScopeNotFound`] when the requested scope does not exist.
///
/// The payload-format constants at the bottom have default implementations
/// because EPC069-12 fixes them; [`can_render`](crate::assemble::can_render)
/// still checks them so an implementor that overrides them with anything
/// else never reaches the encoder.
pub trait ConfigReader {
    /// Whether EPC QR rendering is enabled at all.
    fn is_enabled(&self, store_id: Option<StoreId>) -> Result<bool, ScopeNotFound>;

    /// Beneficiary name shown in the banking app.
    fn beneficiary_name(
        &self,
        store_id: Option<StoreId>,
    ) -> Result<Option<String>, ScopeNotFound>;

    /// Raw beneficiary IBAN as configured, spacing and case preserved.
    fn iban(&self, store_id: Option<StoreId>) -> Result<Option<String>, ScopeNotFound>;

    /// Beneficiary BIC, if configured.
    fn bic(&self, store_id: Option<StoreId>) -> Result<Option<String>, ScopeNotFound>;

    /// Reference type code, "PR" or "CR".
    fn reference_type(&self, store_id: Option<StoreId>) -> Result<Option<String>, ScopeNotFound>;

    /// Payment reference template used with reference type "PR".
    fn payment_reference(
        &self,
        store_id: Option<StoreId>,
    ) -> Result<Option<String>, ScopeNotFound>;

    /// Hint text shown to the customer alongside the code.
    fn customer_hint(&self, store_id: Option<StoreId>) -> Result<Option<String>, ScopeNotFound>;

    /// Character set code for the payload, expected in `1..=8`.
    fn character_encoding(&self, store_id: Option<StoreId>) -> Result<u32, ScopeNotFound>;

    /// Foreground color for QR rendering ("#RRGGBB"), if configured.
    fn code_color(&self, store_id: Option<StoreId>) -> Result<Option<String>, ScopeNotFound>;

    /// Background color for QR rendering ("#RRGGBB"), if configured.
    fn background_color(
        &self,
        store_id: Option<StoreId>,
    ) -> Result<Option<String>, ScopeNotFound>;

    /// Service tag of the payload format.
    fn service_tag(&self) -> String {
        epc::SERVICE_TAG.to_string()
    }

    /// Payload format version.
    fn version(&self) -> u8 {
        2
    }

    /// Identification code of the payload format.
    fn identification(&self) -> String {
        epc::IDENTIFICATION.to_string()
    }
}

/// In-memory payment configuration for a single scope.
///
/// The direct equivalent of a shop's settings store, usable standalone
/// and as the per-scope entry of [`ScopedConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentConfig {
    /// Whether EPC QR rendering is enabled.
    pub enabled: bool,
    /// Beneficiary name.
    pub beneficiary_name: Option<String>,
    /// Raw beneficiary IBAN.
    pub iban: Option<String>,
    /// Beneficiary BIC.
    pub bic: Option<String>,
    /// Reference type code, "PR" or "CR".
    pub reference_type: Option<String>,
    /// Payment reference template for reference type "PR".
    pub payment_reference: Option<String>,
    /// Customer hint text.
    pub customer_hint: Option<String>,
    /// Character set code, expected in `1..=8`.
    pub character_encoding: u32,
    /// QR foreground color ("#RRGGBB").
    pub code_color: Option<String>,
    /// QR background color ("#RRGGBB").
    pub background_color: Option<String>,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            beneficiary_name: None,
            iban: None,
            bic: None,
            reference_type: None,
            payment_reference: None,
            customer_hint: None,
            character_encoding: 1,
            code_color: None,
            background_color: None,
        }
    }
}

impl ConfigReader for PaymentConfig {
    fn is_enabled(&self, _store_id: Option<StoreId>) -> Result<bool, ScopeNotFound> {
        Ok(self.enabled)
    }

    fn beneficiary_name(
        &self,
        _store_id: Option<StoreId>,
    ) -> Result<Option<String>, ScopeNotFound> {
        Ok(self.beneficiary_name.clone())
    }

    fn iban(&self, _store_id: Option<StoreId>) -> Result<Option<String>, ScopeNotFound> {
        Ok(self.iban.clone())
    }

    fn bic(&self, _store_id: Option<StoreId>) -> Result<Option<String>, ScopeNotFound> {
        Ok(self.bic.clone())
    }

    fn reference_type(&self, _store_id: Option<StoreId>) -> Result<Option<String>, ScopeNotFound> {
        Ok(self.reference_type.clone())
    }

    fn payment_reference(
        &self,
        _store_id: Option<StoreId>,
    ) -> Result<Option<String>, ScopeNotFound> {
        Ok(self.payment_reference.clone())
    }

    fn customer_hint(&self, _store_id: Option<StoreId>) -> Result<Option<String>, ScopeNotFound> {
        Ok(self.customer_hint.clone())
    }

    fn character_encoding(&self, _store_id: Option<StoreId>) -> Result<u32, ScopeNotFound> {
        Ok(self.character_encoding)
    }

    fn code_color(&self, _store_id: Option<StoreId>) -> Result<Option<String>, ScopeNotFound> {
        Ok(self.code_color.clone())
    }

    fn background_color(
        &self,
        _store_id: Option<StoreId>,
    ) -> Result<Option<String>, ScopeNotFound> {
        Ok(self.background_color.clone())
    }
}

/// Builder for [`PaymentConfig`].
///
/// # Example
///
/// ```
/// use girocode::assemble::{PaymentConfigBuilder, ReferenceType};
///
/// let config = PaymentConfigBuilder::new("ACME GmbH", "AT61 1904 3002 3457 3201")
///     .reference_type(ReferenceType::Creditor)
///     .bic("GIBAATWWXXX")
///     .build();
/// assert!(config.enabled);
/// ```
pub struct PaymentConfigBuilder {
    config: PaymentConfig,
}

impl PaymentConfigBuilder {
    /// Create an enabled configuration with the required beneficiary fields.
    pub fn new(beneficiary_name: impl Into<String>, iban: impl Into<String>) -> Self {
        Self {
            config: PaymentConfig {
                enabled: true,
                beneficiary_name: Some(beneficiary_name.into()),
                iban: Some(iban.into()),
                ..Default::default()
            },
        }
    }

    /// Enable or disable rendering.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.config.enabled = enabled;
        self
    }

    /// Set the beneficiary BIC.
    pub fn bic(mut self, bic: impl Into<String>) -> Self {
        self.config.bic = Some(bic.into());
        self
    }

    /// Set the reference type.
    pub fn reference_type(mut self, reference_type: ReferenceType) -> Self {
        self.config.reference_type = Some(reference_type.code().to_string());
        self
    }

    /// Set the payment reference template for reference type "PR".
    pub fn payment_reference(mut self, template: impl Into<String>) -> Self {
        self.config.payment_reference = Some(template.into());
        self
    }

    /// Set the customer hint text.
    pub fn customer_hint(mut self, hint: impl Into<String>) -> Self {
        self.config.customer_hint = Some(hint.into());
        self
    }

    /// Set the character set code (1..=8).
    pub fn character_encoding(mut self, code: u32) -> Self {
        self.config.character_encoding = code;
        self
    }

    /// Set the QR foreground color ("#RRGGBB").
    pub fn code_color(mut self, color: impl Into<String>) -> Self {
        self.config.code_color = Some(color.into());
        self
    }

    /// Set the QR background color ("#RRGGBB").
    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.config.background_color = Some(color.into());
        self
    }

    /// Finish the builder.
    pub fn build(self) -> PaymentConfig {
        self.config
    }
}

/// Store-scoped configuration: a default scope plus per-store overrides.
///
/// Reading with `Some(store_id)` resolves the override for that store and
/// fails with [`ScopeNotFound`] when none is registered; `None` reads the
/// default scope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScopedConfig {
    default: PaymentConfig,
    stores: HashMap<StoreId, PaymentConfig>,
}

impl ScopedConfig {
    /// Create from the default-scope configuration.
    pub fn new(default: PaymentConfig) -> Self {
        Self {
            default,
            stores: HashMap::new(),
        }
    }

    /// Register a complete per-store override.
    pub fn with_store(mut self, store_id: StoreId, config: PaymentConfig) -> Self {
        self.stores.insert(store_id, config);
        self
    }

    fn resolve(&self, store_id: Option<StoreId>) -> Result<&PaymentConfig, ScopeNotFound> {
        match store_id {
            None => Ok(&self.default),
            Some(id) => self.stores.get(&id).ok_or(ScopeNotFound {
                store_id: Some(id),
            }),
        }
    }
}

impl ConfigReader for ScopedConfig {
    fn is_enabled(&self, store_id: Option<StoreId>) -> Result<bool, ScopeNotFound> {
        self.resolve(store_id)?.is_enabled(None)
    }

    fn beneficiary_name(
        &self,
        store_id: Option<StoreId>,
    ) -> Result<Option<String>, ScopeNotFound> {
        self.resolve(store_id)?.beneficiary_name(None)
    }

    fn iban(&self, store_id: Option<StoreId>) -> Result<Option<String>, ScopeNotFound> {
        self.resolve(store_id)?.iban(None)
    }

    fn bic(&self, store_id: Option<StoreId>) -> Result<Option<String>, ScopeNotFound> {
        self.resolve(store_id)?.bic(None)
    }

    fn reference_type(&self, store_id: Option<StoreId>) -> Result<Option<String>, ScopeNotFound> {
        self.resolve(store_id)?.reference_type(None)
    }

    fn payment_reference(
        &self,
        store_id: Option<StoreId>,
    ) -> Result<Option<String>, ScopeNotFound> {
        self.resolve(store_id)?.payment_reference(None)
    }

    fn customer_hint(&self, store_id: Option<StoreId>) -> Result<Option<String>, ScopeNotFound> {
        self.resolve(store_id)?.customer_hint(None)
    }

    fn character_encoding(&self, store_id: Option<StoreId>) -> Result<u32, ScopeNotFound> {
        self.resolve(store_id)?.character_encoding(None)
    }

    fn code_color(&self, store_id: Option<StoreId>) -> Result<Option<String>, ScopeNotFound> {
        self.resolve(store_id)?.code_color(None)
    }

    fn background_color(
        &self,
        store_id: Option<StoreId>,
    ) -> Result<Option<String>, ScopeNotFound> {
        self.resolve(store_id)?.background_color(None)
    }
}
