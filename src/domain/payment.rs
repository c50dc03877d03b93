use crate::error::{GiroCodeError, Result};
use regex::Regex;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::sync::OnceLock;

pub const MAX_NAME_LEN: usize = 70;
pub const MAX_REFERENCE_LEN: usize = 140;
pub const MAX_MESSAGE_LEN: usize = 140;

/// A SEPA credit transfer request as entered on an invoice.
///
/// Fields are kept exactly as supplied; normalization and truncation happen
/// when the payload is encoded.
#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
pub struct PaymentPayload {
    /// Beneficiary name.
    pub name: String,
    pub iban: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub bic: Option<String>,
    /// Amount in EUR.
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub reference: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub message: Option<String>,
}

fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

impl PaymentPayload {
    pub fn new(name: impl Into<String>, iban: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            iban: iban.into(),
            ..Self::default()
        }
    }

    pub fn with_bic(mut self, bic: impl Into<String>) -> Self {
        self.bic = Some(bic.into());
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Removes all whitespace and upper-cases the result.
pub fn normalize_account_id(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

/// Structural IBAN check: country code, check digits, 4 to 30 alphanumerics.
///
/// The input is normalized first, so `"de89 3704 ..."` is accepted. Check
/// digits are not verified.
pub fn is_valid_iban(iban: &str) -> bool {
    static IBAN_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = IBAN_REGEX
        .get_or_init(|| Regex::new(r"^[A-Z]{2}[0-9]{2}[A-Z0-9]{4,30}$").expect("valid IBAN regex"));
    regex.is_match(&normalize_account_id(iban))
}

/// Structural BIC check: bank code, country code, location code and an
/// optional branch code (8 or 11 characters).
pub fn is_valid_bic(bic: &str) -> bool {
    static BIC_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = BIC_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Z]{4}[A-Z]{2}[A-Z0-9]{2}([A-Z0-9]{3})?$").expect("valid BIC regex")
    });
    regex.is_match(&normalize_account_id(bic))
}

/// Validated IBAN in electronic format (no spaces, upper case).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Iban(String);

impl Iban {
    pub fn parse(value: &str) -> Result<Self> {
        if is_valid_iban(value) {
            Ok(Self(normalize_account_id(value)))
        } else {
            Err(GiroCodeError::validation("Invalid IBAN format"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// ISO 3166 country code prefix.
    pub fn country_code(&self) -> &str {
        &self.0[..2]
    }
}

/// Validated BIC in electronic format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bic(String);

impl Bic {
    pub fn parse(value: &str) -> Result<Self> {
        if is_valid_bic(value) {
            Ok(Self(normalize_account_id(value)))
        } else {
            Err(GiroCodeError::validation("Invalid BIC format"))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Replaces every line break (`\r\n`, `\r`, `\n`) with a single space.
pub fn single_line(value: &str) -> String {
    value.replace("\r\n", " ").replace(['\r', '\n'], " ")
}

/// Collapses line breaks, then truncates to `max` characters.
pub fn free_text(value: &str, max: usize) -> String {
    truncate(&single_line(value), max).to_string()
}

/// Truncates to at most `max` characters (not bytes).
pub fn truncate(value: &str, max: usize) -> &str {
    match value.char_indices().nth(max) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}
