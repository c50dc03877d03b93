//! EPC069-12 (version 002) "GiroCode" payload encoding.
//!
//! The payload is a fixed sequence of newline separated fields that banking
//! apps parse positionally:
//!
//! | line | content                               |
//! |------|---------------------------------------|
//! | 1    | service tag `BCD`                     |
//! | 2    | version `002`                         |
//! | 3    | character set `1` (UTF-8)             |
//! | 4    | identification `SCT`                  |
//! | 5    | BIC (may be empty)                    |
//! | 6    | beneficiary name, max 70 chars        |
//! | 7    | IBAN                                  |
//! | 8    | `EUR` + amount (may be empty)         |
//! | 9    | purpose code (always empty)           |
//! | 10   | remittance reference, max 140 chars   |
//! | 11   | remittance text, max 140 chars        |

use super::currency::{EUR, currency_code};
use super::payment::{
    Bic, Iban, MAX_MESSAGE_LEN, MAX_NAME_LEN, MAX_REFERENCE_LEN, PaymentPayload, free_text,
    is_valid_iban,
};
use crate::error::{GiroCodeError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use tracing::{debug, warn};

pub const SERVICE_TAG: &str = "BCD";
pub const VERSION: &str = "002";
pub const CHARACTER_SET: &str = "1";
pub const IDENTIFICATION: &str = "SCT";
pub const LINE_COUNT: usize = 11;

pub const MAX_AMOUNT: Decimal = dec!(999999999.99);

/// Formats the amount field, e.g. `EUR1234.56`.
///
/// Out of range amounts (not positive, above [`MAX_AMOUNT`], or rounding to
/// zero cents) produce an empty field instead of an error. Rounding is
/// half away from zero at two places.
pub fn format_amount(amount: Decimal) -> String {
    if amount <= Decimal::ZERO || amount > MAX_AMOUNT {
        return String::new();
    }
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        return String::new();
    }
    rounded.rescale(2);
    format!("{EUR}{rounded}")
}

/// Encodes a payment into the GiroCode text payload.
///
/// Fails with [`GiroCodeError::Validation`] when name or IBAN are missing or
/// when IBAN/BIC are structurally invalid. Never returns partial output.
pub fn encode(payload: &PaymentPayload) -> Result<String> {
    if payload.name.trim().is_empty() || payload.iban.trim().is_empty() {
        return Err(GiroCodeError::validation("Name and IBAN are required"));
    }

    let iban = Iban::parse(&payload.iban)?;
    let bic = payload
        .bic
        .as_deref()
        .filter(|bic| !bic.trim().is_empty())
        .map(Bic::parse)
        .transpose()?;

    let amount = payload.amount.map(format_amount).unwrap_or_default();
    if let Some(raw) = payload.amount
        && amount.is_empty()
    {
        warn!(%raw, "amount out of range, leaving amount field empty");
    }

    let name = free_text(&payload.name, MAX_NAME_LEN);
    let reference = free_text(payload.reference.as_deref().unwrap_or_default(), MAX_REFERENCE_LEN);
    let message = free_text(payload.message.as_deref().unwrap_or_default(), MAX_MESSAGE_LEN);

    let lines: [&str; LINE_COUNT] = [
        SERVICE_TAG,
        VERSION,
        CHARACTER_SET,
        IDENTIFICATION,
        bic.as_ref().map(Bic::as_str).unwrap_or_default(),
        &name,
        iban.as_str(),
        &amount,
        "",
        &reference,
        &message,
    ];

    debug!(country = iban.country_code(), "encoded GiroCode payload");
    Ok(lines.join("\n"))
}

/// Whether a GiroCode can be produced for the given account and currency.
///
/// Requires an IBAN. A currency label, if given, must resolve to EUR.
pub fn can_encode(iban: Option<&str>, currency_label: Option<&str>) -> bool {
    let Some(iban) = iban else {
        return false;
    };
    if let Some(code) = currency_label.and_then(currency_code)
        && code != EUR
    {
        return false;
    }
    is_valid_iban(iban)
}
