use super::epc::can_encode;
use super::payment::PaymentPayload;
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub name: String,
    #[serde(default)]
    pub iban: Option<String>,
    #[serde(default)]
    pub bic: Option<String>,
}

/// The subset of an invoice needed to build its payment code.
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRecord {
    pub invoice_number: String,
    /// Issuer, and beneficiary of the payment.
    pub sender: Party,
    pub receiver: Party,
    /// Display label such as `"EUR - Euro"`.
    #[serde(default)]
    pub currency: Option<String>,
    pub total: Decimal,
    #[serde(default)]
    pub payment_note: Option<String>,
}

impl InvoiceRecord {
    pub fn supports_girocode(&self) -> bool {
        can_encode(self.sender.iban.as_deref(), self.currency.as_deref())
    }

    pub fn payment_payload(&self) -> PaymentPayload {
        let message = self
            .payment_note
            .clone()
            .filter(|note| !note.trim().is_empty())
            .unwrap_or_else(|| format!("Invoice {}", self.invoice_number));

        PaymentPayload {
            name: self.sender.name.clone(),
            iban: self.sender.iban.clone().unwrap_or_default(),
            bic: self.sender.bic.clone(),
            amount: Some(self.total),
            reference: Some(self.invoice_number.clone()),
            message: Some(message),
        }
    }
}
