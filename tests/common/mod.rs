use girocode::domain::payment::PaymentPayload;
use rust_decimal_macros::dec;
use std::io::Write;
use tempfile::NamedTempFile;

pub const IBAN: &str = "DE89370400440532013000";

pub fn jane_doe() -> PaymentPayload {
    PaymentPayload::new("Jane Doe", "DE89 3704 0044 0532 0130 00")
        .with_bic("COBADEFFXXX")
        .with_amount(dec!(12.5))
        .with_reference("RE-2024-001")
        .with_message("Thanks")
}

pub fn lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

pub fn temp_file(contents: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    write!(file, "{contents}").unwrap();
    file.flush().unwrap();
    file
}
