mod common;

use common::{IBAN, jane_doe, lines};
use girocode::domain::epc::{can_encode, encode};
use girocode::domain::payment::PaymentPayload;
use girocode::error::GiroCodeError;
use rust_decimal_macros::dec;

#[test]
fn test_fixed_lines() {
    let payloads = [
        jane_doe(),
        PaymentPayload::new("A", IBAN),
        PaymentPayload::new("Björn Øster", "no93 8601 1117 947").with_amount(dec!(0.01)),
    ];

    for payload in payloads {
        let text = encode(&payload).unwrap();
        let lines = lines(&text);
        assert_eq!(lines.len(), 11);
        assert_eq!(&lines[0..4], &["BCD", "002", "1", "SCT"]);
        assert_eq!(lines[8], "");
    }
}

#[test]
fn test_missing_name_is_rejected() {
    let err = encode(&PaymentPayload::new("", IBAN)).unwrap_err();
    assert!(matches!(err, GiroCodeError::Validation(ref msg) if msg == "Name and IBAN are required"));
}

#[test]
fn test_invalid_iban_is_rejected() {
    let err = encode(&PaymentPayload::new("Jane Doe", "INVALID")).unwrap_err();
    assert!(matches!(err, GiroCodeError::Validation(ref msg) if msg == "Invalid IBAN format"));
}

#[test]
fn test_iban_normalized_and_amount_formatted() {
    let payload = PaymentPayload::new("Jane Doe", "DE89 3704 0044 0532 0130 00").with_amount(dec!(12.5));
    let text = encode(&payload).unwrap();
    let lines = lines(&text);
    assert_eq!(lines[6], IBAN);
    assert_eq!(lines[7], "EUR12.50");
}

#[test]
fn test_out_of_range_amount_is_blank() {
    for amount in [dec!(0), dec!(1000000000)] {
        let text = encode(&PaymentPayload::new("Jane Doe", IBAN).with_amount(amount)).unwrap();
        assert_eq!(lines(&text)[7], "");
    }
}

#[test]
fn test_reference_truncated() {
    let text = encode(&jane_doe().with_reference("x".repeat(200))).unwrap();
    assert_eq!(lines(&text)[9], "x".repeat(140));
}

#[test]
fn test_identical_input_identical_output() {
    assert_eq!(encode(&jane_doe()).unwrap(), encode(&jane_doe()).unwrap());
}

#[test]
fn test_can_encode() {
    assert!(can_encode(Some(IBAN), Some("EUR - Euro")));
    assert!(!can_encode(Some(IBAN), Some("USD")));
    assert!(!can_encode(None, Some("EUR")));
}

#[test]
fn test_line_breaks_keep_fixed_line_count() {
    let payload = PaymentPayload::new("Jane\nDoe", IBAN)
        .with_reference("RE-2024\n-001")
        .with_message("line one\r\nline two\rline three\nline four");
    let text = encode(&payload).unwrap();
    let lines = lines(&text);

    assert_eq!(lines.len(), 11);
    assert_eq!(lines[5], "Jane Doe");
    assert_eq!(lines[6], IBAN);
    assert_eq!(lines[9], "RE-2024 -001");
    assert_eq!(lines[10], "line one line two line three line four");
    assert!(!text.contains('\r'));
}
