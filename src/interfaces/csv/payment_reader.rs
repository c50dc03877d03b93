use crate::domain::payment::PaymentPayload;
use crate::error::{GiroCodeError, Result};
use std::io::Read;

/// Reads payments from a CSV source with the header
/// `name,iban,bic,amount,reference,message`.
///
/// Whitespace is trimmed and trailing optional columns may be omitted.
pub struct PaymentReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentReader<R> {
    /// Creates a new `PaymentReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes one payment per record. A malformed record yields
    /// an error for that record only.
    pub fn payments(self) -> impl Iterator<Item = Result<PaymentPayload>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(GiroCodeError::from))
    }
}
