use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum RowStatus {
    Ok,
    Error,
}

/// One line of batch output. `row` is 1-based, excluding the header.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct EncodeResult {
    pub row: usize,
    pub status: RowStatus,
    pub payload: String,
    pub error: String,
}

impl EncodeResult {
    pub fn ok(row: usize, payload: String) -> Self {
        Self {
            row,
            status: RowStatus::Ok,
            payload,
            error: String::new(),
        }
    }

    pub fn failed(row: usize, error: impl ToString) -> Self {
        Self {
            row,
            status: RowStatus::Error,
            payload: String::new(),
            error: error.to_string(),
        }
    }
}

/// Writes batch results as CSV with the header `row,status,payload,error`.
pub struct ResultWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ResultWriter<W> {
    /// Creates a new `ResultWriter` over any `Write` sink (e.g., Stdout, File).
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Serializes one result. The header is written before the first record.
    pub fn write(&mut self, result: &EncodeResult) -> Result<()> {
        self.writer.serialize(result)?;
        Ok(())
    }

    /// Flushes buffered records to the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_quotes_multiline_payload() {
        let mut buffer = Vec::new();
        {
            let mut writer = ResultWriter::new(&mut buffer);
            writer
                .write(&EncodeResult::ok(1, "BCD\n002".to_string()))
                .unwrap();
            writer
                .write(&EncodeResult::failed(2, "Invalid IBAN format"))
                .unwrap();
            writer.flush().unwrap();
        }
        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(
            output,
            "row,status,payload,error\n1,ok,\"BCD\n002\",\n2,error,,Invalid IBAN format\n"
        );
    }
}
