//! Pure validation functions for user-supplied input.
//!
//! Each parser is total: it either produces a value or an
//! `InputFormat` error. Re-prompt loops live at the boundary, not here.

use super::error::DispatchError;
use super::types::{Amount, FileOperation, FileRequest, PaymentOperation};

/// Parse a transaction amount.
///
/// Accepts exactly the strings that parse as a finite `f64`.
pub fn parse_amount(raw: &str) -> Result<Amount, DispatchError> {
    let trimmed = raw.trim();
    let value: f64 = trimmed.parse().map_err(|_| {
        DispatchError::InputFormat(format!("'{trimmed}' is not a number"))
    })?;
    Amount::new(value)
        .map_err(|_| DispatchError::InputFormat(format!("'{trimmed}' is not a valid amount")))
}

/// Parse a payment-family operation selector.
pub fn parse_payment_operation(raw: &str) -> Result<PaymentOperation, DispatchError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "p" | "payment" | "pay" => Ok(PaymentOperation::Payment),
        "r" | "refund" => Ok(PaymentOperation::Refund),
        other => Err(DispatchError::InputFormat(format!(
            "'{other}' is not a payment operation, expected payment (p) or refund (r)"
        ))),
    }
}

/// Parse a file-family operation selector.
pub fn parse_file_operation(raw: &str) -> Result<FileOperation, DispatchError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "r" | "read" => Ok(FileOperation::Read),
        "w" | "write" => Ok(FileOperation::Write),
        other => Err(DispatchError::InputFormat(format!(
            "'{other}' is not a file operation, expected read (r) or write (w)"
        ))),
    }
}

/// Split a raw filename into stem and extension on the last dot.
///
/// The extension is lowercased since it doubles as a strategy key.
/// Whether the extension is actually supported is a registry question,
/// not a parsing one.
pub fn parse_file_request(raw: &str) -> Result<FileRequest, DispatchError> {
    let trimmed = raw.trim();
    let (stem, extension) = trimmed.rsplit_once('.').ok_or_else(|| {
        DispatchError::InputFormat(format!("'{trimmed}' has no extension"))
    })?;

    if stem.is_empty() {
        return Err(DispatchError::InputFormat(format!(
            "'{trimmed}' has an empty filename"
        )));
    }
    if extension.is_empty() {
        return Err(DispatchError::InputFormat(format!(
            "'{trimmed}' has an empty extension"
        )));
    }

    Ok(FileRequest {
        stem: stem.to_string(),
        extension: extension.to_ascii_lowercase(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_valid() {
        assert_eq!(parse_amount("42.5").unwrap().value(), 42.5);
        assert_eq!(parse_amount("42.50").unwrap().value(), 42.5);
        assert_eq!(parse_amount(" 100 ").unwrap().value(), 100.0);
        assert_eq!(parse_amount("0").unwrap().value(), 0.0);
        assert_eq!(parse_amount("-5.25").unwrap().value(), -5.25);
        assert_eq!(parse_amount("1e3").unwrap().value(), 1000.0);
    }

    #[test]
    fn test_parse_amount_rejects_non_numeric() {
        assert!(parse_amount("").is_err());
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("12.5.3").is_err());
        assert!(parse_amount("42,5").is_err());
        assert!(parse_amount("$42").is_err());
    }

    #[test]
    fn test_parse_amount_rejects_non_finite() {
        // str::parse::<f64> accepts these spellings, the domain does not
        assert!(parse_amount("NaN").is_err());
        assert!(parse_amount("inf").is_err());
        assert!(parse_amount("-infinity").is_err());
    }

    #[test]
    fn test_parse_payment_operation() {
        assert_eq!(
            parse_payment_operation("p").unwrap(),
            PaymentOperation::Payment
        );
        assert_eq!(
            parse_payment_operation("PAYMENT").unwrap(),
            PaymentOperation::Payment
        );
        assert_eq!(
            parse_payment_operation("r").unwrap(),
            PaymentOperation::Refund
        );
        assert_eq!(
            parse_payment_operation(" refund ").unwrap(),
            PaymentOperation::Refund
        );
        assert!(parse_payment_operation("x").is_err());
        assert!(parse_payment_operation("").is_err());
    }

    #[test]
    fn test_parse_file_operation() {
        assert_eq!(parse_file_operation("r").unwrap(), FileOperation::Read);
        assert_eq!(parse_file_operation("Write").unwrap(), FileOperation::Write);
        assert!(parse_file_operation("delete").is_err());
    }

    #[test]
    fn test_parse_file_request_splits_on_last_dot() {
        let request = parse_file_request("data.csv").unwrap();
        assert_eq!(request.stem, "data");
        assert_eq!(request.extension, "csv");

        let request = parse_file_request("archive.tar.gz").unwrap();
        assert_eq!(request.stem, "archive.tar");
        assert_eq!(request.extension, "gz");
    }

    #[test]
    fn test_parse_file_request_lowercases_extension() {
        let request = parse_file_request("Report.XML").unwrap();
        assert_eq!(request.stem, "Report");
        assert_eq!(request.extension, "xml");
    }

    #[test]
    fn test_parse_file_request_rejects_malformed() {
        assert!(parse_file_request("noextension").is_err());
        assert!(parse_file_request(".csv").is_err());
        assert!(parse_file_request("data.").is_err());
        assert!(parse_file_request("").is_err());
    }
}
