//! Core domain types shared by the strategy families.

use serde::Serialize;
use std::fmt;
use tracing::debug;

use super::error::DispatchError;

/// A monetary amount. Only finite values are representable.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount, rejecting NaN and infinities.
    pub fn new(value: f64) -> Result<Self, DispatchError> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(DispatchError::InputFormat(format!(
                "'{value}' is not a valid amount"
            )))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f64 formatting drops trailing zeros, so 42.50 renders as "42.5"
        write!(f, "{}", self.0)
    }
}

/// Operation selector for the payment family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentOperation {
    Payment,
    Refund,
}

impl PaymentOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentOperation::Payment => "payment",
            PaymentOperation::Refund => "refund",
        }
    }
}

/// Operation selector for the file family.
///
/// `Write` is accepted by the CLI but is a declared stub; no file service
/// exposes a write operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileOperation {
    Read,
    Write,
}

impl FileOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileOperation::Read => "read",
            FileOperation::Write => "write",
        }
    }
}

/// A filename split into stem and extension on the last dot.
///
/// The extension doubles as the strategy key for the file family and is
/// stored lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRequest {
    pub stem: String,
    pub extension: String,
}

impl fmt::Display for FileRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.stem, self.extension)
    }
}

/// Ordered record of the human-visible lines produced by one dispatch.
///
/// Verify steps, factories, and processors append to the log; the flow
/// layer decides how to render it. Nothing here touches stdout directly.
#[derive(Debug, Default)]
pub struct ActionLog {
    lines: Vec<String>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one simulated-action line.
    pub fn record(&mut self, line: impl Into<String>) {
        let line = line.into();
        debug!(action = %line, "recorded simulated action");
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

/// Serializable summary of one dispatch, used for `--json` output.
#[derive(Debug, Serialize)]
pub struct Receipt {
    /// Strategy key the dispatch resolved
    pub key: String,

    /// Operation that was performed
    pub operation: String,

    /// Transaction amount (payment family only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,

    /// Target filename (file family only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Simulated actions, in execution order
    pub actions: Vec<String>,
}
