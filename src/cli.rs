//! CLI argument parsing and command definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::{FileOperation, PaymentOperation};

/// Strategy registry and dispatcher CLI
#[derive(Parser)]
#[command(
    name = "switchboard",
    version,
    about = "Strategy registry and dispatcher for pluggable payment providers and file handlers",
    long_about = "A CLI that resolves a strategy key (payment provider or file format) to a \
                  service, verifies its preconditions, and runs one simulated operation."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Dispatch one payment operation (alias: payment)
    #[command(alias = "payment")]
    Pay(PayArgs),
    /// Dispatch one file operation
    File(FileArgs),
    /// List the registered strategy keys
    List,
    /// Generate default configuration file
    Init {
        /// Path where to create the configuration file
        #[arg(long, short = 'p')]
        path: Option<PathBuf>,
    },
    /// Validate configuration file
    Check,
    /// Display version information
    Version,
}

/// Arguments for the `pay` subcommand. Omitted values are prompted for.
#[derive(Args)]
pub struct PayArgs {
    /// Payment provider key (e.g. stripe, adyen)
    #[arg(long)]
    pub provider: Option<String>,

    /// Operation to perform
    #[arg(long, value_enum)]
    pub operation: Option<PaymentOperationArg>,

    /// Transaction amount
    #[arg(long)]
    pub amount: Option<f64>,

    /// Print a JSON receipt instead of the action lines
    #[arg(long)]
    pub json: bool,
}

impl PayArgs {
    pub fn operation(&self) -> Option<PaymentOperation> {
        self.operation.map(Into::into)
    }
}

/// Arguments for the `file` subcommand. Omitted values are prompted for.
#[derive(Args)]
pub struct FileArgs {
    /// Operation to perform
    #[arg(long, value_enum)]
    pub operation: Option<FileOperationArg>,

    /// Target filename as name.extension (e.g. data.csv)
    #[arg(long)]
    pub path: Option<String>,

    /// Print a JSON receipt instead of the action lines
    #[arg(long)]
    pub json: bool,
}

impl FileArgs {
    pub fn operation(&self) -> Option<FileOperation> {
        self.operation.map(Into::into)
    }
}

/// Payment operation selector for `--operation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PaymentOperationArg {
    Payment,
    Refund,
}

impl From<PaymentOperationArg> for PaymentOperation {
    fn from(arg: PaymentOperationArg) -> Self {
        match arg {
            PaymentOperationArg::Payment => PaymentOperation::Payment,
            PaymentOperationArg::Refund => PaymentOperation::Refund,
        }
    }
}

/// File operation selector for `--operation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FileOperationArg {
    Read,
    Write,
}

impl From<FileOperationArg> for FileOperation {
    fn from(arg: FileOperationArg) -> Self {
        match arg {
            FileOperationArg::Read => FileOperation::Read,
            FileOperationArg::Write => FileOperation::Write,
        }
    }
}
