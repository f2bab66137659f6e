//! Payment dispatch flow.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::debug;

use crate::cli::PayArgs;
use crate::config::Config;
use crate::domain::payment::{self, PaymentService};
use crate::domain::{ActionLog, Amount, DispatchError, PaymentOperation, Receipt, Registry};
use crate::service::prompter::Prompter;
use crate::service::render_receipt;

/// Service for one payment-family dispatch.
///
/// Inputs come from CLI flags when present, otherwise from interactive
/// prompts. Flag-supplied values are not re-prompted: a bad flag is a
/// programmatic error and fails the run.
pub struct PaymentFlow {
    registry: Registry<dyn PaymentService>,
}

impl PaymentFlow {
    /// Create a new PaymentFlow with the providers enabled in `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            registry: payment::registry(config),
        }
    }

    /// Run one dispatch against stdin/stdout.
    pub fn run(&self, args: &PayArgs) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock(), args)
    }

    /// Run one dispatch against the given streams.
    pub fn run_with<R: BufRead, W: Write>(
        &self,
        mut input: R,
        mut output: W,
        args: &PayArgs,
    ) -> Result<()> {
        let key = self.select_provider(&mut input, &mut output, args.provider.as_deref())?;
        let operation = self.select_operation(&mut input, &mut output, args.operation())?;
        let amount = self.select_amount(&mut input, &mut output, args.amount)?;

        debug!(provider = %key, operation = operation.as_str(), amount = %amount, "dispatching");

        let service = self.registry.resolve(&key)?;
        let mut log = ActionLog::new();
        match operation {
            PaymentOperation::Payment => service.make_payment(amount, &mut log)?,
            PaymentOperation::Refund => service.make_refund(amount, &mut log)?,
        }

        let receipt = Receipt {
            key,
            operation: operation.as_str().to_string(),
            amount: Some(amount),
            file: None,
            actions: log.into_lines(),
        };
        render_receipt(&mut output, args.json, &receipt)
    }

    fn select_provider<R: BufRead, W: Write>(
        &self,
        input: R,
        output: W,
        flag: Option<&str>,
    ) -> Result<String, DispatchError> {
        if let Some(key) = flag {
            // Resolution reports the unknown-key error for bad flags
            return Ok(key.trim().to_ascii_lowercase());
        }

        let keys: Vec<&str> = self.registry.keys().collect();
        let question = format!("Payment provider [{}]:", keys.join("/"));
        Prompter::new(input, output).ask(&question, |raw| {
            let key = raw.trim().to_ascii_lowercase();
            if self.registry.contains(&key) {
                Ok(key)
            } else {
                Err(DispatchError::UnknownKey(key))
            }
        })
    }

    fn select_operation<R: BufRead, W: Write>(
        &self,
        input: R,
        output: W,
        flag: Option<PaymentOperation>,
    ) -> Result<PaymentOperation, DispatchError> {
        if let Some(operation) = flag {
            return Ok(operation);
        }

        Prompter::new(input, output).ask(
            "Make a payment (p) or a refund (r)?",
            crate::domain::input::parse_payment_operation,
        )
    }

    fn select_amount<R: BufRead, W: Write>(
        &self,
        input: R,
        output: W,
        flag: Option<f64>,
    ) -> Result<Amount, DispatchError> {
        if let Some(value) = flag {
            return Amount::new(value);
        }

        Prompter::new(input, output).ask(
            "Enter transaction amount:",
            crate::domain::input::parse_amount,
        )
    }
}
