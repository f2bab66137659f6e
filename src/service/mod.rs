//! Service layer containing dispatch orchestration.

mod file_flow;
mod payment_flow;
mod prompter;

pub use file_flow::FileFlow;
pub use payment_flow::PaymentFlow;
pub use prompter::Prompter;

use std::io::Write;

use anyhow::Result;

use crate::domain::Receipt;

/// Render a dispatch outcome: plain action lines, or a JSON receipt.
pub(crate) fn render_receipt<W: Write>(output: &mut W, json: bool, receipt: &Receipt) -> Result<()> {
    if json {
        writeln!(output, "{}", serde_json::to_string(receipt)?)?;
    } else {
        for line in &receipt.actions {
            writeln!(output, "{line}")?;
        }
    }
    Ok(())
}
