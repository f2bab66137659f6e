//! Payment service contract.

use crate::domain::error::DispatchError;
use crate::domain::types::{ActionLog, Amount};

/// Executor of one simulated payment for a provider.
pub trait PaymentProcessor {
    /// Process a payment.
    fn process_payment(&self, amount: Amount, log: &mut ActionLog);
}

/// Executor of one simulated refund for a provider.
pub trait RefundProcessor {
    /// Process a refund.
    fn process_refund(&self, amount: Amount, log: &mut ActionLog);
}

/// Provider-specific payment service.
///
/// Implementations supply the processor factories and the precondition
/// check; the payment and refund entry points are template methods that
/// verify, create a fresh processor, and delegate.
pub trait PaymentService {
    /// Create a processor for payments.
    fn create_payment_processor(&self) -> Box<dyn PaymentProcessor>;

    /// Create a processor for refunds.
    fn create_refund_processor(&self) -> Box<dyn RefundProcessor>;

    /// Verify the provider is set up for transactions.
    ///
    /// Runs before any processor is created; a failure aborts the
    /// operation with `DispatchError::Precondition`.
    fn verify_config(&self, log: &mut ActionLog) -> Result<(), DispatchError>;

    /// Make a payment with a freshly created payment processor.
    fn make_payment(&self, amount: Amount, log: &mut ActionLog) -> Result<(), DispatchError> {
        self.verify_config(log)?;
        self.create_payment_processor().process_payment(amount, log);
        Ok(())
    }

    /// Make a refund with a freshly created refund processor.
    fn make_refund(&self, amount: Amount, log: &mut ActionLog) -> Result<(), DispatchError> {
        self.verify_config(log)?;
        self.create_refund_processor().process_refund(amount, log);
        Ok(())
    }
}
