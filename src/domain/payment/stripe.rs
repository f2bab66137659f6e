//! Stripe payment service implementation.

use super::service::{PaymentProcessor, PaymentService, RefundProcessor};
use crate::domain::error::DispatchError;
use crate::domain::types::{ActionLog, Amount};

/// Payment processor for making Stripe payments.
pub struct StripePaymentProcessor;

impl PaymentProcessor for StripePaymentProcessor {
    fn process_payment(&self, amount: Amount, log: &mut ActionLog) {
        log.record(format!("Made a Stripe payment of {amount}"));
    }
}

/// Refund processor for making Stripe refunds.
pub struct StripeRefundProcessor;

impl RefundProcessor for StripeRefundProcessor {
    fn process_refund(&self, amount: Amount, log: &mut ActionLog) {
        log.record(format!("Made a Stripe refund of {amount}"));
    }
}

/// Stripe payment service that creates Stripe processors.
#[derive(Default)]
pub struct StripePaymentService;

impl PaymentService for StripePaymentService {
    fn create_payment_processor(&self) -> Box<dyn PaymentProcessor> {
        Box::new(StripePaymentProcessor)
    }

    fn create_refund_processor(&self) -> Box<dyn RefundProcessor> {
        Box::new(StripeRefundProcessor)
    }

    fn verify_config(&self, log: &mut ActionLog) -> Result<(), DispatchError> {
        log.record("Verified payment configuration.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stripe_payment_output() {
        let mut log = ActionLog::new();
        let amount = Amount::new(42.50).unwrap();
        StripePaymentService.make_payment(amount, &mut log).unwrap();
        assert_eq!(
            log.lines(),
            [
                "Verified payment configuration.",
                "Made a Stripe payment of 42.5"
            ]
        );
    }

    #[test]
    fn test_stripe_refund_output() {
        let mut log = ActionLog::new();
        let amount = Amount::new(7.0).unwrap();
        StripePaymentService.make_refund(amount, &mut log).unwrap();
        assert_eq!(
            log.lines(),
            ["Verified payment configuration.", "Made a Stripe refund of 7"]
        );
    }
}
