//! Adyen payment service implementation.

use super::service::{PaymentProcessor, PaymentService, RefundProcessor};
use crate::domain::error::DispatchError;
use crate::domain::types::{ActionLog, Amount};

/// Payment processor for making Adyen payments.
pub struct AdyenPaymentProcessor;

impl PaymentProcessor for AdyenPaymentProcessor {
    fn process_payment(&self, amount: Amount, log: &mut ActionLog) {
        log.record(format!("Made an Adyen payment of {amount}"));
    }
}

/// Refund processor for making Adyen refunds.
pub struct AdyenRefundProcessor;

impl RefundProcessor for AdyenRefundProcessor {
    fn process_refund(&self, amount: Amount, log: &mut ActionLog) {
        log.record(format!("Made an Adyen refund of {amount}"));
    }
}

/// Adyen payment service that creates Adyen processors.
#[derive(Default)]
pub struct AdyenPaymentService;

impl PaymentService for AdyenPaymentService {
    fn create_payment_processor(&self) -> Box<dyn PaymentProcessor> {
        Box::new(AdyenPaymentProcessor)
    }

    fn create_refund_processor(&self) -> Box<dyn RefundProcessor> {
        Box::new(AdyenRefundProcessor)
    }

    fn verify_config(&self, log: &mut ActionLog) -> Result<(), DispatchError> {
        log.record("Verified payment configuration.");
        Ok(())
    }
}
