//! Payment strategy family: Stripe and Adyen providers.

mod adyen;
mod service;
mod stripe;

pub use adyen::AdyenPaymentService;
pub use service::{PaymentProcessor, PaymentService, RefundProcessor};
pub use stripe::StripePaymentService;

use crate::config::Config;
use crate::domain::registry::Registry;

/// Build the payment registry from the providers enabled in `config`.
pub fn registry(config: &Config) -> Registry<dyn PaymentService> {
    let mut registry: Registry<dyn PaymentService> = Registry::new();

    if config.providers.stripe {
        registry.register("stripe", || Box::new(StripePaymentService));
    }
    if config.providers.adyen {
        registry.register("adyen", || Box::new(AdyenPaymentService));
    }

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_has_both_providers() {
        let registry = registry(&Config::default());
        let keys: Vec<&str> = registry.keys().collect();
        assert_eq!(keys, ["adyen", "stripe"]);
    }

    #[test]
    fn test_disabled_provider_is_not_registered() {
        let mut config = Config::default();
        config.providers.adyen = false;
        let registry = registry(&config);
        assert!(registry.contains("stripe"));
        assert!(!registry.contains("adyen"));
    }
}
