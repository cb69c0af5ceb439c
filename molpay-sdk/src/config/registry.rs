use std::collections::HashMap;

use super::MolpayConfiguration;
use crate::objects::payment_method::MolpayVariant;

/// MolPay configurations registered per regional variant.
///
/// Lookups go through the payment method type string the backend reports,
/// so a host can resolve the configuration for whatever entry the shopper
/// picked from a payment method list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentMethodConfigurations {
    configurations: HashMap<MolpayVariant, MolpayConfiguration>,
}

impl PaymentMethodConfigurations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `configuration` for `variant`, replacing any earlier one.
    pub fn add(mut self, variant: MolpayVariant, configuration: MolpayConfiguration) -> Self {
        self.insert(variant, configuration);
        self
    }

    /// Register the same configuration for every variant.
    pub fn add_all(mut self, configuration: MolpayConfiguration) -> Self {
        for variant in MolpayVariant::ALL {
            self.insert(variant, configuration.clone());
        }
        self
    }

    pub fn insert(
        &mut self,
        variant: MolpayVariant,
        configuration: MolpayConfiguration,
    ) -> Option<MolpayConfiguration> {
        let previous = self.configurations.insert(variant, configuration);
        if previous.is_some() {
            tracing::debug!(%variant, "replaced MolPay configuration");
        }
        previous
    }

    pub fn get(&self, variant: MolpayVariant) -> Option<&MolpayConfiguration> {
        self.configurations.get(&variant)
    }

    /// Look up by payment method type, e.g. `molpay_ebanking_TH`.
    pub fn get_for_payment_method(&self, payment_method_type: &str) -> Option<&MolpayConfiguration> {
        MolpayVariant::from_payment_method_type(payment_method_type).and_then(|v| self.get(v))
    }

    pub fn iter(&self) -> impl Iterator<Item = (MolpayVariant, &MolpayConfiguration)> {
        self.configurations.iter().map(|(variant, config)| (*variant, config))
    }

    pub fn len(&self) -> usize {
        self.configurations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configurations.is_empty()
    }
}
