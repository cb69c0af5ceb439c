//! Payment method configuration types.
//!
//! Every payment method configuration shares the same three fields, held in
//! [`IssuerListConfiguration`] and exposed through the [`Configuration`]
//! trait. Concrete configurations embed that record and are created by a
//! builder implementing [`ConfigurationBuilder`], which owns the common
//! validation and hands the checked record to the concrete type.

mod issuer_list;
mod molpay;
mod registry;

pub use issuer_list::{IssuerListBuilder, IssuerListConfiguration};
pub use molpay::{MolpayConfiguration, MolpayConfigurationBuilder};
pub use registry::PaymentMethodConfigurations;

use crate::objects::client_key::{ClientKey, ClientKeyError};
use crate::objects::environment::Environment;
use crate::objects::locale::Locale;

/// Errors raised when building a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("environment is required")]
    MissingEnvironment,
    #[error("client key is required")]
    MissingClientKey,
    #[error("invalid client key: {0}")]
    InvalidClientKey(#[from] ClientKeyError),
}

/// Read access to the fields every payment method configuration carries.
pub trait Configuration {
    fn shopper_locale(&self) -> &Locale;
    fn environment(&self) -> Environment;
    fn client_key(&self) -> &ClientKey;
}

/// Builder shared by all payment method configurations.
///
/// Implementors expose their [`IssuerListBuilder`] state and construct the
/// concrete configuration in [`build_internal`](Self::build_internal). The
/// setters take and return `Self`, so chains keep the concrete builder type.
pub trait ConfigurationBuilder: Sized {
    type Configuration: Configuration;

    fn state(&self) -> &IssuerListBuilder;

    fn state_mut(&mut self) -> &mut IssuerListBuilder;

    /// Construct the concrete configuration from an already validated
    /// base record.
    fn build_internal(self, base: IssuerListConfiguration) -> Self::Configuration;

    fn shopper_locale(mut self, shopper_locale: Locale) -> Self {
        self.state_mut().shopper_locale = shopper_locale;
        self
    }

    fn environment(mut self, environment: Environment) -> Self {
        self.state_mut().environment = Some(environment);
        self
    }

    /// Validate the accumulated state and build the configuration.
    ///
    /// Only missing fields are rejected. A client key that does not look
    /// like one for the selected environment is logged and accepted; use
    /// [`build_checked`](Self::build_checked) to reject it instead.
    fn build(self) -> Result<Self::Configuration, ConfigurationError> {
        let base = self.state().validate()?;
        if let Err(e) = base.client_key().check(base.environment()) {
            tracing::warn!(
                client_key = %base.client_key().redacted(),
                environment = %base.environment(),
                "{e}"
            );
        }
        Ok(self.build_internal(base))
    }

    /// Like [`build`](Self::build), but also requires the client key to
    /// match the selected environment.
    fn build_checked(self) -> Result<Self::Configuration, ConfigurationError> {
        let base = self.state().validate()?;
        base.client_key().check(base.environment())?;
        Ok(self.build_internal(base))
    }
}
