//! MolPay configuration.

use serde::Serialize;

use super::{Configuration, ConfigurationBuilder, IssuerListBuilder, IssuerListConfiguration};
use crate::objects::client_key::ClientKey;
use crate::objects::context::HostContext;
use crate::objects::environment::Environment;
use crate::objects::locale::Locale;
use crate::parcel::{ParcelError, ParcelReader, ParcelWriter, Parcelable};

/// Configuration for the MolPay component.
///
/// Immutable once built. Create one with [`MolpayConfigurationBuilder`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MolpayConfiguration {
    issuer_list: IssuerListConfiguration,
}

impl MolpayConfiguration {
    fn new(issuer_list: IssuerListConfiguration) -> Self {
        Self { issuer_list }
    }

    pub fn issuer_list(&self) -> &IssuerListConfiguration {
        &self.issuer_list
    }
}

impl Configuration for MolpayConfiguration {
    fn shopper_locale(&self) -> &Locale {
        self.issuer_list.shopper_locale()
    }

    fn environment(&self) -> Environment {
        self.issuer_list.environment()
    }

    fn client_key(&self) -> &ClientKey {
        self.issuer_list.client_key()
    }
}

impl Parcelable for MolpayConfiguration {
    fn write_to_parcel(&self, parcel: &mut ParcelWriter) -> Result<(), ParcelError> {
        self.issuer_list.write_to_parcel(parcel)
    }

    fn read_from_parcel(parcel: &mut ParcelReader<'_>) -> Result<Self, ParcelError> {
        IssuerListConfiguration::read_from_parcel(parcel).map(Self::new)
    }
}

/// Builder to create a [`MolpayConfiguration`].
///
/// ```
/// use molpay_sdk::{ConfigurationBuilder, Environment, Locale, MolpayConfigurationBuilder};
///
/// let configuration = MolpayConfigurationBuilder::new(
///     Locale::parse("th-TH")?,
///     Environment::Test,
///     "test_qwertyuiopasdfghjklzxcvbnmqwerty",
/// )
/// .environment(Environment::Apse)
/// .build();
/// assert!(configuration.is_ok());
/// # Ok::<(), molpay_sdk::LocaleError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MolpayConfigurationBuilder {
    state: IssuerListBuilder,
}

impl MolpayConfigurationBuilder {
    /// Builder with all required fields.
    pub fn new(
        shopper_locale: Locale,
        environment: Environment,
        client_key: impl Into<ClientKey>,
    ) -> Self {
        Self {
            state: IssuerListBuilder::new(shopper_locale, environment, client_key),
        }
    }

    /// Builder that takes the shopper locale from `context` and starts in
    /// [`Environment::Test`].
    pub fn from_context(context: &impl HostContext, client_key: impl Into<ClientKey>) -> Self {
        Self {
            state: IssuerListBuilder::from_context(context, client_key),
        }
    }

    /// Builder from possibly incomplete input; see
    /// [`IssuerListBuilder::from_parts`].
    pub fn from_parts(
        shopper_locale: Option<Locale>,
        environment: Option<Environment>,
        client_key: Option<ClientKey>,
        context: &impl HostContext,
    ) -> Self {
        Self {
            state: IssuerListBuilder::from_parts(shopper_locale, environment, client_key, context),
        }
    }
}

impl ConfigurationBuilder for MolpayConfigurationBuilder {
    type Configuration = MolpayConfiguration;

    fn state(&self) -> &IssuerListBuilder {
        &self.state
    }

    fn state_mut(&mut self) -> &mut IssuerListBuilder {
        &mut self.state
    }

    fn build_internal(self, base: IssuerListConfiguration) -> MolpayConfiguration {
        MolpayConfiguration::new(base)
    }
}
