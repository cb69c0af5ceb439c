//! Common record and builder state for issuer-list payment methods.

use serde::Serialize;

use super::{Configuration, ConfigurationError};
use crate::objects::client_key::ClientKey;
use crate::objects::context::HostContext;
use crate::objects::environment::Environment;
use crate::objects::locale::Locale;
use crate::parcel::{ParcelError, ParcelReader, ParcelWriter, Parcelable};

/// The validated fields shared by every issuer-list payment method.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IssuerListConfiguration {
    shopper_locale: Locale,
    environment: Environment,
    client_key: ClientKey,
}

impl Configuration for IssuerListConfiguration {
    fn shopper_locale(&self) -> &Locale {
        &self.shopper_locale
    }

    fn environment(&self) -> Environment {
        self.environment
    }

    fn client_key(&self) -> &ClientKey {
        &self.client_key
    }
}

impl Parcelable for IssuerListConfiguration {
    fn write_to_parcel(&self, parcel: &mut ParcelWriter) -> Result<(), ParcelError> {
        parcel.write_string(Some(self.shopper_locale.as_str()))?;
        parcel.write_string(Some(self.environment.base_url()))?;
        parcel.write_string(Some(self.client_key.as_str()))
    }

    fn read_from_parcel(parcel: &mut ParcelReader<'_>) -> Result<Self, ParcelError> {
        let shopper_locale = Locale::parse(&parcel.read_required_string("shopper_locale")?)?;
        let base_url = parcel.read_required_string("environment")?;
        let environment = Environment::from_base_url(&base_url)
            .ok_or(ParcelError::UnknownEnvironment(base_url))?;
        let client_key = parcel.read_required_string("client_key")?;

        Ok(IssuerListBuilder::new(shopper_locale, environment, client_key).validate()?)
    }
}

/// Accumulated builder state for an issuer-list configuration.
///
/// `environment` and `client_key` stay optional until
/// [`validate`](Self::validate) so loaders with incomplete input can still
/// create a builder and get a typed error at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuerListBuilder {
    pub(crate) shopper_locale: Locale,
    pub(crate) environment: Option<Environment>,
    pub(crate) client_key: Option<ClientKey>,
}

impl IssuerListBuilder {
    /// Default environment for builders created from a host context.
    pub const DEFAULT_ENVIRONMENT: Environment = Environment::Test;

    pub fn new(
        shopper_locale: Locale,
        environment: Environment,
        client_key: impl Into<ClientKey>,
    ) -> Self {
        Self {
            shopper_locale,
            environment: Some(environment),
            client_key: Some(client_key.into()),
        }
    }

    /// Take the locale from `context` and start in the test environment.
    pub fn from_context(context: &impl HostContext, client_key: impl Into<ClientKey>) -> Self {
        Self::new(context.locale(), Self::DEFAULT_ENVIRONMENT, client_key)
    }

    /// Start from possibly incomplete input. A missing locale is taken from
    /// `context`; a missing environment or client key fails at build time.
    pub fn from_parts(
        shopper_locale: Option<Locale>,
        environment: Option<Environment>,
        client_key: Option<ClientKey>,
        context: &impl HostContext,
    ) -> Self {
        Self {
            shopper_locale: shopper_locale.unwrap_or_else(|| context.locale()),
            environment,
            client_key,
        }
    }

    pub fn shopper_locale(&self) -> &Locale {
        &self.shopper_locale
    }

    pub fn environment(&self) -> Option<Environment> {
        self.environment
    }

    pub fn client_key(&self) -> Option<&ClientKey> {
        self.client_key.as_ref()
    }

    /// Check the required fields and produce the base record.
    pub fn validate(&self) -> Result<IssuerListConfiguration, ConfigurationError> {
        let environment = self.environment.ok_or(ConfigurationError::MissingEnvironment)?;
        let client_key = self
            .client_key
            .as_ref()
            .filter(|key| !key.is_blank())
            .ok_or(ConfigurationError::MissingClientKey)?;

        Ok(IssuerListConfiguration {
            shopper_locale: self.shopper_locale.clone(),
            environment,
            client_key: client_key.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::context::FixedContext;

    fn locale(tag: &str) -> Locale {
        Locale::parse(tag).unwrap()
    }

    #[test]
    fn test_validate_complete() {
        let base = IssuerListBuilder::new(locale("ms-MY"), Environment::Australia, "abc123")
            .validate()
            .unwrap();
        assert_eq!(base.shopper_locale(), &locale("ms-MY"));
        assert_eq!(base.environment(), Environment::Australia);
        assert_eq!(base.client_key().as_str(), "abc123");
    }

    #[test]
    fn test_validate_missing_fields() {
        let context = FixedContext(locale("th-TH"));

        let missing_env =
            IssuerListBuilder::from_parts(None, None, Some("abc123".into()), &context);
        assert_eq!(
            missing_env.validate(),
            Err(ConfigurationError::MissingEnvironment)
        );

        let missing_key = IssuerListBuilder::from_parts(None, Some(Environment::Test), None, &context);
        assert_eq!(
            missing_key.validate(),
            Err(ConfigurationError::MissingClientKey)
        );

        let blank_key = IssuerListBuilder::new(locale("th-TH"), Environment::Test, "   ");
        assert_eq!(
            blank_key.validate(),
            Err(ConfigurationError::MissingClientKey)
        );
    }

    #[test]
    fn test_from_context_defaults() {
        let state = IssuerListBuilder::from_context(&FixedContext(locale("vi-VN")), "abc123");
        assert_eq!(state.shopper_locale(), &locale("vi-VN"));
        assert_eq!(state.environment(), Some(Environment::Test));
    }

    #[test]
    fn test_parcel_field_order() {
        let base = IssuerListBuilder::new(locale("th-TH"), Environment::Test, "key")
            .validate()
            .unwrap();
        let bytes = base.to_bytes().unwrap();

        let mut reader = ParcelReader::new(&bytes);
        assert_eq!(
            reader.read_required_string("shopper_locale").unwrap(),
            "th-TH"
        );
        assert_eq!(
            reader.read_required_string("environment").unwrap(),
            Environment::Test.base_url()
        );
        assert_eq!(reader.read_required_string("client_key").unwrap(), "key");
        reader.finish().unwrap();
    }

    #[test]
    fn test_parcel_rejects_blank_key() {
        let mut parcel = ParcelWriter::new();
        parcel.write_string(Some("th-TH")).unwrap();
        parcel.write_string(Some(Environment::Test.base_url())).unwrap();
        parcel.write_string(Some("")).unwrap();
        let bytes = parcel.finish();

        assert!(matches!(
            IssuerListConfiguration::from_bytes(&bytes),
            Err(ParcelError::Configuration(ConfigurationError::MissingClientKey))
        ));
    }

    #[test]
    fn test_parcel_rejects_unknown_environment() {
        let mut parcel = ParcelWriter::new();
        parcel.write_string(Some("th-TH")).unwrap();
        parcel.write_string(Some("https://example.com/")).unwrap();
        parcel.write_string(Some("abc123")).unwrap();
        let bytes = parcel.finish();

        assert!(matches!(
            IssuerListConfiguration::from_bytes(&bytes),
            Err(ParcelError::UnknownEnvironment(url)) if url == "https://example.com/"
        ));
    }
}
