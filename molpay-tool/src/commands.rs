//! Command implementations.

use crate::config::{ConfigLoader, Overrides};
use molpay_sdk::{Configuration, MolpayConfiguration, Parcelable, SystemContext};
use std::path::Path;

/// Build the configuration described by `config_path` and `overrides` and
/// return its base64 parcel.
pub fn encode(config_path: &Path, overrides: Overrides, strict: bool) -> anyhow::Result<String> {
    let loader = ConfigLoader::new(config_path, overrides);
    let configuration = loader.build(&SystemContext, strict)?;

    tracing::info!(
        shopper_locale = %configuration.shopper_locale(),
        environment = %configuration.environment(),
        client_key = %configuration.client_key().redacted(),
        "configuration built"
    );
    Ok(configuration.to_base64()?)
}

/// Decode a base64 parcel into pretty-printed JSON.
pub fn decode(parcel: &str, redact: bool) -> anyhow::Result<String> {
    let configuration = MolpayConfiguration::from_base64(parcel)?;
    let mut json = serde_json::to_value(&configuration)?;
    if redact {
        json["client_key"] = configuration.client_key().redacted().into();
    }
    Ok(serde_json::to_string_pretty(&json)?)
}
