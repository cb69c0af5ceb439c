//! TOML file configuration structures.
//!
//! These structs directly map to the `molpay-config.toml` file format.

use molpay_sdk::{Environment, Locale};
use serde::{Deserialize, Serialize};

/// Root configuration structure as read from the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub molpay: MolpayConfig,
}

/// MolPay configuration section.
///
/// Every field is optional here; required fields are enforced when the
/// configuration is built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MolpayConfig {
    /// Shopper locale (e.g., "th-TH"). Falls back to the system locale.
    pub shopper_locale: Option<Locale>,
    /// Backend environment (e.g., "test", "europe", "apse").
    pub environment: Option<Environment>,
    /// Client key for SDK calls to the backend.
    pub client_key: Option<String>,
}
