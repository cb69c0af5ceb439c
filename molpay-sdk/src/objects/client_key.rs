//! Merchant client key.

use compact_str::CompactString;
use serde::Serialize;

use super::environment::Environment;

const TEST_PREFIX: &str = "test";
const LIVE_PREFIX: &str = "live";
const KEY_BODY_LEN: usize = 32;

/// Client key used by the SDK for its own calls to the backend.
///
/// The key is opaque to the configuration: any non-blank value is accepted
/// when building. [`ClientKey::check`] tests the documented
/// `{test|live}_{32 alphanumerics}` shape against an environment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ClientKey(CompactString);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ClientKeyError {
    #[error("client key is not in the `test_`/`live_` format")]
    Format,
    #[error("client key does not match the {environment} environment")]
    EnvironmentMismatch { environment: Environment },
}

impl ClientKey {
    pub fn new(value: impl Into<CompactString>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn is_live(&self) -> bool {
        self.prefix() == Some(LIVE_PREFIX)
    }

    fn prefix(&self) -> Option<&str> {
        self.0.split_once('_').map(|(prefix, _)| prefix)
    }

    /// Check the key format and that its prefix agrees with `environment`.
    pub fn check(&self, environment: Environment) -> Result<(), ClientKeyError> {
        let (prefix, body) = self.0.split_once('_').ok_or(ClientKeyError::Format)?;
        let is_live_key = match prefix {
            TEST_PREFIX => false,
            LIVE_PREFIX => true,
            _ => return Err(ClientKeyError::Format),
        };
        if body.len() != KEY_BODY_LEN || !body.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(ClientKeyError::Format);
        }
        if is_live_key != environment.is_live() {
            return Err(ClientKeyError::EnvironmentMismatch { environment });
        }
        Ok(())
    }

    /// The key with everything after the prefix masked, safe for logs.
    pub fn redacted(&self) -> String {
        match self.prefix() {
            Some(prefix @ (TEST_PREFIX | LIVE_PREFIX)) => format!("{prefix}_***"),
            _ => "***".to_owned(),
        }
    }
}

impl From<&str> for ClientKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ClientKey {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for ClientKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
