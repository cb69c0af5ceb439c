use serde::{Deserialize, Serialize};
use std::str::FromStr;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Backend environments the checkout SDK can talk to.
///
/// `Test` is the only non-live environment; every other variant is a live
/// region with its own checkout-shopper endpoint.
#[serde(rename_all = "snake_case")]
pub enum Environment {
    Test,
    #[serde(alias = "live")]
    Europe,
    UnitedStates,
    Australia,
    India,
    Apse,
}

impl Environment {
    /// The default live region.
    pub const LIVE: Environment = Environment::Europe;

    pub const ALL: [Environment; 6] = [
        Environment::Test,
        Environment::Europe,
        Environment::UnitedStates,
        Environment::Australia,
        Environment::India,
        Environment::Apse,
    ];

    /// Base URL of the checkout-shopper API in this environment.
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Test => "https://checkoutshopper-test.adyen.com/checkoutshopper/",
            Environment::Europe => "https://checkoutshopper-live.adyen.com/checkoutshopper/",
            Environment::UnitedStates => {
                "https://checkoutshopper-live-us.adyen.com/checkoutshopper/"
            }
            Environment::Australia => "https://checkoutshopper-live-au.adyen.com/checkoutshopper/",
            Environment::India => "https://checkoutshopper-live-in.adyen.com/checkoutshopper/",
            Environment::Apse => "https://checkoutshopper-live-apse.adyen.com/checkoutshopper/",
        }
    }

    /// Resolve the environment that owns `base_url`.
    ///
    /// A missing trailing slash is tolerated.
    pub fn from_base_url(base_url: &str) -> Option<Self> {
        let wanted = base_url.trim_end_matches('/');
        Self::ALL
            .into_iter()
            .find(|env| env.base_url().trim_end_matches('/') == wanted)
    }

    /// Join `path` onto the environment's base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, url::ParseError> {
        Url::parse(self.base_url())?.join(path.trim_start_matches('/'))
    }

    pub fn is_live(&self) -> bool {
        !matches!(self, Environment::Test)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Environment::Test => "test",
            Environment::Europe => "europe",
            Environment::UnitedStates => "united_states",
            Environment::Australia => "australia",
            Environment::India => "india",
            Environment::Apse => "apse",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown environment: {0}")]
pub struct UnknownEnvironment(pub String);

impl FromStr for Environment {
    type Err = UnknownEnvironment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "test" => Ok(Environment::Test),
            "live" | "europe" | "eu" => Ok(Environment::Europe),
            "united_states" | "us" => Ok(Environment::UnitedStates),
            "australia" | "au" => Ok(Environment::Australia),
            "india" | "in" => Ok(Environment::India),
            "apse" => Ok(Environment::Apse),
            _ => Err(UnknownEnvironment(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_lookup() {
        for env in Environment::ALL {
            assert_eq!(Environment::from_base_url(env.base_url()), Some(env));
        }
        assert_eq!(
            Environment::from_base_url("https://checkoutshopper-live-us.adyen.com/checkoutshopper"),
            Some(Environment::UnitedStates)
        );
        assert_eq!(Environment::from_base_url("https://example.com/"), None);
    }

    #[test]
    fn test_live_alias() {
        assert_eq!(Environment::LIVE, Environment::Europe);
        assert!(Environment::LIVE.is_live());
        assert!(!Environment::Test.is_live());
        assert_eq!("LIVE".parse::<Environment>().unwrap(), Environment::LIVE);
    }

    #[test]
    fn test_parse_names() {
        for env in Environment::ALL {
            assert_eq!(env.name().parse::<Environment>().unwrap(), env);
        }
        assert_eq!("us".parse::<Environment>().unwrap(), Environment::UnitedStates);
        assert!("mars".parse::<Environment>().is_err());
    }

    #[test]
    fn test_endpoint() {
        let url = Environment::Test
            .endpoint("/v1/clientKeys/test_abc")
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://checkoutshopper-test.adyen.com/checkoutshopper/v1/clientKeys/test_abc"
        );
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Environment::UnitedStates).unwrap();
        assert_eq!(json, "\"united_states\"");
        let env: Environment = serde_json::from_str("\"apse\"").unwrap();
        assert_eq!(env, Environment::Apse);
        let env: Environment = serde_json::from_str("\"live\"").unwrap();
        assert_eq!(env, Environment::LIVE);
    }
}
