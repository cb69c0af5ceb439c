//! Shopper locale.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A BCP-47 language tag in canonical casing, e.g. `en-US` or `zh-Hant-TW`.
///
/// Underscore separators are accepted on input (`th_TH`) and normalized to
/// hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(CompactString);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocaleError {
    #[error("empty locale tag")]
    Empty,
    #[error("malformed locale tag: {0}")]
    Malformed(String),
}

impl Locale {
    /// Fallback used when the host provides no usable locale.
    pub const DEFAULT_TAG: &'static str = "en-US";

    pub fn parse(tag: &str) -> Result<Self, LocaleError> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(LocaleError::Empty);
        }

        let mut out = CompactString::default();
        let mut seen_script = false;
        let mut seen_region = false;
        let mut in_extension = false;
        for (i, subtag) in tag.split(['-', '_']).enumerate() {
            if subtag.is_empty()
                || subtag.len() > 8
                || !subtag.bytes().all(|b| b.is_ascii_alphanumeric())
            {
                return Err(LocaleError::Malformed(tag.to_owned()));
            }
            if i == 0 {
                if subtag.len() < 2 || !subtag.bytes().all(|b| b.is_ascii_alphabetic()) {
                    return Err(LocaleError::Malformed(tag.to_owned()));
                }
                out.push_str(&subtag.to_ascii_lowercase());
                continue;
            }
            out.push('-');

            // a singleton starts an extension or private-use sequence
            in_extension |= subtag.len() == 1;
            let alphabetic = subtag.bytes().all(|b| b.is_ascii_alphabetic());
            let is_script = !in_extension && i == 1 && subtag.len() == 4 && alphabetic;
            let is_region = !in_extension
                && !seen_region
                && (i == 1 || (i == 2 && seen_script))
                && ((subtag.len() == 2 && alphabetic)
                    || (subtag.len() == 3 && subtag.bytes().all(|b| b.is_ascii_digit())));

            if is_script {
                seen_script = true;
                let lower = subtag.to_ascii_lowercase();
                let mut chars = lower.chars();
                if let Some(first) = chars.next() {
                    out.push(first.to_ascii_uppercase());
                    out.push_str(chars.as_str());
                }
            } else if is_region {
                seen_region = true;
                out.push_str(&subtag.to_ascii_uppercase());
            } else {
                out.push_str(&subtag.to_ascii_lowercase());
            }
        }
        Ok(Self(out))
    }

    /// Parse a POSIX locale value such as `th_TH.UTF-8` or `ms_MY@euro`.
    ///
    /// Returns `None` for the `C`/`POSIX` locales and for anything that does
    /// not parse as a tag.
    pub fn from_posix(value: &str) -> Option<Self> {
        let value = value.split(['.', '@']).next()?.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("c") || value.eq_ignore_ascii_case("posix")
        {
            return None;
        }
        Self::parse(value).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Primary language subtag, e.g. `th` for `th-TH`.
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or_default()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self(CompactString::const_new(Self::DEFAULT_TAG))
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(value: Locale) -> Self {
        value.0.into()
    }
}
