//! Host context used to derive builder defaults.

use super::locale::Locale;

/// Handle onto the host application, queried for defaults when a builder is
/// created without an explicit locale.
pub trait HostContext {
    /// The locale the host is currently displayed in.
    fn locale(&self) -> Locale;
}

/// Reads the locale from the process environment.
///
/// The POSIX variables are consulted in precedence order `LC_ALL`,
/// `LC_MESSAGES`, `LANG`; the first one that holds a real locale wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemContext;

impl SystemContext {
    const LOCALE_VARS: [&'static str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

    fn locale_from(lookup: impl Fn(&str) -> Option<String>) -> Locale {
        Self::LOCALE_VARS
            .iter()
            .filter_map(|var| lookup(var))
            .find_map(|value| Locale::from_posix(&value))
            .unwrap_or_else(|| {
                tracing::debug!("no usable POSIX locale, falling back to {}", Locale::DEFAULT_TAG);
                Locale::default()
            })
    }
}

impl HostContext for SystemContext {
    fn locale(&self) -> Locale {
        Self::locale_from(|var| std::env::var(var).ok())
    }
}

/// A context with a locale known up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedContext(pub Locale);

impl HostContext for FixedContext {
    fn locale(&self) -> Locale {
        self.0.clone()
    }
}
