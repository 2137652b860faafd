//! Message resolution for catalog entries.
//!
//! Display text is looked up through a [`MessageResolver`], a one-method
//! interface an application can implement to localize messages. The crate
//! ships [`EnglishMessages`], which serves the catalog's built-in English
//! table.
//!
//! A resolver can be installed once per process with [`install`] (or
//! [`install_default`]) and is then used by every operation that does not
//! take an explicit resolver, such as [`ApiError::from_kind`] and
//! [`ApiError::display_message`]. Reading the process-wide resolver before
//! installation panics with a "not installed" message; it never returns a
//! stale or absent value.
//!
//! [`ApiError::from_kind`]: crate::error::ApiError::from_kind
//! [`ApiError::display_message`]: crate::error::ApiError::display_message

use std::borrow::Cow;
use std::sync::OnceLock;

use thiserror::Error;

use crate::catalog::ErrorKind;

/// Key for one resolvable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    /// Message of a catalog entry.
    Kind(ErrorKind),
    /// Generic failure text used when an error carries no message at all.
    GenericFailure,
}

/// Maps a message key to display text in the current locale.
pub trait MessageResolver: Send + Sync {
    /// Resolves `key` to display text. Must return non-empty text for
    /// every key.
    fn resolve(&self, key: MessageKey) -> Cow<'static, str>;
}

/// Built-in resolver serving the catalog's English messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishMessages;

const GENERIC_FAILURE: &str = "Unknown error";

impl MessageResolver for EnglishMessages {
    fn resolve(&self, key: MessageKey) -> Cow<'static, str> {
        match key {
            MessageKey::Kind(kind) => Cow::Borrowed(kind.default_message()),
            MessageKey::GenericFailure => Cow::Borrowed(GENERIC_FAILURE),
        }
    }
}

/// A resolver was already installed for this process.
#[derive(Debug, Error)]
#[error("a message resolver is already installed")]
pub struct InstallError;

static RESOLVER: OnceLock<Box<dyn MessageResolver>> = OnceLock::new();

/// Installs the process-wide resolver. Call once during application
/// startup, before any operation that resolves messages implicitly.
///
/// # Errors
///
/// Returns [`InstallError`] if a resolver was already installed.
pub fn install(resolver: impl MessageResolver + 'static) -> Result<(), InstallError> {
    RESOLVER.set(Box::new(resolver)).map_err(|_| InstallError)?;
    tracing::debug!("message resolver installed");
    Ok(())
}

/// Installs [`EnglishMessages`] as the process-wide resolver.
///
/// # Errors
///
/// Returns [`InstallError`] if a resolver was already installed.
pub fn install_default() -> Result<(), InstallError> {
    install(EnglishMessages)
}

/// Whether a process-wide resolver has been installed.
#[must_use]
pub fn is_installed() -> bool {
    RESOLVER.get().is_some()
}

/// Returns the installed process-wide resolver.
///
/// # Panics
///
/// Panics with a "message resolver not installed" message if [`install`]
/// has not run yet.
#[must_use]
pub fn installed() -> &'static dyn MessageResolver {
    match RESOLVER.get() {
        Some(resolver) => resolver.as_ref(),
        None => panic!(
            "message resolver not installed; call apierr::messages::install \
             (or install_default) during application startup"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_messages_cover_every_key() {
        let resolver = EnglishMessages;
        for kind in ErrorKind::all() {
            assert!(!resolver.resolve(MessageKey::Kind(*kind)).is_empty());
        }
        assert_eq!(resolver.resolve(MessageKey::GenericFailure), "Unknown error");
    }

    // The only test in this binary that touches the process-wide slot, so
    // the install-twice sequence stays deterministic.
    #[test]
    fn test_install_is_one_time() {
        assert!(install_default().is_ok());
        assert!(is_installed());
        assert!(install(EnglishMessages).is_err());
        assert_eq!(
            installed().resolve(MessageKey::Kind(ErrorKind::TooBusy)),
            ErrorKind::TooBusy.default_message()
        );
    }
}
