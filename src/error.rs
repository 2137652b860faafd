//! The coded API error value.
//!
//! [`ApiError`] carries a numeric code, an optional explicit message, and
//! an optional wrapped cause. The networking/business layer constructs one
//! at the point a failure is detected or translated, optionally from a
//! catalog [`ErrorKind`], and propagates it unchanged to a boundary that
//! classifies it with the predicate helpers or shows
//! [`display_message`](ApiError::display_message) to the user. Retry and
//! backoff decisions belong to the calling layer.

use std::error::Error as StdError;
use std::fmt;

use crate::catalog::{Category, ErrorEntry, ErrorKind};
use crate::messages::{self, MessageKey, MessageResolver};

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// API error with a numeric code, optional message, and optional cause.
///
/// The code is set exactly once, at construction. The display message is
/// re-derived on every read from the message, the cause, and the generic
/// fallback; it is never cached.
#[derive(Debug)]
pub struct ApiError {
    code: i32,
    message: Option<String>,
    source: Option<BoxError>,
}

impl ApiError {
    /// Creates an error from a bare code, with no message and no cause.
    #[must_use]
    pub fn new(code: i32) -> Self {
        Self {
            code,
            message: None,
            source: None,
        }
    }

    /// Creates an error from a code and an explicit message.
    #[must_use]
    pub fn with_message(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: Some(message.into()),
            source: None,
        }
    }

    /// Creates an error from a catalog entry, resolving its message through
    /// the installed resolver.
    ///
    /// # Panics
    ///
    /// Panics if no resolver has been installed; see [`messages::installed`].
    #[must_use]
    pub fn from_kind(kind: ErrorKind) -> Self {
        Self::from_kind_with(kind, messages::installed())
    }

    /// Creates an error from a catalog entry, resolving its message through
    /// `resolver`.
    #[must_use]
    pub fn from_kind_with(kind: ErrorKind, resolver: &dyn MessageResolver) -> Self {
        Self::with_message(kind.code(), resolver.resolve(MessageKey::Kind(kind)).into_owned())
    }

    /// Attaches the underlying error this one wraps.
    ///
    /// The cause is read-only after construction. It feeds
    /// [`display_message`](Self::display_message) when no explicit message
    /// is set and is exposed through [`std::error::Error::source`].
    #[must_use]
    pub fn caused_by(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the numeric error code.
    #[must_use]
    pub const fn code(&self) -> i32 {
        self.code
    }

    /// Returns the explicit message, if one was supplied.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Re-derives the catalog entry for this error's code.
    ///
    /// Lossy for the shared code 9003, which always resolves to
    /// [`ErrorKind::SocketException`]; see [`ErrorKind::lookup`].
    #[must_use]
    pub fn kind(&self) -> Option<ErrorKind> {
        ErrorKind::lookup(self.code)
    }

    /// Classifies this error's code by numeric range.
    #[must_use]
    pub const fn category(&self) -> Category {
        Category::of(self.code)
    }

    /// Snapshot of this error as a catalog-shaped record, for structured
    /// logs. `None` when the code is outside the catalog.
    #[must_use]
    pub fn to_entry(&self) -> Option<ErrorEntry> {
        let kind = self.kind()?;
        Some(ErrorEntry {
            name: kind.name().to_string(),
            code: self.code,
            category: kind.category(),
            message: self
                .message
                .clone()
                .unwrap_or_else(|| kind.default_message().to_string()),
        })
    }

    /// Returns the user-facing message: the explicit message if non-empty,
    /// else the cause's message if non-empty, else the generic failure text
    /// from the installed resolver.
    ///
    /// # Panics
    ///
    /// Panics if the generic fallback is needed and no resolver has been
    /// installed; see [`messages::installed`].
    #[must_use]
    pub fn display_message(&self) -> String {
        match self.explicit_or_cause() {
            Some(message) => message,
            None => {
                tracing::trace!(code = self.code, "error has no message, using generic fallback");
                messages::installed()
                    .resolve(MessageKey::GenericFailure)
                    .into_owned()
            }
        }
    }

    /// Like [`display_message`](Self::display_message), with the generic
    /// fallback taken from `resolver` instead of the installed one.
    #[must_use]
    pub fn display_message_with(&self, resolver: &dyn MessageResolver) -> String {
        match self.explicit_or_cause() {
            Some(message) => message,
            None => resolver.resolve(MessageKey::GenericFailure).into_owned(),
        }
    }

    fn explicit_or_cause(&self) -> Option<String> {
        if let Some(message) = self.message.as_deref() {
            if !message.is_empty() {
                return Some(message.to_string());
            }
        }
        if let Some(source) = &self.source {
            let message = source.to_string();
            if !message.is_empty() {
                return Some(message);
            }
        }
        None
    }

    /// Whether the user's account info has been disabled.
    #[must_use]
    pub fn is_user_info_disabled(&self) -> bool {
        self.code == ErrorKind::UserInfoDisabled.code()
    }

    /// Whether the session has expired and the user must sign in again.
    #[must_use]
    pub fn is_logged_out(&self) -> bool {
        self.code == ErrorKind::LoggedOut.code()
    }

    /// Whether the request was rejected for lack of a valid identity
    /// (invalid token, or user info that failed to parse).
    #[must_use]
    pub fn is_http_permission_error(&self) -> bool {
        self.code == ErrorKind::TokenInvalid.code()
            || self.code == ErrorKind::ParserUserFailed.code()
    }

    /// Whether the failure originated on the server (internal error or
    /// deadline exceeded).
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.code == ErrorKind::ServiceError.code()
            || self.code == ErrorKind::DeadlineExceeded.code()
    }

    /// Whether the network was unavailable. Only
    /// [`ErrorKind::NetworkUnavailable`] (8001) counts;
    /// [`ErrorKind::NetworkError`] (8002) does not.
    #[must_use]
    pub fn is_network_error(&self) -> bool {
        self.code == ErrorKind::NetworkUnavailable.code()
    }

    /// Whether `http_status` indicates an HTTP-level request failure.
    ///
    /// Tests the supplied status only — any non-zero value counts — and
    /// ignores this error's own code.
    #[must_use]
    pub fn is_http_request_error(&self, http_status: i32) -> bool {
        http_status != 0
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_message())
    }
}

impl StdError for ApiError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_deref().map(|source| source as &(dyn StdError + 'static))
    }
}

impl From<ErrorKind> for ApiError {
    /// Delegates to [`ApiError::from_kind`]; requires an installed resolver.
    fn from(kind: ErrorKind) -> Self {
        Self::from_kind(kind)
    }
}
