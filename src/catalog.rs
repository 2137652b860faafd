//! Closed catalog of known API error codes.
//!
//! Each entry pairs a numeric code with a default message. The numeric
//! prefix of a code tells authors which bucket a new entry belongs in;
//! it carries no runtime behavior beyond [`Category`] classification.
//!
//! # Code Ranges
//!
//! | Range        | Category   | Description                                |
//! |--------------|------------|--------------------------------------------|
//! | 1001 (exact) | Unknown    | Unanticipated errors                       |
//! | 6000-6999    | Programmer | Avoidable errors, for developer attention  |
//! | 7000-7999    | Abuse      | Rate-limit and abuse-friendly warnings     |
//! | 8000-8999    | Client     | Client-defined errors                      |
//! | 9000-9999    | Server     | Backend defects or unavailability          |
//! | 40000-59999  | Auth       | Token, session, and account errors         |
//! | -99          | Argument   | Required argument missing                  |
//!
//! # Example
//!
//! ```rust
//! use apierr::catalog::ErrorKind;
//!
//! let kind = ErrorKind::TokenInvalid;
//! println!("{}: {}", kind.code(), kind.default_message());
//!
//! assert_eq!(ErrorKind::lookup(40003), Some(ErrorKind::TokenInvalid));
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::messages::{self, MessageKey, MessageResolver};

/// Known API error codes.
///
/// The catalog is closed: membership is fixed at compile time and there is
/// no dynamic registration. Codes are unique with one exception:
/// [`SocketException`](Self::SocketException) and
/// [`ResultError`](Self::ResultError) both carry 9003, so code-based
/// [`lookup`](Self::lookup) is lossy for that pair (first declared wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // Unknown (1001)
    // =========================================================================
    /// Unanticipated error with no better classification
    UnknownError,

    // =========================================================================
    // Abuse (7000-7999)
    // =========================================================================
    /// Too many failed attempts in a short window
    FailTooMuch,
    /// Service is saturated and asked the user to back off
    TooBusy,

    // =========================================================================
    // Client (8000-8999)
    // =========================================================================
    /// No account is bound on this device
    NoAccount,
    /// Network connectivity is unavailable
    NetworkUnavailable,
    /// Request failed at the network layer
    NetworkError,

    // =========================================================================
    // Server (9000-9999)
    // =========================================================================
    /// Backend reported an internal error
    ServiceError,
    /// Backend did not answer within its deadline
    DeadlineExceeded,
    /// Connection dropped mid-request
    SocketException,
    /// Backend answered with a malformed result
    ResultError,

    // =========================================================================
    // Auth (40000-59999)
    // =========================================================================
    /// Login token is no longer valid
    TokenInvalid,
    /// User info payload could not be parsed
    ParserUserFailed,
    /// Session expired, user must sign in again
    LoggedOut,
    /// Account has been disabled
    UserInfoDisabled,

    // =========================================================================
    // Argument (-99)
    // =========================================================================
    /// Required request argument missing
    ArgumentError,
}

impl ErrorKind {
    /// Returns the numeric error code.
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::UnknownError => 1001,
            Self::FailTooMuch => 7001,
            Self::TooBusy => 7002,
            Self::NoAccount => 8000,
            Self::NetworkUnavailable => 8001,
            Self::NetworkError => 8002,
            Self::ServiceError => 9001,
            Self::DeadlineExceeded => 9002,
            Self::SocketException => 9003,
            Self::ResultError => 9003,
            Self::TokenInvalid => 40003,
            Self::ParserUserFailed => 40005,
            Self::LoggedOut => 40015,
            Self::UserInfoDisabled => 50000,
            Self::ArgumentError => -99,
        }
    }

    /// Returns the stable identifier used in serialized form and logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::UnknownError => "UNKNOWN_ERROR",
            Self::FailTooMuch => "FAIL_TOO_MUCH",
            Self::TooBusy => "TOO_BUSY",
            Self::NoAccount => "NO_ACCOUNT",
            Self::NetworkUnavailable => "NETWORK_UNAVAILABLE",
            Self::NetworkError => "NETWORK_ERROR",
            Self::ServiceError => "SERVICE_ERROR",
            Self::DeadlineExceeded => "DEADLINE_EXCEEDED",
            Self::SocketException => "SOCKET_EXCEPTION",
            Self::ResultError => "RESULT_ERROR",
            Self::TokenInvalid => "TOKEN_INVALID",
            Self::ParserUserFailed => "PARSER_USER_FAILED",
            Self::LoggedOut => "LOGGED_OUT",
            Self::UserInfoDisabled => "USER_INFO_DISABLED",
            Self::ArgumentError => "ARGUMENT_ERROR",
        }
    }

    /// Returns the built-in English message for this entry.
    #[must_use]
    pub const fn default_message(&self) -> &'static str {
        match self {
            Self::UnknownError => "An unknown error occurred",
            Self::FailTooMuch => "Too many failed attempts, try again later",
            Self::TooBusy => "The service is busy, try again later",
            Self::NoAccount => "No account is bound",
            Self::NetworkUnavailable => "Network is unavailable",
            Self::NetworkError => "Network error",
            Self::ServiceError => "The server encountered an error",
            Self::DeadlineExceeded => "The server took too long to respond",
            Self::SocketException => "The connection was interrupted",
            Self::ResultError => "The server returned a malformed result",
            Self::TokenInvalid => "Login token is invalid",
            Self::ParserUserFailed => "Failed to parse user info",
            Self::LoggedOut => "Login has expired, sign in again",
            Self::UserInfoDisabled => "This account has been disabled",
            Self::ArgumentError => "A required argument is missing",
        }
    }

    /// Returns the category this entry's code falls in.
    #[must_use]
    pub const fn category(&self) -> Category {
        Category::of(self.code())
    }

    /// Resolves the message for this entry through `resolver`.
    #[must_use]
    pub fn message_with(&self, resolver: &dyn MessageResolver) -> String {
        resolver.resolve(MessageKey::Kind(*self)).into_owned()
    }

    /// Resolves the message through the installed process-wide resolver.
    ///
    /// # Panics
    ///
    /// Panics if no resolver has been installed; see [`messages::installed`].
    #[must_use]
    pub fn message(&self) -> String {
        self.message_with(messages::installed())
    }

    /// Materializes this entry with messages from `resolver`.
    #[must_use]
    pub fn entry_with(&self, resolver: &dyn MessageResolver) -> ErrorEntry {
        ErrorEntry {
            name: self.name().to_string(),
            code: self.code(),
            category: self.category(),
            message: self.message_with(resolver),
        }
    }

    /// Materializes this entry through the installed resolver.
    ///
    /// # Panics
    ///
    /// Panics if no resolver has been installed; see [`messages::installed`].
    #[must_use]
    pub fn entry(&self) -> ErrorEntry {
        self.entry_with(messages::installed())
    }

    /// Resolves a raw code back to a catalog entry.
    ///
    /// Scans [`all`](Self::all) in declaration order, so the 9003 pair
    /// always resolves to [`SocketException`](Self::SocketException).
    /// Returns `None` for codes outside the catalog.
    #[must_use]
    pub fn lookup(code: i32) -> Option<ErrorKind> {
        Self::all().iter().copied().find(|kind| kind.code() == code)
    }

    /// Returns every catalog entry in declaration order.
    #[must_use]
    pub const fn all() -> &'static [ErrorKind] {
        &[
            // Unknown
            Self::UnknownError,
            // Abuse
            Self::FailTooMuch,
            Self::TooBusy,
            // Client
            Self::NoAccount,
            Self::NetworkUnavailable,
            Self::NetworkError,
            // Server
            Self::ServiceError,
            Self::DeadlineExceeded,
            Self::SocketException,
            Self::ResultError,
            // Auth
            Self::TokenInvalid,
            Self::ParserUserFailed,
            Self::LoggedOut,
            Self::UserInfoDisabled,
            // Argument
            Self::ArgumentError,
        ]
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}): {}", self.name(), self.code(), self.default_message())
    }
}

/// Error category derived from a code's numeric range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Unanticipated errors (1001, and any code outside known ranges)
    Unknown,
    /// Programmer-caused errors (6000-6999)
    Programmer,
    /// Rate-limit and abuse warnings (7000-7999)
    Abuse,
    /// Client-defined errors (8000-8999)
    Client,
    /// Server-side errors (9000-9999)
    Server,
    /// Auth and session errors (40000-59999)
    Auth,
    /// Missing required argument (-99)
    Argument,
}

impl Category {
    /// Classifies a raw code by numeric range.
    ///
    /// Codes outside every known range classify as [`Unknown`](Self::Unknown).
    #[must_use]
    pub const fn of(code: i32) -> Category {
        match code {
            -99 => Self::Argument,
            6000..=6999 => Self::Programmer,
            7000..=7999 => Self::Abuse,
            8000..=8999 => Self::Client,
            9000..=9999 => Self::Server,
            40000..=59999 => Self::Auth,
            _ => Self::Unknown,
        }
    }

    /// Returns the serialized identifier for the category.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Programmer => "programmer",
            Self::Abuse => "abuse",
            Self::Client => "client",
            Self::Server => "server",
            Self::Auth => "auth",
            Self::Argument => "argument",
        }
    }

    /// Returns a human-readable name for the category.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Programmer => "Programmer",
            Self::Abuse => "Abuse",
            Self::Client => "Client",
            Self::Server => "Server",
            Self::Auth => "Auth",
            Self::Argument => "Argument",
        }
    }

    /// Returns a short description of the category.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Unknown => "Unanticipated errors with no better classification",
            Self::Programmer => "Avoidable errors that need developer attention",
            Self::Abuse => "Rate-limit and abuse warnings triggered by the user",
            Self::Client => "Errors defined and raised on the client",
            Self::Server => "Backend defects or unavailability",
            Self::Auth => "Token, session, and account errors",
            Self::Argument => "Malformed request with a required argument missing",
        }
    }

    /// Returns the code range covered by the category.
    #[must_use]
    pub const fn code_range(&self) -> &'static str {
        match self {
            Self::Unknown => "1001",
            Self::Programmer => "6000-6999",
            Self::Abuse => "7000-7999",
            Self::Client => "8000-8999",
            Self::Server => "9000-9999",
            Self::Auth => "40000-59999",
            Self::Argument => "-99",
        }
    }

    /// Returns every category.
    #[must_use]
    pub const fn all() -> &'static [Category] {
        &[
            Self::Unknown,
            Self::Programmer,
            Self::Abuse,
            Self::Client,
            Self::Server,
            Self::Auth,
            Self::Argument,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Materialized catalog entry, for logging and export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorEntry {
    /// Stable entry identifier (e.g., "TOKEN_INVALID")
    pub name: String,
    /// Numeric error code
    pub code: i32,
    /// Category derived from the code range
    pub category: Category,
    /// Resolved human-readable message
    pub message: String,
}

impl fmt::Display for ErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.name, self.message)
    }
}

/// Machine-readable export of the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Catalog {
    /// Categories with their code ranges.
    pub categories: Vec<CategoryEntry>,
    /// Every catalog entry in declaration order.
    pub errors: Vec<ErrorEntry>,
}

/// One category row in an exported [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryEntry {
    /// Category identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Category description.
    pub description: String,
    /// Code range (e.g., "8000-8999").
    pub code_range: String,
}

impl Catalog {
    /// Exports the catalog with messages from `resolver`.
    #[must_use]
    pub fn export_with(resolver: &dyn MessageResolver) -> Catalog {
        let categories = Category::all()
            .iter()
            .map(|category| CategoryEntry {
                id: category.id().to_string(),
                name: category.name().to_string(),
                description: category.description().to_string(),
                code_range: category.code_range().to_string(),
            })
            .collect();

        let errors = ErrorKind::all()
            .iter()
            .map(|kind| kind.entry_with(resolver))
            .collect();

        Catalog { categories, errors }
    }

    /// Exports the catalog through the installed resolver.
    ///
    /// # Panics
    ///
    /// Panics if no resolver has been installed; see [`messages::installed`].
    #[must_use]
    pub fn export() -> Catalog {
        Self::export_with(messages::installed())
    }
}
