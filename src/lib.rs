//! Coded API error taxonomy.
//!
//! This crate lets a networking/business layer signal well-known failure
//! categories through one error type instead of many, and lets callers
//! classify a caught error with boolean predicate helpers. It has three
//! pieces:
//!
//! - [`catalog`] — the closed set of known error codes ([`ErrorKind`]),
//!   their numeric-range categories, and a machine-readable export.
//! - [`messages`] — the [`MessageResolver`] interface for localized
//!   display text, with a built-in English table and an optional one-time
//!   process-wide installation.
//! - [`error`] — the [`ApiError`] value: code, optional message, optional
//!   wrapped cause, classification predicates, and display-message
//!   derivation.
//!
//! # Example
//!
//! ```rust
//! use apierr::{ApiError, ErrorKind, messages};
//!
//! // Once, during application startup.
//! messages::install_default().expect("resolver installed twice");
//!
//! // At the failure site, translate a low-level error into a domain error.
//! let error = ApiError::from_kind(ErrorKind::NetworkUnavailable)
//!     .caused_by(std::io::Error::other("dns lookup failed"));
//!
//! // At the boundary, classify and display.
//! if error.is_network_error() {
//!     eprintln!("{}", error.display_message());
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod messages;

pub use catalog::{Catalog, Category, CategoryEntry, ErrorEntry, ErrorKind};
pub use error::ApiError;
pub use messages::{EnglishMessages, InstallError, MessageKey, MessageResolver};
