//! Error and diagnostic types for catalog expansion.

use derive_more::Display;
use snafu::Snafu;

/// Errors that can occur while expanding a container.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// The container has no nested enumeration to read keys from.
    #[snafu(display("'Localizable' macro needs an internal enum which is a set of keys for localization"))]
    MissingCatalog,
}

impl Error {
    /// Attach this error to a location, producing a reportable diagnostic.
    pub fn at<L>(self, location: L) -> Diagnostic<L> {
        Diagnostic { severity: Severity::Error, message: self.to_string(), location, error: self }
    }
}

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Severity {
    #[display("error")]
    Error,
}

/// A compile-time report handed back to the host instead of generated members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic<L> {
    pub severity: Severity,
    pub message: String,
    /// Where the host should point the report (the container declaration).
    pub location: L,
    /// The error this diagnostic was raised for.
    pub error: Error,
}
