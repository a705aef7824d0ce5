//! Error and diagnostic types.
//!
//! Nothing in this crate fails construction. Configuration problems surface as
//! [`ConfigWarning`]s that are logged and replaced with defaults; DOM failures
//! during mount surface as [`MountError`]s that are logged and skipped.

/// A recoverable configuration problem. The offending field falls back to its
/// default value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigWarning {
    /// An object-valued field (the options record itself, or `size`) held
    /// something else; every field inside it uses its default.
    #[error("{field} should be an object. Falling back to defaults.")]
    NotAnObject { field: &'static str },
    /// A numeric field held a non-numeric value.
    #[error("{field} should be a number. Falling back to default.")]
    NotANumber { field: &'static str },
    /// An integer field held a non-integral value.
    #[error("{field} should be an integer. Falling back to default.")]
    NotAnInteger { field: &'static str },
    /// A string field held a non-string value.
    #[error("{field} should be a string. Falling back to default.")]
    NotAString { field: &'static str },
    /// `smoothing` was numeric but outside (0, 1].
    #[error("smoothing should be in (0, 1], got {value}. Falling back to default.")]
    SmoothingOutOfRange { value: f64 },
}

/// A DOM operation failed while mounting.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    /// The document has no `<body>` to attach the element to.
    #[error("document has no body")]
    MissingBody,
    /// The document has no `<head>` to attach the style block to.
    #[error("document has no head")]
    MissingHead,
    /// A browser call threw; the payload is the debug form of the thrown value.
    #[error("dom operation failed: {0}")]
    Dom(String),
}
