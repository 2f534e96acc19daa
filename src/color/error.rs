//! Color parsing errors.

/// Errors raised while resolving a color spec or style definition.
///
/// These are caller-input-validation errors: they are raised synchronously
/// to the immediate caller and carry enough context to correct the input.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("Invalid foreground/background color \"{name}\" [{valid}]")]
    InvalidColor { name: String, valid: String },

    #[error("Invalid style option \"{name}\" [{valid}]")]
    InvalidOption { name: String, valid: String },

    #[error("Invalid spec key \"{key}\", allowed keys: fg, bg, options, extra")]
    InvalidSpecKey { key: String },
}
