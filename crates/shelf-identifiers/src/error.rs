//! Error type for the typed parsing API

use thiserror::Error;

/// Why a raw code could not be parsed into an [`crate::Identifier`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Error), uniffi(flat_error))]
pub enum IdentifierError {
    #[error("Empty identifier")]
    Empty,
    #[error("Unrecognized identifier: {input}")]
    Unrecognized { input: String },
}
