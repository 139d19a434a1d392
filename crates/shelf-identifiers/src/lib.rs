// Checksum arithmetic is written as `sum % n == 0`
#![allow(clippy::manual_is_multiple_of)]

//! Barcode identifier validation and conversion for the shelf library catalog
//!
//! Every scan, search box and import path in the catalog funnels book codes
//! through this crate:
//! - ISBN/EAN/UPC/LCCN normalization
//! - ISBN-10, EAN-13 (ISBN-13) and UPC-A checksum validation
//! - Classification of a scanned code as ISBN, EAN, UPC or LCCN
//! - ISBN-10 ⇄ ISBN-13 and UPC-A → ISBN-13 conversion
//! - Display hyphenation
//! - ISBN extraction from free text
//!
//! All operations are pure functions over strings. Invalid input and missing
//! equivalents are reported as `false`/`None`, never as panics.

pub mod checksum;
pub mod classify;
pub mod convert;
pub mod error;
pub mod extract;
pub mod format;
pub mod identifier;
pub mod normalize;

pub use checksum::*;
pub use classify::*;
pub use convert::*;
pub use error::*;
pub use extract::*;
pub use format::*;
pub use identifier::*;
pub use normalize::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
