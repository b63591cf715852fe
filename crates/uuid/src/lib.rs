//! Recipe identifier utilities.
//!
//! Every recipe record is keyed by a *canonical* UUID: **32 lowercase hexadecimal characters**
//! (no hyphens). The store adapters allocate these on create and every identifier arriving from
//! outside the process (HTTP path parameters) is validated against the same form.
//!
//! ## Canonical UUID form
//! - Length: 32
//! - Characters: `0-9` and `a-f` only
//! - Example: `550e8400e29b41d4a716446655440000`
//!
//! This is the same value you would get from `Uuid::new_v4().simple().to_string()`.
//! Non-canonical values (uppercase, hyphenated, wrong length, non-hex) are rejected so a
//! record can only ever be addressed one way.

mod id;

pub use id::{RecipeUuid, Uuid};

/// Error type for identifier operations.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// Input is not a canonical recipe identifier.
    #[error("Cast to RecipeUuid failed for value \"{0}\": expected 32 lowercase hex characters without hyphens")]
    InvalidInput(String),
}

/// Result type for identifier operations.
pub type UuidResult<T> = Result<T, UuidError>;
