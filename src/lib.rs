//! # ibankit
//!
//! IBAN validation library: a static registry of per-country IBAN rules,
//! the ISO 7064 MOD-97-10 checksum, and display formatting.
//!
//! Validation never fails with a Rust error. Every problem found in the
//! input is collected into [`ValidationOutcome::errors`], so a caller can
//! show all of them at once.
//!
//! ## Quick Start
//!
//! ```rust
//! use ibankit::*;
//!
//! let outcome = validate("GB33 BUKB 2020 1555 5555 55");
//! assert!(outcome.is_valid);
//! assert_eq!(outcome.country.unwrap().code, "GB");
//! assert_eq!(outcome.formatted.as_deref(), Some("GB33 BUKB 2020 1555 5555 55"));
//!
//! let outcome = validate("GB34BUKB20201555555555");
//! assert!(!outcome.is_valid);
//! assert_eq!(outcome.errors, vec![ValidationError::ChecksumInvalid]);
//!
//! let iban: Iban = "DE75512108001245126199".parse().unwrap();
//! assert_eq!(iban.bban(), "512108001245126199");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Registry, checksum, validation, formatting, `Iban` type |
//! | `report` | JSON rendering of outcomes and the registry |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "report")]
pub mod report;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
