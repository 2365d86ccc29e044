//! Country registry, checksum engine, validation and formatting.
//!
//! Everything in this module is a pure function over immutable data.
//! The registry is a process-wide static table and may be read from any
//! number of threads without coordination.

pub mod checksum;
mod countries;
mod error;
mod format;
mod iban;
pub mod structure;
mod validation;

pub use checksum::{compute_check_digits, mod97_check};
pub use countries::*;
pub use error::*;
pub use format::*;
pub use iban::Iban;
pub use structure::{CharClass, Segment, Structure};
pub use validation::*;
