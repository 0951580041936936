//! # Babel Common
//!
//! Shared error types, structured logging setup and test utilities used by
//! every crate in the babel workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;

#[cfg(feature = "testing")]
pub mod test_utils;

// Re-export commonly used types
pub use error::{BabelError, Result};
pub use logging::{init_logging, LoggingConfig};
