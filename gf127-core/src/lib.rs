//! Shared error type for the GF(2^127) arithmetic workspace.

mod error;

pub use error::{Gf127Error, Result};
