//! Common types shared across the Kandilli feed components.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::Event;
