//! Error handling for the high-level cipher interfaces
//!
//! This crate has no error types of its own: it reports through the API
//! error system, and primitive errors convert into it via `From`.

pub use cipherlab_api::error::validate;
pub use cipherlab_api::{Error, Result};
