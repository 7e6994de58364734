//! textcut-core - Core types and traits for textcut
//!
//! This crate provides the foundational types, traits, configuration and
//! error handling shared by the chunking pipeline and the CLI.

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::*;
pub use error::{CutError, Result};
pub use traits::*;
pub use types::*;
