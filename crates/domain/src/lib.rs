//! # Voicedeck Domain
//!
//! Business domain types and models for Voicedeck.
//!
//! This crate contains:
//! - Domain data types (CallLogRecord, Organization, LoginSession, etc.)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants
//!
//! ## Architecture
//! - No dependencies on other Voicedeck crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::duration::format_duration;
