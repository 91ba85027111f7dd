//! Organization list fetching and active-selection management.

pub mod manager;
pub mod ports;
