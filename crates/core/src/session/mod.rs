//! Session lifecycle: credentials, authentication, and the session context
//! object handed to dependent components.

pub mod context;
pub mod ports;
pub mod service;
