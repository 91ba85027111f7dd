//! Domain types and models

pub mod call_log;
pub mod organization;
pub mod session;

pub use call_log::{CallLogPage, CallLogRecord, TranscriptTurn};
pub use organization::Organization;
pub use session::{Connectivity, LoginSession, Permission, Role, UserProfile};
