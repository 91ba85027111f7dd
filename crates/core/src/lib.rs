//! # Voicedeck Core
//!
//! Business logic for the Voicedeck client: session lifecycle, organization
//! selection, and the paginated/searchable call-log list with optimistic
//! favoriting.
//!
//! ## Architecture
//! Hexagonal: this crate owns services and state machines and talks to the
//! outside world only through port traits (`CallLogGateway`,
//! `OrganizationGateway`, `AuthGateway`, `ConnectivityProbe`,
//! `CredentialStore`, `RecordingMedia`). Adapters live in `voicedeck-infra`;
//! tests provide fakes.

pub mod call_logs;
pub mod organizations;
pub mod recording;
pub mod session;

pub use call_logs::controller::PaginatedSearchController;
pub use call_logs::ports::CallLogGateway;
pub use call_logs::state::{ListPhase, SearchState};
pub use organizations::manager::{Activation, OrganizationSelectionManager, Selection};
pub use organizations::ports::OrganizationGateway;
pub use recording::{RecordingMedia, RecordingService};
pub use session::context::SessionContext;
pub use session::ports::{AuthGateway, ConnectivityProbe, CredentialStore};
pub use session::service::SessionService;
