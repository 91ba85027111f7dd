//! Observable list state.

use std::sync::Arc;

use parking_lot::Mutex;
use voicedeck_domain::{CallLogRecord, VoicedeckError};

/// Handle shared between the controller and its favorite coordinator.
pub(crate) type SharedListState = Arc<Mutex<ListState>>;

/// Phase of the list state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    /// No organization selected; nothing to show.
    Idle,
    /// First page (fresh organization or query) in flight.
    LoadingFirstPage,
    /// A further page is being appended.
    LoadingNextPage,
    /// Up to date for the current (organization, query) pair. An empty
    /// `items` here is a valid terminal state, not an error.
    Ready,
    /// The first page failed and nothing is shown.
    Error,
}

/// Snapshot of the controller state handed to the presentation layer.
///
/// `items` always holds contiguous pages `1..=page` for the current
/// (organization, query) pair.
#[derive(Debug, Clone)]
pub struct SearchState {
    pub query: String,
    pub page: u32,
    pub total_pages: u32,
    pub items: Vec<CallLogRecord>,
    pub phase: ListPhase,
    /// Last surfaced error; dismissed via
    /// [`super::controller::PaginatedSearchController::dismiss_error`].
    pub last_error: Option<VoicedeckError>,
}

impl SearchState {
    /// Whether the initial page for the current epoch is in flight.
    #[must_use]
    pub fn is_loading_first_page(&self) -> bool {
        self.phase == ListPhase::LoadingFirstPage
    }

    /// Whether a follow-up page is in flight.
    #[must_use]
    pub fn is_loading_next_page(&self) -> bool {
        self.phase == ListPhase::LoadingNextPage
    }

    /// Whether more pages remain to be fetched.
    #[must_use]
    pub fn has_more_pages(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Internal mutable state. Mutated only by the controller (and the
/// favorite coordinator it owns) in response to its own events.
#[derive(Debug)]
pub(crate) struct ListState {
    pub organization_id: Option<String>,
    pub query: String,
    pub page: u32,
    pub total_pages: u32,
    pub items: Vec<CallLogRecord>,
    pub phase: ListPhase,
    pub last_error: Option<VoicedeckError>,
}

impl ListState {
    pub(crate) fn new() -> Self {
        Self {
            organization_id: None,
            query: String::new(),
            page: 1,
            total_pages: 1,
            items: Vec::new(),
            phase: ListPhase::Idle,
            last_error: None,
        }
    }

    pub(crate) fn snapshot(&self) -> SearchState {
        SearchState {
            query: self.query.clone(),
            page: self.page,
            total_pages: self.total_pages,
            items: self.items.clone(),
            phase: self.phase,
            last_error: self.last_error.clone(),
        }
    }

    /// Whether any page fetch is currently in flight.
    pub(crate) fn is_fetching(&self) -> bool {
        matches!(self.phase, ListPhase::LoadingFirstPage | ListPhase::LoadingNextPage)
    }
}
