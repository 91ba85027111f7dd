//! Paginated search controller.
//!
//! Drives the call-log list for the active organization: page/query state,
//! debounced search, infinite-scroll pagination, and error surfacing. Each
//! first-page fetch opens a new epoch; completions belonging to an older
//! epoch are discarded, so stale results can never clobber a newer query or
//! organization.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use voicedeck_domain::{Organization, SearchConfig, VoicedeckError};

use super::debounce::Debouncer;
use super::favorites::FavoriteCoordinator;
use super::ports::CallLogGateway;
use super::state::{ListPhase, ListState, SearchState, SharedListState};
use crate::session::ports::ConnectivityProbe;

/// State machine over the call-log list. One instance per screen.
///
/// All mutation goes through this controller; the presentation layer only
/// ever reads [`SearchState`] snapshots.
pub struct PaginatedSearchController {
    gateway: Arc<dyn CallLogGateway>,
    connectivity: Arc<dyn ConnectivityProbe>,
    config: SearchConfig,
    state: SharedListState,
    // Generation counter for (organization, query) epochs.
    epoch: AtomicU64,
    debounce: Debouncer,
    favorites: FavoriteCoordinator,
}

impl PaginatedSearchController {
    /// Create a controller with no organization selected.
    ///
    /// Returned as `Arc` because debounced query fetches run as spawned
    /// tasks holding a handle back to the controller.
    pub fn new(
        gateway: Arc<dyn CallLogGateway>,
        connectivity: Arc<dyn ConnectivityProbe>,
        config: SearchConfig,
    ) -> Arc<Self> {
        let favorites = FavoriteCoordinator::new(gateway.clone(), connectivity.clone());
        Arc::new(Self {
            gateway,
            connectivity,
            config,
            state: Arc::new(Mutex::new(ListState::new())),
            epoch: AtomicU64::new(0),
            debounce: Debouncer::new(),
            favorites,
        })
    }

    /// Current observable state.
    pub fn snapshot(&self) -> SearchState {
        self.state.lock().snapshot()
    }

    /// Clear the surfaced error (the user dismissed the dialog).
    pub fn dismiss_error(&self) {
        self.state.lock().last_error = None;
    }

    /// `ORG_CHANGED`: make `organization_id` the active organization (or
    /// none) and reload the list from page 1. The active query is kept and
    /// carried into the new organization's first fetch.
    pub async fn set_organization(&self, organization_id: Option<String>) {
        // A pending debounced fetch belongs to the old organization's
        // timeline; the reload below covers the query either way.
        self.debounce.cancel();

        let query = {
            let mut state = self.state.lock();
            state.organization_id = organization_id.clone();
            state.items.clear();
            state.page = 1;
            state.total_pages = 1;
            if organization_id.is_none() {
                // Open a new epoch so in-flight completions are dropped.
                self.epoch.fetch_add(1, Ordering::SeqCst);
                state.phase = ListPhase::Idle;
                return;
            }
            state.phase = ListPhase::LoadingFirstPage;
            state.query.clone()
        };

        self.run_first_page(query).await;
    }

    /// `QUERY_CHANGED`: record a keystroke.
    ///
    /// Queries at or above the minimum length fetch after the quiet
    /// interval; a query shortened below it (or cleared) cancels any armed
    /// fetch and reloads unfiltered immediately, but only when a filter is
    /// actually active.
    pub fn set_query(self: &Arc<Self>, input: &str) {
        let meets_threshold = input.chars().count() >= self.config.min_query_len;

        if meets_threshold {
            let controller = Arc::clone(self);
            let query = input.to_string();
            self.debounce.arm(self.config.debounce(), async move {
                controller.run_first_page(query).await;
            });
            return;
        }

        self.debounce.cancel();
        let filter_active = {
            let state = self.state.lock();
            state.organization_id.is_some() && !state.query.is_empty()
        };
        if filter_active {
            let controller = Arc::clone(self);
            tokio::spawn(async move {
                controller.run_first_page(String::new()).await;
            });
        }
    }

    /// `LOAD_MORE`: fetch the next page, carrying the active query.
    ///
    /// A no-op while any fetch is in flight, when the last page is already
    /// loaded, or when no organization is selected.
    pub async fn load_more(&self) {
        let (epoch, organization_id, query, next_page) = {
            let mut state = self.state.lock();
            let Some(org) = state.organization_id.clone() else { return };
            if state.is_fetching() || state.page >= state.total_pages {
                return;
            }
            state.phase = ListPhase::LoadingNextPage;
            (self.epoch.load(Ordering::SeqCst), org, state.query.clone(), state.page + 1)
        };

        if !self.connectivity.check().await.is_online() {
            let mut state = self.state.lock();
            if self.epoch.load(Ordering::SeqCst) == epoch {
                state.phase = ListPhase::Ready;
                state.last_error = Some(VoicedeckError::NoConnectivity);
            }
            return;
        }

        debug!(page = next_page, organization_id = %organization_id, "fetching next page");
        let result = self
            .gateway
            .fetch_page(&organization_id, next_page, self.config.page_limit, &query)
            .await;

        let mut state = self.state.lock();
        if self.epoch.load(Ordering::SeqCst) != epoch {
            debug!(page = next_page, "discarding stale next-page result");
            return;
        }
        match result {
            Ok(page_data) => {
                state.items.extend(page_data.docs);
                state.page = next_page;
                state.total_pages = page_data.total_pages.max(1);
                state.phase = ListPhase::Ready;
            }
            Err(err) => {
                warn!(page = next_page, error = %err, "next-page fetch failed");
                state.phase =
                    if state.items.is_empty() { ListPhase::Error } else { ListPhase::Ready };
                state.last_error = Some(err);
            }
        }
    }

    /// Toggle the starred flag on a record, optimistically.
    ///
    /// Returns `false` when the toggle was rejected (another toggle
    /// pending, or no organization selected).
    pub async fn toggle_favorite(&self, call_id: &str) -> bool {
        self.favorites.toggle(&self.state, call_id).await
    }

    /// Forward active-organization changes from a selection manager into
    /// this controller until the sender side is dropped.
    pub fn follow_selection(
        self: &Arc<Self>,
        mut selection: watch::Receiver<Option<Organization>>,
    ) -> JoinHandle<()> {
        let controller = Arc::clone(self);
        tokio::spawn(async move {
            loop {
                let current = selection.borrow_and_update().as_ref().map(|org| org.id.clone());
                controller.set_organization(current).await;
                if selection.changed().await.is_err() {
                    break;
                }
            }
        })
    }

    /// Open a new epoch and fetch page 1 for `query` against the active
    /// organization. No-op without an organization.
    async fn run_first_page(&self, query: String) {
        let Some(organization_id) = self.state.lock().organization_id.clone() else {
            return;
        };

        let epoch = self.epoch.fetch_add(1, Ordering::SeqCst) + 1;

        if !self.connectivity.check().await.is_online() {
            let mut state = self.state.lock();
            if self.epoch.load(Ordering::SeqCst) == epoch {
                // Fetch not attempted: page/items stay as they were.
                state.phase =
                    if state.items.is_empty() { ListPhase::Error } else { ListPhase::Ready };
                state.last_error = Some(VoicedeckError::NoConnectivity);
            }
            return;
        }

        {
            let mut state = self.state.lock();
            state.query.clone_from(&query);
            state.items.clear();
            state.page = 1;
            state.total_pages = 1;
            state.phase = ListPhase::LoadingFirstPage;
        }

        debug!(organization_id = %organization_id, query = %query, "fetching first page");
        let result = self
            .gateway
            .fetch_page(&organization_id, 1, self.config.page_limit, &query)
            .await;

        let mut state = self.state.lock();
        if self.epoch.load(Ordering::SeqCst) != epoch {
            debug!("discarding stale first-page result");
            return;
        }
        match result {
            Ok(page_data) => {
                state.items = page_data.docs;
                state.page = 1;
                state.total_pages = page_data.total_pages.max(1);
                state.phase = ListPhase::Ready;
            }
            Err(err) => {
                warn!(error = %err, "first-page fetch failed");
                state.phase =
                    if state.items.is_empty() { ListPhase::Error } else { ListPhase::Ready };
                state.last_error = Some(err);
            }
        }
    }
}
