//! Optimistic favorite-toggle coordinator.
//!
//! One outstanding toggle at a time across the whole list: the flag flips
//! locally before the remote patch is issued, and flips back if the patch
//! cannot be made or fails. A failed connectivity check also reverts the
//! flip; local state only stays changed when the server confirmed it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};
use voicedeck_domain::VoicedeckError;

use super::ports::CallLogGateway;
use super::state::SharedListState;
use crate::session::ports::ConnectivityProbe;

pub(crate) struct FavoriteCoordinator {
    gateway: Arc<dyn CallLogGateway>,
    connectivity: Arc<dyn ConnectivityProbe>,
    // Per-coordinator pending marker, not per-record: toggles on different
    // rows are serialized, never interleaved.
    pending: AtomicBool,
}

impl FavoriteCoordinator {
    pub(crate) fn new(
        gateway: Arc<dyn CallLogGateway>,
        connectivity: Arc<dyn ConnectivityProbe>,
    ) -> Self {
        Self { gateway, connectivity, pending: AtomicBool::new(false) }
    }

    /// Toggle `call_id`'s starred flag. Returns `false` when rejected
    /// (another toggle pending, no organization, or unknown record).
    pub(crate) async fn toggle(&self, state: &SharedListState, call_id: &str) -> bool {
        if self.pending.swap(true, Ordering::SeqCst) {
            debug!(call_id = %call_id, "favorite toggle rejected, another is pending");
            return false;
        }

        let accepted = self.toggle_inner(state, call_id).await;
        self.pending.store(false, Ordering::SeqCst);
        accepted
    }

    async fn toggle_inner(&self, state: &SharedListState, call_id: &str) -> bool {
        // Reject without an active organization, then apply the optimistic
        // flip in the same critical section that finds the record.
        let (organization_id, new_value) = {
            let mut list = state.lock();
            let Some(org) = list.organization_id.clone() else { return false };
            let Some(record) = list.items.iter_mut().find(|record| record.id == call_id) else {
                return false;
            };
            record.starred = !record.starred;
            (org, record.starred)
        };

        if !self.connectivity.check().await.is_online() {
            Self::set_starred_locally(state, call_id, !new_value);
            state.lock().last_error = Some(VoicedeckError::NoConnectivity);
            return true;
        }

        match self.gateway.set_starred(&organization_id, call_id, new_value).await {
            Ok(acknowledged) => {
                // Normally a no-op; aligns local state if the server
                // acknowledged a different value.
                Self::set_starred_locally(state, call_id, acknowledged);
            }
            Err(err) => {
                warn!(call_id = %call_id, error = %err, "favorite patch failed, rolling back");
                Self::set_starred_locally(state, call_id, !new_value);
                state.lock().last_error = Some(err);
            }
        }
        true
    }

    fn set_starred_locally(state: &SharedListState, call_id: &str, value: bool) {
        let mut list = state.lock();
        if let Some(record) = list.items.iter_mut().find(|record| record.id == call_id) {
            record.starred = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use async_trait::async_trait;
    use chrono::Utc;
    use parking_lot::Mutex;
    use tokio::sync::Notify;
    use voicedeck_domain::{CallLogPage, CallLogRecord, Connectivity, Result};

    use super::*;
    use crate::call_logs::state::ListState;

    fn record(id: &str, starred: bool) -> CallLogRecord {
        CallLogRecord {
            id: id.into(),
            status: "ended".into(),
            duration: 30.0,
            cost: 0.1,
            summary: String::new(),
            transcript: vec![],
            ended_reason: "customer-ended-call".into(),
            recording_url: None,
            started_at: Utc::now(),
            ended_at: None,
            starred,
            assistant_id: "a-1".into(),
            assistant_name: "Support".into(),
            phone_number: "+15550100".into(),
            organization_id: "1".into(),
        }
    }

    fn list_state(records: Vec<CallLogRecord>) -> SharedListState {
        let mut state = ListState::new();
        state.organization_id = Some("1".into());
        state.items = records;
        Arc::new(Mutex::new(state))
    }

    #[derive(Default)]
    struct PatchGateway {
        responses: Mutex<VecDeque<Result<bool>>>,
        gate: Option<Arc<Notify>>,
        calls: Mutex<Vec<(String, bool)>>,
    }

    #[async_trait]
    impl CallLogGateway for PatchGateway {
        async fn fetch_page(
            &self,
            _organization_id: &str,
            _page: u32,
            _limit: u32,
            _query: &str,
        ) -> Result<CallLogPage> {
            Ok(CallLogPage::default())
        }

        async fn set_starred(
            &self,
            _organization_id: &str,
            call_id: &str,
            starred: bool,
        ) -> Result<bool> {
            self.calls.lock().push((call_id.to_string(), starred));
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            self.responses.lock().pop_front().unwrap_or(Ok(starred))
        }
    }

    struct Probe(bool);

    #[async_trait]
    impl ConnectivityProbe for Probe {
        async fn check(&self) -> Connectivity {
            if self.0 {
                Connectivity::online()
            } else {
                Connectivity::offline()
            }
        }
    }

    fn coordinator(gateway: Arc<PatchGateway>, online: bool) -> FavoriteCoordinator {
        FavoriteCoordinator::new(gateway, Arc::new(Probe(online)))
    }

    #[tokio::test]
    async fn successful_toggle_keeps_optimistic_value() {
        let gateway = Arc::new(PatchGateway::default());
        let coordinator = coordinator(gateway.clone(), true);
        let state = list_state(vec![record("c-1", false)]);

        assert!(coordinator.toggle(&state, "c-1").await);

        assert!(state.lock().items[0].starred);
        assert_eq!(gateway.calls.lock().as_slice(), &[("c-1".to_string(), true)]);
        assert!(state.lock().last_error.is_none());
    }

    #[tokio::test]
    async fn failed_patch_rolls_back() {
        let gateway = Arc::new(PatchGateway::default());
        gateway
            .responses
            .lock()
            .push_back(Err(VoicedeckError::Gateway("patch refused".into())));
        let coordinator = coordinator(gateway, true);
        let state = list_state(vec![record("c-1", false)]);

        coordinator.toggle(&state, "c-1").await;

        let list = state.lock();
        assert!(!list.items[0].starred);
        assert!(matches!(list.last_error, Some(VoicedeckError::Gateway(_))));
    }

    #[tokio::test]
    async fn offline_toggle_reverts_and_surfaces_error() {
        let gateway = Arc::new(PatchGateway::default());
        let coordinator = coordinator(gateway.clone(), false);
        let state = list_state(vec![record("c-1", false)]);

        coordinator.toggle(&state, "c-1").await;

        let list = state.lock();
        assert!(!list.items[0].starred);
        assert_eq!(list.last_error, Some(VoicedeckError::NoConnectivity));
        assert!(gateway.calls.lock().is_empty());
    }

    #[tokio::test]
    async fn second_toggle_while_pending_is_rejected() {
        let gate = Arc::new(Notify::new());
        let gateway =
            Arc::new(PatchGateway { gate: Some(gate.clone()), ..PatchGateway::default() });
        let coordinator = Arc::new(coordinator(gateway.clone(), true));
        let state = list_state(vec![record("c-1", false), record("c-2", false)]);

        let first = tokio::spawn({
            let coordinator = coordinator.clone();
            let state = state.clone();
            async move { coordinator.toggle(&state, "c-1").await }
        });
        tokio::task::yield_now().await;

        // A toggle on a different row is still rejected: the marker is
        // per-coordinator.
        assert!(!coordinator.toggle(&state, "c-2").await);

        gate.notify_one();
        assert!(first.await.unwrap());
        assert_eq!(gateway.calls.lock().len(), 1);

        // Marker cleared: the next toggle goes through.
        gate.notify_one();
        assert!(coordinator.toggle(&state, "c-2").await);
    }

    #[tokio::test]
    async fn toggle_without_organization_is_rejected() {
        let gateway = Arc::new(PatchGateway::default());
        let coordinator = coordinator(gateway.clone(), true);
        let state = list_state(vec![record("c-1", false)]);
        state.lock().organization_id = None;

        assert!(!coordinator.toggle(&state, "c-1").await);
        assert!(!state.lock().items[0].starred);
        assert!(gateway.calls.lock().is_empty());
    }

    #[tokio::test]
    async fn unknown_record_is_rejected() {
        let gateway = Arc::new(PatchGateway::default());
        let coordinator = coordinator(gateway.clone(), true);
        let state = list_state(vec![record("c-1", false)]);

        assert!(!coordinator.toggle(&state, "missing").await);
        assert!(gateway.calls.lock().is_empty());
    }

    #[tokio::test]
    async fn mismatched_acknowledgement_aligns_local_state() {
        let gateway = Arc::new(PatchGateway::default());
        gateway.responses.lock().push_back(Ok(false));
        let coordinator = coordinator(gateway, true);
        let state = list_state(vec![record("c-1", false)]);

        coordinator.toggle(&state, "c-1").await;

        assert!(!state.lock().items[0].starred);
    }
}
