//! Organization selection manager.
//!
//! Owns the single "active organization" value, reconciles the persisted
//! selection against a freshly fetched organization list, and publishes
//! changes to dependents over a watch channel. The persisted id is the only
//! piece of this state that survives restarts.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn};
use voicedeck_domain::{Organization, Result, VoicedeckError};

use super::ports::OrganizationGateway;
use crate::session::context::SessionContext;
use crate::session::ports::ConnectivityProbe;

/// Outcome of reconciling a persisted selection against an organization
/// list.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// The resolved active organization, `None` when the list is empty.
    pub organization: Option<Organization>,
    /// Set when the selection applied in memory but could not be persisted.
    /// Not fatal; the caller may surface it as a soft warning.
    pub persist_warning: bool,
}

/// Result of an activation pass: the fresh list plus the resolved selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Activation {
    pub organizations: Vec<Organization>,
    pub selection: Selection,
}

/// Single source of truth for "which organization is active".
pub struct OrganizationSelectionManager {
    gateway: Arc<dyn OrganizationGateway>,
    connectivity: Arc<dyn ConnectivityProbe>,
    session: SessionContext,
    // Serializes restoration so rapid activations cannot persist two
    // different "first" selections.
    restore_guard: tokio::sync::Mutex<()>,
    selection_tx: watch::Sender<Option<Organization>>,
}

impl OrganizationSelectionManager {
    /// Create a new manager with no active organization.
    pub fn new(
        gateway: Arc<dyn OrganizationGateway>,
        connectivity: Arc<dyn ConnectivityProbe>,
        session: SessionContext,
    ) -> Self {
        let (selection_tx, _) = watch::channel(None);
        Self {
            gateway,
            connectivity,
            session,
            restore_guard: tokio::sync::Mutex::new(()),
            selection_tx,
        }
    }

    /// Subscribe to active-organization changes. Dependents (the list
    /// controller) reset their state on every change.
    pub fn subscribe(&self) -> watch::Receiver<Option<Organization>> {
        self.selection_tx.subscribe()
    }

    /// The currently active organization, if any.
    pub fn selected(&self) -> Option<Organization> {
        self.selection_tx.borrow().clone()
    }

    /// Entry point called by the presentation layer whenever the relevant
    /// screen gains focus: refreshes the organization list and restores the
    /// persisted selection against it.
    ///
    /// # Errors
    ///
    /// `NoConnectivity` when offline (list and selection are left
    /// untouched), `Auth` when no user is signed in, `Gateway` when the
    /// list fetch fails.
    pub async fn on_activate(&self) -> Result<Activation> {
        if !self.connectivity.check().await.is_online() {
            return Err(VoicedeckError::NoConnectivity);
        }

        let user_id = self
            .session
            .user_id()
            .await?
            .ok_or_else(|| VoicedeckError::Auth("no signed-in user".into()))?;

        let organizations = self.gateway.fetch_organizations(user_id).await?;
        debug!(count = organizations.len(), "fetched organization list");

        let selection = self.restore_selection(&organizations).await;
        Ok(Activation { organizations, selection })
    }

    /// Reconcile the persisted selection against `organizations`.
    ///
    /// Keeps the persisted id when it is still present in the list;
    /// otherwise selects the first entry and persists that choice. Returns
    /// `None` for an empty list. Idempotent: concurrent calls serialize on
    /// an internal guard, so the second caller observes the first one's
    /// persisted choice instead of racing it.
    pub async fn restore_selection(&self, organizations: &[Organization]) -> Selection {
        let _guard = self.restore_guard.lock().await;

        if organizations.is_empty() {
            self.selection_tx.send_replace(None);
            return Selection { organization: None, persist_warning: false };
        }

        let persisted = match self.session.selected_organization_id().await {
            Ok(id) => id,
            Err(err) => {
                warn!(error = %err, "failed to read persisted organization selection");
                None
            }
        };

        if let Some(id) = persisted {
            if let Some(org) = organizations.iter().find(|org| org.id == id) {
                let org = org.clone();
                self.selection_tx.send_replace(Some(org.clone()));
                return Selection { organization: Some(org), persist_warning: false };
            }
            debug!(id = %id, "persisted organization no longer in list, falling back to first");
        }

        let first = organizations[0].clone();
        let persist_warning = self.persist(&first.id).await;
        self.selection_tx.send_replace(Some(first.clone()));
        Selection { organization: Some(first), persist_warning }
    }

    /// Make `org` the active organization and persist the choice.
    ///
    /// The selection always applies in memory for the session; a storage
    /// failure is reported through `persist_warning`.
    pub async fn select(&self, org: &Organization) -> Selection {
        let persist_warning = self.persist(&org.id).await;
        self.selection_tx.send_replace(Some(org.clone()));
        Selection { organization: Some(org.clone()), persist_warning }
    }

    async fn persist(&self, organization_id: &str) -> bool {
        match self.session.set_selected_organization_id(organization_id).await {
            Ok(()) => false,
            Err(err) => {
                warn!(error = %err, organization_id = %organization_id,
                    "selection applied in memory but could not be persisted");
                true
            }
        }
    }
}
