//! Debounced search state for the palette UI.
//!
//! The UI layer feeds every `(query, is_showing)` change into
//! [`DashboardSearchController::handle_input`] and renders the
//! [`results`](DashboardSearchController::results) /
//! [`is_loading`](DashboardSearchController::is_loading) snapshots. Bursts
//! of keystrokes inside one debounce window collapse into a single search
//! call, and a superseded in-flight fetch never overwrites newer state.

use crate::Result;
use crate::actions::DashboardActions;
use crate::service::{DashboardSearcher, ImpressionTracker, SessionProvider};
use dashpal_types::PaletteAction;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::{debug, warn};

/// Reactive `{results, is_loading}` holder for live-typed dashboard search.
///
/// Debounce state is per instance; two palettes never interfere with each
/// other. There is no timeout on the underlying fetch: a hung service call
/// leaves `is_loading` set until the next input change supersedes it.
pub struct DashboardSearchController<S, P, I> {
    inner: Arc<Inner<S, P, I>>,
    debounce: Duration,
}

struct Inner<S, P, I> {
    actions: DashboardActions<S, P, I>,

    state: Mutex<ControllerState>,

    /// Bumped on every input change; a dispatched fetch only applies its
    /// results while it still holds the highest generation.
    generation: AtomicU64,
}

#[derive(Debug, Default)]
struct ControllerState {
    results: Vec<PaletteAction>,
    is_loading: bool,
}

impl<S, P, I> Inner<S, P, I> {
    fn lock_state(&self) -> MutexGuard<'_, ControllerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S, P, I> Clone for DashboardSearchController<S, P, I> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            debounce: self.debounce,
        }
    }
}

impl<S, P, I> DashboardSearchController<S, P, I>
where
    S: DashboardSearcher + 'static,
    P: SessionProvider + 'static,
    I: ImpressionTracker + 'static,
{
    #[must_use]
    pub fn new(actions: DashboardActions<S, P, I>, debounce: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                actions,
                state: Mutex::new(ControllerState::default()),
                generation: AtomicU64::new(0),
            }),
            debounce,
        }
    }

    /// React to a change of the live query or the palette's visibility.
    ///
    /// Hidden palette or empty query resets to idle (empty results, not
    /// loading) and supersedes any in-flight fetch. Otherwise a fetch is
    /// scheduled on the current tokio runtime after the debounce window;
    /// only the newest scheduled fetch ever runs or applies.
    pub fn handle_input(&self, query: &str, is_showing: bool) {
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if !is_showing || query.is_empty() {
            let mut state = self.inner.lock_state();
            state.results.clear();
            state.is_loading = false;
            return;
        }

        self.inner.lock_state().is_loading = true;

        let inner = Arc::clone(&self.inner);
        let debounce = self.debounce;
        let query = query.to_string();
        tokio::spawn(async move {
            tokio::time::sleep(debounce).await;

            // Trailing-edge collapse: a newer keystroke arrived while we slept.
            if inner.generation.load(Ordering::SeqCst) != generation {
                return;
            }

            debug!("Dispatching dashboard search for '{}'", query);
            let fetched = inner.actions.dashboard_search_actions(&query).await;

            let mut state = inner.lock_state();
            if inner.generation.load(Ordering::SeqCst) != generation {
                debug!("Discarding stale results for '{}'", query);
                return;
            }

            match fetched {
                Ok(results) => state.results = results,
                Err(e) => {
                    warn!("Dashboard search for '{}' failed: {}", query, e);
                    state.results.clear();
                }
            }
            state.is_loading = false;
        });
    }

    /// Recent dashboards for the empty-query palette view.
    ///
    /// # Errors
    ///
    /// Returns an error if the impression or search service fails.
    pub async fn recent_dashboards(&self) -> Result<Vec<PaletteAction>> {
        self.inner.actions.recent_dashboard_actions().await
    }

    /// Snapshot of the latest applied results.
    #[must_use]
    pub fn results(&self) -> Vec<PaletteAction> {
        self.inner.lock_state().results.clone()
    }

    /// Whether a fetch is pending for the current input.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.inner.lock_state().is_loading
    }
}
