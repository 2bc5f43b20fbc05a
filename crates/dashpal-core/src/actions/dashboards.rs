//! Dashboard lookups for the command palette.
//!
//! Adapts "recently viewed" and "search-matched" dashboards into palette
//! actions. Authorization gating is modeled as empty results, never as an
//! error; failures from the underlying services propagate to the caller.

use crate::Result;
use crate::config::Config;
use crate::i18n::Translator;
use crate::service::{DashboardSearcher, ImpressionTracker, SessionProvider};
use crate::utils::strip_base_from_url;
use dashpal_types::{DashboardHit, PaletteAction, SearchQuery};
use tracing::debug;

use super::{
    MAX_RECENT_DASHBOARDS, MAX_SEARCH_RESULTS, RECENT_DASHBOARDS_PRIORITY,
    SEARCH_RESULTS_PRIORITY,
};

/// Fetches dashboard-backed palette actions from the search, session, and
/// impression services.
pub struct DashboardActions<S, P, I> {
    searcher: S,
    session: P,
    impressions: I,
    config: Config,
    translator: Translator,
}

impl<S, P, I> DashboardActions<S, P, I>
where
    S: DashboardSearcher,
    P: SessionProvider,
    I: ImpressionTracker,
{
    #[must_use]
    pub fn new(
        searcher: S,
        session: P,
        impressions: I,
        config: Config,
        translator: Translator,
    ) -> Self {
        Self {
            searcher,
            session,
            impressions,
            config,
            translator,
        }
    }

    /// Palette actions for the dashboards the user opened most recently.
    ///
    /// Recents are a personalization feature: unauthenticated sessions get
    /// an empty list without touching the network.
    ///
    /// # Errors
    ///
    /// Returns an error if the impression or search service fails.
    pub async fn recent_dashboard_actions(&self) -> Result<Vec<PaletteAction>> {
        if !self.session.is_signed_in() {
            return Ok(Vec::new());
        }

        let mut recent_uids = self.impressions.recently_opened_dashboards().await?;
        recent_uids.truncate(MAX_RECENT_DASHBOARDS);

        let mut hits = self
            .searcher
            .search(SearchQuery::dashboards_by_uid(
                recent_uids.clone(),
                MAX_RECENT_DASHBOARDS,
            ))
            .await?;

        debug!("Resolved {} of {} recent uids", hits.len(), recent_uids.len());

        // Search results are alphabetical; reorder to match recency.
        // A uid missing from the impression list sorts first.
        hits.sort_by_key(|hit| impression_order(&recent_uids, hit));

        Ok(hits
            .iter()
            .map(|hit| self.to_action(hit, "recent-dashboards", Section::Recent))
            .collect())
    }

    /// Palette actions for dashboards matching a live-typed query.
    ///
    /// Empty queries resolve to an empty list without a service call, as do
    /// unauthenticated sessions when anonymous access is disabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the search service fails.
    pub async fn dashboard_search_actions(&self, query: &str) -> Result<Vec<PaletteAction>> {
        if query.is_empty()
            || (!self.session.is_signed_in() && !self.config.anonymous_access_enabled)
        {
            return Ok(Vec::new());
        }

        let hits = self
            .searcher
            .search(SearchQuery::dashboards_matching(query, MAX_SEARCH_RESULTS))
            .await?;

        debug!("Search '{}' matched {} dashboards", query, hits.len());

        // Keep the service's ordering for search results.
        Ok(hits
            .iter()
            .map(|hit| self.to_action(hit, "go/dashboard", Section::Search))
            .collect())
    }

    fn to_action(&self, hit: &DashboardHit, id_prefix: &str, section: Section) -> PaletteAction {
        let (section, priority) = match section {
            Section::Recent => (
                self.translator
                    .t("command-palette.section.recent-dashboards", "Recent dashboards"),
                RECENT_DASHBOARDS_PRIORITY,
            ),
            Section::Search => (
                self.translator
                    .t("command-palette.section.dashboard-search-results", "Dashboards"),
                SEARCH_RESULTS_PRIORITY,
            ),
        };

        PaletteAction {
            id: format!("{id_prefix}{}", hit.url),
            name: hit.name.clone(),
            section,
            priority,
            url: strip_base_from_url(&self.config.app_sub_url, &hit.url),
        }
    }
}

#[derive(Clone, Copy)]
enum Section {
    Recent,
    Search,
}

/// Position of a hit in the impression list, for the recency re-sort.
// Positions are bounded by MAX_RECENT_DASHBOARDS, far below i64::MAX
#[allow(clippy::cast_possible_wrap)]
fn impression_order(recent_uids: &[String], hit: &DashboardHit) -> i64 {
    recent_uids
        .iter()
        .position(|uid| *uid == hit.uid)
        .map_or(-1, |index| index as i64)
}
