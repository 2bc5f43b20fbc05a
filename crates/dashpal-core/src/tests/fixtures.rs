//! Test fixtures and service mocks

use crate::config::Config;
use crate::i18n::Translator;
use crate::service::{DashboardSearcher, ImpressionTracker, SessionProvider};
use crate::{Error, Result, actions::DashboardActions};
use dashpal_types::{DashboardHit, SearchQuery};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Create a mock `DashboardHit`
pub fn make_hit(uid: &str, name: &str, url: &str) -> DashboardHit {
    DashboardHit {
        uid: uid.to_string(),
        name: name.to_string(),
        url: url.to_string(),
    }
}

/// Mock search service. Behaves like the real one: honors the uid
/// allowlist, filters on the free-text query, returns hits in alphabetical
/// name order, and truncates to the requested limit.
pub struct MockSearcher {
    hits: Vec<DashboardHit>,
    calls: Arc<Mutex<Vec<SearchQuery>>>,
    fail: bool,
    delay: Option<Duration>,
    honor_allowlist: bool,
}

impl MockSearcher {
    pub fn returning(hits: Vec<DashboardHit>) -> Self {
        Self {
            hits,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail: false,
            delay: None,
            honor_allowlist: true,
        }
    }

    /// A misbehaving service that returns hits outside the uid allowlist.
    pub fn ignoring_allowlist(hits: Vec<DashboardHit>) -> Self {
        let mut searcher = Self::returning(hits);
        searcher.honor_allowlist = false;
        searcher
    }

    pub fn failing() -> Self {
        let mut searcher = Self::returning(Vec::new());
        searcher.fail = true;
        searcher
    }

    /// Simulate a slow network: each search resolves after `delay`.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Shared handle to the recorded queries, usable after the mock has
    /// been moved into a fetcher or controller.
    pub fn call_log(&self) -> Arc<Mutex<Vec<SearchQuery>>> {
        Arc::clone(&self.calls)
    }
}

impl DashboardSearcher for MockSearcher {
    async fn search(&self, query: SearchQuery) -> Result<Vec<DashboardHit>> {
        self.calls.lock().unwrap().push(query.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail {
            return Err(Error::Search("search service down".to_string()));
        }

        let mut hits: Vec<DashboardHit> = self
            .hits
            .iter()
            .filter(|hit| {
                !self.honor_allowlist
                    || query
                        .uid
                        .as_ref()
                        .is_none_or(|uids| uids.contains(&hit.uid))
            })
            .filter(|hit| {
                query
                    .query
                    .as_ref()
                    .is_none_or(|text| hit.name.to_lowercase().contains(&text.to_lowercase()))
            })
            .cloned()
            .collect();
        hits.sort_by(|a, b| a.name.cmp(&b.name));
        hits.truncate(query.limit);
        Ok(hits)
    }
}

/// Mock session service with a fixed authentication state.
pub struct MockSession {
    signed_in: bool,
}

impl MockSession {
    pub fn signed_in() -> Self {
        Self { signed_in: true }
    }

    pub fn anonymous() -> Self {
        Self { signed_in: false }
    }
}

impl SessionProvider for MockSession {
    fn is_signed_in(&self) -> bool {
        self.signed_in
    }
}

/// Mock impression tracker returning a fixed most-recent-first uid list.
pub struct MockImpressions {
    uids: Vec<String>,
    fail: bool,
}

impl MockImpressions {
    pub fn returning(uids: &[&str]) -> Self {
        Self {
            uids: uids.iter().map(ToString::to_string).collect(),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            uids: Vec::new(),
            fail: true,
        }
    }
}

impl ImpressionTracker for MockImpressions {
    async fn recently_opened_dashboards(&self) -> Result<Vec<String>> {
        if self.fail {
            return Err(Error::Impressions("impression store unreachable".to_string()));
        }
        Ok(self.uids.clone())
    }
}

/// Assemble a fetcher from mocks with a default config and empty translator.
pub fn make_actions(
    searcher: MockSearcher,
    session: MockSession,
    impressions: MockImpressions,
) -> DashboardActions<MockSearcher, MockSession, MockImpressions> {
    make_actions_with_config(searcher, session, impressions, Config::default())
}

pub fn make_actions_with_config(
    searcher: MockSearcher,
    session: MockSession,
    impressions: MockImpressions,
    config: Config,
) -> DashboardActions<MockSearcher, MockSession, MockImpressions> {
    DashboardActions::new(searcher, session, impressions, config, Translator::default())
}

/// Three dashboards whose alphabetical order differs from any realistic
/// recency order.
pub fn sample_hits() -> Vec<DashboardHit> {
    vec![
        make_hit("d1", "Alerts overview", "/d/d1/alerts-overview"),
        make_hit("d2", "Billing", "/d/d2/billing"),
        make_hit("d3", "CPU load", "/d/d3/cpu-load"),
    ]
}
