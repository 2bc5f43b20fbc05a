//! Traits for the external services the palette core consumes.
//!
//! Search, session, and impression tracking all live elsewhere in the
//! application; the palette only needs these narrow views of them.

use crate::Result;
use dashpal_types::{DashboardHit, SearchQuery};
use std::future::Future;

/// Full-text search over dashboard records.
///
/// The default ordering of returned hits is the service's own (alphabetical
/// by name in practice); callers re-sort when they need something else.
pub trait DashboardSearcher: Send + Sync {
    fn search(&self, query: SearchQuery)
    -> impl Future<Output = Result<Vec<DashboardHit>>> + Send;
}

/// Reports whether a user is currently authenticated.
pub trait SessionProvider: Send + Sync {
    fn is_signed_in(&self) -> bool;
}

/// Tracks which dashboards the current user has opened.
pub trait ImpressionTracker: Send + Sync {
    /// Dashboard uids ordered most-recent-first, of unbounded length.
    fn recently_opened_dashboards(&self) -> impl Future<Output = Result<Vec<String>>> + Send;
}
