mod dashboards;

pub use dashboards::DashboardActions;

/// Sort weight for the "Recent dashboards" section.
pub const RECENT_DASHBOARDS_PRIORITY: i64 = 2;

/// Sort weight for dashboard search results.
pub const SEARCH_RESULTS_PRIORITY: i64 = 1;

/// Cap on the "Recent dashboards" section.
pub(crate) const MAX_RECENT_DASHBOARDS: usize = 5;

/// Cap on dashboard search results.
pub(crate) const MAX_SEARCH_RESULTS: usize = 100;
