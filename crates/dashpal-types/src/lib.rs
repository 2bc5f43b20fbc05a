//! Shared types for dashpal command palette components.
//!
//! This crate provides the types exchanged between the palette core and
//! the surrounding UI layer. All types are serializable so they can cross
//! an RPC or FFI boundary unchanged.

use serde::{Deserialize, Serialize};

/// A single selectable entry in the command palette.
///
/// Actions are immutable once constructed and are rebuilt from scratch on
/// every fetch; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteAction {
    /// Unique per action: a namespace prefix joined with the record URL.
    pub id: String,

    /// Display label.
    pub name: String,

    /// Localized group label the action is listed under.
    pub section: String,

    /// Sort weight within the palette.
    pub priority: i64,

    /// Relative navigation target (deployment base path already stripped).
    pub url: String,
}

/// Read-only view of a dashboard record returned by the search service.
///
/// The service attaches more fields than these; unknown fields are ignored
/// on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardHit {
    /// Stable dashboard identifier.
    pub uid: String,

    /// Display name.
    pub name: String,

    /// Absolute-path URL as stored by the service.
    pub url: String,
}

/// Entity kinds the search service can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Dashboard,
    Folder,
}

/// A query description sent to the search service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Entity kind filter.
    pub kind: Vec<SearchKind>,

    /// Free-text query, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Identifier allowlist, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<Vec<String>>,

    /// Maximum number of records to return.
    pub limit: usize,
}

impl SearchQuery {
    /// Query dashboards matching a free-text string.
    #[must_use]
    pub fn dashboards_matching(query: &str, limit: usize) -> Self {
        Self {
            kind: vec![SearchKind::Dashboard],
            query: Some(query.to_string()),
            uid: None,
            limit,
        }
    }

    /// Resolve a specific set of dashboard uids to display records.
    #[must_use]
    pub fn dashboards_by_uid(uids: Vec<String>, limit: usize) -> Self {
        Self {
            kind: vec![SearchKind::Dashboard],
            query: None,
            uid: Some(uids),
            limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_text_shape() {
        let query = SearchQuery::dashboards_matching("cpu", 100);
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["kind"][0], "dashboard");
        assert_eq!(json["query"], "cpu");
        assert_eq!(json["limit"], 100);
        assert!(json.get("uid").is_none(), "uid should be omitted when None");
    }

    #[test]
    fn test_search_query_uid_shape() {
        let query = SearchQuery::dashboards_by_uid(vec!["d1".into(), "d2".into()], 5);
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["uid"][0], "d1");
        assert!(
            json.get("query").is_none(),
            "query should be omitted when None"
        );
    }

    #[test]
    fn test_dashboard_hit_ignores_unknown_fields() {
        let hit: DashboardHit = serde_json::from_str(
            r#"{"uid":"abc","name":"CPU","url":"/d/abc/cpu","tags":["infra"],"folder":"ops"}"#,
        )
        .unwrap();
        assert_eq!(hit.uid, "abc");
        assert_eq!(hit.url, "/d/abc/cpu");
    }

    #[test]
    fn test_palette_action_camel_case() {
        let action = PaletteAction {
            id: "go/dashboard/d/abc".to_string(),
            name: "CPU".to_string(),
            section: "Dashboards".to_string(),
            priority: 1,
            url: "/d/abc".to_string(),
        };
        let json = serde_json::to_string(&action).unwrap();
        assert!(json.contains("\"priority\":1"));
    }
}
