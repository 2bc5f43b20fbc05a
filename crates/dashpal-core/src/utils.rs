/// Strip the deployment base path from an absolute-path URL.
///
/// The prefix is only removed at a path-segment boundary, so a base of
/// `/mon` never eats into `/monitors/d/abc`. URLs outside the base pass
/// through unchanged.
pub(crate) fn strip_base_from_url(app_sub_url: &str, url: &str) -> String {
    let base = app_sub_url.trim_end_matches('/');
    if base.is_empty() {
        return url.to_string();
    }

    if let Some(rest) = url.strip_prefix(base)
        && (rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'))
    {
        if rest.is_empty() {
            return "/".to_string();
        }
        return rest.to_string();
    }

    url.to_string()
}
