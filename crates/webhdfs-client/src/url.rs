//! URL composition.
//!
//! Builds `{scheme}://{addr}{prefix}{path}?{query}` for one failover attempt.
//! The filesystem path is joined without normalization: a trailing separator
//! the caller supplied stays in place, because the server distinguishes
//! `/a/b/` from `/a/b`.

/// Fixed service root of the REST API.
pub const API_PREFIX: &str = "/webhdfs/v1";

/// Composes the full URL for one attempt against one server address.
///
/// `query` is already percent-encoded by the parameter encoder and is used
/// unmodified. An empty `path` targets the service root (non-path
/// operations).
pub fn build_url(scheme: &str, addr: &str, path: &str, query: &str) -> String {
    let mut url = String::with_capacity(
        scheme.len() + 3 + addr.len() + API_PREFIX.len() + path.len() + 1 + query.len(),
    );
    url.push_str(scheme);
    url.push_str("://");
    url.push_str(addr);
    url.push_str(API_PREFIX);
    if !path.is_empty() && !path.starts_with('/') {
        url.push('/');
    }
    url.push_str(&encode_path(path));
    if !query.is_empty() {
        url.push('?');
        url.push_str(query);
    }
    url
}

// Percent-encodes path segments while keeping separators, so paths with
// spaces or reserved characters survive the trip.
fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
