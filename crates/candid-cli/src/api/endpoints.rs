//! API endpoint URL builders

/// Build the organization lookup URL for one identifier
///
/// The identifier is percent-encoded as the final path segment, so a stray
/// `/` or space stays inside that segment. `.` and `..` are left as they are
/// and get resolved against the base path when the URL is parsed.
pub fn organization_url(base_url: &str, ein: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(ein)
    )
}
