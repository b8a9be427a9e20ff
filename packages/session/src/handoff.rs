//! # Cross-panel session handoff
//!
//! The panels are deployed on separate hosts, so a role-based redirect cannot
//! rely on shared localStorage. The transfer protocol is a full-page redirect
//! carrying the bearer token as the `token` query parameter; the receiving
//! panel extracts it, validates it against the backend, persists the session,
//! and strips the parameter from the address bar.
//!
//! The whole (deliberately weak) mechanism is isolated here so it can be
//! swapped for a signed short-lived exchange token without touching call
//! sites. Tokens use the JWT alphabet, which is URL-safe, so no percent
//! encoding is applied — this matches what the deployed panels expect on the
//! wire.

/// Build the redirect URL carrying the session token to another panel.
pub fn handoff_url(panel_base: &str, token: &str) -> String {
    let separator = if panel_base.contains('?') { '&' } else { '?' };
    format!("{panel_base}{separator}token={token}")
}

/// Extract the `token` parameter from a raw query string.
///
/// Accepts the query with or without its leading `?`. An empty value
/// (`?token=`) reads as absent.
pub fn extract_token(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key == "token" && !value.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    })
}

/// Rebuild a query string with the `token` parameter removed.
///
/// Returns either an empty string or a `?`-prefixed query, ready to append to
/// a pathname.
pub fn strip_token(query: &str) -> String {
    let query = query.strip_prefix('?').unwrap_or(query);
    let rest: Vec<&str> = query
        .split('&')
        .filter(|pair| !pair.is_empty() && pair.split('=').next() != Some("token"))
        .collect();
    if rest.is_empty() {
        String::new()
    } else {
        format!("?{}", rest.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_builder_appends_with_the_right_separator() {
        assert_eq!(
            handoff_url("http://localhost:3001", "abc"),
            "http://localhost:3001?token=abc"
        );
        assert_eq!(
            handoff_url("http://localhost:3001/?lang=fr", "abc"),
            "http://localhost:3001/?lang=fr&token=abc"
        );
    }

    #[test]
    fn extract_finds_the_token_among_other_parameters() {
        assert_eq!(extract_token("?token=abc").as_deref(), Some("abc"));
        assert_eq!(extract_token("token=abc").as_deref(), Some("abc"));
        assert_eq!(
            extract_token("?lang=fr&token=abc&ref=mail").as_deref(),
            Some("abc")
        );
        assert_eq!(extract_token("?lang=fr"), None);
        assert_eq!(extract_token(""), None);
    }

    #[test]
    fn empty_token_value_reads_as_absent() {
        assert_eq!(extract_token("?token="), None);
        assert_eq!(extract_token("?token=&lang=fr"), None);
    }

    #[test]
    fn strip_removes_only_the_token() {
        assert_eq!(strip_token("?token=abc"), "");
        assert_eq!(strip_token("?lang=fr&token=abc"), "?lang=fr");
        assert_eq!(strip_token("?token=abc&ref=mail"), "?ref=mail");
        assert_eq!(strip_token(""), "");
    }

    #[test]
    fn build_then_extract_round_trips() {
        let url = handoff_url("http://localhost:3002/", "eyJhbGciOi.abc.def");
        let query = url.split_once('?').map(|(_, q)| q).unwrap();
        assert_eq!(extract_token(query).as_deref(), Some("eyJhbGciOi.abc.def"));
    }
}
