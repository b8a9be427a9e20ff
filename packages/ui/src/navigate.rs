//! Full-page navigation and address-bar helpers.

/// Navigate the whole page, including to another host.
pub fn redirect_external(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                tracing::error!("redirect to {url} failed: {e:?}");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::info!("external redirect requested: {url}");
}

/// Read a handoff token from the current URL and strip it from the address
/// bar. Returns `None` when no token parameter is present.
#[cfg(target_arch = "wasm32")]
pub fn take_handoff_token() -> Option<String> {
    let window = web_sys::window()?;
    let location = window.location();
    let query = location.search().ok()?;
    let token = session::handoff::extract_token(&query)?;

    // scrub the token from the visible URL; the session itself is only
    // persisted after the token validates
    let path = location.pathname().ok().unwrap_or_else(|| "/".to_string());
    let clean = format!("{path}{}", session::handoff::strip_token(&query));
    if let Ok(history) = window.history() {
        if let Err(e) =
            history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&clean))
        {
            tracing::warn!("failed to strip handoff token from URL: {e:?}");
        }
    }
    Some(token)
}

/// Off the web there is no address bar to hand a token through.
#[cfg(not(target_arch = "wasm32"))]
pub fn take_handoff_token() -> Option<String> {
    None
}
