//! Authentication context and hooks for the panels.

use client::{ApiError, AuthClient};
use dioxus::prelude::*;
use session::{PanelConfig, SessionManager, User};

use crate::navigate;

/// How often a signed-in panel re-checks its token against the backend.
const REVALIDATE_SECS: u64 = 30;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    /// Whether the backend accepted the last validation call.
    pub online: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            online: false,
        }
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user signs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// The session manager provided by [`AuthProvider`].
pub fn use_sessions() -> SessionManager {
    use_context::<SessionManager>()
}

/// The panel configuration provided by [`AuthProvider`].
pub fn use_panel_config() -> PanelConfig {
    use_context::<PanelConfig>()
}

/// Provider component that manages authentication state.
/// Wrap a panel's router with this component to enable authentication.
///
/// On mount, a handoff token in the URL wins over whatever is persisted: it is
/// validated against the backend, saved, and stripped from the address bar.
/// Otherwise the persisted session is restored as-is (no backend call).
#[component]
pub fn AuthProvider(config: PanelConfig, sessions: SessionManager, children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);
    use_context_provider(|| sessions.clone());
    use_context_provider(|| config.clone());
    use_context_provider(|| auth_state);

    // Restore the session on mount
    let restore_sessions = sessions.clone();
    let restore_config = config.clone();
    let _ = use_resource(move || {
        let sessions = restore_sessions.clone();
        let config = restore_config.clone();
        async move {
            if let Some(token) = navigate::take_handoff_token() {
                match client::users::fetch_profile(&config, &token).await {
                    Ok(user) => {
                        if sessions.save_user_data(&user, &token) {
                            auth_state.set(AuthState {
                                user: Some(user),
                                loading: false,
                                online: true,
                            });
                            return;
                        }
                        tracing::error!("failed to persist handoff session");
                    }
                    Err(e) => tracing::warn!("handoff token rejected: {e}"),
                }
                // fall back to whatever is already persisted
            }
            let user = sessions.current_user();
            auth_state.set(AuthState {
                user,
                loading: false,
                online: false,
            });
        }
    });

    // Periodic token revalidation. Only a definitive rejection ends the
    // session; a connectivity failure just flips the online flag.
    let loop_sessions = sessions.clone();
    let loop_config = config.clone();
    use_effect(move || {
        let sessions = loop_sessions.clone();
        let config = loop_config.clone();
        spawn(async move {
            loop {
                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::sleep(std::time::Duration::from_secs(REVALIDATE_SECS)).await;
                #[cfg(not(target_arch = "wasm32"))]
                tokio::time::sleep(std::time::Duration::from_secs(REVALIDATE_SECS)).await;

                // Don't check while the initial load is still in progress
                if auth_state().loading {
                    continue;
                }
                if sessions.token().is_none() {
                    continue;
                }
                let client = match AuthClient::new(&config, sessions.clone()) {
                    Ok(client) => client,
                    Err(e) => {
                        tracing::error!("failed to build revalidation client: {e}");
                        continue;
                    }
                };
                match client.validate_token().await {
                    Ok(true) => {
                        if !auth_state().online {
                            let current = auth_state();
                            auth_state.set(AuthState {
                                online: true,
                                ..current
                            });
                        }
                    }
                    Ok(false) => {
                        sessions.clear_user_data();
                        auth_state.set(AuthState {
                            user: None,
                            loading: false,
                            online: true,
                        });
                    }
                    Err(ApiError::AuthRejected(_)) => {
                        // the client already cleared the store
                        auth_state.set(AuthState {
                            user: None,
                            loading: false,
                            online: true,
                        });
                    }
                    Err(ApiError::Network(e)) => {
                        tracing::debug!("connectivity check failed: {e}");
                        if auth_state().online {
                            let current = auth_state();
                            auth_state.set(AuthState {
                                online: false,
                                ..current
                            });
                        }
                    }
                    Err(e) => tracing::warn!("token validation failed: {e}"),
                }
            }
        });
    });

    rsx! {
        {children}
    }
}

/// Button that signs the current user out of every layer: backend token,
/// persisted session, in-memory state, then a full-page return to sign-in.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth_state = use_auth();
    let sessions = use_sessions();
    let config = use_panel_config();

    let onclick = move |_| {
        let sessions = sessions.clone();
        let config = config.clone();
        async move {
            match AuthClient::new(&config, sessions.clone()) {
                Ok(client) => {
                    if let Err(e) = client.sign_out().await {
                        tracing::warn!("sign-out request failed: {e}");
                    }
                }
                Err(e) => tracing::error!("failed to build sign-out client: {e}"),
            }
            sessions.clear_user_data();
            let online = auth_state().online;
            auth_state.set(AuthState {
                user: None,
                loading: false,
                online,
            });
            navigate::redirect_external(&format!("{}/page-signin", config.panels.front_url));
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
