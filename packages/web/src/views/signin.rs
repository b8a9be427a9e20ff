//! Sign-in page; routes signed-in users to the panel their role belongs to.

use client::AuthClient;
use dioxus::prelude::*;
use session::config::PanelUrls;
use session::{handoff, Role};
use ui::{use_auth, use_panel_config, use_sessions, AuthState};

use crate::Route;

/// Where a freshly signed-in role gets handed off to; `None` stays on this
/// panel.
fn handoff_destination(role: &Role, panels: &PanelUrls, token: &str) -> Option<String> {
    match role {
        Role::Admin => Some(handoff::handoff_url(&panels.admin_url, token)),
        Role::Hr | Role::Candidate => Some(handoff::handoff_url(&panels.company_url, token)),
        Role::Other(_) => None,
    }
}

#[component]
pub fn SignIn() -> Element {
    let mut auth = use_auth();
    let sessions = use_sessions();
    let config = use_panel_config();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let sessions = sessions.clone();
        let config = config.clone();
        spawn(async move {
            error.set(None);

            let entered_email = email().trim().to_string();
            let entered_password = password();
            if entered_email.is_empty() {
                error.set(Some("Please enter your email".to_string()));
                return;
            }
            if entered_password.is_empty() {
                error.set(Some("Please enter your password".to_string()));
                return;
            }

            loading.set(true);
            let client = match AuthClient::new(&config, sessions.clone()) {
                Ok(client) => client,
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                    return;
                }
            };
            match client.sign_in(&entered_email, &entered_password).await {
                Ok(signed_in) => {
                    if !sessions.save_user_data(&signed_in.user, &signed_in.token) {
                        loading.set(false);
                        error.set(Some("Could not persist the session".to_string()));
                        return;
                    }
                    auth.set(AuthState {
                        user: Some(signed_in.user.clone()),
                        loading: false,
                        online: true,
                    });
                    // HR, candidates and admins live on other hosts; hand the
                    // token over in the redirect
                    match handoff_destination(
                        &signed_in.user.role(),
                        &config.panels,
                        &signed_in.token,
                    ) {
                        Some(url) => ui::redirect_external(&url),
                        None => {
                            // staying on this panel, so the form must be
                            // usable again after a back-navigation
                            loading.set(false);
                            nav.replace(Route::JobsGrid {});
                        }
                    }
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    rsx! {
        div { class: "page-signin",
            h1 { "Member Login" }
            {error().map(|message| rsx! {
                div { class: "alert alert-danger", "{message}" }
            })}
            form { onsubmit: handle_submit,
                input {
                    r#type: "email",
                    placeholder: "Email address",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    disabled: loading(),
                    if loading() {
                        "Signing in..."
                    } else {
                        "Sign in"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn privileged_roles_leave_with_the_token() {
        let panels = PanelUrls::default();
        assert_eq!(
            handoff_destination(&Role::Admin, &panels, "abc").as_deref(),
            Some("http://localhost:3002?token=abc")
        );
        assert_eq!(
            handoff_destination(&Role::Hr, &panels, "abc").as_deref(),
            Some("http://localhost:3001?token=abc")
        );
        assert_eq!(
            handoff_destination(&Role::Candidate, &panels, "abc").as_deref(),
            Some("http://localhost:3001?token=abc")
        );
    }

    #[test]
    fn unclassified_roles_stay_on_this_panel() {
        let panels = PanelUrls::default();
        let role = Role::Other("moderator".to_string());
        assert_eq!(handoff_destination(&role, &panels, "abc"), None);
    }
}
