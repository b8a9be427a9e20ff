//! Role-gated page wrapper.

use dioxus::prelude::*;
use session::{Role, User};

use crate::auth::{use_panel_config, use_sessions};
use crate::navigate;

/// Rendering state of a guarded page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Loading,
    Authorized,
    /// A redirect has been issued; nothing renders.
    Unauthorized,
}

/// Outcome of the role check for a guarded page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Authorized,
    /// No usable session: full-page redirect to the public sign-in page.
    SignIn,
    /// Admins leave for the admin host.
    AdminPanel,
    /// HR and candidates stay on this panel and move to a fallback path.
    InApp,
    /// Unknown roles return to the public site root.
    FrontSite,
}

/// Classify a session against a page's allowed roles.
///
/// Membership uses the same raw string comparison as
/// `SessionManager::has_user_role`; only the redirect special cases below
/// classify case-insensitively through [`Role::parse`].
pub fn decide(user: Option<&User>, allowed_roles: &[String]) -> GuardDecision {
    let Some(user) = user else {
        return GuardDecision::SignIn;
    };
    if allowed_roles.iter().any(|role| *role == user.role) {
        return GuardDecision::Authorized;
    }
    match user.role() {
        Role::Admin => GuardDecision::AdminPanel,
        Role::Hr | Role::Candidate => GuardDecision::InApp,
        Role::Other(_) => GuardDecision::FrontSite,
    }
}

/// Renders its children only when the persisted session carries one of
/// `allowed_roles`.
///
/// States: loading → authorized (children render) or unauthorized (a redirect
/// has been issued). The check reads only the local session; no backend call
/// happens before the redirect, and a token with a corrupted user document is
/// cleared before leaving for sign-in.
///
/// In-app redirects surface through `on_redirect_in_app` so the hosting panel
/// can route internally; without a handler the fallback is a full-page
/// navigation to `redirect_to`.
#[component]
pub fn RouteGuard(
    allowed_roles: Vec<String>,
    #[props(default = String::from("/"))] redirect_to: String,
    on_redirect_in_app: Option<EventHandler<String>>,
    children: Element,
) -> Element {
    let sessions = use_sessions();
    let config = use_panel_config();
    let mut state = use_signal(|| GuardState::Loading);

    use_effect(move || {
        let user = sessions.current_user();
        if user.is_none() && sessions.token().is_some() {
            // corrupted or torn storage: discard it before leaving
            sessions.clear_user_data();
        }
        match decide(user.as_ref(), &allowed_roles) {
            GuardDecision::Authorized => state.set(GuardState::Authorized),
            GuardDecision::SignIn => {
                state.set(GuardState::Unauthorized);
                navigate::redirect_external(&format!(
                    "{}/page-signin",
                    config.panels.front_url
                ));
            }
            GuardDecision::AdminPanel => {
                state.set(GuardState::Unauthorized);
                navigate::redirect_external(&format!("{}/", config.panels.admin_url));
            }
            GuardDecision::InApp => {
                state.set(GuardState::Unauthorized);
                if let Some(handler) = &on_redirect_in_app {
                    handler.call(redirect_to.clone());
                } else {
                    navigate::redirect_external(&redirect_to);
                }
            }
            GuardDecision::FrontSite => {
                state.set(GuardState::Unauthorized);
                navigate::redirect_external(&format!("{}/", config.panels.front_url));
            }
        }
    });

    match state() {
        GuardState::Loading => rsx! {
            div { class: "preloader", "Loading..." }
        },
        GuardState::Authorized => rsx! {
            {children}
        },
        GuardState::Unauthorized => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use session::User;

    fn roles(list: &[&str]) -> Vec<String> {
        list.iter().map(|role| role.to_string()).collect()
    }

    #[test]
    fn no_session_goes_to_sign_in() {
        assert_eq!(decide(None, &roles(&["HR"])), GuardDecision::SignIn);
    }

    #[test]
    fn matching_role_is_authorized() {
        let user = User::new("x@y.com", "HR");
        assert_eq!(
            decide(Some(&user), &roles(&["HR", "candidate"])),
            GuardDecision::Authorized
        );
    }

    #[test]
    fn membership_is_case_sensitive() {
        // "hr" is not in the allowed list verbatim, so the user falls through
        // to the case-insensitive redirect rules and stays in-app
        let user = User::new("x@y.com", "hr");
        assert_eq!(decide(Some(&user), &roles(&["HR"])), GuardDecision::InApp);
    }

    #[test]
    fn hr_on_a_candidate_page_stays_in_app() {
        let user = User::new("x@y.com", "HR");
        assert_eq!(
            decide(Some(&user), &roles(&["candidate"])),
            GuardDecision::InApp
        );
    }

    #[test]
    fn admins_leave_for_the_admin_host() {
        let user = User::new("a@y.com", "admin");
        assert_eq!(
            decide(Some(&user), &roles(&["HR"])),
            GuardDecision::AdminPanel
        );
    }

    #[test]
    fn unknown_roles_return_to_the_public_site() {
        let user = User::new("m@y.com", "moderator");
        assert_eq!(
            decide(Some(&user), &roles(&["HR"])),
            GuardDecision::FrontSite
        );
    }
}
