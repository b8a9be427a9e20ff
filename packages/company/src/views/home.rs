//! Panel landing page, open to both HR users and candidates.

use dioxus::prelude::*;
use ui::{use_auth, LogoutButton, RouteGuard};

use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        RouteGuard {
            allowed_roles: vec!["HR".to_string(), "candidate".to_string()],
            Welcome {}
        }
    }
}

#[component]
fn Welcome() -> Element {
    let auth = use_auth();
    let name = auth()
        .user
        .map(|user| user.display_name().to_string())
        .unwrap_or_default();

    rsx! {
        section { class: "panel-home",
            header {
                h1 { "Welcome back, {name}" }
                LogoutButton {}
            }
            nav {
                Link { to: Route::HrDashboard {}, "HR dashboard" }
            }
        }
    }
}
