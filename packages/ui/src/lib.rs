//! Shared UI layer for the TuniHire panels: authentication context, the
//! role-gated page wrapper, and full-page navigation helpers.

mod auth;
mod guard;
mod navigate;

pub use auth::{use_auth, use_panel_config, use_sessions, AuthProvider, AuthState, LogoutButton};
pub use guard::{decide, GuardDecision, GuardState, RouteGuard};
pub use navigate::{redirect_external, take_handoff_token};
