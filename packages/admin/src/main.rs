//! Admin panel: company moderation, admin-only.

use std::sync::Arc;

use dioxus::prelude::*;

use session::{PanelConfig, SessionManager};
use ui::AuthProvider;
use views::Companies;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Companies {},
}

fn main() {
    dioxus::launch(App);
}

fn session_manager() -> SessionManager {
    #[cfg(target_arch = "wasm32")]
    {
        SessionManager::new(Arc::new(session::LocalStorage::new()))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        SessionManager::new(Arc::new(session::MemoryStore::new()))
    }
}

#[component]
fn App() -> Element {
    rsx! {
        AuthProvider {
            config: PanelConfig::default(),
            sessions: session_manager(),
            Router::<Route> {}
        }
    }
}
