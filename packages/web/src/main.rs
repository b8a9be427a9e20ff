//! Public TuniHire site: jobs grid and sign-in.

use std::sync::Arc;

use dioxus::prelude::*;

use session::{PanelConfig, SessionManager};
use ui::AuthProvider;
use views::{JobsGrid, SignIn};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/jobs-grid")]
    JobsGrid {},
    #[route("/page-signin")]
    SignIn {},
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

/// Redirect `/` to the jobs grid.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::JobsGrid {});
    rsx! {}
}
