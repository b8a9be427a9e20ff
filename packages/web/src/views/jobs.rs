//! Public jobs grid; no session required.

use client::jobs::Job;
use client::{ApiError, AuthClient};
use dioxus::prelude::*;
use session::{PanelConfig, SessionManager};
use ui::{use_panel_config, use_sessions};

async fn fetch_jobs(config: &PanelConfig, sessions: SessionManager) -> Result<Vec<Job>, ApiError> {
    AuthClient::new(config, sessions)?.jobs().await
}

#[component]
pub fn JobsGrid() -> Element {
    let sessions = use_sessions();
    let config = use_panel_config();
    let mut jobs = use_signal(Vec::<Job>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);

    // Load postings on mount; Refresh re-runs the same loader.
    let mut loader = use_resource(move || {
        let sessions = sessions.clone();
        let config = config.clone();
        async move {
            loading.set(true);
            match fetch_jobs(&config, sessions).await {
                Ok(list) => {
                    error.set(None);
                    jobs.set(list);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        }
    });

    rsx! {
        section { class: "jobs-grid",
            header {
                h1 { "Latest Jobs" }
                button { onclick: move |_| loader.restart(), "Refresh" }
            }
            if loading() {
                div { class: "preloader", "Loading..." }
            } else {
                {error().map(|message| rsx! {
                    div { class: "alert alert-danger", "Failed to load jobs: {message}" }
                })}
                ul {
                    for job in jobs() {
                        li { key: "{job.id}",
                            h3 { "{job.title}" }
                            {job.location.as_ref().map(|location| rsx! {
                                span { class: "job-location", "{location}" }
                            })}
                            p { "{job.description}" }
                        }
                    }
                }
            }
        }
    }
}
