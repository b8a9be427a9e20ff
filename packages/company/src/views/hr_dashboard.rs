//! HR dashboard: applications received across the HR user's postings,
//! bucketed by status on the client.

use client::jobs::Application;
use client::{join_independent, ApiError, AuthClient};
use dioxus::prelude::*;
use session::{PanelConfig, SessionManager};
use ui::{use_panel_config, use_sessions, RouteGuard};

use crate::Route;

/// Per-status counts across every posting, plus how many postings could not
/// be loaded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ApplicationStats {
    pub pending: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub unavailable: usize,
}

/// Reduce fan-out results into dashboard counts.
///
/// A posting whose applications failed to load counts as unavailable instead
/// of failing the whole dashboard.
fn summarize(batches: &[Result<Vec<Application>, ApiError>]) -> ApplicationStats {
    let mut stats = ApplicationStats::default();
    for batch in batches {
        match batch {
            Ok(applications) => {
                for application in applications {
                    match application.status.as_str() {
                        "Accepted" => stats.accepted += 1,
                        "Rejected" => stats.rejected += 1,
                        _ => stats.pending += 1,
                    }
                }
            }
            Err(_) => stats.unavailable += 1,
        }
    }
    stats
}

/// The signed-in user's backend id. `None` for a stored document without an
/// `_id`, which must not degrade into a request for an empty id.
fn current_hr_id(sessions: &SessionManager) -> Option<String> {
    sessions.current_user().and_then(|user| user.id)
}

async fn load_stats(
    config: &PanelConfig,
    sessions: SessionManager,
    hr_id: &str,
) -> Result<(usize, ApplicationStats), ApiError> {
    let client = AuthClient::new(config, sessions)?;
    let jobs = client.jobs_for_hr(&hr_id).await?;
    let batches =
        join_independent(jobs.iter().map(|job| client.applications_for_job(&job.id))).await;
    Ok((jobs.len(), summarize(&batches)))
}

#[component]
pub fn HrDashboard() -> Element {
    let nav = use_navigator();
    rsx! {
        RouteGuard {
            allowed_roles: vec!["HR".to_string()],
            redirect_to: "/".to_string(),
            on_redirect_in_app: move |_path: String| {
                nav.replace(Route::Home {});
            },
            Stats {}
        }
    }
}

#[component]
fn Stats() -> Element {
    let sessions = use_sessions();
    let config = use_panel_config();
    let mut job_count = use_signal(|| 0usize);
    let mut stats = use_signal(ApplicationStats::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);

    let mut loader = use_resource(move || {
        let sessions = sessions.clone();
        let config = config.clone();
        async move {
            loading.set(true);
            match current_hr_id(&sessions) {
                Some(hr_id) => match load_stats(&config, sessions, &hr_id).await {
                    Ok((jobs, summary)) => {
                        error.set(None);
                        job_count.set(jobs);
                        stats.set(summary);
                    }
                    Err(e) => error.set(Some(e.to_string())),
                },
                None => error.set(Some(
                    "Your account record is missing its id; sign in again".to_string(),
                )),
            }
            loading.set(false);
        }
    });

    rsx! {
        section { class: "hr-dashboard",
            header {
                h1 { "Applications overview" }
                button { onclick: move |_| loader.restart(), "Refresh" }
            }
            if loading() {
                div { class: "preloader", "Loading..." }
            } else {
                {error().map(|message| rsx! {
                    div { class: "alert alert-danger", "Failed to load dashboard: {message}" }
                })}
                ul { class: "stats",
                    li { "Postings: {job_count}" }
                    li { "Pending: {stats().pending}" }
                    li { "Accepted: {stats().accepted}" }
                    li { "Rejected: {stats().rejected}" }
                    if stats().unavailable > 0 {
                        li { class: "stats-warning",
                            "{stats().unavailable} postings could not be loaded"
                        }
                    }
                }
            }
        }
    }
}
