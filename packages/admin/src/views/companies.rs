//! Registered companies, pending first.

use client::companies::Company;
use client::{ApiError, AuthClient};
use dioxus::prelude::*;
use session::{PanelConfig, SessionManager};
use ui::{use_panel_config, use_sessions, LogoutButton, RouteGuard};

async fn fetch_companies(
    config: &PanelConfig,
    sessions: SessionManager,
) -> Result<Vec<Company>, ApiError> {
    let mut companies = AuthClient::new(config, sessions)?.companies().await?;
    companies.sort_by_key(|company| company.status != "Pending");
    Ok(companies)
}

#[component]
pub fn Companies() -> Element {
    rsx! {
        RouteGuard {
            allowed_roles: vec!["admin".to_string()],
            CompanyList {}
        }
    }
}

#[component]
fn CompanyList() -> Element {
    let sessions = use_sessions();
    let config = use_panel_config();
    let mut companies = use_signal(Vec::<Company>::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| true);

    let mut loader = use_resource(move || {
        let sessions = sessions.clone();
        let config = config.clone();
        async move {
            loading.set(true);
            match fetch_companies(&config, sessions).await {
                Ok(list) => {
                    error.set(None);
                    companies.set(list);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        }
    });

    rsx! {
        section { class: "admin-companies",
            header {
                h1 { "Companies" }
                button { onclick: move |_| loader.restart(), "Refresh" }
                LogoutButton {}
            }
            if loading() {
                div { class: "preloader", "Loading..." }
            } else {
                {error().map(|message| rsx! {
                    div { class: "alert alert-danger", "Failed to load companies: {message}" }
                })}
                table {
                    thead {
                        tr {
                            th { "Name" }
                            th { "Category" }
                            th { "Status" }
                        }
                    }
                    tbody {
                        for company in companies() {
                            tr { key: "{company.id}",
                                td { "{company.name}" }
                                td { {company.category.clone().unwrap_or_default()} }
                                td { "{company.status}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
