//! Dashboard page summarizing recent gateway usage.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::net::types::UsageStat;
use crate::state::session::Session;

/// Requests across all fetched records.
fn total_requests(stats: &[UsageStat]) -> i64 {
    stats.iter().map(|stat| stat.request_count).sum()
}

/// Prompt plus completion tokens across all fetched records.
fn total_tokens(stats: &[UsageStat]) -> i64 {
    stats
        .iter()
        .map(|stat| stat.request_tokens + stat.response_tokens)
        .sum()
}

/// Dashboard page — usage totals and the recent call log.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<Session>();

    // Refetches whenever the session changes (login/logout).
    let stats = LocalResource::new(move || {
        let key = session.state().get().admin_key.unwrap_or_default();
        async move { crate::net::api::fetch_stats(&key).await.unwrap_or_default() }
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Usage"</h1>
            </header>

            <Suspense fallback=move || view! { <p>"Loading usage..."</p> }>
                {move || {
                    stats
                        .get()
                        .map(|records| {
                            view! {
                                <div class="dashboard-page__tiles">
                                    <div class="stat-tile">
                                        <span class="stat-tile__value">{total_requests(&records)}</span>
                                        <span class="stat-tile__label">"Requests"</span>
                                    </div>
                                    <div class="stat-tile">
                                        <span class="stat-tile__value">{total_tokens(&records)}</span>
                                        <span class="stat-tile__label">"Tokens"</span>
                                    </div>
                                    <div class="stat-tile">
                                        <span class="stat-tile__value">{records.len()}</span>
                                        <span class="stat-tile__label">"Records"</span>
                                    </div>
                                </div>
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Time"</th>
                                            <th>"User"</th>
                                            <th>"Model"</th>
                                            <th>"Tokens"</th>
                                            <th>"Duration"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {records
                                            .iter()
                                            .map(|stat| {
                                                view! {
                                                    <tr>
                                                        <td>{stat.timestamp.clone()}</td>
                                                        <td>{stat.user_id.clone()}</td>
                                                        <td>{stat.model_id.clone()}</td>
                                                        <td>{stat.request_tokens + stat.response_tokens}</td>
                                                        <td>{format!("{} ms", stat.duration_ms)}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
