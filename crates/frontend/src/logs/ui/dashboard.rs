//! Dashboard page: data loading, polling and widget layout.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use contracts::logs::{dedup_suspicious_ips, normalize_batch};

use crate::logs::api;
use crate::logs::csv;
use crate::logs::pipeline;
use crate::logs::ui::charts::{AnomalyDonut, LogTypeBars};
use crate::logs::ui::filters::FilterPanel;
use crate::logs::ui::logs_table::LogsTable;
use crate::logs::ui::state::{create_state, refresh_view, DashboardState};
use crate::logs::ui::stats_cards::StatsCards;
use crate::logs::ui::suspicious_ips::SuspiciousIpsTable;
use crate::shared::export::download_text;
use crate::shared::icons::icon;
use crate::shared::poll::PollTask;
use crate::system::auth::store::use_session;

const POLL_INTERVAL_MS: u32 = 10_000;

/// Fetches the summary and replaces the stored set wholesale. A fetch
/// failure keeps the previous data on screen and only raises the error
/// banner.
async fn load_summary(
    state: RwSignal<DashboardState>,
    admin_id: String,
    token: Arc<AtomicBool>,
) {
    state.update(|s| s.is_loading = true);

    let result = api::fetch_logs_summary(&admin_id, None).await;
    if token.load(Ordering::Relaxed) {
        // The view is gone; this response must not touch state.
        return;
    }

    match result {
        Ok(summary) => {
            state.update(|s| {
                pipeline::apply_fetch(&mut s.records, normalize_batch(&summary.logs));
                s.suspicious = dedup_suspicious_ips(&summary.suspicious_ip);
                s.error = None;
                s.is_loading = false;
                s.has_loaded = true;
            });
            refresh_view(state);
        }
        Err(e) => {
            log::warn!("logs summary fetch failed: {}", e);
            state.update(|s| {
                s.error = Some(e.to_string());
                s.is_loading = false;
                s.has_loaded = true;
            });
        }
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let state = create_state();

    let admin_id = session.admin_id().unwrap_or_default();

    // Immediate load plus a 10 second refresh cycle for the lifetime of
    // the page.
    let poll = PollTask::start(POLL_INTERVAL_MS, {
        let admin_id = admin_id.clone();
        move |token| load_summary(state, admin_id.clone(), token)
    });
    let poll_token = poll.token();
    on_cleanup(move || poll.stop());

    let on_refresh = {
        let admin_id = admin_id.clone();
        move |_| {
            let token = Arc::clone(&poll_token);
            spawn_local(load_summary(state, admin_id.clone(), token));
        }
    };

    // Exports the filtered set across all pages, not just the visible one.
    let on_export = move |_| {
        let content = state.with_untracked(|s| {
            let mut filtered = pipeline::filter(&s.records, &s.filter);
            pipeline::sort_by_line_id(&mut filtered);
            csv::to_csv(&filtered)
        });
        if let Err(e) = download_text(&content, "logs.csv", "text/csv;charset=utf-8;") {
            log::error!("CSV export failed: {}", e);
        }
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Security dashboard"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=on_refresh
                        disabled=Signal::derive(move || state.with(|s| s.is_loading))
                    >
                        {icon("refresh")}
                        {move || if state.with(|s| s.is_loading) { " Refreshing..." } else { " Refresh" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_export
                        disabled=Signal::derive(move || state.with(|s| s.records.is_empty()))
                    >
                        {icon("download")}
                        " Export CSV"
                    </Button>
                </div>
            </div>

            {move || {
                state.with(|s| s.error.clone()).map(|err| view! {
                    <div class="alert alert--error">
                        {icon("alert-triangle")}
                        <span>{err}</span>
                    </div>
                })
            }}

            <Show
                when=move || state.with(|s| s.has_loaded)
                fallback=|| view! { <div class="page__loading">"Loading log data..."</div> }
            >
                <div class="page__content">
                    <StatsCards state=state/>

                    <div class="charts-row">
                        <LogTypeBars state=state/>
                        <AnomalyDonut state=state/>
                    </div>

                    <FilterPanel state=state/>
                    <LogsTable state=state/>

                    <h2 class="section-title">"Suspicious sources"</h2>
                    <SuspiciousIpsTable state=state/>
                </div>
            </Show>
        </div>
    }
}
