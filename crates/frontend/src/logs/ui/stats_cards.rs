//! Headline stat cards above the charts.

use leptos::prelude::*;

use crate::logs::stats::dashboard_stats;
use crate::logs::ui::state::DashboardState;

#[component]
pub fn StatsCards(state: RwSignal<DashboardState>) -> impl IntoView {
    let stats = Signal::derive(move || state.with(|s| dashboard_stats(&s.records)));

    view! {
        <div class="stats-row">
            <div class="stat-card">
                <span class="stat-card__label">"Total records"</span>
                <span class="stat-card__value">{move || stats.get().total}</span>
            </div>
            <div class="stat-card stat-card--alert">
                <span class="stat-card__label">"Anomalies"</span>
                <span class="stat-card__value">{move || stats.get().anomalies}</span>
            </div>
            <div class="stat-card">
                <span class="stat-card__label">"Anomaly rate"</span>
                <span class="stat-card__value">
                    {move || format!("{:.2}%", stats.get().anomaly_rate)}
                </span>
            </div>
            <div class="stat-card">
                <span class="stat-card__label">"Latest entry"</span>
                <span class="stat-card__value stat-card__value--small">
                    {move || stats.get().last_entry.unwrap_or_else(|| "-".to_string())}
                </span>
            </div>
        </div>
    }
}
