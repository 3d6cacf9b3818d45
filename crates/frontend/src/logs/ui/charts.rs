//! Lightweight charts rendered with CSS bars and inline SVG.

use leptos::prelude::*;

use crate::logs::stats::{anomaly_split, log_type_counts};
use crate::logs::ui::state::DashboardState;

/// Horizontal bars for the ten biggest log type buckets.
#[component]
pub fn LogTypeBars(state: RwSignal<DashboardState>) -> impl IntoView {
    let counts = Signal::derive(move || state.with(|s| log_type_counts(&s.records)));

    view! {
        <div class="chart-card">
            <h3 class="chart-card__title">"Records by log type"</h3>
            {move || {
                let counts = counts.get();
                if counts.is_empty() {
                    return view! { <p class="chart-card__empty">"No data yet"</p> }.into_any();
                }
                let max = counts.iter().map(|(_, n)| *n).max().unwrap_or(1);
                let bars = counts
                    .into_iter()
                    .map(|(log_type, count)| {
                        let width = count * 100 / max;
                        view! {
                            <div class="bar-row">
                                <span class="bar-row__label" title=log_type.clone()>
                                    {log_type.clone()}
                                </span>
                                <div class="bar-row__track">
                                    <div
                                        class="bar-row__fill"
                                        style=format!("width: {}%", width)
                                    ></div>
                                </div>
                                <span class="bar-row__count">{count}</span>
                            </div>
                        }
                    })
                    .collect_view();
                view! { <div class="bar-rows">{bars}</div> }.into_any()
            }}
        </div>
    }
}

const DONUT_CIRCUMFERENCE: f64 = 282.743;

/// Normal-versus-anomalous donut with the anomaly share in the middle.
#[component]
pub fn AnomalyDonut(state: RwSignal<DashboardState>) -> impl IntoView {
    let split = Signal::derive(move || state.with(|s| anomaly_split(&s.records)));

    view! {
        <div class="chart-card chart-card--donut">
            <h3 class="chart-card__title">"Anomaly share"</h3>
            {move || {
                let (normal, anomalous) = split.get();
                let total = normal + anomalous;
                if total == 0 {
                    return view! { <p class="chart-card__empty">"No data yet"</p> }.into_any();
                }
                let fraction = anomalous as f64 / total as f64;
                let dash = fraction * DONUT_CIRCUMFERENCE;
                view! {
                    <div class="donut">
                        <svg viewBox="0 0 120 120" class="donut__svg">
                            <circle cx="60" cy="60" r="45" class="donut__ring"></circle>
                            <circle
                                cx="60" cy="60" r="45"
                                class="donut__segment"
                                stroke-dasharray=format!("{:.2} {:.2}", dash, DONUT_CIRCUMFERENCE)
                                transform="rotate(-90 60 60)"
                            ></circle>
                            <text x="60" y="66" text-anchor="middle" class="donut__label">
                                {format!("{:.0}%", fraction * 100.0)}
                            </text>
                        </svg>
                        <div class="donut__legend">
                            <span class="donut__legend-item donut__legend-item--ok">
                                {format!("Normal: {}", normal)}
                            </span>
                            <span class="donut__legend-item donut__legend-item--alert">
                                {format!("Anomalous: {}", anomalous)}
                            </span>
                        </div>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
