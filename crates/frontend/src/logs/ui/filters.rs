//! Filter panel: log type, anomaly status and debounced text search.

use leptos::prelude::*;

use crate::logs::pipeline::{distinct_log_types, FilterState};
use crate::logs::ui::state::{apply_filter_change, DashboardState};
use crate::shared::debounce::Debouncer;
use crate::shared::icons::icon;

const SEARCH_DEBOUNCE_MS: u32 = 300;

#[component]
pub fn FilterPanel(state: RwSignal<DashboardState>) -> impl IntoView {
    // The input echoes keystrokes immediately; the filter itself only
    // moves after the debounce window.
    let (search_input, set_search_input) = signal(String::new());
    let debouncer = Debouncer::new(SEARCH_DEBOUNCE_MS);

    let type_options =
        Signal::derive(move || state.with(|s| distinct_log_types(&s.records)));
    let active_count = Signal::derive(move || state.with(|s| s.filter.active_count()));

    let on_search_input = move |ev| {
        let value = event_target_value(&ev);
        set_search_input.set(value.clone());
        debouncer.run(move || {
            apply_filter_change(state, |f| f.search_term = value);
        });
    };

    let on_type_change = move |ev| {
        let value = event_target_value(&ev);
        let selection = if value.is_empty() { None } else { Some(value) };
        apply_filter_change(state, |f| f.log_type = selection);
    };

    let on_status_change = move |ev| {
        let selection = match event_target_value(&ev).as_str() {
            "anomalous" => Some(true),
            "normal" => Some(false),
            _ => None,
        };
        apply_filter_change(state, |f| f.anomaly_status = selection);
    };

    let on_clear = move |_| {
        set_search_input.set(String::new());
        apply_filter_change(state, |f| *f = FilterState::default());
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left">
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_count.get();
                        if count > 0 {
                            view! { <span class="filter-panel__badge">{count}</span> }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </div>
                <div class="filter-panel-header__right">
                    <button
                        class="button button--subtle"
                        on:click=on_clear
                        disabled=move || active_count.get() == 0
                    >
                        "Clear filters"
                    </button>
                </div>
            </div>

            <div class="filter-panel-content">
                <div class="filter-group filter-group--search">
                    <span class="filter-group__icon">{icon("search")}</span>
                    <input
                        type="text"
                        class="filter-group__input"
                        placeholder="Search raw log text..."
                        prop:value=move || search_input.get()
                        on:input=on_search_input
                    />
                </div>

                <div class="filter-group">
                    <label for="filter-type">"Log type"</label>
                    <select
                        id="filter-type"
                        on:change=on_type_change
                        prop:value=move || {
                            state.with(|s| s.filter.log_type.clone().unwrap_or_default())
                        }
                    >
                        <option value="">"All types"</option>
                        {move || {
                            type_options
                                .get()
                                .into_iter()
                                .map(|t| view! { <option value=t.clone()>{t.clone()}</option> })
                                .collect_view()
                        }}
                    </select>
                </div>

                <div class="filter-group">
                    <label for="filter-status">"Status"</label>
                    <select
                        id="filter-status"
                        on:change=on_status_change
                        prop:value=move || {
                            state.with(|s| match s.filter.anomaly_status {
                                Some(true) => "anomalous".to_string(),
                                Some(false) => "normal".to_string(),
                                None => String::new(),
                            })
                        }
                    >
                        <option value="">"All records"</option>
                        <option value="anomalous">"Anomalous only"</option>
                        <option value="normal">"Normal only"</option>
                    </select>
                </div>
            </div>
        </div>
    }
}
