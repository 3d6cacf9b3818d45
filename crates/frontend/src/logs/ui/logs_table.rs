//! Paged table of normalized log records.

use contracts::logs::LogRecord;
use leptos::prelude::*;
use thaw::*;

use crate::logs::ui::state::{go_to_page, DashboardState};
use crate::shared::icons::icon;
use crate::shared::log_line::parse_log_line;

#[component]
pub fn LogsTable(state: RwSignal<DashboardState>) -> impl IntoView {
    view! {
        <div class="table-wrapper">
            <Show
                when=move || state.with(|s| s.filtered_count > 0)
                fallback=move || view! {
                    <div class="empty-state">
                        {icon("alert-triangle")}
                        <p class="empty-state__title">"No log records"</p>
                        <p class="empty-state__hint">
                            {move || state.with(|s| {
                                if s.records.is_empty() {
                                    "Nothing has been ingested yet."
                                } else {
                                    "No records match the current filters."
                                }
                            })}
                        </p>
                    </div>
                }
            >
                <Table attr:id="logs-table">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"#"</TableHeaderCell>
                            <TableHeaderCell>"Timestamp"</TableHeaderCell>
                            <TableHeaderCell>"Component"</TableHeaderCell>
                            <TableHeaderCell>"Message"</TableHeaderCell>
                            <TableHeaderCell>"IP address"</TableHeaderCell>
                            <TableHeaderCell>"Type"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || state.with(|s| s.page_items.clone())
                            key=|record| record.line_id
                            children=move |record| view! { <LogRow record=record/> }
                        />
                    </TableBody>
                </Table>
            </Show>

            <Pagination state=state/>
        </div>
    }
}

#[component]
fn LogRow(record: LogRecord) -> impl IntoView {
    let parsed = parse_log_line(&record.raw_line);
    let row_class = if record.anomaly_detected {
        "log-row log-row--anomaly"
    } else {
        "log-row"
    };

    // Risk numbers only mean something for anomalous records.
    let risk_detail = record.anomaly_detected.then(|| {
        view! {
            <div class="risk-detail">
                <span class="risk-detail__item">
                    {format!("failures last hour: {}", record.auth_failures_last_1h)}
                </span>
                <span class="risk-detail__item">
                    {format!("since last failure: {}s", record.time_since_last_failure)}
                </span>
                <span class="risk-detail__item">
                    {format!(
                        "root attempt: {}",
                        if record.is_root_attempt { "yes" } else { "no" }
                    )}
                </span>
                <span class="risk-detail__item">
                    {format!("users attempted: {}", record.unique_users_attempted)}
                </span>
            </div>
        }
    });

    view! {
        <TableRow attr:class=row_class>
            <TableCell>
                <TableCellLayout>{record.line_id}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{parsed.timestamp}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    <span class="log-row__component">{parsed.component}</span>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    <div class="log-row__message">{parsed.message}</div>
                    {risk_detail}
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    <span class="log-row__ip">{record.ip_address}</span>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>{record.log_type}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout>
                    {if record.anomaly_detected {
                        view! { <span class="badge badge--alert">"Anomaly"</span> }.into_any()
                    } else {
                        view! { <span class="badge badge--ok">"Normal"</span> }.into_any()
                    }}
                </TableCellLayout>
            </TableCell>
        </TableRow>
    }
}

/// First / previous / next / last controls around a page indicator.
/// Pages are 1-based and the page size is fixed.
#[component]
fn Pagination(state: RwSignal<DashboardState>) -> impl IntoView {
    let page = Signal::derive(move || state.with(|s| s.page));
    let total_pages = Signal::derive(move || state.with(|s| s.total_pages));
    let total_count = Signal::derive(move || state.with(|s| s.filtered_count));

    let at_first = move || page.get() <= 1;
    let at_last = move || page.get() >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| go_to_page(state, 1)
                disabled=at_first
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go_to_page(state, page.get_untracked().saturating_sub(1))
                disabled=at_first
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!(
                    "{} / {} ({})",
                    page.get(),
                    total_pages.get().max(1),
                    total_count.get()
                )}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| go_to_page(state, page.get_untracked() + 1)
                disabled=at_last
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go_to_page(state, total_pages.get_untracked())
                disabled=at_last
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}
