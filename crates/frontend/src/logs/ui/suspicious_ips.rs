//! Table of distinct anomalous sources with the warning-email action.

use std::collections::{HashMap, HashSet};

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::logs::api;
use crate::logs::pipeline::warning_line;
use crate::logs::ui::state::DashboardState;
use crate::shared::icons::icon;

/// Outcome of the last send attempt for one source, kept until the
/// viewer dismisses it.
#[derive(Debug, Clone, PartialEq)]
enum Notice {
    Sent(String),
    Failed(String),
}

#[component]
pub fn SuspiciousIpsTable(state: RwSignal<DashboardState>) -> impl IntoView {
    // Busy flags are per source, so one slow send never blocks the
    // button on another row.
    let busy = RwSignal::new(HashSet::<String>::new());
    let notices = RwSignal::new(HashMap::<String, Notice>::new());

    let send_for = move |ip: String, device_id: Option<String>| {
        if busy.with_untracked(|b| b.contains(&ip)) {
            return;
        }

        let Some(device_id) = device_id.filter(|d| !d.trim().is_empty()) else {
            notices.update(|n| {
                n.insert(
                    ip.clone(),
                    Notice::Failed("No device is linked to this source".to_string()),
                );
            });
            return;
        };

        busy.update(|b| {
            b.insert(ip.clone());
        });
        let log_line = state.with_untracked(|s| warning_line(&s.records, &ip));

        spawn_local(async move {
            let outcome = api::send_warning(&device_id, &log_line).await;
            busy.update(|b| {
                b.remove(&ip);
            });
            notices.update(|n| {
                n.insert(
                    ip,
                    match outcome {
                        Ok(message) => Notice::Sent(message),
                        Err(e) => Notice::Failed(e.to_string()),
                    },
                );
            });
        });
    };

    view! {
        <div class="table-wrapper">
            <Show
                when=move || state.with(|s| !s.suspicious.is_empty())
                fallback=|| view! {
                    <div class="empty-state">
                        <p class="empty-state__title">"No suspicious sources"</p>
                        <p class="empty-state__hint">
                            "No anomalous IP addresses in the current data."
                        </p>
                    </div>
                }
            >
                <Table attr:id="suspicious-table">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"IP address"</TableHeaderCell>
                            <TableHeaderCell>"Device"</TableHeaderCell>
                            <TableHeaderCell>"Action"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || state.with(|s| s.suspicious.clone())
                            key=|entry| entry.ip_addresses.clone()
                            children=move |entry| {
                                let ip = entry.ip_addresses.clone();
                                let device = entry.device_id.clone();
                                let device_label = entry
                                    .device_id
                                    .clone()
                                    .filter(|d| !d.trim().is_empty())
                                    .unwrap_or_else(|| "-".to_string());

                                let ip_for_busy = ip.clone();
                                let is_busy =
                                    Signal::derive(move || busy.with(|b| b.contains(&ip_for_busy)));
                                let ip_for_notice = ip.clone();
                                let notice =
                                    Signal::derive(move || notices.with(|n| n.get(&ip_for_notice).cloned()));
                                let ip_for_dismiss = ip.clone();
                                let dismiss = move |_| {
                                    notices.update(|n| {
                                        n.remove(&ip_for_dismiss);
                                    });
                                };

                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                <span class="log-row__ip">{entry.ip_addresses.clone()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{device_label}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Button
                                                    appearance=ButtonAppearance::Primary
                                                    on_click=move |_| send_for(ip.clone(), device.clone())
                                                    disabled=is_busy
                                                >
                                                    {icon("mail")}
                                                    {move || if is_busy.get() { " Sending..." } else { " Send warning email" }}
                                                </Button>
                                                {move || notice.get().map(|n| match n {
                                                    Notice::Sent(message) => view! {
                                                        <span class="notice notice--ok">
                                                            {message}
                                                            <button class="notice__dismiss" on:click=dismiss.clone()>
                                                                {icon("x")}
                                                            </button>
                                                        </span>
                                                    }.into_any(),
                                                    Notice::Failed(message) => view! {
                                                        <span class="notice notice--error">
                                                            {message}
                                                            <button class="notice__dismiss" on:click=dismiss.clone()>
                                                                {icon("x")}
                                                            </button>
                                                        </span>
                                                    }.into_any(),
                                                })}
                                            </TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </Show>
        </div>
    }
}
