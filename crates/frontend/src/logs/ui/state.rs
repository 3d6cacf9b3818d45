//! Dashboard view state shared by the widgets.

use contracts::logs::{LogRecord, SuspiciousIpRecord};
use leptos::prelude::*;

use crate::logs::pipeline::{self, FilterState, PAGE_SIZE};

/// Everything the dashboard renders from. The record set is replaced
/// wholesale by each resolved fetch; the page fields are derived from
/// it by `refresh_view`.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    /// Normalized records from the last successful fetch.
    pub records: Vec<LogRecord>,
    /// Distinct anomalous sources from the same response.
    pub suspicious: Vec<SuspiciousIpRecord>,
    /// Rows of the page currently on screen.
    pub page_items: Vec<LogRecord>,
    pub page: usize,
    pub total_pages: usize,
    /// Records matching the filter, across all pages.
    pub filtered_count: usize,
    pub filter: FilterState,
    pub is_loading: bool,
    /// False until the first fetch settles; gates the loading screen.
    pub has_loaded: bool,
    pub error: Option<String>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            suspicious: Vec::new(),
            page_items: Vec::new(),
            page: 1,
            total_pages: 0,
            filtered_count: 0,
            filter: FilterState::default(),
            is_loading: false,
            has_loaded: false,
            error: None,
        }
    }
}

pub fn create_state() -> RwSignal<DashboardState> {
    RwSignal::new(DashboardState::default())
}

/// Recomputes the visible page from the stored records and the current
/// filter and page selections.
pub fn refresh_view(state: RwSignal<DashboardState>) {
    state.update(|s| {
        let filtered = pipeline::filter(&s.records, &s.filter);
        let view = pipeline::paginate(&filtered, PAGE_SIZE, s.page);
        s.page = view.page;
        s.total_pages = view.total_pages;
        s.filtered_count = view.total_count;
        s.page_items = view.items;
    });
}

/// Applies a filter change and jumps back to the first page.
pub fn apply_filter_change(
    state: RwSignal<DashboardState>,
    change: impl FnOnce(&mut FilterState),
) {
    state.update(|s| {
        change(&mut s.filter);
        s.page = 1;
    });
    refresh_view(state);
}

/// Page navigation; out-of-range requests are clamped by the pipeline.
pub fn go_to_page(state: RwSignal<DashboardState>, page: usize) {
    state.update(|s| s.page = page);
    refresh_view(state);
}
