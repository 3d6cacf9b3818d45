//! Client-side record pipeline: filter, sort, paginate.
//!
//! All functions are pure; the dashboard state layer feeds them the
//! stored record set and writes the results back into signals.

use contracts::logs::LogRecord;

/// Rows per display page.
pub const PAGE_SIZE: usize = 15;

/// Current filter selections. Default means "show everything".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    /// Exact log type, or `None` for all types.
    pub log_type: Option<String>,
    /// `Some(true)` anomalous only, `Some(false)` normal only.
    pub anomaly_status: Option<bool>,
    /// Case-insensitive substring match against the raw line.
    pub search_term: String,
}

impl FilterState {
    /// How many criteria are active, for the filter badge.
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if self.log_type.is_some() {
            count += 1;
        }
        if self.anomaly_status.is_some() {
            count += 1;
        }
        if !self.search_term.trim().is_empty() {
            count += 1;
        }
        count
    }
}

/// One page of sorted, filtered records plus the numbers the pager
/// needs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageView {
    pub items: Vec<LogRecord>,
    /// Clamped 1-based page that is actually shown.
    pub page: usize,
    pub total_pages: usize,
    /// Records matching the filter, across all pages.
    pub total_count: usize,
}

/// Conjunctive filter pass. Keeps input order and never mutates the
/// source set.
pub fn filter(records: &[LogRecord], state: &FilterState) -> Vec<LogRecord> {
    let needle = state.search_term.trim().to_lowercase();

    records
        .iter()
        .filter(|r| {
            if let Some(log_type) = &state.log_type {
                if &r.log_type != log_type {
                    return false;
                }
            }
            if let Some(anomaly) = state.anomaly_status {
                if r.anomaly_detected != anomaly {
                    return false;
                }
            }
            if !needle.is_empty() && !r.raw_line.to_lowercase().contains(&needle) {
                return false;
            }
            true
        })
        .cloned()
        .collect()
}

/// Stable ascending sort by line id. Applied at display time so the
/// stored set keeps its fetch order.
pub fn sort_by_line_id(records: &mut [LogRecord]) {
    records.sort_by_key(|r| r.line_id);
}

/// Pulls an out-of-range page request back into `[1, total_pages]`.
/// With no pages at all the pager still reads page 1.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    if total_pages == 0 {
        1
    } else {
        page.clamp(1, total_pages)
    }
}

/// Sorts the filtered set and slices out one display page.
pub fn paginate(records: &[LogRecord], page_size: usize, page: usize) -> PageView {
    let mut sorted = records.to_vec();
    sort_by_line_id(&mut sorted);

    let total_count = sorted.len();
    let total_pages = if total_count == 0 {
        0
    } else {
        (total_count + page_size - 1) / page_size
    };
    let page = clamp_page(page, total_pages);

    let items = if total_pages == 0 {
        Vec::new()
    } else {
        let start = (page - 1) * page_size;
        let end = (start + page_size).min(total_count);
        sorted[start..end].to_vec()
    };

    PageView {
        items,
        page,
        total_pages,
        total_count,
    }
}

/// Distinct log types of the stored set, sorted, for the type select.
pub fn distinct_log_types(records: &[LogRecord]) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    for record in records {
        if !types.contains(&record.log_type) {
            types.push(record.log_type.clone());
        }
    }
    types.sort();
    types
}

/// Wholesale replacement of the stored set by a resolved fetch. The
/// store never merges responses: whichever response is applied last
/// becomes the whole truth, regardless of when its request was issued.
pub fn apply_fetch(store: &mut Vec<LogRecord>, batch: Vec<LogRecord>) {
    *store = batch;
}

/// Picks the log line quoted in a warning email: the first anomalous
/// record from that source, or a generic line when none is stored.
pub fn warning_line(records: &[LogRecord], ip: &str) -> String {
    records
        .iter()
        .find(|r| r.anomaly_detected && r.ip_address == ip)
        .map(|r| r.raw_line.clone())
        .unwrap_or_else(|| format!("Suspicious activity observed from {}", ip))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(line_id: u32, ip: &str, log_type: &str, anomaly: bool, raw: &str) -> LogRecord {
        LogRecord {
            line_id,
            raw_line: raw.to_string(),
            ip_address: ip.to_string(),
            date: "2024-06-14".to_string(),
            time: "15:16:01".to_string(),
            log_type: log_type.to_string(),
            auth_failures_last_1h: 0,
            time_since_last_failure: -1,
            is_root_attempt: false,
            unique_users_attempted: 0,
            anomaly_detected: anomaly,
            device_id: None,
        }
    }

    fn sample() -> Vec<LogRecord> {
        vec![
            rec(3, "10.0.0.3", "Auth Failure", true, "sshd: failed password"),
            rec(1, "10.0.0.1", "Normal", false, "CROND: cmd run-parts"),
            rec(2, "10.0.0.2", "Auth Failure", false, "sshd: accepted password"),
            rec(4, "10.0.0.3", "Normal", true, "su: session opened for ROOT"),
        ]
    }

    #[test]
    fn test_empty_filter_keeps_everything_in_order() {
        let records = sample();
        let out = filter(&records, &FilterState::default());
        assert_eq!(out.len(), 4);
        let ids: Vec<u32> = out.iter().map(|r| r.line_id).collect();
        assert_eq!(ids, vec![3, 1, 2, 4]);
    }

    #[test]
    fn test_filter_criteria_are_conjunctive() {
        let records = sample();
        let state = FilterState {
            log_type: Some("Auth Failure".to_string()),
            anomaly_status: Some(true),
            search_term: String::new(),
        };
        let out = filter(&records, &state);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].line_id, 3);
    }

    #[test]
    fn test_anomaly_filter_selects_only_flagged_records() {
        let records = vec![
            rec(1, "10.0.0.1", "cron", false, "CROND: cmd run-parts"),
            rec(2, "10.0.0.2", "ssh", true, "sshd: failed password"),
            rec(3, "10.0.0.1", "cron", false, "CROND: session closed"),
        ];
        let state = FilterState {
            anomaly_status: Some(true),
            ..Default::default()
        };
        let out = filter(&records, &state);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].line_id, 2);
        assert_eq!(out[0].log_type, "ssh");
    }

    #[test]
    fn test_search_is_case_insensitive_on_raw_line() {
        let records = sample();
        let state = FilterState {
            search_term: "root".to_string(),
            ..Default::default()
        };
        let out = filter(&records, &state);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].line_id, 4);
    }

    #[test]
    fn test_active_count_reflects_each_criterion() {
        assert_eq!(FilterState::default().active_count(), 0);
        let state = FilterState {
            log_type: Some("Normal".to_string()),
            anomaly_status: Some(false),
            search_term: "  ".to_string(),
        };
        assert_eq!(state.active_count(), 2);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = sample();
        let state = FilterState {
            log_type: Some("Auth Failure".to_string()),
            search_term: "password".to_string(),
            ..Default::default()
        };
        let once = filter(&records, &state);
        let twice = filter(&once, &state);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_pages_concatenate_to_the_sorted_set() {
        let records = sample();
        let total_pages = paginate(&records, 3, 1).total_pages;
        let mut seen: Vec<u32> = Vec::new();
        for page in 1..=total_pages {
            let view = paginate(&records, 3, page);
            seen.extend(view.items.iter().map(|r| r.line_id));
        }
        assert_eq!(seen, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_paginate_sorts_and_slices() {
        let records = sample();
        let view = paginate(&records, 2, 1);
        assert_eq!(view.total_count, 4);
        assert_eq!(view.total_pages, 2);
        let ids: Vec<u32> = view.items.iter().map(|r| r.line_id).collect();
        assert_eq!(ids, vec![1, 2]);

        let view = paginate(&records, 2, 2);
        let ids: Vec<u32> = view.items.iter().map(|r| r.line_id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn test_paginate_clamps_out_of_range_pages() {
        let records = sample();
        let high = paginate(&records, 3, 99);
        assert_eq!(high.page, 2);
        assert_eq!(high.items.len(), 1);

        let low = paginate(&records, 3, 0);
        assert_eq!(low.page, 1);
        assert_eq!(low.items.len(), 3);
    }

    #[test]
    fn test_paginate_empty_set_has_zero_pages() {
        let view = paginate(&[], PAGE_SIZE, 5);
        assert_eq!(view.total_pages, 0);
        assert_eq!(view.page, 1);
        assert!(view.items.is_empty());
    }

    #[test]
    fn test_sort_is_stable_for_equal_line_ids() {
        let mut records = vec![
            rec(1, "10.0.0.1", "Normal", false, "first"),
            rec(1, "10.0.0.2", "Normal", false, "second"),
            rec(1, "10.0.0.3", "Normal", false, "third"),
        ];
        sort_by_line_id(&mut records);
        let raws: Vec<&str> = records.iter().map(|r| r.raw_line.as_str()).collect();
        assert_eq!(raws, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_distinct_log_types_sorted_unique() {
        let records = sample();
        assert_eq!(
            distinct_log_types(&records),
            vec!["Auth Failure".to_string(), "Normal".to_string()]
        );
    }

    #[test]
    fn test_last_applied_fetch_replaces_the_whole_set() {
        let mut store = Vec::new();
        let first = sample();
        let second = vec![rec(1, "10.0.0.9", "Normal", false, "only row")];

        // The older response lands after the newer one.
        apply_fetch(&mut store, second.clone());
        apply_fetch(&mut store, first.clone());
        assert_eq!(store, first);

        apply_fetch(&mut store, second.clone());
        assert_eq!(store, second);
    }

    #[test]
    fn test_warning_line_prefers_stored_anomalous_record() {
        let records = sample();
        assert_eq!(warning_line(&records, "10.0.0.3"), "sshd: failed password");
        assert_eq!(
            warning_line(&records, "10.0.0.2"),
            "Suspicious activity observed from 10.0.0.2"
        );
    }
}
