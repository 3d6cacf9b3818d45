//! Aggregates for the stat cards and charts.

use contracts::logs::LogRecord;

/// Headline numbers shown above the charts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardStats {
    pub total: usize,
    pub anomalies: usize,
    /// Share of anomalous records, in percent.
    pub anomaly_rate: f64,
    /// Date and time of the newest stored record.
    pub last_entry: Option<String>,
}

pub fn dashboard_stats(records: &[LogRecord]) -> DashboardStats {
    let total = records.len();
    let anomalies = records.iter().filter(|r| r.anomaly_detected).count();
    let anomaly_rate = if total == 0 {
        0.0
    } else {
        anomalies as f64 * 100.0 / total as f64
    };
    let last_entry = records
        .iter()
        .max_by_key(|r| r.line_id)
        .map(|r| format!("{} {}", r.date, r.time));

    DashboardStats {
        total,
        anomalies,
        anomaly_rate,
        last_entry,
    }
}

/// Record counts per log type, largest first, capped to the ten biggest
/// buckets. Ties break alphabetically so the chart is deterministic.
pub fn log_type_counts(records: &[LogRecord]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for record in records {
        match counts.iter_mut().find(|(t, _)| t == &record.log_type) {
            Some((_, n)) => *n += 1,
            None => counts.push((record.log_type.clone(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts.truncate(10);
    counts
}

/// (normal, anomalous) record counts for the donut chart.
pub fn anomaly_split(records: &[LogRecord]) -> (usize, usize) {
    let anomalies = records.iter().filter(|r| r.anomaly_detected).count();
    (records.len() - anomalies, anomalies)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(line_id: u32, log_type: &str, anomaly: bool) -> LogRecord {
        LogRecord {
            line_id,
            raw_line: format!("line {}", line_id),
            ip_address: "10.0.0.1".to_string(),
            date: "2024-06-14".to_string(),
            time: format!("15:16:{:02}", line_id),
            log_type: log_type.to_string(),
            auth_failures_last_1h: 0,
            time_since_last_failure: -1,
            is_root_attempt: false,
            unique_users_attempted: 0,
            anomaly_detected: anomaly,
            device_id: None,
        }
    }

    #[test]
    fn test_stats_totals_and_rate() {
        let records = vec![
            rec(1, "Normal", false),
            rec(2, "Auth Failure", true),
            rec(3, "Normal", false),
            rec(4, "Auth Failure", true),
        ];
        let stats = dashboard_stats(&records);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.anomalies, 2);
        assert!((stats.anomaly_rate - 50.0).abs() < f64::EPSILON);
        assert_eq!(stats.last_entry.as_deref(), Some("2024-06-14 15:16:04"));
    }

    #[test]
    fn test_stats_empty_set_has_zero_rate() {
        let stats = dashboard_stats(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.anomaly_rate, 0.0);
        assert!(stats.last_entry.is_none());
    }

    #[test]
    fn test_type_counts_descending_with_alphabetical_ties() {
        let records = vec![
            rec(1, "Normal", false),
            rec(2, "Normal", false),
            rec(3, "Auth Failure", true),
            rec(4, "System", false),
        ];
        let counts = log_type_counts(&records);
        assert_eq!(
            counts,
            vec![
                ("Normal".to_string(), 2),
                ("Auth Failure".to_string(), 1),
                ("System".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_type_counts_capped_at_ten() {
        let records: Vec<LogRecord> = (0..15)
            .map(|i| rec(i, &format!("Type {:02}", i), false))
            .collect();
        assert_eq!(log_type_counts(&records).len(), 10);
    }

    #[test]
    fn test_anomaly_split() {
        let records = vec![rec(1, "Normal", false), rec(2, "Auth Failure", true)];
        assert_eq!(anomaly_split(&records), (1, 1));
    }
}
