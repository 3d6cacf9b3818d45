//! CSV serialization for the export download.

use contracts::logs::LogRecord;

/// Fixed export column order.
pub const CSV_HEADERS: [&str; 12] = [
    "LineId",
    "logs",
    "ip_address",
    "date",
    "time",
    "log_type",
    "auth_failures_last_1h",
    "time_since_last_failure",
    "is_root_attempt",
    "unique_users_attempted",
    "anomaly_detected",
    "device_id",
];

/// Serializes records for download. The raw log text is always quoted
/// with internal quotes doubled; every other field is emitted bare.
/// The document carries no trailing newline.
pub fn to_csv(records: &[LogRecord]) -> String {
    let mut out = String::new();
    out.push_str(&CSV_HEADERS.join(","));
    for record in records {
        out.push('\n');
        out.push_str(&csv_row(record));
    }
    out
}

fn csv_row(record: &LogRecord) -> String {
    format!(
        "{},\"{}\",{},{},{},{},{},{},{},{},{},{}",
        record.line_id,
        record.raw_line.replace('"', "\"\""),
        record.ip_address,
        record.date,
        record.time,
        record.log_type,
        record.auth_failures_last_1h,
        record.time_since_last_failure,
        record.is_root_attempt,
        record.unique_users_attempted,
        record.anomaly_detected,
        record.device_id.as_deref().unwrap_or(""),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(raw: &str, device_id: Option<&str>) -> LogRecord {
        LogRecord {
            line_id: 7,
            raw_line: raw.to_string(),
            ip_address: "218.188.2.4".to_string(),
            date: "2024-06-14".to_string(),
            time: "15:16:01".to_string(),
            log_type: "Auth Failure".to_string(),
            auth_failures_last_1h: 3,
            time_since_last_failure: 42,
            is_root_attempt: true,
            unique_users_attempted: 2,
            anomaly_detected: true,
            device_id: device_id.map(|d| d.to_string()),
        }
    }

    #[test]
    fn test_header_row_is_fixed() {
        let csv = to_csv(&[]);
        assert_eq!(
            csv,
            "LineId,logs,ip_address,date,time,log_type,auth_failures_last_1h,\
             time_since_last_failure,is_root_attempt,unique_users_attempted,\
             anomaly_detected,device_id"
        );
    }

    #[test]
    fn test_raw_line_is_always_quoted_and_quotes_doubled() {
        let csv = to_csv(&[rec("user \"root\" rejected", Some("dev-02"))]);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "7,\"user \"\"root\"\" rejected\",218.188.2.4,2024-06-14,15:16:01,\
             Auth Failure,3,42,true,2,true,dev-02"
        );
    }

    #[test]
    fn test_missing_device_is_emitted_empty() {
        let csv = to_csv(&[rec("plain line", None)]);
        let row = csv.lines().nth(1).unwrap();
        assert!(row.ends_with(",true,"));
    }

    #[test]
    fn test_line_count_is_records_plus_header() {
        let records = vec![rec("a", None), rec("b", None), rec("c", None)];
        let csv = to_csv(&records);
        assert_eq!(csv.lines().count(), 4);
        assert!(!csv.ends_with('\n'));
    }
}
