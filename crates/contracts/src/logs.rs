use serde::{Deserialize, Serialize};

/// Log row as served by `GET /admin/logs_summary`.
///
/// The risk columns are optional on the wire: the older storage shape did
/// not carry them, and consumers must treat an absent value as zero/false.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendLogRecord {
    pub logs: String,
    pub ip_address: String,
    pub log_date: String,
    pub log_time: String,
    pub log_type: String,
    /// Stored upstream as the literal strings "Yes" / "No".
    pub anomaly_detected: String,
    #[serde(default)]
    pub device_id: Option<String>,
    #[serde(default)]
    pub auth_failures_last_1h: Option<u32>,
    #[serde(default)]
    pub time_since_last_failure: Option<i64>,
    #[serde(default)]
    pub is_root_attempt: Option<bool>,
    #[serde(default)]
    pub unique_users_attempted: Option<u32>,
}

/// One suspicious source as precomputed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuspiciousIpRecord {
    pub ip_addresses: String,
    #[serde(default)]
    pub device_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsSummaryResponse {
    pub logs: Vec<BackendLogRecord>,
    pub suspicious_ip: Vec<SuspiciousIpRecord>,
}

/// Canonical in-memory log record, produced once per fetch batch.
///
/// `line_id` is an ordinal assigned at normalization time. It is unique
/// within one batch only and must never be persisted across fetches.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub line_id: u32,
    pub raw_line: String,
    pub ip_address: String,
    pub date: String,
    pub time: String,
    pub log_type: String,
    pub auth_failures_last_1h: u32,
    pub time_since_last_failure: i64,
    pub is_root_attempt: bool,
    pub unique_users_attempted: u32,
    pub anomaly_detected: bool,
    pub device_id: Option<String>,
}

/// Maps one wire record into the canonical shape.
///
/// Deterministic: `line_id = ordinal + 1`, anomaly flag is the literal
/// "Yes" comparison, absent risk fields become zero/false.
pub fn normalize(record: &BackendLogRecord, ordinal: usize) -> LogRecord {
    LogRecord {
        line_id: ordinal as u32 + 1,
        raw_line: record.logs.clone(),
        ip_address: record.ip_address.clone(),
        date: record.log_date.clone(),
        time: record.log_time.clone(),
        log_type: record.log_type.clone(),
        auth_failures_last_1h: record.auth_failures_last_1h.unwrap_or(0),
        time_since_last_failure: record.time_since_last_failure.unwrap_or(0),
        is_root_attempt: record.is_root_attempt.unwrap_or(false),
        unique_users_attempted: record.unique_users_attempted.unwrap_or(0),
        anomaly_detected: record.anomaly_detected == "Yes",
        device_id: record.device_id.clone(),
    }
}

pub fn normalize_batch(records: &[BackendLogRecord]) -> Vec<LogRecord> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| normalize(r, i))
        .collect()
}

/// Deduplicates the suspicious-IP list by address, keeping the first
/// occurrence and its order.
pub fn dedup_suspicious_ips(list: &[SuspiciousIpRecord]) -> Vec<SuspiciousIpRecord> {
    let mut seen: Vec<&str> = Vec::new();
    let mut out = Vec::new();
    for record in list {
        if seen.contains(&record.ip_addresses.as_str()) {
            continue;
        }
        seen.push(record.ip_addresses.as_str());
        out.push(record.clone());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire_record(anomaly: &str) -> BackendLogRecord {
        BackendLogRecord {
            logs: "Jun 14 15:16:01 combo sshd(pam_unix): authentication failure".into(),
            ip_address: "218.188.2.4".into(),
            log_date: "2024-06-14".into(),
            log_time: "15:16:01".into(),
            log_type: "Auth Failure".into(),
            anomaly_detected: anomaly.into(),
            device_id: Some("dev-01".into()),
            auth_failures_last_1h: Some(3),
            time_since_last_failure: Some(120),
            is_root_attempt: Some(true),
            unique_users_attempted: Some(2),
        }
    }

    #[test]
    fn test_normalize_maps_yes_no_to_bool() {
        assert!(normalize(&wire_record("Yes"), 0).anomaly_detected);
        assert!(!normalize(&wire_record("No"), 0).anomaly_detected);
        // anything that is not the literal "Yes" is treated as normal
        assert!(!normalize(&wire_record("yes"), 0).anomaly_detected);
    }

    #[test]
    fn test_normalize_assigns_ordinal_line_ids() {
        let batch = vec![wire_record("No"), wire_record("Yes"), wire_record("No")];
        let normalized = normalize_batch(&batch);
        let ids: Vec<u32> = normalized.iter().map(|r| r.line_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_normalize_defaults_absent_risk_fields() {
        let json = r#"{
            "logs": "raw line",
            "ip_address": "10.0.0.1",
            "log_date": "2024-06-14",
            "log_time": "08:00:00",
            "log_type": "Normal",
            "anomaly_detected": "No"
        }"#;
        let wire: BackendLogRecord = serde_json::from_str(json).unwrap();
        let record = normalize(&wire, 4);
        assert_eq!(record.line_id, 5);
        assert_eq!(record.auth_failures_last_1h, 0);
        assert_eq!(record.time_since_last_failure, 0);
        assert!(!record.is_root_attempt);
        assert_eq!(record.unique_users_attempted, 0);
        assert_eq!(record.device_id, None);
    }

    #[test]
    fn test_dedup_suspicious_ips_keeps_first_occurrence() {
        let list = vec![
            SuspiciousIpRecord {
                ip_addresses: "1.2.3.4".into(),
                device_id: Some("dev-01".into()),
            },
            SuspiciousIpRecord {
                ip_addresses: "5.6.7.8".into(),
                device_id: None,
            },
            SuspiciousIpRecord {
                ip_addresses: "1.2.3.4".into(),
                device_id: Some("dev-02".into()),
            },
        ];
        let deduped = dedup_suspicious_ips(&list);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].ip_addresses, "1.2.3.4");
        assert_eq!(deduped[0].device_id.as_deref(), Some("dev-01"));
        assert_eq!(deduped[1].ip_addresses, "5.6.7.8");
    }
}
