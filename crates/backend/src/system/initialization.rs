use anyhow::{Context, Result};
use contracts::auth::AdminUser;
use serde::Deserialize;
use uuid::Uuid;

use crate::domain::{admins, devices, logs, users};
use crate::system::auth::password;

/// Demo sign-in pair, also surfaced on the login page.
pub const DEMO_EMAIL: &str = "demo@example.com";
pub const DEMO_PASSWORD: &str = "password123";

/// Log batch shipped with the binary so a fresh install has data to show.
const SEED_LOGS_CSV: &str = include_str!("../../seed/sample_logs.csv");

/// Creates the demo admin when the admin table is empty.
pub async fn ensure_demo_admin_exists() -> Result<()> {
    let count = admins::repository::count_admins().await?;
    if count > 0 {
        return Ok(());
    }

    tracing::info!("No admins found. Creating demo admin...");

    let admin = AdminUser {
        admin_id: Uuid::new_v4().to_string(),
        admin_name: Some("Demo Admin".to_string()),
        email: Some(DEMO_EMAIL.to_string()),
        contact_no: None,
    };
    let hash = password::hash_password(DEMO_PASSWORD)?;
    admins::repository::create_with_password(&admin, &hash).await?;

    tracing::warn!("═══════════════════════════════════════════════");
    tracing::warn!("  Demo admin created!");
    tracing::warn!("  Email:    {}", DEMO_EMAIL);
    tracing::warn!("  Password: {}", DEMO_PASSWORD);
    tracing::warn!("  Admin ID: {}", admin.admin_id);
    tracing::warn!("═══════════════════════════════════════════════");

    Ok(())
}

/// Seed row shape of the embedded CSV batch.
#[derive(Debug, Deserialize)]
struct SeedLogRow {
    logs: String,
    ip_address: String,
    log_date: String,
    log_time: String,
    log_type: String,
    anomaly_detected: String,
    device_id: Option<String>,
    auth_failures_last_1h: i64,
    time_since_last_failure: i64,
    is_root_attempt: bool,
    unique_users_attempted: i64,
}

/// Seeds devices, users and the demo log batch on an empty database.
///
/// Each table is filled only when it is empty, so a partially seeded
/// database converges instead of duplicating rows.
pub async fn seed_demo_data() -> Result<()> {
    if users::repository::count_users().await? == 0 {
        users::repository::insert(&users::repository::Model {
            user_id: "u-01".into(),
            user_name: Some("Alex Morgan".into()),
            email: Some("alex.morgan@example.com".into()),
        })
        .await?;
        users::repository::insert(&users::repository::Model {
            user_id: "u-02".into(),
            user_name: Some("Priya Nair".into()),
            email: Some("priya.nair@example.com".into()),
        })
        .await?;
    }

    if devices::repository::count_devices().await? == 0 {
        devices::repository::insert("dev-01", Some("u-01")).await?;
        devices::repository::insert("dev-02", Some("u-01")).await?;
        devices::repository::insert("dev-03", Some("u-02")).await?;
    }

    if logs::repository::count_logs().await? > 0 {
        return Ok(());
    }

    let rows = parse_seed_csv(SEED_LOGS_CSV)?;
    let inserted = rows.len();
    logs::repository::insert_batch(
        rows.into_iter()
            .map(|r| logs::repository::NewLogRecord {
                logs: r.logs,
                ip_address: r.ip_address,
                log_date: r.log_date,
                log_time: r.log_time,
                log_type: r.log_type,
                anomaly_detected: r.anomaly_detected,
                device_id: r.device_id.filter(|d| !d.is_empty()),
                auth_failures_last_1h: r.auth_failures_last_1h,
                time_since_last_failure: r.time_since_last_failure,
                is_root_attempt: r.is_root_attempt,
                unique_users_attempted: r.unique_users_attempted,
            })
            .collect(),
    )
    .await?;

    tracing::info!("Seeded {} demo log records", inserted);

    Ok(())
}

fn parse_seed_csv(raw: &str) -> Result<Vec<SeedLogRow>> {
    let mut reader = csv::Reader::from_reader(raw.as_bytes());
    let mut rows = Vec::new();
    for (idx, record) in reader.deserialize::<SeedLogRow>().enumerate() {
        let row = record.with_context(|| format!("seed CSV row {} is malformed", idx + 1))?;
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notifications::{self, WarningDispatch};
    use crate::shared::data::db;
    use crate::system::mailer::RecordingMailer;

    #[test]
    fn test_seed_csv_parses() {
        let rows = parse_seed_csv(SEED_LOGS_CSV).unwrap();
        assert!(rows.len() >= 20);
        assert!(rows.iter().any(|r| r.anomaly_detected == "Yes"));
        assert!(rows.iter().any(|r| r.is_root_attempt));
        // one anomalous row intentionally has no device
        assert!(rows
            .iter()
            .any(|r| r.device_id.as_deref().unwrap_or("").is_empty()));
    }

    /// One end-to-end pass over a fresh database: init, seed, credential
    /// check, summary query, warning dispatch. Kept as a single test
    /// because the connection is process-global.
    #[tokio::test]
    async fn test_fresh_database_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("roundtrip.db");
        db::initialize_database(Some(&db_path.to_string_lossy()))
            .await
            .unwrap();

        ensure_demo_admin_exists().await.unwrap();
        // second call must be a no-op
        ensure_demo_admin_exists().await.unwrap();
        assert_eq!(admins::repository::count_admins().await.unwrap(), 1);

        seed_demo_data().await.unwrap();
        seed_demo_data().await.unwrap();
        let log_count = logs::repository::count_logs().await.unwrap();
        assert!(log_count >= 20);

        // credential check: demo pair passes, wrong password does not
        let check = admins::service::verify_credentials(DEMO_EMAIL, DEMO_PASSWORD)
            .await
            .unwrap();
        let admin = match check {
            admins::service::CredentialCheck::Valid(profile) => profile,
            other => panic!("expected valid credentials, got {:?}", other),
        };
        assert!(matches!(
            admins::service::verify_credentials(DEMO_EMAIL, "nope")
                .await
                .unwrap(),
            admins::service::CredentialCheck::WrongPassword
        ));
        assert!(matches!(
            admins::service::verify_credentials("ghost@example.com", DEMO_PASSWORD)
                .await
                .unwrap(),
            admins::service::CredentialCheck::UnknownEmail
        ));

        // summary for the seeded admin
        let summary = logs::service::logs_summary(&admin.admin_id, None)
            .await
            .unwrap()
            .expect("known admin");
        assert_eq!(summary.logs.len() as i64, log_count);
        assert!(!summary.suspicious_ip.is_empty());
        let ips: Vec<&str> = summary
            .suspicious_ip
            .iter()
            .map(|s| s.ip_addresses.as_str())
            .collect();
        assert!(ips.contains(&"218.188.2.4"));
        // distinct by address
        let mut unique = ips.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), ips.len());

        // unknown admin gets nothing
        assert!(logs::service::logs_summary("missing-admin", None)
            .await
            .unwrap()
            .is_none());

        // device filter narrows the set
        let filtered = logs::service::logs_summary(&admin.admin_id, Some("dev-02"))
            .await
            .unwrap()
            .expect("known admin");
        assert!(filtered.logs.len() < summary.logs.len());
        assert!(filtered.logs.iter().all(|l| l.device_id.as_deref() == Some("dev-02")));

        // warning dispatch resolves device -> user -> email
        let mailer = RecordingMailer::new();
        let outcome = notifications::dispatch_warning("dev-02", "Jun 14 11:10:48 combo sshd(pam_unix): authentication failure", &mailer)
            .await
            .unwrap();
        match outcome {
            WarningDispatch::Sent { recipient } => {
                assert_eq!(recipient, "alex.morgan@example.com")
            }
            other => panic!("expected dispatch, got {:?}", other),
        }
        assert_eq!(mailer.sent_count(), 1);

        let missing = notifications::dispatch_warning("dev-99", "line", &mailer)
            .await
            .unwrap();
        assert!(matches!(missing, WarningDispatch::UnknownDevice));
        assert_eq!(mailer.sent_count(), 1);
    }
}
