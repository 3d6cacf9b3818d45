use chrono::Utc;
use contracts::logs::{BackendLogRecord, SuspiciousIpRecord};
use sea_orm::entity::prelude::*;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseBackend, EntityTrait, QueryFilter, QueryOrder, Set,
    Statement,
};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "log_table")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub logs: String,
    pub ip_address: String,
    pub log_date: String,
    pub log_time: String,
    pub log_type: String,
    pub anomaly_detected: String,
    pub device_id: Option<String>,
    pub auth_failures_last_1h: i64,
    pub time_since_last_failure: i64,
    pub is_root_attempt: bool,
    pub unique_users_attempted: i64,
    pub created_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for BackendLogRecord {
    fn from(m: Model) -> Self {
        BackendLogRecord {
            logs: m.logs,
            ip_address: m.ip_address,
            log_date: m.log_date,
            log_time: m.log_time,
            log_type: m.log_type,
            anomaly_detected: m.anomaly_detected,
            device_id: m.device_id,
            auth_failures_last_1h: Some(m.auth_failures_last_1h as u32),
            time_since_last_failure: Some(m.time_since_last_failure),
            is_root_attempt: Some(m.is_root_attempt),
            unique_users_attempted: Some(m.unique_users_attempted as u32),
        }
    }
}

/// Row shape accepted by `insert_batch`.
#[derive(Debug, Clone)]
pub struct NewLogRecord {
    pub logs: String,
    pub ip_address: String,
    pub log_date: String,
    pub log_time: String,
    pub log_type: String,
    pub anomaly_detected: String,
    pub device_id: Option<String>,
    pub auth_failures_last_1h: i64,
    pub time_since_last_failure: i64,
    pub is_root_attempt: bool,
    pub unique_users_attempted: i64,
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// All log rows in insertion order, optionally narrowed to one device.
pub async fn list_logs(device_id: Option<&str>) -> anyhow::Result<Vec<BackendLogRecord>> {
    let mut query = Entity::find();
    if let Some(device) = device_id {
        query = query.filter(Column::DeviceId.eq(device));
    }
    let rows = query.order_by_asc(Column::Id).all(conn()).await?;
    Ok(rows.into_iter().map(Into::into).collect())
}

/// Distinct anomalous sources in first-seen order.
///
/// MIN(device_id) skips NULLs, so an address whose rows disagree on the
/// device still resolves to a usable one when any row has it.
pub async fn suspicious_ips(device_id: Option<&str>) -> anyhow::Result<Vec<SuspiciousIpRecord>> {
    let statement = match device_id {
        Some(device) => Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT ip_address, MIN(device_id) AS device_id, MIN(id) AS first_seen
             FROM log_table
             WHERE anomaly_detected = 'Yes' AND device_id = ?
             GROUP BY ip_address
             ORDER BY first_seen",
            [device.into()],
        ),
        None => Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT ip_address, MIN(device_id) AS device_id, MIN(id) AS first_seen
             FROM log_table
             WHERE anomaly_detected = 'Yes'
             GROUP BY ip_address
             ORDER BY first_seen"
                .to_string(),
        ),
    };

    let rows = conn().query_all(statement).await?;

    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        out.push(SuspiciousIpRecord {
            ip_addresses: row.try_get("", "ip_address")?,
            device_id: row.try_get("", "device_id")?,
        });
    }
    Ok(out)
}

pub async fn count_logs() -> anyhow::Result<i64> {
    let result = conn()
        .query_one(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT COUNT(*) as cnt FROM log_table".to_string(),
        ))
        .await?;

    match result {
        Some(row) => Ok(row.try_get("", "cnt")?),
        None => Ok(0),
    }
}

pub async fn insert_batch(records: Vec<NewLogRecord>) -> anyhow::Result<()> {
    if records.is_empty() {
        return Ok(());
    }

    let now = Utc::now().to_rfc3339();
    let models: Vec<ActiveModel> = records
        .into_iter()
        .map(|r| ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            logs: Set(r.logs),
            ip_address: Set(r.ip_address),
            log_date: Set(r.log_date),
            log_time: Set(r.log_time),
            log_type: Set(r.log_type),
            anomaly_detected: Set(r.anomaly_detected),
            device_id: Set(r.device_id),
            auth_failures_last_1h: Set(r.auth_failures_last_1h),
            time_since_last_failure: Set(r.time_since_last_failure),
            is_root_attempt: Set(r.is_root_attempt),
            unique_users_attempted: Set(r.unique_users_attempted),
            created_at: Set(Some(now.clone())),
        })
        .collect();

    Entity::insert_many(models).exec(conn()).await?;
    Ok(())
}
