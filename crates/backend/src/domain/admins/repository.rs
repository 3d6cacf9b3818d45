use anyhow::{Context, Result};
use contracts::auth::AdminUser;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use crate::shared::data::db::get_connection;

/// Admin row together with its stored credential hash. Only the service
/// layer sees this shape; handlers work with the bare profile.
#[derive(Debug, Clone)]
pub struct StoredAdmin {
    pub profile: AdminUser,
    pub password_hash: String,
}

pub async fn get_by_email(email: &str) -> Result<Option<StoredAdmin>> {
    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT admin_id, admin_name, email, contact_no, password
             FROM admin_table WHERE email = ?",
            [email.into()],
        ))
        .await?;

    match result {
        Some(row) => Ok(Some(StoredAdmin {
            profile: AdminUser {
                admin_id: row.try_get("", "admin_id")?,
                admin_name: row.try_get("", "admin_name")?,
                email: row.try_get("", "email")?,
                contact_no: row.try_get("", "contact_no")?,
            },
            password_hash: row.try_get("", "password")?,
        })),
        None => Ok(None),
    }
}

pub async fn get_by_id(admin_id: &str) -> Result<Option<AdminUser>> {
    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT admin_id, admin_name, email, contact_no
             FROM admin_table WHERE admin_id = ?",
            [admin_id.into()],
        ))
        .await?;

    match result {
        Some(row) => Ok(Some(AdminUser {
            admin_id: row.try_get("", "admin_id")?,
            admin_name: row.try_get("", "admin_name")?,
            email: row.try_get("", "email")?,
            contact_no: row.try_get("", "contact_no")?,
        })),
        None => Ok(None),
    }
}

pub async fn count_admins() -> Result<i64> {
    let conn = get_connection();

    let result = conn
        .query_one(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT COUNT(*) as cnt FROM admin_table".to_string(),
        ))
        .await?;

    match result {
        Some(row) => Ok(row.try_get("", "cnt")?),
        None => Ok(0),
    }
}

pub async fn create_with_password(admin: &AdminUser, password_hash: &str) -> Result<()> {
    let conn = get_connection();

    conn.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT INTO admin_table (admin_id, admin_name, email, contact_no, password)
         VALUES (?, ?, ?, ?, ?)",
        [
            admin.admin_id.clone().into(),
            admin.admin_name.clone().into(),
            admin.email.clone().into(),
            admin.contact_no.clone().into(),
            password_hash.to_string().into(),
        ],
    ))
    .await
    .context("Failed to insert admin")?;

    Ok(())
}
