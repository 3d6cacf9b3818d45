use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Minimal schema bootstrap. Idempotent: every statement is
/// CREATE TABLE IF NOT EXISTS.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS admin_table (
        admin_id TEXT PRIMARY KEY NOT NULL,
        admin_name TEXT,
        email TEXT NOT NULL UNIQUE,
        contact_no TEXT,
        password TEXT NOT NULL
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS log_table (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        logs TEXT NOT NULL,
        ip_address TEXT NOT NULL DEFAULT '',
        log_date TEXT NOT NULL DEFAULT '',
        log_time TEXT NOT NULL DEFAULT '',
        log_type TEXT NOT NULL DEFAULT '',
        anomaly_detected TEXT NOT NULL DEFAULT 'No',
        device_id TEXT,
        auth_failures_last_1h INTEGER NOT NULL DEFAULT 0,
        time_since_last_failure INTEGER NOT NULL DEFAULT 0,
        is_root_attempt INTEGER NOT NULL DEFAULT 0,
        unique_users_attempted INTEGER NOT NULL DEFAULT 0,
        created_at TEXT
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS device_table (
        device_id TEXT PRIMARY KEY NOT NULL,
        user_id TEXT
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS user_table (
        user_id TEXT PRIMARY KEY NOT NULL,
        user_name TEXT,
        email TEXT
    );
    "#,
];

/// Opens the SQLite database and bootstraps the schema.
///
/// Safe to call more than once in one process; later calls keep the
/// first connection.
pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    if DB_CONN.get().is_some() {
        return Ok(());
    }

    let db_file = db_path.unwrap_or("target/db/logsentinel.db");
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    tracing::info!("Connecting to database: {}", db_url);
    let conn = Database::connect(&db_url).await?;

    for ddl in SCHEMA {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            (*ddl).to_string(),
        ))
        .await?;
    }

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;

    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database not initialized. Call initialize_database() first.")
}
