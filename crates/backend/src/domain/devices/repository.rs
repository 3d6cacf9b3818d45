use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DatabaseBackend, Set, Statement};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "device_table")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub device_id: String,
    pub user_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn get_by_id(device_id: &str) -> anyhow::Result<Option<Model>> {
    Ok(Entity::find_by_id(device_id.to_string()).one(conn()).await?)
}

pub async fn count_devices() -> anyhow::Result<i64> {
    let result = conn()
        .query_one(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT COUNT(*) as cnt FROM device_table".to_string(),
        ))
        .await?;

    match result {
        Some(row) => Ok(row.try_get("", "cnt")?),
        None => Ok(0),
    }
}

pub async fn insert(device_id: &str, user_id: Option<&str>) -> anyhow::Result<()> {
    let model = ActiveModel {
        device_id: Set(device_id.to_string()),
        user_id: Set(user_id.map(|u| u.to_string())),
    };
    model.insert(conn()).await?;
    Ok(())
}
