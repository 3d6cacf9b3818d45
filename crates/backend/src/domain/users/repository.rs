use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, DatabaseBackend, Set, Statement};

use crate::shared::data::db::get_connection;

/// Registered device owner, the target of warning emails.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_table")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    pub user_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn get_by_id(user_id: &str) -> anyhow::Result<Option<Model>> {
    Ok(Entity::find_by_id(user_id.to_string()).one(conn()).await?)
}

pub async fn count_users() -> anyhow::Result<i64> {
    let result = conn()
        .query_one(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT COUNT(*) as cnt FROM user_table".to_string(),
        ))
        .await?;

    match result {
        Some(row) => Ok(row.try_get("", "cnt")?),
        None => Ok(0),
    }
}

pub async fn insert(user: &Model) -> anyhow::Result<()> {
    let model = ActiveModel {
        user_id: Set(user.user_id.clone()),
        user_name: Set(user.user_name.clone()),
        email: Set(user.email.clone()),
    };
    model.insert(conn()).await?;
    Ok(())
}
