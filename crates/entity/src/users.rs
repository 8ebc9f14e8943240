//! Users Entity
//!
//! A registered player: unique display name plus the salted password hash.
//! The hash column is excluded from serialization so no API response can
//! ever carry it.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_id: i64,
    #[sea_orm(unique)]
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::game_results::Entity")]
    GameResults,
}

impl Related<super::game_results::Entity> for Entity {
    fn to() -> RelationDef { Relation::GameResults.def() }
}

impl ActiveModelBehavior for ActiveModel {}
