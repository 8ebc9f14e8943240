//! Game Results Entity
//!
//! One submitted score, attributed to the player who earned it.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "game_results")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub result_id: i64,
    pub user_id: i64,
    pub total_score: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::UserId",
        on_delete = "Cascade"
    )]
    Users,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef { Relation::Users.def() }
}

impl ActiveModelBehavior for ActiveModel {}
