use sea_orm_migration::prelude::*;

use crate::m20250412_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameResults::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GameResults::ResultId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GameResults::UserId).big_integer().not_null())
                    .col(
                        ColumnDef::new(GameResults::TotalScore)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GameResults::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_results_user_id")
                            .from(GameResults::Table, GameResults::UserId)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Score listings for a single player are the hot read path
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_game_results_user_id")
                    .table(GameResults::Table)
                    .col(GameResults::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameResults::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameResults {
    Table,
    ResultId,
    UserId,
    TotalScore,
    CreatedAt,
}
