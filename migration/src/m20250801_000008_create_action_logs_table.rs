use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 操作ログはユーザー削除後も残すため外部キーを張らない
        manager
            .create_table(
                Table::create()
                    .table(ActionLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ActionLogs::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ActionLogs::UserId).uuid().not_null())
                    .col(ColumnDef::new(ActionLogs::Action).string_len(255).not_null())
                    .col(
                        ColumnDef::new(ActionLogs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(ActionLogs::Table)
                    .name("idx_action_logs_user_id")
                    .col(ActionLogs::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(ActionLogs::Table)
                    .name("idx_action_logs_created_at")
                    .col(ActionLogs::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .table(ActionLogs::Table)
                    .name("idx_action_logs_created_at")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .table(ActionLogs::Table)
                    .name("idx_action_logs_user_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ActionLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ActionLogs {
    Table,
    Id,
    UserId,
    Action,
    CreatedAt,
}
