use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Performances::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Performances::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    // 従業員・プロジェクトへは ID のみで参照し、削除後も評価履歴は残す
                    .col(ColumnDef::new(Performances::EmployeeId).uuid().not_null())
                    .col(ColumnDef::new(Performances::ProjectId).uuid().not_null())
                    .col(ColumnDef::new(Performances::Rating).integer().not_null())
                    .col(ColumnDef::new(Performances::Feedback).text().not_null())
                    .col(
                        ColumnDef::new(Performances::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .check(
                        Expr::col(Performances::Rating)
                            .gte(1)
                            .and(Expr::col(Performances::Rating).lte(10)),
                    )
                    .to_owned(),
            )
            .await?;

        // 従業員別の評価一覧取得用
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(Performances::Table)
                    .name("idx_performances_employee_id")
                    .col(Performances::EmployeeId)
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
                    .table(Performances::Table)
                    .name("idx_performances_employee_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Performances::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Performances {
    Table,
    Id,
    EmployeeId,
    ProjectId,
    Rating,
    Feedback,
    CreatedAt,
}
