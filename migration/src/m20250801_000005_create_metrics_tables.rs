use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // プロジェクト単位のメトリクス
        manager
            .create_table(
                Table::create()
                    .table(ProjectMetrics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectMetrics::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProjectMetrics::ProjectId).uuid().not_null())
                    .col(ColumnDef::new(ProjectMetrics::Progress).double().not_null())
                    .col(ColumnDef::new(ProjectMetrics::Budget).double().not_null())
                    .col(
                        ColumnDef::new(ProjectMetrics::DeadlinesMet)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ProjectMetrics::Issues)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'[]'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(ProjectMetrics::LastUpdated)
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
                    .table(ProjectMetrics::Table)
                    .name("idx_project_metrics_project_id")
                    .col(ProjectMetrics::ProjectId)
                    .to_owned(),
            )
            .await?;

        // 会社全体のスナップショット（scope の一意制約で単一行を保証）
        manager
            .create_table(
                Table::create()
                    .table(CompanyMetrics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CompanyMetrics::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CompanyMetrics::Scope)
                            .string_len(20)
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(CompanyMetrics::TotalEmployees)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CompanyMetrics::TurnoverRate)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CompanyMetrics::EmployeeEngagement)
                            .double()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CompanyMetrics::TurnoverByDepartment)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CompanyMetrics::LastUpdated)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CompanyMetrics::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .table(ProjectMetrics::Table)
                    .name("idx_project_metrics_project_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProjectMetrics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectMetrics {
    Table,
    Id,
    ProjectId,
    Progress,
    Budget,
    DeadlinesMet,
    Issues,
    LastUpdated,
}

#[derive(DeriveIden)]
enum CompanyMetrics {
    Table,
    Id,
    Scope,
    TotalEmployees,
    TurnoverRate,
    EmployeeEngagement,
    TurnoverByDepartment,
    LastUpdated,
}
