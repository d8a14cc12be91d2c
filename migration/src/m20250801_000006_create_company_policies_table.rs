use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CompanyPolicies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CompanyPolicies::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CompanyPolicies::PolicyName)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(CompanyPolicies::Description).text().not_null())
                    .col(ColumnDef::new(CompanyPolicies::Value).text().not_null())
                    .col(
                        ColumnDef::new(CompanyPolicies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(CompanyPolicies::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // 新しい順の一覧取得用
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(CompanyPolicies::Table)
                    .name("idx_company_policies_created_at")
                    .col(CompanyPolicies::CreatedAt)
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
                    .table(CompanyPolicies::Table)
                    .name("idx_company_policies_created_at")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CompanyPolicies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CompanyPolicies {
    Table,
    Id,
    PolicyName,
    Description,
    Value,
    CreatedAt,
    UpdatedAt,
}
