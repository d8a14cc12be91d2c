// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// 認証関連マイグレーション
mod m20250801_000001_create_users_table;

// 人事リソース関連マイグレーション
mod m20250801_000002_create_employees_table;
mod m20250801_000003_create_projects_table;
mod m20250801_000004_create_performances_table;
mod m20250801_000005_create_metrics_tables;

// ポリシー・ロール・操作ログ関連マイグレーション
mod m20250801_000006_create_company_policies_table;
mod m20250801_000007_create_roles_table;
mod m20250801_000008_create_action_logs_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_users_table::Migration),
            Box::new(m20250801_000002_create_employees_table::Migration),
            Box::new(m20250801_000003_create_projects_table::Migration),
            Box::new(m20250801_000004_create_performances_table::Migration),
            Box::new(m20250801_000005_create_metrics_tables::Migration),
            Box::new(m20250801_000006_create_company_policies_table::Migration),
            Box::new(m20250801_000007_create_roles_table::Migration),
            Box::new(m20250801_000008_create_action_logs_table::Migration),
        ]
    }
}
