// src/repository/performance_repository.rs
use crate::domain::employee_model;
use crate::domain::performance_model::{
    self, ActiveModel as PerformanceActiveModel, Entity as PerformanceEntity,
};
use sea_orm::{entity::*, query::*, DbConn, DbErr};
use uuid::Uuid;

#[derive(Clone)]
pub struct PerformanceRepository {
    db: DbConn,
}

impl PerformanceRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        performance: PerformanceActiveModel,
    ) -> Result<performance_model::Model, DbErr> {
        performance.insert(&self.db).await
    }

    /// 従業員の評価一覧（従業員レコードを結合）
    pub async fn find_by_employee_with_employee(
        &self,
        employee_id: Uuid,
    ) -> Result<Vec<(performance_model::Model, Option<employee_model::Model>)>, DbErr> {
        PerformanceEntity::find()
            .filter(performance_model::Column::EmployeeId.eq(employee_id))
            .find_also_related(employee_model::Entity)
            .order_by_asc(performance_model::Column::CreatedAt)
            .all(&self.db)
            .await
    }
}
