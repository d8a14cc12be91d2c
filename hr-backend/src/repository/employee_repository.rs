// src/repository/employee_repository.rs
use crate::domain::employee_model::{
    self, ActiveModel as EmployeeActiveModel, Entity as EmployeeEntity,
};
use crate::utils::validation::like_pattern;
use sea_orm::sea_query::{extension::postgres::PgExpr, Expr};
use sea_orm::{
    entity::*, query::*, Condition, DbConn, DbErr, FromQueryResult, PaginatorTrait, Value,
};
use uuid::Uuid;

/// 部署ごとの人数（GROUP BY 結果）
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct DepartmentCountRow {
    pub department: Option<String>,
    pub count: i64,
}

#[derive(Clone)]
pub struct EmployeeRepository {
    db: DbConn,
}

impl EmployeeRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<employee_model::Model>, DbErr> {
        EmployeeEntity::find_by_id(id).one(&self.db).await
    }

    pub async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<employee_model::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        EmployeeEntity::find()
            .filter(employee_model::Column::Id.is_in(ids.to_vec()))
            .all(&self.db)
            .await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<employee_model::Model>, DbErr> {
        EmployeeEntity::find()
            .filter(employee_model::Column::Email.eq(email))
            .one(&self.db)
            .await
    }

    /// 姓・名・メールアドレスの大文字小文字を区別しない部分一致検索
    pub async fn find_all(
        &self,
        search: Option<&str>,
    ) -> Result<Vec<employee_model::Model>, DbErr> {
        let mut query = EmployeeEntity::find();

        if let Some(term) = search.filter(|s| !s.is_empty()) {
            let pattern = like_pattern(term);
            query = query.filter(
                Condition::any()
                    .add(Expr::col(employee_model::Column::FirstName).ilike(pattern.clone()))
                    .add(Expr::col(employee_model::Column::LastName).ilike(pattern.clone()))
                    .add(Expr::col(employee_model::Column::Email).ilike(pattern)),
            );
        }

        query
            .order_by_asc(employee_model::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    pub async fn create(
        &self,
        employee: EmployeeActiveModel,
    ) -> Result<employee_model::Model, DbErr> {
        employee.insert(&self.db).await
    }

    pub async fn update(
        &self,
        employee: EmployeeActiveModel,
    ) -> Result<employee_model::Model, DbErr> {
        employee.update(&self.db).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<u64, DbErr> {
        let result = EmployeeEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }

    pub async fn count_by_ids(&self, ids: &[Uuid]) -> Result<u64, DbErr> {
        EmployeeEntity::find()
            .filter(employee_model::Column::Id.is_in(ids.to_vec()))
            .count(&self.db)
            .await
    }

    /// 同じ列変更をID一覧の全従業員に1文で適用し、更新件数を返す
    pub async fn bulk_update(
        &self,
        ids: &[Uuid],
        changes: Vec<(employee_model::Column, Value)>,
    ) -> Result<u64, DbErr> {
        let mut update = EmployeeEntity::update_many();
        for (column, value) in changes {
            update = update.col_expr(column, Expr::value(value));
        }
        let result = update
            .col_expr(
                employee_model::Column::UpdatedAt,
                Expr::value(chrono::Utc::now()),
            )
            .filter(employee_model::Column::Id.is_in(ids.to_vec()))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn count_all(&self) -> Result<u64, DbErr> {
        EmployeeEntity::find().count(&self.db).await
    }

    /// 部署ごとの人数。`employed` を指定すると在籍状態で絞り込む
    pub async fn count_by_department(
        &self,
        employed: Option<bool>,
    ) -> Result<Vec<DepartmentCountRow>, DbErr> {
        let mut query = EmployeeEntity::find()
            .select_only()
            .column(employee_model::Column::Department)
            .column_as(Expr::col(employee_model::Column::Id).count(), "count")
            .group_by(employee_model::Column::Department);

        if let Some(employed) = employed {
            query = query.filter(employee_model::Column::IsEmployed.eq(employed));
        }

        query
            .into_model::<DepartmentCountRow>()
            .all(&self.db)
            .await
    }
}
