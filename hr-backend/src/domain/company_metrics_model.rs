// src/domain/company_metrics_model.rs

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 会社全体スナップショットの scope 値（一意制約により常に1行）
pub const COMPANY_SCOPE: &str = "company";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company_metrics")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub scope: String,
    pub total_employees: i64,
    pub turnover_rate: f64,
    pub employee_engagement: f64,
    /// 部署名 -> 人数
    #[sea_orm(column_type = "JsonBinary")]
    pub turnover_by_department: Json,
    pub last_updated: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
