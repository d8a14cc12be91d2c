// tests/common/app_helper.rs

use axum::Router;
use hr_backend::{api::router::app_router, api::AppState, config::AppConfig};

use crate::common;

/// 全ルーターを組み込んだアプリのセットアップ
pub async fn setup_app() -> (Router, common::db::TestDatabase) {
    common::init_test_env();

    let db = common::db::TestDatabase::new().await;
    let app_state = AppState::new(db.connection.clone(), AppConfig::for_testing())
        .expect("build app state");

    (app_router(app_state), db)
}
