// src/main.rs
use hr_backend::api::router::app_router;
use hr_backend::api::AppState;
use hr_backend::config::Config;
use hr_backend::db::create_db_pool;
use hr_backend::logging::init_tracing;
use migration::{Migrator, MigratorTrait};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // トレーシングの設定
    init_tracing();

    tracing::info!("Starting HR Backend server...");

    // 設定を読み込む
    let app_config = Config::from_env()?;
    tracing::info!(
        environment = %app_config.environment,
        host = %app_config.host,
        port = app_config.port,
        "Configuration loaded"
    );

    // データベース接続を作成
    let db_pool = create_db_pool(&app_config).await?;
    tracing::info!("Database pool created successfully.");

    // 未適用のマイグレーションを実行
    Migrator::up(&db_pool, None).await?;
    tracing::info!("Database migrations applied.");

    let server_addr = format!("{}:{}", app_config.host, app_config.port);
    let app_state = AppState::new(db_pool, app_config)?;
    let app = app_router(app_state);

    let listener = TcpListener::bind(&server_addr).await?;
    tracing::info!("Server listening on {}", server_addr);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Ctrl+C / SIGTERM を待つ
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down gracefully..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down gracefully..."),
    }
}
