// ==========================================
// 库存补货系统 - HTTP 服务主入口
// ==========================================
// 启动顺序: 配置 → 日志 → 语言 → 数据库/AppState → 监听
// ==========================================

use std::sync::Arc;

use anyhow::Context;
use inventory_reorder::app::{router, AppState};
use inventory_reorder::config::AppConfig;
use inventory_reorder::{i18n, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("加载配置失败")?;

    // 初始化日志系统
    logging::init(&config.log_filter, config.log_format);
    i18n::set_locale(&config.locale);

    tracing::info!("==================================================");
    tracing::info!("{}", inventory_reorder::APP_NAME);
    tracing::info!("系统版本: {}", inventory_reorder::VERSION);
    tracing::info!("==================================================");
    tracing::info!("使用数据库: {}", config.db_path);

    let state = AppState::new(config.db_path.clone()).map_err(anyhow::Error::msg)?;
    let app = router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("无法监听 {}", config.bind_addr()))?;
    tracing::info!("API 服务已启动: http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
