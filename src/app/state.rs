// ==========================================
// 库存补货系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use std::sync::{Arc, Mutex};

use crate::api::ItemApi;
use crate::db;
use crate::engine::ReorderMetricsEngine;
use crate::repository::item_repo::ItemRepository;

/// 应用状态
///
/// 包含API实例和共享资源, 在 HTTP 路由间共享
pub struct AppState {
    /// 数据库路径
    pub db_path: String,

    /// 物料API
    pub item_api: Arc<ItemApi>,

    /// 物料仓储（用于健康检查/统计）
    pub item_repo: Arc<ItemRepository>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 参数
    /// - db_path: 数据库文件路径（":memory:" 可用于测试）
    ///
    /// # 返回
    /// - Ok(AppState): 应用状态实例
    /// - Err(String): 初始化错误
    ///
    /// # 说明
    /// 该方法会：
    /// 1. 打开共享连接并初始化 schema
    /// 2. 初始化 Repository 与 Engine
    /// 3. 创建 API 实例
    pub fn new(db_path: String) -> Result<Self, String> {
        tracing::info!("初始化AppState，数据库路径: {}", db_path);

        let conn = db::open_sqlite_connection(&db_path)
            .map_err(|e| format!("无法打开数据库: {}", e))?;
        db::init_schema(&conn).map_err(|e| format!("数据库 schema 初始化失败: {}", e))?;
        let conn = Arc::new(Mutex::new(conn));

        let item_repo = Arc::new(ItemRepository::from_connection(conn));
        let engine = ReorderMetricsEngine::new();
        let item_api = Arc::new(ItemApi::new(item_repo.clone(), engine));

        tracing::info!("AppState初始化完成");

        Ok(Self {
            db_path,
            item_api,
            item_repo,
        })
    }
}
