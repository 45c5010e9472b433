// ==========================================
// API集成测试辅助工具
// ==========================================
// 职责: 提供API层集成测试的通用辅助函数
// ==========================================

#[path = "../test_helpers.rs"]
mod test_helpers;

use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

use inventory_reorder::api::{ApiError, ApiResult, ItemApi, ValidationViolation};
use inventory_reorder::db;
use inventory_reorder::domain::ItemWithMetrics;
use inventory_reorder::engine::ReorderMetricsEngine;
use inventory_reorder::repository::ItemRepository;

use super::test_data_builder::ItemBuilder;

// ==========================================
// API测试环境
// ==========================================

/// API测试环境
///
/// 包含API实例和必要的依赖
pub struct ApiTestEnv {
    pub db_path: String,
    pub item_api: Arc<ItemApi>,

    // Repository层（用于测试数据准备与核对）
    pub item_repo: Arc<ItemRepository>,

    // 临时文件（确保生命周期）
    _temp_file: NamedTempFile,
}

impl ApiTestEnv {
    /// 创建新的测试环境
    pub fn new() -> Result<Self, String> {
        let (temp_file, db_path) =
            test_helpers::create_test_db().map_err(|e| format!("无法创建测试数据库: {}", e))?;

        let conn = db::open_sqlite_connection(&db_path)
            .map_err(|e| format!("无法打开数据库: {}", e))?;
        let conn = Arc::new(Mutex::new(conn));

        let item_repo = Arc::new(ItemRepository::from_connection(conn));
        let item_api = Arc::new(ItemApi::new(item_repo.clone(), ReorderMetricsEngine::new()));

        Ok(Self {
            db_path,
            item_api,
            item_repo,
            _temp_file: temp_file,
        })
    }

    /// 通过 API 创建物料
    pub fn create(&self, builder: &ItemBuilder) -> ApiResult<ItemWithMetrics> {
        self.item_api.create_item(&builder.to_json())
    }

    /// 批量创建物料，返回 id 列表（按创建顺序）
    pub fn create_all(&self, builders: &[ItemBuilder]) -> ApiResult<Vec<i64>> {
        builders
            .iter()
            .map(|b| self.create(b).map(|created| created.item.id))
            .collect()
    }
}

// ==========================================
// 断言辅助
// ==========================================

/// 断言为 NotFound
pub fn assert_not_found<T: std::fmt::Debug>(result: ApiResult<T>) {
    match result {
        Err(ApiError::NotFound(_)) => {}
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

/// 断言为校验失败并返回违规项
pub fn expect_violations<T: std::fmt::Debug>(result: ApiResult<T>) -> Vec<ValidationViolation> {
    match result {
        Err(ApiError::ValidationFailed { violations, .. }) => violations,
        other => panic!("Expected ValidationFailed, got {:?}", other),
    }
}
