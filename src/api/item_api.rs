// ==========================================
// 库存补货系统 - 物料 API
// ==========================================
// 职责: 物料增删改查、指标附加、CSV 导出
// 约束: 指标每次读取现算, 不落库
// ==========================================

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::api::error::{ApiError, ApiResult};
use crate::api::validator::ItemPayloadValidator;
use crate::domain::item::Item;
use crate::domain::metrics::ItemWithMetrics;
use crate::engine::ReorderMetricsEngine;
use crate::exporter::CsvExporter;
use crate::i18n::t_with_args;
use crate::repository::item_repo::ItemRepository;

// ==========================================
// ItemApi - 物料 API
// ==========================================

/// 物料API
///
/// 职责：
/// 1. 物料查询（附带补货指标）
/// 2. 物料创建/更新（请求体校验）/删除
/// 3. CSV 导出
pub struct ItemApi {
    item_repo: Arc<ItemRepository>,
    engine: ReorderMetricsEngine,
    validator: ItemPayloadValidator,
    exporter: CsvExporter,
}

impl ItemApi {
    /// 创建新的ItemApi实例
    pub fn new(item_repo: Arc<ItemRepository>, engine: ReorderMetricsEngine) -> Self {
        Self {
            item_repo,
            engine,
            validator: ItemPayloadValidator::new(),
            exporter: CsvExporter::new(engine),
        }
    }

    // ==========================================
    // 查询接口
    // ==========================================

    /// 查询物料列表（可选关键字）
    ///
    /// # 参数
    /// - query: sku / name 包含匹配（不区分大小写）
    #[instrument(skip(self))]
    pub fn list_items(&self, query: Option<&str>) -> ApiResult<Vec<ItemWithMetrics>> {
        let items = self.item_repo.list(query)?;
        debug!(count = items.len(), "物料列表查询完成");
        let metrics = self.engine.compute_batch(&items);
        Ok(items
            .into_iter()
            .zip(metrics)
            .map(|(item, metrics)| ItemWithMetrics { item, metrics })
            .collect())
    }

    /// 查询物料详情
    pub fn get_item(&self, id: i64) -> ApiResult<ItemWithMetrics> {
        let item = self.load(id)?;
        Ok(self.enrich(item))
    }

    // ==========================================
    // 写入接口
    // ==========================================

    /// 创建物料
    ///
    /// # 返回
    /// - Ok(ItemWithMetrics): 新建物料（回读后附带指标）
    /// - Err(ApiError::ValidationFailed): 请求体不合法
    pub fn create_item(&self, body: &Value) -> ApiResult<ItemWithMetrics> {
        let draft = self.validator.validate(body)?;
        let id = self.item_repo.insert(&draft)?;
        info!(id, sku = %draft.sku, "物料已创建");

        self.get_item(id)
    }

    /// 更新物料（整体覆盖）
    ///
    /// 先判存在再校验: 不存在的物料直接返回 NotFound
    pub fn update_item(&self, id: i64, body: &Value) -> ApiResult<ItemWithMetrics> {
        if !self.item_repo.exists(id)? {
            return Err(self.not_found(id));
        }

        let draft = self.validator.validate(body)?;
        if !self.item_repo.update(id, &draft)? {
            // 校验与更新之间被删除
            return Err(self.not_found(id));
        }
        info!(id, sku = %draft.sku, "物料已更新");

        self.get_item(id)
    }

    /// 删除物料
    pub fn delete_item(&self, id: i64) -> ApiResult<()> {
        if !self.item_repo.delete(id)? {
            return Err(self.not_found(id));
        }
        info!(id, "物料已删除");
        Ok(())
    }

    // ==========================================
    // 导出接口
    // ==========================================

    /// 导出全部物料为 CSV（与列表同序）
    #[instrument(skip(self))]
    pub fn export_csv(&self) -> ApiResult<String> {
        let items = self.item_repo.list(None)?;
        let csv = self.exporter.export(&items)?;
        info!(rows = items.len(), "CSV 导出完成");
        Ok(csv)
    }

    // ==========================================
    // 内部辅助
    // ==========================================

    fn load(&self, id: i64) -> ApiResult<Item> {
        self.item_repo
            .find_by_id(id)?
            .ok_or_else(|| self.not_found(id))
    }

    fn enrich(&self, item: Item) -> ItemWithMetrics {
        let metrics = self.engine.compute_item(&item);
        ItemWithMetrics { item, metrics }
    }

    fn not_found(&self, id: i64) -> ApiError {
        ApiError::NotFound(t_with_args("item.not_found", &[("id", id.to_string().as_str())]))
    }
}
