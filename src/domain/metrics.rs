// ==========================================
// 库存补货系统 - 补货指标
// ==========================================
// 派生数据, 不落库; 每次读取时重新计算
// ==========================================

use crate::domain::item::Item;
use crate::domain::types::ReorderStatus;
use serde::{Deserialize, Serialize};

/// 补货指标（所有数值保留两位小数）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub safety_stock: f64,       // 安全库存
    pub reorder_point: f64,      // 补货点
    pub days_of_stock: f64,      // 可用天数 (日需求为 0 时为 0)
    pub annual_usage_value: f64, // 年消耗金额 (365 天)
    pub status: ReorderStatus,
}

/// 物料 + 指标（列表/详情视图）
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemWithMetrics {
    #[serde(flatten)]
    pub item: Item,
    pub metrics: Metrics,
}
