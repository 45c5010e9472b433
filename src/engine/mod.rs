// ==========================================
// 库存补货系统 - 引擎层
// ==========================================
// 职责: 实现补货指标计算规则,不拼 SQL
// 红线: Engine 不拼 SQL, 不做 I/O
// ==========================================

pub mod reorder_metrics;
pub mod rounding;

// 重导出核心引擎
pub use reorder_metrics::{
    classify, NormalizedAttributes, ReorderMetricsEngine, DAYS_PER_YEAR, FALLBACK_SAFETY_RATIO,
    LOW_SOON_MULTIPLIER,
};
pub use rounding::round2;
