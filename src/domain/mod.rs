// ==========================================
// 库存补货系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod item;
pub mod metrics;
pub mod types;

// 重导出核心类型
pub use item::{Item, ItemAttributes, ItemDraft};
pub use metrics::{ItemWithMetrics, Metrics};
pub use types::{ReorderStatus, ServiceLevel};
