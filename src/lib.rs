// ==========================================
// 库存补货系统 - 核心库
// ==========================================
// 技术栈: axum + Rust + SQLite
// 系统定位: 物料台账 + 补货指标（安全库存/补货点/库存天数/年用量金额）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 引擎层 - 补货指标计算
pub mod engine;

// 导出层 - CSV
pub mod exporter;

// 配置层 - 启动配置
pub mod config;

// 数据库基础设施（连接初始化/PRAGMA/schema）
pub mod db;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - HTTP 集成
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{ReorderStatus, ServiceLevel};

// 领域实体
pub use domain::{Item, ItemAttributes, ItemDraft, ItemWithMetrics, Metrics};

// 引擎
pub use engine::{round2, ReorderMetricsEngine};

// API
pub use api::{ApiError, ApiResult, ItemApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "库存补货系统";

// 数据库版本
pub const DB_VERSION: &str = "v1";
