// ==========================================
// 库存补货系统 - 配置层
// ==========================================
// 职责: 启动配置加载（环境变量 + 缺省值）
// ==========================================

pub mod app_config;

// 重导出核心配置
pub use app_config::{get_default_db_path, AppConfig, ConfigError};
