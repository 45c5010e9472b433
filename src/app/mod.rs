// ==========================================
// 库存补货系统 - 应用层
// ==========================================
// 职责: HTTP 集成, 连接客户端与 API 层
// ==========================================

pub mod http;
pub mod state;

// 重导出
pub use crate::config::get_default_db_path;
pub use http::{router, ErrorResponse, HEALTH_SERVICE_NAME};
pub use state::AppState;
