// ==========================================
// 库存补货系统 - 导出模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导出模块错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV 写入失败: {0}")]
    CsvWriteError(#[from] csv::Error),

    #[error("CSV 缓冲区提取失败: {0}")]
    BufferError(String),

    #[error("CSV 内容不是合法 UTF-8: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),
}
