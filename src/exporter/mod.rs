// ==========================================
// 库存补货系统 - 导出层
// ==========================================
// 职责: 物料 + 指标的扁平化导出
// ==========================================

pub mod csv_exporter;
pub mod error;

pub use csv_exporter::{format_number, CsvExporter, EXPORT_FILE_NAME, EXPORT_HEADERS};
pub use error::ExportError;
