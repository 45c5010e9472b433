// ==========================================
// 库存补货系统 - CSV 导出
// ==========================================
// 输出: 表头 + 每个物料一行（物料字段 + 指标字段）
// 转义: 含逗号/引号/换行的字段加引号, 内部引号加倍
// ==========================================

use crate::domain::item::Item;
use crate::domain::metrics::Metrics;
use crate::engine::ReorderMetricsEngine;
use crate::exporter::error::ExportError;
use csv::{QuoteStyle, Terminator, WriterBuilder};

/// 导出列顺序
pub const EXPORT_HEADERS: [&str; 13] = [
    "id",
    "sku",
    "name",
    "unitCost",
    "dailyDemand",
    "leadTimeDays",
    "currentStock",
    "serviceLevel",
    "demandStdDev",
    "safetyStock",
    "reorderPoint",
    "daysOfStock",
    "annualUsageValue",
];

/// 默认下载文件名
pub const EXPORT_FILE_NAME: &str = "inventory_export.csv";

// ==========================================
// CsvExporter - CSV 导出器
// ==========================================
pub struct CsvExporter {
    engine: ReorderMetricsEngine,
}

impl CsvExporter {
    /// 创建新的 CsvExporter
    pub fn new(engine: ReorderMetricsEngine) -> Self {
        Self { engine }
    }

    /// 导出为 CSV 文本
    ///
    /// 指标逐行现算, 与列表视图一致
    pub fn export(&self, items: &[Item]) -> Result<String, ExportError> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(EXPORT_HEADERS)?;

        let metrics = self.engine.compute_batch(items);
        for (item, metrics) in items.iter().zip(&metrics) {
            writer.write_record(export_row(item, metrics))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ExportError::BufferError(e.to_string()))?;
        Ok(String::from_utf8(bytes)?)
    }
}

fn export_row(item: &Item, metrics: &Metrics) -> [String; 13] {
    [
        item.id.to_string(),
        item.sku.clone(),
        item.name.clone(),
        format_number(item.unit_cost),
        format_number(item.daily_demand),
        format_number(item.lead_time_days),
        format_number(item.current_stock),
        item.service_level.clone(),
        format_number(item.demand_std_dev),
        format_number(metrics.safety_stock),
        format_number(metrics.reorder_point),
        format_number(metrics.days_of_stock),
        format_number(metrics.annual_usage_value),
    ]
}

/// 最短十进制表示（5.0 → "5", 11.07 → "11.07"）
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}
