// ==========================================
// 库存补货系统 - 补货指标引擎
// ==========================================
// 职责: 物料属性 → 安全库存 / 补货点 / 可用天数 / 年消耗金额 / 状态
// 红线: 纯计算, 无状态, 无 I/O, 永不失败
// ==========================================
// 流程:
// 1. 归一化: 缺失/非数值/负数 → 0, 未知服务水平 → 0.95
// 2. 安全库存: 标准差 > 0 用统计公式, 否则按提前期需求的 10%
// 3. 补货点 / 可用天数 / 年消耗金额
// 4. 状态判定 (顺序执行, 命中即返回)
// ==========================================

use crate::domain::item::{Item, ItemAttributes};
use crate::domain::metrics::Metrics;
use crate::domain::types::{ReorderStatus, ServiceLevel};
use crate::engine::rounding::round2;
use tracing::instrument;

/// 无标准差时的安全库存比例（提前期需求的 10%）
pub const FALLBACK_SAFETY_RATIO: f64 = 0.1;

/// 预警区间倍数（补货点 × 1.2 以内为 LOW_SOON）
pub const LOW_SOON_MULTIPLIER: f64 = 1.2;

/// 年消耗金额按 365 天估算
pub const DAYS_PER_YEAR: f64 = 365.0;

// ==========================================
// NormalizedAttributes - 归一化后的引擎输入
// ==========================================
/// 全部为有限非负数值; 公式代码无需再做防御分支
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedAttributes {
    pub unit_cost: f64,
    pub daily_demand: f64,
    pub lead_time_days: f64,
    pub current_stock: f64,
    pub z_factor: f64,
    pub demand_std_dev: f64,
}

impl NormalizedAttributes {
    /// 归一化
    ///
    /// 边界处理:
    /// - None / NaN / ±∞ → 0
    /// - 负数 → 0（√L 与比较运算不会产生 NaN）
    /// - service_level 缺失或不在枚举内 → 0.95 对应的 z
    pub fn from_attributes(attrs: &ItemAttributes) -> Self {
        let z_factor = attrs
            .service_level
            .as_deref()
            .and_then(ServiceLevel::from_code)
            .unwrap_or_default()
            .z_factor();

        Self {
            unit_cost: coerce(attrs.unit_cost),
            daily_demand: coerce(attrs.daily_demand),
            lead_time_days: coerce(attrs.lead_time_days),
            current_stock: coerce(attrs.current_stock),
            z_factor,
            demand_std_dev: coerce(attrs.demand_std_dev),
        }
    }

    /// 提前期内期望需求（不含安全余量, 未舍入）
    pub fn lead_time_demand(&self) -> f64 {
        self.daily_demand * self.lead_time_days
    }
}

fn coerce(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

// ==========================================
// ReorderMetricsEngine - 补货指标引擎
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct ReorderMetricsEngine;

impl ReorderMetricsEngine {
    /// 创建新的补货指标引擎
    pub fn new() -> Self {
        Self
    }

    /// 计算单个物料的补货指标
    pub fn compute(&self, attrs: &ItemAttributes) -> Metrics {
        self.compute_normalized(&NormalizedAttributes::from_attributes(attrs))
    }

    /// 计算已落库物料的补货指标
    pub fn compute_item(&self, item: &Item) -> Metrics {
        self.compute(&item.attributes())
    }

    /// 批量计算（列表/导出共用, 结果与输入同序）
    #[instrument(skip(self, items), fields(count = items.len()))]
    pub fn compute_batch(&self, items: &[Item]) -> Vec<Metrics> {
        items.iter().map(|item| self.compute_item(item)).collect()
    }

    /// 基于归一化输入计算
    pub fn compute_normalized(&self, input: &NormalizedAttributes) -> Metrics {
        let lead_time_demand = input.lead_time_demand();
        let safety_stock = self.safety_stock(input);

        // 补货点 = 提前期需求(未舍入) + 安全库存(输出值), 整体舍入
        let reorder_point = round2(lead_time_demand + safety_stock);

        let days_of_stock = if input.daily_demand > 0.0 {
            round2(input.current_stock / input.daily_demand)
        } else {
            0.0
        };

        let annual_usage_value = round2(input.daily_demand * DAYS_PER_YEAR * input.unit_cost);

        Metrics {
            safety_stock,
            reorder_point,
            days_of_stock,
            annual_usage_value,
            status: classify(input.current_stock, reorder_point),
        }
    }

    /// 安全库存（两分支, 已舍入）
    ///
    /// - 标准差 > 0: z × σ × √L （日需求独立同分布, 方差按天累加）
    /// - 否则: 提前期需求 × 10%
    pub fn safety_stock(&self, input: &NormalizedAttributes) -> f64 {
        if input.demand_std_dev > 0.0 {
            round2(input.z_factor * input.demand_std_dev * input.lead_time_days.sqrt())
        } else {
            round2(FALLBACK_SAFETY_RATIO * input.lead_time_demand())
        }
    }
}

/// 状态判定
///
/// 规则（顺序执行，命中即返回）:
/// 1) current_stock ≤ reorder_point → REORDER_NOW（边界值视为需补货）
/// 2) current_stock ≤ reorder_point × 1.2 → LOW_SOON
/// 3) 其他 → OK
pub fn classify(current_stock: f64, reorder_point: f64) -> ReorderStatus {
    if current_stock <= reorder_point {
        ReorderStatus::ReorderNow
    } else if current_stock <= reorder_point * LOW_SOON_MULTIPLIER {
        ReorderStatus::LowSoon
    } else {
        ReorderStatus::Ok
    }
}
