// ==========================================
// 库存补货系统 - 物料领域模型
// ==========================================
// 对齐: items 表 (db.rs)
// ==========================================

use crate::domain::types::ServiceLevel;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// Item - 物料记录（仓储持有）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    // ===== 主键 =====
    pub id: i64, // 自增ID (仓储分配)

    // ===== 标识 =====
    pub sku: String,  // SKU 编码
    pub name: String, // 显示名称

    // ===== 需求与补货参数 =====
    pub unit_cost: f64,      // 单位成本
    pub daily_demand: f64,   // 日均需求
    pub lead_time_days: f64, // 补货提前期 (天)
    pub current_stock: f64,  // 当前库存

    // 原样保存的服务水平代码; 历史数据可能不在枚举内, 由引擎降级处理
    pub service_level: String,
    pub demand_std_dev: f64, // 日需求标准差 (0 = 未知)

    // ===== 审计字段 =====
    #[serde(skip_serializing)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(skip_serializing)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Item {
    /// 提取引擎输入
    pub fn attributes(&self) -> ItemAttributes {
        ItemAttributes {
            unit_cost: Some(self.unit_cost),
            daily_demand: Some(self.daily_demand),
            lead_time_days: Some(self.lead_time_days),
            current_stock: Some(self.current_stock),
            service_level: Some(self.service_level.clone()),
            demand_std_dev: Some(self.demand_std_dev),
        }
    }
}

// ==========================================
// ItemDraft - 校验通过的写入数据
// ==========================================
// 由 api::validator 产出, 仓储层直接落库
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    pub sku: String,
    pub name: String,
    pub unit_cost: f64,
    pub daily_demand: f64,
    pub lead_time_days: f64,
    pub current_stock: f64,
    pub service_level: ServiceLevel,
    pub demand_std_dev: f64,
}

// ==========================================
// ItemAttributes - 补货指标引擎输入
// ==========================================
// 所有字段可缺失; 缺失或非数值在计算前归零
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemAttributes {
    pub unit_cost: Option<f64>,
    pub daily_demand: Option<f64>,
    pub lead_time_days: Option<f64>,
    pub current_stock: Option<f64>,
    pub service_level: Option<String>,
    pub demand_std_dev: Option<f64>,
}

impl From<&ItemDraft> for ItemAttributes {
    fn from(draft: &ItemDraft) -> Self {
        Self {
            unit_cost: Some(draft.unit_cost),
            daily_demand: Some(draft.daily_demand),
            lead_time_days: Some(draft.lead_time_days),
            current_stock: Some(draft.current_stock),
            service_level: Some(draft.service_level.as_code().to_string()),
            demand_std_dev: Some(draft.demand_std_dev),
        }
    }
}
