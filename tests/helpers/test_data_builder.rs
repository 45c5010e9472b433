// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use inventory_reorder::domain::item::ItemDraft;
use inventory_reorder::domain::types::ServiceLevel;
use serde_json::{json, Value};

// ==========================================
// 物料构建器
// ==========================================

#[derive(Debug, Clone)]
pub struct ItemBuilder {
    sku: String,
    name: String,
    unit_cost: f64,
    daily_demand: f64,
    lead_time_days: f64,
    current_stock: f64,
    service_level: Option<String>,
    demand_std_dev: Option<f64>,
}

impl ItemBuilder {
    pub fn new(sku: &str) -> Self {
        Self {
            sku: sku.to_string(),
            name: format!("Item {}", sku),
            unit_cost: 1.0,
            daily_demand: 10.0,
            lead_time_days: 5.0,
            current_stock: 100.0,
            service_level: None,
            demand_std_dev: None,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn unit_cost(mut self, cost: f64) -> Self {
        self.unit_cost = cost;
        self
    }

    pub fn daily_demand(mut self, demand: f64) -> Self {
        self.daily_demand = demand;
        self
    }

    pub fn lead_time_days(mut self, days: f64) -> Self {
        self.lead_time_days = days;
        self
    }

    pub fn current_stock(mut self, stock: f64) -> Self {
        self.current_stock = stock;
        self
    }

    pub fn service_level(mut self, code: &str) -> Self {
        self.service_level = Some(code.to_string());
        self
    }

    pub fn demand_std_dev(mut self, sigma: f64) -> Self {
        self.demand_std_dev = Some(sigma);
        self
    }

    /// 构建写入请求体（camelCase, 可选字段未设置时省略）
    pub fn to_json(&self) -> Value {
        let mut body = json!({
            "sku": self.sku,
            "name": self.name,
            "unitCost": self.unit_cost,
            "dailyDemand": self.daily_demand,
            "leadTimeDays": self.lead_time_days,
            "currentStock": self.current_stock,
        });
        if let Some(code) = &self.service_level {
            body["serviceLevel"] = json!(code);
        }
        if let Some(sigma) = self.demand_std_dev {
            body["demandStdDev"] = json!(sigma);
        }
        body
    }

    /// 构建仓储层草稿
    pub fn to_draft(&self) -> ItemDraft {
        ItemDraft {
            sku: self.sku.clone(),
            name: self.name.clone(),
            unit_cost: self.unit_cost,
            daily_demand: self.daily_demand,
            lead_time_days: self.lead_time_days,
            current_stock: self.current_stock,
            service_level: self
                .service_level
                .as_deref()
                .and_then(ServiceLevel::from_code)
                .unwrap_or_default(),
            demand_std_dev: self.demand_std_dev.unwrap_or(0.0),
        }
    }
}
