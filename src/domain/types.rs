// ==========================================
// 库存补货系统 - 领域类型定义
// ==========================================
// 服务水平: 固定枚举 (0.90 / 0.95 / 0.97 / 0.99)
// 补货状态: REORDER_NOW / LOW_SOON / OK
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 服务水平 (Service Level)
// ==========================================
// 目标不缺货概率; 存储为字符串代码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ServiceLevel {
    #[serde(rename = "0.90")]
    P90, // 90%
    #[default]
    #[serde(rename = "0.95")]
    P95, // 95% (默认)
    #[serde(rename = "0.97")]
    P97, // 97%
    #[serde(rename = "0.99")]
    P99, // 99%
}

impl ServiceLevel {
    /// 全部合法取值（按服务水平升序）
    pub const ALL: [ServiceLevel; 4] = [
        ServiceLevel::P90,
        ServiceLevel::P95,
        ServiceLevel::P97,
        ServiceLevel::P99,
    ];

    /// 存储/传输用的字符串代码
    pub fn as_code(&self) -> &'static str {
        match self {
            ServiceLevel::P90 => "0.90",
            ServiceLevel::P95 => "0.95",
            ServiceLevel::P97 => "0.97",
            ServiceLevel::P99 => "0.99",
        }
    }

    /// 按字符串代码精确匹配（"0.9" 不等于 "0.90"）
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.as_code() == code)
    }

    /// 单侧正态分布临界值 (z)
    pub fn z_factor(&self) -> f64 {
        match self {
            ServiceLevel::P90 => 1.28,
            ServiceLevel::P95 => 1.65,
            ServiceLevel::P97 => 1.88,
            ServiceLevel::P99 => 2.33,
        }
    }
}

impl fmt::Display for ServiceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

// ==========================================
// 补货状态 (Reorder Status)
// ==========================================
// 序列化格式: SCREAMING_SNAKE_CASE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReorderStatus {
    ReorderNow, // 库存 ≤ 补货点
    LowSoon,    // 库存 ≤ 补货点 × 1.2
    Ok,         // 其他
}

impl fmt::Display for ReorderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReorderStatus::ReorderNow => write!(f, "REORDER_NOW"),
            ReorderStatus::LowSoon => write!(f, "LOW_SOON"),
            ReorderStatus::Ok => write!(f, "OK"),
        }
    }
}
