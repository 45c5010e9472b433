// ==========================================
// 库存补货系统 - 物料写入校验器
// ==========================================
// 职责: 创建/更新请求体 → ItemDraft
// 规则:
// - sku / name: 必填字符串, 长度 ≥ 1
// - unitCost / dailyDemand / leadTimeDays / currentStock: 必填数值, ≥ 0
// - serviceLevel: 可选, 四个枚举值之一, 默认 0.95
// - demandStdDev: 可选数值, ≥ 0, 默认 0
// - 未知字段忽略
// 违规项全部收集后统一返回（非首错即停）
// ==========================================

use serde_json::{Map, Value};

use crate::api::error::{ApiError, ApiResult, ValidationViolation};
use crate::domain::item::ItemDraft;
use crate::domain::types::ServiceLevel;
use crate::i18n::{t, t_with_args};

// 违规类型代码
pub const CODE_REQUIRED: &str = "REQUIRED";
pub const CODE_INVALID_TYPE: &str = "INVALID_TYPE";
pub const CODE_TOO_SMALL: &str = "TOO_SMALL";
pub const CODE_INVALID_ENUM: &str = "INVALID_ENUM";

// ==========================================
// ItemPayloadValidator - 物料写入校验器
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemPayloadValidator;

impl ItemPayloadValidator {
    /// 创建新的校验器
    pub fn new() -> Self {
        Self
    }

    /// 校验请求体
    ///
    /// # 返回
    /// - Ok(ItemDraft): 校验通过（已填充默认值）
    /// - Err(ApiError::ValidationFailed): 全部违规项
    pub fn validate(&self, body: &Value) -> ApiResult<ItemDraft> {
        let obj = match body.as_object() {
            Some(obj) => obj,
            None => {
                let violation = ValidationViolation {
                    field: String::new(),
                    code: CODE_INVALID_TYPE.to_string(),
                    message: t("validation.not_object"),
                };
                return Err(ApiError::ValidationFailed {
                    reason: violation.message.clone(),
                    violations: vec![violation],
                });
            }
        };

        let mut violations = Vec::new();

        let sku = required_string(obj, "sku", &mut violations);
        let name = required_string(obj, "name", &mut violations);
        let unit_cost = required_non_negative(obj, "unitCost", &mut violations);
        let daily_demand = required_non_negative(obj, "dailyDemand", &mut violations);
        let lead_time_days = required_non_negative(obj, "leadTimeDays", &mut violations);
        let current_stock = required_non_negative(obj, "currentStock", &mut violations);
        let service_level = optional_service_level(obj, "serviceLevel", &mut violations);
        let demand_std_dev = match obj.get("demandStdDev") {
            None => Some(0.0),
            Some(value) => non_negative(value, "demandStdDev", &mut violations),
        };

        match (
            sku,
            name,
            unit_cost,
            daily_demand,
            lead_time_days,
            current_stock,
            service_level,
            demand_std_dev,
        ) {
            (
                Some(sku),
                Some(name),
                Some(unit_cost),
                Some(daily_demand),
                Some(lead_time_days),
                Some(current_stock),
                Some(service_level),
                Some(demand_std_dev),
            ) if violations.is_empty() => Ok(ItemDraft {
                sku,
                name,
                unit_cost,
                daily_demand,
                lead_time_days,
                current_stock,
                service_level,
                demand_std_dev,
            }),
            _ => {
                let count = violations.len().to_string();
                tracing::debug!(count = violations.len(), "物料请求体校验失败");
                Err(ApiError::ValidationFailed {
                    reason: t_with_args("validation.summary", &[("count", count.as_str())]),
                    violations,
                })
            }
        }
    }
}

fn violation(field: &str, code: &str, key: &str, extra: &[(&str, &str)]) -> ValidationViolation {
    let mut args = vec![("field", field)];
    args.extend_from_slice(extra);
    ValidationViolation {
        field: field.to_string(),
        code: code.to_string(),
        message: t_with_args(key, &args),
    }
}

fn required_string(
    obj: &Map<String, Value>,
    field: &str,
    violations: &mut Vec<ValidationViolation>,
) -> Option<String> {
    match obj.get(field) {
        None => {
            violations.push(violation(field, CODE_REQUIRED, "validation.required", &[]));
            None
        }
        Some(Value::String(s)) if s.is_empty() => {
            violations.push(violation(field, CODE_TOO_SMALL, "validation.empty_string", &[]));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            violations.push(violation(field, CODE_INVALID_TYPE, "validation.expected_string", &[]));
            None
        }
    }
}

fn required_non_negative(
    obj: &Map<String, Value>,
    field: &str,
    violations: &mut Vec<ValidationViolation>,
) -> Option<f64> {
    match obj.get(field) {
        None => {
            violations.push(violation(field, CODE_REQUIRED, "validation.required", &[]));
            None
        }
        Some(value) => non_negative(value, field, violations),
    }
}

fn non_negative(
    value: &Value,
    field: &str,
    violations: &mut Vec<ValidationViolation>,
) -> Option<f64> {
    match value.as_f64() {
        Some(n) if !n.is_finite() => {
            violations.push(violation(field, CODE_INVALID_TYPE, "validation.expected_number", &[]));
            None
        }
        Some(n) if n < 0.0 => {
            violations.push(violation(field, CODE_TOO_SMALL, "validation.negative", &[]));
            None
        }
        Some(n) => Some(n),
        None => {
            violations.push(violation(field, CODE_INVALID_TYPE, "validation.expected_number", &[]));
            None
        }
    }
}

fn optional_service_level(
    obj: &Map<String, Value>,
    field: &str,
    violations: &mut Vec<ValidationViolation>,
) -> Option<ServiceLevel> {
    let code = match obj.get(field) {
        None => return Some(ServiceLevel::default()),
        Some(Value::String(code)) => code,
        Some(_) => {
            violations.push(violation(field, CODE_INVALID_TYPE, "validation.expected_string", &[]));
            return None;
        }
    };

    match ServiceLevel::from_code(code) {
        Some(level) => Some(level),
        None => {
            let allowed = ServiceLevel::ALL
                .iter()
                .map(|l| l.as_code())
                .collect::<Vec<_>>()
                .join(" / ");
            violations.push(violation(
                field,
                CODE_INVALID_ENUM,
                "validation.invalid_enum",
                &[("allowed", allowed.as_str())],
            ));
            None
        }
    }
}
