// ==========================================
// 库存补货系统 - 数值舍入
// ==========================================
// 所有对外数值字段（指标 + CSV 导出）共用同一舍入规则
// ==========================================

/// 保留两位小数
///
/// 先加 `f64::EPSILON` 抵消二进制表示误差（如 1.005 实际存为 1.00499…），
/// 再按"远离零"规则四舍五入到分。
pub fn round2(value: f64) -> f64 {
    ((value + f64::EPSILON) * 100.0).round() / 100.0
}
