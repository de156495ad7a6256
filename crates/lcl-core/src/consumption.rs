//! 資源消耗係數

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 產品 × 模式 × 資源 → 每單位消耗量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionCoefficient {
    pub product_id: i64,
    pub mode_id: i64,
    pub resource_id: i64,

    /// 每生產一單位產品所消耗的資源量
    pub units_consumed_per_unit: Decimal,
}

impl ConsumptionCoefficient {
    pub fn new(product_id: i64, mode_id: i64, resource_id: i64, units_consumed_per_unit: Decimal) -> Self {
        Self {
            product_id,
            mode_id,
            resource_id,
            units_consumed_per_unit: units_consumed_per_unit.max(Decimal::ZERO),
        }
    }

    /// 檢查是否適用於指定的產品與模式
    pub fn applies_to(&self, product_id: i64, mode_id: i64) -> bool {
        self.product_id == product_id && self.mode_id == mode_id
    }

    /// 計算生產指定數量時的資源消耗，溢位時取 Decimal 上下限
    pub fn consumption_for(&self, quantity: Decimal) -> Decimal {
        quantity.saturating_mul(self.units_consumed_per_unit)
    }
}
