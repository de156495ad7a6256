//! 需求與產能輸入

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 使用者提交問題時輸入的產品需求
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandInput {
    /// 產品ID
    pub product_id: i64,

    /// 需求數量
    pub quantity: Decimal,
}

impl DemandInput {
    pub fn new(product_id: i64, quantity: Decimal) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// 使用者自訂的資源產能
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityInput {
    /// 資源ID
    pub resource_id: i64,

    /// 可用產能
    pub capacity: Decimal,
}

impl CapacityInput {
    pub fn new(resource_id: i64, capacity: Decimal) -> Self {
        Self {
            resource_id,
            capacity,
        }
    }
}
