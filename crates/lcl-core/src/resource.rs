//! 資源模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 受產能限制的資源（例如：機台工時）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// 資源ID
    pub id: i64,

    /// 資源名稱
    pub name: String,

    /// 可用產能
    pub capacity: Decimal,
}

impl Resource {
    /// 創建新的資源，負產能視為 0
    pub fn new(id: i64, name: impl Into<String>, capacity: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            capacity: capacity.max(Decimal::ZERO),
        }
    }

    /// 建構器模式：覆寫產能（例如使用者自訂產能）
    pub fn with_capacity(mut self, capacity: Decimal) -> Self {
        self.capacity = capacity.max(Decimal::ZERO);
        self
    }

    /// 檢查是否有可用產能
    pub fn has_capacity(&self) -> bool {
        self.capacity > Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_capacity_clamped() {
        let resource = Resource::new(1, "Montagem", Decimal::from(-5));
        assert_eq!(resource.capacity, Decimal::ZERO);
        assert!(!resource.has_capacity());

        let resource = resource.with_capacity(Decimal::from(120));
        assert!(resource.has_capacity());
    }
}
