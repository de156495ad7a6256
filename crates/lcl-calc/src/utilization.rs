//! 資源利用率

use lcl_core::Resource;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 單一資源的利用率
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceUtilization {
    pub resource_id: i64,
    pub resource_name: String,
    pub capacity: Decimal,
    pub units_utilized: Decimal,

    /// 佔用百分比；產能為 0 時固定為 0
    pub occupancy_percent: Decimal,
}

impl ResourceUtilization {
    /// 創建零使用量的利用率
    pub fn new(resource: &Resource) -> Self {
        Self {
            resource_id: resource.id,
            resource_name: resource.name.clone(),
            capacity: resource.capacity,
            units_utilized: Decimal::ZERO,
            occupancy_percent: Decimal::ZERO,
        }
    }

    /// 累加資源使用量
    pub fn consume(&mut self, units: Decimal) {
        self.units_utilized = self.units_utilized.saturating_add(units);
    }

    /// 所有項目處理完後計算佔用百分比
    pub fn finalize(&mut self) {
        self.occupancy_percent = occupancy_percent(self.units_utilized, self.capacity);
    }

    /// 使用量超過產能
    pub fn is_overloaded(&self) -> bool {
        self.units_utilized > self.capacity
    }

    /// 剩餘產能（不小於 0）
    pub fn remaining(&self) -> Decimal {
        (self.capacity - self.units_utilized).max(Decimal::ZERO)
    }
}

/// `utilized / capacity * 100`，產能 <= 0 時為 0
pub fn occupancy_percent(utilized: Decimal, capacity: Decimal) -> Decimal {
    if capacity <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    utilized
        .saturating_mul(Decimal::ONE_HUNDRED)
        .checked_div(capacity)
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(60, 100, 60)]
    #[case(100, 100, 100)]
    #[case(150, 100, 150)]
    #[case(0, 100, 0)]
    #[case(40, 0, 0)]
    #[case(25, 50, 50)]
    fn test_occupancy_percent(#[case] utilized: i64, #[case] capacity: i64, #[case] expected: i64) {
        assert_eq!(
            occupancy_percent(Decimal::from(utilized), Decimal::from(capacity)),
            Decimal::from(expected)
        );
    }

    #[test]
    fn test_consume_and_finalize() {
        let resource = Resource::new(1, "Montagem", Decimal::from(80));
        let mut utilization = ResourceUtilization::new(&resource);

        utilization.consume(Decimal::from(60));
        utilization.consume(Decimal::from(40));
        utilization.finalize();

        assert_eq!(utilization.units_utilized, Decimal::from(100));
        assert_eq!(utilization.occupancy_percent, Decimal::from(125));
        assert!(utilization.is_overloaded());
        assert_eq!(utilization.remaining(), Decimal::ZERO);
    }
}
