//! 產品生產分解

use lcl_core::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 單一模式的產量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeQuantity {
    pub mode_name: String,
    pub quantity: Decimal,
}

/// 單一產品的生產分解
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionBreakdown {
    pub product_id: i64,
    pub product_name: String,

    /// 依求解器回應順序排列的各模式產量
    pub per_mode: Vec<ModeQuantity>,

    /// 各模式產量總和
    pub total_produced: Decimal,

    /// 使用者輸入的需求
    pub original_demand: Decimal,

    /// 總產量 >= 需求
    pub demand_satisfied: bool,
}

impl ProductionBreakdown {
    /// 創建零產量的分解
    pub fn new(product: &Product, original_demand: Decimal) -> Self {
        Self {
            product_id: product.id,
            product_name: product.name.clone(),
            per_mode: Vec::new(),
            total_produced: Decimal::ZERO,
            original_demand,
            demand_satisfied: Decimal::ZERO >= original_demand,
        }
    }

    /// 記錄一筆模式產量
    pub fn record(&mut self, mode_name: &str, quantity: Decimal) {
        self.per_mode.push(ModeQuantity {
            mode_name: mode_name.to_string(),
            quantity,
        });
        self.total_produced = self.total_produced.saturating_add(quantity);
    }

    /// 所有項目處理完後更新需求滿足狀態
    pub fn finalize(&mut self) {
        self.demand_satisfied = self.total_produced >= self.original_demand;
    }

    /// 指定模式的產量合計
    pub fn quantity_for_mode(&self, mode_name: &str) -> Decimal {
        self.per_mode
            .iter()
            .filter(|m| m.mode_name == mode_name)
            .fold(Decimal::ZERO, |acc, m| acc.saturating_add(m.quantity))
    }

    /// 尚未滿足的需求量
    pub fn shortfall(&self) -> Decimal {
        (self.original_demand - self.total_produced).max(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_finalize() {
        let product = Product::new(1, "Modelo A");
        let mut breakdown = ProductionBreakdown::new(&product, Decimal::from(40));

        breakdown.record("Interno", Decimal::from(30));
        breakdown.finalize();
        assert_eq!(breakdown.total_produced, Decimal::from(30));
        assert!(!breakdown.demand_satisfied);
        assert_eq!(breakdown.shortfall(), Decimal::from(10));

        breakdown.record("Terceirizado", Decimal::from(15));
        breakdown.finalize();
        assert_eq!(breakdown.total_produced, Decimal::from(45));
        assert!(breakdown.demand_satisfied);
        assert_eq!(breakdown.shortfall(), Decimal::ZERO);
    }

    #[test]
    fn test_zero_demand_is_satisfied() {
        let product = Product::new(2, "Modelo B");
        let breakdown = ProductionBreakdown::new(&product, Decimal::ZERO);

        assert!(breakdown.demand_satisfied);
        assert!(breakdown.per_mode.is_empty());
    }

    #[test]
    fn test_quantity_for_mode() {
        let product = Product::new(1, "Modelo A");
        let mut breakdown = ProductionBreakdown::new(&product, Decimal::ZERO);
        breakdown.record("Interno", Decimal::new(125, 1));
        breakdown.record("Interno", Decimal::new(75, 1));
        breakdown.record("Terceirizado", Decimal::from(3));

        assert_eq!(breakdown.quantity_for_mode("Interno"), Decimal::from(20));
        assert_eq!(breakdown.quantity_for_mode("Terceirizado"), Decimal::from(3));
        assert_eq!(breakdown.quantity_for_mode("Outro"), Decimal::ZERO);
    }
}
