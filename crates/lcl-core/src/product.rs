//! 產品模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{LclError, Result};

/// 產品（可製造的品項，附帶需求目標）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// 產品ID
    pub id: i64,

    /// 產品名稱，同時作為舊版求解器變數名稱的比對鍵
    pub name: String,

    /// 最低總需求
    pub minimum_total_demand: Decimal,

    /// 最低委外需求
    pub minimum_outsourced_demand: Decimal,
}

impl Product {
    /// 創建新的產品
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            minimum_total_demand: Decimal::ZERO,
            minimum_outsourced_demand: Decimal::ZERO,
        }
    }

    /// 建構器模式：設置最低總需求
    pub fn with_minimum_total_demand(mut self, demand: Decimal) -> Self {
        self.minimum_total_demand = demand;
        self
    }

    /// 建構器模式：設置最低委外需求
    pub fn with_minimum_outsourced_demand(mut self, demand: Decimal) -> Self {
        self.minimum_outsourced_demand = demand;
        self
    }
}

/// 各生產模式的單位成本與利潤
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeCost {
    pub mode_id: i64,
    pub unit_cost: Decimal,
    pub unit_profit: Decimal,
}

/// 每單位產品的資源消耗
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceConsumption {
    pub resource_id: i64,
    pub units_per_unit: Decimal,
}

/// 新增/修改產品時提交的內容
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub minimum_outsourced_demand: Decimal,
    pub minimum_total_demand: Decimal,
    pub costs: Vec<ModeCost>,
    pub consumptions: Vec<ResourceConsumption>,
}

impl ProductDraft {
    /// 創建新的產品草稿
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            minimum_outsourced_demand: Decimal::ZERO,
            minimum_total_demand: Decimal::ZERO,
            costs: Vec::new(),
            consumptions: Vec::new(),
        }
    }

    /// 建構器模式：設置最低總需求
    pub fn with_minimum_total_demand(mut self, demand: Decimal) -> Self {
        self.minimum_total_demand = demand;
        self
    }

    /// 建構器模式：設置最低委外需求
    pub fn with_minimum_outsourced_demand(mut self, demand: Decimal) -> Self {
        self.minimum_outsourced_demand = demand;
        self
    }

    /// 建構器模式：添加模式成本
    pub fn with_mode_cost(mut self, mode_id: i64, unit_cost: Decimal, unit_profit: Decimal) -> Self {
        self.costs.push(ModeCost {
            mode_id,
            unit_cost,
            unit_profit,
        });
        self
    }

    /// 建構器模式：添加資源消耗
    pub fn with_consumption(mut self, resource_id: i64, units_per_unit: Decimal) -> Self {
        self.consumptions.push(ResourceConsumption {
            resource_id,
            units_per_unit,
        });
        self
    }

    /// 提交前檢查
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(LclError::InvalidProduct("產品名稱不可為空".to_string()));
        }

        if self.minimum_total_demand < Decimal::ZERO || self.minimum_outsourced_demand < Decimal::ZERO {
            return Err(LclError::InvalidProduct(format!(
                "{}: 最低需求不可為負",
                self.name
            )));
        }

        let mut seen_modes = HashSet::new();
        for cost in &self.costs {
            if !seen_modes.insert(cost.mode_id) {
                return Err(LclError::InvalidProduct(format!(
                    "{}: 模式 {} 重複設定成本",
                    self.name, cost.mode_id
                )));
            }
        }

        let mut seen_resources = HashSet::new();
        for consumption in &self.consumptions {
            if consumption.units_per_unit < Decimal::ZERO {
                return Err(LclError::InvalidProduct(format!(
                    "{}: 資源 {} 的消耗量不可為負",
                    self.name, consumption.resource_id
                )));
            }
            if !seen_resources.insert(consumption.resource_id) {
                return Err(LclError::InvalidProduct(format!(
                    "{}: 資源 {} 重複設定消耗量",
                    self.name, consumption.resource_id
                )));
            }
        }

        Ok(())
    }
}
