//! 規劃問題定義

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::{CapacityInput, DemandInput, LclError, Product, Resource, Result};

/// 目標函數方向
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectiveSense {
    /// 最小化總成本
    #[default]
    Min,
    /// 最大化利潤
    Max,
}

/// 提交給求解器的產品/模式/資源配置問題
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemDefinition {
    pub objective: ObjectiveSense,
    pub demands: Vec<DemandInput>,
    pub capacities: Vec<CapacityInput>,
}

impl ProblemDefinition {
    /// 依參考資料建立初始問題：需求為 0，產能取資源預設值
    pub fn initial(products: &[Product], resources: &[Resource]) -> Self {
        Self {
            objective: ObjectiveSense::default(),
            demands: products
                .iter()
                .map(|p| DemandInput::new(p.id, Decimal::ZERO))
                .collect(),
            capacities: resources
                .iter()
                .map(|r| CapacityInput::new(r.id, r.capacity))
                .collect(),
        }
    }

    /// 建構器模式：設置目標方向
    pub fn with_objective(mut self, objective: ObjectiveSense) -> Self {
        self.objective = objective;
        self
    }

    /// 更新產品需求；產品不在問題中時回傳 false
    pub fn set_demand(&mut self, product_id: i64, quantity: Decimal) -> bool {
        match self.demands.iter_mut().find(|d| d.product_id == product_id) {
            Some(demand) => {
                demand.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// 更新資源產能；資源不在問題中時回傳 false
    pub fn set_capacity(&mut self, resource_id: i64, capacity: Decimal) -> bool {
        match self.capacities.iter_mut().find(|c| c.resource_id == resource_id) {
            Some(entry) => {
                entry.capacity = capacity;
                true
            }
            None => false,
        }
    }

    /// 重設為初始狀態
    pub fn reset(&mut self, products: &[Product], resources: &[Resource]) {
        *self = Self::initial(products, resources);
    }

    /// 取得產品需求，未設定時為 0
    pub fn demand_for(&self, product_id: i64) -> Decimal {
        self.demands
            .iter()
            .find(|d| d.product_id == product_id)
            .map(|d| d.quantity)
            .unwrap_or(Decimal::ZERO)
    }

    /// 檢查是否可提交求解
    pub fn can_solve(&self) -> bool {
        !self.demands.is_empty() && self.demands.iter().all(|d| d.quantity >= Decimal::ZERO)
    }

    /// 提交前完整檢查
    pub fn validate(&self) -> Result<()> {
        if self.demands.is_empty() {
            return Err(LclError::InvalidProblem("沒有任何產品需求".to_string()));
        }

        let mut seen = HashSet::new();
        for demand in &self.demands {
            if demand.quantity < Decimal::ZERO {
                return Err(LclError::InvalidProblem(format!(
                    "產品 {} 的需求不可為負: {}",
                    demand.product_id, demand.quantity
                )));
            }
            if !seen.insert(demand.product_id) {
                return Err(LclError::InvalidProblem(format!(
                    "產品 {} 重複設定需求",
                    demand.product_id
                )));
            }
        }

        for capacity in &self.capacities {
            if capacity.capacity < Decimal::ZERO {
                return Err(LclError::InvalidProblem(format!(
                    "資源 {} 的產能不可為負: {}",
                    capacity.resource_id, capacity.capacity
                )));
            }
        }

        Ok(())
    }

    /// [`validate`](Self::validate) 並確認所有需求與產能都指向已知的產品與資源
    pub fn validate_against(&self, products: &[Product], resources: &[Resource]) -> Result<()> {
        self.validate()?;

        if let Some(demand) = self
            .demands
            .iter()
            .find(|d| !products.iter().any(|p| p.id == d.product_id))
        {
            return Err(LclError::InvalidProblem(format!(
                "未知產品: {}",
                demand.product_id
            )));
        }

        if let Some(capacity) = self
            .capacities
            .iter()
            .find(|c| !resources.iter().any(|r| r.id == c.resource_id))
        {
            return Err(LclError::InvalidProblem(format!(
                "未知資源: {}",
                capacity.resource_id
            )));
        }

        Ok(())
    }
}
