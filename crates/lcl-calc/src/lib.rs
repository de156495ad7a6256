//! # LCL Reconciliation Engine
//!
//! 將求解器回應對應回產品/模式/資源，並計算需求滿足與資源利用率

pub mod breakdown;
pub mod chart;
pub mod reconciler;
pub mod utilization;
pub mod variable_key;

// Re-export 主要類型
pub use breakdown::{ModeQuantity, ProductionBreakdown};
pub use chart::{ChartSeries, ProductionChart};
pub use reconciler::Reconciler;
pub use utilization::ResourceUtilization;

use lcl_core::VariableRef;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 對帳結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconcileResult {
    /// 各產品的生產分解（順序與輸入產品相同）
    pub breakdowns: Vec<ProductionBreakdown>,

    /// 各資源的利用率（順序與輸入資源相同）
    pub utilizations: Vec<ResourceUtilization>,

    /// 無法對應的求解器項目
    pub unmatched: Vec<UnmatchedEntry>,
}

impl ReconcileResult {
    /// 所有求解器項目都成功對應
    pub fn is_complete(&self) -> bool {
        self.unmatched.is_empty()
    }

    pub fn breakdown_for(&self, product_id: i64) -> Option<&ProductionBreakdown> {
        self.breakdowns.iter().find(|b| b.product_id == product_id)
    }

    pub fn utilization_for(&self, resource_id: i64) -> Option<&ResourceUtilization> {
        self.utilizations.iter().find(|u| u.resource_id == resource_id)
    }

    /// 需求未滿足的產品
    pub fn unsatisfied(&self) -> impl Iterator<Item = &ProductionBreakdown> {
        self.breakdowns.iter().filter(|b| !b.demand_satisfied)
    }

    /// 全部產品的總產量
    pub fn total_produced(&self) -> Decimal {
        self.breakdowns
            .iter()
            .fold(Decimal::ZERO, |acc, b| acc.saturating_add(b.total_produced))
    }
}

/// 無法對應的求解器項目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnmatchedEntry {
    pub key: VariableRef,
    pub quantity: Decimal,
    pub reason: UnmatchedReason,
}

impl UnmatchedEntry {
    pub fn new(key: VariableRef, quantity: Decimal, reason: UnmatchedReason) -> Self {
        Self {
            key,
            quantity,
            reason,
        }
    }
}

/// 無法對應的原因
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnmatchedReason {
    /// 變數名稱的段數不足
    MalformedKey,
    /// 找不到產品（名稱或ID）
    UnknownProduct(String),
    /// 找不到生產模式（名稱或ID）
    UnknownMode(String),
    /// 消耗係數指向不存在的資源
    UnknownResource(i64),
}

impl std::fmt::Display for UnmatchedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedKey => f.write_str("變數名稱格式錯誤"),
            Self::UnknownProduct(product) => write!(f, "未知產品: {}", product),
            Self::UnknownMode(mode) => write!(f, "未知生產模式: {}", mode),
            Self::UnknownResource(id) => write!(f, "未知資源: {}", id),
        }
    }
}
