//! 求解器回應模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 求解器回報成功時使用的狀態字串
pub const SUCCESS_STATUS: &str = "Sucesso";

/// 求解狀態
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveStatus {
    /// 找到最佳解
    Success,
    /// 不可行或其他失敗（保留原始狀態字串）
    Failed(String),
}

impl SolveStatus {
    /// 從後端狀態字串轉換
    pub fn from_wire(status: &str) -> Self {
        if status == SUCCESS_STATUS {
            Self::Success
        } else {
            Self::Failed(status.to_string())
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// 求解器變數與領域實體之間的連結
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariableRef {
    /// 明確的產品/模式ID
    Structured { product_id: i64, mode_id: i64 },

    /// 舊版以底線串接的變數名稱："<前綴>_<產品名稱>_<模式名稱>"
    Named(String),
}

impl std::fmt::Display for VariableRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Structured {
                product_id,
                mode_id,
            } => write!(f, "product={} mode={}", product_id, mode_id),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// 單一變數的產量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProducedQuantity {
    pub key: VariableRef,
    pub quantity: Decimal,
}

impl ProducedQuantity {
    pub fn structured(product_id: i64, mode_id: i64, quantity: Decimal) -> Self {
        Self {
            key: VariableRef::Structured {
                product_id,
                mode_id,
            },
            quantity,
        }
    }

    pub fn named(name: impl Into<String>, quantity: Decimal) -> Self {
        Self {
            key: VariableRef::Named(name.into()),
            quantity,
        }
    }
}

/// 後端對規劃問題的回應
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverResponse {
    pub status: SolveStatus,
    pub objective_value: Decimal,
    pub produced: Vec<ProducedQuantity>,
    pub message: Option<String>,
}

impl SolverResponse {
    /// 創建成功的回應
    pub fn success(objective_value: Decimal, produced: Vec<ProducedQuantity>) -> Self {
        Self {
            status: SolveStatus::Success,
            objective_value,
            produced,
            message: None,
        }
    }

    /// 創建失敗的回應（例如模型不可行）
    pub fn failed(status: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: SolveStatus::Failed(status.into()),
            objective_value: Decimal::ZERO,
            produced: Vec::new(),
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_wire() {
        assert_eq!(SolveStatus::from_wire("Sucesso"), SolveStatus::Success);
        assert_eq!(
            SolveStatus::from_wire("Inviável"),
            SolveStatus::Failed("Inviável".to_string())
        );
        assert!(!SolveStatus::from_wire("sucesso").is_success());
    }

    #[test]
    fn test_failed_response() {
        let response = SolverResponse::failed("Inviável", "Demanda excede capacidade");

        assert!(!response.is_success());
        assert!(response.produced.is_empty());
        assert_eq!(response.message.as_deref(), Some("Demanda excede capacidade"));
    }

    #[test]
    fn test_variable_ref_display() {
        assert_eq!(
            VariableRef::Named("Qtd_Modelo A_Interno".to_string()).to_string(),
            "Qtd_Modelo A_Interno"
        );
        assert_eq!(
            VariableRef::Structured {
                product_id: 1,
                mode_id: 2
            }
            .to_string(),
            "product=1 mode=2"
        );
    }
}
