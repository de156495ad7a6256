//! # LCL Core
//!
//! 生產規劃核心資料模型與類型定義

pub mod config;
pub mod consumption;
pub mod demand;
pub mod mode;
pub mod problem;
pub mod product;
pub mod resource;
pub mod response;

// Re-export 主要類型
pub use config::ClientConfig;
pub use consumption::ConsumptionCoefficient;
pub use demand::{CapacityInput, DemandInput};
pub use mode::ProductionMode;
pub use problem::{ObjectiveSense, ProblemDefinition};
pub use product::{ModeCost, Product, ProductDraft, ResourceConsumption};
pub use resource::Resource;
pub use response::{ProducedQuantity, SolveStatus, SolverResponse, VariableRef};

/// 規劃錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum LclError {
    #[error("無法連線至後端: {0}")]
    Transport(String),

    #[error("後端回應錯誤 ({status}): {message}")]
    Http { status: u16, message: String },

    #[error("回應解析失敗: {0}")]
    Decode(String),

    #[error("帳號或密碼錯誤")]
    InvalidCredentials,

    #[error("已有求解請求進行中")]
    SolveInProgress,

    #[error("無效的規劃問題: {0}")]
    InvalidProblem(String),

    #[error("無效的產品資料: {0}")]
    InvalidProduct(String),

    #[error("配置錯誤: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LclError>;
