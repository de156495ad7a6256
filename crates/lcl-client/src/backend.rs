//! 規劃後端介面

use async_trait::async_trait;
use lcl_core::{
    ConsumptionCoefficient, DemandInput, ProblemDefinition, Product, ProductDraft, ProductionMode,
    Resource, Result, SolverResponse,
};

/// 求解時後端一併回傳的參考資料快照
///
/// 各欄位缺少時，由呼叫端以求解前查詢的資料補上。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmbeddedReference {
    pub products: Option<Vec<Product>>,
    pub modes: Option<Vec<ProductionMode>>,
    pub resources: Option<Vec<Resource>>,
    pub coefficients: Option<Vec<ConsumptionCoefficient>>,
    pub demands: Option<Vec<DemandInput>>,
}

impl EmbeddedReference {
    /// 快照已包含對帳所需的產品、模式與資源
    pub fn is_complete(&self) -> bool {
        self.products.is_some() && self.modes.is_some() && self.resources.is_some()
    }
}

/// 一次求解的結果
#[derive(Debug, Clone, PartialEq)]
pub struct SolveOutcome {
    pub response: SolverResponse,
    pub embedded: EmbeddedReference,
}

impl SolveOutcome {
    /// 不含參考資料快照的結果
    pub fn bare(response: SolverResponse) -> Self {
        Self {
            response,
            embedded: EmbeddedReference::default(),
        }
    }
}

/// 規劃後端（產品/資源維護與求解）
#[async_trait]
pub trait PlanningBackend: Send + Sync {
    /// 產品維護畫面使用的完整產品清單
    async fn list_products(&self) -> Result<Vec<Product>>;

    /// 問題定義畫面使用的產品（僅 ID 與名稱）
    async fn list_models(&self) -> Result<Vec<Product>>;

    async fn list_resources(&self) -> Result<Vec<Resource>>;

    async fn list_production_modes(&self) -> Result<Vec<ProductionMode>>;

    async fn create_product(&self, draft: &ProductDraft) -> Result<()>;

    async fn update_product(&self, id: i64, draft: &ProductDraft) -> Result<()>;

    async fn delete_product(&self, id: i64) -> Result<()>;

    /// 提交規劃問題；求解器回報不可行不視為錯誤
    async fn solve(&self, problem: &ProblemDefinition) -> Result<SolveOutcome>;
}
