//! 已登入的規劃工作階段

use chrono::Utc;
use lcl_calc::{ProductionChart, Reconciler};
use lcl_core::{ClientConfig, LclError, ProblemDefinition, Product, ProductDraft, Resource, Result};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::auth::{Authenticator, Principal};
use crate::backend::PlanningBackend;
use crate::report::PlanReport;

/// 規劃工作階段
///
/// 同一工作階段同時間只允許一個求解請求，求解進行中再次呼叫
/// [`PlanningSession::solve`] 會立即回傳 [`LclError::SolveInProgress`]。
pub struct PlanningSession<B: PlanningBackend> {
    backend: Arc<B>,
    config: ClientConfig,
    principal: Principal,
    solve_guard: Mutex<()>,
}

impl<B: PlanningBackend> PlanningSession<B> {
    /// 驗證帳號密碼後建立工作階段
    pub fn login(
        backend: Arc<B>,
        authenticator: &dyn Authenticator,
        config: ClientConfig,
        username: &str,
        password: &str,
    ) -> Result<Self> {
        config.validate()?;
        let principal = authenticator.authenticate(username, password)?;
        tracing::info!("使用者登入: {}", principal.username);

        Ok(Self {
            backend,
            config,
            principal,
            solve_guard: Mutex::new(()),
        })
    }

    /// 結束工作階段
    pub fn logout(self) -> Principal {
        tracing::info!("使用者登出: {}", self.principal.username);
        self.principal
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// 依目前的產品與資源建立初始問題
    pub async fn new_problem(&self) -> Result<ProblemDefinition> {
        let (products, resources) =
            tokio::try_join!(self.backend.list_models(), self.backend.list_resources())?;

        Ok(ProblemDefinition::initial(&products, &resources)
            .with_objective(self.config.default_objective))
    }

    pub async fn products(&self) -> Result<Vec<Product>> {
        self.backend.list_products().await
    }

    pub async fn resources(&self) -> Result<Vec<Resource>> {
        self.backend.list_resources().await
    }

    /// 新增或修改產品，完成後回傳最新的產品清單
    pub async fn save_product(&self, id: Option<i64>, draft: &ProductDraft) -> Result<Vec<Product>> {
        draft.validate()?;
        match id {
            Some(id) => self.backend.update_product(id, draft).await?,
            None => self.backend.create_product(draft).await?,
        }
        self.backend.list_products().await
    }

    /// 刪除產品，完成後回傳最新的產品清單
    pub async fn delete_product(&self, id: i64) -> Result<Vec<Product>> {
        self.backend.delete_product(id).await?;
        self.backend.list_products().await
    }

    /// 提交問題、等待求解並對帳
    ///
    /// 求解器回報不可行時仍回傳報告，由 [`PlanReport::failure_message`] 取得原因。
    pub async fn solve(&self, problem: &ProblemDefinition) -> Result<PlanReport> {
        let _guard = self
            .solve_guard
            .try_lock()
            .map_err(|_| LclError::SolveInProgress)?;

        // 提交前確認需求與產能指向目前的參考資料
        let (known_products, known_resources) =
            tokio::try_join!(self.backend.list_models(), self.backend.list_resources())?;
        problem.validate_against(&known_products, &known_resources)?;

        let run_id = Uuid::new_v4();
        let start_time = std::time::Instant::now();
        tracing::info!(
            "開始求解 {}：需求 {} 筆，產能 {} 筆",
            run_id,
            problem.demands.len(),
            problem.capacities.len()
        );

        let outcome = self.backend.solve(problem).await?;
        let embedded = outcome.embedded;
        let response = outcome.response;

        if !response.is_success() {
            tracing::warn!(
                "求解 {} 失敗: {:?} {}",
                run_id,
                response.status,
                response.message.as_deref().unwrap_or("")
            );
        }

        // 後端未附帶快照時，以目前的參考資料補上
        let products = embedded.products.unwrap_or(known_products);
        let modes = match embedded.modes {
            Some(modes) => modes,
            None => self.backend.list_production_modes().await?,
        };
        let resources = match embedded.resources {
            Some(resources) => resources,
            None => known_resources
                .into_iter()
                .map(|r| apply_capacity_override(r, problem))
                .collect(),
        };
        let demands = embedded.demands.unwrap_or_else(|| problem.demands.clone());

        let reconciliation = Reconciler::reconcile(
            &response,
            &products,
            &modes,
            &resources,
            &demands,
            embedded.coefficients.as_deref(),
        );
        let chart = ProductionChart::from_breakdowns(&reconciliation.breakdowns, &modes);

        tracing::info!("求解 {} 完成，耗時 {:?}", run_id, start_time.elapsed());

        Ok(PlanReport {
            run_id,
            solved_at: Utc::now(),
            submitted_by: self.principal.username.clone(),
            status: response.status,
            message: response.message,
            objective_value: response.objective_value,
            demands,
            resources,
            reconciliation,
            chart,
        })
    }
}

/// 使用者自訂的產能優先於資源預設值
fn apply_capacity_override(resource: Resource, problem: &ProblemDefinition) -> Resource {
    match problem
        .capacities
        .iter()
        .find(|c| c.resource_id == resource.id)
    {
        Some(custom) => resource.with_capacity(custom.capacity),
        None => resource,
    }
}
