//! 求解報告

use chrono::{DateTime, Utc};
use lcl_calc::{ProductionChart, ReconcileResult};
use lcl_core::{DemandInput, Resource, SolveStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 一次求解的完整結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanReport {
    /// 求解批次ID
    pub run_id: Uuid,

    pub solved_at: DateTime<Utc>,

    /// 提交者
    pub submitted_by: String,

    pub status: SolveStatus,

    /// 求解器訊息（通常為不可行原因）
    pub message: Option<String>,

    /// 目標函數值
    pub objective_value: Decimal,

    /// 使用者輸入的需求
    pub demands: Vec<DemandInput>,

    /// 求解時使用的資源與產能
    pub resources: Vec<Resource>,

    pub reconciliation: ReconcileResult,

    pub chart: ProductionChart,
}

impl PlanReport {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// 失敗時要顯示的訊息；成功時為 None
    pub fn failure_message(&self) -> Option<&str> {
        match &self.status {
            SolveStatus::Success => None,
            SolveStatus::Failed(status) => Some(self.message.as_deref().unwrap_or(status.as_str())),
        }
    }
}
