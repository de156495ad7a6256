//! # LCL Motors 生產規劃
//!
//! 產品/資源維護、規劃問題提交與求解結果對帳

pub mod logging;

pub use lcl_calc::{
    ModeQuantity, ProductionBreakdown, ProductionChart, ReconcileResult, Reconciler,
    ResourceUtilization, UnmatchedEntry, UnmatchedReason,
};
pub use lcl_client::{
    Authenticator, EmbeddedReference, HttpBackend, PlanReport, PlanningBackend, PlanningSession,
    Principal, SolveOutcome, StaticCredentials,
};
pub use lcl_core::*;
pub use rust_decimal::Decimal;
