//! # LCL Client
//!
//! 規劃後端存取、登入驗證與求解工作階段

pub mod auth;
pub mod backend;
pub mod dto;
pub mod http;
pub mod report;
pub mod session;

mod conversions;

// Re-export 主要類型
pub use auth::{Authenticator, Principal, StaticCredentials};
pub use backend::{EmbeddedReference, PlanningBackend, SolveOutcome};
pub use http::HttpBackend;
pub use report::PlanReport;
pub use session::PlanningSession;
