//! 後端連線配置

use serde::{Deserialize, Serialize};

use crate::{LclError, ObjectiveSense, Result};

/// 預設後端位址
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// 預設求解端點
pub const DEFAULT_SOLVE_PATH: &str = "/api/solucionar";

/// 後端連線配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// 後端根位址（不含結尾斜線）
    pub base_url: String,

    /// 求解端點路徑
    ///
    /// 部分後端版本使用 `/api/resolver`
    pub solve_path: String,

    /// 請求逾時（秒）
    pub timeout_secs: u64,

    /// 新問題的預設目標方向
    pub default_objective: ObjectiveSense,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            solve_path: DEFAULT_SOLVE_PATH.to_string(),
            timeout_secs: 30,
            default_objective: ObjectiveSense::Min,
        }
    }
}

impl ClientConfig {
    /// 創建指向指定後端的配置
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// 從 JSON 文件載入，缺少的欄位使用預設值
    pub fn from_json(json: &str) -> Result<Self> {
        let mut config: Self =
            serde_json::from_str(json).map_err(|e| LclError::Config(e.to_string()))?;
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        config.validate()?;
        Ok(config)
    }

    /// 建構器模式：設置求解端點
    pub fn with_solve_path(mut self, path: impl Into<String>) -> Self {
        self.solve_path = path.into();
        self
    }

    /// 建構器模式：設置逾時
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// 建構器模式：設置預設目標方向
    pub fn with_default_objective(mut self, objective: ObjectiveSense) -> Self {
        self.default_objective = objective;
        self
    }

    /// 組合完整的端點 URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(LclError::Config(format!(
                "base_url 必須以 http:// 或 https:// 開頭: {:?}",
                self.base_url
            )));
        }

        if !self.solve_path.starts_with('/') {
            return Err(LclError::Config(format!(
                "solve_path 必須以 / 開頭: {:?}",
                self.solve_path
            )));
        }

        if self.timeout_secs == 0 {
            return Err(LclError::Config("timeout_secs 必須大於 0".to_string()));
        }

        Ok(())
    }
}
