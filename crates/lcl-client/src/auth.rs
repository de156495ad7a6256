//! 登入驗證

use lcl_core::{LclError, Result};
use std::collections::HashMap;

/// 已通過驗證的使用者
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub username: String,
}

/// 可替換的驗證機制
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, username: &str, password: &str) -> Result<Principal>;
}

/// 由呼叫端提供帳號密碼清單的驗證器
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    users: HashMap<String, String>,
}

impl StaticCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：添加使用者
    pub fn with_user(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.users.insert(username.into(), password.into());
        self
    }
}

impl Authenticator for StaticCredentials {
    fn authenticate(&self, username: &str, password: &str) -> Result<Principal> {
        match self.users.get(username) {
            Some(expected) if expected == password => Ok(Principal {
                username: username.to_string(),
            }),
            _ => {
                tracing::warn!("登入失敗: {}", username);
                Err(LclError::InvalidCredentials)
            }
        }
    }
}
