//! 生產模式模型

use serde::{Deserialize, Serialize};

/// 生產模式（例如：自製、委外）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionMode {
    /// 模式ID
    pub id: i64,

    /// 模式名稱，同時作為舊版求解器變數名稱的比對鍵
    pub name: String,
}

impl ProductionMode {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
