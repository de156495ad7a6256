//! 後端 JSON 傳輸物件
//!
//! 欄位名稱依後端 API 的葡萄牙文命名，轉換邏輯見 `conversions`。

use lcl_core::ObjectiveSense;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 後端部分欄位以單元素陣列包裝數值（例如 `"status": ["Sucesso"]`）
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// 取第一個值；空陣列時為 None
    pub fn into_first(self) -> Option<T> {
        match self {
            Self::One(value) => Some(value),
            Self::Many(values) => values.into_iter().next(),
        }
    }
}

// ===== 參考資料 =====

#[derive(Debug, Clone, Deserialize)]
pub struct NamedDto {
    pub id: i64,
    pub nome: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductDto {
    pub id: i64,
    pub nome: String,
    #[serde(default, alias = "demandaMinimaTotal")]
    pub demanda_minima_total: Option<Decimal>,
    #[serde(default, alias = "demandaMinimaTerceirizada")]
    pub demanda_terceirizada_minima: Option<Decimal>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceDto {
    pub id: i64,
    pub nome: String,
    #[serde(default)]
    pub capacidade: Decimal,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoefficientDto {
    pub modelo_id: i64,
    pub modo_id: i64,
    pub recurso_id: i64,
    pub consumo_unitario: Decimal,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProductsEnvelope {
    #[serde(default)]
    pub produtos: Vec<ProductDto>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ModelsEnvelope {
    #[serde(default)]
    pub modelos: Vec<NamedDto>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResourcesEnvelope {
    #[serde(default)]
    pub recursos: Vec<ResourceDto>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ModesEnvelope {
    #[serde(default)]
    pub modos_producao: Vec<NamedDto>,
}

// ===== 產品維護 =====

#[derive(Debug, Clone, Serialize)]
pub struct CostBody {
    pub modo_id: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub custo_unitario: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub lucro_unitario: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConsumptionBody {
    pub recurso_id: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub consumo_unitario: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductBody {
    pub nome: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub demanda_terceirizada_minima: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub demanda_minima_total: Decimal,
    pub custos: Vec<CostBody>,
    pub consumos: Vec<ConsumptionBody>,
}

// ===== 求解 =====

#[derive(Debug, Clone, Serialize)]
pub struct DemandBody {
    pub modelo_id: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub quantidade: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct CapacityBody {
    pub recurso_id: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub capacidade: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct SolveRequestBody {
    pub tipo_objetivo: ObjectiveSense,
    pub demandas_personalizadas: Vec<DemandBody>,
    pub capacidades_personalizadas: Vec<CapacityBody>,
}

/// 回應中回傳的使用者需求
#[derive(Debug, Clone, Deserialize)]
pub struct DemandDto {
    pub modelo_id: i64,
    pub quantidade: Decimal,
}

/// 結構化的產量項目
#[derive(Debug, Clone, Deserialize)]
pub struct StructuredQuantityDto {
    pub modelo_id: i64,
    pub modo_id: i64,
    pub quantidade: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct SolveResponseDto {
    pub status: OneOrMany<String>,
    #[serde(default)]
    pub valor_objetivo: Option<OneOrMany<Decimal>>,

    /// 舊版：以變數名稱為鍵
    #[serde(default)]
    pub quantidades_produzidas: BTreeMap<String, OneOrMany<Decimal>>,

    /// 新版：明確的產品/模式ID
    #[serde(default)]
    pub producao: Vec<StructuredQuantityDto>,

    #[serde(default)]
    pub mensagem: Option<String>,

    // 求解時後端使用的參考資料快照
    #[serde(default)]
    pub modelos_data: Option<Vec<NamedDto>>,
    #[serde(default)]
    pub modos_producao_data: Option<Vec<NamedDto>>,
    #[serde(default)]
    pub recursos_data: Option<Vec<ResourceDto>>,
    #[serde(default)]
    pub consumo_recursos_data: Option<Vec<CoefficientDto>>,
    #[serde(default)]
    pub demandas_input: Option<Vec<DemandDto>>,
}

/// 非 2xx 回應的錯誤內容
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub mensagem: Option<String>,
    #[serde(default)]
    pub erro: Option<String>,
}
