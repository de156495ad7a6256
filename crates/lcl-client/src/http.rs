//! 以 HTTP JSON API 實作的規劃後端

use async_trait::async_trait;
use lcl_core::{
    ClientConfig, LclError, ProblemDefinition, Product, ProductDraft, ProductionMode, Resource,
    Result,
};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::backend::{PlanningBackend, SolveOutcome};
use crate::conversions;
use crate::dto::*;

pub const PRODUCTS_PATH: &str = "/api/produtos";
pub const PRODUCT_PATH: &str = "/api/produto";
pub const MODELS_PATH: &str = "/api/modelos";
pub const RESOURCES_PATH: &str = "/api/recursos";
pub const MODES_PATH: &str = "/api/modos_producao";

/// HTTP 規劃後端
pub struct HttpBackend {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpBackend {
    /// 創建新的 HTTP 後端
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| LclError::Config(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.send(Method::GET, path, None::<&()>).await?;
        decode(&body)
    }

    /// 發送請求並回傳 2xx 回應內容
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<String> {
        let url = self.config.endpoint(path);
        tracing::debug!("{} {}", method, url);

        let mut request = self.client.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!("{} {} 連線失敗: {}", method, url, e);
            LclError::Transport(e.to_string())
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| LclError::Transport(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!("{} {} 回應 {}", method, url, status);
            return Err(error_from_response(status, &text));
        }

        Ok(text)
    }
}

/// 解析 2xx 回應內容
fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| LclError::Decode(e.to_string()))
}

/// 非 2xx 回應：優先使用內容中的 `mensagem`，否則使用狀態說明
pub(crate) fn error_from_response(status: StatusCode, body: &str) -> LclError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed
        .mensagem
        .or(parsed.erro)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown Status")
                .to_string()
        });

    LclError::Http {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl PlanningBackend for HttpBackend {
    async fn list_products(&self) -> Result<Vec<Product>> {
        let envelope: ProductsEnvelope = self.get_json(PRODUCTS_PATH).await?;
        Ok(envelope
            .produtos
            .into_iter()
            .map(conversions::product_from_dto)
            .collect())
    }

    async fn list_models(&self) -> Result<Vec<Product>> {
        let envelope: ModelsEnvelope = self.get_json(MODELS_PATH).await?;
        Ok(envelope
            .modelos
            .into_iter()
            .map(conversions::model_from_dto)
            .collect())
    }

    async fn list_resources(&self) -> Result<Vec<Resource>> {
        let envelope: ResourcesEnvelope = self.get_json(RESOURCES_PATH).await?;
        Ok(envelope
            .recursos
            .into_iter()
            .map(conversions::resource_from_dto)
            .collect())
    }

    async fn list_production_modes(&self) -> Result<Vec<ProductionMode>> {
        let envelope: ModesEnvelope = self.get_json(MODES_PATH).await?;
        Ok(envelope
            .modos_producao
            .into_iter()
            .map(conversions::mode_from_dto)
            .collect())
    }

    async fn create_product(&self, draft: &ProductDraft) -> Result<()> {
        draft.validate()?;
        let body = conversions::product_body(draft);
        self.send(Method::POST, PRODUCT_PATH, Some(&body)).await?;
        tracing::info!("新增產品: {}", body.nome);
        Ok(())
    }

    async fn update_product(&self, id: i64, draft: &ProductDraft) -> Result<()> {
        draft.validate()?;
        let body = conversions::product_body(draft);
        self.send(Method::PUT, &product_path(id), Some(&body)).await?;
        tracing::info!("修改產品 {}: {}", id, body.nome);
        Ok(())
    }

    async fn delete_product(&self, id: i64) -> Result<()> {
        self.send(Method::DELETE, &product_path(id), None::<&()>).await?;
        tracing::info!("刪除產品 {}", id);
        Ok(())
    }

    async fn solve(&self, problem: &ProblemDefinition) -> Result<SolveOutcome> {
        let body = conversions::solve_request_body(problem);
        let text = self
            .send(Method::POST, &self.config.solve_path, Some(&body))
            .await?;
        let dto: SolveResponseDto = decode(&text)?;
        Ok(conversions::solve_outcome_from_dto(dto))
    }
}

fn product_path(id: i64) -> String {
    format!("{PRODUCT_PATH}/{id}")
}
