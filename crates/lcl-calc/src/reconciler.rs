//! 求解結果對帳器

use lcl_core::{
    ConsumptionCoefficient, DemandInput, ProducedQuantity, Product, ProductionMode, Resource,
    SolverResponse, VariableRef,
};
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::{
    variable_key, ProductionBreakdown, ReconcileResult, ResourceUtilization, UnmatchedEntry,
    UnmatchedReason,
};

/// 求解結果對帳器
///
/// 純函數：不會失敗，無法對應的項目記錄於 [`ReconcileResult::unmatched`]。
pub struct Reconciler;

/// 求解器項目對應到的產品與模式
struct Resolved<'a> {
    product_index: usize,
    product: &'a Product,
    mode: &'a ProductionMode,
}

impl Reconciler {
    /// 將求解器回應對應回產品/模式/資源
    ///
    /// `coefficients` 為 `None` 時，所有資源使用量維持為 0。
    pub fn reconcile(
        response: &SolverResponse,
        products: &[Product],
        modes: &[ProductionMode],
        resources: &[Resource],
        demands: &[DemandInput],
        coefficients: Option<&[ConsumptionCoefficient]>,
    ) -> ReconcileResult {
        tracing::info!(
            "開始對帳：求解器項目 {} 筆，產品 {} 筆，資源 {} 筆",
            response.produced.len(),
            products.len(),
            resources.len()
        );

        // Step 1: 初始化產品分解
        let mut breakdowns: Vec<ProductionBreakdown> = products
            .iter()
            .map(|product| ProductionBreakdown::new(product, Self::demand_for(product.id, demands)))
            .collect();

        // Step 2: 初始化資源利用率
        let mut utilizations: Vec<ResourceUtilization> =
            resources.iter().map(ResourceUtilization::new).collect();
        let resource_index: HashMap<i64, usize> = resources
            .iter()
            .enumerate()
            .rev()
            .map(|(idx, r)| (r.id, idx))
            .collect();

        if coefficients.is_none() {
            tracing::debug!("未提供消耗係數，資源利用率維持為 0");
        }

        // Step 3: 逐筆對應求解器項目
        let mut unmatched = Vec::new();
        for entry in &response.produced {
            let resolved = match Self::resolve(entry, products, modes) {
                Ok(resolved) => resolved,
                Err(reason) => {
                    tracing::warn!("略過求解器項目 {}（{}）", entry.key, reason);
                    unmatched.push(UnmatchedEntry::new(entry.key.clone(), entry.quantity, reason));
                    continue;
                }
            };

            breakdowns[resolved.product_index].record(&resolved.mode.name, entry.quantity);

            let Some(coefficients) = coefficients else {
                continue;
            };

            for coefficient in coefficients
                .iter()
                .filter(|c| c.applies_to(resolved.product.id, resolved.mode.id))
            {
                match resource_index.get(&coefficient.resource_id) {
                    Some(&idx) => {
                        utilizations[idx].consume(coefficient.consumption_for(entry.quantity))
                    }
                    None => {
                        tracing::warn!(
                            "消耗係數指向未知資源 {}（產品 {}，模式 {}）",
                            coefficient.resource_id,
                            resolved.product.name,
                            resolved.mode.name
                        );
                        unmatched.push(UnmatchedEntry::new(
                            entry.key.clone(),
                            entry.quantity,
                            UnmatchedReason::UnknownResource(coefficient.resource_id),
                        ));
                    }
                }
            }
        }

        // Step 4: 計算需求滿足與佔用百分比
        breakdowns.iter_mut().for_each(ProductionBreakdown::finalize);
        utilizations.iter_mut().for_each(ResourceUtilization::finalize);

        tracing::info!(
            "對帳完成：未滿足需求產品 {} 筆，無法對應項目 {} 筆",
            breakdowns.iter().filter(|b| !b.demand_satisfied).count(),
            unmatched.len()
        );

        ReconcileResult {
            breakdowns,
            utilizations,
            unmatched,
        }
    }

    /// 產品的原始需求，未輸入時為 0（重複輸入時以最後一筆為準）
    fn demand_for(product_id: i64, demands: &[DemandInput]) -> Decimal {
        demands
            .iter()
            .rev()
            .find(|d| d.product_id == product_id)
            .map(|d| d.quantity)
            .unwrap_or(Decimal::ZERO)
    }

    /// 解析求解器項目所屬的產品與模式
    fn resolve<'a>(
        entry: &ProducedQuantity,
        products: &'a [Product],
        modes: &'a [ProductionMode],
    ) -> Result<Resolved<'a>, UnmatchedReason> {
        let (product_index, mode) = match &entry.key {
            VariableRef::Structured {
                product_id,
                mode_id,
            } => {
                let product_index = products
                    .iter()
                    .position(|p| p.id == *product_id)
                    .ok_or_else(|| UnmatchedReason::UnknownProduct(product_id.to_string()))?;
                let mode = modes
                    .iter()
                    .find(|m| m.id == *mode_id)
                    .ok_or_else(|| UnmatchedReason::UnknownMode(mode_id.to_string()))?;
                (product_index, mode)
            }
            VariableRef::Named(name) => {
                let tokens = variable_key::parse(name).ok_or(UnmatchedReason::MalformedKey)?;
                let product_index = products
                    .iter()
                    .position(|p| p.name == tokens.product)
                    .ok_or_else(|| UnmatchedReason::UnknownProduct(tokens.product.to_string()))?;
                let mode = modes
                    .iter()
                    .find(|m| m.name == tokens.mode)
                    .ok_or_else(|| UnmatchedReason::UnknownMode(tokens.mode.to_string()))?;
                (product_index, mode)
            }
        };

        Ok(Resolved {
            product_index,
            product: &products[product_index],
            mode,
        })
    }
}
