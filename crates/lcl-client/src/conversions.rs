//! DTO 與領域物件之間的轉換

use lcl_core::{
    ConsumptionCoefficient, DemandInput, ProblemDefinition, ProducedQuantity, Product,
    ProductDraft, ProductionMode, Resource, SolveStatus, SolverResponse,
};
use rust_decimal::Decimal;

use crate::backend::{EmbeddedReference, SolveOutcome};
use crate::dto::*;

// ==========================================
// 後端 -> 領域物件
// ==========================================

pub(crate) fn product_from_dto(dto: ProductDto) -> Product {
    Product::new(dto.id, dto.nome)
        .with_minimum_total_demand(dto.demanda_minima_total.unwrap_or(Decimal::ZERO))
        .with_minimum_outsourced_demand(dto.demanda_terceirizada_minima.unwrap_or(Decimal::ZERO))
}

pub(crate) fn model_from_dto(dto: NamedDto) -> Product {
    Product::new(dto.id, dto.nome)
}

pub(crate) fn mode_from_dto(dto: NamedDto) -> ProductionMode {
    ProductionMode::new(dto.id, dto.nome)
}

pub(crate) fn resource_from_dto(dto: ResourceDto) -> Resource {
    Resource::new(dto.id, dto.nome, dto.capacidade)
}

pub(crate) fn coefficient_from_dto(dto: CoefficientDto) -> ConsumptionCoefficient {
    ConsumptionCoefficient::new(dto.modelo_id, dto.modo_id, dto.recurso_id, dto.consumo_unitario)
}

pub(crate) fn solve_outcome_from_dto(dto: SolveResponseDto) -> SolveOutcome {
    let status = dto
        .status
        .into_first()
        .map(|s| SolveStatus::from_wire(&s))
        .unwrap_or_else(|| SolveStatus::Failed(String::new()));

    let objective_value = dto
        .valor_objetivo
        .and_then(OneOrMany::into_first)
        .unwrap_or(Decimal::ZERO);

    // 結構化項目在前，舊版變數名稱依鍵排序
    let mut produced: Vec<ProducedQuantity> = dto
        .producao
        .into_iter()
        .map(|p| ProducedQuantity::structured(p.modelo_id, p.modo_id, p.quantidade))
        .collect();
    produced.extend(dto.quantidades_produzidas.into_iter().map(|(name, value)| {
        ProducedQuantity::named(name, value.into_first().unwrap_or(Decimal::ZERO))
    }));

    let embedded = EmbeddedReference {
        products: dto
            .modelos_data
            .map(|list| list.into_iter().map(model_from_dto).collect()),
        modes: dto
            .modos_producao_data
            .map(|list| list.into_iter().map(mode_from_dto).collect()),
        resources: dto
            .recursos_data
            .map(|list| list.into_iter().map(resource_from_dto).collect()),
        coefficients: dto
            .consumo_recursos_data
            .map(|list| list.into_iter().map(coefficient_from_dto).collect()),
        demands: dto.demandas_input.map(|list| {
            list.into_iter()
                .map(|d| DemandInput::new(d.modelo_id, d.quantidade))
                .collect()
        }),
    };

    SolveOutcome {
        response: SolverResponse {
            status,
            objective_value,
            produced,
            message: dto.mensagem,
        },
        embedded,
    }
}

// ==========================================
// 領域物件 -> 後端
// ==========================================

pub(crate) fn product_body(draft: &ProductDraft) -> ProductBody {
    ProductBody {
        nome: draft.name.trim().to_string(),
        demanda_terceirizada_minima: draft.minimum_outsourced_demand,
        demanda_minima_total: draft.minimum_total_demand,
        custos: draft
            .costs
            .iter()
            .map(|c| CostBody {
                modo_id: c.mode_id,
                custo_unitario: c.unit_cost,
                lucro_unitario: c.unit_profit,
            })
            .collect(),
        consumos: draft
            .consumptions
            .iter()
            .map(|c| ConsumptionBody {
                recurso_id: c.resource_id,
                consumo_unitario: c.units_per_unit,
            })
            .collect(),
    }
}

pub(crate) fn solve_request_body(problem: &ProblemDefinition) -> SolveRequestBody {
    SolveRequestBody {
        tipo_objetivo: problem.objective,
        demandas_personalizadas: problem
            .demands
            .iter()
            .map(|d| DemandBody {
                modelo_id: d.product_id,
                quantidade: d.quantity,
            })
            .collect(),
        capacidades_personalizadas: problem
            .capacities
            .iter()
            .map(|c| CapacityBody {
                recurso_id: c.resource_id,
                capacidade: c.capacity,
            })
            .collect(),
    }
}
