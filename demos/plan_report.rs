//! 求解結果對帳示例
//!
//! 設定 `LCL_BASE_URL`（以及 `LCL_USER`、`LCL_PASSWORD`）時連線後端求解，
//! 否則以內建資料示範對帳。

use lcl::{
    ClientConfig, ConsumptionCoefficient, DemandInput, HttpBackend, PlanningSession,
    ProducedQuantity, Product, ProductionMode, ReconcileResult, Reconciler, Resource,
    SolverResponse, StaticCredentials,
};
use rust_decimal::Decimal;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    lcl::logging::init();

    match std::env::var("LCL_BASE_URL") {
        Ok(base_url) => solve_remote(base_url).await,
        Err(_) => {
            solve_offline();
            Ok(())
        }
    }
}

async fn solve_remote(base_url: String) -> anyhow::Result<()> {
    let user = std::env::var("LCL_USER").unwrap_or_else(|_| "planner".to_string());
    let password = std::env::var("LCL_PASSWORD")?;

    let config = ClientConfig::new(base_url);
    let backend = Arc::new(HttpBackend::new(config.clone())?);
    let credentials = StaticCredentials::new().with_user(user.clone(), password.clone());
    let session = PlanningSession::login(backend, &credentials, config, &user, &password)?;

    let mut problem = session.new_problem().await?;
    for demand in problem.demands.iter_mut() {
        demand.quantity = Decimal::from(10);
    }

    let report = session.solve(&problem).await?;
    if let Some(message) = report.failure_message() {
        println!("求解失敗: {}", message);
    }
    println!("目標函數值: {}", report.objective_value);
    print_result(&report.reconciliation);

    Ok(())
}

fn solve_offline() {
    println!("=== 離線對帳示例 ===\n");

    let products = vec![Product::new(1, "Modelo A"), Product::new(2, "Modelo B")];
    let modes = vec![
        ProductionMode::new(1, "Interno"),
        ProductionMode::new(2, "Terceirizado"),
    ];
    let resources = vec![
        Resource::new(1, "Montagem", Decimal::from(100)),
        Resource::new(2, "Pintura", Decimal::from(60)),
    ];
    let coefficients = vec![
        ConsumptionCoefficient::new(1, 1, 1, Decimal::from(2)),
        ConsumptionCoefficient::new(1, 1, 2, Decimal::ONE),
        ConsumptionCoefficient::new(2, 1, 1, Decimal::from(3)),
    ];
    let demands = vec![
        DemandInput::new(1, Decimal::from(40)),
        DemandInput::new(2, Decimal::from(15)),
    ];
    let response = SolverResponse::success(
        Decimal::new(482050, 2),
        vec![
            ProducedQuantity::named("Qtd_Modelo A_Interno", Decimal::from(30)),
            ProducedQuantity::named("Qtd_Modelo A_Terceirizado", Decimal::from(10)),
            ProducedQuantity::named("Qtd_Modelo B_Interno", Decimal::from(12)),
        ],
    );

    let result = Reconciler::reconcile(
        &response,
        &products,
        &modes,
        &resources,
        &demands,
        Some(coefficients.as_slice()),
    );

    println!("目標函數值: {}", response.objective_value);
    print_result(&result);
}

fn print_result(result: &ReconcileResult) {
    println!("\n生產分解:");
    for breakdown in &result.breakdowns {
        println!(
            "  - {}: 產量 {} / 需求 {} ({})",
            breakdown.product_name,
            breakdown.total_produced,
            breakdown.original_demand,
            if breakdown.demand_satisfied { "已滿足" } else { "未滿足" }
        );
        for mode in &breakdown.per_mode {
            println!("      {}: {}", mode.mode_name, mode.quantity);
        }
    }

    println!("\n資源利用率:");
    for utilization in &result.utilizations {
        println!(
            "  - {}: {} / {} ({}%)",
            utilization.resource_name,
            utilization.units_utilized,
            utilization.capacity,
            utilization.occupancy_percent.round_dp(2)
        );
    }

    for entry in &result.unmatched {
        tracing::warn!("未對應項目 {}: {}", entry.key, entry.reason);
    }
}
