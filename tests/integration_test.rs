//! 集成測試

use async_trait::async_trait;
use lcl::*;
use rstest::rstest;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// 記憶體內的規劃後端
struct MockBackend {
    products: Mutex<Vec<Product>>,
    modes: Vec<ProductionMode>,
    resources: Vec<Resource>,
    outcome: SolveOutcome,
    unreachable: bool,
    gate: Option<Arc<Notify>>,
    solve_calls: AtomicUsize,
    next_id: AtomicUsize,
}

impl MockBackend {
    fn new(outcome: SolveOutcome) -> Self {
        Self {
            products: Mutex::new(vec![Product::new(1, "Model A"), Product::new(2, "Model B")]),
            modes: vec![
                ProductionMode::new(1, "Internal"),
                ProductionMode::new(2, "Outsourced"),
            ],
            resources: vec![
                Resource::new(1, "Assembly", Decimal::from(100)),
                Resource::new(2, "Paint", Decimal::ZERO),
            ],
            outcome,
            unreachable: false,
            gate: None,
            solve_calls: AtomicUsize::new(0),
            next_id: AtomicUsize::new(3),
        }
    }

    fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::new(SolveOutcome::bare(SolverResponse::success(Decimal::ZERO, Vec::new())))
        }
    }

    fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    fn check_reachable(&self) -> Result<()> {
        if self.unreachable {
            return Err(LclError::Transport("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl PlanningBackend for MockBackend {
    async fn list_products(&self) -> Result<Vec<Product>> {
        self.check_reachable()?;
        Ok(self.products.lock().unwrap().clone())
    }

    async fn list_models(&self) -> Result<Vec<Product>> {
        self.list_products().await
    }

    async fn list_resources(&self) -> Result<Vec<Resource>> {
        self.check_reachable()?;
        Ok(self.resources.clone())
    }

    async fn list_production_modes(&self) -> Result<Vec<ProductionMode>> {
        self.check_reachable()?;
        Ok(self.modes.clone())
    }

    async fn create_product(&self, draft: &ProductDraft) -> Result<()> {
        self.check_reachable()?;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i64;
        self.products
            .lock()
            .unwrap()
            .push(Product::new(id, draft.name.clone()).with_minimum_total_demand(draft.minimum_total_demand));
        Ok(())
    }

    async fn update_product(&self, id: i64, draft: &ProductDraft) -> Result<()> {
        self.check_reachable()?;
        let mut products = self.products.lock().unwrap();
        let product = products.iter_mut().find(|p| p.id == id).ok_or(LclError::Http {
            status: 404,
            message: "Produto não encontrado".to_string(),
        })?;
        product.name = draft.name.clone();
        Ok(())
    }

    async fn delete_product(&self, id: i64) -> Result<()> {
        self.check_reachable()?;
        self.products.lock().unwrap().retain(|p| p.id != id);
        Ok(())
    }

    async fn solve(&self, _problem: &ProblemDefinition) -> Result<SolveOutcome> {
        self.check_reachable()?;
        self.solve_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        Ok(self.outcome.clone())
    }
}

fn credentials() -> StaticCredentials {
    StaticCredentials::new().with_user("planner", "s3nha")
}

fn login(backend: MockBackend) -> PlanningSession<MockBackend> {
    PlanningSession::login(
        Arc::new(backend),
        &credentials(),
        ClientConfig::default(),
        "planner",
        "s3nha",
    )
    .unwrap()
}

/// 後端附帶參考資料快照的求解結果
fn embedded_outcome(quantity: i64) -> SolveOutcome {
    SolveOutcome {
        response: SolverResponse::success(
            Decimal::from(quantity * 30),
            vec![ProducedQuantity::named("Qtd_Model A_Internal", Decimal::from(quantity))],
        ),
        embedded: EmbeddedReference {
            products: Some(vec![Product::new(1, "Model A")]),
            modes: Some(vec![
                ProductionMode::new(1, "Internal"),
                ProductionMode::new(2, "Outsourced"),
            ]),
            resources: Some(vec![Resource::new(1, "Assembly", Decimal::from(100))]),
            coefficients: Some(vec![ConsumptionCoefficient::new(1, 1, 1, Decimal::from(2))]),
            demands: Some(vec![DemandInput::new(1, Decimal::from(40))]),
        },
    }
}

fn problem_with_demand(quantity: i64) -> ProblemDefinition {
    let mut problem = ProblemDefinition::initial(
        &[Product::new(1, "Model A"), Product::new(2, "Model B")],
        &[Resource::new(1, "Assembly", Decimal::from(100))],
    );
    problem.set_demand(1, Decimal::from(quantity));
    problem
}

#[test]
fn test_login_rejects_wrong_password() {
    let result = PlanningSession::login(
        Arc::new(MockBackend::unreachable()),
        &credentials(),
        ClientConfig::default(),
        "planner",
        "wrong",
    );

    assert!(matches!(result, Err(LclError::InvalidCredentials)));
}

#[rstest]
#[case(30, false, 60)]
#[case(50, true, 100)]
#[tokio::test]
async fn test_solve_with_embedded_reference(
    #[case] quantity: i64,
    #[case] satisfied: bool,
    #[case] occupancy: i64,
) {
    lcl::logging::init_test();
    let session = login(MockBackend::new(embedded_outcome(quantity)));

    let report = session.solve(&problem_with_demand(40)).await.unwrap();

    assert!(report.is_success());
    assert_eq!(report.submitted_by, "planner");
    assert_eq!(report.objective_value, Decimal::from(quantity * 30));

    let breakdown = &report.reconciliation.breakdowns[0];
    assert_eq!(breakdown.total_produced, Decimal::from(quantity));
    assert_eq!(breakdown.demand_satisfied, satisfied);

    let utilization = &report.reconciliation.utilizations[0];
    assert_eq!(utilization.units_utilized, Decimal::from(quantity * 2));
    assert_eq!(utilization.occupancy_percent, Decimal::from(occupancy));

    assert_eq!(report.chart.labels, vec!["Model A"]);
    assert_eq!(
        report.chart.series_for("Internal").unwrap().values,
        vec![Decimal::from(quantity)]
    );
}

#[tokio::test]
async fn test_solve_falls_back_to_fetched_reference() {
    let outcome = SolveOutcome::bare(SolverResponse::success(
        Decimal::from(500),
        vec![
            ProducedQuantity::structured(1, 1, Decimal::from(10)),
            ProducedQuantity::structured(2, 2, Decimal::from(7)),
            ProducedQuantity::named("Qtd_Model Z_Internal", Decimal::from(3)),
        ],
    ));
    let session = login(MockBackend::new(outcome));

    let mut problem = problem_with_demand(12);
    problem.set_capacity(1, Decimal::from(80));
    let report = session.solve(&problem).await.unwrap();

    let reconciliation = &report.reconciliation;
    assert_eq!(reconciliation.breakdowns.len(), 2);
    assert!(!reconciliation.breakdown_for(1).unwrap().demand_satisfied);
    assert!(reconciliation.breakdown_for(2).unwrap().demand_satisfied);
    assert_eq!(reconciliation.total_produced(), Decimal::from(17));

    // 沒有消耗係數：利用率維持為 0，但保留自訂產能
    assert_eq!(reconciliation.utilizations.len(), 2);
    assert!(reconciliation
        .utilizations
        .iter()
        .all(|u| u.units_utilized == Decimal::ZERO));
    assert_eq!(report.resources[0].capacity, Decimal::from(80));

    assert_eq!(reconciliation.unmatched.len(), 1);
    assert_eq!(
        reconciliation.unmatched[0].reason,
        UnmatchedReason::UnknownProduct("Model Z".to_string())
    );
}

#[tokio::test]
async fn test_infeasible_solve_still_reports() {
    let outcome = SolveOutcome::bare(SolverResponse::failed(
        "Inviável",
        "Demanda excede a capacidade",
    ));
    let session = login(MockBackend::new(outcome));

    let report = session.solve(&problem_with_demand(500)).await.unwrap();

    assert!(!report.is_success());
    assert_eq!(report.failure_message(), Some("Demanda excede a capacidade"));
    assert_eq!(report.reconciliation.breakdowns.len(), 2);
    assert_eq!(report.reconciliation.unsatisfied().count(), 1);
}

#[tokio::test]
async fn test_invalid_problem_is_not_submitted() {
    let session = login(MockBackend::new(embedded_outcome(10)));

    let mut problem = problem_with_demand(10);
    problem.set_demand(2, Decimal::from(-1));
    let result = session.solve(&problem).await;

    assert!(matches!(result, Err(LclError::InvalidProblem(_))));
    assert_eq!(session.backend().solve_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_unknown_reference_ids_are_not_submitted() {
    let session = login(MockBackend::new(embedded_outcome(10)));

    let mut unknown_product = problem_with_demand(10);
    unknown_product
        .demands
        .push(DemandInput::new(99, Decimal::from(5)));
    assert!(matches!(
        session.solve(&unknown_product).await,
        Err(LclError::InvalidProblem(msg)) if msg.contains("99")
    ));

    let mut unknown_resource = problem_with_demand(10);
    unknown_resource
        .capacities
        .push(CapacityInput::new(42, Decimal::from(10)));
    assert!(matches!(
        session.solve(&unknown_resource).await,
        Err(LclError::InvalidProblem(msg)) if msg.contains("42")
    ));

    assert_eq!(session.backend().solve_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_only_one_solve_in_flight() {
    let gate = Arc::new(Notify::new());
    let session = login(MockBackend::new(embedded_outcome(30)).with_gate(gate.clone()));
    let problem = problem_with_demand(40);

    let (first, second, _) = tokio::join!(session.solve(&problem), session.solve(&problem), async {
        gate.notify_one();
    });

    assert!(first.is_ok());
    assert!(matches!(second, Err(LclError::SolveInProgress)));
    assert_eq!(session.backend().solve_calls.load(Ordering::SeqCst), 1);

    // 前一個請求完成後可再次求解
    gate.notify_one();
    assert!(session.solve(&problem).await.is_ok());
}

#[tokio::test]
async fn test_transport_failure_releases_guard() {
    let session = login(MockBackend::unreachable());
    let problem = problem_with_demand(1);

    assert!(matches!(
        session.solve(&problem).await,
        Err(LclError::Transport(_))
    ));
    assert!(matches!(
        session.solve(&problem).await,
        Err(LclError::Transport(_))
    ));
}

#[tokio::test]
async fn test_new_problem_uses_reference_data() {
    let session = PlanningSession::login(
        Arc::new(MockBackend::new(embedded_outcome(1))),
        &credentials(),
        ClientConfig::default().with_default_objective(ObjectiveSense::Max),
        "planner",
        "s3nha",
    )
    .unwrap();

    let problem = session.new_problem().await.unwrap();

    assert_eq!(problem.objective, ObjectiveSense::Max);
    assert_eq!(problem.demands.len(), 2);
    assert_eq!(problem.capacities.len(), 2);
    assert_eq!(problem.capacities[0].capacity, Decimal::from(100));
}

#[tokio::test]
async fn test_product_maintenance() {
    let session = login(MockBackend::new(embedded_outcome(1)));

    let draft = ProductDraft::new("Model C")
        .with_minimum_total_demand(Decimal::from(25))
        .with_mode_cost(1, Decimal::from(90), Decimal::from(15))
        .with_consumption(1, Decimal::from(3));
    let products = session.save_product(None, &draft).await.unwrap();
    assert_eq!(products.len(), 3);
    assert_eq!(products[2].name, "Model C");

    let products = session
        .save_product(Some(3), &ProductDraft::new("Model C2"))
        .await
        .unwrap();
    assert_eq!(products[2].name, "Model C2");

    let missing = session.save_product(Some(99), &ProductDraft::new("Ghost")).await;
    assert!(matches!(missing, Err(LclError::Http { status: 404, .. })));

    let invalid = session.save_product(None, &ProductDraft::new("")).await;
    assert!(matches!(invalid, Err(LclError::InvalidProduct(_))));

    let products = session.delete_product(1).await.unwrap();
    assert_eq!(products.len(), 2);
    assert!(products.iter().all(|p| p.id != 1));
}

#[test]
fn test_logout_returns_principal() {
    let session = login(MockBackend::new(embedded_outcome(1)));
    assert_eq!(session.principal().username, "planner");

    let principal = session.logout();
    assert_eq!(principal.username, "planner");
}
