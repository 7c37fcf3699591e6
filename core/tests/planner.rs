//! Strategic planner views: employee comparison and performance matrix.

use matchplan_core::{
    planner::{compare_employees, performance_matrix},
    rng::{FixedDraw, RngBank, StreamSlot},
    Client, Difficulty, Employee, MatchPredictor, PlanError, Priority, ProfileStore,
};

#[test]
fn comparison_ranks_best_first() {
    let store = ProfileStore::demo();
    let predictor = MatchPredictor::default();

    let ranked = compare_employees(&store, &predictor, "client1", &mut FixedDraw(0.0)).unwrap();
    let order: Vec<&str> = ranked.iter().map(|c| c.employee_id.as_str()).collect();
    // 94-10, 92-10, 87-10, 78-10
    assert_eq!(order, ["emp4", "emp2", "emp1", "emp3"]);
    assert_eq!(ranked[0].employee_name, "Priya Patel");
    assert_eq!(ranked[0].prediction.success_rate, 84);
    assert_eq!(ranked[3].prediction.risks.len(), 3);
}

#[test]
fn comparison_breaks_ties_by_id() {
    let employees = ["b", "c", "a"]
        .iter()
        .map(|id| Employee {
            id: id.to_string(),
            name: id.to_string(),
            avatar: String::new(),
            score: 75,
            strengths: vec![],
            weaknesses: vec![],
        })
        .collect();
    let clients = vec![Client {
        id: "c1".into(),
        name: "Acme".into(),
        priority: Priority::High,
        deal_value: 10_000,
        difficulty: Difficulty::Low,
        personality: String::new(),
    }];
    let store = ProfileStore::new(employees, clients).unwrap();

    let ranked = compare_employees(&store, &MatchPredictor::default(), "c1", &mut FixedDraw(0.3)).unwrap();
    let order: Vec<&str> = ranked.iter().map(|c| c.employee_id.as_str()).collect();
    assert_eq!(order, ["a", "b", "c"]);
}

#[test]
fn comparison_rejects_unknown_client() {
    let err = compare_employees(
        &ProfileStore::demo(),
        &MatchPredictor::default(),
        "client404",
        &mut FixedDraw(0.0),
    )
    .unwrap_err();
    assert!(matches!(err, PlanError::ClientNotFound { .. }));
}

#[test]
fn matrix_centre_draw_equals_score() {
    let store = ProfileStore::demo();
    let rows = performance_matrix(&store, &mut FixedDraw(0.5));
    assert_eq!(rows.len(), 4);
    for row in &rows {
        assert_eq!(row.analytical, row.overall);
        assert_eq!(row.relationship_driven, row.overall);
        assert_eq!(row.direct_results, row.overall);
    }
}

#[test]
fn matrix_cells_stay_within_jitter() {
    let store = ProfileStore::demo();
    let mut rng = RngBank::new(2024).for_slot(StreamSlot::HistoricalMatrix);

    for _ in 0..50 {
        for (row, emp) in performance_matrix(&store, &mut rng).iter().zip(store.list_employees()) {
            assert_eq!(row.employee_id, emp.id);
            assert_eq!(row.overall, emp.score);
            for cell in [row.analytical, row.relationship_driven, row.direct_results] {
                assert!(
                    cell + 5 >= emp.score && cell <= emp.score + 5,
                    "{} cell {cell} too far from score {}",
                    emp.id,
                    emp.score
                );
            }
        }
    }
}
