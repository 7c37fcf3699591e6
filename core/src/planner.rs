//! Strategic planner — roster-wide views built on the predictor.
//!
//! This module:
//!   1. Ranks every employee against one client ("compare")
//!   2. Builds the historical performance matrix by client archetype
//!
//! Both take the random source from the caller; seeded runs use the
//! `Comparison` and `HistoricalMatrix` slots of the RngBank.

use crate::{
    error::PlanResult,
    predictor::{MatchPredictor, Prediction},
    rng::UniformSource,
    store::ProfileStore,
    types::{EntityId, Rate},
};
use serde::{Deserialize, Serialize};

/// Half-width of the jitter applied to matrix cells.
pub const MATRIX_JITTER: f64 = 5.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchCandidate {
    pub employee_id: EntityId,
    pub employee_name: String,
    pub prediction: Prediction,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatrixRow {
    pub employee_id: EntityId,
    pub employee_name: String,
    pub analytical: Rate,
    pub relationship_driven: Rate,
    pub direct_results: Rate,
    pub overall: Rate,
}

/// Predict every employee against `client_id`, best first.
/// Ties are broken by employee id so the order is stable.
pub fn compare_employees(
    store: &ProfileStore,
    predictor: &MatchPredictor,
    client_id: &str,
    source: &mut impl UniformSource,
) -> PlanResult<Vec<MatchCandidate>> {
    let client = store.client(client_id)?;

    let mut candidates: Vec<MatchCandidate> = store
        .list_employees()
        .iter()
        .map(|employee| MatchCandidate {
            employee_id: employee.id.clone(),
            employee_name: employee.name.clone(),
            prediction: predictor.predict(employee, client, source),
        })
        .collect();

    candidates.sort_by(|a, b| {
        b.prediction
            .success_rate
            .cmp(&a.prediction.success_rate)
            .then_with(|| a.employee_id.cmp(&b.employee_id))
    });

    log::debug!(
        "compare client={client_id}: {} candidates, best={:?}",
        candidates.len(),
        candidates.first().map(|c| c.employee_id.as_str())
    );
    Ok(candidates)
}

fn jittered(score: u32, source: &mut impl UniformSource) -> Rate {
    let value = score as f64 + source.uniform(-MATRIX_JITTER, MATRIX_JITTER);
    value.round().max(0.0) as Rate
}

/// One row per employee, in roster order. Archetype cells are
/// `round(score + uniform[-5, 5))`; `overall` is the score itself.
pub fn performance_matrix(store: &ProfileStore, source: &mut impl UniformSource) -> Vec<MatrixRow> {
    store
        .list_employees()
        .iter()
        .map(|employee| MatrixRow {
            employee_id: employee.id.clone(),
            employee_name: employee.name.clone(),
            analytical: jittered(employee.score, source),
            relationship_driven: jittered(employee.score, source),
            direct_results: jittered(employee.score, source),
            overall: employee.score,
        })
        .collect()
}
