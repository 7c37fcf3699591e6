//! Predictions and loads log through the `log` facade.

use matchplan_core::{
    planner::compare_employees,
    rng::{RngBank, StreamSlot},
    MatchPredictor, PredictorConfig, ProfileStore,
};

#[test]
fn debug_logging_is_wired_through_predictions() {
    env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init()
        .expect("first logger in this test binary");

    assert!(log::log_enabled!(target: "matchplan_core::predictor", log::Level::Debug));

    let data = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../data");
    let store = ProfileStore::load(&data).unwrap();
    let predictor = MatchPredictor::new(PredictorConfig::load(data.join("predictor.json")).unwrap()).unwrap();

    let mut rng = RngBank::new(42).for_slot(StreamSlot::Comparison);
    let ranked = compare_employees(&store, &predictor, "client3", &mut rng).unwrap();
    assert_eq!(ranked.len(), store.list_employees().len());
}
