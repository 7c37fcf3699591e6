//! matchplan-core: employee/client match prediction for sales planning.
//!
//! Given an employee profile and a client profile, the `MatchPredictor`
//! produces a success rate, timeline, risks, opportunities and a
//! recommendation tier. All randomness is injected through `rng`.

pub mod config;
pub mod error;
pub mod planner;
pub mod predictor;
pub mod profile;
pub mod recommendation;
pub mod rng;
pub mod rules;
pub mod store;
pub mod types;

pub use config::PredictorConfig;
pub use error::{PlanError, PlanResult};
pub use predictor::{MatchPredictor, Prediction};
pub use profile::{Client, Difficulty, Employee, Priority};
pub use recommendation::Recommendation;
pub use store::ProfileStore;
