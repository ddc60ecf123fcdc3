//! Condition-driven performance ranking for the Formula 1 grid.
//!
//! Race conditions go in, every team on the roster comes out adjusted by a
//! hand-authored rule table and ranked against the leader.

pub mod conditions;
pub mod config;
pub mod error;
pub mod model;
pub mod predictor;
pub mod ranking;
pub mod result;
pub mod roster;
pub mod server;
pub mod transport;

pub use conditions::{ConditionInput, RawConditions, TireCompound};
pub use error::{InputError, PredictError, TransportError};
pub use model::{adjust, AdjustedTeamRecord};
pub use predictor::Predictor;
pub use ranking::{rank, Advantage};
pub use result::{assemble, HumiditySampler, PredictionResult, RaceConditionsSummary};
pub use roster::{roster, Team, TeamId};
