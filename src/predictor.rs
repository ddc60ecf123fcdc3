use std::sync::Arc;

use crate::conditions::{ConditionInput, RawConditions};
use crate::error::PredictError;
use crate::model::adjust;
use crate::ranking::rank;
use crate::result::{assemble, HumiditySampler, PredictionResult, RandomHumidity};
use crate::roster::{roster, Team};

/// Runs the whole pipeline: roster, rule table, ranking, result assembly.
///
/// Holds nothing mutable, so one instance can serve any number of
/// concurrent requests.
#[derive(Clone)]
pub struct Predictor {
    teams: &'static [Team],
    humidity: Arc<dyn HumiditySampler>,
}

impl Default for Predictor {
    fn default() -> Self {
        Self::new(Arc::new(RandomHumidity))
    }
}

impl Predictor {
    pub fn new(humidity: Arc<dyn HumiditySampler>) -> Self {
        Self {
            teams: roster(),
            humidity,
        }
    }

    pub fn teams(&self) -> &'static [Team] {
        self.teams
    }

    pub fn predict(&self, conditions: &ConditionInput) -> Result<PredictionResult, PredictError> {
        conditions.ensure_finite()?;

        let adjusted = self.teams.iter().map(|t| adjust(t, conditions)).collect();
        let ranked = rank(adjusted);
        Ok(assemble(ranked, conditions, self.humidity.as_ref()))
    }

    /// Parses a boundary record and predicts in one step.
    pub fn predict_raw(&self, raw: &RawConditions) -> Result<PredictionResult, PredictError> {
        let conditions = raw.parse()?;
        self.predict(&conditions)
    }
}
