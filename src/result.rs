use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::conditions::{ConditionInput, TireCompound};
use crate::model::{round1, AdjustedTeamRecord};

pub const TRACK_NAME: &str = "F1 Grand Prix";

const TRACK_OFFSET_C: f64 = 10.0;

/// Every sampler reports humidity inside [50, 80).
pub const HUMIDITY_MIN: f64 = 50.0;
pub const HUMIDITY_MAX: f64 = 80.0;

pub fn humidity_in_range(h: f64) -> bool {
    (HUMIDITY_MIN..HUMIDITY_MAX).contains(&h)
}

/// Supplies the humidity figure shown alongside a prediction.
pub trait HumiditySampler: Send + Sync {
    fn sample(&self, conditions: &ConditionInput) -> f64;
}

/// Uniform in [50, 80), truncated to one decimal. Not reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomHumidity;

impl HumiditySampler for RandomHumidity {
    fn sample(&self, _conditions: &ConditionInput) -> f64 {
        let h: f64 = rand::thread_rng().gen_range(HUMIDITY_MIN..HUMIDITY_MAX);
        (h * 10.0).floor() / 10.0
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedHumidity(pub f64);

impl HumiditySampler for FixedHumidity {
    fn sample(&self, _conditions: &ConditionInput) -> f64 {
        self.0
    }
}

/// Derives humidity from air temperature: 50% at 0 °C plus 0.3 per degree,
/// held to [50, 79.9].
#[derive(Debug, Clone, Copy, Default)]
pub struct TemperatureHumidity;

impl HumiditySampler for TemperatureHumidity {
    fn sample(&self, conditions: &ConditionInput) -> f64 {
        round1(HUMIDITY_MIN + conditions.air_temperature / 100.0 * 30.0)
            .clamp(HUMIDITY_MIN, HUMIDITY_MAX - 0.1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceConditionsSummary {
    pub track_temp: f64,
    pub air_temp: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub wind_direction: f64,
    pub rainfall: f64,
    pub compound: TireCompound,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub teams: Vec<AdjustedTeamRecord>,
    pub race_conditions: RaceConditionsSummary,
    pub track_name: String,
}

impl PredictionResult {
    pub fn leader(&self) -> Option<&AdjustedTeamRecord> {
        self.teams.first()
    }
}

pub fn summarize(conditions: &ConditionInput, humidity: &dyn HumiditySampler) -> RaceConditionsSummary {
    RaceConditionsSummary {
        track_temp: round1(conditions.air_temperature + TRACK_OFFSET_C),
        air_temp: conditions.air_temperature,
        humidity: humidity.sample(conditions),
        wind_speed: conditions.wind_speed,
        wind_direction: conditions.wind_direction,
        rainfall: conditions.rainfall,
        compound: conditions.tire_compound.clone(),
    }
}

pub fn assemble(
    ranked_teams: Vec<AdjustedTeamRecord>,
    conditions: &ConditionInput,
    humidity: &dyn HumiditySampler,
) -> PredictionResult {
    PredictionResult {
        teams: ranked_teams,
        race_conditions: summarize(conditions, humidity),
        track_name: TRACK_NAME.to_string(),
    }
}
