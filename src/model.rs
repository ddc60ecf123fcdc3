use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

use crate::conditions::{ConditionInput, TireCompound};
use crate::ranking::Advantage;
use crate::roster::{Team, TeamId};

const HOT_ABOVE_C: f64 = 30.0;
const COLD_BELOW_C: f64 = 15.0;
const WET_ABOVE_MM: f64 = 5.0;
const FAST_ABOVE_KPH: f64 = 330.0;
const HIGH_DOWNFORCE: f64 = 95.0;

/// One team's attributes after the rule table has been applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustedTeamRecord {
    pub id: u32,
    #[serde(rename = "name")]
    pub team: TeamId,
    pub logo_url: String,
    pub base_performance: f64,
    pub aerodynamics: f64,
    pub power: f64,
    pub chassis: f64,
    pub reliability: f64,
    pub tire_management: f64,
    pub final_performance: f64,
    /// Filled in by the ranker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advantage: Option<Advantage>,
}

/// Increments produced by one rule group for one team.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Adjustment {
    pub performance: f64,
    pub aerodynamics: f64,
    pub power: f64,
    pub chassis: f64,
    pub tire_management: f64,
}

impl AddAssign for Adjustment {
    fn add_assign(&mut self, rhs: Self) {
        self.performance += rhs.performance;
        self.aerodynamics += rhs.aerodynamics;
        self.power += rhs.power;
        self.chassis += rhs.chassis;
        self.tire_management += rhs.tire_management;
    }
}

const NONE: Adjustment = Adjustment {
    performance: 0.0,
    aerodynamics: 0.0,
    power: 0.0,
    chassis: 0.0,
    tire_management: 0.0,
};

pub fn compound_rule(team: TeamId, compound: &TireCompound) -> Adjustment {
    use TeamId::*;
    match (compound, team) {
        (TireCompound::Soft, Ferrari | McLaren) => Adjustment {
            tire_management: 2.5,
            performance: 0.4,
            ..NONE
        },
        (TireCompound::Hard, RedBullRacing | Mercedes) => Adjustment {
            tire_management: 2.0,
            performance: 0.3,
            ..NONE
        },
        (TireCompound::Wet | TireCompound::Intermediate, RedBullRacing) => Adjustment {
            performance: 0.5,
            aerodynamics: 3.0,
            ..NONE
        },
        _ => NONE,
    }
}

/// Only one band fires; 15..=30 °C is neutral.
pub fn temperature_rule(team: TeamId, air_temperature: f64) -> Adjustment {
    use TeamId::*;
    if air_temperature > HOT_ABOVE_C {
        match team {
            Ferrari | AlfaRomeo | Haas => Adjustment {
                power: 2.0,
                performance: 0.2,
                ..NONE
            },
            _ => Adjustment {
                power: -1.0,
                ..NONE
            },
        }
    } else if air_temperature < COLD_BELOW_C {
        match team {
            Mercedes | AstonMartin | Williams => Adjustment {
                performance: 0.3,
                ..NONE
            },
            _ => NONE,
        }
    } else {
        NONE
    }
}

pub fn rainfall_rule(team: TeamId, rainfall: f64) -> Adjustment {
    use TeamId::*;
    if rainfall <= WET_ABOVE_MM {
        return NONE;
    }
    match team {
        RedBullRacing | Mercedes => Adjustment {
            aerodynamics: 3.0,
            chassis: 2.0,
            performance: 0.4,
            ..NONE
        },
        Ferrari => Adjustment {
            performance: -0.3,
            ..NONE
        },
        _ => NONE,
    }
}

/// Reads the roster aerodynamics, never a value adjusted earlier in the pass.
pub fn straight_line_rule(base_aerodynamics: f64, straight_line_speed: f64) -> Adjustment {
    if straight_line_speed > FAST_ABOVE_KPH && base_aerodynamics > HIGH_DOWNFORCE {
        Adjustment {
            performance: 0.2,
            ..NONE
        }
    } else {
        NONE
    }
}

/// Sum of all four rule groups for one team.
pub fn total_adjustment(team: &Team, conditions: &ConditionInput) -> Adjustment {
    let mut total = Adjustment::default();
    total += compound_rule(team.team, &conditions.tire_compound);
    total += temperature_rule(team.team, conditions.air_temperature);
    total += rainfall_rule(team.team, conditions.rainfall);
    total += straight_line_rule(team.aerodynamics, conditions.straight_line_speed);
    total
}

/// Applies the rule table to one team. The baseline is left untouched.
pub fn adjust(team: &Team, conditions: &ConditionInput) -> AdjustedTeamRecord {
    let delta = total_adjustment(team, conditions);
    AdjustedTeamRecord {
        id: team.id,
        team: team.team,
        logo_url: team.logo_url.to_string(),
        base_performance: team.base_performance,
        aerodynamics: team.aerodynamics + delta.aerodynamics,
        power: team.power + delta.power,
        chassis: team.chassis + delta.chassis,
        reliability: team.reliability,
        tire_management: team.tire_management + delta.tire_management,
        final_performance: round1(team.base_performance + delta.performance),
        advantage: None,
    }
}

pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster;

    fn conditions(compound: TireCompound, temp: f64, rain: f64, speed: f64) -> ConditionInput {
        ConditionInput {
            straight_line_speed: speed,
            tire_compound: compound,
            air_temperature: temp,
            rainfall: rain,
            wind_direction: 90.0,
            wind_speed: 5.0,
        }
    }

    fn team(id: TeamId) -> &'static Team {
        roster::find(id).unwrap()
    }

    #[test]
    fn soft_favours_ferrari_and_mclaren() {
        let adj = compound_rule(TeamId::McLaren, &TireCompound::Soft);
        assert_eq!(adj.performance, 0.4);
        assert_eq!(adj.tire_management, 2.5);
        assert_eq!(compound_rule(TeamId::Mercedes, &TireCompound::Soft), NONE);
    }

    #[test]
    fn wet_and_intermediate_share_a_rule() {
        for c in [TireCompound::Wet, TireCompound::Intermediate] {
            let adj = compound_rule(TeamId::RedBullRacing, &c);
            assert_eq!(adj.performance, 0.5);
            assert_eq!(adj.aerodynamics, 3.0);
        }
        assert_eq!(compound_rule(TeamId::Ferrari, &TireCompound::Wet), NONE);
    }

    #[test]
    fn medium_and_unknown_compounds_do_nothing() {
        for id in TeamId::ALL {
            assert_eq!(compound_rule(id, &TireCompound::Medium), NONE);
            assert_eq!(compound_rule(id, &TireCompound::Other("C6".into())), NONE);
        }
    }

    #[test]
    fn temperature_bands_are_exclusive() {
        assert_eq!(temperature_rule(TeamId::Haas, 31.0).power, 2.0);
        assert_eq!(temperature_rule(TeamId::McLaren, 31.0).power, -1.0);
        assert_eq!(temperature_rule(TeamId::McLaren, 31.0).performance, 0.0);
        assert_eq!(temperature_rule(TeamId::Williams, 14.9).performance, 0.3);
        assert_eq!(temperature_rule(TeamId::Ferrari, 14.9), NONE);
        for t in [15.0, 22.0, 30.0] {
            for id in TeamId::ALL {
                assert_eq!(temperature_rule(id, t), NONE, "{id} at {t}");
            }
        }
    }

    #[test]
    fn rain_threshold_is_strict() {
        assert_eq!(rainfall_rule(TeamId::Mercedes, 5.0), NONE);
        let adj = rainfall_rule(TeamId::Mercedes, 5.1);
        assert_eq!(adj.chassis, 2.0);
        assert_eq!(rainfall_rule(TeamId::Ferrari, 8.0).performance, -0.3);
        assert_eq!(rainfall_rule(TeamId::Williams, 8.0), NONE);
    }

    #[test]
    fn straight_line_rule_reads_base_aero() {
        // Mercedes sits at 93 aero; the rain rule lifts it to 96 but the
        // speed rule still sees 93.
        let c = conditions(TireCompound::Medium, 20.0, 10.0, 340.0);
        let rec = adjust(team(TeamId::Mercedes), &c);
        assert_eq!(rec.aerodynamics, 96.0);
        assert_eq!(rec.final_performance, 93.6);
    }

    #[test]
    fn reliability_never_moves() {
        let c = conditions(TireCompound::Wet, 35.0, 20.0, 350.0);
        for t in roster::roster() {
            assert_eq!(adjust(t, &c).reliability, t.reliability);
        }
    }

    #[test]
    fn secondary_attributes_accumulate() {
        let c = conditions(TireCompound::Wet, 35.0, 20.0, 350.0);
        let rec = adjust(team(TeamId::RedBullRacing), &c);
        assert_eq!(rec.aerodynamics, 97.0 + 3.0 + 3.0);
        assert_eq!(rec.power, 95.0 - 1.0);
        assert_eq!(rec.chassis, 96.0 + 2.0);
        // 95.5 + 0.5 + 0.4 + 0.2
        assert_eq!(rec.final_performance, 96.6);
        assert!(rec.advantage.is_none());
    }

    #[test]
    fn rounding_to_one_decimal() {
        assert_eq!(round1(93.75), 93.8);
        assert_eq!(round1(95.5 + 0.3 + 0.4 + 0.2), 96.4);
        assert_eq!(round1(-2.1000000000000085), -2.1);
    }
}
