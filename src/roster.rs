use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Team identities known to the rule table. Serialized as the display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamId {
    #[serde(rename = "Red Bull Racing")]
    RedBullRacing,
    #[serde(rename = "Ferrari")]
    Ferrari,
    #[serde(rename = "Mercedes")]
    Mercedes,
    #[serde(rename = "McLaren")]
    McLaren,
    #[serde(rename = "Aston Martin")]
    AstonMartin,
    #[serde(rename = "Alpine F1 Team")]
    Alpine,
    #[serde(rename = "Williams")]
    Williams,
    #[serde(rename = "AlphaTauri")]
    AlphaTauri,
    #[serde(rename = "Alfa Romeo")]
    AlfaRomeo,
    #[serde(rename = "Haas F1 Team")]
    Haas,
}

impl TeamId {
    pub const ALL: [TeamId; 10] = [
        TeamId::RedBullRacing,
        TeamId::Ferrari,
        TeamId::Mercedes,
        TeamId::McLaren,
        TeamId::AstonMartin,
        TeamId::Alpine,
        TeamId::Williams,
        TeamId::AlphaTauri,
        TeamId::AlfaRomeo,
        TeamId::Haas,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TeamId::RedBullRacing => "Red Bull Racing",
            TeamId::Ferrari => "Ferrari",
            TeamId::Mercedes => "Mercedes",
            TeamId::McLaren => "McLaren",
            TeamId::AstonMartin => "Aston Martin",
            TeamId::Alpine => "Alpine F1 Team",
            TeamId::Williams => "Williams",
            TeamId::AlphaTauri => "AlphaTauri",
            TeamId::AlfaRomeo => "Alfa Romeo",
            TeamId::Haas => "Haas F1 Team",
        }
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TeamId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TeamId::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| format!("unknown team: {s}"))
    }
}

/// Baseline attributes of one roster entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: u32,
    pub team: TeamId,
    pub logo_url: &'static str,
    pub base_performance: f64,
    pub aerodynamics: f64,
    pub power: f64,
    pub chassis: f64,
    pub reliability: f64,
    pub tire_management: f64,
}

impl Team {
    pub fn name(&self) -> &'static str {
        self.team.name()
    }
}

// Catalog order; ranking ties fall back to this order.
static ROSTER: [Team; 10] = [
    Team {
        id: 1,
        team: TeamId::RedBullRacing,
        logo_url: "https://www.formula1.com/content/dam/fom-website/teams/2023/red-bull-racing-logo.png.transform/2col/image.png",
        base_performance: 95.5,
        aerodynamics: 97.0,
        power: 95.0,
        chassis: 96.0,
        reliability: 92.0,
        tire_management: 94.0,
    },
    Team {
        id: 2,
        team: TeamId::Ferrari,
        logo_url: "https://www.formula1.com/content/dam/fom-website/teams/2023/ferrari-logo.png.transform/2col/image.png",
        base_performance: 93.8,
        aerodynamics: 94.0,
        power: 96.0,
        chassis: 93.0,
        reliability: 88.0,
        tire_management: 90.0,
    },
    Team {
        id: 3,
        team: TeamId::Mercedes,
        logo_url: "https://www.formula1.com/content/dam/fom-website/teams/2023/mercedes-logo.png.transform/2col/image.png",
        base_performance: 93.2,
        aerodynamics: 93.0,
        power: 94.0,
        chassis: 94.0,
        reliability: 93.0,
        tire_management: 92.0,
    },
    Team {
        id: 4,
        team: TeamId::McLaren,
        logo_url: "https://www.formula1.com/content/dam/fom-website/teams/2023/mclaren-logo.png.transform/2col/image.png",
        base_performance: 94.1,
        aerodynamics: 96.0,
        power: 93.0,
        chassis: 95.0,
        reliability: 91.0,
        tire_management: 93.0,
    },
    Team {
        id: 5,
        team: TeamId::AstonMartin,
        logo_url: "https://www.formula1.com/content/dam/fom-website/teams/2023/aston-martin-logo.png.transform/2col/image.png",
        base_performance: 91.0,
        aerodynamics: 91.0,
        power: 92.0,
        chassis: 91.0,
        reliability: 90.0,
        tire_management: 89.0,
    },
    Team {
        id: 6,
        team: TeamId::Alpine,
        logo_url: "https://www.formula1.com/content/dam/fom-website/teams/2023/alpine-logo.png.transform/2col/image.png",
        base_performance: 89.5,
        aerodynamics: 89.0,
        power: 90.0,
        chassis: 89.0,
        reliability: 87.0,
        tire_management: 88.0,
    },
    Team {
        id: 7,
        team: TeamId::Williams,
        logo_url: "https://www.formula1.com/content/dam/fom-website/teams/2023/williams-logo.png.transform/2col/image.png",
        base_performance: 87.6,
        aerodynamics: 86.0,
        power: 91.0,
        chassis: 86.0,
        reliability: 86.0,
        tire_management: 85.0,
    },
    Team {
        id: 8,
        team: TeamId::AlphaTauri,
        logo_url: "https://www.formula1.com/content/dam/fom-website/teams/2023/alphatauri-logo.png.transform/2col/image.png",
        base_performance: 88.4,
        aerodynamics: 88.0,
        power: 89.0,
        chassis: 88.0,
        reliability: 88.0,
        tire_management: 87.0,
    },
    Team {
        id: 9,
        team: TeamId::AlfaRomeo,
        logo_url: "https://www.formula1.com/content/dam/fom-website/teams/2023/alfa-romeo-logo.png.transform/2col/image.png",
        base_performance: 87.9,
        aerodynamics: 87.0,
        power: 88.0,
        chassis: 87.0,
        reliability: 89.0,
        tire_management: 88.0,
    },
    Team {
        id: 10,
        team: TeamId::Haas,
        logo_url: "https://www.formula1.com/content/dam/fom-website/teams/2023/haas-f1-team-logo.png.transform/2col/image.png",
        base_performance: 87.2,
        aerodynamics: 86.0,
        power: 89.0,
        chassis: 85.0,
        reliability: 85.0,
        tire_management: 84.0,
    },
];

/// Read-only view of the full roster in catalog order.
pub fn roster() -> &'static [Team] {
    &ROSTER
}

/// Owned copy of the roster, for callers that want to hold their own set.
pub fn all_teams() -> Vec<Team> {
    ROSTER.to_vec()
}

pub fn find(team: TeamId) -> Option<&'static Team> {
    ROSTER.iter().find(|t| t.team == team)
}
