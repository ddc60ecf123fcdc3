//! Command-line front end for the predictor.
//!
//!   race_client --st_speed=335 --compound=Soft --air_temperature=31 \
//!               --rainfall=0 --wind_direction=180 --wind_speed=12
//!
//! Talks to the HTTP service when `PREDICT_URL` is set, otherwise runs the
//! engine in-process. `--compare` predicts every compound side by side.

use anyhow::{bail, Result};
use race_predictor::{
    config::ServiceConfig,
    transport::{predict_all, HttpTransport, PredictionTransport, SimulatedTransport},
    PredictionResult, Predictor, RawConditions,
};
use tracing_subscriber::EnvFilter;

const COMPOUNDS: [&str; 5] = ["Soft", "Medium", "Hard", "Intermediate", "Wet"];

fn parse_args(args: impl Iterator<Item = String>) -> Result<(RawConditions, bool)> {
    let mut raw = RawConditions::default();
    let mut compare = false;
    for arg in args {
        if arg == "--compare" {
            compare = true;
            continue;
        }
        let Some((key, value)) = arg.strip_prefix("--").and_then(|a| a.split_once('=')) else {
            bail!("unrecognised argument {arg:?}; expected --key=value");
        };
        let slot = match key {
            "st_speed" => &mut raw.st_speed,
            "compound" => &mut raw.compound,
            "air_temperature" => &mut raw.air_temperature,
            "rainfall" => &mut raw.rainfall,
            "wind_direction" => &mut raw.wind_direction,
            "wind_speed" => &mut raw.wind_speed,
            other => bail!("unknown field {other:?}"),
        };
        *slot = Some(value.into());
    }
    Ok((raw, compare))
}

fn print_result(r: &PredictionResult) {
    let c = &r.race_conditions;
    println!("{} - {} compound", r.track_name, c.compound);
    println!(
        "  track {:.1}°C  air {:.1}°C  humidity {:.1}%  wind {:.1} km/h ({:.0}°)  rain {:.1} mm",
        c.track_temp, c.air_temp, c.humidity, c.wind_speed, c.wind_direction, c.rainfall
    );
    for (i, t) in r.teams.iter().enumerate() {
        println!(
            "|{0:3}. | {1:16} | {2:5.1} | {3:>9}",
            i + 1,
            t.team.name(),
            t.final_performance,
            t.advantage.map(|a| a.to_string()).unwrap_or_default()
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let (raw, compare) = parse_args(std::env::args().skip(1))?;

    let transport: Box<dyn PredictionTransport> = match std::env::var("PREDICT_URL") {
        Ok(url) => {
            tracing::info!("using prediction endpoint {}", url);
            Box::new(HttpTransport::new(url))
        }
        Err(_) => {
            let cfg = ServiceConfig::from_env()?;
            Box::new(SimulatedTransport::new(
                Predictor::new(cfg.humidity.sampler()?),
                cfg.simulated_latency(),
            ))
        }
    };

    let requests: Vec<RawConditions> = if compare {
        COMPOUNDS
            .iter()
            .map(|c| RawConditions {
                compound: Some((*c).into()),
                ..raw.clone()
            })
            .collect()
    } else {
        vec![raw]
    };

    for result in predict_all(transport.as_ref(), &requests).await {
        print_result(&result?);
        println!();
    }
    Ok(())
}
