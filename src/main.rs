use race_predictor::{
    config::ServiceConfig,
    server::{router, AppState},
    ConditionInput, Predictor, TireCompound,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = ServiceConfig::from_env()?;
    let predictor = Predictor::new(cfg.humidity.sampler()?);

    // Warmup so a broken roster shows up at boot, not on the first request
    let probe = ConditionInput {
        straight_line_speed: 320.0,
        tire_compound: TireCompound::Medium,
        air_temperature: 22.0,
        rainfall: 0.0,
        wind_direction: 0.0,
        wind_speed: 0.0,
    };
    let warm = predictor.predict(&probe)?;
    tracing::info!(
        "warmup ok; {} teams, neutral leader {}",
        warm.teams.len(),
        warm.leader().map(|t| t.team.name()).unwrap_or("-")
    );

    let app = router(AppState::new(predictor));

    let addr = cfg.bind_addr()?;
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
