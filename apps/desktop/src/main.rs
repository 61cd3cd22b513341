use std::{sync::Arc, time::Duration};

use anyhow::{bail, Context, Result};
use clap::Parser;
use client_core::{
    ClientEvent, OrchestratorConfig, RenderSurface, RequestOrchestrator, ResultColor,
    SubmitTrigger,
};
use shared::domain::RawFieldValues;
use url::Url;

mod surface;

use surface::ConsoleSurface;

/// Runs one prediction cycle against a remote home-value endpoint.
#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the prediction service, e.g. http://127.0.0.1:8000
    #[arg(long)]
    server_url: String,
    /// Median neighborhood income.
    #[arg(long)]
    med_inc: String,
    /// Median house age in years.
    #[arg(long)]
    house_age: String,
    /// Average rooms per household.
    #[arg(long)]
    ave_rooms: String,
    /// Neighborhood population.
    #[arg(long)]
    population: String,
    /// Override the cosmetic delay (milliseconds) before a result is shown.
    #[arg(long)]
    settle_delay_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    Url::parse(&args.server_url).context("invalid --server-url")?;

    let mut config = OrchestratorConfig::new(&args.server_url);
    if let Some(ms) = args.settle_delay_ms {
        config.settle_delay = Duration::from_millis(ms);
    }

    tracing::info!(server_url = %args.server_url, "predict: starting submission cycle");

    let surface = Arc::new(ConsoleSurface::new("Predict Price"));
    let orchestrator = RequestOrchestrator::new_with_surface(
        config,
        Arc::clone(&surface) as Arc<dyn RenderSurface>,
    );
    let mut events = orchestrator.subscribe_events();

    let mut trigger = SubmitTrigger::new(RawFieldValues {
        med_inc: args.med_inc,
        house_age: args.house_age,
        ave_rooms: args.ave_rooms,
        population: args.population,
    });
    orchestrator.handle_submit(&mut trigger).await;

    loop {
        match events.recv().await.context("event stream closed")? {
            ClientEvent::PredictionResolved {
                formatted_price,
                resolved_at,
                ..
            } => {
                println!(
                    "Predicted home value: {formatted_price} (resolved at {})",
                    resolved_at.format("%H:%M:%S")
                );
                break;
            }
            ClientEvent::PredictionFailed { error, .. } => {
                let (text, color) = surface.result_display();
                if color == ResultColor::Error {
                    eprintln!("\x1b[31m{text}\x1b[0m");
                } else {
                    eprintln!("{text}");
                }
                bail!("prediction request failed: {error}");
            }
            _ => {}
        }
    }

    Ok(())
}
