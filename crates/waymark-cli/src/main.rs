use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use waymark_lib::{
    build_network, load_atlas, plan_route, CostKind, RouteRequest, RouteSummary,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Route search over a road atlas")]
struct Cli {
    /// Starting location name.
    start: String,

    /// Destination location name.
    destination: String,

    /// Cost function: segments, distance, time, or delivery.
    cost: String,

    /// Override the path of the location coordinates table.
    #[arg(long, default_value = "city-gps.txt")]
    gps: PathBuf,

    /// Override the path of the road segments table.
    #[arg(long, default_value = "road-segments.txt")]
    segments: PathBuf,

    /// Emit the route as JSON instead of plain text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    handle_route(&cli)
}

fn handle_route(cli: &Cli) -> Result<()> {
    // Reject a bad cost function before touching the tables.
    let cost: CostKind = cli.cost.parse()?;

    let atlas = load_atlas(&cli.gps, &cli.segments).with_context(|| {
        format!(
            "failed to load road atlas from {} and {}",
            cli.gps.display(),
            cli.segments.display()
        )
    })?;
    let network = build_network(&atlas);

    let request = RouteRequest::new(cli.start.clone(), cli.destination.clone(), cost);
    let route = plan_route(&atlas, &network, &request)?;
    let summary = RouteSummary::from_route(&atlas, &route);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary.render_plain_text());
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
