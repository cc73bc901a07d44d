use std::time::Duration;

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use neoscene::{
    constants::{DEFAULT_DENSITY_KG_M3, DEFAULT_NUM_POINTS},
    neo_feed::{
        feed_client::{load_browse_file, FeedConfig, NeoFeedClient, DEMO_API_KEY, NEOWS_BASE_URL},
        RawNeo,
    },
    orbital_elements::OrbitalElements,
    scene::{build_scene, write_scene_json, write_summary_csv, SceneConfig},
    trajectory::SamplingMode,
};

#[derive(Parser)]
#[command(name = "neoscene")]
#[command(about = "Generate the NEO scene data file (impact energies and orbit samples)")]
struct Cli {
    /// NASA api.nasa.gov key
    #[arg(long, env = "NASA_API_KEY", default_value = DEMO_API_KEY, hide_env_values = true)]
    api_key: String,

    /// NeoWs REST root
    #[arg(long, default_value = NEOWS_BASE_URL)]
    base_url: String,

    /// Read a saved browse response instead of calling the API
    #[arg(short, long)]
    input: Option<Utf8PathBuf>,

    /// Scene file to write
    #[arg(short, long, default_value = "scene_data.json")]
    output: Utf8PathBuf,

    /// Optional per-asteroid CSV summary
    #[arg(long)]
    summary_csv: Option<Utf8PathBuf>,

    /// First browse page to fetch
    #[arg(long, default_value_t = 0)]
    page: u32,

    /// Number of consecutive pages to fetch
    #[arg(long, default_value_t = 1)]
    pages: u32,

    /// Records per page (provider default when omitted)
    #[arg(long)]
    size: Option<u32>,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Angular intervals per trajectory
    #[arg(long, default_value_t = DEFAULT_NUM_POINTS)]
    num_points: usize,

    /// Assumed bulk density (kg/m³)
    #[arg(long, default_value_t = DEFAULT_DENSITY_KG_M3)]
    density: f64,

    /// Sample orbits at equal time steps instead of equal angles
    #[arg(long)]
    time_uniform: bool,

    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn collect_records(cli: &Cli) -> Result<Vec<RawNeo>> {
    if let Some(input) = &cli.input {
        let page = load_browse_file(input).with_context(|| format!("reading {input}"))?;
        return Ok(page.near_earth_objects);
    }

    let config = FeedConfig::new(cli.api_key.as_str())
        .with_base_url(cli.base_url.as_str())
        .with_page_size(cli.size)
        .with_timeout(Duration::from_secs(cli.timeout_secs));
    let client = NeoFeedClient::new(config).context("creating the NeoWs client")?;

    info!(base_url = %cli.base_url, page = cli.page, pages = cli.pages, "connecting to NASA NeoWs");
    let neos = client
        .fetch_pages(cli.page, cli.pages)
        .await
        .context("fetching NEO records")?;
    info!(records = neos.len(), "NEO records fetched");
    Ok(neos)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = SceneConfig {
        num_points: cli.num_points,
        density_kg_m3: cli.density,
        sampling: if cli.time_uniform {
            SamplingMode::TimeUniform
        } else {
            SamplingMode::UniformAngle
        },
        earth: OrbitalElements::earth(),
    };
    config.validate().context("invalid scene settings")?;

    let neos = collect_records(&cli).await?;
    let report = build_scene(&neos, &config).context("building the scene")?;

    write_scene_json(&report.dataset, &cli.output)
        .with_context(|| format!("writing {}", cli.output))?;
    if let Some(csv_path) = &cli.summary_csv {
        write_summary_csv(&report, csv_path)
            .with_context(|| format!("writing {csv_path}"))?;
    }

    info!(
        output = %cli.output,
        asteroids = report.dataset.asteroids.len(),
        skipped = report.skipped.len(),
        "all data processed and saved"
    );
    Ok(())
}
