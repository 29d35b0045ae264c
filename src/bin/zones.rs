use std::env;
use std::error::Error;
use std::path::PathBuf;

use anyhow::{anyhow, bail};
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use shotzone::file::{read_json, write_json};
use shotzone::heatmap::{self, Heatmap};
use shotzone::pitch::CoordinateConverter;
use shotzone::print::tabulate_heatmap;
use shotzone::understat::{self, UnderstatClient, UnderstatShot};
use shotzone::zone::ZoneClassifier;

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// Understat player id to scrape shots for
    #[clap(short = 'p', long)]
    player: Option<String>,

    /// saved Understat shot payload to read instead of scraping
    #[clap(short = 'f', long)]
    file: Option<PathBuf>,

    /// only count shots from this season (e.g. 2021)
    #[clap(short = 's', long)]
    season: Option<String>,

    /// where to save the scraped payload to
    #[clap(long)]
    save: Option<PathBuf>,

    /// where to write the zone statistics CSV to
    #[clap(short = 'o', long)]
    out: Option<PathBuf>,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        match (&self.player, &self.file) {
            (Some(_), Some(_)) => bail!("specify either a player or a file, not both"),
            (None, None) => bail!("either a player or a file must be specified"),
            _ => {}
        }
        if self.save.is_some() && self.player.is_none() {
            bail!("only scraped payloads can be saved");
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let payload = load_shots(&args).await?;
    if let Some(path) = &args.save {
        write_json(&payload, path)?;
        info!("saved {} shots to {}", payload.len(), path.display());
    }

    let mut shots = understat::to_records(&payload)?;
    if let Some(season) = &args.season {
        shots.retain(|shot| &shot.season == season);
        debug!("{} shots in season {season}", shots.len());
    }

    let converter = CoordinateConverter::statsbomb();
    let classifier = ZoneClassifier::default();
    let shots = converter.convert_shots(&shots)?;
    let classified = classifier.classify_shots(shots)?;
    let unassigned = classified.iter().filter(|shot| shot.zone.is_none()).count();
    info!(
        "classified {} shots, {unassigned} outside the zoned area",
        classified.len()
    );

    let stats = heatmap::aggregate(&classified);
    let heatmap = Heatmap::new(classifier.table(), &stats);
    println!(
        "Shot zones:\n{}",
        Console::default().render(&tabulate_heatmap(&heatmap, &stats))
    );

    if let Some(out) = &args.out {
        heatmap::write_stats(&stats, out)?;
        info!("wrote {} zone stats to {}", stats.len(), out.display());
    }
    Ok(())
}

async fn load_shots(args: &Args) -> anyhow::Result<Vec<UnderstatShot>> {
    match (&args.player, &args.file) {
        (Some(player), _) => Ok(UnderstatClient::new()?.player_shots(player).await?),
        (None, Some(file)) => Ok(read_json(file)?),
        (None, None) => Err(anyhow!("no shot source")),
    }
}
