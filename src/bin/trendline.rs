use std::env;
use std::error::Error;
use std::path::PathBuf;

use anyhow::{anyhow, bail};
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info, warn};

use shotzone::print::tabulate_trendline;
use shotzone::trend;
use shotzone::trend::{RollingWindow, DEFAULT_WINDOW};

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// CSV of per-match xG with Season, Round, xG and xGA columns
    file: Option<PathBuf>,

    /// number of matches in the rolling window
    #[clap(short = 'w', long, default_value_t = DEFAULT_WINDOW)]
    window: usize,

    /// use a trailing window instead of a centred one
    #[clap(long)]
    trailing: bool,

    /// seasons to print (all if omitted)
    #[clap(short = 's', long)]
    season: Vec<String>,

    /// where to write the CSV to
    #[clap(short = 'o', long)]
    out: Option<PathBuf>,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        self.file.as_ref().ok_or(anyhow!("match file must be specified"))?;
        if self.window == 0 {
            bail!("window must be at least 1");
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
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

    let matches = trend::read_matches(args.file.unwrap())?;
    let window = if args.trailing {
        RollingWindow::trailing(args.window)
    } else {
        RollingWindow::centred(args.window)
    };
    let mut lines = trend::trendlines(&matches, &window);
    if !args.season.is_empty() {
        lines.retain(|line| args.season.contains(&line.season));
        if lines.is_empty() {
            warn!("none of the seasons {:?} appear in the data", args.season);
        }
    }

    for line in &lines {
        println!(
            "{} ({}-match rolling average):\n{}",
            line.season,
            args.window,
            Console::default().render(&tabulate_trendline(line))
        );
    }

    if let Some(out) = args.out {
        trend::write_trendlines(&lines, &out)?;
        info!("wrote {} seasons to {}", lines.len(), out.display());
    }
    Ok(())
}
