use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use tilescope_engine::{GameState, ZoneCatalog};
use tracing::level_filters::LevelFilter;

use crate::util;

use self::{classify::ClassifyArg, rank::RankArg, watch::WatchArg, zones::ZonesArg};

mod classify;
mod rank;
mod watch;
mod zones;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print the zone catalog as JSON
    Zones(#[clap(flatten)] ZonesArg),
    /// Classify one detector frame into a game state
    Classify(#[clap(flatten)] ClassifyArg),
    /// Rank the legal plays of one frame or game state
    Rank(#[clap(flatten)] RankArg),
    /// Run the frame pipeline over a stream of detector frames
    Watch(#[clap(flatten)] WatchArg),
}

/// Options shared by every command that classifies detections.
#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct BoardArg {
    /// Zone catalog JSON file (defaults to the built-in layout)
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Ignore predictions whose confidence is below this value
    #[arg(long, default_value_t = 0.0)]
    min_confidence: f64,
}

impl BoardArg {
    fn load_catalog(&self) -> anyhow::Result<ZoneCatalog> {
        util::load_catalog(self.catalog.as_deref())
    }

    fn classify_frame_file(&self, path: &Path, catalog: &ZoneCatalog) -> anyhow::Result<GameState> {
        let frame = util::read_frame_file(path)?;
        let detections = frame.detections_above(self.min_confidence);
        tracing::debug!(
            path = %path.display(),
            predictions = frame.predictions.len(),
            detections = detections.len(),
            "read frame",
        );
        Ok(GameState::classify(&detections, catalog))
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_logging(args.verbose);
    match args.mode {
        Mode::Zones(arg) => zones::run(&arg)?,
        Mode::Classify(arg) => classify::run(&arg)?,
        Mode::Rank(arg) => rank::run(&arg)?,
        Mode::Watch(arg) => watch::run(&arg)?,
    }
    Ok(())
}
