use std::path::PathBuf;

use crate::{command::BoardArg, util::Output};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ClassifyArg {
    /// Detector frame JSON file
    #[arg(long)]
    frame: PathBuf,
    #[clap(flatten)]
    board: BoardArg,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ClassifyArg) -> anyhow::Result<()> {
    let ClassifyArg {
        frame,
        board,
        output,
    } = arg;
    let catalog = board.load_catalog()?;
    let state = board.classify_frame_file(frame, &catalog)?;
    tracing::info!(tiles = state.total_tiles(), "classified frame");
    Output::save_json(&state, output.clone())?;
    Ok(())
}
