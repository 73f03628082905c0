use std::{collections::BTreeMap, path::PathBuf};

use tilescope_engine::{ColorClass, GameState, ZoneCatalog};
use tilescope_evaluator::move_ranker::MoveRanker;

use crate::{
    command::BoardArg,
    util::{self, Output},
};

const DEFAULT_TOP: usize = 5;

#[derive(Default, Debug, Clone, clap::Args)]
#[group(required = true, multiple = false)]
pub(crate) struct RankInput {
    /// Detector frame JSON file to classify and rank
    #[arg(long)]
    frame: Option<PathBuf>,
    /// Game state JSON file (object of zone name to color list)
    #[arg(long)]
    state: Option<PathBuf>,
}

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct RankArg {
    #[clap(flatten)]
    input: RankInput,
    /// Number of plays to print
    #[arg(long, default_value_t = DEFAULT_TOP)]
    top: usize,
    #[clap(flatten)]
    board: BoardArg,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

type StateFile = BTreeMap<String, Vec<ColorClass>>;

fn load_state(input: &RankInput, board: &BoardArg, catalog: &ZoneCatalog) -> anyhow::Result<GameState> {
    match (&input.frame, &input.state) {
        (Some(frame), _) => board.classify_frame_file(frame, catalog),
        (None, Some(state)) => {
            let contents: StateFile = util::read_json_file("game state", state)?;
            Ok(GameState::from_contents(catalog, contents)?)
        }
        (None, None) => anyhow::bail!("either --frame or --state is required"),
    }
}

pub(crate) fn run(arg: &RankArg) -> anyhow::Result<()> {
    let RankArg {
        input,
        top,
        board,
        output,
    } = arg;
    let catalog = board.load_catalog()?;
    let state = load_state(input, board, &catalog)?;

    let ranking = MoveRanker::default().top(&state, *top);
    if let Some(best) = ranking.first() {
        tracing::info!(
            plays = ranking.len(),
            best_score = best.score(),
            "ranked plays"
        );
    } else {
        tracing::info!("no legal plays");
    }
    Output::save_json(&ranking, output.clone())?;
    Ok(())
}
