use std::path::PathBuf;

use crate::util::{self, Output};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ZonesArg {
    /// Zone catalog JSON file to validate and print (defaults to the built-in layout)
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ZonesArg) -> anyhow::Result<()> {
    let ZonesArg { catalog, output } = arg;
    let catalog = util::load_catalog(catalog.as_deref())?;
    Output::save_json(&catalog, output.clone())?;
    Ok(())
}
