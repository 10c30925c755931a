use std::path::PathBuf;

use crate::{sample, util};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct SampleConfigArg {
    /// Output file path (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SampleConfigArg) -> anyhow::Result<()> {
    util::save_json(&sample::solar_site(), arg.output.as_deref())
}
