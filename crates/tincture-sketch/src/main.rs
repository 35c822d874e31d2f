mod cli;
mod config;
mod cursor;
mod palettes;
mod sketch;
mod stage;

use anyhow::Context;
use clap::Parser;

use tincture_engine::logging::init_logging;
use tincture_engine::window::Runtime;

use crate::cli::Args;
use crate::sketch::Sketch;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.logging_config());

    let config = args.sketch_config().context("invalid sketch configuration")?;
    log::debug!("sketch config: {config:?}");

    Runtime::run(args.runtime_config(), args.gpu_init(), Sketch::new(config))
}
