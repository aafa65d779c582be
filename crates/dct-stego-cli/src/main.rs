use clap::Parser;
use dct_stego_core::StegoError;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = Result<T, StegoError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let options = args.codec_options();

    match args.command {
        Commands::Hide(h) => h.run(options),
        Commands::Unveil(u) => u.run(options),
        Commands::Capacity(c) => c.run(options),
    }
}
