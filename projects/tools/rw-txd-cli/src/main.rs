#![allow(unexpected_cfgs)]
#![cfg(not(tarpaulin_include))]

mod commands;
mod error;
mod logger;
mod util;
use argh::FromArgs;
use core::error::Error;

#[derive(FromArgs, Debug)]
/// List and extract textures from RenderWare texture dictionaries (.txd)
struct TopLevel {
    /// log parser and decoder diagnostics to stderr
    #[argh(switch, short = 'v')]
    verbose: bool,

    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    List(commands::list::ListCmd),
    Extract(commands::extract::ExtractCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli: TopLevel = argh::from_env();
    if cli.verbose {
        logger::init(log::LevelFilter::Debug);
    } else {
        logger::init(log::LevelFilter::Warn);
    }

    match cli.command {
        Commands::List(cmd) => {
            commands::list::handle_list_command(cmd)?;
        }
        Commands::Extract(cmd) => {
            commands::extract::handle_extract_command(cmd)?;
        }
    }

    Ok(())
}
