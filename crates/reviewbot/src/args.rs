use anyhow::Result;
use clap::Parser;
use reviewbot_config::Config;

use crate::commands::{CommandContext, SubCommand};

/// GitHub AI review bot
#[derive(Parser)]
#[clap(author, version, about, long_about = None, name = "reviewbot")]
#[clap(propagate_version = true)]
pub struct Args {
    #[clap(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        actix_rt::System::with_tokio_rt(|| {
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .expect("Could not build tokio runtime")
        })
        .block_on(Self::parse_args_async(config, args))
    }

    pub(crate) async fn parse_args_async(config: Config, args: Args) -> Result<()> {
        args.cmd.execute(CommandContext { config }).await
    }
}
