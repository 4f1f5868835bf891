//! Commands.

mod server;

use anyhow::Result;
use async_trait::async_trait;
use clap::Subcommand;
use reviewbot_config::Config;

use self::server::ServerCommand;

/// Command context.
pub struct CommandContext {
    /// Configuration.
    pub config: Config,
}

#[async_trait(?Send)]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command.
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    /// Start the webhook server
    Server(ServerCommand),
}

impl SubCommand {
    pub async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            SubCommand::Server(cmd) => cmd.execute(ctx).await,
        }
    }
}
