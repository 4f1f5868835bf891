use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use reviewbot_server::server::{run_bot_server, AppContext};

use super::{Command, CommandContext};

/// Start server
#[derive(Parser)]
pub(crate) struct ServerCommand;

#[async_trait(?Send)]
impl Command for ServerCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let context = AppContext::new(ctx.config);

        run_bot_server(context).await.map_err(Into::into)
    }
}
