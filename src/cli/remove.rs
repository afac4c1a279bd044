//! Delete a template.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use tracing::info;

use super::common::{CommandContext, Prompter};

/// `flashprompt remove`
#[derive(Args)]
pub struct RemoveCommand {
    /// Template name
    name: String,

    /// Delete without asking for confirmation
    #[arg(long)]
    force: bool,
}

impl RemoveCommand {
    pub async fn execute(self, ctx: &mut CommandContext) -> Result<()> {
        // Fails with suggestions if the name is unknown
        ctx.store.require(&self.name)?;

        let question = format!("Delete template '{}'?", self.name);
        let action = format!("remove template '{}'", self.name);
        if !Prompter::new().confirm(&question, &action, self.force).await? {
            println!("{}", "Cancelled".yellow());
            return Ok(());
        }

        let removed = ctx.store.delete_by_name(&self.name)?;
        info!(template = %self.name, removed, "Removed template");

        println!("{} Removed template '{}'", "✓".green(), self.name.bold());
        Ok(())
    }
}
