//! Change a template's body or name.
//!
//! The new body is fed through an [`EditSession`] so the command can show how
//! the input fields are affected before anything is written: which
//! placeholders appear, which disappear, and which keep their `--set` value.
//! After confirmation the session is saved and the store updated in a single
//! write; otherwise the edit is discarded.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

use super::common::{CommandContext, Prompter, parse_assignment, read_body};
use crate::template::{EditSession, ReconcileReport, Template};

/// `flashprompt edit`
#[derive(Args)]
pub struct EditCommand {
    /// Template name
    name: String,

    /// New template body
    #[arg(short, long, conflicts_with = "file")]
    body: Option<String>,

    /// Read the new template body from a file
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// New template name
    #[arg(long, value_name = "NEW_NAME")]
    rename: Option<String>,

    /// Preview value for a placeholder of the current or new body (repeatable)
    #[arg(short, long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    set: Vec<(String, String)>,

    /// Save without asking for confirmation
    #[arg(short, long)]
    yes: bool,
}

impl EditCommand {
    pub async fn execute(self, ctx: &mut CommandContext) -> Result<()> {
        let template = ctx.store.require(&self.name)?.clone();
        let new_body = read_body(self.body, self.file, false).await?;

        if new_body.is_none() && self.rename.is_none() {
            return Err(anyhow::anyhow!(
                "Nothing to change for '{}': pass --body, --file or --rename",
                self.name
            ));
        }

        let mut session = EditSession::open(template);

        // Values for fields of the current body go in first so they can survive
        // the body change; the rest must name fields of the new body.
        let (current, pending): (Vec<_>, Vec<_>) =
            self.set.iter().partition(|(name, _)| session.bindings().get(name).is_some());
        for (name, value) in current {
            session.on_field_value_changed(name, value.as_str())?;
        }

        session.start_editing();
        if let Some(body) = new_body {
            let report = session.on_template_body_changed(body)?;
            print_report(&report);
        }
        for (name, value) in pending {
            session.on_field_value_changed(name, value.as_str())?;
        }

        // Validate before asking, so a bad edit never gets as far as the prompt
        let new_name = self.rename.as_deref().unwrap_or(&self.name);
        let candidate = Template::new(new_name, session.current_body())?;

        if candidate == *session.template() {
            session.discard();
            println!("{}", "No changes".yellow());
            return Ok(());
        }

        println!("{}", "Preview:".bold());
        println!("{}", session.preview());
        println!();

        let question = if candidate.name == self.name {
            format!("Save changes to '{}'?", self.name)
        } else {
            format!("Save '{}' as '{}'?", self.name, candidate.name)
        };
        let action = format!("edit template '{}'", self.name);
        if !Prompter::new().confirm(&question, &action, self.yes).await? {
            session.discard();
            println!("{}", "Discarded changes".yellow());
            return Ok(());
        }

        session.save();
        let new_name = candidate.name.clone();
        ctx.store.replace(&self.name, candidate)?;
        info!(template = %new_name, "Updated template");

        println!("{} Saved template '{}'", "✓".green(), new_name.bold());
        Ok(())
    }
}

fn print_report(report: &ReconcileReport) {
    if report.is_unchanged() && report.kept.is_empty() {
        return;
    }

    println!("{}", "Fields:".bold());
    for name in &report.kept {
        println!("  {name}");
    }
    for name in &report.added {
        println!("  {} {}", "+".green(), name.green());
    }
    for name in &report.removed {
        println!("  {} {}", "-".red(), name.red());
    }
    println!();
}
