//! List saved templates.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::common::{CommandContext, OutputFormat};
use crate::template::Template;

/// `flashprompt list`
#[derive(Args)]
pub struct ListCommand {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,
}

/// One row of `list --format json`.
#[derive(Debug, Serialize)]
struct ListEntry<'a> {
    name: &'a str,
    placeholders: Vec<String>,
}

impl ListCommand {
    pub fn execute(self, ctx: &CommandContext) -> Result<()> {
        let templates = ctx.store.list_all();

        match self.format {
            OutputFormat::Json => println!("{}", render_json(templates)?),
            OutputFormat::Text if templates.is_empty() => {
                println!("{}", "No templates saved".yellow());
            }
            OutputFormat::Text => {
                for template in templates {
                    println!("{}", template.name);
                }
            }
        }
        Ok(())
    }
}

fn render_json(templates: &[Template]) -> Result<String> {
    let entries: Vec<ListEntry<'_>> = templates
        .iter()
        .map(|t| ListEntry {
            name: &t.name,
            placeholders: t.placeholders(),
        })
        .collect();
    Ok(serde_json::to_string_pretty(&entries)?)
}
