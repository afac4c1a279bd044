//! Show one template with its placeholders.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use super::common::{CommandContext, OutputFormat};
use crate::template::{Template, placeholder_occurrences};

/// `flashprompt show`
#[derive(Args)]
pub struct ShowCommand {
    /// Template name
    name: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,
}

/// A placeholder as reported by `show`.
#[derive(Debug, PartialEq, Eq, Serialize)]
struct PlaceholderSummary {
    name: String,
    occurrences: usize,
    primary: bool,
}

#[derive(Serialize)]
struct ShowOutput<'a> {
    name: &'a str,
    template: &'a str,
    placeholders: Vec<PlaceholderSummary>,
}

impl ShowCommand {
    pub fn execute(self, ctx: &CommandContext) -> Result<()> {
        let template = ctx.store.require(&self.name)?;
        let placeholders = summarize(template);

        match self.format {
            OutputFormat::Json => {
                let output = ShowOutput {
                    name: &template.name,
                    template: &template.body,
                    placeholders,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => print_text(template, &placeholders),
        }
        Ok(())
    }
}

/// Placeholders in first-occurrence order with their occurrence counts.
fn summarize(template: &Template) -> Vec<PlaceholderSummary> {
    let mut summaries: Vec<PlaceholderSummary> = template
        .placeholders()
        .into_iter()
        .enumerate()
        .map(|(index, name)| PlaceholderSummary {
            name,
            occurrences: 0,
            primary: index == 0,
        })
        .collect();

    for occurrence in placeholder_occurrences(&template.body) {
        if let Some(summary) = summaries.iter_mut().find(|s| s.name == occurrence.name) {
            summary.occurrences += 1;
        }
    }
    summaries
}

fn print_text(template: &Template, placeholders: &[PlaceholderSummary]) {
    println!("{}", template.name.bold());
    println!("{}", "─".repeat(template.name.chars().count().max(8)).bright_black());
    println!("{}", template.body);
    println!();

    if placeholders.is_empty() {
        println!("{}", "No placeholders".bright_black());
        return;
    }

    println!("{}", "Placeholders:".bold());
    for placeholder in placeholders {
        let mut line = format!("  {}", placeholder.name.cyan());
        if placeholder.occurrences > 1 {
            line.push_str(&format!(" ×{}", placeholder.occurrences));
        }
        if placeholder.primary {
            line.push_str(&format!(" {}", "(primary)".green()));
        }
        println!("{line}");
    }
}
