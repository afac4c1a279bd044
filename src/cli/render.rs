//! Fill in a template and print the result.
//!
//! Values come from `--set NAME=VALUE` and, with `--interactive`, from one
//! prompt per field still empty, primary field first. The rendered text goes
//! to stdout on its own so it can be piped; status messages go to stderr.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tracing::warn;

use super::common::{CommandContext, OutputFormat, Prompter, parse_assignment};
use crate::clipboard::{ClipboardSink, SystemClipboard, copy_preview};
use crate::core::FlashError;
use crate::template::{EditSession, FieldBindings, unbound_placeholders};

/// `flashprompt render`
#[derive(Args)]
pub struct RenderCommand {
    /// Template name
    name: String,

    /// Value for a placeholder (repeatable)
    #[arg(short, long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    set: Vec<(String, String)>,

    /// Prompt for every placeholder that is still empty
    #[arg(short, long)]
    interactive: bool,

    /// Copy the result to the clipboard (on X11 the text only outlives
    /// flashprompt when a clipboard manager is running)
    #[arg(long)]
    copy: bool,

    /// Fail instead of rendering empty placeholders
    #[arg(long)]
    strict: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Serialize)]
struct RenderOutput<'a> {
    name: &'a str,
    preview: &'a str,
    fields: &'a FieldBindings,
    unfilled: Vec<String>,
}

impl RenderCommand {
    pub async fn execute(self, ctx: &CommandContext) -> Result<()> {
        let template = ctx.store.require(&self.name)?.clone();
        let mut session = EditSession::open(template);

        apply_assignments(&mut session, &self.set)?;
        if self.interactive {
            prompt_for_fields(&mut session, &mut Prompter::new()).await?;
        }

        let unfilled = unbound_placeholders(session.current_body(), session.bindings());
        if !unfilled.is_empty() {
            if self.strict {
                return Err(FlashError::UnfilledPlaceholders {
                    names: unfilled,
                }
                .into());
            }
            warn!(fields = ?unfilled, "Rendering with empty placeholders");
        }

        match self.format {
            OutputFormat::Json => {
                let output = RenderOutput {
                    name: &session.template().name,
                    preview: session.preview(),
                    fields: session.bindings(),
                    unfilled,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => println!("{}", session.preview()),
        }

        if self.copy {
            let mut clipboard = SystemClipboard::new()?;
            copy_and_report(&mut clipboard, &session)?;
        }
        Ok(())
    }
}

/// Apply `--set` values in the order given; later values win.
fn apply_assignments(session: &mut EditSession, assignments: &[(String, String)]) -> Result<()> {
    for (name, value) in assignments {
        session.on_field_value_changed(name, value.as_str())?;
    }
    Ok(())
}

/// Ask for each field that is still empty, in display order.
///
/// An empty answer leaves the field empty. End of input stops prompting.
async fn prompt_for_fields(session: &mut EditSession, prompter: &mut Prompter) -> Result<()> {
    let pending: Vec<String> = session
        .bindings()
        .iter()
        .filter(|field| field.value.is_empty())
        .map(|field| field.name.clone())
        .collect();

    for name in pending {
        let label = format!("{}: ", name.cyan());
        let Some(value) = prompter.ask(&label).await? else {
            break;
        };
        session.on_field_value_changed(&name, value)?;
    }
    Ok(())
}

fn copy_and_report(sink: &mut dyn ClipboardSink, session: &EditSession) -> Result<()> {
    if copy_preview(sink, session.preview())? {
        eprintln!("{} Copied to clipboard", "✓".green());
    } else {
        eprintln!("{}", "Nothing to copy: the preview is empty".yellow());
    }
    Ok(())
}
