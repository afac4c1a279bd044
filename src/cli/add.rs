//! Save a new template.
//!
//! The body comes from `--body`, `--file` or stdin. Each `--var NAME` appends
//! a `{{NAME}}` token, so a template can be put together without typing
//! braces:
//!
//! ```text
//! flashprompt add review --body "Review this {{language}} code:" --var code
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

use super::common::{CommandContext, read_body};
use crate::template::{Template, placeholder_token};

/// `flashprompt add`
#[derive(Args)]
pub struct AddCommand {
    /// Template name
    name: String,

    /// Template body
    #[arg(short, long, conflicts_with = "file")]
    body: Option<String>,

    /// Read the template body from a file
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Append a {{NAME}} placeholder to the body (repeatable)
    #[arg(long = "var", value_name = "NAME")]
    vars: Vec<String>,
}

impl AddCommand {
    pub async fn execute(self, ctx: &mut CommandContext) -> Result<()> {
        // Without --body/--file and with --var only, the tokens are the body
        let allow_stdin = self.vars.is_empty();
        let body = read_body(self.body, self.file, allow_stdin).await?.unwrap_or_default();
        let body = append_tokens(body, &self.vars)?;

        let template = Template::new(&self.name, &body)?;
        let placeholders = template.placeholders();
        let name = template.name.clone();

        ctx.store.insert_unique(template)?;
        info!(template = %name, "Saved template");

        println!("{} Saved template '{}'", "✓".green(), name.bold());
        if !placeholders.is_empty() {
            println!("  Placeholders: {}", placeholders.join(", ").cyan());
        }
        Ok(())
    }
}

/// Append one `{{name}}` token per variable, separated by spaces.
fn append_tokens(mut body: String, vars: &[String]) -> Result<String> {
    for var in vars {
        let token = placeholder_token(var)?;
        if !body.is_empty() && !body.ends_with(char::is_whitespace) {
            body.push(' ');
        }
        body.push_str(&token);
    }
    Ok(body)
}
