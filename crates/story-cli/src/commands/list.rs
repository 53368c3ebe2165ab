//! List command

use colored::Colorize;

use crate::context::CliContext;
use crate::error::Result;

/// Run the list command
pub fn run_list(ctx: &CliContext) -> Result<()> {
    let pipeline = ctx.pipeline()?;

    if pipeline.is_empty() {
        println!("No presets registered.");
        return Ok(());
    }

    for name in pipeline.names() {
        let count = pipeline.handler_count(name);
        println!(
            "{} ({} {})",
            name.green().bold(),
            count,
            if count == 1 { "handler" } else { "handlers" }
        );
        for (index, label) in pipeline.labels(name).iter().enumerate() {
            println!("  {index}. {label}");
        }
    }

    Ok(())
}
