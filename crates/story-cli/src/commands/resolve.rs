//! Resolve command

use serde_json::Value;

use crate::context::CliContext;
use crate::error::{CliError, Result};

/// Parse the `--default` argument; absent means `null`.
pub fn parse_default(raw: Option<&str>) -> Result<Value> {
    match raw {
        None => Ok(Value::Null),
        Some(raw) => serde_json::from_str(raw)
            .map_err(|e| CliError::user(format!("Invalid --default JSON: {e}"))),
    }
}

/// Resolve `name` and return it as pretty JSON
pub async fn resolve_to_string(
    ctx: &CliContext,
    name: &str,
    default: Option<&str>,
) -> Result<String> {
    let default = parse_default(default)?;
    let pipeline = ctx.pipeline()?;
    let value = pipeline.apply(name, default).await?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Run the resolve command
pub async fn run_resolve(ctx: &CliContext, name: &str, default: Option<&str>) -> Result<()> {
    println!("{}", resolve_to_string(ctx, name, default).await?);
    Ok(())
}
