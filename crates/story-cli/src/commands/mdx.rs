//! MDX options command

use std::sync::Arc;
use story_builder::MdxPlugin;

use crate::context::CliContext;
use crate::error::Result;

/// Run the mdx-options command
pub async fn run_mdx_options(ctx: &CliContext, id: &str) -> Result<()> {
    let plugin = MdxPlugin::new(Arc::new(ctx.pipeline()?)).await?;

    match plugin.compile_options(id).await? {
        Some(options) => println!("{}", serde_json::to_string_pretty(&options)?),
        None => println!("{id} is not handled by {}", plugin.name()),
    }

    Ok(())
}
