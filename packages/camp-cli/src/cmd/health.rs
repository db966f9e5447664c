//! Directory health check

use anyhow::{Context, Result};

use crate::context::AppContext;

pub async fn run(ctx: &AppContext) -> Result<()> {
    let base_url = ctx.directory.base_url();
    let up = ctx
        .directory
        .health()
        .await
        .with_context(|| format!("Could not reach the directory at {}", base_url))?;

    anyhow::ensure!(up, "Directory at {} reports a problem", base_url);
    ctx.print_success(&format!("Directory at {} is up", base_url));
    Ok(())
}
